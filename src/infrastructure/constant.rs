use once_cell::sync::Lazy;

use crate::core::configure::app::AppConfig;

pub const ENV_PREFIX: &str = "APP";
pub const SETTINGS_DIR: &str = "settings";

pub const DEFAULT_PAGE_LIMIT: u64 = 10;
pub const MAX_PAGE_LIMIT: u64 = 100;
/// SQL drivers bind OFFSET as a signed 64-bit integer.
pub const MAX_PAGE_OFFSET: u64 = i64::MAX as u64;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::from_env().expect("Failed to read configuration"));
