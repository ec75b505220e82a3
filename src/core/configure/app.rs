use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::infrastructure::constant::{ENV_PREFIX, SETTINGS_DIR};
use crate::infrastructure::error::{AppError, AppResult};

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub profile: String,
    pub server: ServerConfig,
    pub db: DatabaseConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn get_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn get_socket_addr(&self) -> AppResult<SocketAddr> {
        self.get_addr()
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                AppError::IoError(io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("Cannot resolve {}", self.get_addr()),
                ))
            })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn get_url(&self) -> String {
        self.url.clone()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub level: String,
}

impl AppConfig {
    /// Layered load: built-in defaults, `settings/base.toml`,
    /// `settings/{profile}.toml`, then `APP_*` environment variables
    /// (nested keys separated by `__`, e.g. `APP_DB__URL`).
    pub fn from_env() -> AppResult<Self> {
        let profile =
            std::env::var(format!("{ENV_PREFIX}_PROFILE")).unwrap_or_else(|_| "dev".to_string());
        Self::load(&profile, environment())
    }

    fn load(profile: &str, environment: Environment) -> AppResult<Self> {
        let config = Config::builder()
            .set_default("profile", profile)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("db.url", "sqlite://addresses.db?mode=rwc")?
            .set_default("db.max_connections", 10)?
            .set_default("db.connect_timeout_secs", 8)?
            .set_default("log.level", "info")?
            .add_source(File::with_name(&format!("{SETTINGS_DIR}/base")).required(false))
            .add_source(File::with_name(&format!("{SETTINGS_DIR}/{profile}")).required(false))
            .add_source(environment)
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
