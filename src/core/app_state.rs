use crate::application::address::address_service::AddressService;
use crate::core::configure::app::AppConfig;
use crate::infrastructure::error::AppResult;
use crate::infrastructure::persistence::database::{DatabaseClient, DatabaseClientExt};

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: Arc<DatabaseClient>,
    pub address_service: Arc<AddressService>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let config = Arc::new(config);

        let db = Arc::new(DatabaseClient::build_from_config(&config).await?);
        db.run_migrations().await?;
        let address_service = Arc::new(AddressService::new());

        Ok(Self {
            config,
            db,
            address_service,
        })
    }
}
