use std::time::Duration;

use address_migration::{Migrator, MigratorTrait};
use log::info;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::core::configure::app::AppConfig;
use crate::infrastructure::error::AppResult;

pub type DatabaseClient = DatabaseConnection;

pub trait DatabaseClientExt: Sized {
    async fn build_from_config(config: &AppConfig) -> AppResult<Self>;
    async fn run_migrations(&self) -> AppResult<()>;
}

impl DatabaseClientExt for DatabaseClient {
    async fn build_from_config(config: &AppConfig) -> AppResult<Self> {
        let mut options = ConnectOptions::new(config.db.get_url());
        options
            .max_connections(config.db.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.db.connect_timeout_secs))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        info!("Connected to database, pool size: {}", config.db.max_connections);
        Ok(db)
    }

    async fn run_migrations(&self) -> AppResult<()> {
        Migrator::up(self, None).await?;
        info!("Database migrations are up to date");
        Ok(())
    }
}
