use address_service::core::http::server::AppServer;
use address_service::infrastructure::constant::CONFIG;
use address_service::infrastructure::error::AppResult;
use env_logger::Env;
use log::{error, info};

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = CONFIG.clone();
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log.level.as_str()))
        .format_target(true)
        .init();

    info!("The initialization of logging was successful! Profile: {}", config.profile);
    let server = AppServer::new(config).await?;
    info!("Starting server...");

    let server_task = tokio::spawn(async {
        let result = server.run().await;
        if let Err(e) = &result {
            error!("HTTP Server error: {:?}", e);
        }
        result
    });

    server_task.await?
}
