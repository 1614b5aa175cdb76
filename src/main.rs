use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use menubot::app::App;
use menubot::config::Config;
use menubot::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting menubot controller");

    let config = Config::from_env()?;
    let bind_address = config.bind_address.clone();
    let app = Arc::new(App::new(config)?);

    info!(bind_address = %bind_address, "listening for webhook deliveries");

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, server::router(app)).await?;

    Ok(())
}
