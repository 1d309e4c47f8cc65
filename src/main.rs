mod api;
mod bot;
mod config;
mod error;
mod model;
mod scheduler;
mod service;

use crate::config::Config;
use crate::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting Votemap Live bot");

    // Blocks until the gateway shuts down
    bot::start::start_bot(config).await
}
