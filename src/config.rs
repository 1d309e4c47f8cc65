use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_API_ENDPOINT: &str = "http://your-api-url/get_votemap_status";
const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 30;

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub discord_channel_id: u64,

    pub api_endpoint: String,
    pub api_key: Option<String>,

    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let channel_id_raw = std::env::var("DISCORD_CHANNEL_ID")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_CHANNEL_ID".to_string()))?;
        let discord_channel_id = channel_id_raw.parse::<u64>().map_err(|e| {
            ConfigError::InvalidEnvVar("DISCORD_CHANNEL_ID".to_string(), e.to_string())
        })?;

        let poll_interval_seconds = match std::env::var("POLL_INTERVAL_SECONDS") {
            Ok(value) => value.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("POLL_INTERVAL_SECONDS".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_POLL_INTERVAL_SECONDS,
        };

        Ok(Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            discord_channel_id,
            api_endpoint: std::env::var("API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string()),
            // API_KEY is enforced in the ready handler, not here (exit code 1
            // once the Discord connection is up).
            api_key: std::env::var("API_KEY").ok(),
            poll_interval: Duration::from_secs(poll_interval_seconds),
        })
    }
}
