//! Votemap status API client.
//!
//! Polls the game server's votemap status endpoint with a static bearer token.
//! The endpoint reports failures in-band (`failed: true` with an optional
//! `error` message) in addition to ordinary HTTP failures; both surface as
//! errors here so the caller can distinguish "no maps" from "poll failed".

use serenity::async_trait;

use crate::{
    error::{api::ApiError, AppError},
    model::votemap::{VotemapSnapshot, VotemapStatusResponse},
};

/// Source of votemap snapshots.
///
/// The board service polls through this trait so the HTTP layer can be
/// replaced with a scripted source in tests.
#[async_trait]
pub trait VotemapStatusSource: Send + Sync {
    /// Fetches the current votemap snapshot.
    ///
    /// # Returns
    /// - `Ok(VotemapSnapshot)` - Current snapshot; empty when no maps are up for vote
    /// - `Err(AppError)` - Network, HTTP status, decode, or in-band API failure
    async fn fetch_status(&self) -> Result<VotemapSnapshot, AppError>;
}

/// Votemap status client backed by reqwest.
pub struct VotemapApiClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl VotemapApiClient {
    /// Creates a new client for the given endpoint and bearer token.
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            endpoint,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl VotemapStatusSource for VotemapApiClient {
    async fn fetch_status(&self) -> Result<VotemapSnapshot, AppError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()).into());
        }

        let status: VotemapStatusResponse = response.json().await?;

        Ok(status.into_snapshot()?)
    }
}
