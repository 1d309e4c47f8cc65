//! Error types for the votemap live bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors. Most
//! variants use `#[from]` for automatic conversion so fallible call sites can
//! propagate with `?`; the periodic refresh cycle logs these errors at its
//! boundary instead of aborting the process.

pub mod api;
pub mod config;

use thiserror::Error;

use crate::error::{api::ApiError, config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the bot. Configuration errors
/// are fatal at startup; everything else is logged where it happens and the
/// next scheduled tick carries on.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal: the process exits before connecting to Discord.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Error reported by the votemap status endpoint.
    ///
    /// Logged by the refresh cycle, which then renders an empty board.
    #[error(transparent)]
    ApiErr(#[from] ApiError),

    /// HTTP client request error from reqwest.
    ///
    /// Covers network failures and body decode failures during status polls.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised when posting or editing the board
    /// message fails, or when the gateway connection cannot be established.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    ///
    /// Raised when the refresh job cannot be created or started.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
