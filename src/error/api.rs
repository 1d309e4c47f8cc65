use thiserror::Error;

/// Errors raised by or while calling the votemap status endpoint.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("Votemap status request returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The endpoint reported an in-band failure (`failed: true`), with the
    /// API-supplied error message when one was present.
    #[error("{0}")]
    Failed(String),
}
