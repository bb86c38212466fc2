//! API Error Types

use thiserror::Error;

/// Errors returned by the REST client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the body could not be read/decoded
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// Envelope had no `data` where a payload was expected
    #[error("response from {url} has no data")]
    MissingData { url: String },
}

pub type ApiResult<T> = Result<T, ApiError>;
