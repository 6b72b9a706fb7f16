//! Error types for the geocoding client.
//!
//! # Design
//! One variant per stage of a lookup: building the query, moving bytes,
//! checking the HTTP status, decoding JSON, and checking the service-level
//! status. `ZERO_RESULTS` is not represented here; it is a successful
//! response with no results.

use thiserror::Error;

use crate::types::Status;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by `build_parameters` and `GeocodeClient` lookups.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request names neither an address nor a location, or names both.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The transport could not complete the exchange (DNS, connect, TLS, I/O).
    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body was not a valid geocoding payload.
    #[error("decoding response failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service reported a failure status inside a 2xx response.
    #[error("lookup failed ({status}): {message}")]
    Service { status: Status, message: String },
}

impl ApiError {
    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        ApiError::Transport(err.into())
    }
}
