//! Error types for the recommendation service client.

use thiserror::Error;

/// Errors that can occur when querying the recommendation service.
///
/// The variants map onto the failure classes the caller has to treat
/// differently: a non-success answer from the service (`Status`) carries a
/// user-facing message, everything else means the service could not be
/// reached or understood at all.
#[derive(Error, Debug)]
pub enum ApiClientError {
    /// The service answered with a non-success HTTP status.
    #[error("service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never completed (connection refused, DNS failure,
    /// timeout, or a body that could not be read).
    #[error("failed to reach recommendation service: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response carried a body that is not a recommendation
    /// payload.
    #[error("invalid response from recommendation service: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Convenience alias for Results in this crate.
pub type Result<T> = std::result::Result<T, ApiClientError>;
