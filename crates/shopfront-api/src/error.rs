//! # API Error Types
//!
//! Error taxonomy for storefront API calls.
//!
//! ## Taxonomy
//! - [`ApiError::Transport`] - the request never produced a usable response
//!   (DNS, connect, TLS, read failures)
//! - [`ApiError::Status`] - the server answered with a non-2xx status
//! - [`ApiError::Auth`] - login was rejected; carries the server-provided
//!   message verbatim when one is present
//! - [`ApiError::Decode`] - the body did not match the expected shape
//!
//! There is deliberately no retry or status-code-specific recovery here:
//! callers surface a generic per-operation message and move on.

use thiserror::Error;

/// Errors from storefront API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL is not usable.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Transport-level failure before or during the exchange.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16 },

    /// Login rejected. The message is the server's own wording when the
    /// error body parses, else a generic fallback.
    #[error("{message}")]
    Auth { message: String },

    /// Response body could not be decoded into the expected type.
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Convenience type alias for Results with ApiError.
pub type ApiResult<T> = Result<T, ApiError>;
