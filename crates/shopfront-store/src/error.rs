//! # Persistence Error Types

use thiserror::Error;

/// Errors from the local persistence layer.
///
/// Note the asymmetry: SAVE failures are errors the caller sees, while
/// LOAD failures (corrupt or incompatible payloads) are swallowed into a
/// default value by policy and only show up as warnings in the log.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure while writing a slot.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Payload could not be serialized.
    #[error("could not serialize state: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No usable application data directory on this platform.
    #[error("no application data directory available")]
    NoDataDir,
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
