//! # Command Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shopfront                              │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('create_product')                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, CommandError>                                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation failed? ── field errors, no network call ──┐        │  │
//! │  │         │                                              │        │  │
//! │  │         ▼                                              ▼        │  │
//! │  │  API failed? ── generic per-operation message ── CommandError ─►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Frontend renders the error as a transient, non-blocking banner;        │
//! │  validation errors attach per-field via `fields`.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;
use shopfront_api::ApiError;
use shopfront_core::{CoreError, ValidationError};
use shopfront_store::StoreError;

/// Error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "price must be greater than 0",
///   "fields": [{ "field": "price", "message": "price must be greater than 0" }]
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field messages for form validation failures; empty otherwise
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// One validation message, scoped to a form field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed; nothing was sent to the network
    ValidationError,

    /// The API call failed (transport or non-2xx)
    NetworkError,

    /// Login rejected or no session where one is required
    AuthError,

    /// Local persistence failed
    StorageError,

    /// Anything else
    Internal,
}

impl CommandError {
    /// Creates a new command error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CommandError {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: u64) -> Self {
        CommandError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a validation error carrying one message per invalid field.
    pub fn validation_fields(errors: Vec<ValidationError>) -> Self {
        let fields: Vec<FieldError> = errors
            .iter()
            .map(|e| FieldError {
                field: e.field().to_string(),
                message: e.to_string(),
            })
            .collect();

        CommandError {
            code: ErrorCode::ValidationError,
            message: "Please fix the highlighted fields".to_string(),
            fields,
        }
    }

    /// Creates a network error with the operation's user-facing message.
    pub fn network(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::NetworkError, message)
    }

    /// Creates an auth error.
    pub fn auth(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::AuthError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::Internal, message)
    }
}

/// Converts API client errors to command errors.
///
/// Non-auth failures deliberately collapse to a generic network error: the
/// UI shows one message per operation, not status-code-specific handling.
/// Commands that want a friendlier operation-specific message map the error
/// themselves before this conversion applies.
impl From<ApiError> for CommandError {
    fn from(err: ApiError) -> Self {
        match err {
            // Server wording passes through verbatim for login rejections
            ApiError::Auth { message } => CommandError::auth(message),
            ApiError::Transport(e) => {
                tracing::warn!(error = %e, "transport failure");
                CommandError::network("Could not reach the store")
            }
            ApiError::Status { status } => {
                tracing::warn!(status, "API returned an error status");
                CommandError::network("The store returned an error")
            }
            ApiError::Decode(e) => {
                tracing::error!(error = %e, "unexpected API response shape");
                CommandError::network("The store returned an unexpected response")
            }
            ApiError::InvalidBaseUrl(url) => {
                tracing::error!(%url, "invalid API base URL");
                CommandError::internal("Store API is misconfigured")
            }
        }
    }
}

/// Converts core errors to command errors.
impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LineNotFound(id) => CommandError::not_found("Cart line", id),
            CoreError::Validation(e) => CommandError::validation_fields(vec![e]),
        }
    }
}

/// Converts persistence errors to command errors.
impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "persistence failure");
        CommandError::new(ErrorCode::StorageError, "Could not save your changes")
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_fields_carry_field_names() {
        let err = CommandError::validation_fields(vec![
            ValidationError::Required { field: "title" },
            ValidationError::MustBePositive { field: "price" },
        ]);

        assert_eq!(err.fields.len(), 2);
        assert_eq!(err.fields[0].field, "title");
        assert_eq!(err.fields[1].field, "price");
    }

    #[test]
    fn test_auth_error_keeps_server_message() {
        let err: CommandError = ApiError::Auth {
            message: "username or password is incorrect".to_string(),
        }
        .into();

        assert!(matches!(err.code, ErrorCode::AuthError));
        assert_eq!(err.message, "username or password is incorrect");
    }

    #[test]
    fn test_serialized_shape() {
        let err = CommandError::not_found("Product", 9);
        let value = serde_json::to_value(&err).unwrap();

        assert_eq!(value["code"], "NOT_FOUND");
        assert_eq!(value["message"], "Product not found: 9");
        // No empty fields array cluttering the payload
        assert!(value.get("fields").is_none());
    }
}
