//! Error types for the eSignLive SDK.
//!
//! Every operation returns [`EslError`]. Builders fail with
//! [`EslError::Validation`] before anything reaches the network; requests the
//! service rejects come back as [`EslError::Server`] with the server's message
//! key.

use thiserror::Error;

/// Result type for eSignLive operations.
pub type Result<T> = std::result::Result<T, EslError>;

/// Errors that can occur when using the eSignLive SDK.
#[derive(Error, Debug)]
pub enum EslError {
    /// A builder or argument check failed locally.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Name of the offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// The service answered with a non-2xx status.
    #[error("Server error ({status_code}): [{message_key}] {message}")]
    Server {
        /// Stable error identifier, e.g. `error.validation.attachments.delete.completedTransaction`.
        message_key: String,
        /// Human-readable error message.
        message: String,
        /// Technical detail, when the service provides one.
        technical: Option<String>,
        /// HTTP status code.
        status_code: u16,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reading a document from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EslError {
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EslError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the server message key if this is a server error.
    pub fn message_key(&self) -> Option<&str> {
        match self {
            EslError::Server { message_key, .. } => Some(message_key),
            _ => None,
        }
    }

    /// Returns the HTTP status code if available.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            EslError::Server { status_code, .. } => Some(*status_code),
            EslError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the service rejected the API key or session.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            EslError::Server {
                status_code: 401 | 403,
                ..
            }
        )
    }

    /// Returns true if this error was raised locally, before any request.
    pub fn is_validation(&self) -> bool {
        matches!(self, EslError::Validation { .. })
    }
}
