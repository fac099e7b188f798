//! Errors raised by book store calls.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Failure of a list/create/update/delete call.
///
/// A store error never corrupts the controller's record set: the call site
/// reports it and leaves local state as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The request never produced a response.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The store answered with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The record addressed by `id` does not exist in the store.
    #[error("Book not found: {id}")]
    NotFound { id: String },

    /// The store rejected the submitted fields.
    #[error("Rejected by store: {message}")]
    Validation { message: String },

    /// The response body could not be decoded.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// The store could not be set up (bad URL, unreadable snapshot).
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl StoreError {
    /// Map a non-2xx status to an error.
    ///
    /// `id` is the record the request addressed, used for 404s.
    pub fn from_status(status: u16, body: &str, id: Option<&str>) -> Self {
        let message = summarize_body(body);
        match status {
            404 => StoreError::NotFound {
                id: id.unwrap_or_default().to_string(),
            },
            400 | 422 => StoreError::Validation { message },
            _ => StoreError::Server { status, message },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::Network { .. } => ErrorCategory::Network,
            StoreError::Server { .. } | StoreError::InvalidResponse { .. } => ErrorCategory::Server,
            StoreError::NotFound { .. } => ErrorCategory::NotFound,
            StoreError::Validation { .. } => ErrorCategory::Validation,
            StoreError::Configuration { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            StoreError::Server { status, .. } => *status >= 500 || *status == 429 || *status == 408,
            other => other.category().is_retryable(),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Network { .. } => "STORE_NETWORK",
            StoreError::Server { .. } => "STORE_SERVER",
            StoreError::NotFound { .. } => "STORE_NOT_FOUND",
            StoreError::Validation { .. } => "STORE_VALIDATION",
            StoreError::InvalidResponse { .. } => "STORE_INVALID_RESPONSE",
            StoreError::Configuration { .. } => "STORE_CONFIG",
        }
    }

    /// Message suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Network { .. } => "Could not reach the book store.".to_string(),
            StoreError::Server { status, .. } => format!("The book store returned an error ({}).", status),
            StoreError::NotFound { .. } => "That book no longer exists.".to_string(),
            StoreError::Validation { message } if !message.is_empty() => {
                format!("The book store rejected the book: {}", message)
            }
            StoreError::Validation { .. } => "The book store rejected the book.".to_string(),
            StoreError::InvalidResponse { .. } => {
                "The book store sent a response we could not read.".to_string()
            }
            StoreError::Configuration { message } => message.clone(),
        }
    }
}

impl From<HttpError> for StoreError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::InvalidUrl(message) => StoreError::Configuration {
                message: format!("Invalid store URL: {}", message),
            },
            other => StoreError::Network {
                message: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::InvalidResponse {
            message: err.to_string(),
        }
    }
}

/// Keep error bodies to one short line; HTML error pages are not useful in a toast.
fn summarize_body(body: &str) -> String {
    let line = body.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    let mut summary: String = line.chars().take(120).collect();
    if line.chars().count() > 120 {
        summary.push('…');
    }
    summary
}
