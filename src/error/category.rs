//! Error category classification.
//!
//! Categories drive how a failure is surfaced: whether a retry makes sense and
//! which hint accompanies the toast.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout. Transient.
    Network,

    /// Non-2xx from the store or a body we could not decode.
    Server,

    /// The target record no longer exists in the store.
    NotFound,

    /// Field values rejected, client-side or by the store.
    Validation,

    /// Missing or malformed settings (bad URL, unreadable snapshot).
    Configuration,
}

impl ErrorCategory {
    /// Returns true if retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Suggested next step, shown after the error message.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your connection and try again.",
            ErrorCategory::Server => "The server had a problem. Try again shortly.",
            ErrorCategory::NotFound => "The book was removed elsewhere. Press r to reload.",
            ErrorCategory::Validation => "Check the book's fields and try again.",
            ErrorCategory::Configuration => "Check the store URL and snapshot settings.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
