//! Error handling for the dashboard.
//!
//! - **Error Categories**: [`ErrorCategory`] classifies failures for retry and messaging
//! - **Store Errors**: [`StoreError`] covers every failure of a book store call
//! - **Validation Errors**: [`ValidationError`] carries per-field form errors
//!
//! Filtering and pagination are total and have no error type. Store and
//! validation errors are caught at the controller and shown as toasts or
//! inline field errors; none of them ends the session.
//!
//! | Category | Raised by | Retryable |
//! |----------|-----------|-----------|
//! | Network | transport failure | Yes |
//! | Server | non-2xx, undecodable body | Yes (5xx) |
//! | NotFound | 404 on update/delete | No |
//! | Validation | form check, 400/422 | No |
//! | Configuration | bad URL or snapshot | No |

mod category;
mod store;
mod validation;

pub use category::ErrorCategory;
pub use store::StoreError;
pub use validation::ValidationError;

/// Result alias for store calls.
pub type StoreResult<T> = Result<T, StoreError>;
