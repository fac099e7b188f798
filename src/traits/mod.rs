//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP operations used by the remote book store
//! - [`BookStore`](crate::store::BookStore) lives in [`crate::store`] next to its implementations

pub mod http;

pub use http::{json_headers, Headers, HttpClient, HttpError, Method, Response};
