//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable per-method responses
//!
//! The in-memory book store doubles as a store mock; see
//! [`InMemoryBookStore`](crate::store::InMemoryBookStore).

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
