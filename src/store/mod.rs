//! Book store abstraction and its implementations.
//!
//! The dashboard controller only sees [`BookStore`]. Two configurations exist:
//!
//! - [`RemoteBookStore`] - REST/JSON collection over any [`HttpClient`](crate::traits::HttpClient)
//! - [`InMemoryBookStore`] - local snapshot, used offline and in tests

mod memory;
mod remote;

pub use memory::InMemoryBookStore;
pub use remote::{RemoteBookStore, DEFAULT_API_URL};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::adapters::ReqwestHttpClient;
use crate::config::{DashboardConfig, StoreBackend};
use crate::error::{StoreError, StoreResult};
use crate::models::{Book, BookPayload};

/// Persistence for book records.
///
/// Every call either succeeds completely or fails without changing the store
/// as far as the caller can tell.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Fetch every record.
    async fn list(&self) -> StoreResult<Vec<Book>>;

    /// Store a new record; the store assigns the id.
    async fn create(&self, payload: &BookPayload) -> StoreResult<Book>;

    /// Replace the editable fields of record `id`.
    async fn update(&self, id: &str, payload: &BookPayload) -> StoreResult<Book>;

    /// Remove record `id`.
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Short label for the header and logs.
    fn describe(&self) -> String;
}

/// Build the store selected by `config`.
pub fn build_store(config: &DashboardConfig) -> Result<Arc<dyn BookStore>, StoreError> {
    match config.backend {
        StoreBackend::Remote => {
            let client =
                ReqwestHttpClient::with_timeout(Duration::from_secs(config.request_timeout_secs))
                    .map_err(|e| StoreError::Configuration {
                        message: e.to_string(),
                    })?;
            let store = RemoteBookStore::new(client, &config.api_url)?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            let store = match &config.snapshot_path {
                Some(path) => InMemoryBookStore::from_snapshot_file(path)?,
                None => InMemoryBookStore::builtin()?,
            };
            Ok(Arc::new(store))
        }
    }
}
