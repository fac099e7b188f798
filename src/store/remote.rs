//! Book store backed by a REST collection.
//!
//! `GET {base}` lists, `POST {base}` creates, `PUT {base}/{id}` updates and
//! `DELETE {base}/{id}` deletes. Bodies are JSON.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::BookStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{Book, BookPayload};
use crate::traits::{json_headers, HttpClient, Method, Response};

/// Collection endpoint used when none is configured.
pub const DEFAULT_API_URL: &str = "https://684bd07ded2578be881c8e2c.mockapi.io/api/get/books";

/// REST implementation of [`BookStore`], generic over the HTTP transport.
#[derive(Debug, Clone)]
pub struct RemoteBookStore<C: HttpClient> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> RemoteBookStore<C> {
    /// Create a store for the collection at `base_url`.
    ///
    /// Fails with [`StoreError::Configuration`] unless `base_url` is an
    /// absolute http(s) URL.
    pub fn new(client: C, base_url: &str) -> StoreResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed).map_err(|e| StoreError::Configuration {
            message: format!("Invalid store URL '{}': {}", base_url, e),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(StoreError::Configuration {
                message: format!("Store URL must use http or https: {}", base_url),
            });
        }
        Ok(Self {
            client,
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id))
    }

    /// Map a non-2xx response to a [`StoreError`], logging it.
    fn check(method: Method, url: &str, response: Response, id: Option<&str>) -> StoreResult<Response> {
        if response.is_success() {
            return Ok(response);
        }
        let err = StoreError::from_status(response.status, &response.text_lossy(), id);
        warn!(
            method = %method,
            url = %url,
            status = response.status,
            code = err.error_code(),
            "Book store request failed"
        );
        Err(err)
    }

    fn transport_error(method: Method, url: &str, err: crate::traits::HttpError) -> StoreError {
        warn!(method = %method, url = %url, error = %err, "Book store unreachable");
        StoreError::from(err)
    }
}

#[async_trait]
impl<C: HttpClient> BookStore for RemoteBookStore<C> {
    async fn list(&self) -> StoreResult<Vec<Book>> {
        let url = self.base_url.as_str();
        debug!(url = %url, "Listing books");
        let response = self
            .client
            .get(url, &json_headers())
            .await
            .map_err(|e| Self::transport_error(Method::Get, url, e))?;
        let response = Self::check(Method::Get, url, response, None)?;
        let books: Vec<Book> = response.json()?;
        debug!(count = books.len(), "Listed books");
        Ok(books)
    }

    async fn create(&self, payload: &BookPayload) -> StoreResult<Book> {
        let url = self.base_url.as_str();
        let body = serde_json::to_string(payload).map_err(|e| StoreError::Validation {
            message: e.to_string(),
        })?;
        debug!(url = %url, title = %payload.title, "Creating book");
        let response = self
            .client
            .post(url, &body, &json_headers())
            .await
            .map_err(|e| Self::transport_error(Method::Post, url, e))?;
        let response = Self::check(Method::Post, url, response, None)?;
        Ok(response.json()?)
    }

    async fn update(&self, id: &str, payload: &BookPayload) -> StoreResult<Book> {
        let url = self.record_url(id);
        let body = serde_json::to_string(payload).map_err(|e| StoreError::Validation {
            message: e.to_string(),
        })?;
        debug!(url = %url, id = %id, "Updating book");
        let response = self
            .client
            .put(&url, &body, &json_headers())
            .await
            .map_err(|e| Self::transport_error(Method::Put, &url, e))?;
        let response = Self::check(Method::Put, &url, response, Some(id))?;
        Ok(response.json()?)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let url = self.record_url(id);
        debug!(url = %url, id = %id, "Deleting book");
        let response = self
            .client
            .delete(&url, &json_headers())
            .await
            .map_err(|e| Self::transport_error(Method::Delete, &url, e))?;
        Self::check(Method::Delete, &url, response, Some(id))?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
