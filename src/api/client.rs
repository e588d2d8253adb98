//! HTTP client for the catalog API.
//!
//! Four operations, each mapping one-to-one onto an HTTP verb against the
//! configured base address. Any non-2xx status is treated as total failure
//! for that operation; no response body is parsed on failure and 4xx is
//! not distinguished from 5xx. No retries, no explicit timeout (the
//! transport default applies).

use std::fmt;

use async_trait::async_trait;
use log::{debug, warn};

use super::types::Book;

/// Errors from the catalog API, one variant per logical operation.
/// The store converts these to fixed user-facing messages; the status
/// codes are logged, not surfaced.
#[derive(Debug)]
pub enum ApiError {
    /// GET /books returned a non-success status.
    Fetch { status: u16 },
    /// POST /books returned a non-success status.
    Create { status: u16 },
    /// PUT /books/{id} returned a non-success status.
    Update { status: u16 },
    /// DELETE /books/{id} returned a non-success status.
    Delete { status: u16 },
    /// Transport-level failure (connection refused, DNS, timeout).
    Network(String),
    /// The server responded 2xx but the body was not a valid payload.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Fetch { status } => write!(f, "fetch failed (HTTP {status})"),
            ApiError::Create { status } => write!(f, "create failed (HTTP {status})"),
            ApiError::Update { status } => write!(f, "update failed (HTTP {status})"),
            ApiError::Delete { status } => write!(f, "delete failed (HTTP {status})"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The catalog API surface. The catalog store is the only caller; views
/// never touch this directly. Trait-shaped so tests can substitute a stub.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetches the full book list.
    async fn list_books(&self) -> Result<Vec<Book>, ApiError>;

    /// Creates a book from the draft and returns the server's canonical
    /// version (the server may reassign fields, including the id).
    async fn create_book(&self, book: &Book) -> Result<Book, ApiError>;

    /// Updates the book addressed by its id and returns the canonical
    /// version.
    async fn update_book(&self, book: &Book) -> Result<Book, ApiError>;

    /// Deletes the book addressed by id. No response payload.
    async fn delete_book(&self, id: i64) -> Result<(), ApiError>;
}

/// Default base address: the local catalog server on its fixed port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// reqwest-backed implementation of [`CatalogApi`].
pub struct HttpCatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogClient {
    pub fn new(base_url: Option<String>) -> Self {
        let env_url = std::env::var("SHELF_BASE_URL").ok();
        let final_url = base_url
            .or(env_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url: final_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        debug!("GET {}/books", self.base_url);
        let response = self
            .client
            .get(format!("{}/books", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("list_books response status: {status}");
        if !status.is_success() {
            warn!("list_books failed: HTTP {status}");
            return Err(ApiError::Fetch {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<Book>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn create_book(&self, book: &Book) -> Result<Book, ApiError> {
        debug!("POST {}/books (provisional id {})", self.base_url, book.id);
        let response = self
            .client
            .post(format!("{}/books", self.base_url))
            .json(book)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("create_book response status: {status}");
        if !status.is_success() {
            warn!("create_book failed: HTTP {status}");
            return Err(ApiError::Create {
                status: status.as_u16(),
            });
        }

        response
            .json::<Book>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn update_book(&self, book: &Book) -> Result<Book, ApiError> {
        debug!("PUT {}/books/{}", self.base_url, book.id);
        let response = self
            .client
            .put(format!("{}/books/{}", self.base_url, book.id))
            .json(book)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("update_book response status: {status}");
        if !status.is_success() {
            warn!("update_book failed: HTTP {status}");
            return Err(ApiError::Update {
                status: status.as_u16(),
            });
        }

        response
            .json::<Book>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn delete_book(&self, id: i64) -> Result<(), ApiError> {
        debug!("DELETE {}/books/{id}", self.base_url);
        let response = self
            .client
            .delete(format!("{}/books/{id}", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("delete_book response status: {status}");
        if !status.is_success() {
            warn!("delete_book failed: HTTP {status}");
            return Err(ApiError::Delete {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_url_wins() {
        let client = HttpCatalogClient::new(Some("http://example.test:9000".to_string()));
        assert_eq!(client.base_url, "http://example.test:9000");
    }

    #[test]
    fn test_error_display_carries_status() {
        let err = ApiError::Create { status: 422 };
        assert_eq!(err.to_string(), "create failed (HTTP 422)");
    }
}
