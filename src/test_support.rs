//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::api::{ApiError, Book, CatalogApi};

/// A programmable in-memory [`CatalogApi`] for store tests.
///
/// The default behavior mimics a well-behaved server: `list_books` returns
/// the seeded list, writes echo the request back, deletes succeed. A stub
/// can instead be configured to fail every call, or to reassign created
/// ids the way a server with its own id scheme would.
pub struct StubApi {
    books: Vec<Book>,
    fail_with: Option<fn() -> ApiError>,
    assign_id: Option<i64>,
    delete_calls: AtomicUsize,
}

impl StubApi {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            fail_with: None,
            assign_id: None,
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// A stub whose `list_books` returns the given records.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books,
            ..Self::new()
        }
    }

    /// A stub where every operation fails with the given error.
    pub fn failing(err: fn() -> ApiError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::new()
        }
    }

    /// Makes `create_book` return the draft with this server-assigned id
    /// instead of echoing the provisional one.
    pub fn reassigning_ids(mut self, id: i64) -> Self {
        self.assign_id = Some(id);
        self
    }

    /// Number of times `delete_book` has been invoked.
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        match self.fail_with {
            Some(err) => Err(err()),
            None => Ok(()),
        }
    }
}

impl Default for StubApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogApi for StubApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.check_failure()?;
        Ok(self.books.clone())
    }

    async fn create_book(&self, book: &Book) -> Result<Book, ApiError> {
        self.check_failure()?;
        let mut created = book.clone();
        if let Some(id) = self.assign_id {
            created.id = id;
        }
        Ok(created)
    }

    async fn update_book(&self, book: &Book) -> Result<Book, ApiError> {
        self.check_failure()?;
        Ok(book.clone())
    }

    async fn delete_book(&self, _id: i64) -> Result<(), ApiError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(())
    }
}

/// A minimal book fixture.
pub fn test_book(id: i64, title: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: "Herbert".to_string(),
        year: 1965,
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        updated_at: "2024-01-01T00:00:00.000Z".to_string(),
        deleted_at: None,
        genre: None,
        isbn: None,
        publisher: None,
        description: None,
    }
}
