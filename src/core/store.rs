//! # Catalog Store
//!
//! Session-lifetime in-memory cache of the book list, synchronized against
//! the catalog API. This is the single source of truth the views read from.
//!
//! ```text
//! CatalogStore
//! ├── api: Arc<dyn CatalogApi>   // sole caller of the network layer
//! ├── books: Vec<Book>           // insertion order = fetch/creation order
//! └── error: Option<String>      // most recent operation's banner text
//! ```
//!
//! Local state is mutated only after server confirmation, never
//! speculatively, so a failed mutation leaves the cache exactly as it was.
//! API errors never escape: every failure becomes one of the fixed
//! user-facing messages below and the underlying error is logged.

use std::sync::Arc;

use log::{info, warn};

use crate::api::{Book, CatalogApi};

pub const FETCH_FAILED: &str = "Failed to fetch books. Please try again later.";
pub const CREATE_FAILED: &str = "Failed to add book. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update book. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete book. Please try again.";

pub struct CatalogStore {
    api: Arc<dyn CatalogApi>,
    pub books: Vec<Book>,
    pub error: Option<String>,
}

impl CatalogStore {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            books: Vec::new(),
            error: None,
        }
    }

    /// One-shot initial fetch. On success the local list is replaced
    /// wholesale; on failure it stays empty and the banner is set. Not
    /// retried automatically — the user re-attempts via the refresh key.
    pub async fn initialize(&mut self) {
        match self.api.list_books().await {
            Ok(books) => {
                info!("Fetched {} books", books.len());
                self.books = books;
                self.error = None;
            }
            Err(e) => {
                warn!("initialize failed: {e}");
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
    }

    /// Creates `draft` on the server and appends the server's canonical
    /// record. The draft's provisional id is discarded in favor of whatever
    /// the server returns; the draft is never added speculatively.
    pub async fn add_book(&mut self, draft: Book) {
        match self.api.create_book(&draft).await {
            Ok(created) => {
                info!("Created book {} ({:?})", created.id, created.title);
                self.books.push(created);
                self.error = None;
            }
            Err(e) => {
                warn!("add_book failed: {e}");
                self.error = Some(CREATE_FAILED.to_string());
            }
        }
    }

    /// Updates a book on the server and replaces the local entry whose id
    /// matches the returned record.
    pub async fn edit_book(&mut self, updated: Book) {
        match self.api.update_book(&updated).await {
            Ok(canonical) => {
                info!("Updated book {}", canonical.id);
                for book in &mut self.books {
                    if book.id == canonical.id {
                        *book = canonical;
                        break;
                    }
                }
                self.error = None;
            }
            Err(e) => {
                warn!("edit_book failed: {e}");
                self.error = Some(UPDATE_FAILED.to_string());
            }
        }
    }

    /// Deletes a book by id. An id not present locally is a no-op that
    /// does not call the API: once removed, removed. The local entry is
    /// only dropped after the server confirms.
    pub async fn delete_book(&mut self, id: i64) {
        if !self.books.iter().any(|b| b.id == id) {
            return;
        }
        match self.api.delete_book(id).await {
            Ok(()) => {
                info!("Deleted book {id}");
                self.books.retain(|b| b.id != id);
                self.error = None;
            }
            Err(e) => {
                warn!("delete_book failed: {e}");
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    /// Resolves a single record from the current snapshot. Used by the
    /// detail view; a miss is the view's local "not found", not an error.
    pub fn book(&self, id: i64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::{StubApi, test_book};

    fn store_with(stub: StubApi) -> (CatalogStore, Arc<StubApi>) {
        let api = Arc::new(stub);
        (CatalogStore::new(api.clone()), api)
    }

    #[tokio::test]
    async fn test_initialize_replaces_list() {
        let (mut store, _api) = store_with(StubApi::with_books(vec![test_book(1, "Dune")]));
        store.initialize().await;

        assert_eq!(store.books.len(), 1);
        assert_eq!(store.books[0].id, 1);
        assert_eq!(store.books[0].title, "Dune");
        assert_eq!(store.books[0].author, "Herbert");
        assert_eq!(store.books[0].year, 1965);
        assert!(store.error.is_none());
    }

    #[tokio::test]
    async fn test_initialize_failure_sets_banner_and_leaves_list_empty() {
        let (mut store, _api) =
            store_with(StubApi::failing(|| ApiError::Fetch { status: 500 }));
        store.initialize().await;

        assert!(store.books.is_empty());
        assert_eq!(store.error.as_deref(), Some(FETCH_FAILED));
    }

    #[tokio::test]
    async fn test_add_book_adopts_server_canonical_id() {
        // Server reassigns the provisional id: the returned record wins.
        let stub = StubApi::new().reassigning_ids(42);
        let (mut store, _api) = store_with(stub);

        let mut draft = test_book(0, "Dune");
        draft.id = crate::api::types::provisional_id();
        let provisional = draft.id;
        store.add_book(draft).await;

        assert_eq!(store.books.len(), 1);
        assert_eq!(store.books[0].id, 42);
        assert_ne!(store.books[0].id, provisional);
        assert_eq!(store.books[0].title, "Dune");
        assert!(store.error.is_none());
    }

    #[tokio::test]
    async fn test_add_book_failure_leaves_list_unchanged() {
        let (mut store, _api) =
            store_with(StubApi::failing(|| ApiError::Create { status: 400 }));
        store.add_book(test_book(1, "Dune")).await;

        assert!(store.books.is_empty());
        assert_eq!(store.error.as_deref(), Some(CREATE_FAILED));
    }

    #[tokio::test]
    async fn test_add_book_success_clears_previous_error() {
        let (mut store, _api) = store_with(StubApi::new());
        store.error = Some(CREATE_FAILED.to_string());

        store.add_book(test_book(1, "Dune")).await;

        assert_eq!(store.books.len(), 1);
        assert!(store.error.is_none());
    }

    #[tokio::test]
    async fn test_edit_book_replaces_matching_entry() {
        let (mut store, _api) = store_with(StubApi::new());
        store.books = vec![test_book(1, "Dune"), test_book(2, "Hyperion")];

        let mut revised = test_book(1, "Dune (Revised)");
        revised.updated_at = "2024-06-01T12:00:00.000Z".to_string();
        store.edit_book(revised).await;

        assert_eq!(store.books.len(), 2);
        assert_eq!(store.books[0].title, "Dune (Revised)");
        assert_eq!(store.books[0].updated_at, "2024-06-01T12:00:00.000Z");
        assert_eq!(store.books[1].title, "Hyperion");
        assert!(store.error.is_none());
    }

    #[tokio::test]
    async fn test_edit_book_failure_leaves_entry_unchanged() {
        let (mut store, _api) =
            store_with(StubApi::failing(|| ApiError::Update { status: 500 }));
        store.books = vec![test_book(1, "Dune")];

        store.edit_book(test_book(1, "Dune (Revised)")).await;

        assert_eq!(store.books[0].title, "Dune");
        assert_eq!(store.error.as_deref(), Some(UPDATE_FAILED));
    }

    #[tokio::test]
    async fn test_delete_book_removes_entry() {
        let (mut store, _api) = store_with(StubApi::new());
        store.books = vec![test_book(1, "Dune"), test_book(2, "Hyperion")];

        store.delete_book(1).await;

        assert_eq!(store.books.len(), 1);
        assert!(store.book(1).is_none());
        assert!(store.error.is_none());
    }

    #[tokio::test]
    async fn test_delete_absent_id_skips_api_call() {
        let (mut store, api) = store_with(StubApi::new());
        store.books = vec![test_book(1, "Dune")];

        store.delete_book(1).await;
        assert_eq!(api.delete_calls(), 1);

        // Second delete of the same id: already gone locally, no second call.
        store.delete_book(1).await;
        assert_eq!(api.delete_calls(), 1);
        assert!(store.books.is_empty());
        assert!(store.error.is_none());
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_list_unchanged() {
        let (mut store, _api) =
            store_with(StubApi::failing(|| ApiError::Delete { status: 500 }));
        store.books = vec![test_book(1, "Dune")];

        store.delete_book(1).await;

        assert_eq!(store.books.len(), 1);
        assert_eq!(store.error.as_deref(), Some(DELETE_FAILED));
    }

    #[tokio::test]
    async fn test_ids_stay_unique_across_mutations() {
        let (mut store, _api) = store_with(StubApi::with_books(vec![
            test_book(1, "Dune"),
            test_book(2, "Hyperion"),
        ]));
        store.initialize().await;
        store.add_book(test_book(3, "Foundation")).await;
        store.edit_book(test_book(2, "Hyperion (Revised)")).await;
        store.delete_book(1).await;

        let mut ids: Vec<i64> = store.books.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.books.len());
    }
}
