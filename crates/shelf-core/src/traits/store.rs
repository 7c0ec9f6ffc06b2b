//! Book store trait.

use async_trait::async_trait;

use crate::types::{BookRecord, Isbn, StoreUrl};
use crate::Result;

/// The remote service of record for book persistence.
///
/// Every call is a single request. Implementations must not retry and must
/// not serve list reads from a cache.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Returns the base URL of this store.
    fn url(&self) -> &StoreUrl;

    /// Fetch every book, in the store's order.
    async fn list_books(&self) -> Result<Vec<BookRecord>>;

    /// Fetch a single book by ISBN.
    async fn get_book(&self, isbn: &Isbn) -> Result<BookRecord>;

    /// Create a new book.
    async fn create_book(&self, book: &BookRecord) -> Result<()>;

    /// Replace the inventory count of a book.
    async fn update_inventory(&self, isbn: &Isbn, inventory: u32) -> Result<()>;

    /// Delete a book.
    async fn delete_book(&self, isbn: &Isbn) -> Result<()>;
}
