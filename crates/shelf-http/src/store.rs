//! HTTP-backed book store.

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, instrument};

use shelf_core::traits::BookStore;
use shelf_core::types::{BookRecord, InventoryUpdate, Isbn, StoreUrl};
use shelf_core::{Result, StoreConfig};

use crate::client::RestClient;
use crate::endpoints::{ADD, BOOKS, DELETE, UPDATE};

/// A network-backed book store speaking the bookstore REST API.
#[derive(Debug, Clone)]
pub struct HttpBookStore {
    client: RestClient,
}

impl HttpBookStore {
    /// Create a store client for the given base URL.
    pub fn new(url: StoreUrl) -> Result<Self> {
        Ok(Self {
            client: RestClient::new(url)?,
        })
    }

    /// Create a store client from host/port configuration.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::new(config.url()?)
    }
}

#[async_trait]
impl BookStore for HttpBookStore {
    fn url(&self) -> &StoreUrl {
        self.client.base()
    }

    #[instrument(skip(self))]
    async fn list_books(&self) -> Result<Vec<BookRecord>> {
        let books: Vec<BookRecord> = self.client.get_fresh(&[BOOKS]).await?;
        debug!(count = books.len(), "Listed books");
        Ok(books)
    }

    #[instrument(skip(self, isbn), fields(isbn = %isbn))]
    async fn get_book(&self, isbn: &Isbn) -> Result<BookRecord> {
        self.client.get(&[BOOKS, isbn.as_str()]).await
    }

    #[instrument(skip(self, book), fields(isbn = %book.isbn))]
    async fn create_book(&self, book: &BookRecord) -> Result<()> {
        debug!("Creating book");
        self.client.send_json(Method::POST, &[BOOKS, ADD], book).await
    }

    #[instrument(skip(self, isbn), fields(isbn = %isbn))]
    async fn update_inventory(&self, isbn: &Isbn, inventory: u32) -> Result<()> {
        debug!(inventory, "Updating inventory");
        self.client
            .send_json(
                Method::PUT,
                &[BOOKS, UPDATE, isbn.as_str()],
                &InventoryUpdate { inventory },
            )
            .await
    }

    #[instrument(skip(self, isbn), fields(isbn = %isbn))]
    async fn delete_book(&self, isbn: &Isbn) -> Result<()> {
        debug!("Deleting book");
        self.client
            .send(Method::DELETE, &[BOOKS, DELETE, isbn.as_str()])
            .await
    }
}
