//! Core data types.

mod book;
mod isbn;
mod store_url;

pub use book::{BookRecord, InventoryUpdate};
pub use isbn::Isbn;
pub use store_url::StoreUrl;
