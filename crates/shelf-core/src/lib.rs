//! shelf-core - Core types and traits for the shelfkeep inventory client.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::StoreConfig;
pub use error::Error;
pub use traits::{BookStore, Notice, NoticeLevel, Notifier};
pub use types::{BookRecord, InventoryUpdate, Isbn, StoreUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
