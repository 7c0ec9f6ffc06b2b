//! shelf - Inventory synchronization for a remote bookstore.
//!
//! [`InventorySyncController`] owns the local list of books and mediates
//! every read and write against a [`BookStore`]. Writes are never applied
//! locally: each successful mutation waits a short settling delay and then
//! refetches the whole list from the store.
//!
//! # Example
//!
//! ```no_run
//! use shelf::{InventorySyncController, TracingNotifier};
//! use shelf_core::{Isbn, StoreConfig};
//! use shelf_http::HttpBookStore;
//!
//! # async fn example() -> Result<(), shelf_core::Error> {
//! let store = HttpBookStore::from_config(&StoreConfig::new("localhost", 8080))?;
//! let controller = InventorySyncController::new(store, TracingNotifier);
//!
//! controller.load().await?;
//!
//! let isbn = Isbn::new("9780000000001")?;
//! controller.edit_local_inventory(&isbn, 9);
//! controller.commit_update(&isbn).await?;
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod form;
pub mod notify;

pub use controller::{DEFAULT_SETTLE_DELAY, InventoryState, InventorySyncController};
pub use form::{FormFields, FormState};
pub use notify::{ChannelNotifier, TracingNotifier};

pub use shelf_core::{BookRecord, BookStore, Error, Isbn, Notice, NoticeLevel, Notifier, Result};
pub use tokio_util::sync::CancellationToken;
