//! Traits at the store and notification seams.

mod notifier;
mod store;

pub use notifier::{Notice, NoticeLevel, Notifier};
pub use store::BookStore;
