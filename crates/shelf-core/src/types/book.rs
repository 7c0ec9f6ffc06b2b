//! Book record types.

use serde::{Deserialize, Serialize};

use super::Isbn;

/// A single book in the inventory.
///
/// Serializes with the camelCase field names the create endpoint expects.
/// The list endpoint reports author names as `author_first` and
/// `author_last`, so those spellings are accepted when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Unique key, immutable after creation.
    pub isbn: Isbn,
    pub title: String,
    #[serde(default, alias = "author_first")]
    pub author_first_name: String,
    #[serde(default, alias = "author_last")]
    pub author_last_name: String,
    /// Copies on hand. The only field editable after creation.
    #[serde(default)]
    pub inventory: u32,
}

impl BookRecord {
    /// Create a new record.
    pub fn new(
        isbn: Isbn,
        title: impl Into<String>,
        author_first_name: impl Into<String>,
        author_last_name: impl Into<String>,
        inventory: u32,
    ) -> Self {
        Self {
            isbn,
            title: title.into(),
            author_first_name: author_first_name.into(),
            author_last_name: author_last_name.into(),
            inventory,
        }
    }

    /// Returns the author's full name, or an empty string if unknown.
    pub fn author(&self) -> String {
        format!("{} {}", self.author_first_name, self.author_last_name)
            .trim()
            .to_string()
    }
}

/// Request body for the update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub inventory: u32,
}
