//! REST endpoint paths and wire-only types.

use serde::Deserialize;

/// `GET /books`
pub const BOOKS: &str = "books";

/// `POST /books/add`
pub const ADD: &str = "add";

/// `PUT /books/update/{isbn}`
pub const UPDATE: &str = "update";

/// `DELETE /books/delete/{isbn}`
pub const DELETE: &str = "delete";

/// Error body returned by the store, e.g. `{"error": "Book not found"}`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}
