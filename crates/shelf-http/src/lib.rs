//! shelf-http - HTTP-backed book store implementation.

mod client;
mod endpoints;
mod store;

pub use store::HttpBookStore;
