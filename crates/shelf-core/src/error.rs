//! Error types for shelfkeep.
//!
//! A single error type with explicit variants for transport, protocol,
//! decoding and input failures, plus cancellation.

use std::fmt;
use thiserror::Error;

/// The unified error type for shelfkeep operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never reached the store or the response never arrived.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The store answered with a non-success status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The response body did not have the expected shape.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Input validation errors (empty ISBN, bad URL, missing form field).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The operation was cancelled before it completed.
    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Returns the HTTP status if the store rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Protocol(e) => Some(e.status),
            _ => None,
        }
    }

    /// Returns true if this error was caused by cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success response from the book store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server's `{"error": ...}` body, if any.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Check if the store reported the book as missing.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid ISBN.
    #[error("invalid ISBN '{value}': {reason}")]
    Isbn { value: String, reason: String },

    /// Invalid store URL.
    #[error("invalid store URL '{value}': {reason}")]
    StoreUrl { value: String, reason: String },

    /// A required form field was left empty.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
