//! ISBN key type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The unique key of a book record.
///
/// [`Isbn::new`] rejects only the empty string. Format and uniqueness
/// checks belong to the book store. Values read from the store are taken
/// as-is, and since the store keeps ISBNs in an integer column they may
/// arrive as JSON numbers as well as strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Isbn(String);

impl Isbn {
    /// Create a new ISBN from user input, rejecting the empty string.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        if s.is_empty() {
            return Err(InvalidInputError::Isbn {
                value: s.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the ISBN as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Isbn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Isbn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Isbn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Isbn(s),
            Raw::Number(n) => Isbn(n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_input_verbatim() {
        let isbn = Isbn::new(" 9780000000001 ").unwrap();
        assert_eq!(isbn.as_str(), " 9780000000001 ");
        assert!(Isbn::new("   ").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(Isbn::new("").is_err());
    }

    #[test]
    fn store_values_are_not_validated() {
        let empty: Isbn = serde_json::from_str("\"\"").unwrap();
        assert_eq!(empty.as_str(), "");

        let padded: Isbn = serde_json::from_str("\" 42 \"").unwrap();
        assert_eq!(padded.as_str(), " 42 ");
    }

    #[test]
    fn accepts_non_numeric_keys() {
        // The store decides what a valid ISBN looks like.
        assert!(Isbn::new("A1").is_ok());
    }

    #[test]
    fn deserializes_from_number_or_string() {
        let from_num: Isbn = serde_json::from_str("9781234567897").unwrap();
        let from_str: Isbn = serde_json::from_str("\"9781234567897\"").unwrap();
        assert_eq!(from_num, from_str);
    }

    #[test]
    fn serializes_as_string() {
        let isbn = Isbn::new("42").unwrap();
        assert_eq!(serde_json::to_string(&isbn).unwrap(), "\"42\"");
    }
}
