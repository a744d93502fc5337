//! # Catalog Records
//!
//! Server-owned car maker and car model records as returned by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a backend record
///
/// The backend is free to hand out numeric or string ids. Ids are written
/// back exactly as they were received, so a numeric `maker_id` stays numeric
/// in the update body. The empty string stands for "no maker selected".
/// Anything else (`null`, floats, out-of-range numbers) is kept verbatim in
/// `Other` so a single odd record never fails the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
    Other(Value),
}

impl RecordId {
    /// The id sent when no maker has been chosen
    pub fn empty() -> Self {
        RecordId::Text(String::new())
    }

    /// Blank text or `null`, i.e. no record referenced
    pub fn is_empty(&self) -> bool {
        match self {
            RecordId::Text(text) => text.is_empty(),
            RecordId::Other(value) => value.is_null(),
            RecordId::Number(_) => false,
        }
    }

    /// Whether both ids name the same record
    ///
    /// Ids compare by their rendered form so `2` and `"2"` refer to the
    /// same maker. Blank ids never refer to a record.
    pub fn refers_to(&self, other: &RecordId) -> bool {
        !self.is_empty() && !other.is_empty() && self.to_string() == other.to_string()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(text) => f.write_str(text),
            RecordId::Other(Value::Null) => Ok(()),
            RecordId::Other(Value::String(text)) => f.write_str(text),
            RecordId::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// A car manufacturer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarMaker {
    pub id: RecordId,
    pub name: String,
}

/// A car model belonging to exactly one maker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarModel {
    pub id: RecordId,
    pub maker_id: RecordId,
    pub name: String,
}
