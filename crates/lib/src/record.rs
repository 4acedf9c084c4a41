//! Records: an identifier plus a data tree.

use serde::{Deserialize, Serialize};

use crate::doc::Value;

/// A record handed to the extraction and aggregation functions.
///
/// The engine never modifies a record; it only reads its data tree. A record
/// may have no data at all, which every operation treats the same as a path
/// that does not resolve.
///
/// Records deserialize from the shape `{"id": "...", "data": {...}}`, with
/// `data` optional:
///
/// ```
/// # use insights::Record;
/// let record: Record = serde_json::from_str(r#"{"id": "r1", "data": {"age": 42}}"#).unwrap();
/// assert_eq!(record.id(), "r1");
/// assert!(record.data().is_some());
///
/// let empty: Record = serde_json::from_str(r#"{"id": "r2"}"#).unwrap();
/// assert!(empty.data().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl Record {
    /// Creates a record with the given data tree.
    pub fn new(id: impl Into<String>, data: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            data: Some(data.into()),
        }
    }

    /// Creates a record with no data tree.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: None,
        }
    }

    /// Returns the record's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the record's data tree, if it has one.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}
