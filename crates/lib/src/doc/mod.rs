//! Data trees held by records.
//!
//! A record's data is a dynamically-typed tree: leaves are null, booleans,
//! numbers or text, and branches are string-keyed [`Doc`]s or ordered lists.
//! The tree is usually produced by parsing a JSON document, and the types
//! here convert to and from [`serde_json::Value`] losslessly apart from
//! number representation (always `f64`).
//!
//! # Core Types
//!
//! - [`Doc`] - A string-keyed mapping of values
//! - [`Value`] - A single node of the tree
//! - [`Path`] - Dot-separated addresses into the tree
//!
//! # Examples
//!
//! ```
//! use insights::doc::{Doc, Value};
//!
//! let mut doc = Doc::new();
//! doc.set("name", "Alice");
//! doc.set("scores", vec![1, 2, 3]);
//!
//! let tree = Value::from(doc);
//! assert_eq!(tree.get_path("scores.1"), Some(&Value::Number(2.0)));
//! assert_eq!(tree.get_path("name"), Some(&Value::from("Alice")));
//! ```

use std::collections::{HashMap, hash_map};

pub mod path;
pub mod value;

pub use path::{Path, Segment};
pub use value::{Value, format_number};

/// A string-keyed mapping of [`Value`]s.
///
/// Key order is not preserved. Anything that renders a `Doc` as text sorts
/// its keys first (see [`Doc::sorted_iter`]).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Doc {
    children: HashMap<String, Value>,
}

impl Doc {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the document has no keys
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of direct keys
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the document has a direct entry for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Gets the direct child stored under `key`.
    ///
    /// `key` is matched literally; it is not split into path segments. Use
    /// [`Value::get_path`] to descend.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.children.get(key)
    }

    /// Sets the direct child under `key`, returning the previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes the direct child under `key`, returning it
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.children.remove(key)
    }

    /// Iterates over direct entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter()
    }

    /// Iterates over direct keys in unspecified order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Iterates over direct entries in ascending key order
    pub fn sorted_iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        let mut entries: Vec<_> = self.children.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter()
    }

    /// Converts to a compact JSON string with sorted keys
    pub fn to_json_string(&self) -> String {
        let mut out = String::new();
        value::write_doc_json(self, &mut out);
        out
    }
}

impl FromIterator<(String, Value)> for Doc {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Doc {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a Doc {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
