//! Value types for record data trees.
//!
//! This module provides the [`Value`] enum that represents every node of a
//! data tree: leaf values (null, booleans, numbers, text) and branch values
//! (nested documents and lists). Numbers are always `f64`, the way JSON
//! numbers are conventionally decoded, so there is no separate integer kind.

use std::fmt;

use tracing::trace;

use super::{
    Doc,
    path::{Path, Segment},
};

/// Values that can be held in a record's data tree.
///
/// # Value Types
///
/// ## Leaf Values
/// - [`Value::Null`] - An explicit null
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Number`] - Numbers, always stored as `f64`
/// - [`Value::Text`] - UTF-8 text strings
///
/// ## Branch Values
/// - [`Value::Doc`] - Nested string-keyed mappings
/// - [`Value::List`] - Ordered sequences of values
///
/// # Direct Comparisons
///
/// ```
/// # use insights::doc::Value;
/// let text = Value::from("hello");
/// let number = Value::from(42);
///
/// assert!(text == "hello");
/// assert!(number == 42.0);
/// assert!(!(text == 42.0));
/// ```
///
/// # JSON
///
/// `Value` (de)serializes through [`serde_json::Value`], so a data tree can
/// be parsed straight from JSON text:
///
/// ```
/// # use insights::doc::Value;
/// let value: Value = serde_json::from_str(r#"{"int": 123, "list": [1, "two"]}"#).unwrap();
/// assert_eq!(value.get_path("int"), Some(&Value::Number(123.0)));
/// assert_eq!(value.get_path("list.1"), Some(&Value::from("two")));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    // Leaf values
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Text string value
    Text(String),

    // Branch values
    /// Nested mapping
    Doc(Doc),
    /// Ordered collection of values
    List(Vec<Value>),
}

impl Value {
    /// Returns true if this is a leaf value
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Text(_)
        )
    }

    /// Returns true if this is a branch value (can contain other values)
    pub fn is_branch(&self) -> bool {
        matches!(self, Value::Doc(_) | Value::List(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Doc(_) => "doc",
            Value::List(_) => "list",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a Doc
    pub fn as_doc(&self) -> Option<&Doc> {
        match self {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Attempts to convert to a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Follows `path` down from this value.
    ///
    /// Docs are descended by key and lists by index. Returns `None` as soon
    /// as a segment cannot be followed: a missing key, an index that is not
    /// a plain non-negative integer or is out of range, or a leaf value
    /// (including null) with segments left over.
    ///
    /// The empty path has no segments and returns `self`. This is the only
    /// path walker in the crate, so the rule holds for every lookup.
    ///
    /// A present null at the final segment is returned as
    /// `Some(&Value::Null)`.
    pub fn get_path(&self, path: impl AsRef<Path>) -> Option<&Value> {
        let path = path.as_ref();
        let mut current = self;

        for segment in path.segments() {
            current = match current.child(segment) {
                Some(value) => value,
                None => {
                    trace!(%path, %segment, found = current.type_name(), "Path segment not found");
                    return None;
                }
            };
        }

        Some(current)
    }

    /// Returns the direct child addressed by a single path segment.
    ///
    /// Docs are indexed by key and lists by index; leaves have no children.
    pub fn child(&self, segment: Segment<'_>) -> Option<&Value> {
        match self {
            Value::Doc(doc) => doc.get(segment.as_str()),
            Value::List(list) => list.get(segment.as_index()?),
            _ => None,
        }
    }

    /// Converts to a compact JSON string.
    ///
    /// Doc keys are written in ascending lexicographic order regardless of
    /// insertion order, and numbers use [`format_number`], so equal trees
    /// always produce identical text.
    ///
    /// ```
    /// # use insights::doc::{Doc, Value};
    /// let mut doc = Doc::new();
    /// doc.set("propB", "valB");
    /// doc.set("propA", 1);
    /// assert_eq!(Value::from(doc).to_json_string(), r#"{"propA":1,"propB":"valB"}"#);
    /// ```
    pub fn to_json_string(&self) -> String {
        let mut out = String::new();
        self.write_json(&mut out);
        out
    }

    fn write_json(&self, out: &mut String) {
        match self {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) if n.is_finite() => out.push_str(&format_number(*n)),
            // JSON has no representation for NaN or infinities
            Value::Number(_) => out.push_str("null"),
            Value::Text(s) => write_json_str(s, out),
            Value::Doc(doc) => write_doc_json(doc, out),
            Value::List(list) => {
                out.push('[');
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_json(out);
                }
                out.push(']');
            }
        }
    }
}

/// Writes `doc` as a JSON object with keys in ascending order.
pub(super) fn write_doc_json(doc: &Doc, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in doc.sorted_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_json_str(key, out);
        out.push(':');
        value.write_json(out);
    }
    out.push('}');
}

fn write_json_str(s: &str, out: &mut String) {
    // Serializing a str into a String buffer cannot fail
    match serde_json::to_string(s) {
        Ok(quoted) => out.push_str(&quoted),
        Err(_) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
    }
}

/// Renders a number in its minimal decimal form.
///
/// Integral values have no fractional part (`123`, not `123.0`), other values
/// use the shortest representation that parses back to the same `f64`
/// (`123.4`), and negative zero renders as `0`.
///
/// ```
/// # use insights::doc::format_number;
/// assert_eq!(format_number(123.0), "123");
/// assert_eq!(format_number(123.4), "123.4");
/// assert_eq!(format_number(-0.5), "-0.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    n.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Text(s) => write!(f, "{s}"),
            Value::Doc(_) | Value::List(_) => write!(f, "{}", self.to_json_string()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // Arbitrary-precision integers outside f64 range have no lossless
            // form here; as_f64 only fails for those.
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Doc(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => number_to_json(n),
            Value::Text(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Doc(doc) => serde_json::Value::Object(
                doc.into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Integral values become JSON integers so they serialize without `.0`.
fn number_to_json(n: f64) -> serde_json::Value {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0; // 2^63
    if n.fract() == 0.0 && n >= -I64_BOUND && n < I64_BOUND {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Doc> for Value {
    fn from(value: Doc) -> Self {
        Value::Doc(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// PartialEq implementations for comparing Value with primitive types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_number() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}
