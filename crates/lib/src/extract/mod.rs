//! Path-based extraction of values from records.
//!
//! Three views of the same lookup:
//!
//! - [`extract`] returns the raw [`Value`] a path points at
//! - [`extract_number`] coerces it to an `f64`
//! - [`extract_string`] coerces it to its canonical text form
//!
//! All three share one rule: a record with no data, a path that does not
//! resolve, and an explicit null all mean "no value", which is reported as
//! `None` rather than as an error. Only [`extract_number`] can fail, and only
//! when a value is present but not numeric.
//!
//! # Examples
//!
//! ```
//! use insights::{Record, extract::{extract, extract_number, extract_string}};
//!
//! let data: serde_json::Value = serde_json::json!({
//!     "nested": {"value": "123"},
//!     "list": ["abc", "DEF", "geh"],
//! });
//! let record = Record::new("some-id", data);
//!
//! assert_eq!(extract_number(Some(&record), "nested.value")?, Some(123.0));
//! assert!(extract_number(Some(&record), "nested").is_err());
//! assert_eq!(extract_number(Some(&record), "missing")?, None);
//!
//! assert_eq!(extract_string(Some(&record), "list.1", false), Some("def".to_string()));
//! assert_eq!(
//!     extract_string(Some(&record), "list", false),
//!     Some(r#"["abc","def","geh"]"#.to_string())
//! );
//! assert!(extract(None, "list").is_none());
//! # Ok::<(), insights::Error>(())
//! ```

pub mod errors;
mod number;
mod string;

pub use errors::ExtractError;
pub use number::extract_number;
pub use string::extract_string;

use crate::{
    Record,
    doc::{Path, Value},
};

/// Resolves `path` against a record's data tree.
///
/// Returns `None` when the record is absent, has no data, or the path does
/// not resolve. A null stored at the end of the path is returned as
/// `Some(&Value::Null)`; a null anywhere before the end stops resolution like
/// any other leaf. See [`Value::get_path`] for the segment rules.
pub fn extract(record: Option<&Record>, path: impl AsRef<Path>) -> Option<&Value> {
    record?.data()?.get_path(path)
}

/// Like [`extract`], but folds a present null into `None`.
pub(crate) fn extract_present<'a>(record: Option<&'a Record>, path: &Path) -> Option<&'a Value> {
    extract(record, path).filter(|value| !value.is_null())
}
