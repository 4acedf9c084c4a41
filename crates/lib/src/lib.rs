//!
//! Insights: path-based value extraction and numeric aggregation over
//! semi-structured records.
//!
//! ## Core Concepts
//!
//! * **Records (`Record`)**: An identifier plus a dynamically-typed data tree, usually parsed from JSON.
//! * **Data trees (`doc::Value`, `doc::Doc`)**: Null, booleans, numbers (always `f64`), text, lists and string-keyed docs.
//! * **Paths (`doc::Path`)**: Dot-separated addresses such as `"nested.value"` or `"list.0"`. Segments name doc keys or, inside lists, plain decimal indices.
//! * **Extraction (`extract`)**: Resolves a path to a raw value, a number or a canonical string. Missing data is never an error.
//! * **Aggregation (`aggregate`)**: Mean and population standard deviation of the numbers at a path across many records.
//!
//! ## Absence versus failure
//!
//! Every operation distinguishes three outcomes: a value, no value
//! (`Ok(None)` / `None`), and failure (`Err`). A missing record, missing path
//! segment, out-of-range index or explicit null all mean "no value". The only
//! failure is [`extract::ExtractError::NotNumeric`], raised when a numeric
//! operation meets a value that is present but cannot be read as a number.
//!
//! All operations are pure reads of caller-owned data and are safe to call
//! from any number of threads at once.

pub mod aggregate;
pub mod doc;
pub mod extract;
pub mod record;

/// Re-export the `Record` struct for easier access.
pub use record::Record;

pub use aggregate::{average, count, standard_deviation};
pub use extract::{extract, extract_number, extract_string};

/// Result type used throughout the Insights library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Insights library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured extraction errors from the extract module
    #[error(transparent)]
    Extract(extract::ExtractError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Extract(_) => "extract",
        }
    }

    /// Check if this error is a failed numeric conversion.
    pub fn is_not_numeric(&self) -> bool {
        match self {
            Error::Extract(extract_err) => extract_err.is_not_numeric(),
        }
    }

    /// Get the path involved in the failure, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Extract(extract_err) => Some(extract_err.path()),
        }
    }
}
