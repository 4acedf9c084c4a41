//! Error types for value extraction.
//!
//! Extraction treats missing data as an absent result, never as an error.
//! The only failure is asking for a number where the record holds something
//! that cannot be read as one.

use thiserror::Error;

use crate::doc::Path;

/// Structured error types for extraction and the aggregations built on it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    /// The value at `path` exists but is not numeric.
    ///
    /// `actual` is the offending text for strings that fail to parse and the
    /// value's type name otherwise. `path` is kept verbatim; the message
    /// names the empty path the way [`Path`]'s `Display` does.
    #[error("Value at '{}' is not numeric: {actual}", Path::new(.path))]
    NotNumeric { path: String, actual: String },
}

impl ExtractError {
    /// Check if this error is a failed numeric conversion
    pub fn is_not_numeric(&self) -> bool {
        matches!(self, ExtractError::NotNumeric { .. })
    }

    /// Get the path that was being extracted
    pub fn path(&self) -> &str {
        match self {
            ExtractError::NotNumeric { path, .. } => path,
        }
    }
}

// Conversion from ExtractError to the main Error type
impl From<ExtractError> for crate::Error {
    fn from(err: ExtractError) -> Self {
        crate::Error::Extract(err)
    }
}
