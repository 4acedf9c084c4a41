//! Numeric coercion of extracted values.

use super::{ExtractError, extract_present};
use crate::{
    Record, Result,
    doc::{Path, Value},
};

/// Extracts the value at `path` as a number.
///
/// - Absent record, missing path or null: `Ok(None)`
/// - Number: returned as is
/// - Text: parsed as a floating-point literal (`"123"`, `"123.4"`, `"1e3"`);
///   surrounding whitespace is not accepted
/// - Anything else, or text that does not parse to a finite number
///   (`"NaN"`, `"inf"`, out-of-range `"1e400"`): [`ExtractError::NotNumeric`]
///
/// ```
/// # use insights::{Record, extract::extract_number};
/// let record = Record::new("r", serde_json::json!({"exponent": "1e3", "flag": true}));
/// assert_eq!(extract_number(Some(&record), "exponent")?, Some(1000.0));
/// assert!(extract_number(Some(&record), "flag").is_err());
/// # Ok::<(), insights::Error>(())
/// ```
pub fn extract_number(record: Option<&Record>, path: impl AsRef<Path>) -> Result<Option<f64>> {
    let path = path.as_ref();
    let Some(value) = extract_present(record, path) else {
        return Ok(None);
    };

    let actual = match value {
        Value::Number(n) => return Ok(Some(*n)),
        Value::Text(text) => match text.parse::<f64>() {
            Ok(n) if n.is_finite() => return Ok(Some(n)),
            _ => text.clone(),
        },
        other => other.type_name().to_string(),
    };

    Err(ExtractError::NotNumeric {
        path: path.as_str().to_string(),
        actual,
    }
    .into())
}
