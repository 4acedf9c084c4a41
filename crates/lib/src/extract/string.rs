//! String coercion of extracted values.

use super::extract_present;
use crate::{
    Record,
    doc::{Doc, Path, Value, format_number},
};

/// Extracts the value at `path` as a string.
///
/// Leaves convert directly: booleans to `"true"`/`"false"`, numbers to their
/// minimal decimal form (`123`, `123.4`), text to itself. An empty string is
/// a present value and comes back as `Some("")`.
///
/// Docs and lists are first normalized leaf by leaf, every scalar becoming
/// its string form, and then rendered as compact JSON with doc keys in
/// ascending order. A null inside a composite stays `null`.
///
/// With `case_sensitive` false, every produced string (each leaf of a
/// composite, or the whole scalar result) is lower-cased. Keys are never
/// changed.
///
/// Absent record, missing path or null yield `None`; this never fails.
///
/// ```
/// # use insights::{Record, extract::extract_string};
/// let record = Record::new("r", serde_json::json!({
///     "nested": {"propB": "valB", "propA": "valA"},
///     "title": "Has Upper Case",
/// }));
/// assert_eq!(
///     extract_string(Some(&record), "nested", true).as_deref(),
///     Some(r#"{"propA":"valA","propB":"valB"}"#)
/// );
/// assert_eq!(extract_string(Some(&record), "title", false).as_deref(), Some("has upper case"));
/// ```
pub fn extract_string(
    record: Option<&Record>,
    path: impl AsRef<Path>,
    case_sensitive: bool,
) -> Option<String> {
    let value = extract_present(record, path.as_ref())?;
    match value {
        Value::Doc(_) | Value::List(_) => Some(normalize(value, case_sensitive).to_json_string()),
        leaf => leaf_string(leaf).map(|s| fold_case(s, case_sensitive)),
    }
}

/// String form of a leaf; `None` for null and for composites.
fn leaf_string(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(format_number(*n)),
        Value::Text(s) => Some(s.clone()),
        Value::Null | Value::Doc(_) | Value::List(_) => None,
    }
}

fn fold_case(s: String, case_sensitive: bool) -> String {
    if case_sensitive { s } else { s.to_lowercase() }
}

/// Rebuilds a tree with every non-null leaf replaced by its string form.
fn normalize(value: &Value, case_sensitive: bool) -> Value {
    match value {
        Value::Doc(doc) => Value::Doc(
            doc.iter()
                .map(|(key, child)| (key.clone(), normalize(child, case_sensitive)))
                .collect::<Doc>(),
        ),
        Value::List(list) => Value::List(
            list.iter()
                .map(|child| normalize(child, case_sensitive))
                .collect(),
        ),
        leaf => leaf_string(leaf)
            .map_or(Value::Null, |s| Value::Text(fold_case(s, case_sensitive))),
    }
}
