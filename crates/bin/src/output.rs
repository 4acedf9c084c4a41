//! Output formatting helpers for human-readable and JSON output.

use insights::doc::{Value, format_number};

use crate::cli::Format;

/// Placeholder printed in human format when there is no value.
pub const NONE: &str = "<none>";

/// Render an optional raw value.
pub fn render_value(value: Option<&Value>, format: Format) -> String {
    match (value, format) {
        (None, Format::Human) => NONE.to_string(),
        (None, Format::Json) => "null".to_string(),
        (Some(value), Format::Human) => value.to_string(),
        (Some(value), Format::Json) => value.to_json_string(),
    }
}

/// Render an optional number.
pub fn render_number(number: Option<f64>, format: Format) -> String {
    render_value(number.map(Value::Number).as_ref(), format)
}

/// Render an optional string.
pub fn render_string(text: Option<String>, format: Format) -> String {
    render_value(text.map(Value::Text).as_ref(), format)
}

/// Render labelled rows.
///
/// Human format aligns labels in a column; JSON format produces one object
/// with the labels as keys.
pub fn render_rows(rows: &[(&str, Value)], format: Format) -> String {
    match format {
        Format::Human => {
            let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
            rows.iter()
                .map(|(label, value)| {
                    let text = match value {
                        Value::Null => NONE.to_string(),
                        Value::Number(n) => format_number(*n),
                        other => other.to_string(),
                    };
                    format!("{:<width$}  {text}", format!("{label}:"))
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        Format::Json => Value::Doc(
            rows.iter()
                .map(|(label, value)| (label.to_string(), value.clone()))
                .collect(),
        )
        .to_json_string(),
    }
}
