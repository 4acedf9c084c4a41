//! Single-record extraction commands.

use insights::{Record, extract, extract_number, extract_string};

use crate::cli::{Format, RecordPathArgs, StringArgs};
use crate::output::{render_number, render_string, render_value};
use crate::records::find;

/// Run the extract command
pub fn run_extract(records: &[Record], args: &RecordPathArgs, format: Format) -> String {
    let record = find(records, &args.id);
    render_value(extract(record, &args.path), format)
}

/// Run the number command
pub fn run_number(
    records: &[Record],
    args: &RecordPathArgs,
    format: Format,
) -> insights::Result<String> {
    let record = find(records, &args.id);
    Ok(render_number(extract_number(record, &args.path)?, format))
}

/// Run the string command
pub fn run_string(records: &[Record], args: &StringArgs, format: Format) -> String {
    let record = find(records, &args.target.id);
    render_string(
        extract_string(record, &args.target.path, args.case_sensitive),
        format,
    )
}
