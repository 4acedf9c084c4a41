//! Aggregation commands over the whole record collection.

use insights::{Record, average, count, doc::Value, standard_deviation};

use crate::cli::{Format, PathArgs};
use crate::output::{render_number, render_rows};

/// Run the average command
pub fn run_average(records: &[Record], args: &PathArgs, format: Format) -> insights::Result<String> {
    Ok(render_number(average(records, &args.path)?, format))
}

/// Run the stddev command
pub fn run_stddev(records: &[Record], args: &PathArgs, format: Format) -> insights::Result<String> {
    Ok(render_number(
        standard_deviation(records, &args.path)?,
        format,
    ))
}

/// Run the summary command
pub fn run_summary(records: &[Record], args: &PathArgs, format: Format) -> insights::Result<String> {
    let counted = count(records, &args.path)?;
    let avg = average(records, &args.path)?;
    let deviation = standard_deviation(records, &args.path)?;

    let rows = [
        ("records", Value::from(records.len() as u64)),
        ("count", Value::from(counted as u64)),
        ("average", Value::from(avg)),
        ("stddev", Value::from(deviation)),
    ];
    Ok(render_rows(&rows, format))
}
