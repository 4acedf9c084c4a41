//! Numeric aggregation over collections of records.
//!
//! Each aggregation extracts the number at one path from every record with
//! [`extract_number`] and summarizes the values that are present. Records
//! where the path is missing or null are skipped, not counted as zero. The
//! first record holding a non-numeric value aborts the whole aggregation with
//! its [`ExtractError::NotNumeric`](crate::extract::ExtractError::NotNumeric).
//!
//! When there is nothing to summarize (no records, or no record with a
//! value) the result is `Ok(None)`.
//!
//! # Examples
//!
//! ```
//! use insights::{Record, aggregate::{average, standard_deviation}};
//!
//! let records: Vec<Record> = [2, 4, 4, 4, 5, 5, 7, 9]
//!     .into_iter()
//!     .enumerate()
//!     .map(|(i, n)| Record::new(format!("r{i}"), serde_json::json!({ "score": n })))
//!     .collect();
//!
//! assert_eq!(average(&records, "score")?, Some(5.0));
//! assert_eq!(standard_deviation(&records, "score")?, Some(2.0));
//! assert_eq!(average(&records, "missing")?, None);
//! # Ok::<(), insights::Error>(())
//! ```

use tracing::debug;

use crate::{Record, Result, doc::Path, extract::extract_number};

/// Iterates over the numbers present at `path`, in record order.
fn present_numbers<'a>(
    records: &'a [Record],
    path: &'a Path,
) -> impl Iterator<Item = Result<f64>> + 'a {
    records.iter().filter_map(move |record| {
        extract_number(Some(record), path)
            .inspect_err(|err| {
                debug!(record_id = record.id(), %path, error = %err, "Aggregation aborted");
            })
            .transpose()
    })
}

/// Counts the records holding a number at `path`.
///
/// This is the divisor [`average`] and [`standard_deviation`] use.
pub fn count(records: &[Record], path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let mut counted = 0;
    for number in present_numbers(records, path) {
        number?;
        counted += 1;
    }
    Ok(counted)
}

/// Computes the arithmetic mean of the numbers at `path`.
pub fn average(records: &[Record], path: impl AsRef<Path>) -> Result<Option<f64>> {
    let path = path.as_ref();
    if records.is_empty() {
        return Ok(None);
    }

    let mut sum = 0.0;
    let mut counted = 0usize;
    for number in present_numbers(records, path) {
        sum += number?;
        counted += 1;
    }

    if counted == 0 {
        debug!(%path, records = records.len(), "No numeric values to average");
        return Ok(None);
    }

    let avg = sum / counted as f64;
    debug!(%path, records = records.len(), counted, avg, "Computed average");
    Ok(Some(avg))
}

/// Computes the population standard deviation of the numbers at `path`.
///
/// The squared deviations from the [`average`] are divided by the number of
/// present values `n`, not `n - 1`.
pub fn standard_deviation(records: &[Record], path: impl AsRef<Path>) -> Result<Option<f64>> {
    let path = path.as_ref();
    if records.is_empty() {
        return Ok(None);
    }

    let Some(avg) = average(records, path)? else {
        return Ok(None);
    };

    let mut squared_sum = 0.0;
    let mut counted = 0usize;
    for number in present_numbers(records, path) {
        let diff = number? - avg;
        squared_sum += diff * diff;
        counted += 1;
    }

    if counted == 0 {
        return Ok(None);
    }

    let deviation = (squared_sum / counted as f64).sqrt();
    debug!(%path, counted, avg, deviation, "Computed standard deviation");
    Ok(Some(deviation))
}

// TODO: text standard deviation (spread of distinct string values) once a
// categorical measure is agreed on.
