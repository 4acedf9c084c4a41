//! Loading record collections from JSON.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use insights::Record;

/// Read a JSON array of records from `path`, or from stdin when the path is
/// absent or `-`.
pub fn load(path: Option<&Path>) -> Result<Vec<Record>, Box<dyn std::error::Error>> {
    let records = match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "Reading records from file");
            parse(BufReader::new(File::open(path)?))?
        }
        _ => {
            tracing::debug!("Reading records from stdin");
            parse(io::stdin().lock())?
        }
    };
    tracing::info!(count = records.len(), "Loaded records");
    Ok(records)
}

/// Parse a JSON array of records.
pub fn parse(reader: impl Read) -> serde_json::Result<Vec<Record>> {
    serde_json::from_reader(reader)
}

/// Find a record by identifier.
pub fn find<'a>(records: &'a [Record], id: &str) -> Option<&'a Record> {
    let found = records.iter().find(|record| record.id() == id);
    if found.is_none() {
        tracing::warn!(id, "No record with this id");
    }
    found
}
