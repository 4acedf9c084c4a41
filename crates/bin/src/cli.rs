//! CLI argument definitions for the Insights binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Plain text, one value per line
    Human,
    /// JSON values (`null` when there is no value)
    Json,
}

/// Extract values and compute statistics over JSON records
#[derive(Parser, Debug)]
#[command(name = "insights")]
#[command(about = "Insights: path-based extraction and aggregation over JSON records")]
#[command(version)]
pub struct Cli {
    /// JSON file holding an array of records (`{"id": ..., "data": {...}}`).
    /// Reads standard input when omitted or `-`.
    #[arg(short, long, global = true, env = "INSIGHTS_RECORDS")]
    pub records: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "human", env = "INSIGHTS_FORMAT")]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the raw value at a path in one record
    Extract(RecordPathArgs),
    /// Print the value at a path in one record as a number
    Number(RecordPathArgs),
    /// Print the value at a path in one record as a string
    #[command(name = "string")]
    Text(StringArgs),
    /// Average of the numbers at a path across all records
    Average(PathArgs),
    /// Population standard deviation of the numbers at a path across all records
    Stddev(PathArgs),
    /// Count, average and standard deviation of the numbers at a path
    Summary(PathArgs),
}

/// Arguments for single-record commands
#[derive(clap::Args, Debug)]
pub struct RecordPathArgs {
    /// Record identifier
    pub id: String,

    /// Dot-separated path, e.g. `nested.value` or `list.0`
    pub path: String,
}

/// Arguments for the string command
#[derive(clap::Args, Debug)]
pub struct StringArgs {
    #[command(flatten)]
    pub target: RecordPathArgs,

    /// Keep letter case instead of lower-casing the result
    #[arg(short, long)]
    pub case_sensitive: bool,
}

/// Arguments for aggregation commands
#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Dot-separated path, e.g. `stats.score`
    pub path: String,
}
