use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;
mod records;

use cli::{Cli, Commands};
use commands::{aggregate, extract};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("insights=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let records = records::load(cli.records.as_deref())?;
    let format = cli.format;

    let output = match &cli.command {
        Commands::Extract(args) => extract::run_extract(&records, args, format),
        Commands::Number(args) => extract::run_number(&records, args, format)?,
        Commands::Text(args) => extract::run_string(&records, args, format),
        Commands::Average(args) => aggregate::run_average(&records, args, format)?,
        Commands::Stddev(args) => aggregate::run_stddev(&records, args, format)?,
        Commands::Summary(args) => aggregate::run_summary(&records, args, format)?,
    };

    println!("{output}");
    Ok(())
}
