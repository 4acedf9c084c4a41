//! Subcommand implementations.

pub mod aggregate;
pub mod extract;
