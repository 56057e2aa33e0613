//! CLI: argument parsing, account resolution, aggregation, JSON output
//!
//! This crate provides the `daybrief` command-line interface.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod resolve;

pub use cli::Cli;
pub use error::{CliError, CliResult};
