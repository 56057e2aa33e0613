//! Command-line interface definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use daybrief_core::{RecordKind, WindowFlags};

/// daybrief - your accounts, one merged brief
#[derive(Debug, Parser)]
#[command(name = "daybrief")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "DAYBRIEF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calendar events across accounts
    Events(BriefArgs),
    /// Mail messages across accounts
    Mail(BriefArgs),
}

impl Command {
    /// The record kind selected by this command.
    pub fn record_kind(&self) -> RecordKind {
        match self {
            Self::Events(_) => RecordKind::Events,
            Self::Mail(_) => RecordKind::Messages,
        }
    }

    /// The shared account/window arguments.
    pub fn brief_args(&self) -> &BriefArgs {
        match self {
            Self::Events(args) | Self::Mail(args) => args,
        }
    }
}

/// Account and time-window selection shared by both record kinds.
///
/// Window flags are not mutually exclusive on the command line; conflicts
/// resolve by fixed priority (explicit date, then last/next week, then this
/// week, then yesterday/tomorrow, then today).
#[derive(Debug, Default, Args)]
pub struct BriefArgs {
    /// Personal account email
    #[arg(long, value_name = "EMAIL")]
    pub personal: Option<String>,

    /// Work account email
    #[arg(long, value_name = "EMAIL")]
    pub work: Option<String>,

    /// Today's records (default)
    #[arg(long)]
    pub today: bool,

    /// Yesterday's records
    #[arg(long)]
    pub yesterday: bool,

    /// Tomorrow's records
    #[arg(long)]
    pub tomorrow: bool,

    /// This week's records
    #[arg(long)]
    pub this_week: bool,

    /// Next week's records
    #[arg(long)]
    pub next_week: bool,

    /// Last week's records
    #[arg(long)]
    pub last_week: bool,

    /// Records for a specific date
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

impl BriefArgs {
    /// The window flags in builder form.
    pub fn window_flags(&self) -> WindowFlags {
        WindowFlags {
            date: self.date,
            last_week: self.last_week,
            next_week: self.next_week,
            this_week: self.this_week,
            yesterday: self.yesterday,
            tomorrow: self.tomorrow,
            today: self.today,
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("invalid date `{value}`, expected YYYY-MM-DD"))
}
