//! daybrief CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use daybrief_cli::aggregate::aggregate;
use daybrief_cli::cli::Cli;
use daybrief_cli::config::Config;
use daybrief_cli::error::{CliError, CliResult};
use daybrief_cli::output;
use daybrief_cli::resolve::resolve_accounts;
use daybrief_core::build_query;
use daybrief_providers::GogClient;

/// Body of the exit-1 error document when no accounts resolve.
const NO_ACCOUNTS_MESSAGE: &str =
    "No accounts found. Use --personal/--work or configure gog auth.";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing. Logs go to stderr; stdout carries only the JSON
    // document.
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    // Load configuration
    let config = if let Some(ref path) = cli.config {
        Config::load_from(path).map_err(CliError::Config)?
    } else {
        Config::load().unwrap_or_default()
    };

    let kind = cli.command.record_kind();
    let args = cli.command.brief_args();
    let client = GogClient::new(config.provider_command());

    let accounts = resolve_accounts(
        args.personal.as_deref(),
        args.work.as_deref(),
        &client,
        &config,
    )
    .await;

    if accounts.is_empty() {
        println!("{}", output::render_fatal(NO_ACCOUNTS_MESSAGE));
        return Ok(ExitCode::FAILURE);
    }

    let today = chrono::Local::now().date_naive();
    let mode = args.window_flags().resolve();
    let query = build_query(mode, today, kind.week_convention());

    let brief = aggregate(&client, kind, accounts, &query).await;
    println!("{}", output::render(&brief)?);

    Ok(ExitCode::SUCCESS)
}
