//! `gog` subprocess client.
//!
//! Account discovery (`gog auth list --json`) and per-account fetching
//! (`gog calendar events …` / `gog gmail messages search …`) both run the
//! provider as a bounded subprocess and parse its stdout as JSON. The
//! binary name can be overridden, which the tests use to substitute stub
//! executables.

use std::process::Stdio;
use std::time::Duration;

use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, warn};

use daybrief_core::{QueryDescriptor, RecordKind};

use crate::envelope::extract_records;
use crate::error::{ProviderError, ProviderResult};
use crate::raw::RawRecord;
use crate::source::{BoxFuture, RecordSource};

/// Calendar queried for the events kind.
const PRIMARY_CALENDAR: &str = "primary";

/// Upper bound on records fetched per account.
const MAX_RESULTS_FLAG: &str = "--max=50";

/// Bound on one discovery invocation.
const DISCOVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Bound on one per-account fetch invocation.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the external `gog` CLI.
#[derive(Debug, Clone)]
pub struct GogClient {
    program: String,
}

impl Default for GogClient {
    fn default() -> Self {
        Self::new("gog")
    }
}

impl GogClient {
    /// Creates a client invoking the given provider binary.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Lists authenticated account emails.
    ///
    /// Any failure — spawn, timeout, non-zero exit, malformed output —
    /// degrades to an empty list. Surfacing "no accounts" is the caller's
    /// responsibility, not a provider error.
    pub async fn discover_accounts(&self) -> Vec<String> {
        let stdout = match self.run(&["auth", "list", "--json"], DISCOVERY_TIMEOUT).await {
            Ok(stdout) => stdout,
            Err(err) => {
                warn!(%err, "account discovery failed");
                return Vec::new();
            }
        };
        match serde_json::from_slice::<AuthList>(&stdout) {
            Ok(list) => list.accounts.into_iter().map(|a| a.email).collect(),
            Err(err) => {
                warn!(%err, "account discovery returned malformed JSON");
                Vec::new()
            }
        }
    }

    /// Fetches the raw records of `kind` for one account.
    pub async fn fetch_records(
        &self,
        kind: RecordKind,
        account_email: &str,
        query: &QueryDescriptor,
    ) -> ProviderResult<Vec<RawRecord>> {
        let args = fetch_args(kind, account_email, query);
        debug!(account = account_email, ?args, "fetching records");

        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let stdout = self.run(&arg_refs, FETCH_TIMEOUT).await?;

        let body = serde_json::from_slice(&stdout).map_err(|source| ProviderError::Json {
            command: self.program.clone(),
            source,
        })?;
        extract_records(body, kind.list_field(), &self.program)
    }

    /// Runs the provider with `args`, returning stdout on success.
    async fn run(&self, args: &[&str], timeout: Duration) -> ProviderResult<Vec<u8>> {
        let pending = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(timeout, pending).await {
            Ok(result) => result.map_err(|source| ProviderError::Spawn {
                command: self.program.clone(),
                source,
            })?,
            Err(_) => {
                return Err(ProviderError::Timeout {
                    command: self.program.clone(),
                    seconds: timeout.as_secs(),
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => match output.status.code() {
                    Some(code) => format!("{} exited with code {}", self.program, code),
                    None => format!("{} terminated by signal", self.program),
                },
                diagnostic => diagnostic.to_string(),
            };
            return Err(ProviderError::Failed(message));
        }

        Ok(output.stdout)
    }
}

impl RecordSource for GogClient {
    fn fetch<'a>(
        &'a self,
        kind: RecordKind,
        account_email: &'a str,
        query: &'a QueryDescriptor,
    ) -> BoxFuture<'a, ProviderResult<Vec<RawRecord>>> {
        Box::pin(self.fetch_records(kind, account_email, query))
    }
}

/// Builds the provider argument list for one fetch.
fn fetch_args(kind: RecordKind, account_email: &str, query: &QueryDescriptor) -> Vec<String> {
    let account_flag = format!("--account={account_email}");
    match kind {
        RecordKind::Events => {
            let mut args = vec![
                "calendar".to_string(),
                "events".to_string(),
                PRIMARY_CALENDAR.to_string(),
                "--json".to_string(),
                MAX_RESULTS_FLAG.to_string(),
                account_flag,
            ];
            match query {
                QueryDescriptor::Range { from, to } => {
                    // The provider's --to is date-inclusive; a half-open
                    // [from, to) ends the day before.
                    let last = to.pred_opt().expect("valid predecessor date");
                    args.push("--from".to_string());
                    args.push(from.format("%Y-%m-%d").to_string());
                    args.push("--to".to_string());
                    args.push(last.format("%Y-%m-%d").to_string());
                }
                QueryDescriptor::Token(token) => args.push(token.clone()),
            }
            args
        }
        RecordKind::Messages => {
            let query = match query {
                QueryDescriptor::Range { from, to } => format!(
                    "after:{} before:{}",
                    from.format("%Y/%m/%d"),
                    to.format("%Y/%m/%d"),
                ),
                QueryDescriptor::Token(token) => token.clone(),
            };
            vec![
                "gmail".to_string(),
                "messages".to_string(),
                "search".to_string(),
                query,
                "--json".to_string(),
                MAX_RESULTS_FLAG.to_string(),
                account_flag,
            ]
        }
    }
}

/// Envelope returned by `gog auth list --json`.
#[derive(Debug, Deserialize)]
struct AuthList {
    #[serde(default)]
    accounts: Vec<AuthAccount>,
}

#[derive(Debug, Deserialize)]
struct AuthAccount {
    email: String,
}
