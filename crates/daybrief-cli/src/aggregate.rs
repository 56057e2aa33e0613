//! Per-account fetch orchestration.
//!
//! Accounts are processed sequentially in resolver order. A failing account
//! contributes an [`AccountError`] and never blocks its siblings; the run
//! as a whole succeeds as long as at least one account was resolved.

use tracing::debug;

use daybrief_core::{Account, AccountError, Brief, QueryDescriptor, RecordKind};
use daybrief_providers::{RecordSource, normalize};

/// Fetches and normalizes records for every account, isolating failures.
///
/// The returned [`Brief`] lists records in account order, then provider
/// order within each account.
pub async fn aggregate(
    source: &dyn RecordSource,
    kind: RecordKind,
    accounts: Vec<Account>,
    query: &QueryDescriptor,
) -> Brief {
    let mut records = Vec::new();
    let mut errors = Vec::new();

    for account in &accounts {
        match source.fetch(kind, &account.email, query).await {
            Ok(raw_records) => {
                debug!(account = %account.email, count = raw_records.len(), "fetched records");
                records.extend(
                    raw_records
                        .iter()
                        .map(|raw| normalize(kind, raw, account.kind)),
                );
            }
            Err(err) => {
                errors.push(AccountError {
                    email: account.email.clone(),
                    message: err.to_string(),
                });
            }
        }
    }

    Brief {
        accounts,
        records,
        errors,
    }
}
