//! Account resolution.
//!
//! Explicit emails always win completely over discovery: when either flag
//! is given, discovery is not consulted at all. Config-file accounts are
//! appended afterwards in either case, preserving file order.

use daybrief_core::{Account, AccountKind};
use daybrief_providers::GogClient;

use crate::config::Config;

/// Resolves the ordered account list for one invocation.
pub async fn resolve_accounts(
    personal: Option<&str>,
    work: Option<&str>,
    client: &GogClient,
    config: &Config,
) -> Vec<Account> {
    let mut accounts = explicit_accounts(personal, work);
    if accounts.is_empty() {
        for email in client.discover_accounts().await {
            accounts.push(Account::classified(email));
        }
    }
    accounts.extend(config.accounts.iter().map(|entry| entry.to_account()));
    accounts
}

/// Accounts from explicit flags, personal first. Empty values count as
/// unset.
fn explicit_accounts(personal: Option<&str>, work: Option<&str>) -> Vec<Account> {
    let mut accounts = Vec::new();
    if let Some(email) = personal.filter(|e| !e.is_empty()) {
        accounts.push(Account::new(email, AccountKind::Personal));
    }
    if let Some(email) = work.filter(|e| !e.is_empty()) {
        accounts.push(Account::new(email, AccountKind::Work));
    }
    accounts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigAccount;

    /// A client whose binary does not exist, so discovery yields nothing.
    fn dead_client() -> GogClient {
        GogClient::new("/nonexistent/gog-binary")
    }

    #[tokio::test]
    async fn explicit_accounts_win_over_discovery() {
        let accounts = resolve_accounts(
            Some("me@gmail.com"),
            Some("me@corp.example"),
            &dead_client(),
            &Config::default(),
        )
        .await;

        assert_eq!(
            accounts,
            vec![
                Account::new("me@gmail.com", AccountKind::Personal),
                Account::new("me@corp.example", AccountKind::Work),
            ]
        );
    }

    #[tokio::test]
    async fn single_explicit_account_suffices() {
        let accounts = resolve_accounts(
            None,
            Some("me@corp.example"),
            &dead_client(),
            &Config::default(),
        )
        .await;
        assert_eq!(accounts, vec![Account::new("me@corp.example", AccountKind::Work)]);
    }

    #[tokio::test]
    async fn empty_explicit_values_count_as_unset() {
        let accounts =
            resolve_accounts(Some(""), Some(""), &dead_client(), &Config::default()).await;
        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn failed_discovery_resolves_to_empty() {
        let accounts = resolve_accounts(None, None, &dead_client(), &Config::default()).await;
        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn config_accounts_append_after_explicit() {
        let config = Config {
            command: None,
            accounts: vec![ConfigAccount {
                email: "extra@example.org".to_string(),
                kind: None,
            }],
        };

        let accounts =
            resolve_accounts(Some("me@gmail.com"), None, &dead_client(), &config).await;

        assert_eq!(
            accounts,
            vec![
                Account::new("me@gmail.com", AccountKind::Personal),
                Account::new("extra@example.org", AccountKind::Work),
            ]
        );
    }

    #[tokio::test]
    async fn config_accounts_alone_avoid_the_fatal_path() {
        let config = Config {
            command: None,
            accounts: vec![ConfigAccount {
                email: "extra@gmail.com".to_string(),
                kind: None,
            }],
        };

        let accounts = resolve_accounts(None, None, &dead_client(), &config).await;
        assert_eq!(accounts, vec![Account::new("extra@gmail.com", AccountKind::Personal)]);
    }
}
