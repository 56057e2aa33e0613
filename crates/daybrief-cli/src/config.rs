//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/daybrief/config.toml` by default:
//!
//! ```toml
//! command = "gog"              # provider binary override
//!
//! [[accounts]]                 # accounts discovery cannot see
//! email = "me@example.org"
//! kind = "work"                # omitted -> classified from the domain
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use daybrief_core::{Account, AccountKind, classify};

/// Configuration for the daybrief CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider command to invoke. Defaults to `gog`.
    pub command: Option<String>,

    /// Additional accounts not visible to provider discovery.
    #[serde(default)]
    pub accounts: Vec<ConfigAccount>,
}

/// One secondary account entry from the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigAccount {
    /// The account's email address.
    pub email: String,

    /// Explicit classification; omitted entries are classified by domain.
    pub kind: Option<AccountKind>,
}

impl ConfigAccount {
    /// Resolves this entry to an [`Account`].
    pub fn to_account(&self) -> Account {
        let kind = self.kind.unwrap_or_else(|| classify(&self.email));
        Account::new(self.email.clone(), kind)
    }
}

impl Config {
    /// Loads configuration from the default path.
    ///
    /// A missing file is not an error; it yields the defaults.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("daybrief")
            .join("config.toml")
    }

    /// The provider command to run.
    pub fn provider_command(&self) -> &str {
        self.command.as_deref().unwrap_or("gog")
    }
}
