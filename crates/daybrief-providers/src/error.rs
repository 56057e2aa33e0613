//! Error types for provider operations.
//!
//! Discovery failures degrade to an empty account list at the resolver;
//! fetch and parse failures are isolated per account by the aggregator.
//! The `Display` output of these errors is what ends up in the per-account
//! `error` field of the output document.

use thiserror::Error;

/// An error from the external provider boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider executable could not be started.
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The provider did not finish within the allotted time.
    #[error("{command} timed out after {seconds}s")]
    Timeout { command: String, seconds: u64 },

    /// The provider exited non-zero. The message is the trimmed diagnostic
    /// stream, or a generic exit-code message when that stream was empty.
    #[error("{0}")]
    Failed(String),

    /// The provider produced output that was not valid JSON.
    #[error("invalid JSON from {command}: {source}")]
    Json {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    /// The provider produced JSON of an unexpected top-level shape.
    #[error("unexpected JSON format from {command}")]
    Envelope { command: String },
}

/// A specialized Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_displays_message_verbatim() {
        let err = ProviderError::Failed("credentials expired".to_string());
        assert_eq!(err.to_string(), "credentials expired");
    }

    #[test]
    fn timeout_names_command_and_bound() {
        let err = ProviderError::Timeout {
            command: "gog".to_string(),
            seconds: 30,
        };
        assert_eq!(err.to_string(), "gog timed out after 30s");
    }

    #[test]
    fn envelope_names_command() {
        let err = ProviderError::Envelope {
            command: "gog".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected JSON format from gog");
    }
}
