//! Output serialization.
//!
//! One pretty-printed JSON document on stdout per invocation. Key order
//! follows struct declaration order, `errors` is omitted entirely when no
//! account failed, and record text is not HTML-escaped — titles and
//! subjects may contain `<`, `>` and `&` verbatim.

use daybrief_core::Brief;

/// Serializes the brief for stdout.
pub fn render(brief: &Brief) -> serde_json::Result<String> {
    serde_json::to_string_pretty(brief)
}

/// Serializes the fatal error body emitted when no accounts resolve.
pub fn render_fatal(message: &str) -> String {
    serde_json::to_string_pretty(&serde_json::json!({ "error": message }))
        .expect("error body is serializable")
}
