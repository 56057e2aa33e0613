//! Provider response envelopes.
//!
//! Provider output is tolerated in two shapes: an object carrying a named
//! list field, or a bare top-level array. An object missing the list field
//! (or carrying it with a non-array value) yields an empty list — the
//! alternative reading, treating the whole object as a single record, is
//! deliberately not implemented (see DESIGN.md). Any other top-level shape
//! is a parse error for that account only.

use serde_json::Value;

use crate::error::{ProviderError, ProviderResult};
use crate::raw::RawRecord;

/// Extracts the record list from a provider response body.
///
/// Non-object entries inside the list are skipped.
pub fn extract_records(
    body: Value,
    list_field: &str,
    command: &str,
) -> ProviderResult<Vec<RawRecord>> {
    let items = match body {
        Value::Object(mut envelope) => match envelope.remove(list_field) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        Value::Array(items) => items,
        _ => {
            return Err(ProviderError::Envelope {
                command: command.to_string(),
            });
        }
    };
    Ok(items.into_iter().filter_map(RawRecord::from_value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(body: Value) -> ProviderResult<Vec<RawRecord>> {
        extract_records(body, "events", "gog")
    }

    #[test]
    fn object_envelope_yields_list_field() {
        let records = extract(json!({"events": [{"summary": "A"}, {"summary": "B"}]})).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].str_field("summary"), "A");
    }

    #[test]
    fn object_without_list_field_yields_empty() {
        let records = extract(json!({"kind": "calendar#events"})).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn object_with_mistyped_list_field_yields_empty() {
        let records = extract(json!({"events": "not-a-list"})).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn bare_array_is_used_directly() {
        let records = extract(json!([{"summary": "A"}])).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let records = extract(json!([{"summary": "A"}, 42, "x", null])).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn other_top_level_shapes_are_errors() {
        for body in [json!("text"), json!(12), json!(true), json!(null)] {
            let err = extract(body).unwrap_err();
            assert_eq!(err.to_string(), "unexpected JSON format from gog");
        }
    }

    #[test]
    fn list_field_name_is_per_kind() {
        let body = json!({"messages": [{"subject": "Hi"}]});
        let records = extract_records(body, "messages", "gog").unwrap();
        assert_eq!(records.len(), 1);
    }
}
