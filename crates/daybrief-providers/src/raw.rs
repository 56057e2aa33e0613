//! Opaque provider records with total field accessors.
//!
//! Provider records are duck-typed JSON objects whose schema is
//! provider-defined and not guaranteed complete. [`RawRecord`] wraps one
//! object and exposes accessors that return defaults on absence or type
//! mismatch instead of failing on malformed data.

use serde_json::{Map, Value};

/// One opaque key→value record as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Creates a raw record from a JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wraps a JSON value if it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// String field, or `""` when absent or not a string.
    pub fn str_field(&self, key: &str) -> &str {
        str_of(&self.0, key)
    }

    /// Nested object field, or `None` when absent or not an object.
    pub fn object_field(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    /// Array field, or an empty slice when absent or not an array.
    pub fn list_field(&self, key: &str) -> &[Value] {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// String entries of an array field; non-string entries are skipped.
    pub fn str_list_field(&self, key: &str) -> Vec<String> {
        self.list_field(key)
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect()
    }
}

/// String field of a plain JSON object, or `""` when absent or mistyped.
pub fn str_of<'a>(object: &'a Map<String, Value>, key: &str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        RawRecord::from_value(value).unwrap()
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(RawRecord::from_value(json!([])).is_none());
        assert!(RawRecord::from_value(json!("text")).is_none());
        assert!(RawRecord::from_value(json!(null)).is_none());
        assert!(RawRecord::from_value(json!({})).is_some());
    }

    #[test]
    fn str_field_defaults_on_absence_and_mismatch() {
        let r = record(json!({"summary": "Standup", "count": 3}));
        assert_eq!(r.str_field("summary"), "Standup");
        assert_eq!(r.str_field("missing"), "");
        assert_eq!(r.str_field("count"), "");
    }

    #[test]
    fn object_field_defaults_on_mismatch() {
        let r = record(json!({"start": {"date": "2024-01-10"}, "end": "oops"}));
        assert!(r.object_field("start").is_some());
        assert!(r.object_field("end").is_none());
        assert!(r.object_field("missing").is_none());
    }

    #[test]
    fn list_field_defaults_to_empty() {
        let r = record(json!({"attendees": [{"self": true}], "labels": "oops"}));
        assert_eq!(r.list_field("attendees").len(), 1);
        assert!(r.list_field("labels").is_empty());
        assert!(r.list_field("missing").is_empty());
    }

    #[test]
    fn str_list_field_skips_non_strings() {
        let r = record(json!({"labels": ["INBOX", 7, null, "UNREAD"]}));
        assert_eq!(r.str_list_field("labels"), vec!["INBOX", "UNREAD"]);
    }
}
