//! Raw record to canonical record conversion.
//!
//! Each record kind applies its own field-mapping rules but follows the
//! same pattern: read provider fields through total accessors, fall back to
//! documented defaults when data is missing or mistyped, and tag the result
//! with the account classification.

use serde_json::Value;

use daybrief_core::{AccountKind, CanonicalRecord, EventRecord, MessageRecord, RecordKind};

use crate::raw::{self, RawRecord};

/// Placeholder used when an event has no usable summary.
const NO_TITLE: &str = "(No title)";

/// Placeholder used when a message has no usable subject.
const NO_SUBJECT: &str = "(No subject)";

/// Converts one provider record into the canonical shape for `kind`.
///
/// Never fails: missing or malformed provider fields fall back to the
/// documented defaults.
pub fn normalize(kind: RecordKind, record: &RawRecord, account: AccountKind) -> CanonicalRecord {
    match kind {
        RecordKind::Events => CanonicalRecord::Event(normalize_event(record, account)),
        RecordKind::Messages => CanonicalRecord::Message(normalize_message(record, account)),
    }
}

fn normalize_event(record: &RawRecord, account: AccountKind) -> EventRecord {
    let summary = match record.str_field("summary") {
        "" => NO_TITLE,
        s => s,
    };
    EventRecord {
        summary: summary.to_string(),
        start: time_field(record, "start"),
        end: time_field(record, "end"),
        location: record.str_field("location").to_string(),
        status: record.str_field("status").to_string(),
        response: self_response(record),
        account_type: account,
    }
}

fn normalize_message(record: &RawRecord, account: AccountKind) -> MessageRecord {
    let subject = match record.str_field("subject") {
        "" => NO_SUBJECT,
        s => s,
    };
    let (from_name, from_email) = split_sender(record.str_field("from"));

    let mut labels = record.str_list_field("labels");
    let before = labels.len();
    labels.retain(|label| label != "UNREAD");
    let is_unread = labels.len() != before;

    MessageRecord {
        date: record.str_field("date").to_string(),
        subject: subject.to_string(),
        from_name,
        from_email,
        labels,
        is_unread,
        account_type: account,
    }
}

/// Reads a provider time field, preferring the structured `dateTime`
/// sub-field and falling back to the all-day `date` sub-field.
fn time_field(record: &RawRecord, key: &str) -> String {
    let Some(time) = record.object_field(key) else {
        return String::new();
    };
    match raw::str_of(time, "dateTime") {
        "" => raw::str_of(time, "date").to_string(),
        datetime => datetime.to_string(),
    }
}

/// The authenticated user's own response status.
///
/// Scans the attendee list for the first entry whose `self` flag is `true`
/// and reads its `responseStatus`; empty when no such entry or field
/// exists.
fn self_response(record: &RawRecord) -> String {
    record
        .list_field("attendees")
        .iter()
        .filter_map(Value::as_object)
        .find(|attendee| attendee.get("self").and_then(Value::as_bool) == Some(true))
        .map(|attendee| raw::str_of(attendee, "responseStatus").to_string())
        .unwrap_or_default()
}

/// Splits a `"Display Name <email@domain>"` sender into name and address.
///
/// Without angle brackets the whole trimmed string is used for both; no
/// address validation is performed.
pub fn split_sender(sender: &str) -> (String, String) {
    let sender = sender.trim();
    if sender.is_empty() {
        return (String::new(), String::new());
    }
    if sender.contains('>') {
        if let Some((name, rest)) = sender.split_once('<') {
            let address = rest.trim();
            let address = address.strip_suffix('>').unwrap_or(address).trim();
            return (name.trim().to_string(), address.to_string());
        }
    }
    (sender.to_string(), sender.to_string())
}
