//! Record kinds and canonical record types.
//!
//! This module defines the strategy axis of the pipeline and its output:
//! - [`RecordKind`]: calendar events vs. mail messages
//! - [`EventRecord`] / [`MessageRecord`]: the canonical normalized shapes
//! - [`Brief`]: the merged result of one invocation

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::account::{Account, AccountKind};
use crate::window::WeekConvention;

/// The record-kind axis of the pipeline.
///
/// Both kinds share one account-resolution → window → fetch → normalize →
/// merge pipeline; they differ only in week convention, provider arguments
/// and normalization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Calendar events.
    Events,
    /// Mail messages.
    Messages,
}

impl RecordKind {
    /// The provider envelope field holding the record list.
    pub fn list_field(&self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Messages => "messages",
        }
    }

    /// The week convention used when building windows for this kind.
    pub fn week_convention(&self) -> WeekConvention {
        match self {
            Self::Events => WeekConvention {
                week_start: Weekday::Mon,
                progressive_this_week: false,
                today_token: None,
            },
            Self::Messages => WeekConvention {
                week_start: Weekday::Sun,
                progressive_this_week: true,
                today_token: Some("newer_than:1d"),
            },
        }
    }
}

/// A normalized calendar event.
///
/// Missing provider data is replaced by defaults at normalization time, so
/// no field here is ever absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub summary: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub status: String,
    /// The authenticated user's own response status, when known.
    pub response: String,
    pub account_type: AccountKind,
}

/// A normalized mail message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub date: String,
    pub subject: String,
    pub from_name: String,
    pub from_email: String,
    /// Provider labels with the unread sentinel removed.
    pub labels: Vec<String>,
    pub is_unread: bool,
    pub account_type: AccountKind,
}

/// A canonical record of either kind.
///
/// Serialized untagged: the variant's own fields are the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CanonicalRecord {
    Event(EventRecord),
    Message(MessageRecord),
}

/// A per-account failure that did not abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountError {
    pub email: String,
    #[serde(rename = "error")]
    pub message: String,
}

/// The merged result of one invocation.
///
/// `accounts` and `records` are always present in the output, even when
/// empty; `errors` is omitted entirely when no account failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    pub accounts: Vec<Account>,
    pub records: Vec<CanonicalRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<AccountError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_fields_per_kind() {
        assert_eq!(RecordKind::Events.list_field(), "events");
        assert_eq!(RecordKind::Messages.list_field(), "messages");
    }

    #[test]
    fn week_conventions_per_kind() {
        let events = RecordKind::Events.week_convention();
        assert_eq!(events.week_start, Weekday::Mon);
        assert!(!events.progressive_this_week);
        assert!(events.today_token.is_none());

        let messages = RecordKind::Messages.week_convention();
        assert_eq!(messages.week_start, Weekday::Sun);
        assert!(messages.progressive_this_week);
        assert_eq!(messages.today_token, Some("newer_than:1d"));
    }

    #[test]
    fn event_record_wire_format() {
        let record = CanonicalRecord::Event(EventRecord {
            summary: "Standup".to_string(),
            start: "2024-01-10T09:00:00+01:00".to_string(),
            end: "2024-01-10T09:15:00+01:00".to_string(),
            location: String::new(),
            status: "confirmed".to_string(),
            response: "accepted".to_string(),
            account_type: AccountKind::Work,
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            json!({
                "summary": "Standup",
                "start": "2024-01-10T09:00:00+01:00",
                "end": "2024-01-10T09:15:00+01:00",
                "location": "",
                "status": "confirmed",
                "response": "accepted",
                "account_type": "work",
            })
        );
    }

    #[test]
    fn message_record_wire_format() {
        let record = CanonicalRecord::Message(MessageRecord {
            date: "2024-01-10T08:00:00Z".to_string(),
            subject: "Hello".to_string(),
            from_name: "Alice".to_string(),
            from_email: "alice@gmail.com".to_string(),
            labels: vec!["INBOX".to_string()],
            is_unread: true,
            account_type: AccountKind::Personal,
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            json!({
                "date": "2024-01-10T08:00:00Z",
                "subject": "Hello",
                "from_name": "Alice",
                "from_email": "alice@gmail.com",
                "labels": ["INBOX"],
                "is_unread": true,
                "account_type": "personal",
            })
        );
    }

    #[test]
    fn account_error_wire_format() {
        let error = AccountError {
            email: "me@corp.example".to_string(),
            message: "token expired".to_string(),
        };
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            json!({"email": "me@corp.example", "error": "token expired"})
        );
    }

    #[test]
    fn serde_roundtrip() {
        let brief = Brief {
            accounts: vec![Account::new("me@gmail.com", AccountKind::Personal)],
            records: vec![CanonicalRecord::Message(MessageRecord {
                date: String::new(),
                subject: "(No subject)".to_string(),
                from_name: String::new(),
                from_email: String::new(),
                labels: Vec::new(),
                is_unread: false,
                account_type: AccountKind::Personal,
            })],
            errors: vec![AccountError {
                email: "other@corp.example".to_string(),
                message: "boom".to_string(),
            }],
        };
        let json = serde_json::to_string(&brief).unwrap();
        let parsed: Brief = serde_json::from_str(&json).unwrap();
        assert_eq!(brief, parsed);
    }
}
