//! Core types: accounts, time windows, canonical records

pub mod account;
pub mod record;
pub mod window;

pub use account::{Account, AccountKind, PERSONAL_DOMAINS, classify};
pub use record::{AccountError, Brief, CanonicalRecord, EventRecord, MessageRecord, RecordKind};
pub use window::{QueryDescriptor, WeekConvention, WindowFlags, WindowMode, build_query};
