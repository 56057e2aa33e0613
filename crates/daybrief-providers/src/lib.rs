//! Record sources: the external provider boundary.
//!
//! This crate covers everything between the aggregation pipeline and the
//! external data provider:
//!
//! - [`RecordSource`] - the per-account fetch abstraction
//! - [`GogClient`] - the production source, running `gog` as a bounded
//!   subprocess for discovery and fetching
//! - [`RawRecord`] - opaque provider records with total field accessors
//! - [`normalize`] - raw record to canonical record conversion
//! - [`ProviderError`] - error types for provider operations

pub mod envelope;
pub mod error;
pub mod gog;
pub mod normalize;
pub mod raw;
pub mod source;

// Re-export main types at crate root
pub use envelope::extract_records;
pub use error::{ProviderError, ProviderResult};
pub use gog::GogClient;
pub use normalize::{normalize, split_sender};
pub use raw::RawRecord;
pub use source::{BoxFuture, RecordSource};
