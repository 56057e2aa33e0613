//! RecordSource trait definition.
//!
//! [`RecordSource`] is the seam between the aggregation pipeline and the
//! external data provider: one bounded fetch per account. The production
//! implementation is [`GogClient`](crate::GogClient); tests substitute stub
//! sources.

use std::future::Future;
use std::pin::Pin;

use daybrief_core::{QueryDescriptor, RecordKind};

use crate::error::ProviderResult;
use crate::raw::RawRecord;

/// A boxed future for async trait methods.
///
/// Boxing keeps the trait object-safe so the aggregator can run against
/// `&dyn RecordSource`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A provider of raw records, queried per account.
pub trait RecordSource: Send + Sync {
    /// Fetches the raw records of `kind` for one account over `query`.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`](crate::ProviderError) on subprocess
    /// failure, timeout, or unparseable output. The caller isolates the
    /// failure to this account.
    fn fetch<'a>(
        &'a self,
        kind: RecordKind,
        account_email: &'a str,
        query: &'a QueryDescriptor,
    ) -> BoxFuture<'a, ProviderResult<Vec<RawRecord>>>;
}
