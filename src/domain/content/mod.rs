pub mod error;
pub mod model;

pub use error::ProviderError;
pub use model::{ContentRecord, ContentSource, FeedKind, FeedRequest};

use async_trait::async_trait;

/// An upstream source of content cards.
///
/// Implementations own their response-schema normalization:
/// - a record that cannot be normalized is dropped, not reported
/// - a body that is not valid structured data fails the whole call
/// - transport and status failures map onto [`ProviderError`]
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Source tag stamped on every record this provider returns
    fn source(&self) -> ContentSource;

    /// False when the provider is known to fail without calling upstream,
    /// e.g. a missing credential
    fn is_configured(&self) -> bool {
        true
    }

    /// Fetch up to `limit` normalized records
    async fn fetch(&self, limit: usize) -> Result<Vec<ContentRecord>, ProviderError>;
}

/// Fixed in-memory set of hand-authored records. Loading never fails.
pub trait CuratedRepository: Send + Sync {
    fn load(&self, shuffled: bool) -> Vec<ContentRecord>;
}
