use async_trait::async_trait;

use crate::{ContentItem, FeedError, ProviderKey};

/// A third-party content source.
///
/// Implementations must be safe to call concurrently with other providers. They may be
/// slow or fail; the orchestrator treats a late answer and an error the same way and
/// simply stops waiting after its deadline. A provider that wants real cancellation
/// must make its `fetch` future cancel-safe, since the orchestrator aborts the task
/// running it once the deadline has passed.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Key under which this provider is referenced by the content mix.
    fn key(&self) -> &ProviderKey;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch up to `count` items for the requester identified by `identity`
    /// (typically the client IP address).
    ///
    /// Items are consumed in the order returned.
    async fn fetch(&self, identity: &str, count: usize) -> Result<Vec<ContentItem>, FeedError>;
}
