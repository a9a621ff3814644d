use feedmix_core::{ContentItem, Window};

use crate::Feedmix;
use crate::router::compose::compose;

impl Feedmix {
    /// Resolve `window` into an ordered feed for the requester `identity`.
    ///
    /// Behavior:
    /// - Computes the per-provider demand, fetches from all needed providers
    ///   concurrently under the provider timeout, then composes the window in mix order.
    /// - Never fails. Slow or failing providers shrink the feed instead: the output holds
    ///   `window.count()` items, or stops at the first position nothing could fill.
    /// - An empty window returns immediately without contacting any provider.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "feedmix::feed",
            skip(self),
            fields(offset = window.offset(), count = window.count()),
        )
    )]
    pub async fn feed(&self, window: Window, identity: &str) -> Vec<ContentItem> {
        let demand = self.demand(window);
        if demand.is_empty() {
            return Vec::new();
        }
        let queues = self.dispatch(&demand, identity).await;
        let out = compose(&self.mix, window, queues);

        #[cfg(feature = "tracing")]
        tracing::info!(
            requested = window.count(),
            returned = out.len(),
            "feed resolved"
        );

        out
    }
}
