use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use feedmix_core::{ContentProvider, Demand, FeedError, ProviderKey, ProviderQueue};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::Feedmix;

/// Fetched items per provider for one request, handed to the compositor.
pub type ProviderQueues = HashMap<ProviderKey, ProviderQueue>;

impl Feedmix {
    /// Fetch from every provider in `demand` concurrently.
    ///
    /// One task per provider, each bounded by the configured provider timeout. The
    /// call returns once every task has delivered or been abandoned, so its latency is
    /// bounded by the timeout regardless of how many providers are slow. Failed or late
    /// providers get an empty queue; their errors are logged, never returned.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "feedmix::dispatch",
            skip(self, demand),
            fields(
                providers = demand.len(),
                items = demand.total(),
                timeout_ms = u64::try_from(self.cfg.provider_timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub async fn dispatch(&self, demand: &Demand, identity: &str) -> ProviderQueues {
        let timeout = self.cfg.provider_timeout;
        let tasks = demand.iter().map(|(key, count)| {
            let provider = self.providers.get(key).cloned();
            let key = key.clone();
            let identity = identity.to_owned();
            async move {
                let res = match provider {
                    Some(p) => fetch_with_deadline(p, identity, count, timeout).await,
                    None => Err(FeedError::UnknownProvider(key.to_string())),
                };
                let queue = match res {
                    Ok(q) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(provider = %key, requested = count, received = q.len(), "provider delivered");
                        q
                    }
                    Err(_e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(provider = %key, requested = count, error = %_e, "provider yielded no content");
                        ProviderQueue::default()
                    }
                };
                (key, queue)
            }
        });

        futures::future::join_all(tasks)
            .await
            .into_iter()
            .collect()
    }
}

/// Run one provider fetch on its own task and wait for it at most `timeout`.
///
/// The task owns the items it fetches until it sends them over a one-shot channel.
/// On timeout the receiver is dropped before the task is aborted, so a fetch that
/// still completes has nowhere to deliver: its send fails and the items are dropped.
/// The task is also aborted if the caller stops waiting before the deadline.
async fn fetch_with_deadline(
    provider: Arc<dyn ContentProvider>,
    identity: String,
    count: usize,
    timeout: Duration,
) -> Result<ProviderQueue, FeedError> {
    let name = provider.key().to_string();
    let (tx, rx) = oneshot::channel();

    let task = AbortOnDrop(tokio::spawn(async move {
        let res = provider.fetch(&identity, count).await.map(|mut items| {
            items.truncate(count);
            ProviderQueue::from(items)
        });
        let _ = tx.send(res);
    }));

    match tokio::time::timeout(timeout, rx).await {
        Ok(Ok(res)) => res,
        // sender dropped without sending: the fetch panicked
        Ok(Err(_)) => Err(FeedError::connector(name, "fetch task ended without a result")),
        Err(_) => {
            drop(task);
            Err(FeedError::provider_timeout(name))
        }
    }
}

/// Aborts the fetch task when dropped, including when the dispatch future itself
/// is dropped mid-flight. Aborting a finished task is a no-op.
struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}
