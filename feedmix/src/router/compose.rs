use feedmix_core::{ContentItem, ContentMix, ProviderKey, Window};

use crate::ProviderQueues;

/// Rebuild `window` in mix order from the fetched queues.
///
/// Position by position, takes the next item from the primary's queue, else from the
/// fallback's. Stops at the first position neither can fill: later positions are not
/// attempted, so the result is a prefix of the window and never has gaps.
///
/// Takes the queues by value; whatever is left over is dropped with them.
#[must_use]
pub fn compose(mix: &ContentMix, window: Window, mut queues: ProviderQueues) -> Vec<ContentItem> {
    let mut out = Vec::new();
    for position in window.positions() {
        let rule = mix.rule_at(position);
        let next = take(&mut queues, &rule.primary)
            .or_else(|| rule.fallback.as_ref().and_then(|fb| take(&mut queues, fb)));
        match next {
            Some(item) => out.push(item),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    position,
                    primary = %rule.primary,
                    filled = out.len(),
                    requested = window.count(),
                    "no content for position; truncating feed"
                );
                break;
            }
        }
    }
    out
}

fn take(queues: &mut ProviderQueues, key: &ProviderKey) -> Option<ContentItem> {
    queues.get_mut(key).and_then(|q| q.pop())
}
