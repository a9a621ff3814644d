//! Request-scoped data types and re-exports of the shared configuration primitives.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use feedmix_types::{ContentMix, FeedConfig, FeedError, MixError, MixRule, ProviderKey};

/// One piece of content fetched from a provider.
///
/// The engine never interprets these fields; `source` is carried through untouched
/// as provenance, so it names whichever provider actually produced the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Provider-assigned identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Name of the provider that produced the item.
    pub source: String,
    /// Short description.
    pub summary: String,
    /// Link to the full content.
    pub link: String,
    /// Instant after which the item should no longer be shown.
    pub expiry: DateTime<Utc>,
}

/// Half-open range `[offset, offset + count)` of positions into the infinite mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct Window {
    offset: usize,
    count: usize,
}

impl Window {
    /// Build a window.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `offset + count` does not fit in a `usize`.
    pub fn new(offset: usize, count: usize) -> Result<Self, FeedError> {
        offset.checked_add(count).ok_or_else(|| {
            FeedError::InvalidArg(format!("window overflows: offset={offset} count={count}"))
        })?;
        Ok(Self { offset, count })
    }

    /// First position of the window.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of positions requested.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Whether the window requests nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Positions covered by the window, in increasing order.
    pub fn positions(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.count
    }
}

#[derive(Deserialize)]
struct RawWindow {
    offset: usize,
    count: usize,
}

impl TryFrom<RawWindow> for Window {
    type Error = FeedError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.offset, raw.count)
    }
}

/// Number of items to request from each provider for one window.
///
/// Every stored count is positive; providers that are not needed are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Demand {
    counts: BTreeMap<ProviderKey, usize>,
}

impl Demand {
    /// An empty demand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve one more item from `provider`.
    pub fn reserve(&mut self, provider: &ProviderKey) {
        *self.counts.entry(provider.clone()).or_insert(0) += 1;
    }

    /// Items to request from `provider`; zero when it is not needed.
    #[must_use]
    pub fn get(&self, provider: &ProviderKey) -> usize {
        self.counts.get(provider).copied().unwrap_or(0)
    }

    /// Number of distinct providers to fetch from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no fetch is needed at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all per-provider counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Providers and their counts, ordered by provider key.
    pub fn iter(&self) -> impl Iterator<Item = (&ProviderKey, usize)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }
}

/// FIFO of items fetched from one provider for one request.
///
/// Built by the provider's fetch task, then moved to the compositor as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderQueue {
    items: VecDeque<ContentItem>,
}

impl ProviderQueue {
    /// Take the oldest item, if any.
    pub fn pop(&mut self) -> Option<ContentItem> {
        self.items.pop_front()
    }

    /// Items still waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is drained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<ContentItem>> for ProviderQueue {
    fn from(items: Vec<ContentItem>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl FromIterator<ContentItem> for ProviderQueue {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
