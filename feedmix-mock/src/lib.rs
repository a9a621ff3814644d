//! Content providers that need no network: a sample generator for demos and a
//! scriptable mock for tests.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use feedmix_core::{ContentItem, ContentProvider, FeedError, ProviderKey};

mod dynamic;

pub use dynamic::{DynamicMockController, DynamicMockProvider, FetchCall, MockBehavior};

/// Build `count` placeholder items attributed to `source`.
///
/// Ids are `"{source}-{index}"`, so results are deterministic and easy to assert on.
#[must_use]
pub fn generate_items(source: &str, count: usize) -> Vec<ContentItem> {
    let expiry = Utc::now() + Duration::days(1);
    (0..count)
        .map(|i| ContentItem {
            id: format!("{source}-{i}"),
            title: format!("Item #{i}"),
            source: source.to_string(),
            summary: format!("Item summary #{i}"),
            link: format!("https://{source}.example.com/{i}"),
            expiry,
        })
        .collect()
}

/// Example provider client that always answers with exactly `count` fresh items.
///
/// Item ids are random, so two fetches never return the same content.
pub struct SampleProvider {
    key: ProviderKey,
}

impl SampleProvider {
    /// Create a sample provider registered under `key`.
    pub fn new(key: impl Into<ProviderKey>) -> Self {
        Self { key: key.into() }
    }
}

#[async_trait]
impl ContentProvider for SampleProvider {
    fn key(&self) -> &ProviderKey {
        &self.key
    }

    fn vendor(&self) -> &'static str {
        "Sample"
    }

    async fn fetch(&self, _identity: &str, count: usize) -> Result<Vec<ContentItem>, FeedError> {
        let mut items = generate_items(self.key.as_str(), count);
        for item in &mut items {
            item.id = rand::random::<u64>().to_string();
        }
        Ok(items)
    }
}
