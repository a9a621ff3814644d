use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use feedmix_core::{ContentMix, ContentProvider, FeedConfig, FeedError, ProviderKey};

/// Orchestrator that resolves feed windows against a content mix.
///
/// Built once at startup and shared by reference (typically behind an `Arc`) across
/// concurrent requests. Nothing in it is mutated after [`FeedmixBuilder::build`].
pub struct Feedmix {
    pub(crate) providers: HashMap<ProviderKey, Arc<dyn ContentProvider>>,
    pub(crate) mix: ContentMix,
    pub(crate) cfg: FeedConfig,
}

/// Builder for constructing a `Feedmix` orchestrator.
pub struct FeedmixBuilder {
    providers: Vec<Arc<dyn ContentProvider>>,
    mix: ContentMix,
    cfg: FeedConfig,
}

impl Default for FeedmixBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedmixBuilder {
    /// Create a new builder with the default eight-slot mix and a 2s provider deadline.
    ///
    /// Starts with no providers; register every provider the mix references via
    /// [`with_provider`](Self::with_provider).
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: vec![],
            mix: ContentMix::default(),
            cfg: FeedConfig::default(),
        }
    }

    /// Register a provider under its own [`ContentProvider::key`].
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn ContentProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Replace the content mix.
    #[must_use]
    pub fn mix(mut self, mix: ContentMix) -> Self {
        self.mix = mix;
        self
    }

    /// Set the per-provider fetch deadline.
    ///
    /// Fetches run in parallel, so this is also the upper bound on how long a feed
    /// request waits for providers.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: FeedConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Feedmix` orchestrator.
    ///
    /// # Errors
    /// - `InvalidArg` if no providers were registered or two share a key.
    /// - `UnknownProvider` if the mix references a key with no registered provider.
    pub fn build(self) -> Result<Feedmix, FeedError> {
        if self.providers.is_empty() {
            return Err(FeedError::InvalidArg(
                "no providers registered; add at least one via with_provider(...)".to_string(),
            ));
        }

        let mut providers: HashMap<ProviderKey, Arc<dyn ContentProvider>> =
            HashMap::with_capacity(self.providers.len());
        for p in self.providers {
            let key = p.key().clone();
            if providers.insert(key.clone(), p).is_some() {
                return Err(FeedError::InvalidArg(format!(
                    "provider registered twice: {key}"
                )));
            }
        }

        if let Some(missing) = self
            .mix
            .providers()
            .into_iter()
            .find(|k| !providers.contains_key(*k))
        {
            return Err(FeedError::UnknownProvider(missing.to_string()));
        }

        Ok(Feedmix {
            providers,
            mix: self.mix,
            cfg: self.cfg,
        })
    }
}

impl Feedmix {
    /// Start building a new `Feedmix` instance.
    #[must_use]
    pub fn builder() -> FeedmixBuilder {
        FeedmixBuilder::new()
    }

    /// The content mix this orchestrator resolves against.
    #[must_use]
    pub const fn mix(&self) -> &ContentMix {
        &self.mix
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FeedConfig {
        &self.cfg
    }

    /// Registered provider for `key`, if any.
    #[must_use]
    pub fn provider(&self, key: &ProviderKey) -> Option<&Arc<dyn ContentProvider>> {
        self.providers.get(key)
    }
}
