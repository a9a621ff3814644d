//! Configuration types shared across the orchestrator and the server.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `Feedmix` orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Deadline applied to every provider fetch of a single request.
    ///
    /// Providers run in parallel, so this also bounds the whole dispatch phase.
    pub provider_timeout: Duration,
}

impl FeedConfig {
    /// Default provider deadline.
    pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(2);
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Self::DEFAULT_PROVIDER_TIMEOUT,
        }
    }
}
