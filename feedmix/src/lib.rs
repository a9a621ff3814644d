//! Feedmix assembles a single ranked feed from several content providers.
//!
//! Overview
//! - A [`ContentMix`] assigns a primary (and optionally a fallback) provider to every
//!   position of an infinite, cyclic feed.
//! - A request asks for a [`Window`] of that feed. The orchestrator sizes one fetch
//!   per distinct provider, runs all fetches concurrently under a shared deadline,
//!   then rebuilds the window in mix order.
//!
//! Key behaviors and trade-offs
//! - Demand: every position reserves one item from its primary and, when configured,
//!   one from its fallback, whether or not the fallback ends up being used. This
//!   over-fetches but never needs a second round trip after a failure.
//! - Dispatch: exactly one task per provider. Each task hands its result back over a
//!   one-shot channel; once the deadline passes the receiver is dropped and the task
//!   aborted, so a late answer can never reach the compositor. Dropping the `feed`
//!   future aborts any fetch still in flight. Provider errors and
//!   timeouts degrade to an empty queue and are never returned to the caller.
//! - Composition: positions are filled in order from the primary's queue, then the
//!   fallback's. The first position that cannot be filled ends the feed, so the output
//!   is always a prefix of the window.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use feedmix::{ContentMix, Feedmix, MixRule, Window};
//!
//! let feed = Feedmix::builder()
//!     .with_provider(Arc::new(NewsProvider::new("news")))
//!     .with_provider(Arc::new(BlogProvider::new("blog")))
//!     .mix(ContentMix::new(vec![
//!         MixRule::with_fallback("news", "blog"),
//!         MixRule::new("blog"),
//!     ])?)
//!     .provider_timeout(std::time::Duration::from_secs(2))
//!     .build()?;
//!
//! let items = feed.feed(Window::new(0, 10)?, "203.0.113.7").await;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Feedmix, FeedmixBuilder};
pub use router::compose::compose;
pub use router::demand::demand_for;
pub use router::dispatch::ProviderQueues;

// Re-export core types for convenience
pub use feedmix_core::{
    ContentItem, ContentMix, ContentProvider, Demand, FeedConfig, FeedError, MixError, MixRule,
    ProviderKey, ProviderQueue, Window,
};
