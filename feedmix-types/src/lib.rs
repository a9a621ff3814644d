//! Feedmix-specific configuration primitives shared by the orchestrator, providers and server.
#![warn(missing_docs)]

mod config;
mod error;
mod mix;
mod provider;

pub use config::FeedConfig;
pub use error::{FeedError, MixError};
pub use mix::{ContentMix, MixRule};
pub use provider::ProviderKey;
