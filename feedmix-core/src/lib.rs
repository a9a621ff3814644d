//! feedmix-core
//!
//! Core types and traits shared across the feedmix workspace.
//!
//! - `types`: content items, request windows, per-provider demand and queues.
//! - `provider`: the `ContentProvider` trait every content source implements.
//!
//! Async runtime
//! -------------
//! The provider trait is runtime-agnostic, but the `feedmix` orchestrator spawns one
//! Tokio task per provider and requires providers to be `Send + Sync + 'static`
//! behind an `Arc`.
#![warn(missing_docs)]

/// The content provider trait.
pub mod provider;
/// Feed items, windows, demand and queues.
pub mod types;

pub use provider::ContentProvider;
pub use types::*;
