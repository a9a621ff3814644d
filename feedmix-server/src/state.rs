use std::sync::Arc;

use feedmix::Feedmix;

use crate::request::RequestLimits;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Built once in `main`; the orchestrator inside is immutable and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<Feedmix>,
    pub limits: RequestLimits,
}
