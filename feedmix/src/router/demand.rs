use feedmix_core::{ContentMix, Demand, Window};

use crate::Feedmix;

/// Per-provider item counts needed to fill `window` from `mix`.
///
/// Each position reserves one item from its primary and one from its fallback when
/// the rule has one. Fallback capacity is reserved unconditionally, without knowing
/// whether the primary will deliver. An empty window yields an empty demand.
#[must_use]
pub fn demand_for(mix: &ContentMix, window: Window) -> Demand {
    let mut demand = Demand::new();
    for position in window.positions() {
        let rule = mix.rule_at(position);
        demand.reserve(&rule.primary);
        if let Some(fallback) = &rule.fallback {
            demand.reserve(fallback);
        }
    }
    demand
}

impl Feedmix {
    /// Demand for `window` against this orchestrator's mix.
    #[must_use]
    pub fn demand(&self, window: Window) -> Demand {
        demand_for(&self.mix, window)
    }
}
