//! The cyclic content mix: which provider fills each feed position.
//!
//! A mix is an ordered, non-empty list of [`MixRule`]s repeated forever. Position
//! `i` of any feed is governed by `rules[i % rules.len()]`. The mix is validated
//! once when it is built or deserialized and is immutable afterwards, so it can be
//! shared read-only across concurrent requests.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::MixError;
use crate::provider::ProviderKey;

/// Provider assignment for one slot of the mix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MixRule {
    /// Provider asked first for this slot.
    pub primary: ProviderKey,
    /// Provider used when the primary has nothing left for this slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<ProviderKey>,
}

impl MixRule {
    /// A rule without a fallback.
    pub fn new(primary: impl Into<ProviderKey>) -> Self {
        Self {
            primary: primary.into(),
            fallback: None,
        }
    }

    /// A rule that falls back to `fallback` when `primary` runs dry.
    pub fn with_fallback(primary: impl Into<ProviderKey>, fallback: impl Into<ProviderKey>) -> Self {
        Self {
            primary: primary.into(),
            fallback: Some(fallback.into()),
        }
    }
}

/// Validated, non-empty cyclic sequence of [`MixRule`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MixRule>", into = "Vec<MixRule>")]
pub struct ContentMix {
    rules: Vec<MixRule>,
}

impl ContentMix {
    /// Build a mix from its rules.
    ///
    /// # Errors
    /// Returns [`MixError::Empty`] when `rules` is empty.
    pub fn new(rules: Vec<MixRule>) -> Result<Self, MixError> {
        if rules.is_empty() {
            return Err(MixError::Empty);
        }
        Ok(Self { rules })
    }

    /// Rule governing `position` in the infinite repetition of the mix.
    #[must_use]
    pub fn rule_at(&self, position: usize) -> &MixRule {
        &self.rules[position % self.rules.len()]
    }

    /// Number of rules in one cycle. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules of one cycle, in order.
    #[must_use]
    pub fn rules(&self) -> &[MixRule] {
        &self.rules
    }

    /// Distinct providers referenced by the mix, as primary or fallback.
    #[must_use]
    pub fn providers(&self) -> BTreeSet<&ProviderKey> {
        self.rules
            .iter()
            .flat_map(|r| std::iter::once(&r.primary).chain(r.fallback.as_ref()))
            .collect()
    }
}

impl Default for ContentMix {
    /// Eight-slot cycle over providers `1`, `2` and `3`.
    fn default() -> Self {
        let p1 = MixRule::with_fallback("1", "2");
        let p2 = MixRule::with_fallback("2", "3");
        let p3 = MixRule::with_fallback("3", "1");
        let p1_alone = MixRule::new("1");
        Self {
            rules: vec![
                p1.clone(),
                p1.clone(),
                p2.clone(),
                p3,
                p1_alone,
                p1.clone(),
                p1,
                p2,
            ],
        }
    }
}

impl TryFrom<Vec<MixRule>> for ContentMix {
    type Error = MixError;

    fn try_from(rules: Vec<MixRule>) -> Result<Self, Self::Error> {
        Self::new(rules)
    }
}

impl From<ContentMix> for Vec<MixRule> {
    fn from(mix: ContentMix) -> Self {
        mix.rules
    }
}
