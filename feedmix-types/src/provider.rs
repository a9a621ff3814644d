//! Provider metadata types usable across crates.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Typed key identifying a content provider in the mix and the provider table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderKey(String);

impl ProviderKey {
    /// Construct a new provider key from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the inner name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ProviderKey {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for ProviderKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}
