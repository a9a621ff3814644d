use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the feedmix workspace.
///
/// Provider failures and timeouts are represented here so that providers and the
/// dispatcher can talk about them, but they are recovered inside the dispatcher and
/// never surface from a feed request.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FeedError {
    /// Invalid input argument or builder configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The mix references a provider that has no registered fetch capability.
    #[error("no provider registered for key: {0}")]
    UnknownProvider(String),

    /// An individual provider returned an error.
    #[error("{provider} failed: {msg}")]
    Connector {
        /// Provider name that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual provider fetch exceeded the configured deadline.
    #[error("provider timed out: {provider}")]
    ProviderTimeout {
        /// Provider name that timed out.
        provider: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl FeedError {
    /// Helper: build a `Connector` error with the provider name and message.
    pub fn connector(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(provider: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            provider: provider.into(),
        }
    }
}

/// Validation failures for a content mix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MixError {
    /// A mix must contain at least one rule.
    #[error("content mix must not be empty")]
    Empty,
}

impl From<MixError> for FeedError {
    fn from(e: MixError) -> Self {
        Self::InvalidArg(e.to_string())
    }
}
