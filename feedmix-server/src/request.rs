use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderMap;
use feedmix::Window;
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
pub const COUNT_PARAM: &str = "count";
pub const OFFSET_PARAM: &str = "offset";

/// Bounds applied to query parameters before they reach the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLimits {
    /// Count used when the parameter is absent, empty or zero.
    pub default_count: usize,
    /// Largest accepted count.
    pub max_count: usize,
    /// Largest accepted offset.
    pub max_offset: usize,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            default_count: 5,
            max_count: 100,
            max_offset: 10_000,
        }
    }
}

/// A validated feed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub count: usize,
    pub offset: usize,
    /// Requester address, forwarded to providers as their identity hint.
    pub user_ip: IpAddr,
}

impl FeedRequest {
    /// Validate raw query pairs and headers.
    ///
    /// Only the first occurrence of each parameter is considered.
    ///
    /// # Errors
    /// `Validation` when `count` or `offset` is not a non-negative integer or exceeds
    /// its limit.
    pub fn parse(
        query: &[(String, String)],
        headers: &HeaderMap,
        peer: SocketAddr,
        limits: &RequestLimits,
    ) -> Result<Self, ApiError> {
        let count = match uint_param(query, COUNT_PARAM)? {
            0 => limits.default_count,
            n if n > limits.max_count => {
                return Err(ApiError::Validation(format!(
                    "{COUNT_PARAM} must be at most {}",
                    limits.max_count
                )));
            }
            n => n,
        };

        let offset = uint_param(query, OFFSET_PARAM)?;
        if offset > limits.max_offset {
            return Err(ApiError::Validation(format!(
                "{OFFSET_PARAM} must be at most {}",
                limits.max_offset
            )));
        }

        Ok(Self {
            count,
            offset,
            user_ip: user_ip(headers, peer),
        })
    }

    pub fn window(&self) -> Result<Window, ApiError> {
        Ok(Window::new(self.offset, self.count)?)
    }
}

/// Absent or blank parameters read as zero.
fn uint_param(query: &[(String, String)], key: &str) -> Result<usize, ApiError> {
    let raw = query
        .iter()
        .find(|(k, _)| k == key)
        .map_or("", |(_, v)| v.trim());
    if raw.is_empty() {
        return Ok(0);
    }
    let invalid = || ApiError::Validation(format!("{key} must be a non-negative integer"));
    // digits only; `usize::from_str` would also take a leading '+'
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<usize>().map_err(|_| invalid())
}

/// First address of `X-Forwarded-For` when it parses, else the connection peer.
fn user_ip(headers: &HeaderMap, peer: SocketAddr) -> IpAddr {
    headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok())
        .unwrap_or_else(|| peer.ip())
}
