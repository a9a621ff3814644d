use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use feedmix::{ContentMix, FeedConfig};

use crate::request::RequestLimits;

/// Command-line flags, each with an environment-variable fallback.
#[derive(Debug, Clone, Parser)]
#[command(name = "feedmix-server", version, about = "Serve a mixed content feed over HTTP")]
pub struct Cli {
    /// TCP address to listen on, in the form host:port.
    #[arg(long, env = "FEEDMIX_ADDR", default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// JSON file holding the content mix; the built-in eight-slot mix is used when absent.
    #[arg(long, env = "FEEDMIX_MIX")]
    pub mix: Option<PathBuf>,

    /// Deadline for each provider fetch, in milliseconds.
    #[arg(long, env = "FEEDMIX_PROVIDER_TIMEOUT_MS", default_value_t = 2000)]
    pub provider_timeout_ms: u64,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "FEEDMIX_LOG", default_value = "info")]
    pub log: String,
}

/// Resolved process configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub mix: ContentMix,
    pub feed: FeedConfig,
    pub limits: RequestLimits,
    pub log: String,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let mix = match &cli.mix {
            Some(path) => load_mix(path)?,
            None => ContentMix::default(),
        };

        Ok(Config {
            addr: cli.addr,
            mix,
            feed: FeedConfig {
                provider_timeout: Duration::from_millis(cli.provider_timeout_ms),
            },
            limits: RequestLimits::default(),
            log: cli.log,
        })
    }
}

fn load_mix(path: &PathBuf) -> Result<ContentMix> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading content mix from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing content mix from {}", path.display()))
}
