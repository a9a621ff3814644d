use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use feedmix::Feedmix;
use feedmix_mock::SampleProvider;
use feedmix_server::config::{Cli, Config};
use feedmix_server::{AppState, build_router};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting feedmix-server v{}", env!("CARGO_PKG_VERSION"));

    // Every provider named by the mix is served by a sample generator.
    let mut builder = Feedmix::builder()
        .mix(config.mix.clone())
        .config(config.feed);
    for key in config.mix.providers() {
        builder = builder.with_provider(Arc::new(SampleProvider::new(key.clone())));
    }
    let feed = builder.build().context("building feed orchestrator")?;
    info!(
        providers = config.mix.providers().len(),
        mix_len = config.mix.len(),
        timeout_ms = u64::try_from(config.feed.provider_timeout.as_millis()).unwrap_or(u64::MAX),
        "feed orchestrator ready"
    );

    let state = AppState {
        feed: Arc::new(feed),
        limits: config.limits,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    info!("Listening on {}", config.addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
