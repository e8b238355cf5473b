//! cachestat agent
//!
//! Serves the cache telemetry document over HTTP:
//! - `GET <server.stats_path>` : `{"system_stats", "user_stats", "shared_memory"}`
//! - `GET /summary`            : derived gauges
//! - `GET /healthz`            : liveness
//!
//! Run stand-alone, nothing writes to the built-in cache, so it reports an
//! idle cache (zero hits and misses). Hosts that embed the agent populate it
//! through `AppState::shared_memory`.

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use cachestat_agent::{app_state, config, router};
use cachestat_core::error::{CacheStatError, Result};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.client_code().as_str(), "cachestat-agent failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var("CACHESTAT_CONFIG")
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path)?;
    let listen: SocketAddr = cfg.server.listen.parse().map_err(|e| {
        CacheStatError::BadConfig(format!("server.listen must be a valid SocketAddr: {e}"))
    })?;

    tracing::info!(
        %listen,
        stats_path = %cfg.server.stats_path,
        cache_enabled = cfg.cache.enabled,
        "cachestat-agent starting"
    );

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| CacheStatError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| CacheStatError::Internal(format!("server failed: {e}")))
}
