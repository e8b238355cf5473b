//! Axum router wiring.
//!
//! The stats document lives on the configured `server.stats_path`; the
//! summary and liveness routes are fixed.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, stats};

pub const HEALTHZ_PATH: &str = "/healthz";
pub const SUMMARY_PATH: &str = "/summary";

pub fn build_router(state: AppState) -> Router {
    let stats_path = state.cfg().server.stats_path.clone();
    Router::new()
        .route(&stats_path, get(stats::stats_json))
        .route(SUMMARY_PATH, get(stats::summary_json))
        .route(HEALTHZ_PATH, get(ops::healthz))
        .with_state(state)
}
