//! Stats endpoints.
//!
//! Every request takes a fresh snapshot from the runtime. Absent sources are
//! already `{}` in the document, so these handlers always answer 200.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use cachestat_core::summary::StatsSummary;
use cachestat_core::StatsDocument;

use crate::app_state::AppState;

const JSON: &str = "application/json";

pub async fn stats_json(State(state): State<AppState>) -> Response {
    let doc = StatsDocument::collect(state.runtime().as_ref());
    tracing::debug!(
        system = doc.system_stats.len(),
        user = doc.user_stats.len(),
        shared_memory = doc.shared_memory.len(),
        "stats snapshot"
    );

    (StatusCode::OK, [(header::CONTENT_TYPE, JSON)], doc.to_json()).into_response()
}

pub async fn summary_json(State(state): State<AppState>) -> Response {
    let doc = StatsDocument::collect(state.runtime().as_ref());
    let summary = StatsSummary::from_document(&doc);
    let body = serde_json::to_string(&summary).unwrap_or_else(|e| {
        tracing::error!(error = %e, "summary serialization failed");
        "{}".to_string()
    });

    (StatusCode::OK, [(header::CONTENT_TYPE, JSON)], body).into_response()
}
