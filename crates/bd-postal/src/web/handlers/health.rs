//! Health check HTTP handlers
//!
//! The datasets are loaded before the server binds, so a serving process
//! is by construction a healthy one; the endpoints report dataset sizes
//! and uptime for monitoring.

use axum::{Json, extract::State, response::IntoResponse};

use crate::web::{
    AppState,
    extractors::RequestContext,
    responses::{DatasetHealth, HealthResponse},
    utils::log_request,
};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = crate::web::responses::HealthResponse),
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/health".parse().unwrap(),
        &context,
    );

    let now = chrono::Utc::now();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (now - state.start_time).num_seconds(),
        datasets: DatasetHealth {
            postal_records: state.postal.len(),
            divisions: state.divisions.len(),
        },
        timestamp: now,
    })
}

/// Readiness check (for orchestration probes)
pub async fn readiness_check(
    State(state): State<AppState>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/ready".parse().unwrap(),
        &context,
    );

    Json(serde_json::json!({
        "status": "ready",
        "postal_records": state.postal.len(),
        "divisions": state.divisions.len(),
        "timestamp": chrono::Utc::now(),
    }))
}

/// Liveness check (for orchestration probes)
pub async fn liveness_check(context: RequestContext) -> impl IntoResponse {
    log_request(&axum::http::Method::GET, &"/live".parse().unwrap(), &context);

    Json(serde_json::json!({
        "status": "alive",
        "timestamp": chrono::Utc::now(),
    }))
}
