//! Hierarchical suggestion HTTP handlers
//!
//! Prefix suggestions over the division tree. Division lookup is exact by
//! name; an absent division or zila surfaces as 404 with a distinct
//! message for each.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::web::{
    AppState, extractors::RequestContext, responses::handle_result, utils::log_request,
};

/// Suggest divisions by prefix
#[utoipa::path(
    get,
    path = "/suggestions/divisions/{query}",
    tag = "suggestions",
    params(
        ("query" = String, Path, description = "Name prefix (case-insensitive)"),
    ),
    responses(
        (status = 200, description = "Matching division names", body = [String]),
    )
)]
pub async fn suggest_divisions(
    State(state): State<AppState>,
    context: RequestContext,
    Path(query): Path<String>,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/suggestions/divisions".parse().unwrap(),
        &context,
    );

    Json(state.divisions.suggest_divisions(&query))
}

/// Suggest zilas within a division
#[utoipa::path(
    get,
    path = "/suggestions/zilas/{division}/{query}",
    tag = "suggestions",
    params(
        ("division" = String, Path, description = "Division name (exact match)"),
        ("query" = String, Path, description = "Zila name prefix (case-insensitive)"),
    ),
    responses(
        (status = 200, description = "Matching zila names", body = [String]),
        (status = 404, description = "Division not found", body = crate::web::responses::ErrorResponse),
    )
)]
pub async fn suggest_zilas(
    State(state): State<AppState>,
    context: RequestContext,
    Path((division, query)): Path<(String, String)>,
) -> Response {
    log_request(
        &axum::http::Method::GET,
        &"/suggestions/zilas".parse().unwrap(),
        &context,
    );

    handle_result(state.divisions.suggest_zilas(&division, &query))
}

/// Suggest upazilas within a division, gated on a zila
#[utoipa::path(
    get,
    path = "/suggestions/upazilas/{division}/{zila}/{query}",
    tag = "suggestions",
    params(
        ("division" = String, Path, description = "Division name (exact match)"),
        ("zila" = String, Path, description = "Zila name (must belong to the division)"),
        ("query" = String, Path, description = "Upazila name prefix (case-insensitive)"),
    ),
    responses(
        (status = 200, description = "Matching upazila names", body = [String]),
        (status = 404, description = "Division or zila not found", body = crate::web::responses::ErrorResponse),
    )
)]
pub async fn suggest_upazilas(
    State(state): State<AppState>,
    context: RequestContext,
    Path((division, zila, query)): Path<(String, String, String)>,
) -> Response {
    log_request(
        &axum::http::Method::GET,
        &"/suggestions/upazilas".parse().unwrap(),
        &context,
    );

    handle_result(state.divisions.suggest_upazilas(&division, &zila, &query))
}
