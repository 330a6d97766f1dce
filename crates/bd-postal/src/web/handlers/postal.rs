//! Flat postal dataset HTTP handlers
//!
//! Free-text suggestion search, unique-value listings and the
//! division → district → upazila → post office drill-down.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::web::{
    AppState,
    extractors::{RequestContext, SuggestionParams},
    utils::log_request,
};

/// Free-text suggestion search over the flat dataset
///
/// Matches district, upazila and post office case-insensitively and the
/// post code verbatim. An empty input returns the whole dataset.
#[utoipa::path(
    get,
    path = "/suggestions",
    tag = "postal",
    params(
        ("input" = String, Query, description = "User input for suggestions"),
    ),
    responses(
        (status = 200, description = "Records matching the input", body = [crate::models::PostalRecord]),
        (status = 400, description = "Missing input parameter", body = crate::web::responses::ErrorResponse),
    )
)]
pub async fn suggestions(
    State(state): State<AppState>,
    context: RequestContext,
    params: SuggestionParams,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/suggestions".parse().unwrap(),
        &context,
    );

    Json(state.postal.search(&params.input))
}

/// List unique districts
#[utoipa::path(
    get,
    path = "/districts",
    tag = "postal",
    responses(
        (status = 200, description = "Unique district names", body = [String]),
    )
)]
pub async fn list_districts(
    State(state): State<AppState>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/districts".parse().unwrap(),
        &context,
    );

    Json(state.postal.unique_values(|r| &r.district))
}

/// List unique divisions
#[utoipa::path(
    get,
    path = "/divisions",
    tag = "postal",
    responses(
        (status = 200, description = "Unique division names", body = [String]),
    )
)]
pub async fn list_divisions(
    State(state): State<AppState>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/divisions".parse().unwrap(),
        &context,
    );

    Json(state.postal.unique_values(|r| &r.division))
}

/// List unique upazilas
#[utoipa::path(
    get,
    path = "/upazilas",
    tag = "postal",
    responses(
        (status = 200, description = "Unique upazila names", body = [String]),
    )
)]
pub async fn list_upazilas(
    State(state): State<AppState>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/upazilas".parse().unwrap(),
        &context,
    );

    Json(state.postal.unique_values(|r| &r.upazila))
}

/// Summary of one division
///
/// An unknown division yields a summary with four empty lists, not an
/// error.
#[utoipa::path(
    get,
    path = "/division/{division}",
    tag = "postal",
    params(
        ("division" = String, Path, description = "Name of the division (case-insensitive)"),
    ),
    responses(
        (status = 200, description = "Division summary", body = crate::models::DivisionSummary),
    )
)]
pub async fn get_division(
    State(state): State<AppState>,
    context: RequestContext,
    Path(division): Path<String>,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/division".parse().unwrap(),
        &context,
    );

    Json(state.postal.by_division(&division))
}

/// Districts under a division
#[utoipa::path(
    get,
    path = "/division/{division}/districts",
    tag = "postal",
    params(
        ("division" = String, Path, description = "Name of the division (case-insensitive)"),
    ),
    responses(
        (status = 200, description = "Unique district names under the division", body = [String]),
    )
)]
pub async fn division_districts(
    State(state): State<AppState>,
    context: RequestContext,
    Path(division): Path<String>,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/division/districts".parse().unwrap(),
        &context,
    );

    Json(state.postal.districts_of_division(&division))
}

/// Upazilas under a district within a division
#[utoipa::path(
    get,
    path = "/division/{division}/district/{district}/upazilas",
    tag = "postal",
    params(
        ("division" = String, Path, description = "Name of the division (case-insensitive)"),
        ("district" = String, Path, description = "Name of the district (case-insensitive)"),
    ),
    responses(
        (status = 200, description = "Unique upazila names under the district", body = [String]),
    )
)]
pub async fn district_upazilas(
    State(state): State<AppState>,
    context: RequestContext,
    Path((division, district)): Path<(String, String)>,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/division/district/upazilas".parse().unwrap(),
        &context,
    );

    Json(state.postal.upazilas_of_district(&division, &district))
}

/// Post offices under an upazila
///
/// One entry per matching record; duplicates are passed through since a
/// post office name may repeat with different codes.
#[utoipa::path(
    get,
    path = "/division/{division}/district/{district}/upazila/{upazila}/postoffices",
    tag = "postal",
    params(
        ("division" = String, Path, description = "Name of the division (case-insensitive)"),
        ("district" = String, Path, description = "Name of the district (case-insensitive)"),
        ("upazila" = String, Path, description = "Name of the upazila (case-insensitive)"),
    ),
    responses(
        (status = 200, description = "Post offices with their postal codes", body = [crate::models::PostOfficeEntry]),
    )
)]
pub async fn upazila_post_offices(
    State(state): State<AppState>,
    context: RequestContext,
    Path((division, district, upazila)): Path<(String, String, String)>,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/division/district/upazila/postoffices".parse().unwrap(),
        &context,
    );

    Json(
        state
            .postal
            .post_offices_of_upazila(&division, &district, &upazila),
    )
}
