//! OpenAPI documentation generation using utoipa
//!
//! Handler functions are annotated with `#[utoipa::path]`; schemas are
//! derived via `ToSchema`. Swagger UI is mounted in `web::mod` at `/docs`,
//! with the raw spec at `/api/openapi.json`.

use utoipa::OpenApi;

/// OpenAPI specification for the postal geography API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bangladesh Postal Geography API",
        description = "Read-only query API over the Bangladesh administrative \
geography dataset: free-text suggestion search, unique-value listings and \
hierarchical drill-down from division to post office.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        crate::web::handlers::postal::suggestions,
        crate::web::handlers::postal::list_districts,
        crate::web::handlers::postal::list_divisions,
        crate::web::handlers::postal::list_upazilas,
        crate::web::handlers::postal::get_division,
        crate::web::handlers::postal::division_districts,
        crate::web::handlers::postal::district_upazilas,
        crate::web::handlers::postal::upazila_post_offices,
        crate::web::handlers::suggestions::suggest_divisions,
        crate::web::handlers::suggestions::suggest_zilas,
        crate::web::handlers::suggestions::suggest_upazilas,
        crate::web::handlers::health::health_check,
    ),
    tags(
        (name = "postal", description = "Flat postal dataset: search, listings and drill-down"),
        (name = "suggestions", description = "Prefix suggestions over the division tree"),
        (name = "health", description = "Service health monitoring"),
    ),
    components(schemas(
        crate::models::PostalRecord,
        crate::models::DivisionNode,
        crate::models::DivisionSummary,
        crate::models::PostOfficeEntry,
        crate::web::responses::ErrorResponse,
        crate::web::responses::HealthResponse,
        crate::web::responses::DatasetHealth,
    ))
)]
pub struct ApiDoc;

/// Build the OpenAPI specification
pub fn openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
