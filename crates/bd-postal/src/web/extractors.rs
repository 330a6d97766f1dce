//! Request extractors and validation
//!
//! Required query parameters are validated here, at the web boundary; the
//! stores only ever see well-formed string arguments.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::Response,
};
use serde::Deserialize;
use uuid::Uuid;

use super::responses::bad_request;

/// Query parameters for the free-text suggestion search.
///
/// `input` is required; a request without it is rejected with 400 before
/// any store call. An empty value is accepted and passes every record
/// through, which is the documented behavior of the search.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionParams {
    pub input: String,
}

impl<S> FromRequestParts<S> for SuggestionParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<SuggestionParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| bad_request("Missing required query parameter: input"))?;

        Ok(params)
    }
}

/// Per-request context captured for logging
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user_agent: Option<String>,
    pub request_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            user_agent: None,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        Ok(Self {
            user_agent,
            ..Self::default()
        })
    }
}
