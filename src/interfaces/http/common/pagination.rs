//! Pagination extractor for Axum
//!
//! `Pagination<T>` can be taken directly as a handler argument. The query
//! keys and bounds come from the `PaginationConfig` in router state, so any
//! state type that implements `FromRef<S>` for it works:
//!
//! ```ignore
//! async fn list(pagination: Pagination<()>) -> Json<Vec<Item>> {
//!     let rows = repo.find(pagination.offset(), pagination.limit()).await;
//!     // ...
//! }
//! ```
//!
//! Extraction never rejects; a malformed query yields the defaults.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::PaginationConfig;
use crate::shared::types::{Pagination, QueryPairs};

impl<S, T> FromRequestParts<S> for Pagination<T>
where
    T: Default + Send,
    S: Send + Sync,
    PaginationConfig: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = PaginationConfig::from_ref(state);
        let query = QueryPairs::from_uri(&parts.uri);
        Ok(Pagination::from_query(&query, &config))
    }
}

/// Query parameters for paged list endpoints
///
/// Both values are taken as raw strings so that invalid input can fall back
/// to the defaults instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-based). Missing, invalid or non-positive values mean page 1
    pub page: Option<String>,
    /// Items per page. Missing or invalid values mean 20; capped at the configured maximum
    pub limit: Option<String>,
}

impl PaginationParams {
    pub fn into_pagination<T: Default>(&self, config: &PaginationConfig) -> Pagination<T> {
        Pagination::from_raw(self.page.as_deref(), self.limit.as_deref(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::{Query, State};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use tower::ServiceExt;

    async fn echo(pagination: Pagination<()>) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "page": pagination.page(),
            "limit": pagination.limit(),
            "offset": pagination.offset(),
        }))
    }

    async fn echo_params(
        State(config): State<PaginationConfig>,
        Query(params): Query<PaginationParams>,
    ) -> Json<serde_json::Value> {
        let pagination: Pagination<()> = params.into_pagination(&config);
        Json(serde_json::json!({
            "page": pagination.page(),
            "limit": pagination.limit(),
            "offset": pagination.offset(),
        }))
    }

    fn app(config: PaginationConfig) -> Router {
        Router::new()
            .route("/items", get(echo))
            .route("/params", get(echo_params))
            .with_state(config)
    }

    async fn get_json(app: Router, uri: &str) -> serde_json::Value {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bare_uri_uses_defaults() {
        let json = get_json(app(PaginationConfig::default()), "/items").await;
        assert_eq!(json, serde_json::json!({"page": 1, "limit": 20, "offset": 0}));
    }

    #[tokio::test]
    async fn query_values_are_applied() {
        let json = get_json(app(PaginationConfig::default()), "/items?page=3&limit=15").await;
        assert_eq!(json, serde_json::json!({"page": 3, "limit": 15, "offset": 30}));
    }

    #[tokio::test]
    async fn malformed_values_never_reject() {
        let json = get_json(app(PaginationConfig::default()), "/items?page=-1&limit=abc").await;
        assert_eq!(json, serde_json::json!({"page": 1, "limit": 20, "offset": 0}));

        let json = get_json(app(PaginationConfig::default()), "/items?page=1&limit=1001").await;
        assert_eq!(json["limit"], 1000);
    }

    #[tokio::test]
    async fn custom_parameter_names_from_state() {
        let config = PaginationConfig::default().with_params("p", "size").with_max_limit(50);
        let json = get_json(app(config), "/items?page=9&p=2&size=500").await;
        assert_eq!(json, serde_json::json!({"page": 2, "limit": 50, "offset": 50}));
    }

    #[tokio::test]
    async fn params_dto_normalizes_like_the_extractor() {
        let json = get_json(app(PaginationConfig::default()), "/params?page=0&limit=10").await;
        assert_eq!(json, serde_json::json!({"page": 1, "limit": 10, "offset": 0}));
    }
}
