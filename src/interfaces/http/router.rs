//! API Router with OpenAPI document

use std::time::Instant;

use axum::extract::FromRef;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::health;
use super::modules::items;
use crate::config::PaginationConfig;
use crate::infrastructure::InMemoryCatalog;

/// Shared router state. Handlers pull the piece they need via `FromRef`;
/// the pagination extractor reads `PaginationConfig` the same way.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pagination: PaginationConfig,
    pub catalog: InMemoryCatalog,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(pagination: PaginationConfig, catalog: InMemoryCatalog) -> Self {
        Self {
            pagination,
            catalog,
            started_at: Instant::now(),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        items::list_items,
    ),
    components(schemas(
        health::HealthResponse,
        items::ItemDto,
        items::ItemListResponse,
    )),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Items", description = "Paged item catalog"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/items", get(items::list_items))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
