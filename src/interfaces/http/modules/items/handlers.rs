//! Item API handlers

use axum::extract::State;
use axum::Json;
use tracing::debug;

use super::dto::{ItemDto, ItemListResponse};
use crate::infrastructure::InMemoryCatalog;
use crate::interfaces::http::common::PaginationParams;
use crate::shared::types::Pagination;

#[utoipa::path(
    get,
    path = "/api/v1/items",
    tag = "Items",
    params(PaginationParams),
    responses(
        (status = 200, description = "Item list", body = ItemListResponse)
    )
)]
pub async fn list_items(
    State(catalog): State<InMemoryCatalog>,
    pagination: Pagination<()>,
) -> Json<ItemListResponse> {
    let total = catalog.count();
    let items: Vec<ItemDto> = catalog
        .slice(pagination.offset(), pagination.limit())
        .into_iter()
        .map(ItemDto::from)
        .collect();

    debug!(
        page = pagination.page(),
        limit = pagination.limit(),
        returned = items.len(),
        total,
        "listing items"
    );

    let page = pagination.with_total(total).with_items(items);
    Json(ItemListResponse::from(page))
}
