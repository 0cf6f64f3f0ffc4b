//! Item DTOs

use serde::Serialize;
use utoipa::ToSchema;

use crate::infrastructure::Item;
use crate::shared::types::Pagination;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ItemDto {
    pub id: i64,
    pub name: String,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}

/// One page of items plus what a pagination bar needs to render
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemListResponse {
    /// Items on the current page
    pub items: Vec<ItemDto>,
    /// Total number of items
    pub total: i64,
    /// Current page (1-based)
    pub page: i64,
    /// Page size
    pub limit: i64,
    /// Total number of pages
    pub page_count: i64,
    /// Page numbers to display; `0` marks skipped pages
    pub pages: Vec<i64>,
}

impl From<Pagination<Vec<ItemDto>>> for ItemListResponse {
    fn from(p: Pagination<Vec<ItemDto>>) -> Self {
        let page_count = p.page_count();
        let pages = p.pages();
        let (page, limit, total) = (p.page(), p.limit(), p.total);
        Self {
            items: p.items,
            total,
            page,
            limit,
            page_count,
            pages,
        }
    }
}
