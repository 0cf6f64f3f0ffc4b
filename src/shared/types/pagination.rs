use serde::Serialize;
use utoipa::ToSchema;

use super::query::QuerySource;
use crate::config::PaginationConfig;
use crate::shared::validations::{parse_limit, parse_page};

/// Placeholder in [`Pagination::pages`] for a run of omitted page numbers.
pub const PAGE_GAP: i64 = 0;

/// Pages shown on each side of the current page in [`Pagination::pages`].
pub const WINDOW_RADIUS: i64 = 2;

/// One page of a paginated list.
///
/// `page` and `limit` are fixed at construction. `total` is filled in by
/// the caller once the count query has run, and `items` carries whatever
/// the handler loaded for this page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination<T> {
    /// Current page (1-based)
    page: i64,
    /// Page size
    limit: i64,
    /// Total number of items across all pages
    pub total: i64,
    /// Items on the current page
    pub items: T,
}

impl<T: Default> Pagination<T> {
    /// Build from known values without any normalization.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page,
            limit,
            total: 0,
            items: T::default(),
        }
    }

    /// Build from raw query values, normalizing them against `config`.
    ///
    /// Never fails: unusable values degrade to the configured defaults and
    /// oversized limits are capped at `max_limit`.
    pub fn from_raw(raw_page: Option<&str>, raw_limit: Option<&str>, config: &PaginationConfig) -> Self {
        Self::new(parse_page(raw_page, config), parse_limit(raw_limit, config))
    }

    /// Build from any query source using the parameter names in `config`.
    pub fn from_query<Q: QuerySource + ?Sized>(query: &Q, config: &PaginationConfig) -> Self {
        Self::from_raw(
            query.query_value(&config.page_param),
            query.query_value(&config.limit_param),
            config,
        )
    }
}

impl<T> Pagination<T> {
    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn with_total(mut self, total: i64) -> Self {
        self.total = total;
        self
    }

    /// Attach the loaded items, keeping page, limit and total.
    pub fn with_items<U>(self, items: U) -> Pagination<U> {
        Pagination {
            page: self.page,
            limit: self.limit,
            total: self.total,
            items,
        }
    }

    /// Number of items to skip before this page starts.
    ///
    /// Not clamped against `total`: a page past the end yields an offset
    /// that simply selects nothing. Saturates instead of overflowing.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`; zero for an empty list.
    ///
    /// A non-positive `limit` can only come from [`Pagination::new`] and
    /// yields zero pages.
    pub fn page_count(&self) -> i64 {
        if self.limit <= 0 || self.total <= 0 {
            return 0;
        }
        self.total / self.limit + i64::from(self.total % self.limit != 0)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Page numbers for a pagination bar.
    ///
    /// Always contains the first and last page plus [`WINDOW_RADIUS`] pages
    /// on either side of the current one. Each run of skipped pages is
    /// replaced by a single [`PAGE_GAP`].
    ///
    /// ```
    /// use page_params::Pagination;
    ///
    /// let p = Pagination::<()>::new(5, 10).with_total(100);
    /// assert_eq!(p.pages(), vec![1, 0, 3, 4, 5, 6, 7, 0, 10]);
    /// ```
    pub fn pages(&self) -> Vec<i64> {
        let last = self.page_count();
        if last == 0 {
            return Vec::new();
        }

        let lo = self.page.saturating_sub(WINDOW_RADIUS).max(2);
        let hi = self.page.saturating_add(WINDOW_RADIUS).min(last - 1);
        let shown = std::iter::once(1)
            .chain(lo..=hi)
            .chain((last > 1).then_some(last));

        let mut pages = Vec::with_capacity(2 * WINDOW_RADIUS as usize + 5);
        let mut prev = 0;
        for n in shown {
            if n > prev + 1 {
                pages.push(PAGE_GAP);
            }
            pages.push(n);
            prev = n;
        }
        pages
    }
}
