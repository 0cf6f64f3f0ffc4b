use tracing::debug;

use crate::config::PaginationConfig;

/// Parse a raw page number. Missing, non-numeric and non-positive values
/// fall back to `default_page`; there is no upper bound.
pub fn parse_page(raw: Option<&str>, config: &PaginationConfig) -> i64 {
    match parse_positive(raw) {
        Some(page) => page,
        None => {
            debug!(raw = ?raw, default = config.default_page, "page parameter unusable, using default");
            config.default_page
        }
    }
}

/// Parse a raw page size. Missing, non-numeric and non-positive values
/// fall back to `default_limit`; values above `max_limit` are capped.
pub fn parse_limit(raw: Option<&str>, config: &PaginationConfig) -> i64 {
    match parse_positive(raw) {
        Some(limit) if limit > config.max_limit => {
            debug!(requested = limit, max = config.max_limit, "limit parameter capped");
            config.max_limit
        }
        Some(limit) => limit,
        None => {
            debug!(raw = ?raw, default = config.default_limit, "limit parameter unusable, using default");
            config.default_limit
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw?.parse::<i64>().ok().filter(|v| *v > 0)
}
