//! # page-params
//!
//! Pagination parameter resolution for paged list endpoints.
//!
//! A request's raw `page` and `limit` values are normalized against a
//! [`PaginationConfig`] (defaults, upper bound, query key names). The
//! resulting [`Pagination`] yields the row offset, the page count once the
//! caller has filled in `total`, and a condensed list of page numbers for
//! rendering a pagination bar.
//!
//! ```
//! use page_params::{Pagination, PaginationConfig};
//!
//! let config = PaginationConfig::default();
//! let query = vec![("page", "3"), ("limit", "5000")];
//! let p = Pagination::<()>::from_query(&query, &config).with_total(4200);
//!
//! assert_eq!(p.limit(), 1000);
//! assert_eq!(p.offset(), 2000);
//! assert_eq!(p.page_count(), 5);
//! assert_eq!(p.pages(), vec![1, 2, 3, 4, 5]);
//! ```
//!
//! ## Layout
//!
//! - **shared**: The resolver, query sources and parsing policy
//! - **config**: Pagination policy and TOML application config
//! - **interfaces**: Axum extractor and the demo REST router
//! - **infrastructure**: In-memory catalog backing the demo
//! - **server**: Logging setup and demo server runtime

pub mod config;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, PaginationConfig};
pub use interfaces::http::common::PaginationParams;
pub use shared::types::{ConfigError, Pagination, QueryPairs, QuerySource, PAGE_GAP, WINDOW_RADIUS};
