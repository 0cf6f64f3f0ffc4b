//! HTTP REST API interfaces
//!
//! - `common`: Pagination extractor and query DTO
//! - `handlers`: Service-level handlers (health)
//! - `modules`: Paged resources
//! - `router`: API router with OpenAPI document

pub mod common;
pub mod handlers;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, AppState};
