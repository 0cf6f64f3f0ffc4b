//! Shared HTTP building blocks

pub mod pagination;

pub use pagination::PaginationParams;
