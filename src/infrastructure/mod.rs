//! Infrastructure layer
//!
//! - `storage`: In-memory item catalog backing the demo endpoint

pub mod storage;

pub use storage::{InMemoryCatalog, Item};
