pub mod errors;
pub mod pagination;
pub mod query;

pub use errors::*;
pub use pagination::*;
pub use query::*;
