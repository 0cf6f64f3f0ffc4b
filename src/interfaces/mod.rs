//! Host framework adapters

pub mod http;
