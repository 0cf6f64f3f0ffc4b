//! HTTP API handlers

pub mod health;
