//! HTTP API layer: request handlers and their wire-format models.

pub mod handlers;
pub mod models;
