//! Esports database REST API: client, normalization and aggregation.

pub mod aggregate;
pub mod auth;
pub mod demo;
pub mod fetch;
pub mod http;
pub mod normalize;
pub mod types;

pub use http::{ApiClient, DEFAULT_API_BASE, DEFAULT_TIMEOUT};
