//! Core utilities for the esports database client
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `filters`: tournament filter engine and API query builders
//! - `http`: request header construction
//! - `token`: auth token persistence

pub mod filters;
pub mod http;
pub mod token;

// Re-export commonly used items for convenience
pub use filters::{filter_tournaments, GameSelector, MatchQuery, TeamQuery, TournamentFilter, TournamentView};
pub use http::auth_header_map;
pub use token::TokenStore;
