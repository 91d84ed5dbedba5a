//! Esports Tournament Database Client Library
//!
//! A Rust client and command-line frontend for the esports tournament database
//! REST API: tournaments, matches, teams, auth and an admin CRUD panel.
//!
//! ## Features
//!
//! - **Tolerant Fetching**: Candidate endpoints, timeouts and demo-data fallback
//! - **Normalization**: Heterogeneous API shapes mapped onto canonical records
//! - **Aggregation**: Popular games and teams computed client-side when no
//!   report endpoint is available
//! - **Filtering**: Status and free-text filtering over tournament lists
//! - **Auth & Admin**: Token login and staff-only create/update/delete
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use esports_db::{api::ApiClient, core::{filter_tournaments, TournamentFilter}, StatusFilter};
//!
//! # async fn example() -> esports_db::Result<()> {
//! let client = ApiClient::new("http://127.0.0.1:8000/api", esports_db::api::DEFAULT_TIMEOUT, None)?;
//! let tournaments = client.fetch_tournaments().await;
//!
//! let active = filter_tournaments(&tournaments, &TournamentFilter::new(StatusFilter::Active, ""));
//! for t in active {
//!     println!("{} ({})", t.name, t.game_title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ESPORTS_DB_API_BASE=http://127.0.0.1:8000/api
//! export ESPORTS_DB_TIMEOUT_SECS=7
//! export ESPORTS_DB_TOKEN_FILE=~/.config/esports-db/token
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use api::ApiClient;
pub use cli::types::{GameId, MatchId, PlayerId, Resource, StatusFilter, TeamId, TournamentId};
pub use error::{EsportsError, Result};

pub const API_BASE_ENV_VAR: &str = "ESPORTS_DB_API_BASE";
pub const TIMEOUT_ENV_VAR: &str = "ESPORTS_DB_TIMEOUT_SECS";
pub const TOKEN_FILE_ENV_VAR: &str = "ESPORTS_DB_TOKEN_FILE";
