//! Type-safe wrappers and enums for esports database records.

pub mod filters;
pub mod ids;

pub use filters::{Resource, StatusFilter};
pub use ids::{GameId, MatchId, PlayerId, TeamId, TournamentId};
