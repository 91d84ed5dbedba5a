//! Typed read operations over [`ApiClient`].
//!
//! The dashboard fetchers never fail: each one tries its candidate endpoints
//! in order and substitutes demo data (or `None`, for the report endpoints)
//! when none answers. The remaining fetchers return `Result` and leave the
//! fallback decision to the caller.

use log::warn;
use serde_json::Value;

use super::{
    demo,
    http::{ApiClient, Endpoint, NO_QUERY},
    normalize::{
        normalize_all, normalize_game, normalize_history_entry, normalize_match,
        normalize_player, normalize_popular_game, normalize_popular_team,
        normalize_roster_entry, normalize_standing, normalize_team, normalize_tournament,
    },
    types::{
        Game, HistoryEntry, ListPayload, Match, Player, PopularGame, PopularTeam, RosterEntry,
        Standing, Team, Tournament,
    },
};
use crate::{
    cli::types::{MatchId, TeamId, TournamentId},
    core::{MatchQuery, TeamQuery},
    Result,
};

pub const TOURNAMENT_ENDPOINTS: &[Endpoint] =
    &[Endpoint::new("/tournaments/"), Endpoint::new("/tournament/")];

pub const UPCOMING_MATCH_ENDPOINTS: &[Endpoint] = &[
    Endpoint::with_query("/matches/", &[("status", "запланирован")]),
    Endpoint::new("/matches/"),
    Endpoint::new("/upcoming-matches/"),
];

pub const POPULAR_GAME_ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("/reports/tournaments-by-game/"),
    Endpoint::new("/analytics/tournaments-by-game/"),
    Endpoint::new("/games-popular/"),
];

pub const POPULAR_TEAM_ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("/reports/popular-teams/"),
    Endpoint::new("/analytics/popular-teams/"),
    Endpoint::new("/teams-popular/"),
];

/// Number of recent matches requested for a team page.
pub const RECENT_MATCHES_LIMIT: usize = 12;

/// Items under `key` of an object payload (`{"history": [...]}`), or the
/// payload itself when it is already a list.
fn list_under(payload: Value, key: &str) -> Vec<Value> {
    match payload {
        Value::Object(mut map) => map
            .remove(key)
            .map(|v| ListPayload::from(v).into_items())
            .unwrap_or_default(),
        other => ListPayload::from(other).into_items(),
    }
}

impl ApiClient {
    /// All tournaments, or the demo set when the API is unreachable.
    pub async fn fetch_tournaments(&self) -> Vec<Tournament> {
        match self.get_list_from(TOURNAMENT_ENDPOINTS).await {
            Ok(items) => normalize_all(&items, normalize_tournament),
            Err(e) => {
                warn!("tournaments unavailable ({e}), using demo data");
                demo::tournaments()
            }
        }
    }

    /// Upcoming matches, at most `limit`, or the demo set.
    pub async fn fetch_upcoming_matches(&self, limit: usize) -> Vec<Match> {
        let mut matches = match self.get_list_from(UPCOMING_MATCH_ENDPOINTS).await {
            Ok(items) => normalize_all(&items, normalize_match),
            Err(e) => {
                warn!("matches unavailable ({e}), using demo data");
                demo::matches()
            }
        };
        matches.truncate(limit);
        matches
    }

    /// Games ranked by the report endpoint; `None` when no report is served.
    pub async fn fetch_popular_games(&self) -> Option<Vec<PopularGame>> {
        match self.get_list_from(POPULAR_GAME_ENDPOINTS).await {
            Ok(items) => Some(normalize_all(&items, normalize_popular_game)),
            Err(e) => {
                warn!("popular games report unavailable: {e}");
                None
            }
        }
    }

    /// Teams ranked by the report endpoint; `None` when no report is served.
    pub async fn fetch_popular_teams(&self) -> Option<Vec<PopularTeam>> {
        match self.get_list_from(POPULAR_TEAM_ENDPOINTS).await {
            Ok(items) => Some(normalize_all(&items, normalize_popular_team)),
            Err(e) => {
                warn!("popular teams report unavailable: {e}");
                None
            }
        }
    }

    pub async fn fetch_games(&self) -> Result<Vec<Game>> {
        let items = self.get_list("/games/", NO_QUERY).await?;
        Ok(normalize_all(&items, normalize_game))
    }

    pub async fn fetch_tournament(&self, id: TournamentId) -> Result<Tournament> {
        let raw = self.get_json(&format!("/tournaments/{id}/"), NO_QUERY).await?;
        Ok(normalize_tournament(&raw))
    }

    /// Teams registered in a tournament.
    pub async fn fetch_tournament_roster(&self, id: TournamentId) -> Result<Vec<RosterEntry>> {
        let id = id.to_string();
        let items = self
            .get_list(
                "/tournament-teams/roster_by_tournament/",
                &[("tournament_id", id.as_str())],
            )
            .await?;
        Ok(normalize_all(&items, normalize_roster_entry))
    }

    /// Final places, best first; entries without a place go last.
    pub async fn fetch_standings(&self, id: TournamentId) -> Result<Vec<Standing>> {
        let id = id.to_string();
        let items = self
            .get_list("/standings/by_tournament/", &[("tournament_id", id.as_str())])
            .await?;
        let mut standings = normalize_all(&items, normalize_standing);
        standings.sort_by_key(|s| s.place.unwrap_or(i64::MAX));
        Ok(standings)
    }

    pub async fn fetch_matches(&self, query: &MatchQuery) -> Result<Vec<Match>> {
        let items = self.get_list("/matches/", &query.to_params()).await?;
        Ok(normalize_all(&items, normalize_match))
    }

    pub async fn fetch_match(&self, id: MatchId) -> Result<Match> {
        let raw = self.get_json(&format!("/matches/{id}/"), NO_QUERY).await?;
        Ok(normalize_match(&raw))
    }

    pub async fn fetch_teams(&self, query: &TeamQuery) -> Result<Vec<Team>> {
        let items = self.get_list("/teams/", &query.to_params()).await?;
        Ok(normalize_all(&items, normalize_team))
    }

    pub async fn fetch_team(&self, id: TeamId) -> Result<Team> {
        let raw = self.get_json(&format!("/teams/{id}/"), NO_QUERY).await?;
        Ok(normalize_team(&raw))
    }

    pub async fn fetch_team_roster(&self, id: TeamId) -> Result<Vec<Player>> {
        let items = self.get_list(&format!("/teams/{id}/roster/"), NO_QUERY).await?;
        Ok(normalize_all(&items, normalize_player))
    }

    pub async fn fetch_team_current_tournaments(&self, id: TeamId) -> Result<Vec<Tournament>> {
        let items = self
            .get_list(&format!("/teams/{id}/current_tournaments/"), NO_QUERY)
            .await?;
        Ok(normalize_all(&items, normalize_tournament))
    }

    pub async fn fetch_team_history(&self, id: TeamId) -> Result<Vec<HistoryEntry>> {
        let payload = self.get_json(&format!("/teams/{id}/history/"), NO_QUERY).await?;
        Ok(normalize_all(&list_under(payload, "history"), normalize_history_entry))
    }

    pub async fn fetch_team_recent_matches(&self, id: TeamId, limit: usize) -> Result<Vec<Match>> {
        let limit = limit.to_string();
        let payload = self
            .get_json(
                &format!("/teams/{id}/recent_matches/"),
                &[("limit", limit.as_str())],
            )
            .await?;
        Ok(normalize_all(&list_under(payload, "matches"), normalize_match))
    }

    /// Raw items of an admin collection.
    pub async fn fetch_raw(&self, path: &str) -> Result<Vec<Value>> {
        self.get_list(path, NO_QUERY).await
    }
}
