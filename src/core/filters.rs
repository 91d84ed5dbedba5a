//! Client-side tournament filtering and server-side query builders.
//!
//! Tournaments are filtered in memory: a status category, a free-text query and
//! optional game/date restrictions, all intersected, original order kept.
//! Matches and teams are filtered by the API, so for them this module only
//! builds query parameters.

use chrono::NaiveDate;

use crate::{
    api::types::Tournament,
    cli::types::{GameId, StatusFilter, TeamId, TournamentId},
};

/// Game restriction: by id, or by title (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSelector {
    Id(GameId),
    Title(String),
}

impl GameSelector {
    /// Numeric input selects by id, anything else by title.
    pub fn parse(s: &str) -> Self {
        match s.trim().parse::<u64>() {
            Ok(id) => GameSelector::Id(GameId::new(id)),
            Err(_) => GameSelector::Title(s.trim().to_string()),
        }
    }

    fn matches(&self, t: &Tournament) -> bool {
        match self {
            GameSelector::Id(id) => t.game_id == Some(*id),
            GameSelector::Title(title) => t.game_title.to_lowercase() == title.to_lowercase(),
        }
    }
}

/// Filter criteria for a tournament list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentFilter {
    pub status: StatusFilter,
    pub query: String,
    pub game: Option<GameSelector>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl TournamentFilter {
    pub fn new(status: StatusFilter, query: impl Into<String>) -> Self {
        Self {
            status,
            query: query.into(),
            ..Self::default()
        }
    }

    /// Whether `t` passes every active predicate.
    pub fn matches(&self, t: &Tournament) -> bool {
        if !t.category().matches(self.status) {
            return false;
        }

        let q = self.query.trim().to_lowercase();
        if !q.is_empty() {
            let hay = format!("{} {} {} {}", t.name, t.game_title, t.format, t.status)
                .to_lowercase();
            if !hay.contains(&q) {
                return false;
            }
        }

        if let Some(game) = &self.game {
            if !game.matches(t) {
                return false;
            }
        }

        // Records without a readable start date are never excluded by dates.
        if let Some(start) = t.start_date.as_deref().and_then(parse_date_prefix) {
            if self.from.is_some_and(|from| start < from) {
                return false;
            }
            if self.to.is_some_and(|to| start > to) {
                return false;
            }
        }

        true
    }
}

/// Date part of an ISO date or datetime string.
pub fn parse_date_prefix(s: &str) -> Option<NaiveDate> {
    let head = s.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Filtered subsequence of `list`, original order preserved.
pub fn filter_tournaments(list: &[Tournament], filter: &TournamentFilter) -> Vec<Tournament> {
    list.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Owner of the tournament list and its filter state.
///
/// Mutation goes through the setters only; each one is expected to be followed
/// by a fresh `visible()` call and a re-render of the tournament list.
#[derive(Debug, Clone, Default)]
pub struct TournamentView {
    tournaments: Vec<Tournament>,
    filter: TournamentFilter,
}

impl TournamentView {
    pub fn new(tournaments: Vec<Tournament>, filter: TournamentFilter) -> Self {
        Self {
            tournaments,
            filter,
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn replace_tournaments(&mut self, tournaments: Vec<Tournament>) {
        self.tournaments = tournaments;
    }

    pub fn filter(&self) -> &TournamentFilter {
        &self.filter
    }

    pub fn all(&self) -> &[Tournament] {
        &self.tournaments
    }

    pub fn visible(&self) -> Vec<Tournament> {
        filter_tournaments(&self.tournaments, &self.filter)
    }
}

/// Query parameters for `/matches/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchQuery {
    pub tournament: Option<TournamentId>,
    pub team: Option<TeamId>,
    pub status: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub q: Option<String>,
}

impl MatchQuery {
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut p = Vec::new();
        if let Some(t) = self.tournament {
            p.push(("tournament".to_string(), t.to_string()));
        }
        if let Some(t) = self.team {
            p.push(("team".to_string(), t.to_string()));
        }
        if let Some(s) = self.status.as_deref().filter(|s| !s.trim().is_empty()) {
            p.push(("status".to_string(), s.trim().to_string()));
        }
        if let Some(d) = self.date_from {
            p.push(("date_from".to_string(), d.to_string()));
        }
        if let Some(d) = self.date_to {
            p.push(("date_to".to_string(), d.to_string()));
        }
        if let Some(q) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            p.push(("q".to_string(), q.to_string()));
        }
        p
    }
}

/// Query parameters for `/teams/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamQuery {
    pub game: Option<GameId>,
    pub country: Option<String>,
    pub q: Option<String>,
}

impl TeamQuery {
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut p = Vec::new();
        if let Some(g) = self.game {
            p.push(("game".to_string(), g.to_string()));
        }
        if let Some(c) = self.country.as_deref().filter(|c| !c.trim().is_empty()) {
            p.push(("country".to_string(), c.trim().to_string()));
        }
        if let Some(q) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            p.push(("q".to_string(), q.to_string()));
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::normalize::normalize_tournament;
    use serde_json::json;

    fn sample() -> Vec<Tournament> {
        [
            json!({"id": 1, "name": "Winter Cup", "game": {"id": 1, "title": "Dota 2"}, "status": "идёт", "start_date": "2026-01-14"}),
            json!({"id": 2, "name": "Major Qualifier", "game_title": "CS2", "status": "завершён", "start_date": "2025-11-01"}),
            json!({"id": 3, "name": "Valorant Clash", "game_title": "Valorant", "status": "регистрация", "format": "Группы", "start_date": "2026-02-05"}),
            json!({"id": 4, "name": "Spring Open", "game_title": "CS2", "status": "ongoing"}),
        ]
        .iter()
        .map(normalize_tournament)
        .collect()
    }

    fn ids(list: &[Tournament]) -> Vec<u64> {
        list.iter().filter_map(|t| t.id).map(|id| id.as_u64()).collect()
    }

    #[test]
    fn test_all_with_empty_query_is_identity() {
        let list = sample();
        let filter = TournamentFilter::new(StatusFilter::All, "");
        assert_eq!(filter_tournaments(&list, &filter), list);
    }

    #[test]
    fn test_status_categories() {
        let list = sample();
        let by = |s| ids(&filter_tournaments(&list, &TournamentFilter::new(s, "")));

        assert_eq!(by(StatusFilter::Active), vec![1, 4]);
        assert_eq!(by(StatusFilter::Upcoming), vec![3]);
        assert_eq!(by(StatusFilter::Finished), vec![2]);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let list = sample();
        let filter = TournamentFilter::new(StatusFilter::All, "  cs2 ");
        assert_eq!(ids(&filter_tournaments(&list, &filter)), vec![2, 4]);
    }

    #[test]
    fn test_query_searches_format_and_status() {
        let list = sample();
        let by_format = TournamentFilter::new(StatusFilter::All, "группы");
        assert_eq!(ids(&filter_tournaments(&list, &by_format)), vec![3]);

        let by_status = TournamentFilter::new(StatusFilter::All, "ЗАВЕРШ");
        assert_eq!(ids(&filter_tournaments(&list, &by_status)), vec![2]);
    }

    #[test]
    fn test_status_and_query_intersect() {
        let list = sample();
        let filter = TournamentFilter::new(StatusFilter::Active, "cs2");
        assert_eq!(ids(&filter_tournaments(&list, &filter)), vec![4]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let list = sample();
        let filter = TournamentFilter::new(StatusFilter::Active, "o");
        let once = filter_tournaments(&list, &filter);
        let twice = filter_tournaments(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_game_selector() {
        let list = sample();
        let mut filter = TournamentFilter::new(StatusFilter::All, "");

        filter.game = Some(GameSelector::parse("1"));
        assert_eq!(ids(&filter_tournaments(&list, &filter)), vec![1]);

        filter.game = Some(GameSelector::parse("cs2"));
        assert_eq!(ids(&filter_tournaments(&list, &filter)), vec![2, 4]);
    }

    #[test]
    fn test_date_bounds_on_start_date() {
        let list = sample();
        let mut filter = TournamentFilter::new(StatusFilter::All, "");
        filter.from = NaiveDate::from_ymd_opt(2026, 1, 1);
        filter.to = NaiveDate::from_ymd_opt(2026, 1, 31);

        // 4 has no start date and is kept.
        assert_eq!(ids(&filter_tournaments(&list, &filter)), vec![1, 4]);
    }

    #[test]
    fn test_parse_date_prefix() {
        assert_eq!(
            parse_date_prefix("2026-01-14T00:00:00Z"),
            NaiveDate::from_ymd_opt(2026, 1, 14)
        );
        assert_eq!(parse_date_prefix("soon"), None);
        assert_eq!(parse_date_prefix(""), None);
    }

    #[test]
    fn test_view_mutations_recompute() {
        let mut view = TournamentView::new(sample(), TournamentFilter::default());
        assert_eq!(ids(&view.visible()), vec![1, 4]);

        view.set_status(StatusFilter::All);
        view.set_search("valorant");
        assert_eq!(ids(&view.visible()), vec![3]);

        view.replace_tournaments(Vec::new());
        assert!(view.visible().is_empty());
        assert_eq!(view.filter().query, "valorant");
    }

    #[test]
    fn test_match_query_params() {
        let q = MatchQuery {
            tournament: Some(TournamentId::new(2)),
            status: Some("scheduled".to_string()),
            date_from: NaiveDate::from_ymd_opt(2026, 1, 1),
            q: Some("  ".to_string()),
            ..MatchQuery::default()
        };
        assert_eq!(
            q.to_params(),
            vec![
                ("tournament".to_string(), "2".to_string()),
                ("status".to_string(), "scheduled".to_string()),
                ("date_from".to_string(), "2026-01-01".to_string()),
            ]
        );
        assert!(MatchQuery::default().to_params().is_empty());
    }

    #[test]
    fn test_team_query_params() {
        let q = TeamQuery {
            game: Some(GameId::new(1)),
            country: Some("RU".to_string()),
            q: Some(" nova ".to_string()),
        };
        assert_eq!(q.to_params().len(), 3);
        assert_eq!(q.to_params()[2], ("q".to_string(), "nova".to_string()));
    }
}
