use crate::cli::types::{GameId, MatchId, PlayerId, StatusFilter, TeamId, TournamentId};
use serde::{Deserialize, Serialize};
use serde_json::Value;


/// List responses come either as a bare array or as a pagination envelope.
///
/// Anything else (an error object without `results`, a scalar) is treated
/// as an empty list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload {
    Bare(Vec<Value>),
    Page {
        #[serde(default)]
        results: Vec<Value>,
    },
    Other(Value),
}

impl ListPayload {
    pub fn into_items(self) -> Vec<Value> {
        match self {
            ListPayload::Bare(items) => items,
            ListPayload::Page { results } => results,
            ListPayload::Other(_) => Vec::new(),
        }
    }
}

impl From<Value> for ListPayload {
    fn from(value: Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(ListPayload::Other(value))
    }
}

/// Whether some word of `s` starts with one of `keys`.
///
/// Matching on word starts keeps `inactive` from reading as `active`.
fn has_word_prefix(s: &str, keys: &[&str]) -> bool {
    s.split(|c: char| !c.is_alphanumeric())
        .any(|word| keys.iter().any(|k| word.starts_with(k)))
}

/// Coarse tournament status derived from free-form status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Registration,
    Active,
    Finished,
}

impl StatusCategory {
    /// Classify status text in either Russian or English.
    ///
    /// Unknown text counts as registration ("upcoming").
    pub fn classify(raw: &str) -> Self {
        let s = raw.trim().to_lowercase();
        if has_word_prefix(&s, &["ид", "active", "ongo", "running", "live"]) {
            StatusCategory::Active
        } else if has_word_prefix(&s, &["зав", "finish", "done"]) {
            StatusCategory::Finished
        } else {
            StatusCategory::Registration
        }
    }

    pub fn matches(&self, filter: StatusFilter) -> bool {
        match filter {
            StatusFilter::All => true,
            StatusFilter::Active => *self == StatusCategory::Active,
            StatusFilter::Upcoming => *self == StatusCategory::Registration,
            StatusFilter::Finished => *self == StatusCategory::Finished,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Registration => "Регистрация",
            StatusCategory::Active => "Идёт",
            StatusCategory::Finished => "Завершён",
        }
    }
}

/// Coarse match status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatusCategory {
    Scheduled,
    Live,
    Finished,
    Canceled,
    Other,
}

impl MatchStatusCategory {
    pub fn classify(raw: &str) -> Self {
        let s = raw.trim().to_lowercase();
        let has = |keys: &[&str]| has_word_prefix(&s, keys);
        if has(&["sched", "plan", "назнач", "заплан"]) {
            MatchStatusCategory::Scheduled
        } else if has(&["finish", "done", "зав"]) {
            MatchStatusCategory::Finished
        } else if has(&["live", "ongo", "ид"]) {
            MatchStatusCategory::Live
        } else if has(&["cancel", "отмен"]) {
            MatchStatusCategory::Canceled
        } else {
            MatchStatusCategory::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchStatusCategory::Scheduled => "Запланирован",
            MatchStatusCategory::Live => "Идёт",
            MatchStatusCategory::Finished => "Завершён",
            MatchStatusCategory::Canceled => "Отменён",
            MatchStatusCategory::Other => "—",
        }
    }
}

/// Canonical tournament record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tournament {
    pub id: Option<TournamentId>,
    pub name: String,
    pub status: String,
    pub format: String,
    /// `None` when the server sent something that is not a number.
    pub prize_pool: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub game_title: String,
    pub game_id: Option<GameId>,
}

impl Tournament {
    pub fn category(&self) -> StatusCategory {
        StatusCategory::classify(&self.status)
    }
}

/// Score line attached to a played match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub score_team1: Option<i64>,
    pub score_team2: Option<i64>,
    pub winner_name: Option<String>,
    pub details: Option<String>,
}

impl MatchResult {
    /// `"2:1"`, with dashes for missing scores.
    pub fn score(&self) -> String {
        let side = |s: Option<i64>| s.map(|v| v.to_string()).unwrap_or_else(|| "—".into());
        format!("{}:{}", side(self.score_team1), side(self.score_team2))
    }

    /// `details` when it is an http(s) link, e.g. a VOD.
    pub fn vod_url(&self) -> Option<&str> {
        let d = self.details.as_deref()?.trim();
        let lower = d.to_lowercase();
        let is_url = (lower.starts_with("http://") || lower.starts_with("https://"))
            && !d.chars().any(char::is_whitespace)
            && d.len() > "https://".len();
        is_url.then_some(d)
    }
}

/// Canonical match record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: Option<MatchId>,
    pub tournament_id: Option<TournamentId>,
    pub tournament_name: String,
    pub team1_name: String,
    pub team2_name: String,
    pub match_date: Option<String>,
    pub round: String,
    pub status: String,
    pub result: Option<MatchResult>,
}

impl Match {
    pub fn category(&self) -> MatchStatusCategory {
        MatchStatusCategory::classify(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularGame {
    pub title: String,
    pub tournaments_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularTeam {
    pub name: String,
    pub participations: u64,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: Option<TeamId>,
    pub name: String,
    pub country: Option<String>,
    pub logo_url: Option<String>,
}

impl Team {
    /// Placeholder logo: first letter of the name, upper-cased.
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "T".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: Option<PlayerId>,
    pub nickname: String,
    pub real_name: Option<String>,
    pub role: Option<String>,
    pub team_id: Option<TeamId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: Option<GameId>,
    pub title: String,
    pub genre: Option<String>,
}

/// A team registered in a tournament, with its players.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub team_name: String,
    pub players_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    pub place: Option<i64>,
    pub team_name: String,
}

/// One past tournament of a team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub tournament_id: Option<TournamentId>,
    pub tournament_name: String,
    pub game_title: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub place: Option<i64>,
}

/// Permission flags: `null` reads as `false`.
fn null_as_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Current user as reported by `/auth/me/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Me {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_staff: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_superuser: bool,
}

impl Me {
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.is_superuser
    }
}

/// Body of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_staff: bool,
}
