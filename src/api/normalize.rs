//! Normalization of loosely-shaped API payloads into canonical records.
//!
//! Different endpoint variants name the same attribute differently
//! (`start_date` vs `startDate`, `team1_name` vs `team1.name`, ...). Each entity
//! declares an ordered table of candidate field paths per attribute; the first
//! candidate holding a usable, non-null value wins, otherwise a default applies.
//! Normalization never fails.

use serde_json::Value;

use super::types::{
    Game, HistoryEntry, Match, MatchResult, Player, PopularGame, PopularTeam, RosterEntry,
    Standing, Team, Tournament,
};


/// Text placeholder for missing attributes.
pub const DASH: &str = "—";
pub const UNNAMED_TOURNAMENT: &str = "Без названия";
pub const DEFAULT_TOURNAMENT_STATUS: &str = "регистрация";
pub const DEFAULT_MATCH_STATUS: &str = "запланирован";
pub const TEAM1_PLACEHOLDER: &str = "Team 1";
pub const TEAM2_PLACEHOLDER: &str = "Team 2";

/// Location of a candidate value inside a raw object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Key(&'static str),
    Nested(&'static str, &'static str),
}

use FieldPath::{Key, Nested};

impl FieldPath {
    fn lookup<'a>(&self, obj: &'a Value) -> Option<&'a Value> {
        let v = match *self {
            Key(k) => obj.get(k)?,
            Nested(outer, inner) => obj.get(outer)?.get(inner)?,
        };
        (!v.is_null()).then_some(v)
    }
}

mod fields {
    use super::FieldPath::{self, Key, Nested};

    pub const TOURNAMENT_ID: &[FieldPath] = &[Key("id"), Key("tournament_id")];
    pub const TOURNAMENT_NAME: &[FieldPath] = &[Key("name"), Key("title")];
    pub const STATUS: &[FieldPath] = &[Key("status")];
    pub const FORMAT: &[FieldPath] = &[Key("format")];
    pub const PRIZE_POOL: &[FieldPath] = &[Key("prize_pool"), Key("prizePool")];
    pub const START_DATE: &[FieldPath] = &[Key("start_date"), Key("startDate")];
    pub const END_DATE: &[FieldPath] = &[Key("end_date"), Key("endDate")];
    pub const GAME_TITLE: &[FieldPath] = &[
        Key("game_title"),
        Key("game"),
        Key("game_name"),
        Nested("game", "title"),
        Nested("game", "name"),
    ];
    pub const GAME_ID: &[FieldPath] = &[Key("game_id"), Key("game"), Nested("game", "id")];

    pub const MATCH_ID: &[FieldPath] = &[Key("id"), Key("match_id")];
    pub const MATCH_TOURNAMENT_ID: &[FieldPath] =
        &[Key("tournament_id"), Key("tournament"), Nested("tournament", "id")];
    pub const MATCH_TOURNAMENT_NAME: &[FieldPath] =
        &[Key("tournament_name"), Nested("tournament", "name")];
    pub const TEAM1_NAME: &[FieldPath] = &[Key("team1_name"), Nested("team1", "name")];
    pub const TEAM2_NAME: &[FieldPath] = &[Key("team2_name"), Nested("team2", "name")];
    pub const MATCH_DATE: &[FieldPath] = &[Key("match_date"), Key("matchDate")];
    pub const ROUND: &[FieldPath] = &[Key("round")];

    pub const POPULAR_GAME_TITLE: &[FieldPath] = &[Key("title"), Key("game"), Key("game_title")];
    pub const POPULAR_GAME_COUNT: &[FieldPath] = &[Key("tournaments_count"), Key("count")];
    pub const POPULAR_TEAM_NAME: &[FieldPath] = &[Key("name"), Key("team")];
    pub const POPULAR_TEAM_COUNT: &[FieldPath] = &[Key("participations"), Key("count")];
    pub const COUNTRY: &[FieldPath] = &[Key("country")];

    pub const ID: &[FieldPath] = &[Key("id")];
    pub const NAME: &[FieldPath] = &[Key("name")];
    pub const LOGO_URL: &[FieldPath] = &[Key("logo_url"), Key("logoUrl")];
    pub const TITLE: &[FieldPath] = &[Key("title"), Key("name")];
    pub const GENRE: &[FieldPath] = &[Key("genre")];
    pub const NICKNAME: &[FieldPath] = &[Key("nickname")];
    pub const REAL_NAME: &[FieldPath] = &[Key("real_name"), Key("realName")];
    pub const ROLE: &[FieldPath] = &[Key("role")];
    pub const PLAYER_TEAM_ID: &[FieldPath] = &[Key("team"), Nested("team", "id"), Key("team_id")];

    pub const TEAM_NAME: &[FieldPath] = &[Key("team_name"), Nested("team", "name")];
    pub const PLACE: &[FieldPath] = &[Key("place")];
    pub const HISTORY_TOURNAMENT_ID: &[FieldPath] = &[Key("tournament_id"), Key("tournament")];
    pub const HISTORY_TOURNAMENT_NAME: &[FieldPath] = &[Key("tournament_name"), Key("name")];
}

/// First non-null value among `candidates`.
pub fn pick<'a>(obj: &'a Value, candidates: &[FieldPath]) -> Option<&'a Value> {
    candidates.iter().find_map(|c| c.lookup(obj))
}

/// First candidate holding a string.
///
/// Numbers and objects are skipped: a numeric `game` is a foreign key, and an
/// object `game` is resolved through its nested candidates.
pub fn pick_text(obj: &Value, candidates: &[FieldPath]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|c| c.lookup(obj))
        .find_map(|v| v.as_str().map(str::to_string))
}

/// Optional text: blank strings count as absent.
pub fn pick_opt_text(obj: &Value, candidates: &[FieldPath]) -> Option<String> {
    pick_text(obj, candidates).filter(|s| !s.trim().is_empty())
}

/// First candidate usable as an identifier: a non-negative integer or a
/// string holding one.
pub fn pick_id<T: From<u64>>(obj: &Value, candidates: &[FieldPath]) -> Option<T> {
    candidates
        .iter()
        .filter_map(|c| c.lookup(obj))
        .find_map(|v| match v {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        })
        .map(T::from)
}

/// Numeric coercion: numbers pass, numeric strings parse, the rest is 0.
pub fn coerce_number(v: &Value) -> f64 {
    let n = match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Non-negative amount, 0 when absent or not a number.
pub fn pick_amount(obj: &Value, candidates: &[FieldPath]) -> f64 {
    pick(obj, candidates).map(coerce_number).unwrap_or(0.0).max(0.0)
}

/// Prize amount: 0 when absent, `None` when present but not a number.
pub fn pick_prize(obj: &Value, candidates: &[FieldPath]) -> Option<f64> {
    let Some(v) = pick(obj, candidates) else {
        return Some(0.0);
    };
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => Some(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite()).map(|n| n.max(0.0))
}

/// Non-negative count, 0 when absent or not a number.
pub fn pick_count(obj: &Value, candidates: &[FieldPath]) -> u64 {
    pick_amount(obj, candidates).trunc() as u64
}

fn pick_int(obj: &Value, candidates: &[FieldPath]) -> Option<i64> {
    pick(obj, candidates).and_then(|v| match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn text_or(obj: &Value, candidates: &[FieldPath], default: &str) -> String {
    pick_text(obj, candidates).unwrap_or_else(|| default.to_string())
}

pub fn normalize_tournament(raw: &Value) -> Tournament {
    Tournament {
        id: pick_id(raw, fields::TOURNAMENT_ID),
        name: text_or(raw, fields::TOURNAMENT_NAME, UNNAMED_TOURNAMENT),
        status: text_or(raw, fields::STATUS, DEFAULT_TOURNAMENT_STATUS),
        format: text_or(raw, fields::FORMAT, DASH),
        prize_pool: pick_prize(raw, fields::PRIZE_POOL),
        start_date: pick_text(raw, fields::START_DATE),
        end_date: pick_text(raw, fields::END_DATE),
        game_title: text_or(raw, fields::GAME_TITLE, DASH),
        game_id: pick_id(raw, fields::GAME_ID),
    }
}

pub fn normalize_match_result(raw: &Value) -> MatchResult {
    MatchResult {
        score_team1: pick_int(raw, &[Key("score_team1")]),
        score_team2: pick_int(raw, &[Key("score_team2")]),
        winner_name: pick_opt_text(raw, &[Key("winner_name"), Nested("winner", "name")]),
        details: pick_opt_text(raw, &[Key("details")]),
    }
}

pub fn normalize_match(raw: &Value) -> Match {
    Match {
        id: pick_id(raw, fields::MATCH_ID),
        tournament_id: pick_id(raw, fields::MATCH_TOURNAMENT_ID),
        tournament_name: text_or(raw, fields::MATCH_TOURNAMENT_NAME, DASH),
        team1_name: text_or(raw, fields::TEAM1_NAME, TEAM1_PLACEHOLDER),
        team2_name: text_or(raw, fields::TEAM2_NAME, TEAM2_PLACEHOLDER),
        match_date: pick_text(raw, fields::MATCH_DATE),
        round: text_or(raw, fields::ROUND, DASH),
        status: text_or(raw, fields::STATUS, DEFAULT_MATCH_STATUS),
        result: raw
            .get("result")
            .filter(|r| r.is_object())
            .map(normalize_match_result),
    }
}

pub fn normalize_popular_game(raw: &Value) -> PopularGame {
    PopularGame {
        title: text_or(raw, fields::POPULAR_GAME_TITLE, DASH),
        tournaments_count: pick_count(raw, fields::POPULAR_GAME_COUNT),
    }
}

pub fn normalize_popular_team(raw: &Value) -> PopularTeam {
    PopularTeam {
        name: text_or(raw, fields::POPULAR_TEAM_NAME, DASH),
        participations: pick_count(raw, fields::POPULAR_TEAM_COUNT),
        country: pick_opt_text(raw, fields::COUNTRY),
    }
}

pub fn normalize_team(raw: &Value) -> Team {
    Team {
        id: pick_id(raw, fields::ID),
        name: text_or(raw, fields::NAME, DASH),
        country: pick_opt_text(raw, fields::COUNTRY),
        logo_url: pick_opt_text(raw, fields::LOGO_URL),
    }
}

pub fn normalize_player(raw: &Value) -> Player {
    Player {
        id: pick_id(raw, fields::ID),
        nickname: text_or(raw, fields::NICKNAME, DASH),
        real_name: pick_opt_text(raw, fields::REAL_NAME),
        role: pick_opt_text(raw, fields::ROLE),
        team_id: pick_id(raw, fields::PLAYER_TEAM_ID),
    }
}

pub fn normalize_game(raw: &Value) -> Game {
    Game {
        id: pick_id(raw, fields::ID),
        title: text_or(raw, fields::TITLE, DASH),
        genre: pick_opt_text(raw, fields::GENRE),
    }
}

pub fn normalize_roster_entry(raw: &Value) -> RosterEntry {
    RosterEntry {
        team_name: text_or(raw, fields::TEAM_NAME, DASH),
        players_count: raw
            .get("players")
            .and_then(Value::as_array)
            .map_or(0, Vec::len),
    }
}

pub fn normalize_standing(raw: &Value) -> Standing {
    Standing {
        place: pick_int(raw, fields::PLACE),
        team_name: text_or(raw, fields::TEAM_NAME, DASH),
    }
}

pub fn normalize_history_entry(raw: &Value) -> HistoryEntry {
    HistoryEntry {
        tournament_id: pick_id(raw, fields::HISTORY_TOURNAMENT_ID),
        tournament_name: text_or(raw, fields::HISTORY_TOURNAMENT_NAME, DASH),
        game_title: text_or(raw, fields::GAME_TITLE, DASH),
        start_date: pick_text(raw, fields::START_DATE),
        end_date: pick_text(raw, fields::END_DATE),
        place: pick_int(raw, fields::PLACE),
    }
}

/// Normalize every item with `f`.
pub fn normalize_all<T>(items: &[Value], f: fn(&Value) -> T) -> Vec<T> {
    items.iter().map(f).collect()
}
