//! Static demo dataset served when the live API is unreachable.
//!
//! Entries are raw payloads in the API's own shape so they travel through the
//! same normalizers as live data.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use super::normalize::{normalize_all, normalize_match, normalize_tournament};
use super::types::{Match, Tournament};

/// Raw demo tournaments. The first one starts `now`.
pub fn raw_tournaments(now: DateTime<Utc>) -> Vec<Value> {
    let today = now.format("%Y-%m-%d").to_string();
    vec![
        json!({
            "id": 1, "name": "Winter Cup 2026", "game_title": "Dota 2",
            "start_date": today, "end_date": "2026-02-10", "prize_pool": 250000,
            "format": "Группы + плей-офф", "status": "идёт"
        }),
        json!({
            "id": 2, "name": "CS2 Major Qualifier", "game_title": "CS2",
            "start_date": "2026-01-20", "end_date": "2026-02-01", "prize_pool": 150000,
            "format": "Плей-офф", "status": "регистрация"
        }),
        json!({
            "id": 3, "name": "Valorant Clash", "game_title": "Valorant",
            "start_date": "2026-02-05", "end_date": "2026-02-12", "prize_pool": 100000,
            "format": "Группы", "status": "регистрация"
        }),
    ]
}

/// Raw demo matches, scheduled a few hours after `now`.
pub fn raw_matches(now: DateTime<Utc>) -> Vec<Value> {
    let plus_hours = |h: i64| (now + Duration::hours(h)).to_rfc3339();
    vec![
        json!({
            "id": 101, "tournament_name": "Winter Cup 2026", "team1_name": "Nova",
            "team2_name": "Hydra", "match_date": plus_hours(3), "round": "Группа",
            "status": "запланирован"
        }),
        json!({
            "id": 102, "tournament_name": "CS2 Major Qualifier", "team1_name": "Falcons",
            "team2_name": "Apex", "match_date": plus_hours(8), "round": "1/8",
            "status": "запланирован"
        }),
        json!({
            "id": 103, "tournament_name": "Winter Cup 2026", "team1_name": "Zenith",
            "team2_name": "Orion", "match_date": plus_hours(20), "round": "Группа",
            "status": "запланирован"
        }),
    ]
}

pub fn tournaments() -> Vec<Tournament> {
    normalize_all(&raw_tournaments(Utc::now()), normalize_tournament)
}

pub fn matches() -> Vec<Match> {
    normalize_all(&raw_matches(Utc::now()), normalize_match)
}
