//! Text rendering of canonical records.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::Serialize;

use crate::{
    api::{
        normalize::DASH,
        types::{
            HistoryEntry, Match, Player, PopularGame, PopularTeam, RosterEntry, Standing,
            StatusCategory, Team, Tournament,
        },
    },
    core::filters::parse_date_prefix,
    Result,
};

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `250 000 ₽` with ru-RU digit grouping; at most three decimals.
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return DASH.to_string();
    }

    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let int = rounded.trunc() as u64;
    let frac = ((rounded - rounded.trunc()) * 1000.0).round() as u64;

    let digits = int.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }

    if frac > 0 {
        let frac = format!("{frac:03}");
        grouped.push(',');
        grouped.push_str(frac.trim_end_matches('0'));
    }

    let sign = if value < 0.0 && (int > 0 || frac > 0) { "-" } else { "" };
    format!("{sign}{grouped} ₽")
}

/// Prize pool, or a dash when the server sent no usable amount.
pub fn format_prize(value: Option<f64>) -> String {
    value.map(format_money).unwrap_or_else(|| DASH.to_string())
}

/// `14.01.2026`; unparsable text is shown as is.
pub fn format_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => DASH.to_string(),
        Some(s) => parse_date_prefix(s)
            .map(|d| d.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|| s.to_string()),
    }
}

pub fn format_date_range(start: Option<&str>, end: Option<&str>) -> String {
    match (start, end) {
        (None, None) => DASH.to_string(),
        (Some(s), None) => format_date(Some(s)),
        (None, Some(e)) => format_date(Some(e)),
        (Some(s), Some(e)) => format!("{} — {}", format_date(Some(s)), format_date(Some(e))),
    }
}

/// `14.01.2026 18:30`. Timestamps with an offset are shown in local time.
pub fn format_date_time(raw: Option<&str>) -> String {
    let Some(s) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DASH.to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Local).format("%d.%m.%Y %H:%M").to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return dt.format("%d.%m.%Y %H:%M").to_string();
        }
    }
    format_date(Some(s))
}

/// Badge text for a tournament status.
pub fn status_badge(raw: &str) -> &'static str {
    match StatusCategory::classify(raw) {
        StatusCategory::Active => "Идёт",
        StatusCategory::Finished => "Завершён",
        StatusCategory::Registration => "Предстоящий",
    }
}

fn id_tag<T: std::fmt::Display>(id: Option<T>) -> String {
    id.map(|id| format!("#{id}")).unwrap_or_else(|| "#?".to_string())
}

pub fn tournament_line(t: &Tournament) -> String {
    format!(
        "{} [{}] {} · {} · {} · {} · {}",
        id_tag(t.id),
        status_badge(&t.status),
        t.name,
        t.game_title,
        t.format,
        format_date_range(t.start_date.as_deref(), t.end_date.as_deref()),
        format_prize(t.prize_pool),
    )
}

pub fn match_line(m: &Match) -> String {
    let score = m
        .result
        .as_ref()
        .map(|r| format!(" {}", r.score()))
        .unwrap_or_default();
    format!(
        "{} {} {} vs {}{} · {} · {} · {}",
        id_tag(m.id),
        format_date_time(m.match_date.as_deref()),
        m.team1_name,
        m.team2_name,
        score,
        m.tournament_name,
        m.round,
        m.status,
    )
}

pub fn popular_game_line(g: &PopularGame) -> String {
    format!("{} · {} турн.", g.title, g.tournaments_count)
}

pub fn popular_team_line(t: &PopularTeam) -> String {
    match &t.country {
        Some(country) => format!("{} ({}) · {} уч.", t.name, country, t.participations),
        None => format!("{} · {} уч.", t.name, t.participations),
    }
}

/// Team line with roster size and running tournaments, when known.
pub fn team_line(t: &Team, players: Option<usize>, current: Option<usize>) -> String {
    let count = |n: Option<usize>| n.map(|n| n.to_string()).unwrap_or_else(|| DASH.into());
    format!(
        "{} [{}] {} · {} · игроков: {} · турниров сейчас: {}",
        id_tag(t.id),
        t.initial(),
        t.name,
        t.country.as_deref().unwrap_or(DASH),
        count(players),
        count(current),
    )
}

pub fn player_line(p: &Player) -> String {
    format!(
        "{} ({}) · {}",
        p.nickname,
        p.real_name.as_deref().unwrap_or(DASH),
        p.role.as_deref().unwrap_or(DASH),
    )
}

pub fn roster_line(r: &RosterEntry) -> String {
    format!("{} · игроков: {}", r.team_name, r.players_count)
}

pub fn standing_line(s: &Standing) -> String {
    match s.place {
        Some(place) => format!("{place}. {}", s.team_name),
        None => format!("{DASH}. {}", s.team_name),
    }
}

pub fn history_line(h: &HistoryEntry) -> String {
    let place = h
        .place
        .map(|p| format!("место {p}"))
        .unwrap_or_else(|| DASH.to_string());
    format!(
        "{} · {} · {} → {} · {}",
        h.tournament_name,
        h.game_title,
        format_date(h.start_date.as_deref()),
        format_date(h.end_date.as_deref()),
        place,
    )
}

/// Print a titled section; empty lists show `empty`.
pub fn print_section<T>(title: &str, items: &[T], empty: &str, line: impl Fn(&T) -> String) {
    println!("\n{title}");
    if items.is_empty() {
        println!("  {empty}");
        return;
    }
    for item in items {
        println!("  {}", line(item));
    }
}
