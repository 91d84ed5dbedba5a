//! Dashboard command: filtered tournaments, upcoming matches and rankings.

use serde::Serialize;

use crate::{
    api::{
        aggregate::{popular_games, popular_teams},
        types::{Match, PopularGame, PopularTeam, Tournament},
        ApiClient,
    },
    core::{TournamentFilter, TournamentView},
    Result, StatusFilter,
};

use super::{
    common::CommandContext,
    output::{
        match_line, popular_game_line, popular_team_line, print_json, print_section,
        tournament_line,
    },
};

/// Number of upcoming matches shown.
pub const UPCOMING_MATCHES_LIMIT: usize = 10;

/// Everything the dashboard shows, loaded in one go.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub tournaments: Vec<Tournament>,
    pub upcoming_matches: Vec<Match>,
    pub popular_games: Vec<PopularGame>,
    pub popular_teams: Vec<PopularTeam>,
}

/// Report rows when the server provided a non-empty report, else the fallback.
fn report_or<T>(report: Option<Vec<T>>, top: usize, fallback: impl FnOnce() -> Vec<T>) -> Vec<T> {
    match report {
        Some(mut rows) if !rows.is_empty() => {
            rows.truncate(top);
            rows
        }
        _ => fallback(),
    }
}

/// Issue all four dashboard fetches concurrently.
///
/// Each fetch substitutes its own fallback, so this never fails.
pub async fn load_dashboard(client: &ApiClient, top: usize) -> DashboardData {
    let (tournaments, upcoming_matches, games_report, teams_report) = tokio::join!(
        client.fetch_tournaments(),
        client.fetch_upcoming_matches(UPCOMING_MATCHES_LIMIT),
        client.fetch_popular_games(),
        client.fetch_popular_teams(),
    );

    let popular_games = report_or(games_report, top, || popular_games(&tournaments, top));
    let popular_teams = report_or(teams_report, top, || {
        popular_teams(&upcoming_matches, top)
    });

    DashboardData {
        tournaments,
        upcoming_matches,
        popular_games,
        popular_teams,
    }
}

/// Print the dashboard for the already filtered tournaments.
pub fn render_dashboard(data: &DashboardData, visible: &[Tournament], filter: &TournamentFilter) {
    println!(
        "Турниров: {} · Матчей: {} · Игр: {}",
        visible.len(),
        data.upcoming_matches.len(),
        data.popular_games.len()
    );

    let title = format!(
        "Турниры ({}, показано {} из {})",
        filter.status,
        visible.len(),
        data.tournaments.len()
    );
    print_section(&title, visible, "Ничего не найдено.", tournament_line);
    print_section(
        "Ближайшие матчи",
        &data.upcoming_matches,
        "Нет данных.",
        match_line,
    );
    print_section(
        "Популярные игры",
        &data.popular_games,
        "Нет данных.",
        popular_game_line,
    );
    print_section(
        "Популярные команды",
        &data.popular_teams,
        "Нет данных.",
        popular_team_line,
    );
}

/// Handle the dashboard command
pub async fn handle_dashboard(
    ctx: &CommandContext,
    status: StatusFilter,
    search: Option<String>,
    top: usize,
    as_json: bool,
) -> Result<()> {
    let data = load_dashboard(&ctx.client, top).await;
    let view = TournamentView::new(
        data.tournaments.clone(),
        TournamentFilter::new(status, search.unwrap_or_default()),
    );
    let visible = view.visible();

    if as_json {
        print_json(&DashboardData {
            tournaments: visible,
            ..data
        })?;
    } else {
        render_dashboard(&data, &visible, view.filter());
    }

    ctx.finish();
    Ok(())
}
