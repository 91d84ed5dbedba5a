//! Team listing, team card and country list commands

use std::collections::BTreeSet;

use futures_util::future::join_all;
use log::warn;
use serde::Serialize;

use crate::{
    api::{
        fetch::RECENT_MATCHES_LIMIT,
        types::{HistoryEntry, Match, Player, Team, Tournament},
        ApiClient,
    },
    core::TeamQuery,
    Result, TeamId,
};

use super::{
    common::{or_empty, CommandContext},
    output::{
        format_date_range, history_line, match_line, player_line, print_json, print_section,
        team_line,
    },
};

/// A team with its roster size and number of running tournaments.
///
/// Counts are `None` when they could not be loaded.
#[derive(Debug, Clone, Serialize)]
pub struct TeamSummary {
    #[serde(flatten)]
    pub team: Team,
    pub players_count: Option<usize>,
    pub current_tournaments_count: Option<usize>,
}

async fn summarize(client: &ApiClient, team: Team) -> TeamSummary {
    let Some(id) = team.id else {
        return TeamSummary {
            team,
            players_count: None,
            current_tournaments_count: None,
        };
    };

    let (roster, current) = tokio::join!(
        client.fetch_team_roster(id),
        client.fetch_team_current_tournaments(id),
    );
    match (roster, current) {
        (Ok(roster), Ok(current)) => TeamSummary {
            team,
            players_count: Some(roster.len()),
            current_tournaments_count: Some(current.len()),
        },
        (Err(e), _) | (_, Err(e)) => {
            warn!("counts for team {id} unavailable: {e}");
            TeamSummary {
                team,
                players_count: None,
                current_tournaments_count: None,
            }
        }
    }
}

/// Teams matching `query`, each with its counts, fetched concurrently.
pub async fn load_team_summaries(client: &ApiClient, query: &TeamQuery) -> Result<Vec<TeamSummary>> {
    let teams = client.fetch_teams(query).await?;
    Ok(join_all(teams.into_iter().map(|t| summarize(client, t))).await)
}

/// Distinct non-empty countries, sorted.
pub fn distinct_countries(teams: &[Team]) -> Vec<String> {
    teams
        .iter()
        .filter_map(|t| t.country.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Handle `teams list`
pub async fn handle_team_list(ctx: &CommandContext, query: TeamQuery, as_json: bool) -> Result<()> {
    let summaries = load_team_summaries(&ctx.client, &query).await?;

    if as_json {
        print_json(&summaries)?;
    } else {
        if let Some(game_id) = query.game {
            let title = match ctx.client.fetch_games().await {
                Ok(games) => games
                    .into_iter()
                    .find(|g| g.id == Some(game_id))
                    .map(|g| g.title),
                Err(e) => {
                    warn!("games unavailable: {e}");
                    None
                }
            };
            println!("Игра: {}", title.unwrap_or_else(|| game_id.to_string()));
        }
        println!("Команд: {}", summaries.len());
        for s in &summaries {
            println!(
                "{}",
                team_line(&s.team, s.players_count, s.current_tournaments_count)
            );
        }
    }

    ctx.finish();
    Ok(())
}

/// Everything shown on a team card
#[derive(Debug, Clone, Serialize)]
pub struct TeamCard {
    pub team: Team,
    pub roster: Vec<Player>,
    pub current_tournaments: Vec<Tournament>,
    pub history: Vec<HistoryEntry>,
    pub recent_matches: Vec<Match>,
}

pub async fn load_team_card(client: &ApiClient, id: TeamId) -> Result<TeamCard> {
    let (team, roster, current, history, recent) = tokio::join!(
        client.fetch_team(id),
        client.fetch_team_roster(id),
        client.fetch_team_current_tournaments(id),
        client.fetch_team_history(id),
        client.fetch_team_recent_matches(id, RECENT_MATCHES_LIMIT),
    );

    Ok(TeamCard {
        team: team?,
        roster: or_empty("roster", roster),
        current_tournaments: or_empty("current tournaments", current),
        history: or_empty("history", history),
        recent_matches: or_empty("recent matches", recent),
    })
}

/// Handle `teams show`
pub async fn handle_team_show(ctx: &CommandContext, id: TeamId, as_json: bool) -> Result<()> {
    let card = load_team_card(&ctx.client, id).await?;

    if as_json {
        print_json(&card)?;
    } else {
        println!("{} [{}]", card.team.name, card.team.initial());
        println!(
            "{}",
            card.team.country.as_deref().unwrap_or("Страна не указана")
        );
        if let Some(logo) = &card.team.logo_url {
            println!("Логотип: {logo}");
        }

        print_section("Состав", &card.roster, "Состав пуст.", player_line);
        print_section(
            "Текущие турниры",
            &card.current_tournaments,
            "Сейчас не участвует.",
            |t: &Tournament| {
                format!(
                    "{} · {} · {} · {}",
                    t.name,
                    t.game_title,
                    format_date_range(t.start_date.as_deref(), t.end_date.as_deref()),
                    t.status
                )
            },
        );
        print_section("История", &card.history, "Нет истории.", history_line);
        print_section(
            "Последние матчи",
            &card.recent_matches,
            "Матчей нет.",
            match_line,
        );
    }

    ctx.finish();
    Ok(())
}

/// Handle `teams countries`
pub async fn handle_team_countries(ctx: &CommandContext, query: TeamQuery) -> Result<()> {
    let teams = ctx.client.fetch_teams(&query).await?;
    for country in distinct_countries(&teams) {
        println!("{country}");
    }

    ctx.finish();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::normalize::normalize_team;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(
            format!("{}/api", server.uri()),
            Duration::from_secs(2),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_distinct_countries_sorted() {
        let teams: Vec<Team> = [
            json!({"id": 1, "name": "Nova", "country": "RU"}),
            json!({"id": 2, "name": "Hydra", "country": "DE"}),
            json!({"id": 3, "name": "Orion", "country": "RU"}),
            json!({"id": 4, "name": "Zenith", "country": ""}),
            json!({"id": 5, "name": "Apex"}),
        ]
        .iter()
        .map(normalize_team)
        .collect();

        assert_eq!(distinct_countries(&teams), vec!["DE", "RU"]);
    }

    #[tokio::test]
    async fn test_team_summaries_with_counts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/teams/"))
            .and(query_param("country", "RU"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "Nova", "country": "RU"},
                {"id": 2, "name": "Orion", "country": "RU"},
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/teams/1/roster/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"nickname": "a"}, {"nickname": "b"}])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/teams/1/current_tournaments/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 9}])))
            .mount(&server)
            .await;

        let query = TeamQuery {
            country: Some("RU".into()),
            ..TeamQuery::default()
        };
        let summaries = load_team_summaries(&client_for(&server), &query).await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].players_count, Some(2));
        assert_eq!(summaries[0].current_tournaments_count, Some(1));
        // Team 2 endpoints are missing.
        assert_eq!(summaries[1].team.name, "Orion");
        assert_eq!(summaries[1].players_count, None);
    }

    #[tokio::test]
    async fn test_team_card_reads_wrapped_lists() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/teams/1/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "Nova"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/teams/1/history/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"history": [
                {"tournament_id": 3, "tournament_name": "Winter Cup", "place": 1}
            ]})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/teams/1/recent_matches/"))
            .and(query_param("limit", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"matches": [
                {"id": 5, "team1_name": "Nova", "team2_name": "Hydra"}
            ]})))
            .mount(&server)
            .await;

        let card = load_team_card(&client_for(&server), TeamId::new(1)).await.unwrap();

        assert_eq!(card.team.name, "Nova");
        assert!(card.roster.is_empty());
        assert_eq!(card.history[0].tournament_name, "Winter Cup");
        assert_eq!(card.history[0].place, Some(1));
        assert_eq!(card.recent_matches[0].team2_name, "Hydra");
    }
}
