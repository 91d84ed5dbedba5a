//! Match listing and match card commands

use crate::{core::MatchQuery, MatchId, Result};

use super::{
    common::CommandContext,
    output::{format_date_time, match_line, print_json},
};

/// Handle `matches list`
pub async fn handle_match_list(ctx: &CommandContext, query: MatchQuery, as_json: bool) -> Result<()> {
    let matches = ctx.client.fetch_matches(&query).await?;

    if as_json {
        print_json(&matches)?;
    } else if matches.is_empty() {
        println!("Матчей не найдено.");
    } else {
        for m in &matches {
            println!("{}", match_line(m));
        }
    }

    ctx.finish();
    Ok(())
}

/// Handle `matches show`
pub async fn handle_match_show(ctx: &CommandContext, id: MatchId, as_json: bool) -> Result<()> {
    let m = ctx.client.fetch_match(id).await?;

    if as_json {
        print_json(&m)?;
    } else {
        println!("{} vs {}", m.team1_name, m.team2_name);
        println!(
            "{} · {}",
            format_date_time(m.match_date.as_deref()),
            m.tournament_name
        );
        println!("Раунд: {}", m.round);
        println!("Статус: {} ({})", m.status, m.category().label());

        match &m.result {
            Some(result) => {
                println!("Счёт: {}", result.score());
                if let Some(winner) = &result.winner_name {
                    println!("Победитель: {winner}");
                }
                match (result.vod_url(), result.details.as_deref()) {
                    (Some(url), _) => println!("VOD: {url}"),
                    (None, Some(details)) if !details.trim().is_empty() => {
                        println!("Детали: {details}")
                    }
                    _ => {}
                }
            }
            None => println!("Результат ещё не внесён."),
        }
    }

    ctx.finish();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cli::ConnectionArgs, core::TokenStore, TeamId};
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_match_list_sends_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/matches/"))
            .and(query_param("team", "3"))
            .and(query_param("q", "nova"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let connection = ConnectionArgs {
            api_base: Some(format!("{}/api", server.uri())),
            timeout_secs: Some(2),
            debug: false,
        };
        let ctx =
            CommandContext::with_store(&connection, TokenStore::at(dir.path().join("token")))
                .unwrap();

        let query = MatchQuery {
            team: Some(TeamId::new(3)),
            q: Some("nova".into()),
            ..MatchQuery::default()
        };
        handle_match_list(&ctx, query, true).await.unwrap();
    }
}
