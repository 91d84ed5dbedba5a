//! Tournament listing and tournament card commands

use serde::Serialize;

use crate::{
    api::types::{Match, RosterEntry, Standing, Tournament},
    core::{filter_tournaments, GameSelector, MatchQuery, TournamentFilter},
    Result, TournamentId,
};

use super::{
    common::{or_empty, CommandContext},
    output::{
        format_date_range, format_prize, match_line, print_json, print_section, roster_line,
        standing_line, status_badge, tournament_line,
    },
};

/// Parameters for the tournament list
#[derive(Debug, Clone, Default)]
pub struct TournamentListParams {
    pub filter: TournamentFilter,
    pub as_json: bool,
}

impl TournamentListParams {
    pub fn new(
        status: crate::StatusFilter,
        search: Option<String>,
        game: Option<String>,
        from: Option<chrono::NaiveDate>,
        to: Option<chrono::NaiveDate>,
        as_json: bool,
    ) -> Self {
        let mut filter = TournamentFilter::new(status, search.unwrap_or_default());
        filter.game = game
            .filter(|g| !g.trim().is_empty())
            .map(|g| GameSelector::parse(&g));
        filter.from = from;
        filter.to = to;
        Self { filter, as_json }
    }
}

/// Handle `tournaments list`
pub async fn handle_tournament_list(ctx: &CommandContext, params: TournamentListParams) -> Result<()> {
    let all = ctx.client.fetch_tournaments().await;
    let visible = filter_tournaments(&all, &params.filter);

    if params.as_json {
        print_json(&visible)?;
    } else {
        println!("Найдено: {} из {}", visible.len(), all.len());
        for t in &visible {
            println!("{}", tournament_line(t));
        }
    }

    ctx.finish();
    Ok(())
}

/// Everything shown on a tournament card
#[derive(Debug, Clone, Serialize)]
pub struct TournamentCard {
    pub tournament: Tournament,
    pub participants: Vec<RosterEntry>,
    pub standings: Vec<Standing>,
    pub matches: Vec<Match>,
}

/// Load a tournament with its participants, standings and matches.
///
/// Only the tournament itself is required; the sections degrade to empty.
pub async fn load_tournament_card(ctx: &CommandContext, id: TournamentId) -> Result<TournamentCard> {
    let query = MatchQuery {
        tournament: Some(id),
        ..MatchQuery::default()
    };
    let (tournament, participants, standings, matches) = tokio::join!(
        ctx.client.fetch_tournament(id),
        ctx.client.fetch_tournament_roster(id),
        ctx.client.fetch_standings(id),
        ctx.client.fetch_matches(&query),
    );

    Ok(TournamentCard {
        tournament: tournament?,
        participants: or_empty("participants", participants),
        standings: or_empty("standings", standings),
        matches: or_empty("matches", matches),
    })
}

/// Handle `tournaments show`
pub async fn handle_tournament_show(ctx: &CommandContext, id: TournamentId, as_json: bool) -> Result<()> {
    let card = load_tournament_card(ctx, id).await?;

    if as_json {
        print_json(&card)?;
    } else {
        let t = &card.tournament;
        println!("{} [{}]", t.name, status_badge(&t.status));
        println!("Игра: {}", t.game_title);
        println!(
            "Даты: {}",
            format_date_range(t.start_date.as_deref(), t.end_date.as_deref())
        );
        println!("Формат: {}", t.format);
        println!("Призовой фонд: {}", format_prize(t.prize_pool));
        println!("Участников: {}", card.participants.len());

        print_section("Участники", &card.participants, "Нет участников.", roster_line);
        print_section("Итоговые места", &card.standings, "Нет данных.", standing_line);
        print_section("Матчи", &card.matches, "Матчей нет.", match_line);
    }

    ctx.finish();
    Ok(())
}
