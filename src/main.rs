//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use esports_db::{
    cli::{AuthCmd, Commands, EsportsDb, MatchesCmd, TeamsCmd, TournamentsCmd},
    commands::{
        admin::handle_admin,
        auth::{handle_login, handle_logout, handle_me, handle_register},
        browse::handle_browse,
        common::CommandContext,
        dashboard::handle_dashboard,
        matches::{handle_match_list, handle_match_show},
        teams::{handle_team_countries, handle_team_list, handle_team_show},
        tournaments::{handle_tournament_list, handle_tournament_show, TournamentListParams},
    },
    core::{MatchQuery, TeamQuery},
    Result,
};

async fn dispatch(ctx: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Dashboard {
            status,
            search,
            top,
            json,
        } => handle_dashboard(ctx, status, search, top, json).await,

        Commands::Browse { status } => handle_browse(ctx, status).await,

        Commands::Tournaments { cmd } => match cmd {
            TournamentsCmd::List {
                status,
                search,
                game,
                from,
                to,
                json,
            } => {
                let params = TournamentListParams::new(status, search, game, from, to, json);
                handle_tournament_list(ctx, params).await
            }
            TournamentsCmd::Show { id, json } => handle_tournament_show(ctx, id, json).await,
        },

        Commands::Matches { cmd } => match cmd {
            MatchesCmd::List {
                tournament,
                team,
                status,
                from,
                to,
                search,
                json,
            } => {
                let query = MatchQuery {
                    tournament,
                    team,
                    status,
                    date_from: from,
                    date_to: to,
                    q: search,
                };
                handle_match_list(ctx, query, json).await
            }
            MatchesCmd::Show { id, json } => handle_match_show(ctx, id, json).await,
        },

        Commands::Teams { cmd } => match cmd {
            TeamsCmd::List {
                game,
                country,
                search,
                json,
            } => {
                let query = TeamQuery {
                    game,
                    country,
                    q: search,
                };
                handle_team_list(ctx, query, json).await
            }
            TeamsCmd::Show { id, json } => handle_team_show(ctx, id, json).await,
            TeamsCmd::Countries { game } => {
                let query = TeamQuery {
                    game,
                    ..TeamQuery::default()
                };
                handle_team_countries(ctx, query).await
            }
        },

        Commands::Auth { cmd } => match cmd {
            AuthCmd::Register {
                username,
                email,
                password,
            } => handle_register(ctx, &username, email.as_deref(), &password).await,
            AuthCmd::Login { username, password } => {
                handle_login(ctx, &username, &password).await
            }
            AuthCmd::Logout => handle_logout(ctx).await,
            AuthCmd::Me { json } => handle_me(ctx, json).await,
        },

        Commands::Admin { cmd } => handle_admin(ctx, cmd).await,
    }
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = EsportsDb::parse();

    let level = if app.connection.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let ctx = CommandContext::new(&app.connection).context("invalid configuration")?;

    let fallback = app.command.error_fallback();
    if let Err(e) = dispatch(&ctx, app.command).await {
        log::debug!("command failed: {e:?}");
        eprintln!("Ошибка: {}", e.user_message(fallback));
        std::process::exit(1);
    }

    Ok(())
}
