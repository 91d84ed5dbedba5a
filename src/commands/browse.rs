//! Interactive tournament browser.
//!
//! Reads one command per line from stdin and re-renders the tournament list
//! after every state change. Only the tournament list depends on the filter
//! state; nothing else is redrawn.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    core::{TournamentFilter, TournamentView},
    Result, StatusFilter,
};

use super::{
    common::CommandContext,
    output::{print_section, tournament_line},
};

const HELP: &str = "\
Команды:
  status <active|upcoming|finished|all>  фильтр по статусу
  search [текст]                         поиск (без текста сбрасывает)
  refresh                                перезагрузить турниры
  list                                   показать список
  help                                   эта справка
  quit                                   выход";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Status(StatusFilter),
    Search(String),
    Refresh,
    List,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse a line; `Ok(None)` for blank input.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let cmd = match word.to_lowercase().as_str() {
            "status" | "s" => BrowseCommand::Status(rest.parse()?),
            "search" | "q" | "/" => BrowseCommand::Search(rest.to_string()),
            "refresh" | "r" => BrowseCommand::Refresh,
            "list" | "l" => BrowseCommand::List,
            "help" | "h" | "?" => BrowseCommand::Help,
            "quit" | "exit" => BrowseCommand::Quit,
            other => return Err(format!("неизвестная команда: {other}")),
        };
        Ok(Some(cmd))
    }
}

/// Apply a filter mutation to the view. Returns `true` if the list must be
/// re-rendered.
pub fn apply(view: &mut TournamentView, cmd: &BrowseCommand) -> bool {
    match cmd {
        BrowseCommand::Status(status) => {
            view.set_status(*status);
            true
        }
        BrowseCommand::Search(query) => {
            view.set_search(query.clone());
            true
        }
        BrowseCommand::List => true,
        BrowseCommand::Refresh | BrowseCommand::Help | BrowseCommand::Quit => false,
    }
}

fn render(view: &TournamentView) {
    let visible = view.visible();
    let filter = view.filter();
    let title = format!(
        "Турниры ({}, «{}»): {} из {}",
        filter.status,
        filter.query.trim(),
        visible.len(),
        view.all().len()
    );
    print_section(&title, &visible, "Ничего не найдено.", tournament_line);
}

/// Handle the browse command
pub async fn handle_browse(ctx: &CommandContext, status: StatusFilter) -> Result<()> {
    let mut view = TournamentView::new(
        ctx.client.fetch_tournaments().await,
        TournamentFilter::new(status, ""),
    );
    render(&view);
    println!("\n{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = match BrowseCommand::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match cmd {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => println!("{HELP}"),
            BrowseCommand::Refresh => {
                view.replace_tournaments(ctx.client.fetch_tournaments().await);
                render(&view);
            }
            ref other => {
                if apply(&mut view, other) {
                    render(&view);
                }
            }
        }
    }

    ctx.finish();
    Ok(())
}
