//! CLI argument definitions and parsing structures.

use super::types::{
    filters::{Resource, StatusFilter},
    ids::{GameId, MatchId, TeamId, TournamentId},
};
use crate::{
    api::aggregate::DEFAULT_TOP_N,
    commands::{parse_date, parse_field},
    error::{MSG_DELETE_FAILED, MSG_REQUEST_FAILED, MSG_SAVE_FAILED},
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Connection settings shared by every command
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// API base URL (or set `ESPORTS_DB_API_BASE` env var).
    #[clap(long, global = true)]
    pub api_base: Option<String>,

    /// Per-request timeout in seconds (or set `ESPORTS_DB_TIMEOUT_SECS` env var).
    #[clap(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Log request URLs and fallbacks to stderr.
    #[clap(long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "esports-db", about = "Esports tournament database CLI")]
pub struct EsportsDb {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tournaments, upcoming matches and popularity rankings at a glance.
    Dashboard {
        /// Which tournaments to list.
        #[clap(long, short, default_value_t = StatusFilter::Active)]
        status: StatusFilter,

        /// Free-text search over name, game, format and status.
        #[clap(long, short = 'q')]
        search: Option<String>,

        /// Number of entries in each ranking.
        #[clap(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Interactive tournament browser reading commands from stdin.
    Browse {
        /// Initial status filter.
        #[clap(long, short, default_value_t = StatusFilter::Active)]
        status: StatusFilter,
    },

    /// Tournament listing and details
    Tournaments {
        #[clap(subcommand)]
        cmd: TournamentsCmd,
    },

    /// Match listing and details
    Matches {
        #[clap(subcommand)]
        cmd: MatchesCmd,
    },

    /// Team listing and details
    Teams {
        #[clap(subcommand)]
        cmd: TeamsCmd,
    },

    /// Register, log in and out
    Auth {
        #[clap(subcommand)]
        cmd: AuthCmd,
    },

    /// Staff-only create/update/delete over the API collections
    Admin {
        #[clap(subcommand)]
        cmd: AdminCmd,
    },
}

impl Commands {
    /// User-facing message used when a failure carries no server detail.
    pub fn error_fallback(&self) -> &'static str {
        match self {
            Commands::Admin {
                cmd: AdminCmd::Create { .. } | AdminCmd::Update { .. },
            } => MSG_SAVE_FAILED,
            Commands::Admin {
                cmd: AdminCmd::Delete { .. },
            } => MSG_DELETE_FAILED,
            _ => MSG_REQUEST_FAILED,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum TournamentsCmd {
    /// List tournaments, filtered client-side.
    List {
        #[clap(long, short, default_value_t = StatusFilter::All)]
        status: StatusFilter,

        #[clap(long, short = 'q')]
        search: Option<String>,

        /// Game id or title.
        #[clap(long, short)]
        game: Option<String>,

        /// Earliest start date (YYYY-MM-DD).
        #[clap(long, value_parser = parse_date)]
        from: Option<NaiveDate>,

        /// Latest start date (YYYY-MM-DD).
        #[clap(long, value_parser = parse_date)]
        to: Option<NaiveDate>,

        #[clap(long)]
        json: bool,
    },

    /// Tournament card with participants, standings and matches.
    Show {
        id: TournamentId,

        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum MatchesCmd {
    /// List matches, filtered by the API.
    List {
        #[clap(long)]
        tournament: Option<TournamentId>,

        #[clap(long)]
        team: Option<TeamId>,

        /// Raw status value, e.g. `запланирован`.
        #[clap(long, short)]
        status: Option<String>,

        /// Earliest match date (YYYY-MM-DD).
        #[clap(long, value_parser = parse_date)]
        from: Option<NaiveDate>,

        /// Latest match date (YYYY-MM-DD).
        #[clap(long, value_parser = parse_date)]
        to: Option<NaiveDate>,

        #[clap(long, short = 'q')]
        search: Option<String>,

        #[clap(long)]
        json: bool,
    },

    /// Match card with result and VOD link.
    Show {
        id: MatchId,

        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeamsCmd {
    /// List teams with roster size and running tournaments.
    List {
        #[clap(long, short)]
        game: Option<GameId>,

        #[clap(long, short)]
        country: Option<String>,

        #[clap(long, short = 'q')]
        search: Option<String>,

        #[clap(long)]
        json: bool,
    },

    /// Team card with roster, current tournaments, history and recent matches.
    Show {
        id: TeamId,

        #[clap(long)]
        json: bool,
    },

    /// Distinct team countries, sorted.
    Countries {
        #[clap(long, short)]
        game: Option<GameId>,
    },
}

#[derive(Debug, Subcommand)]
pub enum AuthCmd {
    /// Create an account and store its token.
    Register {
        #[clap(long, short)]
        username: String,

        #[clap(long, short)]
        email: Option<String>,

        #[clap(long, short)]
        password: String,
    },

    /// Log in and store the token.
    Login {
        #[clap(long, short)]
        username: String,

        #[clap(long, short)]
        password: String,
    },

    /// Invalidate and forget the stored token.
    Logout,

    /// Show the current user.
    Me {
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCmd {
    /// List the raw records of a collection.
    List {
        resource: Resource,

        #[clap(long)]
        json: bool,
    },

    /// Create a record: `admin create games -f title=Dota\ 2 -f genre=MOBA`.
    Create {
        resource: Resource,

        /// Field assignment `key=value` (repeatable).
        #[clap(long = "field", short = 'f', value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Update fields of an existing record.
    Update {
        resource: Resource,

        id: u64,

        /// Field assignment `key=value` (repeatable).
        #[clap(long = "field", short = 'f', value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Delete a record.
    Delete { resource: Resource, id: u64 },
}
