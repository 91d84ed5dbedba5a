//! Filter and selector types for CLI commands.

use serde::Serialize;
use std::fmt;

/// Status selector for tournament lists.
///
/// `Upcoming` selects tournaments still in registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Tournaments currently running
    #[default]
    #[value(aliases = ["ongoing", "running", "live", "идёт", "идет"])]
    Active,
    /// Tournaments open for registration
    #[value(aliases = ["registration", "регистрация", "предстоящие"])]
    Upcoming,
    /// Tournaments that are over
    #[value(aliases = ["done", "завершён", "завершен"])]
    Finished,
    /// No status restriction
    #[value(aliases = ["все"])]
    All,
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusFilter::Active => "active",
            StatusFilter::Upcoming => "upcoming",
            StatusFilter::Finished => "finished",
            StatusFilter::All => "all",
        };
        write!(f, "{}", s)
    }
}

/// Same words as the `--status` flag, case-insensitive; blank means `All`.
impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s.is_empty() {
            return Ok(StatusFilter::All);
        }
        <Self as clap::ValueEnum>::from_str(&s, false)
            .map_err(|_| format!("unknown status filter: {s}"))
    }
}

/// Collections editable from the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Resource {
    Games,
    Tournaments,
    Teams,
    Players,
    Matches,
}

impl Resource {
    /// Collection path below the API base.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Games => "/games/",
            Resource::Tournaments => "/tournaments/",
            Resource::Teams => "/teams/",
            Resource::Players => "/players/",
            Resource::Matches => "/matches/",
        }
    }

    /// Editable fields, in form order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Resource::Games => &["title", "genre"],
            Resource::Tournaments => &[
                "name",
                "game",
                "start_date",
                "end_date",
                "prize_pool",
                "format",
                "status",
            ],
            Resource::Teams => &["name", "logo_url", "country", "is_approved"],
            Resource::Players => &["nickname", "real_name", "team", "role"],
            Resource::Matches => &["tournament", "team1", "team2", "match_date", "round", "status"],
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            Resource::Games => "Игры",
            Resource::Tournaments => "Турниры",
            Resource::Teams => "Команды",
            Resource::Players => "Игроки",
            Resource::Matches => "Матчи",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Resource::Games => "games",
            Resource::Tournaments => "tournaments",
            Resource::Teams => "teams",
            Resource::Players => "players",
            Resource::Matches => "matches",
        };
        write!(f, "{}", s)
    }
}
