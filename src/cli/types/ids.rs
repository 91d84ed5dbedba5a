//! ID types for records served by the esports API.

use crate::error::{EsportsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = EsportsError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

record_id!(
    /// Type-safe wrapper for tournament IDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use esports_db::TournamentId;
    ///
    /// let id: TournamentId = "42".parse().unwrap();
    /// assert_eq!(id.as_u64(), 42);
    /// assert_eq!(id.to_string(), "42");
    /// ```
    TournamentId
);
record_id!(
    /// Type-safe wrapper for match IDs.
    MatchId
);
record_id!(
    /// Type-safe wrapper for team IDs.
    TeamId
);
record_id!(
    /// Type-safe wrapper for game IDs.
    GameId
);
record_id!(PlayerId);
