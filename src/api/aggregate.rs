//! Client-side popularity rankings, used when the report endpoints are missing.

use std::collections::HashMap;

use super::types::{Match, PopularGame, PopularTeam, Tournament};

/// Default number of entries in a ranking.
pub const DEFAULT_TOP_N: usize = 6;

/// Count occurrences of each key, keeping first-seen order, then rank by count.
///
/// `sort_by` is stable, so equal counts keep their first-seen order.
fn rank<'a>(keys: impl Iterator<Item = &'a str>, limit: usize) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for key in keys {
        match index.get(key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// Games ranked by the number of tournaments played in them.
pub fn popular_games(tournaments: &[Tournament], limit: usize) -> Vec<PopularGame> {
    rank(tournaments.iter().map(|t| t.game_title.as_str()), limit)
        .into_iter()
        .map(|(title, tournaments_count)| PopularGame {
            title,
            tournaments_count,
        })
        .collect()
}

/// Teams ranked by appearances in either slot of the given matches.
pub fn popular_teams(matches: &[Match], limit: usize) -> Vec<PopularTeam> {
    let names = matches
        .iter()
        .flat_map(|m| [m.team1_name.as_str(), m.team2_name.as_str()])
        .filter(|name| !name.is_empty());

    rank(names, limit)
        .into_iter()
        .map(|(name, participations)| PopularTeam {
            name,
            participations,
            country: None,
        })
        .collect()
}
