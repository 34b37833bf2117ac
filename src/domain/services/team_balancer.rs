//! Greedy team balancing.
//!
//! Players are taken strongest first and each one joins whichever team
//! currently has the lower rating total, with ties going to team 1. Not a
//! minimal-difference partition, but deterministic and O(n log n).

use crate::domain::entities::{Player, TeamSplit};

/// Split attendees into two teams with close rating totals.
///
/// Never fails: an empty slice gives two empty teams and a single player
/// lands in team 1. Callers decide whether a split of fewer than two
/// players is worth showing.
pub fn balance(players: &[Player]) -> TeamSplit {
    let mut sorted = players.to_vec();
    // Stable, so equal ratings keep their input order
    sorted.sort_by(|a, b| b.rating.cmp(&a.rating));

    let mut split = TeamSplit::default();
    let mut team1_rating: u32 = 0;
    let mut team2_rating: u32 = 0;

    for player in sorted {
        let points = u32::from(player.rating.half_points());
        if team1_rating <= team2_rating {
            team1_rating += points;
            split.team1.push(player);
        } else {
            team2_rating += points;
            split.team2.push(player);
        }
    }

    split
}
