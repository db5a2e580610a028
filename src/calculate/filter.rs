//! Pre-filters applied to a game snapshot before the calculators run.

use crate::models::{CommanderId, Game, PlayerId};

/// Keep only games with exactly `pod_size` seats.
pub fn retain_pod_size(games: &mut Vec<Game>, pod_size: usize) {
    games.retain(|g| g.pod_size() == pod_size);
}

/// Keep only games the given player sat in.
pub fn retain_involving_player(games: &mut Vec<Game>, id: &PlayerId) {
    games.retain(|g| g.involves_player(id));
}

/// Keep only games where the given commander was fielded.
pub fn retain_involving_commander(games: &mut Vec<Game>, id: &CommanderId) {
    games.retain(|g| g.involves_commander(id));
}
