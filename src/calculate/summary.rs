//! All-time winrate totals per tracked entity.

use std::collections::HashMap;

use crate::models::{Commander, EntityId, Game, GameRecord, Participant, Player, WinRateSummary};

use super::StatsError;

/// Tally all-time records for the given entities, in input order.
///
/// Same lookup contract as the series calculator: every participant must
/// resolve to a tracked entity and every game must have a winner.
pub fn win_rate_summaries<F>(
    games: &[Game],
    entities: &[(EntityId, String)],
    entity_id: F,
) -> Result<Vec<WinRateSummary>, StatsError>
where
    F: Fn(&Participant) -> &EntityId,
{
    let mut records: HashMap<&EntityId, GameRecord> = entities
        .iter()
        .map(|(id, _)| (id, GameRecord::default()))
        .collect();

    for game in games {
        game.winner()
            .ok_or_else(|| StatsError::MissingWinner(game.id.clone()))?;

        for seat in &game.participants {
            let id = entity_id(seat);
            let record = records.get_mut(id).ok_or_else(|| StatsError::UnknownEntity {
                game_id: game.id.clone(),
                entity_id: id.clone(),
            })?;
            record.add(seat.is_winner());
        }
    }

    Ok(entities
        .iter()
        .map(|(id, name)| {
            let record = records.remove(id).unwrap_or_default();
            WinRateSummary::from_record(id.clone(), name.clone(), record)
        })
        .collect())
}

/// All-time totals per player.
pub fn player_summaries(
    games: &[Game],
    players: &[Player],
) -> Result<Vec<WinRateSummary>, StatsError> {
    let entities: Vec<(EntityId, String)> = players
        .iter()
        .map(|p| (p.id.clone(), p.name.clone()))
        .collect();
    win_rate_summaries(games, &entities, |seat| &seat.player_id)
}

/// All-time totals per commander.
pub fn commander_summaries(
    games: &[Game],
    commanders: &[Commander],
) -> Result<Vec<WinRateSummary>, StatsError> {
    let entities: Vec<(EntityId, String)> = commanders
        .iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect();
    win_rate_summaries(games, &entities, |seat| &seat.commander_id)
}
