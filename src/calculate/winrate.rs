//! Sliding-window winrate series replayed over game history.
//!
//! Games are grouped into meetings (all games sharing a calendar date) and
//! replayed in ascending date order. Every game of a meeting is applied to
//! the participants' rolling records before any point is emitted, so a data
//! point reflects the state at the end of the whole meeting.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{Commander, DataPoint, EntityId, Game, Participant, Player, TimeSeries};

use super::{RollingRecord, StatsError};

/// Group games by the calendar date they were played on.
///
/// The date portion of `played_at` alone decides the meeting; time of day
/// is discarded. The returned map iterates in ascending date order.
pub fn meetings(games: &[Game]) -> BTreeMap<NaiveDate, Vec<&Game>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&Game>> = BTreeMap::new();
    for game in games {
        by_date
            .entry(game.played_at.date_naive())
            .or_default()
            .push(game);
    }
    by_date
}

/// Compute per-entity winrate series over a trailing window.
///
/// `entities` is the universe of (id, name) pairs to produce series for;
/// every participant of every game must resolve to one of them or the call
/// fails with [`StatsError::UnknownEntity`]. A `window` of `Some(n)` caps
/// each entity's record at its last `n` games; `None` tracks full history.
/// `entity_id` extracts the tracked id from a seat, which is what lets the
/// same replay serve both player- and commander-scoped views.
///
/// One point per meeting is emitted for every entity with at least one
/// recorded game by that meeting, including entities idle on that date.
/// Entities that never appear get an empty series. Series come back in
/// `entities` order.
pub fn win_rate_series<F>(
    games: &[Game],
    entities: &[(EntityId, String)],
    window: Option<usize>,
    entity_id: F,
) -> Result<Vec<TimeSeries>, StatsError>
where
    F: Fn(&Participant) -> &EntityId,
{
    if window == Some(0) {
        return Err(StatsError::InvalidWindow);
    }

    let mut state: HashMap<&EntityId, (RollingRecord, Vec<DataPoint>)> = entities
        .iter()
        .map(|(id, _)| (id, (RollingRecord::new(window), Vec::new())))
        .collect();

    for (date, day_games) in meetings(games) {
        for game in day_games {
            game.winner()
                .ok_or_else(|| StatsError::MissingWinner(game.id.clone()))?;

            for seat in &game.participants {
                let id = entity_id(seat);
                let (record, _) =
                    state
                        .get_mut(id)
                        .ok_or_else(|| StatsError::UnknownEntity {
                            game_id: game.id.clone(),
                            entity_id: id.clone(),
                        })?;
                record.push(seat.is_winner());
            }
        }

        for (record, points) in state.values_mut() {
            if !record.is_empty() {
                points.push(DataPoint {
                    date,
                    win_rate: record.win_rate(),
                });
            }
        }
    }

    Ok(entities
        .iter()
        .map(|(id, name)| {
            let points = state.remove(id).map(|(_, points)| points).unwrap_or_default();
            TimeSeries {
                id: id.clone(),
                name: name.clone(),
                points,
            }
        })
        .collect())
}

/// Player-scoped winrate series: a seat counts toward the player sitting in
/// it.
pub fn player_win_rate_series(
    games: &[Game],
    players: &[Player],
    window: Option<usize>,
) -> Result<Vec<TimeSeries>, StatsError> {
    let entities: Vec<(EntityId, String)> = players
        .iter()
        .map(|p| (p.id.clone(), p.name.clone()))
        .collect();
    win_rate_series(games, &entities, window, |seat| &seat.player_id)
}

/// Commander-scoped winrate series: a seat counts toward the commander it
/// fielded.
pub fn commander_win_rate_series(
    games: &[Game],
    commanders: &[Commander],
    window: Option<usize>,
) -> Result<Vec<TimeSeries>, StatsError> {
    let entities: Vec<(EntityId, String)> = commanders
        .iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect();
    win_rate_series(games, &entities, window, |seat| &seat.commander_id)
}
