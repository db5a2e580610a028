//! Pairwise player records over shared games.

use std::collections::{HashMap, HashSet};

use crate::models::{Game, GameRecord, HeadToHeadRecord, Player, PlayerId};

use super::StatsError;

/// Compute head-to-head records for every ordered pair of players that
/// shared at least one game.
///
/// For a pair (a, b), `games` counts the games both sat in and `wins`
/// counts how many of those `a` won. Pairs that never met are omitted.
/// Records come back sorted by (player, opponent) id so output is
/// deterministic.
pub fn head_to_head(
    games: &[Game],
    players: &[Player],
) -> Result<Vec<HeadToHeadRecord>, StatsError> {
    let known: HashSet<&PlayerId> = players.iter().map(|p| &p.id).collect();
    let mut table: HashMap<(PlayerId, PlayerId), GameRecord> = HashMap::new();

    for game in games {
        game.winner()
            .ok_or_else(|| StatsError::MissingWinner(game.id.clone()))?;

        for seat in &game.participants {
            if !known.contains(&seat.player_id) {
                return Err(StatsError::UnknownEntity {
                    game_id: game.id.clone(),
                    entity_id: seat.player_id.clone(),
                });
            }
        }

        for seat in &game.participants {
            for other in &game.participants {
                if seat.player_id == other.player_id {
                    continue;
                }
                table
                    .entry((seat.player_id.clone(), other.player_id.clone()))
                    .or_default()
                    .add(seat.is_winner());
            }
        }
    }

    let mut records: Vec<HeadToHeadRecord> = table
        .into_iter()
        .map(|((player_id, opponent_id), record)| HeadToHeadRecord {
            games: record.games,
            wins: record.wins,
            win_rate: record.win_rate(),
            player_id,
            opponent_id,
        })
        .collect();
    records.sort_by(|a, b| {
        (a.player_id.as_str(), a.opponent_id.as_str())
            .cmp(&(b.player_id.as_str(), b.opponent_id.as_str()))
    });
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, Participant};
    use chrono::{TimeZone, Utc};

    fn game(day: u32, seats: &[(&Player, u32)]) -> Game {
        let participants = seats
            .iter()
            .map(|(p, placement)| {
                Participant::new(
                    p.id.clone(),
                    EntityId::generate(&["commander", &p.name]),
                    *placement,
                )
            })
            .collect();
        Game::new(
            Utc.with_ymd_and_hms(2024, 4, day, 20, 0, 0).unwrap(),
            participants,
        )
    }

    fn record_for<'a>(
        records: &'a [HeadToHeadRecord],
        player: &Player,
        opponent: &Player,
    ) -> &'a HeadToHeadRecord {
        records
            .iter()
            .find(|r| r.player_id == player.id && r.opponent_id == opponent.id)
            .unwrap()
    }

    #[test]
    fn test_pair_counts() {
        let alice = Player::new("Alice".to_string());
        let bob = Player::new("Bob".to_string());
        let carol = Player::new("Carol".to_string());
        let players = vec![alice.clone(), bob.clone(), carol.clone()];

        let games = vec![
            game(1, &[(&alice, 0), (&bob, 1), (&carol, 2)]),
            game(2, &[(&alice, 1), (&bob, 0)]),
            game(3, &[(&bob, 0), (&carol, 1)]),
        ];

        let records = head_to_head(&games, &players).unwrap();

        let ab = record_for(&records, &alice, &bob);
        assert_eq!(ab.games, 2);
        assert_eq!(ab.wins, 1);
        assert!((ab.win_rate - 0.5).abs() < 1e-9);

        let ba = record_for(&records, &bob, &alice);
        assert_eq!(ba.games, 2);
        assert_eq!(ba.wins, 1);

        let bc = record_for(&records, &bob, &carol);
        assert_eq!(bc.games, 2);
        assert_eq!(bc.wins, 2);

        let cb = record_for(&records, &carol, &bob);
        assert_eq!(cb.wins, 0);
        assert_eq!(cb.win_rate, 0.0);
    }

    #[test]
    fn test_pairs_that_never_met_are_omitted() {
        let alice = Player::new("Alice".to_string());
        let bob = Player::new("Bob".to_string());
        let carol = Player::new("Carol".to_string());
        let players = vec![alice.clone(), bob.clone(), carol.clone()];

        let games = vec![game(1, &[(&alice, 0), (&bob, 1)])];

        let records = head_to_head(&games, &players).unwrap();
        assert_eq!(records.len(), 2);
        assert!(!records.iter().any(|r| r.player_id == carol.id));
        assert!(!records.iter().any(|r| r.opponent_id == carol.id));
    }

    #[test]
    fn test_empty_games() {
        let players = vec![Player::new("Alice".to_string())];
        let records = head_to_head(&[], &players).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_output_sorted_by_pair() {
        let alice = Player::new("Alice".to_string());
        let bob = Player::new("Bob".to_string());
        let carol = Player::new("Carol".to_string());
        let players = vec![alice.clone(), bob.clone(), carol.clone()];

        let games = vec![game(1, &[(&alice, 0), (&bob, 1), (&carol, 2)])];

        let records = head_to_head(&games, &players).unwrap();
        assert_eq!(records.len(), 6);
        for pair in records.windows(2) {
            let left = (pair[0].player_id.as_str(), pair[0].opponent_id.as_str());
            let right = (pair[1].player_id.as_str(), pair[1].opponent_id.as_str());
            assert!(left < right);
        }
    }

    #[test]
    fn test_unknown_player_fails_fast() {
        let alice = Player::new("Alice".to_string());
        let bob = Player::new("Bob".to_string());
        let players = vec![alice.clone()];

        let games = vec![game(1, &[(&alice, 0), (&bob, 1)])];

        let err = head_to_head(&games, &players).unwrap_err();
        assert!(matches!(err, StatsError::UnknownEntity { .. }));
    }

    #[test]
    fn test_game_without_winner_fails_fast() {
        let alice = Player::new("Alice".to_string());
        let bob = Player::new("Bob".to_string());
        let players = vec![alice.clone(), bob.clone()];

        let games = vec![game(1, &[(&alice, 1), (&bob, 2)])];

        let err = head_to_head(&games, &players).unwrap_err();
        assert!(matches!(err, StatsError::MissingWinner(_)));
    }
}
