//! Recorded games and their participants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CommanderId, EntityId, GameId, PlayerId};

/// Placement value that marks the winner of a game.
pub const WINNING_PLACEMENT: u32 = 0;

/// One seat at the table: a player and the commander they piloted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Player in this seat
    pub player_id: PlayerId,

    /// Commander the player brought
    pub commander_id: CommanderId,

    /// Final placement (0 = winner)
    pub placement: u32,
}

impl Participant {
    /// Create a new participant.
    pub fn new(player_id: PlayerId, commander_id: CommanderId, placement: u32) -> Self {
        Self {
            player_id,
            commander_id,
            placement,
        }
    }

    /// Check if this seat won the game.
    pub fn is_winner(&self) -> bool {
        self.placement == WINNING_PLACEMENT
    }
}

/// A recorded Commander game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier (derived from played_at + seats)
    pub id: GameId,

    /// When the game was played
    pub played_at: DateTime<Utc>,

    /// Everyone at the table, winner included
    pub participants: Vec<Participant>,
}

impl Game {
    /// Create a new Game with auto-generated ID.
    pub fn new(played_at: DateTime<Utc>, participants: Vec<Participant>) -> Self {
        let mut fields: Vec<String> = vec![played_at.to_rfc3339()];
        fields.extend(
            participants
                .iter()
                .map(|p| format!("{}:{}", p.player_id, p.placement)),
        );
        let refs: Vec<&str> = fields.iter().map(String::as_str).collect();
        let id = EntityId::generate(&refs);

        Self {
            id,
            played_at,
            participants,
        }
    }

    /// Number of players at the table.
    pub fn pod_size(&self) -> usize {
        self.participants.len()
    }

    /// The winning seat: the first participant with placement 0.
    pub fn winner(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.is_winner())
    }

    /// Check whether the given player sat in this game.
    pub fn involves_player(&self, id: &PlayerId) -> bool {
        self.participants.iter().any(|p| &p.player_id == id)
    }

    /// Check whether the given commander was fielded in this game.
    pub fn involves_commander(&self, id: &CommanderId) -> bool {
        self.participants.iter().any(|p| &p.commander_id == id)
    }
}
