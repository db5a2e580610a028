//! Players and commanders tracked by the ledger.

use serde::{Deserialize, Serialize};

use super::{CommanderId, EntityId, PlayerId};

/// A tracked player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier (derived from name)
    pub id: PlayerId,

    /// Display name
    pub name: String,
}

impl Player {
    /// Create a new Player with auto-generated ID.
    pub fn new(name: String) -> Self {
        let id = EntityId::generate(&["player", &name]);
        Self { id, name }
    }
}

/// A tracked commander.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commander {
    /// Unique identifier (derived from name)
    pub id: CommanderId,

    /// Card name
    pub name: String,
}

impl Commander {
    /// Create a new Commander with auto-generated ID.
    pub fn new(name: String) -> Self {
        let id = EntityId::generate(&["commander", &name]);
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_deterministic() {
        let p1 = Player::new("Alice".to_string());
        let p2 = Player::new("Alice".to_string());
        assert_eq!(p1.id, p2.id);

        let p3 = Player::new("Bob".to_string());
        assert_ne!(p1.id, p3.id);
    }

    #[test]
    fn test_commander_id_deterministic() {
        let c1 = Commander::new("Atraxa, Praetors' Voice".to_string());
        let c2 = Commander::new("Atraxa, Praetors' Voice".to_string());
        assert_eq!(c1.id, c2.id);
    }

    #[test]
    fn test_player_and_commander_namespaces_disjoint() {
        // A player and a commander sharing a name must not share an id.
        let player = Player::new("Kenrith".to_string());
        let commander = Commander::new("Kenrith".to_string());
        assert_ne!(player.id, commander.id);
    }

    #[test]
    fn test_roster_serialization() {
        let player = Player::new("Alice".to_string());
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player.id, deserialized.id);
        assert_eq!(player.name, deserialized.name);
    }
}
