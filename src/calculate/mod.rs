//! Winrate statistics computed from recorded games.
//!
//! All calculators are pure functions over in-memory snapshots: each call
//! builds its own working state and never mutates its inputs, so concurrent
//! calls with different inputs are trivially safe.

mod filter;
mod head_to_head;
mod summary;
mod window;
mod winrate;

pub use filter::*;
pub use head_to_head::*;
pub use summary::*;
pub use window::*;
pub use winrate::*;

use thiserror::Error;

use crate::models::{EntityId, GameId};

/// Errors raised while replaying game history.
#[derive(Debug, Error)]
pub enum StatsError {
    /// A participant referenced an id missing from the tracked roster.
    #[error("game {game_id} references unknown entity {entity_id}")]
    UnknownEntity {
        game_id: GameId,
        entity_id: EntityId,
    },

    /// A game had no participant with the winning placement.
    #[error("game {0} has no winning participant")]
    MissingWinner(GameId),

    /// The sliding window must hold at least one game.
    #[error("sliding window size must be at least 1")]
    InvalidWindow,
}
