//! Core data models for the ledger.

mod game;
mod ids;
mod roster;
mod stats;

pub use game::*;
pub use ids::*;
pub use roster::*;
pub use stats::*;
