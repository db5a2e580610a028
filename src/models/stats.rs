//! Derived statistics models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EntityId, PlayerId};

/// Cumulative win/game tally.
///
/// Commander games have exactly one winner and no draws, so the record is
/// just wins out of games played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub wins: u32,
    pub games: u32,
}

impl GameRecord {
    /// Create a new record.
    pub fn new(wins: u32, games: u32) -> Self {
        Self { wins, games }
    }

    /// Record one more game.
    pub fn add(&mut self, won: bool) {
        self.games += 1;
        if won {
            self.wins += 1;
        }
    }

    /// Win rate as a fraction (0.0 to 1.0).
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games)
        }
    }
}

/// One point in a winrate series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Meeting date the point was emitted for
    pub date: NaiveDate,

    /// Win rate over the window at the end of that meeting (0.0 to 1.0)
    pub win_rate: f64,
}

/// A tracked entity's chronological winrate series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Entity this series belongs to
    pub id: EntityId,

    /// Display name, carried through for output labeling
    pub name: String,

    /// One point per meeting, ascending by date
    pub points: Vec<DataPoint>,
}

impl TimeSeries {
    /// Create an empty series for an entity.
    pub fn new(id: EntityId, name: String) -> Self {
        Self {
            id,
            name,
            points: Vec::new(),
        }
    }

    /// The most recent point, if any.
    pub fn latest(&self) -> Option<&DataPoint> {
        self.points.last()
    }
}

/// All-time totals for one tracked entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinRateSummary {
    pub id: EntityId,
    pub name: String,
    pub wins: u32,
    pub games: u32,

    /// Win rate (0.0 to 1.0)
    pub win_rate: f64,
}

impl WinRateSummary {
    /// Build a summary from a tallied record.
    pub fn from_record(id: EntityId, name: String, record: GameRecord) -> Self {
        Self {
            id,
            name,
            wins: record.wins,
            games: record.games,
            win_rate: record.win_rate(),
        }
    }
}

/// Shared-game record for an ordered player pair.
///
/// `games` counts the games both players sat in; `wins` counts how many of
/// those the first player won.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadRecord {
    pub player_id: PlayerId,
    pub opponent_id: PlayerId,
    pub games: u32,
    pub wins: u32,

    /// Win rate (0.0 to 1.0)
    pub win_rate: f64,
}
