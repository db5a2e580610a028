//! Bounded FIFO of game results backing a sliding winrate window.

use std::collections::VecDeque;

/// Trailing record of wins and losses, optionally capped.
///
/// With a window of `n`, pushing the `n+1`-th result evicts the oldest
/// entry, so the record always covers the most recent `n` games. Without a
/// window the record keeps full history.
#[derive(Debug, Clone)]
pub struct RollingRecord {
    results: VecDeque<bool>,
    window: Option<usize>,
    wins: usize,
}

impl RollingRecord {
    /// Create an empty record. Callers validate that a window, if given, is
    /// at least 1.
    pub fn new(window: Option<usize>) -> Self {
        let results = match window {
            Some(n) => VecDeque::with_capacity(n),
            None => VecDeque::new(),
        };
        Self {
            results,
            window,
            wins: 0,
        }
    }

    /// Record a result, evicting the oldest entry once the window is full.
    pub fn push(&mut self, won: bool) {
        if let Some(cap) = self.window {
            if self.results.len() == cap && self.results.pop_front() == Some(true) {
                self.wins -= 1;
            }
        }
        if won {
            self.wins += 1;
        }
        self.results.push_back(won);
    }

    /// Games currently in the window.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Wins currently in the window.
    pub fn wins(&self) -> usize {
        self.wins
    }

    /// Win rate over the games currently in the window (0.0 to 1.0).
    pub fn win_rate(&self) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            self.wins as f64 / self.results.len() as f64
        }
    }
}
