//! Shared game vocabulary: sides, shot outcomes, tallies, placement errors.

use core::fmt;
use serde::{Deserialize, Serialize};

/// The two actors in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl Default for Side {
    /// The human moves first in a fresh game.
    fn default() -> Self {
        Side::Human
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Result of applying a shot to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on a ship cell.
    Hit,
    /// Shot landed on open water.
    Miss,
    /// Cell was already shot (or out of bounds); nothing changed.
    Repeat,
}

impl ShotOutcome {
    /// True for outcomes that changed board state.
    pub fn is_valid(self) -> bool {
        !matches!(self, ShotOutcome::Repeat)
    }

    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Per-side hit/miss counts, kept for display only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotTally {
    pub hits: u32,
    pub misses: u32,
}

impl ShotTally {
    pub fn record(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }
}

/// Fleet placement could not find a legal position within the attempt cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementError {
    pub length: usize,
    pub attempts: usize,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to place a ship of length {} after {} attempts",
            self.length, self.attempts
        )
    }
}

impl std::error::Error for PlacementError {}
