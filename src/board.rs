//! One side's board: ship occupancy plus shot history.

use rand::Rng;

use crate::cellset::Cells;
use crate::common::{PlacementError, ShotOutcome};
use crate::coord::Coord;
use crate::fleet::place_fleet;

/// An N×N board holding ship cells and the hits and misses taken against
/// them.
///
/// Invariants: `hits ⊆ ships`, `misses ∩ ships = ∅`, and a cell is shot at
/// most once — re-firing is an idempotent no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board<const N: usize> {
    ships: Cells<N>,
    hits: Cells<N>,
    misses: Cells<N>,
}

impl<const N: usize> Board<N> {
    /// An empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            ships: Cells::new(),
            hits: Cells::new(),
            misses: Cells::new(),
        }
    }

    /// A board with `lengths` randomly placed, no shots taken.
    pub fn with_fleet<R: Rng + ?Sized>(
        rng: &mut R,
        lengths: &[usize],
    ) -> Result<Self, PlacementError> {
        Ok(Board {
            ships: place_fleet(rng, lengths)?,
            hits: Cells::new(),
            misses: Cells::new(),
        })
    }

    /// Rebuild a board from persisted sets. The three sets are trusted as
    /// stored; nothing is re-derived.
    pub fn from_parts(ships: Cells<N>, hits: Cells<N>, misses: Cells<N>) -> Self {
        Board {
            ships,
            hits,
            misses,
        }
    }

    pub fn ships(&self) -> Cells<N> {
        self.ships
    }

    pub fn hits(&self) -> Cells<N> {
        self.hits
    }

    pub fn misses(&self) -> Cells<N> {
        self.misses
    }

    /// All cells shot so far.
    pub fn shots(&self) -> Cells<N> {
        self.hits | self.misses
    }

    /// Apply a shot, marking the cell hit or miss. Already-shot and
    /// out-of-grid coordinates report [`ShotOutcome::Repeat`] and leave
    /// the board untouched.
    pub fn apply_shot(&mut self, coord: Coord) -> ShotOutcome {
        if !coord.in_bounds(N) || self.shots().contains(coord) {
            return ShotOutcome::Repeat;
        }
        if self.ships.contains(coord) {
            let _ = self.hits.insert(coord);
            ShotOutcome::Hit
        } else {
            let _ = self.misses.insert(coord);
            ShotOutcome::Miss
        }
    }

    /// True once every ship cell has been hit. A board with no ships is
    /// vacuously won.
    pub fn has_won(&self) -> bool {
        self.hits.len() == self.ships.len()
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}
