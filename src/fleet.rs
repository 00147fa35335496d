//! Random fleet placement.
//!
//! Each ship length is placed by rejection sampling: draw a uniformly
//! random orientation and start cell whose full run stays in bounds, and
//! accept the candidate only if it touches no occupied cell. The sampler
//! is bounded per ship so a misconfigured fleet fails instead of spinning.

use rand::Rng;

use crate::cellset::Cells;
use crate::common::PlacementError;
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::coord::Coord;

/// Orientation of a ship's run on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The contiguous cells of a straight run starting at `origin`.
pub fn run_cells(
    origin: Coord,
    orientation: Orientation,
    length: usize,
) -> impl Iterator<Item = Coord> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => Coord::new(origin.row, origin.col + i as u8),
        Orientation::Vertical => Coord::new(origin.row + i as u8, origin.col),
    })
}

/// Place one ship of `length` onto `occupied`, returning the accepted run.
fn place_ship<const N: usize, R: Rng + ?Sized>(
    rng: &mut R,
    occupied: &Cells<N>,
    length: usize,
) -> Result<Cells<N>, PlacementError> {
    if length == 0 || length > N {
        return Err(PlacementError {
            length,
            attempts: 0,
        });
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_row = match orientation {
            Orientation::Vertical => N - length,
            Orientation::Horizontal => N - 1,
        };
        let max_col = match orientation {
            Orientation::Horizontal => N - length,
            Orientation::Vertical => N - 1,
        };
        let origin = Coord::new(
            rng.random_range(0..=max_row) as u8,
            rng.random_range(0..=max_col) as u8,
        );
        let Ok(candidate) = Cells::<N>::from_coords(run_cells(origin, orientation, length)) else {
            continue;
        };
        if (*occupied & candidate).is_empty() {
            return Ok(candidate);
        }
    }
    Err(PlacementError {
        length,
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

/// Place every ship length from `lengths` onto an empty board, returning
/// the combined occupancy set.
pub fn place_fleet<const N: usize, R: Rng + ?Sized>(
    rng: &mut R,
    lengths: &[usize],
) -> Result<Cells<N>, PlacementError> {
    let mut occupied = Cells::<N>::new();
    for &length in lengths {
        let ship = place_ship(rng, &occupied, length)?;
        occupied |= ship;
    }
    Ok(occupied)
}
