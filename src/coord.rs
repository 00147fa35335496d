//! Grid coordinates and their canonical string keys.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// A 0-indexed (row, col) cell reference.
///
/// The canonical key form is `"row,col"`; persisted coordinate lists are
/// lists of these keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Coord { row, col }
    }

    /// Canonical `"row,col"` key.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// True when both indices lie inside an `n`×`n` grid.
    pub fn in_bounds(&self, n: usize) -> bool {
        (self.row as usize) < n && (self.col as usize) < n
    }

    /// Checkerboard parity; `(row + col) % 2 == 0` is the preferred pool.
    pub fn is_even_parity(&self) -> bool {
        (self.row as usize + self.col as usize) % 2 == 0
    }

    /// The up-to-four 4-adjacent neighbors inside an `n`×`n` grid,
    /// in up/down/left/right order.
    pub fn neighbors(&self, n: usize) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = *self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            Some(Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            Some(Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(move |c| c.in_bounds(n))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Error parsing a coordinate key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordError;

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a \"row,col\" coordinate key")
    }
}

impl std::error::Error for ParseCoordError {}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',').ok_or(ParseCoordError)?;
        let row = row.trim().parse().map_err(|_| ParseCoordError)?;
        let col = col.trim().parse().map_err(|_| ParseCoordError)?;
        Ok(Coord { row, col })
    }
}

impl From<Coord> for String {
    fn from(c: Coord) -> Self {
        c.key()
    }
}

impl TryFrom<String> for Coord {
    type Error = ParseCoordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<(u8, u8)> for Coord {
    fn from((row, col): (u8, u8)) -> Self {
        Coord { row, col }
    }
}
