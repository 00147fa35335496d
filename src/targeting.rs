//! The computer's shot-selection engine.
//!
//! Two modes: `Searching` probes the board by checkerboard parity until a
//! ship is found; `Finishing` works a queue of candidate cells around the
//! current cluster of hits until the ship underneath is destroyed. Which
//! hits belong to one ship is re-derived from 4-directional adjacency on
//! every hit; no ship identity is tracked.

use std::collections::VecDeque;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cellset::Cells;
use crate::coord::Coord;
use crate::fleet::Orientation;

/// Current engine mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetMode {
    /// No live lead; probe by parity.
    Searching,
    /// Actively exploiting a hit cluster.
    Finishing,
}

impl Default for TargetMode {
    fn default() -> Self {
        TargetMode::Searching
    }
}

/// Targeting state for one opponent board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targeting<const N: usize> {
    mode: TargetMode,
    /// Candidate cells, consumed front-first. Never contains duplicates;
    /// `queued` mirrors its membership for O(1) dedup.
    queue: VecDeque<Coord>,
    queued: Cells<N>,
    /// Hits believed to belong to the ship currently being destroyed.
    cluster: Cells<N>,
}

impl<const N: usize> Targeting<N> {
    pub fn new() -> Self {
        Targeting {
            mode: TargetMode::Searching,
            queue: VecDeque::new(),
            queued: Cells::new(),
            cluster: Cells::new(),
        }
    }

    /// Rebuild from persisted parts. Queue order is kept; duplicate or
    /// out-of-grid entries are dropped.
    pub fn from_parts(mode: TargetMode, queue: Vec<Coord>, cluster: Cells<N>) -> Self {
        let mut state = Targeting {
            mode,
            queue: VecDeque::with_capacity(queue.len()),
            queued: Cells::new(),
            cluster,
        };
        for coord in queue {
            if coord.in_bounds(N) && !state.queued.contains(coord) {
                let _ = state.queued.insert(coord);
                state.queue.push_back(coord);
            }
        }
        state
    }

    pub fn mode(&self) -> TargetMode {
        self.mode
    }

    /// Candidate queue, front first.
    pub fn queue(&self) -> impl ExactSizeIterator<Item = Coord> + '_ {
        self.queue.iter().copied()
    }

    pub fn cluster(&self) -> Cells<N> {
        self.cluster
    }

    /// Pick the next cell to fire at, given every cell already shot on the
    /// opponent board. Returns `None` only when no unshot cell remains,
    /// which a live game never reaches.
    pub fn choose<R: Rng + ?Sized>(&mut self, rng: &mut R, shots: &Cells<N>) -> Option<Coord> {
        if self.mode == TargetMode::Finishing {
            while let Some(coord) = self.queue.pop_front() {
                let _ = self.queued.remove(coord);
                if !shots.contains(coord) {
                    return Some(coord);
                }
            }
            debug!("target queue exhausted, resuming search");
            self.mode = TargetMode::Searching;
            self.cluster = Cells::new();
        }
        self.search(rng, shots)
    }

    /// Parity-preferred random probe over the unshot cells.
    fn search<R: Rng + ?Sized>(&self, rng: &mut R, shots: &Cells<N>) -> Option<Coord> {
        let unshot = !*shots;
        let mut pool: Vec<Coord> = unshot.iter().filter(Coord::is_even_parity).collect();
        if pool.is_empty() {
            pool = unshot.iter().collect();
        }
        if pool.is_empty() {
            return None;
        }
        Some(pool[rng.random_range(0..pool.len())])
    }

    /// Feed back a hit at `coord`. `hits` and `shots` are the opponent
    /// board's sets with the shot already applied.
    pub fn record_hit(&mut self, coord: Coord, hits: &Cells<N>, shots: &Cells<N>) {
        if self.mode == TargetMode::Searching {
            debug!("hit at {coord}, switching to finishing mode");
        }
        self.mode = TargetMode::Finishing;
        self.cluster = connected_hits(coord, hits);

        // Perpendicular-and-parallel neighbors of the whole cluster form
        // the baseline candidates.
        for cell in self.cluster.iter() {
            for neighbor in cell.neighbors(N) {
                if !shots.contains(neighbor) && !self.queued.contains(neighbor) {
                    let _ = self.queued.insert(neighbor);
                    self.queue.push_back(neighbor);
                }
            }
        }

        // Once the cluster reveals an axis, extending past either end beats
        // probing sideways, so those candidates jump the queue. Reverse
        // push_front keeps the min-end extension first.
        if let Some(axis) = infer_orientation(&self.cluster) {
            for candidate in line_extensions(&self.cluster, axis).into_iter().rev().flatten() {
                if candidate.in_bounds(N) && !shots.contains(candidate) {
                    if self.queued.contains(candidate) {
                        self.queue.retain(|&c| c != candidate);
                    }
                    let _ = self.queued.insert(candidate);
                    self.queue.push_front(candidate);
                }
            }
        }
    }

    /// Feed back a miss. With no candidates left the lead is dead and the
    /// engine falls back to searching.
    pub fn record_miss(&mut self) {
        if self.mode == TargetMode::Finishing && self.queue.is_empty() {
            debug!("lead exhausted after miss, resuming search");
            self.mode = TargetMode::Searching;
            self.cluster = Cells::new();
        }
    }
}

impl<const N: usize> Default for Targeting<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// The 4-connected component of `hits` containing `start`; empty if
/// `start` is not a hit.
fn connected_hits<const N: usize>(start: Coord, hits: &Cells<N>) -> Cells<N> {
    let mut cluster = Cells::new();
    if !hits.contains(start) {
        return cluster;
    }
    let _ = cluster.insert(start);
    let mut frontier = vec![start];
    while let Some(cell) = frontier.pop() {
        for neighbor in cell.neighbors(N) {
            if hits.contains(neighbor) && !cluster.contains(neighbor) {
                let _ = cluster.insert(neighbor);
                frontier.push(neighbor);
            }
        }
    }
    cluster
}

/// Axis shared by a cluster of two or more hits, if any. A bent cluster
/// yields `None`; callers fall back to plain adjacency candidates.
fn infer_orientation<const N: usize>(cluster: &Cells<N>) -> Option<Orientation> {
    let mut iter = cluster.iter();
    let first = iter.next()?;
    iter.next()?;
    if cluster.iter().all(|c| c.row == first.row) {
        Some(Orientation::Horizontal)
    } else if cluster.iter().all(|c| c.col == first.col) {
        Some(Orientation::Vertical)
    } else {
        None
    }
}

/// One step past each end of the cluster along `axis`, min end first.
/// Entries may lie outside the grid; callers filter.
fn line_extensions<const N: usize>(
    cluster: &Cells<N>,
    axis: Orientation,
) -> [Option<Coord>; 2] {
    let mut cells = cluster.iter();
    let Some(first) = cells.next() else {
        return [None, None];
    };
    match axis {
        Orientation::Horizontal => {
            let row = first.row;
            let (min, max) = cluster
                .iter()
                .fold((first.col, first.col), |(lo, hi), c| {
                    (lo.min(c.col), hi.max(c.col))
                });
            [
                min.checked_sub(1).map(|col| Coord::new(row, col)),
                Some(Coord::new(row, max + 1)),
            ]
        }
        Orientation::Vertical => {
            let col = first.col;
            let (min, max) = cluster
                .iter()
                .fold((first.row, first.row), |(lo, hi), c| {
                    (lo.min(c.row), hi.max(c.row))
                });
            [
                min.checked_sub(1).map(|row| Coord::new(row, col)),
                Some(Coord::new(max + 1, col)),
            ]
        }
    }
}
