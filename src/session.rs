//! Durable session snapshots and the stores that hold them.
//!
//! A [`Snapshot`] is a versioned, self-describing record of the whole
//! game: both boards as lists of coordinate keys, the turn, tallies, and
//! targeting state. Anything unreadable is treated as "no save exists" —
//! loading never fails hard.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cellset::Cells;
use crate::common::{ShotTally, Side};
use crate::config::SNAPSHOT_VERSION;
use crate::coord::Coord;
use crate::game::GameSession;
use crate::targeting::{TargetMode, Targeting};

/// One board's three coordinate sets, serialized as `"row,col"` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    #[serde(default)]
    pub ships: Vec<Coord>,
    #[serde(default)]
    pub hits: Vec<Coord>,
    #[serde(default)]
    pub misses: Vec<Coord>,
}

/// Persisted targeting engine state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetingRecord {
    #[serde(default)]
    pub mode: TargetMode,
    #[serde(default)]
    pub queue: Vec<Coord>,
    #[serde(default)]
    pub cluster: Vec<Coord>,
}

/// A fully reconstructible game snapshot.
///
/// Every field except `version` defaults, so a structurally valid but
/// partial record restores with fresh-game values for whatever is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub current_turn: Side,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub human_tally: ShotTally,
    #[serde(default)]
    pub computer_tally: ShotTally,
    #[serde(default)]
    pub human_board: BoardRecord,
    #[serde(default)]
    pub computer_board: BoardRecord,
    #[serde(default)]
    pub targeting: TargetingRecord,
    #[serde(default)]
    pub status_text: String,
}

impl Snapshot {
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a snapshot, or `None` for malformed input or a snapshot
    /// written by any other format version.
    pub fn decode(text: &str) -> Option<Snapshot> {
        let snapshot: Snapshot = match serde_json::from_str(text) {
            Ok(s) => s,
            Err(err) => {
                warn!("discarding malformed snapshot: {err}");
                return None;
            }
        };
        if snapshot.version != SNAPSHOT_VERSION {
            warn!(
                "discarding snapshot with unsupported version {}",
                snapshot.version
            );
            return None;
        }
        Some(snapshot)
    }
}

fn record_board<const N: usize>(board: &Board<N>) -> BoardRecord {
    BoardRecord {
        ships: board.ships().iter().collect(),
        hits: board.hits().iter().collect(),
        misses: board.misses().iter().collect(),
    }
}

fn restore_board<const N: usize>(record: &BoardRecord) -> Option<Board<N>> {
    let ships = Cells::from_coords(record.ships.iter().copied()).ok()?;
    let hits = Cells::from_coords(record.hits.iter().copied()).ok()?;
    let misses = Cells::from_coords(record.misses.iter().copied()).ok()?;
    Some(Board::from_parts(ships, hits, misses))
}

impl<const N: usize> GameSession<N> {
    /// Flatten the full game state into a persistable record.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            current_turn: self.turn,
            game_over: self.game_over,
            human_tally: self.human_tally,
            computer_tally: self.computer_tally,
            human_board: record_board(&self.human_board),
            computer_board: record_board(&self.computer_board),
            targeting: TargetingRecord {
                mode: self.targeting.mode(),
                queue: self.targeting.queue().collect(),
                cluster: self.targeting.cluster().iter().collect(),
            },
            status_text: self.status_text.clone(),
        }
    }

    /// Rebuild a game from a snapshot. All three board sets are trusted
    /// as stored. `None` only for records whose coordinates do not fit
    /// the grid; the caller starts a fresh game in that case.
    pub fn restore(snapshot: &Snapshot) -> Option<Self> {
        let human_board = restore_board(&snapshot.human_board)?;
        let computer_board = restore_board(&snapshot.computer_board)?;
        if snapshot.targeting.queue.iter().any(|c| !c.in_bounds(N)) {
            return None;
        }
        let cluster = Cells::from_coords(snapshot.targeting.cluster.iter().copied()).ok()?;
        let targeting = Targeting::from_parts(
            snapshot.targeting.mode,
            snapshot.targeting.queue.clone(),
            cluster,
        );
        let winner = if snapshot.game_over {
            if computer_board.has_won() {
                Some(Side::Human)
            } else if human_board.has_won() {
                Some(Side::Computer)
            } else {
                None
            }
        } else {
            None
        };
        Some(GameSession {
            human_board,
            computer_board,
            turn: snapshot.current_turn,
            game_over: snapshot.game_over,
            winner,
            human_tally: snapshot.human_tally,
            computer_tally: snapshot.computer_tally,
            targeting,
            status_text: snapshot.status_text.clone(),
        })
    }
}

/// Where snapshots are kept between runs.
pub trait SessionStore {
    fn save(&mut self, snapshot: &Snapshot) -> anyhow::Result<()>;
    /// The stored snapshot, if a readable one exists.
    fn load(&self) -> Option<Snapshot>;
    fn clear(&mut self) -> anyhow::Result<()>;
}

/// Snapshot persisted to a JSON file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }
}

impl SessionStore for FileStore {
    fn save(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        let text = snapshot.encode()?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn load(&self) -> Option<Snapshot> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("failed to read {}: {err}", self.path.display());
                return None;
            }
        };
        Snapshot::decode(&text)
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and embedding. Keeps the encoded form so
/// loads exercise the same decode path as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    text: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn save(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        self.text = Some(snapshot.encode()?);
        Ok(())
    }

    fn load(&self) -> Option<Snapshot> {
        Snapshot::decode(self.text.as_deref()?)
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        self.text = None;
        Ok(())
    }
}
