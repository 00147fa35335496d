//! Core engine for a two-player grid combat game: board state, random
//! fleet placement, the computer's search/finish targeting strategy, turn
//! sequencing, and durable session snapshots. Presentation is left to the
//! caller, driven by the events each command returns.

mod board;
mod cellset;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod logging;
mod session;
mod targeting;
pub mod ui;

pub use board::Board;
pub use cellset::{CellSet, Cells, GridError, Members};
pub use common::{PlacementError, ShotOutcome, ShotTally, Side};
pub use config::{
    COMPUTER_STEP_DELAY_MS, DEFAULT_SAVE_PATH, FLEET, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS,
    SNAPSHOT_VERSION, TOTAL_SHIP_CELLS,
};
pub use coord::{Coord, ParseCoordError};
pub use fleet::{place_fleet, run_cells, Orientation};
pub use game::{GameEvent, GameSession};
pub use logging::init_logging;
pub use session::{BoardRecord, FileStore, MemoryStore, SessionStore, Snapshot, TargetingRecord};
pub use targeting::{TargetMode, Targeting};

/// The standard 10×10 game.
pub type StandardGame = GameSession<GRID_SIZE>;
/// The standard 10×10 board.
pub type StandardBoard = Board<GRID_SIZE>;
