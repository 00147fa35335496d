//! Fixed game parameters. These are compile-time constants, not runtime
//! flags.

/// Side length of each board.
pub const GRID_SIZE: usize = 10;

/// Ship lengths to place, in placement order.
pub const FLEET: [usize; 3] = [5, 3, 2];

/// Total ship cells per board.
pub const TOTAL_SHIP_CELLS: usize = FLEET[0] + FLEET[1] + FLEET[2];

/// Placement attempts allowed per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Cosmetic pause between the computer's consecutive shots.
pub const COMPUTER_STEP_DELAY_MS: u64 = 600;

/// Snapshot format version; snapshots from any other version are ignored.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Default save file used by the CLI.
pub const DEFAULT_SAVE_PATH: &str = "flotilla-save.json";
