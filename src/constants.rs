//! Constants for board geometry and engine defaults.
//!
//! The board is a ring of 14 cells. Index 0 is the opponent's store,
//! indices 1-6 the player's pits, index 7 the player's store and indices
//! 8-13 the opponent's pits. Sowing walks the ring in ascending index order.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of sowing pits on each side.
pub const PITS: usize = 6;

/// Total number of cells on the ring (two rows of pits plus two stores).
pub const CELLS: usize = 2 * PITS + 2;

/// Index of the opponent's store.
pub const OPPONENT_STORE: usize = 0;

/// Index of the player's store.
pub const PLAYER_STORE: usize = PITS + 1;

/// Index of the player's first pit.
pub const PLAYER_FIRST_PIT: usize = 1;

/// Index of the opponent's first pit.
pub const OPPONENT_FIRST_PIT: usize = PITS + 2;

// =============================================================================
// Defaults
// =============================================================================

/// Largest seed total a board may hold.
pub const MAX_TOTAL_SEEDS: u32 = (2 * PITS as u32) * u8::MAX as u32;

/// Seeds placed in every pit at the start of a standard game.
pub const SEEDS_PER_PIT: u8 = 4;

/// Default search depth, counted in full turns.
pub const DEFAULT_DEPTH: usize = 5;

/// Default heuristic code: only H1 (store difference) enabled.
pub const DEFAULT_CODE: &str = "100000";

/// Number of heuristic terms selectable by a code.
pub const HEURISTIC_TERMS: usize = 6;

/// How many ranked candidates `find_best_move` returns by default.
pub const DEFAULT_TOP_N: usize = 1;
