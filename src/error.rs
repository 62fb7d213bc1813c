//! Error types for the engine core.

use thiserror::Error;

use crate::board::Side;

/// Errors that can occur in the Kalah engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Pit index outside the six pits of a side.
    #[error("pit {pit} is out of range")]
    PitOutOfRange { pit: usize },

    /// Selected pit holds no seeds.
    #[error("{side} pit {pit} is empty")]
    EmptyPit { side: Side, pit: usize },

    /// Heuristic code is not exactly six binary flags.
    #[error("invalid heuristic code {0:?} (expected six 0/1 characters)")]
    InvalidHeuristicCode(String),

    /// The side to move has no non-empty pit.
    #[error("no legal moves for {side}")]
    NoLegalMoves { side: Side },

    /// A board layout could not be constructed.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// The worker pool for parallel search could not be created.
    #[error("failed to build search thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Convenience Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
