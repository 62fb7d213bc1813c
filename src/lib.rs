//! Kalah-Rust: a two-player Mancala (Kalah) engine.
//!
//! This crate provides the Kalah rules, a generator of complete turns
//! (including chained extra turns), a configurable heuristic evaluator and a
//! depth-limited alpha-beta search whose top-level candidates are evaluated
//! in parallel.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and engine defaults
//! - [`config`] - Heuristic codes, rule variants and search settings
//! - [`board`] - Board state and sowing/capture rules
//! - [`movegen`] - Enumeration of complete turns
//! - [`heuristic`] - Six selectable evaluation terms
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`engine`] - Parallel best-move selection and the public game API
//! - [`game`] - Text game session
//!
//! ## Example
//!
//! ```
//! use kalah_rust::board::Side;
//! use kalah_rust::config::{HeuristicCode, Rules, SearchConfig};
//! use kalah_rust::engine::{Engine, apply_move, new_game};
//!
//! // Create a new game
//! let board = new_game(HeuristicCode::default(), HeuristicCode::default(), Rules::default());
//!
//! // Play the third pit: the last seed lands in the store
//! let (board, extra_turn) = apply_move(&board, Side::Player, 2).unwrap();
//! assert!(extra_turn);
//!
//! // Search for the best way to continue
//! let mut engine = Engine::new(SearchConfig::with_depth(2));
//! let best = engine.find_best_move(&board, Side::Player).unwrap();
//! println!("Best turn: {} ({})", best[0].moves, best[0].score);
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod movegen;
pub mod search;
