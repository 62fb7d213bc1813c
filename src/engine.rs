//! Best-move selection and the engine's external interface.
//!
//! [`Engine::find_best_move`] enumerates every complete first turn for the
//! side to move and searches each one as an independent rayon task on a
//! private copy of the resulting board. Results are collected in
//! enumeration order and stable-sorted by score, so the ranking does not
//! depend on which worker finishes first.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::board::{Board, Side};
use crate::config::{HeuristicCode, Rules, SearchConfig};
use crate::error::{EngineError, Result};
use crate::movegen::{MoveSequence, Turn, all_turns};
use crate::search::Searcher;

/// A candidate turn and its search score.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedMove {
    pub moves: MoveSequence,
    pub score: f64,
}

/// Create a standard starting position.
pub fn new_game(player_code: HeuristicCode, opponent_code: HeuristicCode, rules: Rules) -> Board {
    Board::new(player_code, opponent_code, rules)
}

/// Apply one elementary move to a copy of `board`.
///
/// Returns the new board and whether `side` earned an extra turn.
pub fn apply_move(board: &Board, side: Side, pit: usize) -> Result<(Board, bool)> {
    let mut next = board.clone();
    let extra_turn = next.apply_move(side, pit)?;
    Ok((next, extra_turn))
}

pub fn is_game_over(board: &Board) -> bool {
    board.no_more_moves()
}

/// Points of `side`, counting the seeds left on its row once the game is over.
pub fn score(board: &Board, side: Side) -> u32 {
    board.points(side)
}

/// Move-selection engine.
pub struct Engine {
    config: SearchConfig,
    rng: fastrand::Rng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            rng: fastrand::Rng::new(),
        }
    }

    /// Create an engine whose random fallback is reproducible.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self {
            config,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Rank the turns `side` can play from `board`, best first.
    ///
    /// A side whose heuristic code is all zero gets a single uniformly random
    /// candidate scored 0 instead. Fails with [`EngineError::NoLegalMoves`]
    /// when `side` cannot move.
    pub fn find_best_move(&mut self, board: &Board, side: Side) -> Result<Vec<RankedMove>> {
        let start = Instant::now();
        let mut candidates = all_turns(board, side);
        if candidates.is_empty() {
            return Err(EngineError::NoLegalMoves { side });
        }

        if board.code(side).is_random() {
            let turn = candidates.swap_remove(self.rng.usize(..candidates.len()));
            info!(
                %side,
                moves = %turn.moves,
                "calculated random move in {:.1}s",
                start.elapsed().as_secs_f64()
            );
            return Ok(vec![RankedMove {
                moves: turn.moves,
                score: 0.0,
            }]);
        }

        let mut ranked = rank_candidates(candidates, side, &self.config)?;
        ranked.truncate(self.config.top_n.max(1));
        info!(
            %side,
            best = %ranked[0].moves,
            score = ranked[0].score,
            "calculated best move in {:.1}s",
            start.elapsed().as_secs_f64()
        );
        Ok(ranked)
    }
}

/// Search every candidate in parallel and sort by score, best first.
///
/// Each task owns its candidate's board. Ties keep enumeration order.
pub fn rank_candidates(
    candidates: Vec<Turn>,
    side: Side,
    config: &SearchConfig,
) -> Result<Vec<RankedMove>> {
    let workers = config.worker_count();
    debug!(
        %side,
        depth = config.depth,
        candidates = candidates.len(),
        workers,
        "starting search"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    let depth = config.depth;
    let mut ranked: Vec<RankedMove> = pool.install(|| {
        candidates
            .into_par_iter()
            .map(|turn| {
                let mut searcher = Searcher::new(side);
                let score = searcher.evaluate_reply(&turn.board, depth);
                trace!(moves = %turn.moves, score, nodes = searcher.nodes(), "candidate searched");
                RankedMove {
                    moves: turn.moves,
                    score,
                }
            })
            .collect()
    });

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(ranked)
}
