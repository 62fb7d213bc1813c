//! Depth-limited minimax search with alpha-beta pruning.
//!
//! Edges of the search tree are complete turns from [`crate::movegen`], so
//! one ply may contain several elementary moves. Leaves are scored with
//! [`crate::heuristic::evaluate`] from a fixed perspective side; plies
//! alternate between maximizing and minimizing that score.

use crate::board::{Board, Side};
use crate::heuristic::evaluate;
use crate::movegen::{MoveSequence, turns};

/// Alpha-beta searcher for one perspective side.
pub struct Searcher {
    perspective: Side,
    /// Boards visited (interior nodes and leaves)
    nodes: u64,
}

impl Searcher {
    pub fn new(perspective: Side) -> Self {
        Self {
            perspective,
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `board` with `to_move` about to play.
    ///
    /// `maximizing` says whether this ply picks the largest or the smallest
    /// value for the perspective side. Siblings stop being enumerated as soon
    /// as `beta <= alpha`.
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        to_move: Side,
        maximizing: bool,
    ) -> f64 {
        self.nodes += 1;

        if depth == 0 || board.no_more_moves() {
            return evaluate(board, self.perspective);
        }

        let next = to_move.opposite();
        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for turn in turns(board, to_move) {
                let value = self.alpha_beta(&turn.board, depth - 1, alpha, beta, next, false);
                best = best.max(value);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for turn in turns(board, to_move) {
                let value = self.alpha_beta(&turn.board, depth - 1, alpha, beta, next, true);
                best = best.min(value);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Value of a board reached by the perspective side's own turn: the
    /// opponent replies first, on a minimizing ply.
    pub fn evaluate_reply(&mut self, board: &Board, depth: usize) -> f64 {
        self.alpha_beta(
            board,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            self.perspective.opposite(),
            false,
        )
    }
}

/// Score every first turn `side` can play from `board`, searching `depth`
/// further turns below each one. Results keep enumeration order.
pub fn evaluate_root(board: &Board, side: Side, depth: usize) -> Vec<(MoveSequence, f64)> {
    turns(board, side)
        .map(|turn| {
            let mut searcher = Searcher::new(side);
            let score = searcher.evaluate_reply(&turn.board, depth);
            (turn.moves, score)
        })
        .collect()
}
