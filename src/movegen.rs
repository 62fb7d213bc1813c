//! Enumeration of complete turns.
//!
//! A turn is one elementary move, or several when the sower keeps landing
//! its last seed in its own store. [`Turns`] walks every chain of extra
//! turns with an explicit work-list instead of recursion and yields one
//! [`Turn`] per maximal sequence, depth-first in ascending pit order.

use std::fmt;

use crate::board::{Board, Side};
use crate::constants::PITS;
use crate::error::{EngineError, Result};

/// The pits played during one turn, 0-based and relative to the mover.
///
/// Displayed 1-based, the way pits are numbered for a human.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveSequence(Vec<usize>);

impl MoveSequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a sequence from 1-based pit numbers (1-6).
    pub fn from_one_based(pits: &[usize]) -> Result<Self> {
        pits.iter()
            .map(|&p| match p {
                1..=PITS => Ok(p - 1),
                _ => Err(EngineError::PitOutOfRange { pit: p }),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    #[inline]
    pub fn pits(&self) -> &[usize] {
        &self.0
    }

    pub fn one_based(&self) -> Vec<usize> {
        self.0.iter().map(|p| p + 1).collect()
    }

    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn extended(&self, pit: usize) -> Self {
        let mut pits = Vec::with_capacity(self.0.len() + 1);
        pits.extend_from_slice(&self.0);
        pits.push(pit);
        Self(pits)
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pits: Vec<String> = self.one_based().iter().map(|p| p.to_string()).collect();
        write!(f, "[{}]", pits.join(", "))
    }
}

/// A complete turn and the board after playing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub moves: MoveSequence,
    pub board: Board,
}

/// An elementary move still to be played: sow `pit` on `board`, which was
/// reached by playing `prefix`.
struct Pending {
    prefix: MoveSequence,
    board: Board,
    pit: usize,
}

/// Lazy iterator over every complete turn available to one side.
pub struct Turns {
    side: Side,
    stack: Vec<Pending>,
}

impl Turns {
    pub fn new(board: &Board, side: Side) -> Self {
        let mut turns = Self {
            side,
            stack: Vec::new(),
        };
        turns.push_moves(&MoveSequence::new(), board);
        turns
    }

    /// Elementary moves queued but not yet expanded.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    /// Queue every legal pit of `board`. Pushed in reverse so the lowest pit
    /// is popped first.
    fn push_moves(&mut self, prefix: &MoveSequence, board: &Board) {
        for pit in board.legal_pits(self.side).rev() {
            self.stack.push(Pending {
                prefix: prefix.clone(),
                board: board.clone(),
                pit,
            });
        }
    }
}

impl Iterator for Turns {
    type Item = Turn;

    fn next(&mut self) -> Option<Turn> {
        while let Some(Pending {
            prefix,
            mut board,
            pit,
        }) = self.stack.pop()
        {
            let extra_turn = board.sow(self.side, pit);
            let moves = prefix.extended(pit);
            if extra_turn && board.has_moves(self.side) {
                self.push_moves(&moves, &board);
                continue;
            }
            return Some(Turn { moves, board });
        }
        None
    }
}

/// Iterate over the complete turns `side` can play from `board`.
pub fn turns(board: &Board, side: Side) -> Turns {
    Turns::new(board, side)
}

/// Collect every complete turn `side` can play from `board`.
pub fn all_turns(board: &Board, side: Side) -> Vec<Turn> {
    turns(board, side).collect()
}
