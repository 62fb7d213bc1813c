//! Kalah board state and the sowing rules.
//!
//! A [`Board`] is 14 seed counts laid out around a ring (see
//! [`crate::constants`]) plus the heuristic code of each side and the rule
//! variant in force. Search explores by cloning a board and mutating the
//! clone, so sibling branches never share cells.

use std::fmt;

use crate::config::{HeuristicCode, Rules};
use crate::constants::{
    CELLS, MAX_TOTAL_SEEDS, OPPONENT_FIRST_PIT, OPPONENT_STORE, PITS, PLAYER_FIRST_PIT,
    PLAYER_STORE,
};
use crate::error::{EngineError, Result};

/// One of the two sides of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Owns pits 1-6 and the store at index 7.
    Player,
    /// Owns pits 8-13 and the store at index 0.
    Opponent,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Ring index of this side's store.
    #[inline]
    pub fn store(self) -> usize {
        match self {
            Side::Player => PLAYER_STORE,
            Side::Opponent => OPPONENT_STORE,
        }
    }

    /// Ring index of this side's first pit (pit 0).
    #[inline]
    pub fn first_pit(self) -> usize {
        match self {
            Side::Player => PLAYER_FIRST_PIT,
            Side::Opponent => OPPONENT_FIRST_PIT,
        }
    }

    /// Ring index of the side-relative pit `pit`.
    #[inline]
    pub fn pit_index(self, pit: usize) -> usize {
        self.first_pit() + pit
    }

    /// Whether ring index `idx` is one of this side's sowing pits.
    #[inline]
    pub fn owns_pit(self, idx: usize) -> bool {
        let first = self.first_pit();
        (first..first + PITS).contains(&idx)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// A Kalah position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [u32; CELLS],
    player_code: HeuristicCode,
    opponent_code: HeuristicCode,
    rules: Rules,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(HeuristicCode::default(), HeuristicCode::default(), Rules::default())
    }
}

impl Board {
    /// Create the initial layout: `rules.seeds_per_pit` seeds in every pit,
    /// both stores empty.
    pub fn new(player_code: HeuristicCode, opponent_code: HeuristicCode, rules: Rules) -> Self {
        let mut cells = [u32::from(rules.seeds_per_pit); CELLS];
        cells[PLAYER_STORE] = 0;
        cells[OPPONENT_STORE] = 0;
        Self {
            cells,
            player_code,
            opponent_code,
            rules,
        }
    }

    /// Create a board from an explicit 14-cell layout.
    ///
    /// The seed total must not exceed [`MAX_TOTAL_SEEDS`], so no cell, store
    /// or sum can overflow during play.
    pub fn from_cells(
        cells: &[u32],
        player_code: HeuristicCode,
        opponent_code: HeuristicCode,
        rules: Rules,
    ) -> Result<Self> {
        let cells: [u32; CELLS] = cells.try_into().map_err(|_| {
            EngineError::InvalidBoard(format!("expected {CELLS} cells, got {}", cells.len()))
        })?;
        let total = cells
            .iter()
            .try_fold(0u32, |acc, &c| acc.checked_add(c))
            .filter(|&total| total <= MAX_TOTAL_SEEDS);
        if total.is_none() {
            return Err(EngineError::InvalidBoard(format!(
                "seed total exceeds {MAX_TOTAL_SEEDS}"
            )));
        }
        Ok(Self {
            cells,
            player_code,
            opponent_code,
            rules,
        })
    }

    #[inline]
    pub fn cells(&self) -> &[u32; CELLS] {
        &self.cells
    }

    #[inline]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The heuristic code used when evaluating from `side`'s perspective.
    #[inline]
    pub fn code(&self, side: Side) -> HeuristicCode {
        match side {
            Side::Player => self.player_code,
            Side::Opponent => self.opponent_code,
        }
    }

    /// Seeds in the side-relative pit `pit` (0-5).
    #[inline]
    pub fn pit(&self, side: Side, pit: usize) -> u32 {
        self.cells[side.pit_index(pit)]
    }

    /// The six pits of `side`, in sowing order.
    #[inline]
    pub fn row(&self, side: Side) -> &[u32] {
        let first = side.first_pit();
        &self.cells[first..first + PITS]
    }

    /// Sum of all cells. Constant across every legal move.
    pub fn total_seeds(&self) -> u32 {
        self.cells.iter().sum()
    }

    /// Non-empty pits of `side`, in ascending pit order.
    pub fn legal_pits(&self, side: Side) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.row(side)
            .iter()
            .enumerate()
            .filter(|&(_, &seeds)| seeds > 0)
            .map(|(pit, _)| pit)
    }

    #[inline]
    pub fn has_moves(&self, side: Side) -> bool {
        self.row(side).iter().any(|&s| s > 0)
    }

    /// True once either side's six pits are all empty.
    #[inline]
    pub fn no_more_moves(&self) -> bool {
        !self.has_moves(Side::Player) || !self.has_moves(Side::Opponent)
    }

    /// Score of `side`: its store while the game is running; store plus the
    /// seeds left on its own row once the game is over. The board itself is
    /// not swept.
    pub fn points(&self, side: Side) -> u32 {
        let store = self.cells[side.store()];
        if self.no_more_moves() {
            store + self.row(side).iter().sum::<u32>()
        } else {
            store
        }
    }

    pub fn player_points(&self) -> u32 {
        self.points(Side::Player)
    }

    pub fn opponent_points(&self) -> u32 {
        self.points(Side::Opponent)
    }

    /// Play side-relative pit `pit` for `side`.
    ///
    /// Returns `Ok(true)` when the last seed landed in `side`'s own store and
    /// the side moves again. Fails without touching the board if `pit` is not
    /// in 0-5 or holds no seeds.
    pub fn apply_move(&mut self, side: Side, pit: usize) -> Result<bool> {
        if pit >= PITS {
            return Err(EngineError::PitOutOfRange { pit });
        }
        if self.pit(side, pit) == 0 {
            return Err(EngineError::EmptyPit { side, pit });
        }
        Ok(self.sow(side, pit))
    }

    /// Sow a pit known to be legal. Callers draw `pit` from [`Board::legal_pits`].
    pub(crate) fn sow(&mut self, side: Side, pit: usize) -> bool {
        debug_assert!(pit < PITS && self.pit(side, pit) > 0);

        let start = side.pit_index(pit);
        let skip = side.opposite().store();
        let mut seeds = std::mem::take(&mut self.cells[start]);
        let mut idx = start;
        while seeds > 0 {
            idx = (idx + 1) % CELLS;
            if idx == skip {
                continue;
            }
            self.cells[idx] += 1;
            seeds -= 1;
        }

        if idx == side.store() {
            return true;
        }

        // Last seed in a previously empty pit of our own row: capture.
        if side.owns_pit(idx) && self.cells[idx] == 1 {
            let opposite = CELLS - idx;
            if !self.rules.capture_requires_opposite || self.cells[opposite] != 0 {
                self.cells[side.store()] += 1 + self.cells[opposite];
                self.cells[idx] = 0;
                self.cells[opposite] = 0;
            }
        }

        false
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |pits: Vec<u32>| {
            pits.iter()
                .map(|s| format!("{s:2}"))
                .collect::<Vec<_>>()
                .join("|")
        };
        let top: Vec<u32> = self.row(Side::Opponent).iter().rev().copied().collect();
        writeln!(f, "  {}", join(top))?;
        writeln!(
            f,
            "{:2}                  {:2}",
            self.opponent_points(),
            self.player_points()
        )?;
        writeln!(f, "  {}", join(self.row(Side::Player).to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [u32; CELLS]) -> Board {
        Board::from_cells(&cells, HeuristicCode::default(), HeuristicCode::default(), Rules::default())
            .unwrap()
    }

    #[test]
    fn test_initial_layout() {
        let b = Board::default();
        assert_eq!(b.cells(), &[0, 4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4]);
        assert_eq!(b.total_seeds(), 48);
    }

    #[test]
    fn test_side_geometry() {
        assert_eq!(Side::Player.pit_index(0), 1);
        assert_eq!(Side::Opponent.pit_index(5), 13);
        assert!(Side::Player.owns_pit(6));
        assert!(!Side::Player.owns_pit(7));
        assert!(Side::Opponent.owns_pit(8));
        assert!(!Side::Opponent.owns_pit(0));
    }

    #[test]
    fn test_player_sow_skips_opponent_store() {
        // Player pit 5 (index 6) with 9 seeds wraps past index 0.
        let mut b = board([0, 0, 1, 0, 0, 0, 9, 0, 1, 1, 1, 1, 1, 1]);
        let extra = b.apply_move(Side::Player, 5).unwrap();
        assert!(!extra);
        assert_eq!(b.cells()[0], 0, "opponent store must never be sown by the player");
        assert_eq!(b.cells(), &[0, 1, 2, 0, 0, 0, 0, 1, 2, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_opponent_sow_skips_player_store() {
        let mut b = board([0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 9]);
        let extra = b.apply_move(Side::Opponent, 5).unwrap();
        assert!(!extra);
        assert_eq!(b.cells()[7], 0);
        assert_eq!(b.cells(), &[1, 2, 2, 2, 2, 2, 2, 0, 1, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_extra_turn_both_sides() {
        let mut b = Board::default();
        assert!(b.apply_move(Side::Player, 2).unwrap());
        assert_eq!(b.cells()[PLAYER_STORE], 1);

        let mut b = Board::default();
        assert!(b.apply_move(Side::Opponent, 2).unwrap());
        assert_eq!(b.cells()[OPPONENT_STORE], 1);
    }

    #[test]
    fn test_opponent_capture() {
        // Opponent pit 0 (index 8) sows 1 seed into empty index 9; opposite is 5.
        let mut b = board([0, 4, 4, 4, 4, 3, 4, 0, 1, 0, 4, 4, 4, 4]);
        assert!(!b.apply_move(Side::Opponent, 0).unwrap());
        assert_eq!(b.cells()[9], 0);
        assert_eq!(b.cells()[5], 0);
        assert_eq!(b.cells()[OPPONENT_STORE], 4);
        assert_eq!(b.total_seeds(), 40);
    }

    #[test]
    fn test_capture_into_empty_opposite() {
        let mut b = board([0, 1, 0, 4, 4, 4, 4, 0, 4, 4, 4, 4, 0, 4]);
        b.apply_move(Side::Player, 0).unwrap();
        assert_eq!(b.cells()[2], 0);
        assert_eq!(b.cells()[PLAYER_STORE], 1);
    }

    #[test]
    fn test_capture_requires_opposite_variant() {
        let rules = Rules {
            capture_requires_opposite: true,
            ..Rules::default()
        };
        let cells = [0, 1, 0, 4, 4, 4, 4, 0, 4, 4, 4, 4, 0, 4];
        let mut b =
            Board::from_cells(&cells, HeuristicCode::default(), HeuristicCode::default(), rules)
                .unwrap();
        b.apply_move(Side::Player, 0).unwrap();
        assert_eq!(b.cells()[2], 1, "seed stays when the opposite pit is empty");
        assert_eq!(b.cells()[PLAYER_STORE], 0);
    }

    #[test]
    fn test_no_capture_on_opponent_row() {
        // Player pit 5 with 2 seeds: lands at index 8 (opponent row), empty before.
        let mut b = board([0, 4, 4, 4, 4, 4, 2, 0, 0, 4, 4, 4, 4, 4]);
        b.apply_move(Side::Player, 5).unwrap();
        assert_eq!(b.cells()[8], 1);
        assert_eq!(b.cells()[PLAYER_STORE], 1);
    }

    #[test]
    fn test_invalid_moves_leave_board_untouched() {
        let mut b = board([0, 0, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4]);
        let before = b.clone();
        assert!(matches!(
            b.apply_move(Side::Player, 6),
            Err(EngineError::PitOutOfRange { pit: 6 })
        ));
        assert!(matches!(
            b.apply_move(Side::Player, 0),
            Err(EngineError::EmptyPit { side: Side::Player, pit: 0 })
        ));
        assert_eq!(b, before);
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        let res = Board::from_cells(
            &[0, 4, 4],
            HeuristicCode::default(),
            HeuristicCode::default(),
            Rules::default(),
        );
        assert!(matches!(res, Err(EngineError::InvalidBoard(_))));
    }

    #[test]
    fn test_from_cells_rejects_oversized_totals() {
        let huge = [0, 1, 0, 0, 0, 0, 0, u32::MAX, 0, 0, 0, 0, 0, 1];
        let res = Board::from_cells(
            &huge,
            HeuristicCode::default(),
            HeuristicCode::default(),
            Rules::default(),
        );
        assert!(matches!(res, Err(EngineError::InvalidBoard(_))));

        let mut cells = [0; CELLS];
        cells[1] = MAX_TOTAL_SEEDS;
        cells[8] = 1;
        assert!(
            Board::from_cells(&cells, HeuristicCode::default(), HeuristicCode::default(), Rules::default())
                .is_err()
        );
        cells[1] -= 1;
        assert!(
            Board::from_cells(&cells, HeuristicCode::default(), HeuristicCode::default(), Rules::default())
                .is_ok()
        );
    }

    #[test]
    fn test_display() {
        let b = Board::default();
        let expected = "   4| 4| 4| 4| 4| 4\n 0                   0\n   4| 4| 4| 4| 4| 4\n";
        assert_eq!(b.to_string(), expected);
    }
}
