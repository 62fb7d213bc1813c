//! Board evaluation.
//!
//! Six independent terms, each enabled by one flag of the evaluated side's
//! [`HeuristicCode`](crate::config::HeuristicCode). The score is the sum of
//! the enabled terms; the all-zero code always scores 0.

use crate::board::{Board, Side};

/// A single heuristic term, scored from `side`'s point of view.
type Term = fn(&Board, Side) -> f64;

/// H1..H6 in flag order.
const TERMS: [Term; 6] = [
    store_difference,
    store_over_half,
    half_over_opponent_store,
    near_pits,
    far_pits,
    middle_pits,
];

/// Score `board` for `side` using `side`'s own heuristic code.
pub fn evaluate(board: &Board, side: Side) -> f64 {
    let code = board.code(side);
    TERMS
        .iter()
        .enumerate()
        .filter(|&(i, _)| code.is_enabled(i))
        .map(|(_, term)| term(board, side))
        .sum()
}

fn half_total(board: &Board) -> f64 {
    f64::from(board.total_seeds()) / 2.0
}

fn row_sum(board: &Board, side: Side, pits: std::ops::Range<usize>) -> f64 {
    f64::from(board.row(side)[pits].iter().sum::<u32>())
}

/// H1: own points minus opponent points.
pub fn store_difference(board: &Board, side: Side) -> f64 {
    f64::from(board.points(side)) - f64::from(board.points(side.opposite()))
}

/// H2: own points minus half the seeds in play.
pub fn store_over_half(board: &Board, side: Side) -> f64 {
    f64::from(board.points(side)) - half_total(board)
}

/// H3: half the seeds in play minus opponent points.
pub fn half_over_opponent_store(board: &Board, side: Side) -> f64 {
    half_total(board) - f64::from(board.points(side.opposite()))
}

/// H4: seeds in the two pits next to the side's store.
pub fn near_pits(board: &Board, side: Side) -> f64 {
    row_sum(board, side, 4..6)
}

/// H5: seeds in the two pits farthest from the side's store.
pub fn far_pits(board: &Board, side: Side) -> f64 {
    row_sum(board, side, 0..2)
}

/// H6: seeds in the two middle pits.
pub fn middle_pits(board: &Board, side: Side) -> f64 {
    row_sum(board, side, 2..4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HeuristicCode, Rules};

    fn board_with(cells: [u32; 14], player: &str, opponent: &str) -> Board {
        Board::from_cells(
            &cells,
            player.parse().unwrap(),
            opponent.parse().unwrap(),
            Rules::default(),
        )
        .unwrap()
    }

    const MIDGAME: [u32; 14] = [5, 1, 2, 3, 4, 5, 6, 9, 0, 1, 2, 3, 4, 3];

    #[test]
    fn test_individual_terms() {
        let b = board_with(MIDGAME, "100000", "100000");
        assert_eq!(b.total_seeds(), 48);
        assert_eq!(store_difference(&b, Side::Player), 4.0);
        assert_eq!(store_difference(&b, Side::Opponent), -4.0);
        assert_eq!(store_over_half(&b, Side::Player), -15.0);
        assert_eq!(half_over_opponent_store(&b, Side::Player), 19.0);
        assert_eq!(near_pits(&b, Side::Player), 11.0);
        assert_eq!(near_pits(&b, Side::Opponent), 7.0);
        assert_eq!(far_pits(&b, Side::Player), 3.0);
        assert_eq!(far_pits(&b, Side::Opponent), 1.0);
        assert_eq!(middle_pits(&b, Side::Player), 7.0);
        assert_eq!(middle_pits(&b, Side::Opponent), 5.0);
    }

    #[test]
    fn test_code_selects_terms() {
        let b = board_with(MIDGAME, "100100", "011000");
        assert_eq!(evaluate(&b, Side::Player), 4.0 + 11.0);
        // Opponent: H2 = 5 - 24, H3 = 24 - 9.
        assert_eq!(evaluate(&b, Side::Opponent), -19.0 + 15.0);
    }

    #[test]
    fn test_all_zero_code_scores_zero() {
        let b = board_with(MIDGAME, "000000", "111111");
        assert_eq!(evaluate(&b, Side::Player), 0.0);
        assert!(evaluate(&b, Side::Opponent) != 0.0);
    }

    #[test]
    fn test_endgame_sweep_feeds_store_terms() {
        let cells = [20, 0, 0, 0, 0, 0, 0, 20, 1, 2, 0, 0, 0, 5];
        let b = Board::from_cells(
            &cells,
            HeuristicCode::default(),
            HeuristicCode::default(),
            Rules::default(),
        )
        .unwrap();
        assert_eq!(evaluate(&b, Side::Player), 20.0 - 28.0);
    }
}
