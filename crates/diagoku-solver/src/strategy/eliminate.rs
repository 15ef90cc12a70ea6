use diagoku_core::{Board, Cell, Digit, Topology};

use crate::{
    AssignmentLog,
    strategy::{BoxedStrategy, Strategy, remove_and_log},
};

const NAME: &str = "Eliminate";

/// Removes each solved cell's value from all of its peers.
///
/// One call is a single sweep over the cells that were already solved when
/// the call started; cells that become solved *during* the sweep are picked
/// up by the next round of the reducer, not recursively within this call.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate {}

impl Eliminate {
    /// Creates a new `Eliminate` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for Eliminate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, topology: &Topology, log: &mut AssignmentLog) -> bool {
        let solved: Vec<(Cell, Digit)> = Cell::ALL
            .iter()
            .filter_map(|&cell| board.solved_digit(cell).map(|digit| (cell, digit)))
            .collect();

        let mut changed = false;
        for (cell, digit) in solved {
            for peer in topology.peers(cell) {
                changed |= remove_and_log(board, log, peer, digit);
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use diagoku_core::DigitSet;

    use super::*;
    use crate::testing::StrategyTester;

    #[test]
    fn test_removes_solved_value_from_peers() {
        StrategyTester::classic()
            .solve_cell(Cell::new(0, 0), Digit::D5)
            .apply_once(&Eliminate::new())
            .assert_removed(Cell::new(0, 8), [Digit::D5]) // same row
            .assert_removed(Cell::new(8, 0), [Digit::D5]) // same column
            .assert_removed(Cell::new(2, 2), [Digit::D5]) // same box
            .assert_no_change(Cell::new(4, 6)); // not a peer
    }

    #[test]
    fn test_diagonal_peers_are_swept() {
        StrategyTester::diagonal()
            .solve_cell(Cell::new(0, 0), Digit::D3)
            .apply_once(&Eliminate::new())
            .assert_removed(Cell::new(7, 7), [Digit::D3]);
    }

    #[test]
    fn test_logs_peer_that_becomes_solved() {
        let tester = StrategyTester::classic()
            .solve_cell(Cell::new(0, 0), Digit::D5)
            .set_cell(Cell::new(0, 1), [Digit::D5, Digit::D6])
            .apply_once(&Eliminate::new());

        tester.assert_candidates(Cell::new(0, 1), [Digit::D6]);
        let log = tester.log();
        assert!(
            log.entries()
                .iter()
                .any(|a| a.cell() == Cell::new(0, 1) && a.digit() == Digit::D6)
        );
    }

    #[test]
    fn test_no_change_on_open_board() {
        StrategyTester::classic()
            .apply_once(&Eliminate::new())
            .assert_unchanged_everywhere();
    }

    #[test]
    fn test_single_sweep_does_not_cascade() {
        // A2 collapses to 6 during the sweep, but 6 is not propagated out of
        // A2 until the next call.
        let tester = StrategyTester::classic()
            .solve_cell(Cell::new(0, 0), Digit::D5)
            .set_cell(Cell::new(0, 1), [Digit::D5, Digit::D6])
            .set_cell(Cell::new(0, 2), [Digit::D6, Digit::D7])
            .apply_once(&Eliminate::new());

        tester
            .assert_candidates(Cell::new(0, 1), [Digit::D6])
            .assert_candidates(Cell::new(0, 2), [Digit::D6, Digit::D7]);
    }

    #[test]
    fn test_duplicate_clues_empty_a_peer() {
        let mut board = Board::new();
        board.set_candidates(Cell::new(0, 0), DigitSet::from_digit(Digit::D5));
        board.set_candidates(Cell::new(0, 1), DigitSet::from_digit(Digit::D5));

        let topology = Topology::classic();
        let mut log = AssignmentLog::new();
        Eliminate::new().apply(&mut board, &topology, &mut log);

        assert!(board.first_empty().is_some());
    }
}
