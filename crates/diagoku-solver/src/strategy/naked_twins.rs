use diagoku_core::{Board, Cell, Topology};

use crate::{
    AssignmentLog,
    strategy::{BoxedStrategy, Strategy, remove_and_log},
};

const NAME: &str = "Naked Twins";

/// Eliminates the digits of a naked twin pair from the pair's common peers.
///
/// Two peer cells holding the same two-candidate set must between them take
/// both of those digits, so no cell that sees both twins can take either.
/// Pairs are discovered by scanning cells in canonical order, pairing each
/// candidate with the later of the two; the removals are idempotent and
/// monotone, so processing order across pairs does not affect the fixed
/// point.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTwins {}

impl NakedTwins {
    /// Creates a new `NakedTwins` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for NakedTwins {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, topology: &Topology, log: &mut AssignmentLog) -> bool {
        let mut twins = Vec::new();
        for first in Cell::ALL {
            let pair = board.candidates(first);
            if pair.len() != 2 {
                continue;
            }
            for second in topology.peers(first) {
                if second > first && board.candidates(second) == pair {
                    twins.push((first, second));
                }
            }
        }

        let mut changed = false;
        for (first, second) in twins {
            let pair = board.candidates(first);
            // an earlier pair's removals may have invalidated this one
            if pair.len() != 2 || board.candidates(second) != pair {
                continue;
            }
            let common = topology.peers(first) & topology.peers(second);
            for peer in common {
                for digit in pair {
                    changed |= remove_and_log(board, log, peer, digit);
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use diagoku_core::Digit;

    use super::*;
    use crate::testing::StrategyTester;

    #[test]
    fn test_twins_reduce_common_peer() {
        // twins {3,7} in row A; their common peer holding {3,5,7} collapses
        // to {5} in a single pass
        StrategyTester::classic()
            .set_cell(Cell::new(0, 0), [Digit::D3, Digit::D7])
            .set_cell(Cell::new(0, 1), [Digit::D3, Digit::D7])
            .set_cell(Cell::new(0, 2), [Digit::D3, Digit::D5, Digit::D7])
            .apply_once(&NakedTwins::new())
            .assert_candidates(Cell::new(0, 2), [Digit::D5]);
    }

    #[test]
    fn test_collapse_is_logged() {
        let tester = StrategyTester::classic()
            .set_cell(Cell::new(0, 0), [Digit::D3, Digit::D7])
            .set_cell(Cell::new(0, 1), [Digit::D3, Digit::D7])
            .set_cell(Cell::new(0, 2), [Digit::D3, Digit::D5, Digit::D7])
            .apply_once(&NakedTwins::new());

        assert!(
            tester
                .log()
                .entries()
                .iter()
                .any(|a| a.cell() == Cell::new(0, 2) && a.digit() == Digit::D5)
        );
    }

    #[test]
    fn test_all_common_peers_are_swept() {
        let tester = StrategyTester::classic()
            .set_cell(Cell::new(0, 0), [Digit::D3, Digit::D7])
            .set_cell(Cell::new(0, 1), [Digit::D3, Digit::D7])
            .apply_once(&NakedTwins::new());

        // every other cell of row A and of box 0 sees both twins
        tester
            .assert_removed(Cell::new(0, 8), [Digit::D3, Digit::D7])
            .assert_removed(Cell::new(2, 2), [Digit::D3, Digit::D7])
            // a cell seeing only one twin keeps both digits
            .assert_no_change(Cell::new(8, 0));
    }

    #[test]
    fn test_twins_must_be_peers() {
        // identical pairs in unrelated cells justify no elimination
        StrategyTester::classic()
            .set_cell(Cell::new(0, 0), [Digit::D3, Digit::D7])
            .set_cell(Cell::new(4, 6), [Digit::D3, Digit::D7])
            .apply_once(&NakedTwins::new())
            .assert_no_change(Cell::new(0, 6));
    }

    #[test]
    fn test_diagonal_twins() {
        StrategyTester::diagonal()
            .set_cell(Cell::new(3, 3), [Digit::D1, Digit::D9])
            .set_cell(Cell::new(7, 7), [Digit::D1, Digit::D9])
            .apply_once(&NakedTwins::new())
            // E5 sees both twins along the main diagonal
            .assert_removed(Cell::new(4, 4), [Digit::D1, Digit::D9]);
    }

    #[test]
    fn test_no_twins_no_change() {
        StrategyTester::classic()
            .set_cell(Cell::new(0, 0), [Digit::D3, Digit::D7])
            .apply_once(&NakedTwins::new())
            .assert_unchanged_everywhere();
    }
}
