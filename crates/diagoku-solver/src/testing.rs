//! Shared harness for exercising a single strategy pass.

use diagoku_core::{Board, Cell, Digit, DigitSet, Topology};

use crate::{AssignmentLog, strategy::Strategy};

/// Builds a board state, applies one strategy pass, and checks the result
/// against the state captured just before the pass.
pub struct StrategyTester {
    topology: Topology,
    board: Board,
    before: Board,
    log: AssignmentLog,
}

impl StrategyTester {
    fn new(topology: Topology) -> Self {
        let board = Board::new();
        Self {
            topology,
            before: board.clone(),
            board,
            log: AssignmentLog::new(),
        }
    }

    pub fn classic() -> Self {
        Self::new(Topology::classic())
    }

    pub fn diagonal() -> Self {
        Self::new(Topology::diagonal())
    }

    /// Pins a cell to a single digit.
    pub fn solve_cell(self, cell: Cell, digit: Digit) -> Self {
        self.set_cell(cell, [digit])
    }

    /// Replaces a cell's candidates wholesale.
    pub fn set_cell(mut self, cell: Cell, digits: impl IntoIterator<Item = Digit>) -> Self {
        self.board.set_candidates(cell, digits.into_iter().collect());
        self
    }

    /// Strikes one digit from a cell's candidates.
    pub fn remove_from_cell(mut self, cell: Cell, digit: Digit) -> Self {
        self.board.remove_candidate(cell, digit);
        self
    }

    /// Runs a single strategy pass, capturing the pre-pass board for the
    /// assertions below.
    pub fn apply_once(mut self, strategy: &dyn Strategy) -> Self {
        self.before = self.board.clone();
        strategy.apply(&mut self.board, &self.topology, &mut self.log);
        self
    }

    pub fn log(&self) -> &AssignmentLog {
        &self.log
    }

    /// Asserts the pass removed exactly `digits` from the cell.
    #[track_caller]
    pub fn assert_removed(&self, cell: Cell, digits: impl IntoIterator<Item = Digit>) -> &Self {
        let removed: DigitSet = digits.into_iter().collect();
        let expected = self.before.candidates(cell).difference(removed);
        assert_eq!(
            self.board.candidates(cell),
            expected,
            "cell {cell}: expected {removed} removed from {}",
            self.before.candidates(cell)
        );
        self
    }

    /// Asserts the pass left the cell's candidates untouched.
    #[track_caller]
    pub fn assert_no_change(&self, cell: Cell) -> &Self {
        assert_eq!(
            self.board.candidates(cell),
            self.before.candidates(cell),
            "cell {cell} changed"
        );
        self
    }

    /// Asserts the cell now holds exactly `digits`.
    #[track_caller]
    pub fn assert_candidates(&self, cell: Cell, digits: impl IntoIterator<Item = Digit>) -> &Self {
        let expected: DigitSet = digits.into_iter().collect();
        assert_eq!(self.board.candidates(cell), expected, "cell {cell}");
        self
    }

    /// Asserts the cell is solved to `digit`.
    #[track_caller]
    pub fn assert_solved(&self, cell: Cell, digit: Digit) -> &Self {
        assert_eq!(self.board.solved_digit(cell), Some(digit), "cell {cell}");
        self
    }

    /// Asserts the pass was a no-op on the whole board.
    #[track_caller]
    pub fn assert_unchanged_everywhere(&self) -> &Self {
        for cell in Cell::ALL {
            self.assert_no_change(cell);
        }
        self
    }
}
