use diagoku_core::{Board, Digit, Topology};

use crate::{
    AssignmentLog,
    strategy::{BoxedStrategy, Strategy, assign_and_log},
};

const NAME: &str = "Only Choice";

/// Assigns a digit to the sole cell in a unit that still admits it.
///
/// For every unit and every digit, if exactly one cell of the unit has the
/// digit among its candidates and is not already solved to it, that cell is
/// reduced to the digit and the assignment is logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice {}

impl OnlyChoice {
    /// Creates a new `OnlyChoice` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for OnlyChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, topology: &Topology, log: &mut AssignmentLog) -> bool {
        let mut changed = false;
        for unit in topology.units() {
            for digit in Digit::ALL {
                let mut admitting = unit
                    .into_iter()
                    .filter(|&cell| board.candidates(cell).contains(digit));
                if let (Some(cell), None) = (admitting.next(), admitting.next()) {
                    changed |= assign_and_log(board, log, cell, digit);
                }
            }
        }
        changed
    }
}
