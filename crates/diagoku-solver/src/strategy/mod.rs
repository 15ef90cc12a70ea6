//! Local-consistency reduction strategies.
//!
//! Each strategy implements the [`Strategy`] trait: it takes the candidate
//! board, refines it in place, and reports whether anything changed. The
//! [`reducer`](crate::reduce) applies them round-robin until a fixed point.
//!
//! The application order ([`Eliminate`], then [`OnlyChoice`], then
//! [`NakedTwins`]) is fixed and part of the solver's observable behavior.

use std::fmt::Debug;

use diagoku_core::{Board, Cell, Digit, DigitSet, Topology};

pub use self::{eliminate::Eliminate, naked_twins::NakedTwins, only_choice::OnlyChoice};
use crate::AssignmentLog;

mod eliminate;
mod naked_twins;
mod only_choice;

/// Returns the standard strategies in their fixed application order.
#[must_use]
pub fn all_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(Eliminate::new()),
        Box::new(OnlyChoice::new()),
        Box::new(NakedTwins::new()),
    ]
}

/// A local-consistency reduction rule.
///
/// Strategies are monotone: a cell's candidate set after `apply` is always a
/// subset of what it was before.
pub trait Strategy: Debug {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Applies one pass of the strategy.
    ///
    /// Any candidate removal that collapses a cell to a single digit is
    /// recorded in `log`. Returns `true` if the board changed.
    fn apply(&self, board: &mut Board, topology: &Topology, log: &mut AssignmentLog) -> bool;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn Strategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Removes `digit` from `cell`, logging the cell if the removal finalized it.
///
/// Returns `true` if the digit was present.
pub(crate) fn remove_and_log(
    board: &mut Board,
    log: &mut AssignmentLog,
    cell: Cell,
    digit: Digit,
) -> bool {
    if !board.remove_candidate(cell, digit) {
        return false;
    }
    if let Some(solved) = board.solved_digit(cell) {
        log.record(cell, solved, board);
    }
    true
}

/// Forces `cell` to exactly `digit`, logging the finalization.
///
/// Returns `true` if the cell was not already solved to that digit.
pub(crate) fn assign_and_log(
    board: &mut Board,
    log: &mut AssignmentLog,
    cell: Cell,
    digit: Digit,
) -> bool {
    if board.solved_digit(cell) == Some(digit) {
        return false;
    }
    board.set_candidates(cell, DigitSet::from_digit(digit));
    log.record(cell, digit, board);
    true
}
