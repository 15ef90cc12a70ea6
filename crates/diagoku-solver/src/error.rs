//! Solver error types.

use derive_more::{Display, Error};
use diagoku_core::Cell;

/// A cell's candidate set became empty during reduction.
///
/// This is branch-local: the search absorbs it by abandoning the branch and
/// trying the next candidate. It never reaches the caller of
/// [`Solver::solve`](crate::Solver::solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cell {cell} has no remaining candidates")]
pub struct Contradiction {
    /// The first contradicted cell, in canonical order.
    pub cell: Cell,
}

/// Every branch from the root failed: the puzzle has no solution.
///
/// Surfaced through [`SolveReport::outcome`](crate::SolveReport::outcome) as
/// a distinguished non-value result, never as a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("puzzle has no solution")]
pub struct Unsatisfiable;
