//! Constraint propagation and backtracking search for Diagoku.
//!
//! The solver combines three local-consistency strategies (elimination,
//! only-choice, and naked-twins) applied to a fixed point by [`reduce`],
//! with a depth-first [`search`](Solver::solve) that branches on
//! the least-constrained unsolved cell when propagation stalls. Every
//! finalized assignment is recorded in an [`AssignmentLog`] for external
//! inspection or replay.
//!
//! # Examples
//!
//! ```
//! use diagoku_solver::Solver;
//!
//! let solver = Solver::diagonal();
//! let report = solver.solve_grid(
//!     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3",
//! )?;
//!
//! let solution = report.solution().expect("puzzle is satisfiable");
//! assert!(solution.is_complete());
//! # Ok::<(), diagoku_core::ParseGridError>(())
//! ```

pub use self::{
    assignment_log::{Assignment, AssignmentLog},
    error::{Contradiction, Unsatisfiable},
    reducer::reduce,
    search::{SolveReport, SolveStats, Solver},
};

mod assignment_log;
mod error;
mod reducer;
mod search;
pub mod strategy;

#[cfg(test)]
mod testing;
