//! Depth-first backtracking search over candidate boards.

use diagoku_core::{Board, Cell, DigitSet, ParseGridError, Topology};

use crate::{
    AssignmentLog, Unsatisfiable,
    reducer::reduce,
    strategy::{BoxedStrategy, all_strategies},
};

/// Counters collected during one solve.
///
/// # Examples
///
/// ```
/// use diagoku_solver::Solver;
///
/// let solver = Solver::diagonal();
/// let report = solver.solve_grid(
///     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3",
/// )?;
/// println!(
///     "{} guesses across {} reductions",
///     report.stats().branches(),
///     report.stats().reductions()
/// );
/// # Ok::<(), diagoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    reductions: usize,
    branches: usize,
}

impl SolveStats {
    /// Number of fixed-point reductions performed (one per search node).
    #[must_use]
    pub fn reductions(&self) -> usize {
        self.reductions
    }

    /// Number of candidate guesses tried across all branch points.
    ///
    /// An input that propagation solves outright reports zero.
    #[must_use]
    pub fn branches(&self) -> usize {
        self.branches
    }
}

/// The outcome of one solve invocation.
///
/// Bundles the solution (if any) with the [`AssignmentLog`] and
/// [`SolveStats`] accumulated along the way. The log covers the entire run,
/// including work done inside branches that were later abandoned.
#[derive(Debug, Clone)]
pub struct SolveReport {
    solution: Option<Board>,
    log: AssignmentLog,
    stats: SolveStats,
}

impl SolveReport {
    /// Returns the solved board, or `None` if the puzzle is unsatisfiable.
    #[must_use]
    pub fn solution(&self) -> Option<&Board> {
        self.solution.as_ref()
    }

    /// Returns the solved board or the [`Unsatisfiable`] sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`Unsatisfiable`] when every branch from the root failed.
    pub fn outcome(&self) -> Result<&Board, Unsatisfiable> {
        self.solution.as_ref().ok_or(Unsatisfiable)
    }

    /// Returns the assignment log of the whole run.
    #[must_use]
    pub fn log(&self) -> &AssignmentLog {
        &self.log
    }

    /// Returns the solve counters.
    #[must_use]
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }
}

/// A propagation-and-search sudoku solver.
///
/// Owns the [`Topology`] (with or without the diagonal units) and the fixed
/// strategy list. Each solve runs a depth-first search: reduce to a fixed
/// point, and when reduction stalls short of a solution, branch on the
/// unsolved cell with the fewest candidates, cloning the board per trial
/// digit so backtracking needs no undo.
///
/// # Examples
///
/// ```
/// use diagoku_solver::Solver;
///
/// let solver = Solver::classic();
/// let report = solver.solve_grid(&".".repeat(81))?;
/// assert!(report.solution().is_some());
/// # Ok::<(), diagoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    topology: Topology,
    strategies: Vec<BoxedStrategy>,
}

impl Solver {
    /// Creates a solver over the given topology with the standard strategy
    /// order.
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            strategies: all_strategies(),
        }
    }

    /// Creates a solver for classic sudoku (no diagonal units).
    #[must_use]
    pub fn classic() -> Self {
        Self::new(Topology::classic())
    }

    /// Creates a solver for diagonal sudoku.
    #[must_use]
    pub fn diagonal() -> Self {
        Self::new(Topology::diagonal())
    }

    /// Returns the topology this solver constrains against.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Solves a board, returning the report with solution, log, and stats.
    #[must_use]
    pub fn solve(&self, board: &Board) -> SolveReport {
        let mut log = AssignmentLog::new();
        let mut stats = SolveStats::default();
        let solution = self.search(board.clone(), &mut log, &mut stats);
        log::debug!(
            "solve finished: solved={}, {} log entries, {} branches",
            solution.is_some(),
            log.len(),
            stats.branches
        );
        SolveReport {
            solution,
            log,
            stats,
        }
    }

    /// Decodes an 81-character grid string and solves it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError`] if the input is malformed; malformed input
    /// never reaches the search.
    pub fn solve_grid(&self, grid: &str) -> Result<SolveReport, ParseGridError> {
        let board: Board = grid.parse()?;
        Ok(self.solve(&board))
    }

    /// One search node: reduce, check for a solution, otherwise branch.
    ///
    /// A contradicted branch returns `None` and reports nothing further; the
    /// parent simply tries its next candidate. Each recursive call owns its
    /// board exclusively.
    fn search(
        &self,
        mut board: Board,
        log: &mut AssignmentLog,
        stats: &mut SolveStats,
    ) -> Option<Board> {
        stats.reductions += 1;
        if let Err(contradiction) = reduce(&mut board, &self.topology, &self.strategies, log) {
            log::trace!("branch abandoned: {contradiction}");
            return None;
        }
        if board.is_complete() {
            return Some(board);
        }

        let (cell, candidates) = Cell::ALL
            .iter()
            .filter_map(|&cell| {
                let candidates = board.candidates(cell);
                (candidates.len() > 1).then_some((cell, candidates))
            })
            .min_by_key(|(_, candidates)| candidates.len())?;

        log::trace!("branching on {cell} over {candidates}");
        for digit in candidates {
            stats.branches += 1;
            let mut child = board.clone();
            child.set_candidates(cell, DigitSet::from_digit(digit));
            if let Some(solved) = self.search(child, log, stats) {
                return Some(solved);
            }
        }
        None
    }
}
