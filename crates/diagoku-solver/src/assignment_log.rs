//! The append-only record of finalized assignments.

use diagoku_core::{Board, Cell, Digit};

/// One finalized assignment: a cell whose candidate set was reduced to a
/// single digit, together with a snapshot of the whole board at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    cell: Cell,
    digit: Digit,
    snapshot: Board,
}

impl Assignment {
    /// Returns the cell that became solved.
    #[must_use]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Returns the digit the cell was finalized to.
    #[must_use]
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// Returns the board state at the moment of the assignment.
    #[must_use]
    pub fn snapshot(&self) -> &Board {
        &self.snapshot
    }
}

/// Chronological log of every finalized assignment made during one solve.
///
/// The log is owned by the top-level solve invocation and passed by `&mut`
/// into every strategy call, so there is no ambient global state. It is
/// write-only from the solver's perspective: nothing in the algorithm ever
/// reads it back. Entries from branches that are later abandoned are
/// retained; the log records work done, not the path to the solution.
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
///
/// for assignment in report.log() {
///     let _ = (assignment.cell(), assignment.digit());
/// }
/// # Ok::<(), diagoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentLog {
    entries: Vec<Assignment>,
}

impl AssignmentLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry for a cell that just became solved.
    ///
    /// `board` is cloned into the entry; the log never aliases live solver
    /// state.
    pub fn record(&mut self, cell: Cell, digit: Digit, board: &Board) {
        self.entries.push(Assignment {
            cell,
            digit,
            snapshot: board.clone(),
        });
    }

    /// Returns the entries in chronological order.
    #[must_use]
    pub fn entries(&self) -> &[Assignment] {
        &self.entries
    }

    /// Returns the number of recorded assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AssignmentLog {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
