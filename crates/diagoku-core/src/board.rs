//! The mutable candidate state of a puzzle.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet, topology::Topology};

/// An error produced while decoding an 81-character grid string.
///
/// Malformed input is rejected here, before any solving starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 characters.
    #[display("grid must contain exactly 81 cells, got {len}")]
    BadLength {
        /// Number of characters actually present.
        len: usize,
    },
    /// The input contained a character other than `.` or `1`-`9`.
    #[display("invalid character {found:?} at position {index}")]
    InvalidCharacter {
        /// Zero-based offset of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

/// The candidate state: one [`DigitSet`] per cell.
///
/// A cell is solved when its set is a singleton and contradicted when it is
/// empty. The board has value semantics; the search clones it at every branch
/// point so sibling branches never share mutable state.
///
/// # Examples
///
/// ```
/// use diagoku_core::{Board, Cell, Digit};
///
/// let board: Board =
///     "2................................................................................"
///         .parse()?;
/// assert_eq!(board.solved_digit(Cell::new(0, 0)), Some(Digit::D2));
/// assert_eq!(board.candidates(Cell::new(0, 1)).len(), 9);
/// # Ok::<(), diagoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; 81],
}

impl Board {
    /// Creates a board where every cell still admits all nine digits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Replaces the candidate set of a cell.
    pub fn set_candidates(&mut self, cell: Cell, candidates: DigitSet) {
        self.cells[cell.index()] = candidates;
    }

    /// Removes a digit from a cell's candidates.
    ///
    /// Returns `true` if the digit was present.
    pub fn remove_candidate(&mut self, cell: Cell, digit: Digit) -> bool {
        self.cells[cell.index()].remove(digit)
    }

    /// Returns the digit a cell is solved to, or `None` if it is still open
    /// or contradicted.
    #[must_use]
    pub fn solved_digit(&self, cell: Cell) -> Option<Digit> {
        self.candidates(cell).as_single()
    }

    /// Returns the number of solved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns `true` if every cell is solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.solved_count() == 81
    }

    /// Returns the first cell (in canonical order) whose candidate set is
    /// empty, if any. Such a cell makes the whole state invalid.
    #[must_use]
    pub fn first_empty(&self) -> Option<Cell> {
        self.cells
            .iter()
            .position(|set| set.is_empty())
            .map(Cell::from_index)
    }

    /// Returns the total number of candidates across all cells.
    ///
    /// Propagation only ever shrinks this quantity, which is what bounds the
    /// reducer's fixed-point iteration.
    #[must_use]
    pub fn candidate_total(&self) -> usize {
        self.cells.iter().map(|set| set.len()).sum()
    }

    /// Checks that no solved cell shares its digit with a solved peer under
    /// the given topology.
    #[must_use]
    pub fn is_consistent(&self, topology: &Topology) -> bool {
        Cell::ALL.iter().all(|&cell| {
            self.solved_digit(cell).is_none_or(|digit| {
                topology
                    .peers(cell)
                    .iter()
                    .all(|peer| self.solved_digit(peer) != Some(digit))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Cell> for Board {
    type Output = DigitSet;

    fn index(&self, cell: Cell) -> &DigitSet {
        &self.cells[cell.index()]
    }
}

impl FromStr for Board {
    type Err = ParseGridError;

    /// Decodes an 81-character grid string, read left-to-right and
    /// top-to-bottom. `.` leaves all nine digits as candidates; `1`-`9` is a
    /// given clue. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseGridError::BadLength { len });
        }
        let mut board = Self::new();
        for (index, found) in s.chars().enumerate() {
            if found == '.' {
                continue;
            }
            let Some(digit) = Digit::from_char(found) else {
                return Err(ParseGridError::InvalidCharacter { index, found });
            };
            board.cells[index] = DigitSet::from_digit(digit);
        }
        Ok(board)
    }
}

impl Display for Board {
    /// Renders the 9×9 layout with `|` separators after columns 3 and 6 and
    /// a dashed line after rows 3 and 6. Cell width adapts to the widest
    /// remaining candidate set, so partially reduced boards stay readable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + self.cells.iter().map(|set| set.len()).max().unwrap_or(1);
        let segment = "-".repeat(width * 3);

        for row in 0..9 {
            if row == 3 || row == 6 {
                writeln!(f, "{segment}+{segment}+{segment}")?;
            }
            for col in 0..9 {
                let candidates = self.candidates(Cell::new(row, col)).to_string();
                write!(f, "{candidates:^width$}")?;
                if col == 2 || col == 5 {
                    write!(f, "|")?;
                }
            }
            if row < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
