//! Board cell identifiers.

use std::fmt::{self, Display};

/// One of the 81 positions in the grid.
///
/// Cells are numbered 0-80 in row-major order, which is the canonical order
/// used for iteration, search tie-breaking, and twin-pair discovery. The
/// human-readable name pairs a row letter `A`-`I` with a column digit
/// `1`-`9`, so the first row is `A1..A9` and the last is `I1..I9`.
///
/// # Examples
///
/// ```
/// use diagoku_core::Cell;
///
/// let cell = Cell::new(0, 3);
/// assert_eq!(cell.to_string(), "A4");
/// assert_eq!(cell.index(), 3);
/// assert_eq!(Cell::ALL[80].to_string(), "I9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// All 81 cells in canonical (row-major) order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self(0); 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a cell from row and column coordinates (both 0-8).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self(row * 9 + col)
    }

    /// Creates a cell from its canonical index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let index = index as u8;
        Self(index)
    }

    /// Returns the canonical index of this cell (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 9
    }

    /// Returns the index of the 3×3 box containing this cell (0-8, left to
    /// right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Returns the row letter `'A'`-`'I'`.
    #[must_use]
    pub const fn row_letter(self) -> char {
        (b'A' + self.row()) as char
    }

    /// Returns the column digit `'1'`-`'9'`.
    #[must_use]
    pub const fn col_digit(self) -> char {
        (b'1' + self.col()) as char
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col_digit())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_canonical_order() {
        assert_eq!(Cell::ALL[0], Cell::new(0, 0));
        assert_eq!(Cell::ALL[8], Cell::new(0, 8));
        assert_eq!(Cell::ALL[9], Cell::new(1, 0));
        assert_eq!(Cell::ALL[80], Cell::new(8, 8));
        assert!(Cell::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_names() {
        assert_eq!(Cell::new(0, 0).to_string(), "A1");
        assert_eq!(Cell::new(0, 8).to_string(), "A9");
        assert_eq!(Cell::new(8, 0).to_string(), "I1");
        assert_eq!(Cell::new(4, 4).to_string(), "E5");
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Cell::new(0, 0).box_index(), 0);
        assert_eq!(Cell::new(2, 2).box_index(), 0);
        assert_eq!(Cell::new(0, 3).box_index(), 1);
        assert_eq!(Cell::new(4, 4).box_index(), 4);
        assert_eq!(Cell::new(8, 8).box_index(), 8);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_out_of_range_row_panics() {
        let _ = Cell::new(9, 0);
    }

    proptest! {
        #[test]
        fn prop_index_round_trip(index in 0usize..81) {
            let cell = Cell::from_index(index);
            prop_assert_eq!(cell.index(), index);
            prop_assert_eq!(Cell::new(cell.row(), cell.col()), cell);
        }
    }
}
