//! A set of board cells, stored as an 81-bit mask.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::cell::Cell;

/// A set of cells across the whole board.
///
/// Backed by a `u128` with one bit per canonical cell index, so peer-set
/// intersection (the common-peers computation of the naked-twins rule) is a
/// single bitwise `&`. Iteration yields cells in canonical order.
///
/// # Examples
///
/// ```
/// use diagoku_core::{Cell, CellSet};
///
/// let mut set = CellSet::new();
/// set.insert(Cell::new(0, 0));
/// set.insert(Cell::new(4, 4));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Cell::new(4, 4)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CellSet(u128);

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a cell. Returns `true` if the cell was not already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let bit = 1u128 << cell.index();
        let inserted = self.0 & bit == 0;
        self.0 |= bit;
        inserted
    }

    /// Removes a cell. Returns `true` if the cell was present.
    pub fn remove(&mut self, cell: Cell) -> bool {
        let bit = 1u128 << cell.index();
        let removed = self.0 & bit != 0;
        self.0 &= !bit;
        removed
    }

    /// Returns `true` if the cell is a member of this set.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        self.0 & (1 << cell.index()) != 0
    }

    /// Returns the number of cells in this set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if this set has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the cells present in both `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns an iterator over the member cells in canonical order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl BitAnd for CellSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut set = Self::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the cells of a [`CellSet`] in canonical order.
#[derive(Debug, Clone)]
pub struct Iter(u128);

impl Iterator for Iter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            return None;
        }
        let cell = Cell::from_index(self.0.trailing_zeros() as usize);
        self.0 &= self.0 - 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
