//! A candidate set of digits 1-9, stored as a 9-bit mask.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

/// The set of digits still possible for a cell.
///
/// Bits 0-8 of the underlying `u16` represent digits 1-9 respectively, so
/// membership, insertion, and cardinality are all O(1). A cell is *solved*
/// when its set has exactly one element and *contradicted* when it is empty.
///
/// # Examples
///
/// ```
/// use diagoku_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert_eq!(candidates.as_single(), None);
///
/// let solved = DigitSet::from_digit(Digit::D3);
/// assert_eq!(solved.as_single(), Some(Digit::D3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const MASK: u16 = 0x01ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all nine digits.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_digit(digit: Digit) -> Self {
        Self(1 << (digit.value() - 1))
    }

    /// Inserts a digit. Returns `true` if the digit was not already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let bit = Self::from_digit(digit).0;
        let inserted = self.0 & bit == 0;
        self.0 |= bit;
        inserted
    }

    /// Removes a digit. Returns `true` if the digit was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let bit = Self::from_digit(digit).0;
        let removed = self.0 & bit != 0;
        self.0 &= !bit;
        removed
    }

    /// Returns `true` if the digit is a member of this set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::from_digit(digit).0 != 0
    }

    /// Returns the number of digits in this set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if this set has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if this set has exactly one, `None` otherwise.
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if !self.0.is_power_of_two() {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        Some(Digit::from_value(value))
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the member digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BitAnd for DigitSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for DigitSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let digit = Digit::from_value(self.0.trailing_zeros() as u8 + 1);
        self.0 &= self.0 - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

impl Display for DigitSet {
    /// Formats the set as its digits in ascending order, e.g. `"37"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            Display::fmt(&digit, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitSet({self})")
    }
}
