//! Constraint units and the derived units-of / peers mappings.

use tinyvec::ArrayVec;

use crate::{cell::Cell, cell_set::CellSet};

/// The kind of constraint group a [`Unit`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// One of the nine rows.
    Row,
    /// One of the nine columns.
    Column,
    /// One of the nine 3×3 boxes.
    Box,
    /// One of the two main diagonals.
    Diagonal,
}

/// A group of 9 cells that must contain each digit exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    kind: UnitKind,
    cells: [Cell; 9],
}

impl Unit {
    fn new(kind: UnitKind, cells: [Cell; 9]) -> Self {
        Self { kind, cells }
    }

    /// Returns the kind of this unit.
    #[must_use]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Returns the cells of this unit in board order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns `true` if the cell belongs to this unit.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

impl<'a> IntoIterator for &'a Unit {
    type Item = Cell;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Cell>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}

/// The static constraint structure of the board.
///
/// Computed once per solver and read-only thereafter: the unit list (9 rows,
/// 9 columns, 9 boxes, and optionally the two main diagonals), the units each
/// cell belongs to, and each cell's peer set (every other cell sharing at
/// least one unit with it).
///
/// # Examples
///
/// ```
/// use diagoku_core::{Cell, Topology};
///
/// let classic = Topology::classic();
/// assert_eq!(classic.units().len(), 27);
///
/// let diagonal = Topology::diagonal();
/// assert_eq!(diagonal.units().len(), 29);
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    units: Vec<Unit>,
    units_of: Vec<ArrayVec<[u8; 5]>>,
    peers: Vec<CellSet>,
}

impl Topology {
    /// Builds the classic topology: rows, columns, and boxes (27 units).
    #[must_use]
    pub fn classic() -> Self {
        Self::build(false)
    }

    /// Builds the diagonal-variant topology: rows, columns, boxes, and the
    /// two main diagonals (29 units).
    #[must_use]
    pub fn diagonal() -> Self {
        Self::build(true)
    }

    fn build(with_diagonals: bool) -> Self {
        let mut units = Vec::with_capacity(if with_diagonals { 29 } else { 27 });

        for row in 0..9 {
            units.push(Unit::new(
                UnitKind::Row,
                std::array::from_fn(|col| Cell::new(row, u8::try_from(col).unwrap_or_default())),
            ));
        }
        for col in 0..9 {
            units.push(Unit::new(
                UnitKind::Column,
                std::array::from_fn(|row| Cell::new(u8::try_from(row).unwrap_or_default(), col)),
            ));
        }
        for b in 0..9u8 {
            units.push(Unit::new(
                UnitKind::Box,
                std::array::from_fn(|i| {
                    let i = u8::try_from(i).unwrap_or_default();
                    Cell::new((b / 3) * 3 + i / 3, (b % 3) * 3 + i % 3)
                }),
            ));
        }
        if with_diagonals {
            units.push(Unit::new(
                UnitKind::Diagonal,
                std::array::from_fn(|i| Cell::from_index(i * 9 + i)),
            ));
            units.push(Unit::new(
                UnitKind::Diagonal,
                std::array::from_fn(|i| Cell::from_index(i * 9 + (8 - i))),
            ));
        }

        let mut units_of = vec![ArrayVec::<[u8; 5]>::new(); 81];
        let mut peers = vec![CellSet::EMPTY; 81];
        for (id, unit) in units.iter().enumerate() {
            for cell in unit {
                units_of[cell.index()].push(u8::try_from(id).unwrap_or_default());
                for other in unit {
                    if other != cell {
                        peers[cell.index()].insert(other);
                    }
                }
            }
        }

        Self {
            units,
            units_of,
            peers,
        }
    }

    /// Returns all units in a fixed order: rows, columns, boxes, then
    /// diagonals if present.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns `true` if this topology includes the two main diagonals.
    #[must_use]
    pub fn has_diagonals(&self) -> bool {
        self.units.len() > 27
    }

    /// Returns the units containing the given cell.
    ///
    /// Every cell belongs to its row, column, and box; cells on a main
    /// diagonal additionally belong to that diagonal (the center cell lies
    /// on both).
    pub fn units_of(&self, cell: Cell) -> impl Iterator<Item = &Unit> {
        self.units_of[cell.index()]
            .iter()
            .map(|&id| &self.units[usize::from(id)])
    }

    /// Returns the set of all other cells sharing at least one unit with the
    /// given cell.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> CellSet {
        self.peers[cell.index()]
    }
}
