//! Core data structures for the Diagoku solver.
//!
//! This crate provides the vocabulary shared by the solving and presentation
//! layers:
//!
//! - [`digit`]: type-safe sudoku digits 1-9
//! - [`digit_set`]: a 9-bit candidate mask per cell
//! - [`cell`]: the 81 board positions in canonical (row-major) order
//! - [`cell_set`]: an 81-bit mask over positions, used for peer sets
//! - [`topology`]: the constraint units (rows, columns, boxes, and optionally
//!   the two main diagonals) and the derived units-of / peers mappings
//! - [`board`]: the mutable candidate state, grid-string decoding, and
//!   human-readable rendering
//!
//! # Examples
//!
//! ```
//! use diagoku_core::{Board, Cell, Topology};
//!
//! let board: Board = "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
//!     .parse()?;
//! let topology = Topology::diagonal();
//!
//! let a1 = Cell::from_index(0);
//! assert_eq!(board.candidates(a1).len(), 1); // given clue '2'
//! assert_eq!(topology.peers(a1).len(), 26);
//! # Ok::<(), diagoku_core::ParseGridError>(())
//! ```

pub mod board;
pub mod cell;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod topology;

pub use self::{
    board::{Board, ParseGridError},
    cell::Cell,
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    topology::{Topology, Unit, UnitKind},
};
