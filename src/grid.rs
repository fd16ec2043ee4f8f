//! The packed coordinate space shared by both grids.
//!
//! Grid A occupies columns 1..=10, grid B columns 16..=25; rows are 1..=10
//! on both. A [`Side`] value owns the translation between packed
//! coordinates and the local 0-indexed cells of a [`crate::CellSet`].

use crate::config::{BOARD_SIZE, SIDE_B_OFFSET};
use core::fmt;

/// A 1-indexed `(col, row)` pair in the packed coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub col: u8,
    pub row: u8,
}

impl Coord {
    #[inline]
    pub const fn new(col: u8, row: u8) -> Self {
        Coord { col, row }
    }

    /// Step by a king-move delta; `None` on numeric underflow.
    pub(crate) fn step(self, dc: i8, dr: i8) -> Option<Coord> {
        let col = self.col.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;
        Some(Coord { col, row })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Which half of the packed coordinate space a grid occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Horizontal shift of this grid's columns.
    #[inline]
    pub const fn offset(self) -> u8 {
        match self {
            Side::A => 0,
            Side::B => SIDE_B_OFFSET,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// True when the packed coordinate lies on this grid.
    pub fn contains(self, c: Coord) -> bool {
        let o = self.offset();
        c.col > o && c.col <= o + BOARD_SIZE && c.row >= 1 && c.row <= BOARD_SIZE
    }

    /// Packed coordinate to local 0-indexed (row, col).
    pub(crate) fn to_local(self, c: Coord) -> Option<(usize, usize)> {
        if !self.contains(c) {
            return None;
        }
        Some(((c.row - 1) as usize, (c.col - 1 - self.offset()) as usize))
    }

    /// Local 0-indexed (row, col) to packed coordinate.
    pub(crate) fn from_local(self, row: usize, col: usize) -> Coord {
        Coord::new(col as u8 + 1 + self.offset(), row as u8 + 1)
    }
}
