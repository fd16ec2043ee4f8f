//! Ship geometry: canonical placement plus hit bookkeeping.
//!
//! A ship is stored in canonical form (bow, orientation, length) together
//! with two cell masks: the immutable footprint and the mutable set of
//! segments not yet hit. The working view shrinks as shots land; the
//! footprint never changes and is what perimeter sealing reads.

use crate::cellset::CellSet;
use crate::common::FleetError;
use crate::config::{BOARD_SIZE, MAX_SHIP_LEN};
use crate::grid::{Coord, Side};

/// Mask type used for all per-grid cell sets.
pub type Cells = CellSet<u128, { BOARD_SIZE as usize }>;

/// Orientation of a ship on its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step from bow towards stern as a `(dc, dr)` delta.
    #[inline]
    fn axis(self) -> (i8, i8) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A placed ship with its remaining-segment working view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    side: Side,
    bow: Coord,
    orientation: Orientation,
    length: u8,
    footprint: Cells,
    remaining: Cells,
}

impl Ship {
    /// Place a ship of `length` cells growing from `bow` towards larger
    /// coordinates. Fails if any cell leaves the grid.
    pub fn new(
        side: Side,
        bow: Coord,
        orientation: Orientation,
        length: u8,
    ) -> Result<Self, FleetError> {
        if length == 0 || length > MAX_SHIP_LEN {
            return Err(FleetError::InvalidShipShape);
        }
        let (dc, dr) = orientation.axis();
        let mut footprint = Cells::new();
        for i in 0..length {
            let cell = Coord::new(
                bow.col.wrapping_add((dc as u8).wrapping_mul(i)),
                bow.row.wrapping_add((dr as u8).wrapping_mul(i)),
            );
            let (r, c) = side.to_local(cell).ok_or(FleetError::InvalidShipShape)?;
            footprint.insert(r, c)?;
        }
        Ok(Ship {
            side,
            bow,
            orientation,
            length,
            footprint,
            remaining: footprint,
        })
    }

    /// Canonicalize an arbitrary cell list (manual or file placement).
    ///
    /// The cells must be distinct, lie on this grid, and form a straight
    /// unbroken line of at most four cells.
    pub fn from_cells(side: Side, cells: &[Coord]) -> Result<Self, FleetError> {
        let len = cells.len();
        if len == 0 || len > MAX_SHIP_LEN as usize {
            return Err(FleetError::InvalidShipShape);
        }
        let mut sorted = [Coord::new(0, 0); MAX_SHIP_LEN as usize];
        sorted[..len].copy_from_slice(cells);
        let sorted = &mut sorted[..len];
        sorted.sort_unstable();
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(FleetError::InvalidShipShape);
        }

        let bow = sorted[0];
        let orientation = if len == 1 || sorted.iter().all(|c| c.row == bow.row) {
            Orientation::Horizontal
        } else if sorted.iter().all(|c| c.col == bow.col) {
            Orientation::Vertical
        } else {
            return Err(FleetError::InvalidShipShape);
        };
        let (dc, dr) = orientation.axis();
        for (i, cell) in sorted.iter().enumerate() {
            let expected = Coord::new(
                bow.col.wrapping_add((dc as u8).wrapping_mul(i as u8)),
                bow.row.wrapping_add((dr as u8).wrapping_mul(i as u8)),
            );
            if *cell != expected {
                return Err(FleetError::InvalidShipShape);
            }
        }
        Ship::new(side, bow, orientation, len as u8)
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Lowest `(col, row)` end of the ship.
    #[inline]
    pub fn bow(&self) -> Coord {
        self.bow
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn length(&self) -> u8 {
        self.length
    }

    /// Highest `(col, row)` end of the ship.
    pub fn stern(&self) -> Coord {
        let (dc, dr) = self.orientation.axis();
        let i = self.length - 1;
        Coord::new(
            self.bow.col.wrapping_add((dc as u8).wrapping_mul(i)),
            self.bow.row.wrapping_add((dr as u8).wrapping_mul(i)),
        )
    }

    /// Cells from bow to stern.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (dc, dr) = self.orientation.axis();
        (0..self.length).map(move |i| {
            Coord::new(
                self.bow.col.wrapping_add((dc as u8).wrapping_mul(i)),
                self.bow.row.wrapping_add((dr as u8).wrapping_mul(i)),
            )
        })
    }

    /// The cells just beyond the bow and the stern, when on the grid.
    pub fn beyond_ends(&self) -> [Option<Coord>; 2] {
        let (dc, dr) = self.orientation.axis();
        let before = self
            .bow
            .step(-dc, -dr)
            .filter(|c| self.side.contains(*c));
        let after = self
            .stern()
            .step(dc, dr)
            .filter(|c| self.side.contains(*c));
        [before, after]
    }

    /// Immutable occupancy mask of the ship on its grid.
    #[inline]
    pub fn footprint(&self) -> Cells {
        self.footprint
    }

    /// Number of segments not yet hit.
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// True when every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Membership test against the remaining-segment view.
    pub(crate) fn contains_remaining(&self, c: Coord) -> bool {
        match self.side.to_local(c) {
            Some((r, l)) => self.remaining.contains(r, l).unwrap_or(false),
            None => false,
        }
    }

    /// Remove a segment from the working view. Returns true on removal.
    pub(crate) fn record_hit(&mut self, c: Coord) -> bool {
        if !self.contains_remaining(c) {
            return false;
        }
        if let Some((r, l)) = self.side.to_local(c) {
            let _ = self.remaining.remove(r, l);
        }
        true
    }

    /// Raw remaining mask, for session snapshots.
    pub(crate) fn remaining_raw(&self) -> u128 {
        self.remaining.into_raw()
    }

    /// Restore the working view from a snapshot, clipped to the footprint.
    pub(crate) fn restore_remaining(&mut self, raw: u128) {
        self.remaining = Cells::from_raw(raw) & self.footprint;
    }
}
