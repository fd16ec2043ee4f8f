//! Dotted/hit bookkeeping for one grid.

use crate::grid::{Coord, Side};
use crate::ship::Cells;

/// Shots received by one grid: `hit` holds confirmed ship segments,
/// `dotted` holds cells known to be empty, by miss or by inference.
/// The two sets never intersect; a hit evicts the cell from `dotted`
/// and dotting never overwrites a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotLog {
    side: Side,
    dotted: Cells,
    hit: Cells,
}

impl ShotLog {
    pub fn new(side: Side) -> Self {
        ShotLog {
            side,
            dotted: Cells::new(),
            hit: Cells::new(),
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// True when the cell was already fired at or inferred empty.
    pub fn already_fired(&self, c: Coord) -> bool {
        self.is_dotted(c) || self.is_hit(c)
    }

    pub fn is_dotted(&self, c: Coord) -> bool {
        match self.side.to_local(c) {
            Some((r, l)) => self.dotted.contains(r, l).unwrap_or(false),
            None => false,
        }
    }

    pub fn is_hit(&self, c: Coord) -> bool {
        match self.side.to_local(c) {
            Some((r, l)) => self.hit.contains(r, l).unwrap_or(false),
            None => false,
        }
    }

    /// Record a confirmed ship segment at `c`.
    pub(crate) fn mark_hit(&mut self, c: Coord) {
        if let Some((r, l)) = self.side.to_local(c) {
            let _ = self.hit.insert(r, l);
            let _ = self.dotted.remove(r, l);
        }
    }

    /// Record an empty cell at `c`; off-grid and hit cells are ignored.
    pub(crate) fn mark_dotted(&mut self, c: Coord) {
        if let Some((r, l)) = self.side.to_local(c) {
            if !self.hit.contains(r, l).unwrap_or(false) {
                let _ = self.dotted.insert(r, l);
            }
        }
    }

    /// Mask of cells known to be empty.
    #[inline]
    pub fn dotted(&self) -> Cells {
        self.dotted
    }

    /// Mask of confirmed ship segments.
    #[inline]
    pub fn hits(&self) -> Cells {
        self.hit
    }

    /// Packed coordinates of the dotted cells.
    pub fn dotted_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.dotted.iter().map(|(r, c)| self.side.from_local(r, c))
    }

    /// Packed coordinates of the hit cells.
    pub fn hit_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.hit.iter().map(|(r, c)| self.side.from_local(r, c))
    }

    /// Raw masks, for session snapshots.
    pub(crate) fn raw(&self) -> (u128, u128) {
        (self.dotted.into_raw(), self.hit.into_raw())
    }

    /// Rebuild from snapshot masks, restoring disjointness.
    pub(crate) fn from_raw(side: Side, dotted: u128, hit: u128) -> Self {
        let hit = Cells::from_raw(hit);
        let mut dotted = Cells::from_raw(dotted);
        dotted -= hit;
        ShotLog { side, dotted, hit }
    }
}
