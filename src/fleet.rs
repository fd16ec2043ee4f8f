//! Fleet assembly and invariants.
//!
//! A fleet is exactly ten ships with the length roster 4,3,3,2,2,2,1,1,1,1,
//! all inside one grid, no two within king-move reach of each other. The
//! flat occupied mask is the working set: resolved hits remove cells from
//! it, and an empty mask means the fleet is sunk.

use crate::common::FleetError;
use crate::config::{ships_of_length, MAX_SHIP_LEN, NUM_SHIPS};
use crate::grid::{Coord, Side};
use crate::layout::FleetLayout;
use crate::ship::{Cells, Ship};

/// A complete fleet for one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    side: Side,
    ships: [Option<Ship>; NUM_SHIPS],
    occupied: Cells,
}

impl Fleet {
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Ships in placement order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// Ship at the given placement index.
    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index).and_then(|s| s.as_ref())
    }

    /// Working mask of ship cells not yet hit.
    #[inline]
    pub fn occupied(&self) -> Cells {
        self.occupied
    }

    /// Packed coordinates of the cells not yet hit.
    pub fn occupied_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.occupied.iter().map(|(r, c)| self.side.from_local(r, c))
    }

    /// Number of ship cells not yet hit.
    pub fn cells_afloat(&self) -> usize {
        self.occupied.len()
    }

    /// True once every ship cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Build a fleet from an exchange layout, enforcing every invariant.
    pub fn from_layout(side: Side, layout: &FleetLayout) -> Result<Fleet, FleetError> {
        let mut builder = FleetBuilder::new(side);
        for cells in layout.ships() {
            builder.place(Ship::from_cells(side, cells)?)?;
        }
        builder.finish()
    }

    /// Index of the first ship whose remaining segments contain `target`.
    pub(crate) fn find_remaining(&self, target: Coord) -> Option<usize> {
        self.ships
            .iter()
            .position(|s| s.map(|s| s.contains_remaining(target)).unwrap_or(false))
    }

    /// Remove a hit segment from the indexed ship and the occupied mask.
    pub(crate) fn record_hit(&mut self, index: usize, target: Coord) {
        if let Some(ship) = self.ships.get_mut(index).and_then(|s| s.as_mut()) {
            ship.record_hit(target);
        }
        if let Some((r, c)) = self.side.to_local(target) {
            let _ = self.occupied.remove(r, c);
        }
    }

    /// Restore a ship's working view from a snapshot.
    pub(crate) fn restore_remaining(&mut self, index: usize, raw: u128) {
        if let Some(ship) = self.ships.get_mut(index).and_then(|s| s.as_mut()) {
            ship.restore_remaining(raw);
        }
    }

    /// Recompute the occupied mask as the union of remaining segments.
    pub(crate) fn recompute_occupied(&mut self) {
        let mut occupied = Cells::new();
        for ship in self.ships.iter().flatten() {
            occupied |= Cells::from_raw(ship.remaining_raw());
        }
        self.occupied = occupied;
    }
}

/// Incremental fleet construction with per-length quotas and undo.
///
/// Mirrors manual placement: ships go down one at a time, each checked
/// against the quota for its length and the no-touch zone of everything
/// already placed; the last placement can be taken back.
#[derive(Debug, Clone)]
pub struct FleetBuilder {
    side: Side,
    ships: [Option<Ship>; NUM_SHIPS],
    placed: usize,
    counts: [u8; MAX_SHIP_LEN as usize],
    occupied: Cells,
    blocked: Cells,
}

impl FleetBuilder {
    pub fn new(side: Side) -> Self {
        FleetBuilder {
            side,
            ships: [None; NUM_SHIPS],
            placed: 0,
            counts: [0; MAX_SHIP_LEN as usize],
            occupied: Cells::new(),
            blocked: Cells::new(),
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Ships placed so far.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// How many more ships of `length` the roster still allows.
    pub fn quota_left(&self, length: u8) -> u8 {
        if length == 0 || length > MAX_SHIP_LEN {
            return 0;
        }
        ships_of_length(length).saturating_sub(self.counts[(length - 1) as usize])
    }

    /// Place one ship, checking side, quota, and the no-touch rule.
    pub fn place(&mut self, ship: Ship) -> Result<(), FleetError> {
        if ship.side() != self.side {
            return Err(FleetError::WrongSide);
        }
        let length = ship.length();
        if self.quota_left(length) == 0 {
            return Err(FleetError::QuotaExceeded { length });
        }
        if !ship.footprint().is_disjoint(&self.blocked) {
            return Err(FleetError::AdjacencyViolation);
        }
        self.ships[self.placed] = Some(ship);
        self.placed += 1;
        self.counts[(length - 1) as usize] += 1;
        self.occupied |= ship.footprint();
        self.blocked |= ship.footprint().dilated();
        Ok(())
    }

    /// Take back the most recently placed ship.
    pub fn undo(&mut self) -> Option<Ship> {
        if self.placed == 0 {
            return None;
        }
        self.placed -= 1;
        let ship = self.ships[self.placed].take()?;
        self.counts[(ship.length() - 1) as usize] -= 1;
        // neighborhoods of remaining ships may overlap the removed one,
        // so both masks are rebuilt rather than subtracted
        self.occupied = Cells::new();
        self.blocked = Cells::new();
        for s in self.ships.iter().flatten() {
            self.occupied |= s.footprint();
            self.blocked |= s.footprint().dilated();
        }
        Some(ship)
    }

    /// Finish construction; fails until all ten ships are down.
    pub fn finish(self) -> Result<Fleet, FleetError> {
        if self.placed != NUM_SHIPS {
            return Err(FleetError::IncompleteFleet);
        }
        Ok(Fleet {
            side: self.side,
            ships: self.ships,
            occupied: self.occupied,
        })
    }
}
