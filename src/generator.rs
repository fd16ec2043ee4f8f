//! Procedural fleet placement.
//!
//! Ships are placed longest first by rejection sampling: seed a random
//! cell, grow along a random axis in a random direction, bounce off the
//! grid edge back across the seed, and accept only candidates wholly
//! inside the availability mask. Accepted ships carve themselves and
//! their 8-neighborhood out of the mask, which enforces the no-touch
//! rule for everything placed later.

use crate::common::GenerateError;
use crate::config::{BOARD_SIZE, MAX_PLACE_ATTEMPTS, SHIP_LENGTHS};
use crate::fleet::{Fleet, FleetBuilder};
use crate::grid::Side;
use crate::ship::{Cells, Orientation, Ship};
use rand::Rng;

/// Generate a rule-valid random fleet for `side`.
pub fn generate_fleet<R: Rng + ?Sized>(rng: &mut R, side: Side) -> Result<Fleet, GenerateError> {
    let mut builder = FleetBuilder::new(side);
    let mut available = Cells::full();
    for &length in SHIP_LENGTHS.iter() {
        let ship = place_ship(rng, side, length, &available)?;
        available -= ship.footprint().dilated();
        builder.place(ship)?;
    }
    Ok(builder.finish()?)
}

/// One ship by bounded rejection sampling against the availability mask.
fn place_ship<R: Rng + ?Sized>(
    rng: &mut R,
    side: Side,
    length: u8,
    available: &Cells,
) -> Result<Ship, GenerateError> {
    const N: usize = BOARD_SIZE as usize;
    for _ in 0..MAX_PLACE_ATTEMPTS {
        if available.is_empty() {
            break;
        }
        let pick = rng.random_range(0..available.len());
        let Some((seed_row, seed_col)) = available.iter().nth(pick) else {
            break;
        };
        let horizontal = rng.random::<bool>();
        let mut dir: i8 = if rng.random::<bool>() { 1 } else { -1 };

        // grow an interval through the seed along the chosen axis,
        // reversing across the seed when the grid edge is reached
        let start = if horizontal { seed_col } else { seed_row };
        let mut lo = start;
        let mut hi = start;
        for _ in 1..length {
            if dir > 0 {
                if hi + 1 < N {
                    hi += 1;
                } else {
                    dir = -1;
                    lo -= 1;
                }
            } else if lo > 0 {
                lo -= 1;
            } else {
                dir = 1;
                hi += 1;
            }
        }

        let (bow, orientation) = if horizontal {
            (side.from_local(seed_row, lo), Orientation::Horizontal)
        } else {
            (side.from_local(lo, seed_col), Orientation::Vertical)
        };
        let ship = Ship::new(side, bow, orientation, length)?;
        if ship.footprint().is_subset(available) {
            return Ok(ship);
        }
    }
    log::warn!(
        "fleet generation exhausted {} attempts for a length-{} ship",
        MAX_PLACE_ATTEMPTS,
        length
    );
    Err(GenerateError::PlacementExhausted { length })
}
