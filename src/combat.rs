//! Shot resolution against a fleet.

use crate::common::ShotOutcome;
use crate::fleet::Fleet;
use crate::grid::{Coord, Side};
use crate::shotlog::ShotLog;

/// Resolve one fired coordinate against `fleet`, updating the grid's log.
///
/// The caller must have rejected out-of-grid and already-fired targets;
/// the resolver assumes a fresh in-bounds cell. Dotting rules:
///
/// - a miss dots the target itself;
/// - a hit on a ship with more segments left dots the four diagonal
///   neighbors (no ship can occupy them);
/// - a hit on a ship's last remaining segment dots all eight neighbors;
/// - a sunk ship additionally dots the cells just beyond its bow and
///   stern, sealing the footprint perimeter.
///
/// All dotting is clipped to the fleet's half of the coordinate space.
pub fn resolve_shot(target: Coord, fleet: &mut Fleet, log: &mut ShotLog) -> ShotOutcome {
    debug_assert_eq!(fleet.side(), log.side());

    let Some(index) = fleet.find_remaining(target) else {
        log.mark_dotted(target);
        return ShotOutcome::Miss;
    };

    let last_segment = fleet
        .ship(index)
        .map(|s| s.remaining_count() == 1)
        .unwrap_or(false);
    log.mark_hit(target);
    dot_neighbors(log, fleet.side(), target, !last_segment);
    fleet.record_hit(index, target);

    if let Some(ship) = fleet.ship(index) {
        if ship.is_sunk() {
            for end in ship.beyond_ends().into_iter().flatten() {
                log.mark_dotted(end);
            }
            log::debug!("ship of length {} sunk at {}", ship.length(), target);
            return ShotOutcome::Sunk;
        }
    }
    ShotOutcome::Hit
}

/// Dot the neighbors of `target`, diagonal-only or all eight, clipped to
/// `side`. Hit cells are left alone.
fn dot_neighbors(log: &mut ShotLog, side: Side, target: Coord, diagonal_only: bool) {
    for dc in -1..=1i8 {
        for dr in -1..=1i8 {
            if dc == 0 && dr == 0 {
                continue;
            }
            if diagonal_only && (dc == 0 || dr == 0) {
                continue;
            }
            if let Some(n) = target.step(dc, dr) {
                if side.contains(n) {
                    log.mark_dotted(n);
                }
            }
        }
    }
}
