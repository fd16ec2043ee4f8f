#![cfg_attr(not(feature = "std"), no_std)]

mod cellset;
mod combat;
mod common;
mod config;
mod fleet;
mod generator;
mod grid;
mod layout;
#[cfg(feature = "std")]
mod logging;
mod session;
mod ship;
mod shotlog;

pub use cellset::{CellSet, CellSetError, Members};
pub use combat::resolve_shot;
pub use common::*;
pub use config::*;
pub use fleet::{Fleet, FleetBuilder};
pub use generator::generate_fleet;
pub use grid::{Coord, Side};
pub use layout::{FleetLayout, LayoutError, ShipCells};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use session::{
    FleetState, GameSession, LogState, Phase, PlayerId, SessionState, ShipState,
};
pub use ship::{Cells, Orientation, Ship};
pub use shotlog::ShotLog;
