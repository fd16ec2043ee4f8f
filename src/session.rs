//! Per-game session: phases, turn ownership, win detection.
//!
//! The session owns both fleets and both shot logs and is the only thing
//! that mutates them, one resolved shot at a time. Rendering collaborators
//! read the exposed views between shots.

use crate::combat::resolve_shot;
use crate::common::{FleetError, SessionError, ShotOutcome};
use crate::config::NUM_SHIPS;
use crate::fleet::{Fleet, FleetBuilder};
use crate::grid::{Coord, Side};
use crate::ship::{Orientation, Ship};
use crate::shotlog::ShotLog;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    #[inline]
    pub const fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// The grid this player's fleet lives on.
    #[inline]
    pub const fn side(self) -> Side {
        match self {
            PlayerId::One => Side::A,
            PlayerId::Two => Side::B,
        }
    }

    #[inline]
    const fn idx(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Fleets are being placed.
    Setup,
    /// Shots are being exchanged.
    InProgress,
    /// Terminal. `winner` is `None` when the game was aborted.
    Finished { winner: Option<PlayerId> },
}

/// A full game between two players.
pub struct GameSession {
    fleets: [Option<Fleet>; 2],
    logs: [ShotLog; 2],
    turn: PlayerId,
    phase: Phase,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            fleets: [None, None],
            logs: [ShotLog::new(Side::A), ShotLog::new(Side::B)],
            turn: PlayerId::One,
            phase: Phase::Setup,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player to fire next. Meaningful only while in progress.
    #[inline]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Finished { winner } => winner,
            _ => None,
        }
    }

    pub fn fleet(&self, player: PlayerId) -> Option<&Fleet> {
        self.fleets[player.idx()].as_ref()
    }

    /// Shots received by this player's grid.
    pub fn shot_log(&self, player: PlayerId) -> &ShotLog {
        &self.logs[player.idx()]
    }

    /// Accept a validated fleet during setup.
    pub fn place_fleet(&mut self, player: PlayerId, fleet: Fleet) -> Result<(), SessionError> {
        if self.phase != Phase::Setup {
            return Err(SessionError::NotInSetup);
        }
        if fleet.side() != player.side() {
            return Err(SessionError::WrongSide);
        }
        if self.fleets[player.idx()].is_some() {
            return Err(SessionError::FleetAlreadyPlaced);
        }
        self.fleets[player.idx()] = Some(fleet);
        Ok(())
    }

    /// Move to `InProgress` once both fleets are placed.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Setup {
            return Err(SessionError::NotInSetup);
        }
        if self.fleets.iter().any(|f| f.is_none()) {
            return Err(SessionError::FleetMissing);
        }
        self.phase = Phase::InProgress;
        log::debug!("game started, player one to fire");
        Ok(())
    }

    /// Resolve one shot by the player whose turn it is.
    ///
    /// A miss passes the turn; a hit or sink keeps it. Already-fired
    /// targets are rejected before resolution and change nothing; callers
    /// treat that error as ignored input.
    pub fn fire(&mut self, target: Coord) -> Result<ShotOutcome, SessionError> {
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }
        let shooter = self.turn;
        let defender = shooter.other();
        if !defender.side().contains(target) {
            return Err(SessionError::OutOfBounds);
        }
        if self.logs[defender.idx()].already_fired(target) {
            return Err(SessionError::AlreadyFired);
        }
        let Some(fleet) = self.fleets[defender.idx()].as_mut() else {
            return Err(SessionError::FleetMissing);
        };

        let outcome = resolve_shot(target, fleet, &mut self.logs[defender.idx()]);
        log::debug!("{:?} fired at {}: {:?}", shooter, target, outcome);

        if fleet.is_sunk() {
            self.phase = Phase::Finished {
                winner: Some(shooter),
            };
            log::debug!("{:?} wins", shooter);
        } else if !outcome.keeps_turn() {
            self.turn = defender;
        }
        Ok(outcome)
    }

    /// External quit signal; terminal from any phase.
    pub fn abort(&mut self) {
        if !matches!(self.phase, Phase::Finished { .. }) {
            self.phase = Phase::Finished { winner: None };
            log::debug!("game aborted");
        }
    }

    /// Serializable snapshot of the current state.
    pub fn state(&self) -> SessionState {
        let fleets = [PlayerId::One, PlayerId::Two].map(|p| {
            self.fleets[p.idx()].as_ref().map(|fleet| FleetState {
                side: fleet.side(),
                ships: core::array::from_fn(|i| {
                    fleet.ship(i).map(|s| ShipState {
                        bow: s.bow(),
                        orientation: s.orientation(),
                        length: s.length(),
                        remaining: s.remaining_raw(),
                    })
                }),
            })
        });
        let logs = [PlayerId::One, PlayerId::Two].map(|p| {
            let (dotted, hit) = self.logs[p.idx()].raw();
            LogState {
                side: p.side(),
                dotted,
                hit,
            }
        });
        SessionState {
            fleets,
            logs,
            turn: self.turn,
            phase: self.phase,
        }
    }

    /// Restore a session from a snapshot, revalidating fleet invariants.
    pub fn from_state(state: &SessionState) -> Result<Self, FleetError> {
        let mut fleets: [Option<Fleet>; 2] = [None, None];
        for (slot, fs) in fleets.iter_mut().zip(state.fleets.iter()) {
            let Some(fs) = fs else { continue };
            let mut builder = FleetBuilder::new(fs.side);
            for ship in fs.ships.iter().flatten() {
                builder.place(Ship::new(fs.side, ship.bow, ship.orientation, ship.length)?)?;
            }
            let mut fleet = builder.finish()?;
            for (i, ship) in fs.ships.iter().enumerate() {
                if let Some(ship) = ship {
                    fleet.restore_remaining(i, ship.remaining);
                }
            }
            fleet.recompute_occupied();
            *slot = Some(fleet);
        }
        let logs = [
            ShotLog::from_raw(state.logs[0].side, state.logs[0].dotted, state.logs[0].hit),
            ShotLog::from_raw(state.logs[1].side, state.logs[1].dotted, state.logs[1].hit),
        ];
        Ok(GameSession {
            fleets,
            logs,
            turn: state.turn,
            phase: state.phase,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable mirror of a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub fleets: [Option<FleetState>; 2],
    pub logs: [LogState; 2],
    pub turn: PlayerId,
    pub phase: Phase,
}

/// Snapshot of one fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetState {
    pub side: Side,
    pub ships: [Option<ShipState>; NUM_SHIPS],
}

/// Snapshot of one ship: canonical placement plus the remaining mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipState {
    pub bow: Coord,
    pub orientation: Orientation,
    pub length: u8,
    pub remaining: u128,
}

/// Snapshot of one grid's shot log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LogState {
    pub side: Side,
    pub dotted: u128,
    pub hit: u128,
}
