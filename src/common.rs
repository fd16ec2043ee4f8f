//! Shot outcomes and the error taxonomy shared across the engine.

use crate::cellset::CellSetError;
use core::fmt;

/// Result of resolving one fired coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// No ship segment at the target; the cell is dotted.
    Miss,
    /// A ship segment was removed but the ship still floats.
    Hit,
    /// The shot removed the ship's last segment.
    Sunk,
}

impl ShotOutcome {
    /// Hit and sunk keep the turn with the shooter; a miss passes it.
    #[inline]
    pub fn keeps_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors raised while validating or assembling a fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// Ship is empty, too long, crooked, gapped, duplicated, or outside
    /// its grid.
    InvalidShipShape,
    /// Ship overlaps or touches the 8-neighborhood of a placed ship.
    AdjacencyViolation,
    /// More ships of this length than the roster allows.
    QuotaExceeded { length: u8 },
    /// Fleet finished without the full ship roster.
    IncompleteFleet,
    /// Ship belongs to the other half of the coordinate space.
    WrongSide,
    /// Underlying cell-set error.
    CellSet(CellSetError),
}

impl From<CellSetError> for FleetError {
    fn from(err: CellSetError) -> Self {
        FleetError::CellSet(err)
    }
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::InvalidShipShape => write!(f, "ship shape is invalid"),
            FleetError::AdjacencyViolation => {
                write!(f, "ship touches or overlaps another ship")
            }
            FleetError::QuotaExceeded { length } => {
                write!(f, "too many ships of length {}", length)
            }
            FleetError::IncompleteFleet => write!(f, "fleet roster is incomplete"),
            FleetError::WrongSide => write!(f, "ship is on the wrong grid"),
            FleetError::CellSet(e) => write!(f, "cell-set error: {}", e),
        }
    }
}

/// Errors raised by random fleet generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Rejection sampling gave up placing a ship of this length.
    PlacementExhausted { length: u8 },
    /// Generated ship failed fleet validation.
    Fleet(FleetError),
}

impl From<FleetError> for GenerateError {
    fn from(err: FleetError) -> Self {
        GenerateError::Fleet(err)
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::PlacementExhausted { length } => {
                write!(f, "could not place a ship of length {}", length)
            }
            GenerateError::Fleet(e) => write!(f, "fleet error: {}", e),
        }
    }
}

/// Errors raised by session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Operation is only valid during setup.
    NotInSetup,
    /// Operation is only valid while the game is in progress.
    NotInProgress,
    /// A fleet is already placed for that player.
    FleetAlreadyPlaced,
    /// Both fleets must be placed before the game starts.
    FleetMissing,
    /// Fleet's grid does not match the player's.
    WrongSide,
    /// Target lies outside the opponent's grid.
    OutOfBounds,
    /// Target was already fired at; callers treat this as ignored input.
    AlreadyFired,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotInSetup => write!(f, "game is past setup"),
            SessionError::NotInProgress => write!(f, "game is not in progress"),
            SessionError::FleetAlreadyPlaced => write!(f, "fleet already placed"),
            SessionError::FleetMissing => write!(f, "both fleets must be placed"),
            SessionError::WrongSide => write!(f, "fleet is on the wrong grid"),
            SessionError::OutOfBounds => write!(f, "target is outside the opponent grid"),
            SessionError::AlreadyFired => write!(f, "target was already fired at"),
        }
    }
}
