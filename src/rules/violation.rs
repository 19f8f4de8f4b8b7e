//! Reasons a rule variant refuses a candidate transition.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{BoardSize, Coord};

/// Why a candidate state was not an acceptable successor of the current one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleViolation {
    #[error("candidate board is {found}, expected {expected}")]
    DimensionMismatch {
        expected: BoardSize,
        found: BoardSize,
    },

    #[error("a move must be made by a seated player")]
    NoMover,

    #[error("cell {at} changed in a way the mover cannot cause")]
    IllegalChange { at: Coord },

    #[error("expected {expected} changed cells, found {found}")]
    WrongChangeCount { expected: usize, found: usize },

    #[error("destination {at} is already occupied")]
    OccupiedDestination { at: Coord },

    #[error("{from} -> {to} is not a diagonal step or jump")]
    NotDiagonal { from: Coord, to: Coord },

    #[error("{from} -> {to} moves backwards with an unpromoted piece")]
    WrongDirection { from: Coord, to: Coord },

    #[error("no enemy piece to jump at {at}")]
    NothingToCapture { at: Coord },

    #[error("placing at {at} would leave the group without liberties")]
    Suicide { at: Coord },
}
