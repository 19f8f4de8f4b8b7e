//! Grid coordinates, moves and the atomic board cell.
//!
//! ## Coord
//!
//! Signed `(row, col)` pair. Signed so that relative offsets (bot probes,
//! jump midpoints, flood-fill neighbours) can step off the board and be
//! rejected by a bounds check instead of wrapping.
//!
//! ## Cell
//!
//! The logical content of one board slot: who owns it and which kind of
//! piece sits there. Presentation handles live elsewhere.

use serde::{Deserialize, Serialize};

use super::player::PlayerSlot;

/// A board coordinate. `(0, 0)` is the top-left cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate shifted by `(d_row, d_col)`.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// The midpoint between two coordinates (integer division).
    #[must_use]
    pub const fn midpoint(self, other: Coord) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    /// The four orthogonal neighbours, unchecked against any board.
    pub fn neighbours(self) -> [Coord; 4] {
        [
            self.offset(0, -1),
            self.offset(0, 1),
            self.offset(-1, 0),
            self.offset(1, 0),
        ]
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// A move request: relocate the piece at `from` onto `to`.
///
/// Placement games use `from == to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    /// Create a relocating move.
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Create a placement move onto `at`.
    #[must_use]
    pub const fn place(at: Coord) -> Self {
        Self { from: at, to: at }
    }

    /// True when the move only places a piece.
    #[must_use]
    pub fn is_placement(&self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_placement() {
            write!(f, "@{}", self.to)
        } else {
            write!(f, "{} -> {}", self.from, self.to)
        }
    }
}

/// Game-specific piece tag carried by a cell.
///
/// The engine never interprets it beyond equality; rule variants give it
/// meaning (Checkers uses `MAN`/`KING`, placement games leave `NONE`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceType(pub u8);

impl PieceType {
    /// No piece, or a piece without a distinguishing type.
    pub const NONE: PieceType = PieceType(0);
    /// An ordinary Checkers man.
    pub const MAN: PieceType = PieceType(1);
    /// A promoted Checkers piece.
    pub const KING: PieceType = PieceType(2);

    /// True for a promoted piece.
    #[must_use]
    pub fn is_king(self) -> bool {
        self == Self::KING
    }
}

/// The atomic board slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub owner: PlayerSlot,
    pub piece: PieceType,
}

impl Cell {
    /// An empty cell.
    pub const EMPTY: Cell = Cell {
        owner: PlayerSlot::Unknown,
        piece: PieceType::NONE,
    };

    /// A cell owned by `owner` holding `piece`.
    #[must_use]
    pub const fn new(owner: PlayerSlot, piece: PieceType) -> Self {
        Self { owner, piece }
    }

    /// A plain stone/mark owned by `owner`.
    #[must_use]
    pub const fn owned_by(owner: PlayerSlot) -> Self {
        Self {
            owner,
            piece: PieceType::NONE,
        }
    }

    /// True when no player owns the cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owner == PlayerSlot::Unknown
    }
}
