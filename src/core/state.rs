//! Game state: a board of [`Cell`]s.
//!
//! A `GameState` is nothing more than `Board<Cell>`. Rule variants build
//! candidate states by cloning the current one and editing a couple of
//! cells; because the board is backed by a persistent vector the clone is
//! cheap and the original stays observable for comparison.
//!
//! ## Display
//!
//! One text row per board row. Empty cells print as `.` and owned cells as
//! the seat number. Kings print as `K` for Player1 and `k` for every other
//! seat:
//!
//! ```text
//! . 1 . 1
//! . . . .
//! 2 . K .
//! ```

use super::board::Board;
use super::cell::{Cell, Coord, Move, PieceType};
use super::error::Result;
use super::player::PlayerSlot;

/// The full logical content of a table's board.
pub type GameState = Board<Cell>;

impl Board<Cell> {
    /// Owner of the cell at `coord`, `Unknown` when empty or off-board.
    #[must_use]
    pub fn owner(&self, coord: Coord) -> PlayerSlot {
        self.get(coord).map_or(PlayerSlot::Unknown, |c| c.owner)
    }

    /// Piece type at `coord`, `NONE` when off-board.
    #[must_use]
    pub fn piece(&self, coord: Coord) -> PieceType {
        self.get(coord).map_or(PieceType::NONE, |c| c.piece)
    }

    /// True if `coord` is on the board and unowned.
    #[must_use]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::is_empty)
    }

    /// Coordinates of every cell owned by `slot`, row-major.
    pub fn cells_owned_by(&self, slot: PlayerSlot) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(move |(_, cell)| cell.owner == slot)
            .map(|(coord, _)| coord)
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells_owned_by(PlayerSlot::Unknown)
    }

    /// Number of cells owned by `slot`.
    #[must_use]
    pub fn count_owned(&self, slot: PlayerSlot) -> usize {
        self.cells_owned_by(slot).count()
    }

    /// True if at least one cell is empty.
    #[must_use]
    pub fn has_empty_cell(&self) -> bool {
        self.empty_cells().next().is_some()
    }

    /// The candidate successor for `mover` playing `mv`.
    ///
    /// `from` is cleared, then `to` receives `mover` with the piece type
    /// that stood on `from`. For a placement (`from == to`) on an empty
    /// cell that is a plain stone. Nothing is validated beyond bounds.
    pub fn with_move(&self, mv: Move, mover: PlayerSlot) -> Result<GameState> {
        let mut next = self.clone();
        let moved = next.set(mv.from, Cell::EMPTY)?;
        next.set(mv.to, Cell::new(mover, moved.piece))?;
        Ok(next)
    }
}

impl std::fmt::Display for Board<Cell> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (coord, cell) in self.iter() {
            if coord.col > 0 {
                f.write_str(" ")?;
            }
            match (cell.owner.index(), cell.piece.is_king()) {
                (None, _) => f.write_str(".")?,
                (Some(0), true) => f.write_str("K")?,
                (Some(_), true) => f.write_str("k")?,
                (Some(i), false) => write!(f, "{}", i + 1)?,
            }
            if coord.col as usize + 1 == self.cols() {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
