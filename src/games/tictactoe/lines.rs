//! Line-scan win detection.

use tracing::instrument;

use crate::core::{Coord, GameState, PlayerSlot};

/// The player owning every cell of `line`, or `Unknown`.
fn line_owner(state: &GameState, mut line: impl Iterator<Item = Coord>) -> PlayerSlot {
    let Some(first) = line.next() else {
        return PlayerSlot::Unknown;
    };
    let owner = state.owner(first);
    if owner.is_seat() && line.all(|c| state.owner(c) == owner) {
        owner
    } else {
        PlayerSlot::Unknown
    }
}

/// Scan rows, then columns, then both diagonals for a completed line.
///
/// On a non-square board the diagonals run over the leading
/// `min(rows, cols)` square.
#[instrument(level = "trace", skip_all)]
pub fn winner(state: &GameState) -> PlayerSlot {
    let rows = state.rows() as i32;
    let cols = state.cols() as i32;

    for r in 0..rows {
        let owner = line_owner(state, (0..cols).map(|c| Coord::new(r, c)));
        if owner.is_seat() {
            return owner;
        }
    }

    for c in 0..cols {
        let owner = line_owner(state, (0..rows).map(|r| Coord::new(r, c)));
        if owner.is_seat() {
            return owner;
        }
    }

    let n = rows.min(cols);
    let owner = line_owner(state, (0..n).map(|i| Coord::new(i, i)));
    if owner.is_seat() {
        return owner;
    }
    line_owner(state, (0..n).map(|i| Coord::new(i, n - 1 - i)))
}
