//! Tic-Tac-Toe on an `N x N` grid.
//!
//! Two players alternately claim empty cells. A player owning every cell
//! of a row, a column or one of the two main diagonals wins.
//!
//! The terminal check is a one-ply lookahead: it short-circuits to "not
//! over" as soon as some empty cell would hand either player an immediate
//! win. It never searches deeper, so a dead-drawn board with empty cells
//! left is still reported as open.

mod lines;
mod rules;

pub use lines::winner;
pub use rules::TicTacToeRules;
