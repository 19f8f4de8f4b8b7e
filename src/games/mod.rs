//! Rule variants shipped with the engine.
//!
//! - `tictactoe`: placement, line-scan win detection
//! - `checkers`: relocation, diagonal capture and promotion
//! - `go`: placement, flood-fill liberty and capture

pub mod checkers;
pub mod go;
pub mod tictactoe;

pub use checkers::CheckersRules;
pub use go::GoRules;
pub use tictactoe::TicTacToeRules;
