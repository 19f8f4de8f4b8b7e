//! Errors raised by the core containers.
//!
//! These are precondition failures: the caller asked for a cell, row or
//! queue element that does not exist, or combined two boards whose shapes
//! don't line up. They are fatal to the operation that raised them.

use thiserror::Error;

/// Errors from [`Board`](super::Board) and [`TurnQueue`](super::TurnQueue).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} board")]
    OutOfRange {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },

    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("collection is empty")]
    EmptyCollection,
}

/// Convenience Result type for core operations.
pub type Result<T> = std::result::Result<T, EngineError>;
