//! Spatial-subsystem error type.
//!
//! An unreachable goal is not an error: searches return `None`.  These
//! variants are reserved for invariant violations: out-of-grid positions,
//! malformed maze input, and occupancy writes to the wrong kind of cell.

use thiserror::Error;

use mz_core::Position;

/// Errors produced by `mz-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("position {pos} is outside the {width}x{height} grid")]
    OutOfBounds { pos: Position, width: usize, height: usize },

    #[error("maze has no cells")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("unknown cell code {code} at {pos}")]
    UnknownCode { code: u8, pos: Position },

    #[error("cell {0} is a wall and cannot hold an agent")]
    Wall(Position),

    #[error("cell {0} is already occupied")]
    AlreadyOccupied(Position),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
