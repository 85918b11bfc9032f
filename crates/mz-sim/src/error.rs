use thiserror::Error;

use mz_behavior::BehaviorError;
use mz_core::{AgentId, CoreError, Position};
use mz_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("level line {line}: {message}")]
    Level { line: usize, message: String },

    #[error("agent count mismatch: expected {expected}, got {got} ({what})")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("expected exactly one pursued agent, found {0}")]
    PursuedCount(usize),

    #[error("two agents start on {0}")]
    SharedStart(Position),

    #[error("objective {0} lies on a wall")]
    ObjectiveOnWall(Position),

    #[error("occupied cell {0} is not an agent start")]
    StrayOccupant(Position),

    #[error("{agent} cannot step from {from} to {to}: cells are not adjacent")]
    IllegalStep {
        agent: AgentId,
        from:  Position,
        to:    Position,
    },

    #[error("{agent} cannot reset: its start {start} is held by {by}")]
    StartBlocked {
        agent: AgentId,
        start: Position,
        by:    AgentId,
    },

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
