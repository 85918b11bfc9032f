//! The result of one agent's decision for one tick.

use std::fmt;

use mz_core::Position;
use mz_spatial::Path;

use crate::Action;
use crate::state::{BehavioralState, Completion};

/// How a decision resolved.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Outcome {
    /// A step was committed.
    Moved,
    /// The rule table chose not to move, or avoidance found no safer cell.
    Stopped,
    /// Movement was wanted but every candidate path was absent.  Reported
    /// with [`Action::Stop`].
    Held,
    /// Candidates existed but every fallback step was taken.
    Blocked,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Moved   => "moved",
            Outcome::Stopped => "stopped",
            Outcome::Held    => "held",
            Outcome::Blocked => "blocked",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a controller decided for one agent this tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub state:      BehavioralState,
    pub completion: Completion,

    /// The action actually committed.
    pub action: Action,

    /// Cell to move to.  `Some` iff `outcome == Moved`; always a passable
    /// neighbour of the agent's cell at decision time.
    pub step: Option<Position>,

    /// The path the step was taken from, starting at the agent's cell.
    pub path: Option<Path>,

    /// Score of the winning candidate, when candidates were ranked.
    pub score: Option<i64>,

    pub outcome: Outcome,
}

impl Decision {
    /// A decision that leaves the agent where it is.
    pub fn stay(
        state:      BehavioralState,
        completion: Completion,
        action:     Action,
        outcome:    Outcome,
    ) -> Self {
        Self { state, completion, action, step: None, path: None, score: None, outcome }
    }

    /// A committed step.
    pub fn step(
        state:      BehavioralState,
        completion: Completion,
        action:     Action,
        step:       Position,
        path:       Option<Path>,
        score:      Option<i64>,
    ) -> Self {
        Self {
            state,
            completion,
            action,
            step: Some(step),
            path,
            score,
            outcome: Outcome::Moved,
        }
    }

    #[inline]
    pub fn moved(&self) -> bool {
        self.outcome == Outcome::Moved
    }
}
