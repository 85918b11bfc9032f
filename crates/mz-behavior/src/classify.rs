//! State classifiers: total, deterministic functions from a [`Percept`]
//! (plus, for fear, the agent's memory) to a discrete state.

use std::collections::BTreeSet;

use mz_agent::AgentMemory;
use mz_core::{Position, PursuerConfig};

use crate::Percept;
use crate::state::{ChaseState, CompletionState, PursuedState, PursuerState};

/// Blocked if boxed in, else NearAgent if anyone is in the window, else
/// Clear.
pub fn classify_pursued(percept: &Percept) -> PursuedState {
    if percept.open_neighbors() == 0 {
        PursuedState::Blocked
    } else if percept.agents_in_window > 0 {
        PursuedState::NearAgent
    } else {
        PursuedState::Clear
    }
}

/// Goal once nothing is left to collect.
pub fn classify_completion(objectives: &BTreeSet<Position>) -> CompletionState {
    if objectives.is_empty() {
        CompletionState::Goal
    } else {
        CompletionState::Acting
    }
}

/// Caught when the pursued agent is adjacent and has nowhere to go.
pub fn classify_chase(percept: &Percept) -> ChaseState {
    if percept.pursued_distance() == Some(1) && percept.pursued_cornered {
        ChaseState::Caught
    } else {
        ChaseState::Chasing
    }
}

// ── FearMeter ─────────────────────────────────────────────────────────────────

/// Fear counter with hysteresis.
///
/// Each tick the counter moves one step: up (to `cap`) while the pursued
/// agent is close, down (to 0) otherwise.  A calm pursuer turns Scared when
/// the counter reaches `threshold`; a scared one calms only once the counter
/// falls below `exit_below`.  With the defaults (3, 1, 5):
///
/// ```text
/// close:   T  T  T  F  F  F
/// counter: 1  2  3  2  1  0
/// state:   N  N  S  S  S  N
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FearMeter {
    pub threshold:  u8,
    pub exit_below: u8,
    pub cap:        u8,
}

impl FearMeter {
    pub fn from_config(cfg: &PursuerConfig) -> Self {
        Self {
            threshold:  cfg.scare_threshold,
            exit_below: cfg.scare_exit_below,
            cap:        cfg.scare_cap,
        }
    }

    /// Advance the counter stored in `memory` by one tick and return the
    /// resulting state.
    pub fn update(&self, memory: &mut AgentMemory, close: bool) -> PursuerState {
        memory.fear = if close {
            memory.fear.saturating_add(1).min(self.cap)
        } else {
            memory.fear.saturating_sub(1)
        };
        memory.scared = if memory.scared {
            memory.fear >= self.exit_below
        } else {
            memory.fear >= self.threshold
        };
        Self::state_of(memory)
    }

    /// The state currently latched in `memory`, without advancing.
    pub fn state_of(memory: &AgentMemory) -> PursuerState {
        if memory.scared {
            PursuerState::Scared
        } else {
            PursuerState::Normal
        }
    }
}
