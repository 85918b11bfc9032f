//! Discrete states produced by the classifiers.
//!
//! Each family has a behavioral axis (what the surroundings look like) and a
//! completion axis (whether the episodic objective is met).  Both axes
//! implement [`StateSpace`], which lists every variant so rule tables can be
//! checked for completeness.

use std::fmt;

/// A finite, enumerable state axis.
pub trait StateSpace: Copy + Eq + fmt::Debug + 'static {
    /// Every variant, in a fixed order.
    const ALL: &'static [Self];

    /// Position of `self` in [`ALL`](Self::ALL).
    fn ordinal(self) -> usize;

    fn as_str(self) -> &'static str;
}

/// Implement `StateSpace` + `Display` for a fieldless enum.
macro_rules! state_space {
    ($(#[$attr:meta])* $vis:vis enum $name:ident { $($(#[$vattr:meta])* $variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $($(#[$vattr])* $variant),+
        }

        impl StateSpace for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            #[inline]
            fn ordinal(self) -> usize {
                self as usize
            }

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ── Pursued family ────────────────────────────────────────────────────────────

state_space! {
    /// Surroundings of the pursued agent.
    pub enum PursuedState {
        /// No other agent in the perception window.
        Clear => "clear",
        /// Another agent inside the perception window.
        NearAgent => "near_agent",
        /// No passable neighbour.
        Blocked => "blocked",
    }
}

state_space! {
    /// Whether the pursued agent still has objectives to collect.
    pub enum CompletionState {
        Acting => "acting",
        Goal => "goal",
    }
}

// ── Pursuer family ────────────────────────────────────────────────────────────

state_space! {
    /// Fear level of a pursuer.
    pub enum PursuerState {
        Normal => "normal",
        Scared => "scared",
    }
}

state_space! {
    /// Whether a pursuer has cornered the pursued agent.
    pub enum ChaseState {
        Chasing => "chasing",
        Caught => "caught",
    }
}

// ── Family-erased labels ──────────────────────────────────────────────────────

/// Behavioral state of any agent, for reporting.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BehavioralState {
    Pursued(PursuedState),
    Pursuer(PursuerState),
}

impl BehavioralState {
    pub fn as_str(self) -> &'static str {
        match self {
            BehavioralState::Pursued(s) => s.as_str(),
            BehavioralState::Pursuer(s) => s.as_str(),
        }
    }
}

impl fmt::Display for BehavioralState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion state of any agent, for reporting and capture detection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Completion {
    Pursued(CompletionState),
    Pursuer(ChaseState),
}

impl Completion {
    /// `true` for a pursuer that has cornered the pursued agent.
    #[inline]
    pub fn is_caught(self) -> bool {
        self == Completion::Pursuer(ChaseState::Caught)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Completion::Pursued(s) => s.as_str(),
            Completion::Pursuer(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
