//! Agent families.

use std::fmt;

/// Which controller drives an agent.
///
/// The set is closed: every role maps to exactly one policy in
/// `mz-behavior`, dispatched by match rather than through a class hierarchy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// The pellet collector.  Exactly one per level.
    Pursued,
    /// Pursuer that keeps its heading and turns at random when blocked.
    Wanderer,
    /// Pursuer that plans paths to the pursued agent and its ambush cells.
    Interceptor,
}

impl Role {
    #[inline]
    pub fn is_pursuer(self) -> bool {
        !matches!(self, Role::Pursued)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Pursued     => "pursued",
            Role::Wanderer    => "wanderer",
            Role::Interceptor => "interceptor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
