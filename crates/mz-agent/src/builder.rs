//! Fluent builder for constructing `AgentStore` + `AgentMinds` in one step.
//!
//! # Usage
//!
//! ```rust
//! use mz_agent::{AgentStoreBuilder, Role};
//! use mz_core::Position;
//!
//! let (store, minds) = AgentStoreBuilder::new(/*seed=*/ 42)
//!     .agent(Role::Pursued, Position::new(1, 1))
//!     .agent(Role::Interceptor, Position::new(3, 3))
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(minds.len(), 2);
//! ```
//!
//! IDs are assigned in insertion order, which is also the order pursuers
//! act in within a tick.

use mz_core::Position;

use crate::{AgentMinds, AgentStore, Role};

/// Fluent builder for [`AgentStore`] + [`AgentMinds`].
pub struct AgentStoreBuilder {
    seed:   u64,
    roles:  Vec<Role>,
    starts: Vec<Position>,
}

impl AgentStoreBuilder {
    /// Create an empty roster using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { seed, roles: Vec::new(), starts: Vec::new() }
    }

    /// Append an agent that starts (and resets) at `start`.
    pub fn agent(mut self, role: Role, start: Position) -> Self {
        self.roles.push(role);
        self.starts.push(start);
        self
    }

    /// Number of agents added so far.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Construct `AgentStore` and `AgentMinds`.  Every agent starts on its
    /// start cell with no path and empty memory.
    pub fn build(self) -> (AgentStore, AgentMinds) {
        let count = self.roles.len();
        let store = AgentStore::new(self.roles, self.starts);
        let minds = AgentMinds::new(count, self.seed);
        (store, minds)
    }
}
