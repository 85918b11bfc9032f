//! Shared agent state: `AgentStore`.
//!
//! # Why two structs?
//!
//! A controller needs `&mut AgentMind` (its own RNG and memory) while it
//! reads every other agent's position from the store.  Keeping minds in a
//! separate [`AgentMinds`](crate::AgentMinds) lets the tick driver hand out
//! both borrows at once:
//!
//! ```ignore
//! // mz-sim tick loop (simplified):
//! let ctx = TickContext::new(tick, &world, &store, &objectives, &config);
//! let decision = behavior.decide(agent, &ctx, minds.get_mut(agent));
//! ```
//!
//! Only the tick driver writes to the store, between two agents' decisions.

use mz_core::{AgentId, Position};
use mz_spatial::Path;

use crate::Role;

/// Structure-of-Arrays storage for all agent state visible to other agents.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];
/// ```
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Controller family.  Fixed for the life of the level.
    pub role: Vec<Role>,

    /// Cell the agent returns to on reset.
    pub start: Vec<Position>,

    /// Current cell.
    pub position: Vec<Position>,

    /// Path committed on the last decision, starting at the cell the agent
    /// stood on when it planned.  `None` before the first planned move and
    /// after a reset.
    pub path: Vec<Option<Path>>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn role_of(&self, agent: AgentId) -> Role {
        self.role[agent.index()]
    }

    #[inline]
    pub fn position_of(&self, agent: AgentId) -> Position {
        self.position[agent.index()]
    }

    #[inline]
    pub fn path_of(&self, agent: AgentId) -> Option<&Path> {
        self.path[agent.index()].as_ref()
    }

    /// The first agent with [`Role::Pursued`].
    pub fn pursued(&self) -> Option<AgentId> {
        self.agent_ids().find(|&a| self.role_of(a) == Role::Pursued)
    }

    /// Pursuers in ascending ID order.
    pub fn pursuers(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(|&a| self.role_of(a).is_pursuer())
    }

    /// Positions of every agent except `agent`.
    pub fn others(&self, agent: AgentId) -> impl Iterator<Item = (AgentId, Position)> + '_ {
        self.agent_ids()
            .filter(move |&a| a != agent)
            .map(|a| (a, self.position_of(a)))
    }

    /// The agent standing on `pos`, if any.
    pub fn agent_at(&self, pos: Position) -> Option<AgentId> {
        self.agent_ids().find(|&a| self.position_of(a) == pos)
    }

    /// Put `agent` back on its start cell and forget its path.  Occupancy
    /// markers are the caller's job.
    pub fn reset(&mut self, agent: AgentId) {
        let i = agent.index();
        self.position[i] = self.start[i];
        self.path[i] = None;
    }

    pub(crate) fn new(roles: Vec<Role>, starts: Vec<Position>) -> Self {
        let count = roles.len();
        Self {
            count,
            role: roles,
            position: starts.clone(),
            start: starts,
            path: vec![None; count],
        }
    }
}
