//! Read-only simulation state passed to every controller.

use std::collections::BTreeSet;

use mz_agent::AgentStore;
use mz_core::{EngineConfig, Position, Tick};
use mz_spatial::GridWorld;

/// A read-only snapshot of the world as one agent sees it.
///
/// The tick driver rebuilds the context before each agent decides, because
/// earlier agents' moves in the same tick have already been applied to the
/// grid and the store.
pub struct TickContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Maze with up-to-date occupancy markers.
    pub world: &'a GridWorld,

    /// Every agent's role, position, and committed path.
    pub agents: &'a AgentStore,

    /// Live objective cells.
    pub objectives: &'a BTreeSet<Position>,

    pub config: &'a EngineConfig,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(
        tick:       Tick,
        world:      &'a GridWorld,
        agents:     &'a AgentStore,
        objectives: &'a BTreeSet<Position>,
        config:     &'a EngineConfig,
    ) -> Self {
        Self { tick, world, agents, objectives, config }
    }
}
