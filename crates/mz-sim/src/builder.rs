//! Fluent builder for [`Sim`].

use std::collections::BTreeSet;

use mz_agent::{AgentMinds, AgentStore, AgentStoreBuilder, Role};
use mz_behavior::{BehaviorModel, RoleBehavior};
use mz_core::{EngineConfig, Position, Tick};
use mz_spatial::{CellKind, GridWorld};

use crate::level::Level;
use crate::objectives::{ObjectiveSet, Scoreboard};
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - `config`: engine configuration.
/// - `world`: the maze.  Agent start cells must be open.
/// - `agents` + `minds`: from [`AgentStoreBuilder::build`].
/// - `behavior`: the [`BehaviorModel`] implementation.
///
/// # Optional inputs
///
/// - `objectives`: live objective cells (default: none).
/// - `start_tick`: first tick to process (default: 0).
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::from_level(EngineConfig::default(), Level::classic()?)?
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:     EngineConfig,
    world:      GridWorld,
    agents:     AgentStore,
    minds:      AgentMinds,
    behavior:   B,
    objectives: ObjectiveSet,
    start_tick: Tick,
}

impl<B: BehaviorModel> SimBuilder<B> {
    pub fn new(
        config:   EngineConfig,
        world:    GridWorld,
        agents:   AgentStore,
        minds:    AgentMinds,
        behavior: B,
    ) -> Self {
        Self {
            config,
            world,
            agents,
            minds,
            behavior,
            objectives: ObjectiveSet::new(),
            start_tick: Tick::ZERO,
        }
    }

    /// Add objective cells.
    pub fn objectives(mut self, cells: impl IntoIterator<Item = Position>) -> Self {
        self.objectives.extend(cells);
        self
    }

    pub fn start_tick(mut self, tick: Tick) -> Self {
        self.start_tick = tick;
        self
    }

    /// Validate inputs, place every agent's occupancy marker, and return the
    /// configured [`Sim`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Core`] if the configuration is inconsistent.
    /// - [`SimError::AgentCountMismatch`] if `minds` does not match `agents`.
    /// - [`SimError::PursuedCount`] unless exactly one agent is pursued.
    /// - [`SimError::SharedStart`] if two agents start on the same cell.
    /// - [`SimError::Spatial`] if a start is out of bounds or a wall.
    /// - [`SimError::StrayOccupant`] if the world marks a cell occupied that
    ///   no agent starts on.
    /// - [`SimError::ObjectiveOnWall`] / [`SimError::Spatial`] for objectives
    ///   on walls or outside the grid.
    pub fn build(mut self) -> SimResult<Sim<B>> {
        self.config.validate()?;

        let n = self.agents.count;
        if self.minds.len() != n {
            return Err(SimError::AgentCountMismatch {
                expected: n,
                got:      self.minds.len(),
                what:     "minds",
            });
        }

        let pursued_ids: Vec<_> = self
            .agents
            .agent_ids()
            .filter(|&a| self.agents.role_of(a) == Role::Pursued)
            .collect();
        let &[pursued] = pursued_ids.as_slice() else {
            return Err(SimError::PursuedCount(pursued_ids.len()));
        };

        let mut seen = BTreeSet::new();
        for &start in &self.agents.start {
            if !seen.insert(start) {
                return Err(SimError::SharedStart(start));
            }
            // Cells already marked by the level count as this agent's marker.
            if !self.world.is_occupied(start) {
                self.world.mark_occupied(start)?;
            }
        }
        let stray = self
            .world
            .floor_cells()
            .find(|&c| self.world.is_occupied(c) && !seen.contains(&c));
        if let Some(stray) = stray {
            return Err(SimError::StrayOccupant(stray));
        }

        for pos in self.objectives.iter() {
            if self.world.cell_at(pos)? == CellKind::Wall {
                return Err(SimError::ObjectiveOnWall(pos));
            }
        }

        tracing::debug!(
            agents = n,
            objectives = self.objectives.len(),
            width = self.world.width(),
            height = self.world.height(),
            "simulation built"
        );

        Ok(Sim {
            scoreboard: Scoreboard::new(self.config.pellet_value),
            config:     self.config,
            tick:       self.start_tick,
            agents:     self.agents,
            minds:      self.minds,
            behavior:   self.behavior,
            world:      self.world,
            objectives: self.objectives,
            pursued,
            last:       vec![None; n],
        })
    }
}

impl SimBuilder<RoleBehavior> {
    /// Builder for a loaded level driven by the canonical role controllers.
    /// Agent RNGs are seeded from `config.seed`.
    pub fn from_level(config: EngineConfig, level: Level) -> SimResult<Self> {
        let behavior = RoleBehavior::new(&config)?;
        let (agents, minds) = level
            .agents
            .iter()
            .fold(AgentStoreBuilder::new(config.seed), |b, &(role, start)| b.agent(role, start))
            .build();
        Ok(SimBuilder::new(config, level.world, agents, minds, behavior).objectives(level.objectives))
    }
}
