//! The `Sim` struct and its tick loop.

use mz_agent::{AgentMinds, AgentStore, PerformanceSummary};
use mz_behavior::{Action, BehaviorModel, BehavioralState, Decision, RoleBehavior, TickContext};
use mz_core::{AgentId, EngineConfig, Position, Tick};
use mz_spatial::{GridWorld, Path};

use crate::objectives::{ObjectiveSet, ScoreReport, Scoreboard};
use crate::observer::{StepReport, TickSummary};
use crate::{SimError, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// One tick advances every agent exactly once, in a fixed order:
///
/// 1. **Pursued agent**: consumes an objective it is standing on, decides,
///    and has its step applied (objective consumed on arrival).
/// 2. **Pursuers** in ascending `AgentId` order, each deciding against a
///    grid that already reflects every earlier move of the tick.
/// 3. **Captures**: every pursuer that reported `Caught` is announced to the
///    observer; with `reset_on_capture` all agents return to their starts.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel = RoleBehavior> {
    /// Global configuration (seed, tick limit, scoring and fear constants).
    pub config: EngineConfig,

    /// The tick that the next call to [`advance_tick`](Self::advance_tick)
    /// will process.
    pub tick: Tick,

    /// Agent roles, starts, positions, and paths.  Only the tick driver
    /// writes here; move agents through [`reset`](Self::reset) so occupancy
    /// markers stay in sync.
    pub agents: AgentStore,

    /// Per-agent RNGs and memory, separated for the split-borrow pattern.
    pub minds: AgentMinds,

    /// The behavior model.  Called once per agent per tick.
    pub behavior: B,

    pub(crate) world:      GridWorld,
    pub(crate) objectives: ObjectiveSet,
    pub(crate) scoreboard: Scoreboard,
    pub(crate) pursued:    AgentId,
    pub(crate) last:       Vec<Option<Decision>>,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Run control ───────────────────────────────────────────────────────

    /// Run until every objective is consumed or this call has processed
    /// `config.max_ticks` ticks, whichever comes first.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let first = self.tick;
        while !self.objectives.is_empty() && self.tick.0 - first.0 < self.config.max_ticks {
            self.advance_tick(observer)?;
        }
        tracing::info!(
            tick = self.tick.0,
            score = self.scoreboard.score(),
            remaining = self.objectives.len(),
            "simulation finished"
        );
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `max_ticks` and the objective set).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.advance_tick(observer)?;
        }
        Ok(())
    }

    /// Process one tick.
    pub fn advance_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        let now = self.tick;
        observer.on_tick_start(now);

        let mut moved = 0;
        let mut captors = Vec::new();

        for agent in self.turn_order() {
            if agent == self.pursued {
                let here = self.agents.position_of(agent);
                self.consume_at(now, agent, here, observer);
            }

            let decision = {
                let ctx = TickContext::new(
                    now,
                    &self.world,
                    &self.agents,
                    self.objectives.as_set(),
                    &self.config,
                );
                self.behavior.decide(agent, &ctx, self.minds.get_mut(agent))
            };

            let report = self.apply(now, agent, &decision)?;
            if report.from != report.to {
                moved += 1;
                if agent == self.pursued {
                    self.consume_at(now, agent, report.to, observer);
                }
            }
            if decision.completion.is_caught() {
                captors.push(agent);
            }
            observer.on_step(&report);
            self.last[agent.index()] = Some(decision);
        }

        for &pursuer in &captors {
            tracing::info!(tick = now.0, %pursuer, pursued = %self.pursued, "pursued agent caught");
            self.scoreboard.record_capture();
            observer.on_capture(now, pursuer, self.pursued);
        }
        if !captors.is_empty() && self.config.reset_on_capture {
            self.reset_all()?;
        }

        let score = self.score();
        let summary = TickSummary {
            tick: now,
            moved,
            score: score.score,
            eaten: score.eaten,
            remaining: score.remaining,
            captures: captors.len(),
        };
        observer.on_tick_end(&summary);
        if now.is_on_interval(self.config.output_interval_ticks) {
            observer.on_snapshot(now, &self.agents, &self.last);
        }

        self.tick = now.next();
        Ok(summary)
    }

    // ── Resets ────────────────────────────────────────────────────────────

    /// Return `agent` to its start cell and clear its path, memory, and last
    /// decision together.  Fails without changing anything if another agent
    /// stands on the start cell.
    pub fn reset(&mut self, agent: AgentId) -> SimResult<()> {
        let start = self.agents.start[agent.index()];
        if let Some(by) = self.agents.agent_at(start).filter(|&other| other != agent) {
            return Err(SimError::StartBlocked { agent, start, by });
        }
        self.world.clear_occupied(self.agents.position_of(agent))?;
        self.forget(agent);
        self.world.mark_occupied(start)?;
        tracing::info!(tick = self.tick.0, %agent, %start, "agent reset");
        Ok(())
    }

    /// Reset every agent at once.  Starts are distinct, so this never
    /// blocks.
    pub fn reset_all(&mut self) -> SimResult<()> {
        let ids: Vec<AgentId> = self.agents.agent_ids().collect();
        for &agent in &ids {
            self.world.clear_occupied(self.agents.position_of(agent))?;
        }
        for &agent in &ids {
            self.forget(agent);
            self.world.mark_occupied(self.agents.position_of(agent))?;
        }
        tracing::info!(tick = self.tick.0, agents = ids.len(), "all agents reset");
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self, agent: AgentId) -> Position {
        self.agents.position_of(agent)
    }

    /// Path committed on the agent's last decision.
    #[inline]
    pub fn path(&self, agent: AgentId) -> Option<&Path> {
        self.agents.path_of(agent)
    }

    pub fn last_decision(&self, agent: AgentId) -> Option<&Decision> {
        self.last[agent.index()].as_ref()
    }

    /// State the agent classified itself into on its last decision.
    pub fn behavioral_state(&self, agent: AgentId) -> Option<BehavioralState> {
        self.last_decision(agent).map(|d| d.state)
    }

    pub fn last_action(&self, agent: AgentId) -> Option<Action> {
        self.last_decision(agent).map(|d| d.action)
    }

    pub fn performance_summary(&self, agent: AgentId) -> Option<PerformanceSummary> {
        self.minds.get(agent).memory.performance_summary()
    }

    pub fn pursued(&self) -> AgentId {
        self.pursued
    }

    pub fn score(&self) -> ScoreReport {
        self.scoreboard.report(self.objectives.len())
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// `true` once no objective remains.
    pub fn is_won(&self) -> bool {
        self.objectives.is_empty()
    }

    pub fn objectives(&self) -> &ObjectiveSet {
        &self.objectives
    }

    /// Live objectives, for collaborators that add or remove them between
    /// ticks.
    pub fn objectives_mut(&mut self) -> &mut ObjectiveSet {
        &mut self.objectives
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Pursued agent first, then pursuers in ascending ID order.
    fn turn_order(&self) -> Vec<AgentId> {
        std::iter::once(self.pursued).chain(self.agents.pursuers()).collect()
    }

    /// Write `decision` into the grid, the store, and the agent's memory.
    /// A rejected step leaves all three untouched.
    fn apply(&mut self, now: Tick, agent: AgentId, decision: &Decision) -> SimResult<StepReport> {
        let i = agent.index();
        let from = self.agents.position[i];
        let to = decision.step.unwrap_or(from);

        if to != from {
            if !from.is_adjacent(to) {
                return Err(SimError::IllegalStep { agent, from, to });
            }
            // Marking fails on anything but an open cell, before `from` is touched.
            self.world.mark_occupied(to)?;
            self.world.clear_occupied(from)?;
            self.agents.position[i] = to;
            self.minds.get_mut(agent).memory.record_move(from, to);
        }
        if let Some(score) = decision.score {
            self.minds.get_mut(agent).memory.record_score(score);
        }
        self.agents.path[i] = decision.path.clone();

        let role = self.agents.role[i];
        tracing::debug!(
            tick = now.0,
            %agent,
            role = role.as_str(),
            %from,
            %to,
            action = decision.action.as_str(),
            outcome = decision.outcome.as_str(),
            "step applied"
        );

        Ok(StepReport {
            tick: now,
            agent,
            role,
            from,
            to,
            state: decision.state,
            completion: decision.completion,
            action: decision.action,
            outcome: decision.outcome,
            path_len: decision.path.as_ref().map_or(0, Path::edge_count),
            score: decision.score,
        })
    }

    fn consume_at<O: SimObserver>(&mut self, now: Tick, agent: AgentId, pos: Position, observer: &mut O) {
        if !self.objectives.remove(pos) {
            return;
        }
        let report = self.scoreboard.eat(self.objectives.len());
        tracing::info!(
            tick = now.0,
            %agent,
            %pos,
            score = report.score,
            remaining = report.remaining,
            "objective consumed"
        );
        observer.on_objective_consumed(now, agent, pos);
    }

    /// Store and memory half of a reset; occupancy is the caller's job.
    fn forget(&mut self, agent: AgentId) {
        self.agents.reset(agent);
        self.minds.get_mut(agent).memory.clear();
        self.last[agent.index()] = None;
    }
}
