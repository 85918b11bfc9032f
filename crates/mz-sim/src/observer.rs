//! Simulation observer trait for progress reporting and data collection.

use mz_agent::{AgentStore, Role};
use mz_behavior::{Action, BehavioralState, Completion, Decision, Outcome};
use mz_core::{AgentId, Position, Tick};

// ── Reports ───────────────────────────────────────────────────────────────────

/// One agent's committed decision, as applied by the tick driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub tick:       Tick,
    pub agent:      AgentId,
    pub role:       Role,
    pub from:       Position,
    pub to:         Position,
    pub state:      BehavioralState,
    pub completion: Completion,
    pub action:     Action,
    pub outcome:    Outcome,
    /// Edges in the committed path; 0 when the agent stayed.
    pub path_len:   usize,
    pub score:      Option<i64>,
}

/// End-of-tick totals.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:      Tick,
    /// Agents that changed cell this tick.
    pub moved:     usize,
    pub score:     u64,
    pub eaten:     usize,
    pub remaining: usize,
    /// Pursuers that reported `Caught` this tick.
    pub captures:  usize,
}

// ── SimObserver ───────────────────────────────────────────────────────────────

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.is_on_interval(self.interval) {
///             println!("{}: {} pellets left", summary.tick, summary.remaining);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent decides.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each agent's decision has been applied.
    fn on_step(&mut self, _report: &StepReport) {}

    /// Called when the pursued agent consumes the objective at `pos`.
    fn on_objective_consumed(&mut self, _tick: Tick, _agent: AgentId, _pos: Position) {}

    /// Called once per pursuer that caught the pursued agent this tick,
    /// before any reset.
    fn on_capture(&mut self, _tick: Tick, _pursuer: AgentId, _pursued: AgentId) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with the agent store and each agent's latest decision,
    /// indexed by `AgentId`.
    fn on_snapshot(
        &mut self,
        _tick:      Tick,
        _agents:    &AgentStore,
        _decisions: &[Option<Decision>],
    ) {}

    /// Called once after [`Sim::run`][crate::Sim::run] stops.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
