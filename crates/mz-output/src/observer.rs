//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use mz_agent::AgentStore;
use mz_behavior::Decision;
use mz_core::Tick;
use mz_sim::{SimObserver, TickSummary};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

/// One snapshot row per agent, labelled from its latest decision.
pub fn snapshot_rows(tick: Tick, agents: &AgentStore, decisions: &[Option<Decision>]) -> Vec<AgentSnapshotRow> {
    agents
        .agent_ids()
        .map(|agent| {
            let pos = agents.position_of(agent);
            let decision = decisions.get(agent.index()).and_then(Option::as_ref);
            AgentSnapshotRow {
                tick:     tick.0,
                agent_id: agent.0,
                role:     agents.role_of(agent).as_str(),
                x:        pos.x,
                y:        pos.y,
                state:    decision.map_or("", |d| d.state.as_str()),
                action:   decision.map_or("", |d| d.action.as_str()),
                outcome:  decision.map_or("", |d| d.outcome.as_str()),
                path_len: agents.path_of(agent).map_or(0, |p| p.edge_count() as u32),
                score:    decision.and_then(|d| d.score),
            }
        })
        .collect()
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:      summary.tick.0,
            moved:     summary.moved as u64,
            score:     summary.score,
            eaten:     summary.eaten as u64,
            remaining: summary.remaining as u64,
            captures:  summary.captures as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, decisions: &[Option<Decision>]) {
        let rows = snapshot_rows(tick, agents, decisions);
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
