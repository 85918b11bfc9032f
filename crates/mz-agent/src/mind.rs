//! Private per-agent state: RNG plus the memory controllers carry between
//! ticks.
//!
//! Memory is family-agnostic: the pursued agent uses `visited`, `previous`
//! and `performance`; pursuers use the fear counter and `heading`.  Unused
//! fields stay at their defaults.

use rustc_hash::FxHashSet;

use mz_core::{AgentId, AgentRng, Direction, Position};

// ── AgentMemory ───────────────────────────────────────────────────────────────

/// Everything an agent remembers between ticks.
#[derive(Clone, Debug, Default)]
pub struct AgentMemory {
    /// Cells this agent has stood on since its last reset.
    pub visited: FxHashSet<Position>,

    /// The cell the agent left on its most recent move.
    pub previous: Option<Position>,

    /// Fear counter, clamped to `[0, scare_cap]` by the classifier.
    pub fear: u8,

    /// Latched Scared flag for the hysteresis rule.
    pub scared: bool,

    /// Persisted wander heading.
    pub heading: Option<Direction>,

    /// Winning score of every decision that ranked candidates.
    pub performance: Vec<i64>,
}

impl AgentMemory {
    /// Note a move from `from` to `to`.  Both cells count as visited.
    pub fn record_move(&mut self, from: Position, to: Position) {
        self.visited.insert(from);
        self.visited.insert(to);
        self.previous = Some(from);
    }

    pub fn record_score(&mut self, score: i64) {
        self.performance.push(score);
    }

    /// Average of the recorded scores, `None` before the first one.
    pub fn performance_summary(&self) -> Option<PerformanceSummary> {
        if self.performance.is_empty() {
            return None;
        }
        let total: i64 = self.performance.iter().sum();
        Some(PerformanceSummary {
            decisions: self.performance.len(),
            average:   total as f64 / self.performance.len() as f64,
            best:      self.performance.iter().copied().max().unwrap_or_default(),
        })
    }

    /// Forget everything.  Part of the atomic agent reset.
    pub fn clear(&mut self) {
        *self = AgentMemory::default();
    }
}

/// Aggregate of an agent's recorded decision scores.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PerformanceSummary {
    pub decisions: usize,
    pub average:   f64,
    pub best:      i64,
}

// ── AgentMind / AgentMinds ────────────────────────────────────────────────────

/// One agent's RNG and memory.
pub struct AgentMind {
    pub rng:    AgentRng,
    pub memory: AgentMemory,
}

/// Per-agent minds, indexed by `AgentId`, kept apart from
/// [`AgentStore`](crate::AgentStore) so a controller can mutate its own mind
/// while reading the shared store.
pub struct AgentMinds {
    pub inner: Vec<AgentMind>,
}

impl AgentMinds {
    /// Allocate `count` minds with RNGs seeded from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentMind {
                rng:    AgentRng::new(global_seed, AgentId(i)),
                memory: AgentMemory::default(),
            })
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> &AgentMind {
        &self.inner[agent.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentMind {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
