//! Candidate path scoring.
//!
//! A scorer maps each candidate (possibly absent) to a parallel score list.
//! Absent candidates score `None` and never win.  A score depends only on
//! the path and the agent's memory, never on where the path sits in the
//! candidate list; ties go to the earlier candidate.
//!
//! | Objective    | Score                                    |
//! |--------------|------------------------------------------|
//! | `Efficiency` | `base − len − revisit·R − backtrack·B`   |
//! | `Shortest`   | `−len`                                   |
//! | `Longest`    | `len`                                    |
//!
//! `len` is the edge count, `R` the number of path steps already in the
//! visited set, and `B` is 1 if the path passes through the cell the agent
//! just left.

use mz_agent::AgentMemory;
use mz_core::PursuedConfig;
use mz_spatial::Path;

/// What a scorer rewards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Objective {
    /// Pursued agent: short paths through fresh cells, no doubling back.
    Efficiency {
        base:              i64,
        revisit_penalty:   i64,
        backtrack_penalty: i64,
    },
    /// Chasing pursuer.
    Shortest,
    /// Fleeing pursuer: head for the goal furthest away by route.
    Longest,
}

impl Objective {
    pub fn efficiency(cfg: &PursuedConfig) -> Self {
        Objective::Efficiency {
            base:              cfg.base_score,
            revisit_penalty:   cfg.revisit_penalty,
            backtrack_penalty: cfg.backtrack_penalty,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct PerformanceScorer {
    pub objective: Objective,
}

impl PerformanceScorer {
    pub fn new(objective: Objective) -> Self {
        Self { objective }
    }

    pub fn score(&self, path: &Path, memory: &AgentMemory) -> i64 {
        let len = path.edge_count() as i64;
        match self.objective {
            Objective::Efficiency { base, revisit_penalty, backtrack_penalty } => {
                let revisits = path
                    .steps()
                    .iter()
                    .filter(|&&c| memory.visited.contains(&c))
                    .count() as i64;
                let backtrack = memory.previous.is_some_and(|p| path.contains(p));
                base - len
                    - revisit_penalty * revisits
                    - if backtrack { backtrack_penalty } else { 0 }
            }
            Objective::Shortest => -len,
            Objective::Longest  => len,
        }
    }

    /// Score every candidate; absent candidates score `None`.
    pub fn score_all(&self, candidates: &[Option<Path>], memory: &AgentMemory) -> Vec<Option<i64>> {
        candidates
            .iter()
            .map(|c| c.as_ref().map(|p| self.score(p, memory)))
            .collect()
    }
}

/// Index of the highest score, first on ties.  `None` if every score is
/// absent.
pub fn best(scores: &[Option<i64>]) -> Option<usize> {
    rank(scores).into_iter().next()
}

/// Indices of present scores, best first.  Stable: equal scores keep
/// candidate order.
pub fn rank(scores: &[Option<i64>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).filter(|&i| scores[i].is_some()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(scores[i]));
    order
}
