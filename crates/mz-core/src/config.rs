//! Engine configuration.
//!
//! Every numeric constant that shapes agent behaviour lives here rather than
//! in the policies themselves: perception radii, scoring weights, fear
//! thresholds.  None of the defaults are tuned; they reproduce the classic
//! game and are expected to be overridden from a JSON file by applications
//! (enable the `serde` feature).

use crate::{CoreError, CoreResult};

// ── Enumerated options ────────────────────────────────────────────────────────

/// Which search an agent family plans with.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchKind {
    /// Unweighted breadth-first search.
    #[default]
    BreadthFirst,
    /// A* with the Manhattan heuristic.
    AStar,
}

/// What the pursued agent does when its rule table answers `Avoid`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AvoidPolicy {
    /// Hold position.
    Hold,
    /// Step to the neighbour that strictly increases the distance to the
    /// nearest other agent; hold if no neighbour does.
    #[default]
    Evade,
}

// ── PursuedConfig ─────────────────────────────────────────────────────────────

/// Parameters of the pursued (pellet-collecting) agent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PursuedConfig {
    /// Half-width of the square window scanned for other agents.  2 gives
    /// the 5×5 early-warning window.
    pub perception_radius: u32,

    /// Constant added to every candidate score so displayed values stay
    /// positive.  Only relative order matters.
    pub base_score: i64,

    /// Penalty per cell of a candidate path already in the visited set.
    pub revisit_penalty: i64,

    /// Penalty when a candidate path passes through the immediately
    /// previous cell (oscillation guard).
    pub backtrack_penalty: i64,

    /// Plan only towards the `n` objectives nearest by Manhattan distance.
    /// `None` plans towards every live objective.
    pub candidate_limit: Option<usize>,

    pub avoid: AvoidPolicy,

    pub search: SearchKind,
}

impl Default for PursuedConfig {
    fn default() -> Self {
        Self {
            perception_radius: 2,
            base_score:        500,
            revisit_penalty:   3,
            backtrack_penalty: 100,
            candidate_limit:   Some(8),
            avoid:             AvoidPolicy::Evade,
            search:            SearchKind::BreadthFirst,
        }
    }
}

// ── PursuerConfig ─────────────────────────────────────────────────────────────

/// Parameters shared by both pursuer policies (wanderer and interceptor).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PursuerConfig {
    /// Manhattan radius within which the pursued agent counts as "close"
    /// for the fear counter.  1 = immediate adjacency.
    pub perception_radius: u32,

    /// Fear counter value at which the pursuer turns Scared.
    pub scare_threshold: u8,

    /// A Scared pursuer calms down once the counter drops below this value.
    pub scare_exit_below: u8,

    /// Upper clamp of the fear counter.
    pub scare_cap: u8,

    pub search: SearchKind,
}

impl Default for PursuerConfig {
    fn default() -> Self {
        Self {
            perception_radius: 1,
            scare_threshold:   3,
            scare_exit_below:  1,
            scare_cap:         5,
            search:            SearchKind::AStar,
        }
    }
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// `Sim::run` stops after this many ticks even if objectives remain.
    pub max_ticks: u64,

    /// Emit an agent snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Points awarded per consumed objective.
    pub pellet_value: u32,

    /// Reset every agent to its start cell when a pursuer catches the
    /// pursued agent.
    pub reset_on_capture: bool,

    pub pursued: PursuedConfig,

    pub pursuer: PursuerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed:                  42,
            max_ticks:             10_000,
            output_interval_ticks: 1,
            pellet_value:          10,
            reset_on_capture:      true,
            pursued:               PursuedConfig::default(),
            pursuer:               PursuerConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Reject parameter combinations the classifiers cannot honour.
    pub fn validate(&self) -> CoreResult<()> {
        let p = &self.pursuer;
        if p.scare_threshold == 0 {
            return Err(CoreError::Config("scare_threshold must be at least 1".into()));
        }
        if p.scare_threshold > p.scare_cap {
            return Err(CoreError::Config(format!(
                "scare_threshold {} exceeds scare_cap {}",
                p.scare_threshold, p.scare_cap
            )));
        }
        if p.scare_exit_below == 0 {
            return Err(CoreError::Config("scare_exit_below of 0 would never calm down".into()));
        }
        if p.scare_exit_below > p.scare_threshold {
            return Err(CoreError::Config(format!(
                "scare_exit_below {} exceeds scare_threshold {}",
                p.scare_exit_below, p.scare_threshold
            )));
        }
        if self.pursued.candidate_limit == Some(0) {
            return Err(CoreError::Config("candidate_limit of 0 would never plan".into()));
        }
        Ok(())
    }
}
