//! Agent controllers, one per [`Role`], and the dispatcher that picks
//! between them.
//!
//! Every controller runs the same cycle:
//!
//! ```text
//! perceive → classify → rule lookup → (plan candidates → score) → commit one step
//! ```
//!
//! | Controller      | Role        | Planning                                     |
//! |-----------------|-------------|----------------------------------------------|
//! | [`Forager`]     | Pursued     | paths to nearest objectives, efficiency score |
//! | [`Wanderer`]    | Wanderer    | none; keep heading, random turn when blocked |
//! | [`Interceptor`] | Interceptor | paths to quarry + ambush cells, fear-scored  |

mod forager;
mod interceptor;
mod wanderer;

pub use forager::Forager;
pub use interceptor::{Interceptor, ambush_set};
pub use wanderer::{Wanderer, wander_heading};

use mz_agent::{AgentMind, Role};
use mz_core::{AgentId, EngineConfig, Position, RandomSource};
use mz_spatial::{GridWorld, Path};

use crate::scoring::rank;
use crate::{BehaviorModel, BehaviorResult, Decision, TickContext};

// ── RoleBehavior ──────────────────────────────────────────────────────────────

/// Dispatches each agent to the controller for its role.
pub struct RoleBehavior {
    pub forager:     Forager,
    pub wanderer:    Wanderer,
    pub interceptor: Interceptor,
}

impl RoleBehavior {
    /// Validate `config` and build every controller with the canonical rule
    /// tables.
    pub fn new(config: &EngineConfig) -> BehaviorResult<Self> {
        config.validate()?;
        Ok(Self {
            forager:     Forager::new(config.pursued.clone())?,
            wanderer:    Wanderer::new(config.pursuer.clone())?,
            interceptor: Interceptor::new(config.pursuer.clone())?,
        })
    }
}

impl BehaviorModel for RoleBehavior {
    fn decide(&self, agent: AgentId, ctx: &TickContext<'_>, mind: &mut AgentMind) -> Decision {
        match ctx.agents.role_of(agent) {
            Role::Pursued     => self.forager.decide(agent, ctx, mind),
            Role::Wanderer    => self.wanderer.decide(agent, ctx, mind),
            Role::Interceptor => self.interceptor.decide(agent, ctx, mind),
        }
    }
}

// ── Shared commit helpers ─────────────────────────────────────────────────────

/// Walk candidates best-first and return the first whose next step is
/// passable right now, with that step.
fn first_open_step(
    world:      &GridWorld,
    candidates: &[Option<Path>],
    scores:     &[Option<i64>],
) -> Option<(usize, Position)> {
    rank(scores).into_iter().find_map(|i| {
        let step = candidates[i].as_ref()?.next_step()?;
        world.passable(step).then_some((i, step))
    })
}

/// A uniformly random passable neighbour of `pos`.
fn random_open_step(world: &GridWorld, pos: Position, rng: &mut impl RandomSource) -> Option<Position> {
    let open: Vec<Position> = world.passable_neighbors(pos).collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.pick_index(open.len())])
}

/// Take ownership of candidate `i`.
fn take(candidates: Vec<Option<Path>>, i: usize) -> Option<Path> {
    candidates.into_iter().nth(i).flatten()
}
