//! Controller for the intercepting pursuer.

use mz_agent::AgentMind;
use mz_core::{AgentId, Direction, Position, PursuerConfig};
use mz_spatial::{CellKind, GridWorld, Path};

use super::{first_open_step, random_open_step, take};
use crate::classify::{FearMeter, classify_chase};
use crate::plan::plan_candidates;
use crate::rules::{PursuerRules, pursuer_rules};
use crate::scoring::{Objective, PerformanceScorer, best};
use crate::state::{BehavioralState, Completion, PursuerState};
use crate::{Action, BehaviorModel, BehaviorResult, Decision, Outcome, TickContext, perceive};

/// Plans to the pursued agent's cell and to its ambush cells; chases along
/// the shortest route while Normal and flees along the longest while
/// Scared.
///
/// # Occupied-step fallback
///
/// If the winning path's next step is taken by another agent, the next
/// ranked candidate's step is tried, then a random passable neighbour.  Only
/// if all of those are taken does the interceptor hold.
pub struct Interceptor {
    pub config: PursuerConfig,
    rules:      PursuerRules,
    fear:       FearMeter,
    chase:      PerformanceScorer,
    flee:       PerformanceScorer,
}

impl Interceptor {
    pub fn new(config: PursuerConfig) -> BehaviorResult<Self> {
        Ok(Self::with_rules(config, pursuer_rules()?))
    }

    pub fn with_rules(config: PursuerConfig, rules: PursuerRules) -> Self {
        let fear = FearMeter::from_config(&config);
        Self {
            config,
            rules,
            fear,
            chase: PerformanceScorer::new(Objective::Shortest),
            flee:  PerformanceScorer::new(Objective::Longest),
        }
    }

    fn scorer_for(&self, state: PursuerState) -> &PerformanceScorer {
        match state {
            PursuerState::Normal => &self.chase,
            PursuerState::Scared => &self.flee,
        }
    }
}

/// Candidate goals around `quarry`: its own cell first, then every passable
/// cell two steps away along each heading, in [`Direction::ALL`] order.  A
/// heading whose first cell is a wall has no ambush cell: the quarry cannot
/// reach it in two moves.
pub fn ambush_set(world: &GridWorld, quarry: Position) -> Vec<Position> {
    std::iter::once(quarry)
        .chain(
            Direction::ALL
                .into_iter()
                .filter(|&d| world.kind_or_wall(quarry.step(d)) != CellKind::Wall)
                .map(|d| quarry.offset(d, 2))
                .filter(|&c| world.passable(c)),
        )
        .collect()
}

impl BehaviorModel for Interceptor {
    fn decide(&self, agent: AgentId, ctx: &TickContext<'_>, mind: &mut AgentMind) -> Decision {
        let percept = perceive(agent, ctx, self.config.perception_radius);
        let state = self
            .fear
            .update(&mut mind.memory, percept.pursued_within(self.config.perception_radius));
        let chase = classify_chase(&percept);
        let action = self.rules.lookup(state, chase);
        let (state_label, completion) = (BehavioralState::Pursuer(state), Completion::Pursuer(chase));

        tracing::trace!(tick = ctx.tick.0, %agent, %state, %chase, %action, "interceptor decision");

        if action == Action::Stop {
            return Decision::stay(state_label, completion, action, Outcome::Stopped);
        }
        let Some(quarry) = percept.pursued else {
            return Decision::stay(state_label, completion, Action::Stop, Outcome::Held);
        };

        let pos = percept.position;
        let goals = ambush_set(ctx.world, quarry);
        let candidates = plan_candidates(self.config.search, ctx.world, pos, &goals);
        let scores = self.scorer_for(state).score_all(&candidates, &mind.memory);

        if best(&scores).is_none() {
            tracing::warn!(tick = ctx.tick.0, %agent, %pos, %quarry, "no ambush cell reachable, holding");
            return Decision::stay(state_label, completion, Action::Stop, Outcome::Held);
        }

        if let Some((i, step)) = first_open_step(ctx.world, &candidates, &scores) {
            let score = scores[i];
            return Decision::step(state_label, completion, action, step, take(candidates, i), score);
        }

        match random_open_step(ctx.world, pos, &mut mind.rng) {
            Some(step) => {
                tracing::debug!(tick = ctx.tick.0, %agent, %step, "planned steps taken, stepping aside");
                Decision::step(state_label, completion, action, step, Path::new(vec![pos, step]), None)
            }
            None => Decision::stay(state_label, completion, action, Outcome::Blocked),
        }
    }
}
