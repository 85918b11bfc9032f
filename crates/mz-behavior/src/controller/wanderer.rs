//! Controller for the wandering pursuer: no search, no scoring.

use mz_agent::AgentMind;
use mz_core::{AgentId, Direction, Position, PursuerConfig, RandomSource};
use mz_spatial::{GridWorld, Path};

use super::random_open_step;
use crate::classify::{FearMeter, classify_chase};
use crate::rules::{PursuerRules, pursuer_rules};
use crate::state::{BehavioralState, Completion};
use crate::{Action, BehaviorModel, BehaviorResult, Decision, Outcome, TickContext, perceive};

/// Keeps walking along its heading and turns at random when the cell ahead
/// is not passable.
///
/// The fear counter is still tracked so the wanderer reports Normal/Scared
/// like any pursuer, but it does not change where the wanderer goes.
pub struct Wanderer {
    pub config: PursuerConfig,
    rules:      PursuerRules,
    fear:       FearMeter,
}

impl Wanderer {
    pub fn new(config: PursuerConfig) -> BehaviorResult<Self> {
        Ok(Self::with_rules(config, pursuer_rules()?))
    }

    pub fn with_rules(config: PursuerConfig, rules: PursuerRules) -> Self {
        let fear = FearMeter::from_config(&config);
        Self { config, rules, fear }
    }
}

/// The heading to take from `pos`: the current one while the cell ahead is
/// passable, otherwise a uniformly random passable one.  `None` when boxed
/// in.
pub fn wander_heading(
    world:   &GridWorld,
    pos:     Position,
    heading: Option<Direction>,
    rng:     &mut impl RandomSource,
) -> Option<Direction> {
    if let Some(d) = heading.filter(|&d| world.passable(pos.step(d))) {
        return Some(d);
    }
    let step = random_open_step(world, pos, rng)?;
    pos.direction_to(step)
}

impl BehaviorModel for Wanderer {
    fn decide(&self, agent: AgentId, ctx: &TickContext<'_>, mind: &mut AgentMind) -> Decision {
        let percept = perceive(agent, ctx, self.config.perception_radius);
        let state = self
            .fear
            .update(&mut mind.memory, percept.pursued_within(self.config.perception_radius));
        let chase = classify_chase(&percept);
        let action = self.rules.lookup(state, chase);
        let (state_label, completion) = (BehavioralState::Pursuer(state), Completion::Pursuer(chase));

        tracing::trace!(tick = ctx.tick.0, %agent, %state, %chase, %action, "wanderer decision");

        if action == Action::Stop {
            return Decision::stay(state_label, completion, action, Outcome::Stopped);
        }

        let pos = percept.position;
        match wander_heading(ctx.world, pos, mind.memory.heading, &mut mind.rng) {
            Some(dir) => {
                mind.memory.heading = Some(dir);
                let step = pos.step(dir);
                Decision::step(state_label, completion, action, step, Path::new(vec![pos, step]), None)
            }
            None => Decision::stay(state_label, completion, action, Outcome::Blocked),
        }
    }
}
