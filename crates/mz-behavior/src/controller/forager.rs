//! Controller for the pursued agent.

use std::cmp::Reverse;

use mz_agent::{AgentMemory, AgentMind};
use mz_core::{AgentId, AvoidPolicy, Position, PursuedConfig};
use mz_spatial::Path;

use super::{first_open_step, take};
use crate::classify::{classify_completion, classify_pursued};
use crate::plan::{nearest_goals, plan_candidates};
use crate::rules::{PursuedRules, pursued_rules};
use crate::scoring::{Objective, PerformanceScorer, best, rank};
use crate::state::{BehavioralState, Completion};
use crate::{Action, BehaviorModel, BehaviorResult, Decision, Outcome, Percept, TickContext, perceive};

/// Collects objectives: plans a path to each of the nearest live objectives,
/// scores them for efficiency, and takes one step along the winner.
pub struct Forager {
    pub config: PursuedConfig,
    rules:      PursuedRules,
    scorer:     PerformanceScorer,
}

type Labels = (BehavioralState, Completion);

impl Forager {
    pub fn new(config: PursuedConfig) -> BehaviorResult<Self> {
        Ok(Self::with_rules(config, pursued_rules()?))
    }

    /// Use a custom rule table.
    pub fn with_rules(config: PursuedConfig, rules: PursuedRules) -> Self {
        let scorer = PerformanceScorer::new(Objective::efficiency(&config));
        Self { config, rules, scorer }
    }

    /// Plan towards the nearest objectives and score every candidate.
    fn plan(
        &self,
        pos:    Position,
        ctx:    &TickContext<'_>,
        memory: &AgentMemory,
    ) -> (Vec<Option<Path>>, Vec<Option<i64>>) {
        let goals = nearest_goals(pos, ctx.objectives, self.config.candidate_limit);
        let candidates = plan_candidates(self.config.search, ctx.world, pos, &goals);
        let scores = self.scorer.score_all(&candidates, memory);
        (candidates, scores)
    }

    fn forage(&self, pos: Position, ctx: &TickContext<'_>, memory: &AgentMemory, labels: Labels) -> Decision {
        let (state, completion) = labels;
        let (candidates, scores) = self.plan(pos, ctx, memory);

        if best(&scores).is_none() {
            tracing::warn!(
                tick = ctx.tick.0,
                %pos,
                objectives = candidates.len(),
                "no objective reachable, holding"
            );
            return Decision::stay(state, completion, Action::Stop, Outcome::Held);
        }

        match first_open_step(ctx.world, &candidates, &scores) {
            Some((i, step)) => {
                let score = scores[i];
                Decision::step(state, completion, Action::Move, step, take(candidates, i), score)
            }
            None => Decision::stay(state, completion, Action::Stop, Outcome::Blocked),
        }
    }

    /// Keep collecting along the best candidate whose next step does not
    /// bring any other agent closer.  Failing that, step to the neighbour
    /// that most increases the distance to the nearest other agent (strict
    /// improvements only, the cell just left only if nothing else improves).
    /// Otherwise hold.
    fn evade(
        &self,
        agent:   AgentId,
        percept: &Percept,
        ctx:     &TickContext<'_>,
        memory:  &AgentMemory,
        labels:  Labels,
    ) -> Decision {
        let (state, completion) = labels;
        let pos = percept.position;
        let here = percept.nearest_agent;
        let others: Vec<Position> = ctx.agents.others(agent).map(|(_, p)| p).collect();
        let clearance = |c: Position| others.iter().map(|&o| c.manhattan(o)).min();

        let (candidates, scores) = self.plan(pos, ctx, memory);
        let safe_forage = rank(&scores).into_iter().find_map(|i| {
            let step = candidates[i].as_ref()?.next_step()?;
            (ctx.world.passable(step) && clearance(step) >= here).then_some((i, step))
        });
        if let Some((i, step)) = safe_forage {
            let score = scores[i];
            return Decision::step(state, completion, Action::Avoid, step, take(candidates, i), score);
        }

        let improving: Vec<(u32, Position)> = ctx
            .world
            .passable_neighbors(pos)
            .filter_map(|n| clearance(n).map(|d| (d, n)))
            .filter(|&(d, _)| Some(d) > here)
            .collect();
        let fresh = improving.iter().copied().filter(|&(_, n)| Some(n) != memory.previous);
        let safest = fresh
            .min_by_key(|&(d, _)| Reverse(d))
            .or_else(|| improving.iter().copied().min_by_key(|&(d, _)| Reverse(d)));

        match safest {
            Some((_, step)) => Decision::step(
                state,
                completion,
                Action::Avoid,
                step,
                Path::new(vec![pos, step]),
                None,
            ),
            None => Decision::stay(state, completion, Action::Avoid, Outcome::Stopped),
        }
    }
}

impl BehaviorModel for Forager {
    fn decide(&self, agent: AgentId, ctx: &TickContext<'_>, mind: &mut AgentMind) -> Decision {
        let percept = perceive(agent, ctx, self.config.perception_radius);
        let state = classify_pursued(&percept);
        let completion = classify_completion(ctx.objectives);
        let action = self.rules.lookup(state, completion);
        let labels = (BehavioralState::Pursued(state), Completion::Pursued(completion));

        tracing::trace!(
            tick = ctx.tick.0,
            %agent,
            pos = %percept.position,
            %state,
            %completion,
            %action,
            "pursued decision"
        );

        match action {
            Action::Move => self.forage(percept.position, ctx, &mind.memory, labels),
            Action::Avoid => match self.config.avoid {
                AvoidPolicy::Evade => self.evade(agent, &percept, ctx, &mind.memory, labels),
                AvoidPolicy::Hold  => Decision::stay(labels.0, labels.1, Action::Avoid, Outcome::Stopped),
            },
            Action::Stop => Decision::stay(labels.0, labels.1, Action::Stop, Outcome::Stopped),
        }
    }
}
