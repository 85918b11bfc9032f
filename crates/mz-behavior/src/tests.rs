//! Unit tests for mz-behavior.
//!
//! Grids are drawn as text: `#` is a wall, anything else is open.  Agent
//! cells are marked `Occupied` the way the tick driver does.

use std::collections::BTreeSet;

use mz_agent::{AgentMinds, AgentStore, AgentStoreBuilder, Role};
use mz_core::{AgentId, EngineConfig, Position, Tick};
use mz_spatial::{CellKind, GridWorld};

use crate::{BehaviorModel, Decision, TickContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn grid(rows: &[&str]) -> GridWorld {
    let rows = rows
        .iter()
        .map(|r| r.chars().map(|c| if c == '#' { CellKind::Wall } else { CellKind::Open }).collect())
        .collect();
    GridWorld::from_rows(rows).unwrap()
}

/// 7×7 walled room with a 5×5 open interior.
const ROOM: &[&str] = &[
    "#######",
    "#.....#",
    "#.....#",
    "#.....#",
    "#.....#",
    "#.....#",
    "#######",
];

/// 5×5 ring around a centre pillar.
const RING: &[&str] = &[
    "#####",
    "#...#",
    "#.#.#",
    "#...#",
    "#####",
];

struct Fixture {
    world:      GridWorld,
    store:      AgentStore,
    minds:      AgentMinds,
    objectives: BTreeSet<Position>,
    config:     EngineConfig,
}

impl Fixture {
    fn new(rows: &[&str], agents: &[(Role, (i32, i32))]) -> Self {
        let mut world = grid(rows);
        let mut builder = AgentStoreBuilder::new(7);
        for &(role, at) in agents {
            builder = builder.agent(role, at.into());
            world.mark_occupied(at.into()).unwrap();
        }
        let (store, minds) = builder.build();
        Self { world, store, minds, objectives: BTreeSet::new(), config: EngineConfig::default() }
    }

    fn objectives(mut self, cells: &[(i32, i32)]) -> Self {
        self.objectives = cells.iter().map(|&c| c.into()).collect();
        self
    }

    fn decide<B: BehaviorModel>(&mut self, model: &B, agent: AgentId) -> Decision {
        let ctx = TickContext::new(Tick::ZERO, &self.world, &self.store, &self.objectives, &self.config);
        model.decide(agent, &ctx, self.minds.get_mut(agent))
    }

    /// Teleport an agent, keeping the occupancy markers in step.
    fn place(&mut self, agent: AgentId, to: (i32, i32)) {
        let from = self.store.position_of(agent);
        self.world.clear_occupied(from).unwrap();
        self.world.mark_occupied(to.into()).unwrap();
        self.store.position[agent.index()] = to.into();
    }

    fn ctx(&self) -> TickContext<'_> {
        TickContext::new(Tick::ZERO, &self.world, &self.store, &self.objectives, &self.config)
    }
}

// ── Rule tables ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod rules {
    use crate::{
        Action, BehaviorError, ChaseState, CompletionState, PursuedState, PursuerState, RuleTable,
        StateSpace, pursued_rules, pursuer_rules,
    };

    #[test]
    fn canonical_tables_are_complete() {
        let pursued = pursued_rules().unwrap();
        assert_eq!(
            pursued.entries().count(),
            PursuedState::ALL.len() * CompletionState::ALL.len()
        );
        let pursuer = pursuer_rules().unwrap();
        assert_eq!(pursuer.entries().count(), PursuerState::ALL.len() * ChaseState::ALL.len());
    }

    #[test]
    fn pursued_table_rows() {
        let t = pursued_rules().unwrap();
        assert_eq!(t.lookup(PursuedState::Clear, CompletionState::Acting), Action::Move);
        assert_eq!(t.lookup(PursuedState::NearAgent, CompletionState::Acting), Action::Avoid);
        assert_eq!(t.lookup(PursuedState::Blocked, CompletionState::Acting), Action::Stop);
        for &s in PursuedState::ALL {
            assert_eq!(t.lookup(s, CompletionState::Goal), Action::Stop);
        }
    }

    #[test]
    fn pursuer_table_never_avoids() {
        let t = pursuer_rules().unwrap();
        assert!(t.entries().all(|(_, _, a)| a != Action::Avoid));
        assert_eq!(t.lookup(PursuerState::Scared, ChaseState::Chasing), Action::Move);
        assert_eq!(t.lookup(PursuerState::Normal, ChaseState::Caught), Action::Stop);
    }

    #[test]
    fn missing_row_rejected() {
        let err = RuleTable::<PursuerState, ChaseState>::new(&[
            (PursuerState::Normal, ChaseState::Chasing, Action::Move),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            BehaviorError::IncompleteRuleTable { state: "normal", completion: "caught" }
        ));
    }

    #[test]
    fn duplicate_row_rejected() {
        let err = RuleTable::<PursuerState, ChaseState>::new(&[
            (PursuerState::Normal, ChaseState::Chasing, Action::Move),
            (PursuerState::Normal, ChaseState::Chasing, Action::Stop),
        ])
        .unwrap_err();
        assert!(matches!(err, BehaviorError::DuplicateRule { .. }));
    }
}

// ── Perception and classification ─────────────────────────────────────────────

#[cfg(test)]
mod classify {
    use mz_agent::{AgentMemory, Role};
    use mz_core::{AgentId, PursuerConfig};
    use mz_spatial::CellKind;

    use super::{Fixture, ROOM};
    use crate::{
        ChaseState, FearMeter, PursuedState, PursuerState, classify_chase, classify_pursued, perceive,
    };

    #[test]
    fn outside_grid_reads_as_wall() {
        let f = Fixture::new(&["..", ".."], &[(Role::Pursued, (0, 0))]);
        let p = perceive(AgentId(0), &f.ctx(), 2);
        assert_eq!(
            p.neighbors,
            [CellKind::Wall, CellKind::Open, CellKind::Wall, CellKind::Open]
        );
        assert_eq!(p.open_neighbors(), 2);
        assert_eq!(p.agents_in_window, 0);
        assert_eq!(p.nearest_agent, None);
        assert_eq!(p.pursued, None);
    }

    #[test]
    fn window_counts_other_agents() {
        let f = Fixture::new(
            ROOM,
            &[(Role::Pursued, (3, 3)), (Role::Wanderer, (5, 5)), (Role::Wanderer, (1, 1))],
        );
        let p = perceive(AgentId(0), &f.ctx(), 2);
        assert_eq!(p.agents_in_window, 2);
        assert_eq!(p.nearest_agent, Some(4));
        assert_eq!(classify_pursued(&p), PursuedState::NearAgent);

        let narrow = perceive(AgentId(0), &f.ctx(), 1);
        assert_eq!(narrow.agents_in_window, 0);
        assert_eq!(classify_pursued(&narrow), PursuedState::Clear);
    }

    #[test]
    fn boxed_in_is_blocked() {
        let f = Fixture::new(
            &["#####", "#...#", "#####"],
            &[(Role::Pursued, (2, 1)), (Role::Wanderer, (1, 1)), (Role::Wanderer, (3, 1))],
        );
        let p = perceive(AgentId(0), &f.ctx(), 2);
        assert_eq!(classify_pursued(&p), PursuedState::Blocked);
    }

    #[test]
    fn cornered_and_adjacent_is_caught() {
        let f = Fixture::new(
            &["#####", "#...#", "#####"],
            &[(Role::Pursued, (1, 1)), (Role::Interceptor, (2, 1))],
        );
        let p = perceive(AgentId(1), &f.ctx(), 1);
        assert_eq!(p.pursued, Some((1, 1).into()));
        assert!(p.pursued_cornered);
        assert_eq!(classify_chase(&p), ChaseState::Caught);
    }

    #[test]
    fn adjacent_but_free_is_chasing() {
        let f = Fixture::new(ROOM, &[(Role::Pursued, (3, 3)), (Role::Interceptor, (3, 4))]);
        let p = perceive(AgentId(1), &f.ctx(), 1);
        assert!(p.pursued_within(1));
        assert_eq!(classify_chase(&p), ChaseState::Chasing);
    }

    #[test]
    fn fear_hysteresis_lags_both_ways() {
        let meter = FearMeter::from_config(&PursuerConfig::default());
        let mut m = AgentMemory::default();
        let close = [true, true, true, false, false, false];
        let want = [
            PursuerState::Normal,
            PursuerState::Normal,
            PursuerState::Scared,
            PursuerState::Scared,
            PursuerState::Scared,
            PursuerState::Normal,
        ];
        for (tick, (&c, &w)) in close.iter().zip(&want).enumerate() {
            assert_eq!(meter.update(&mut m, c), w, "tick {tick}");
        }
        assert_eq!(m.fear, 0);
    }

    #[test]
    fn fear_counter_is_clamped() {
        let meter = FearMeter::from_config(&PursuerConfig::default());
        let mut m = AgentMemory::default();
        for _ in 0..10 {
            meter.update(&mut m, true);
        }
        assert_eq!(m.fear, 5);
        for _ in 0..4 {
            assert_eq!(meter.update(&mut m, false), PursuerState::Scared);
        }
        assert_eq!(meter.update(&mut m, false), PursuerState::Normal);
        assert_eq!(meter.update(&mut m, false), PursuerState::Normal);
        assert_eq!(m.fear, 0);
    }
}

// ── Scoring and planning ──────────────────────────────────────────────────────

#[cfg(test)]
mod scoring {
    use mz_agent::AgentMemory;
    use mz_core::{Position, PursuedConfig, SearchKind};
    use mz_spatial::Path;

    use super::{RING, grid};
    use crate::plan::{nearest_goals, plan_candidates};
    use crate::scoring::{best, rank};
    use crate::{Objective, PerformanceScorer};

    fn line(cells: &[(i32, i32)]) -> Path {
        Path::new(cells.iter().map(|&c| c.into()).collect()).unwrap()
    }

    #[test]
    fn efficiency_penalties() {
        let scorer = PerformanceScorer::new(Objective::efficiency(&PursuedConfig::default()));
        let path = line(&[(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)]);

        let fresh = AgentMemory::default();
        assert_eq!(scorer.score(&path, &fresh), 496);

        let mut seen = AgentMemory::default();
        seen.visited.insert((2, 1).into());
        seen.visited.insert((3, 1).into());
        assert_eq!(scorer.score(&path, &seen), 490);

        seen.previous = Some((2, 1).into());
        assert_eq!(scorer.score(&path, &seen), 390);
    }

    #[test]
    fn shortest_and_longest() {
        let short = line(&[(1, 1), (2, 1)]);
        let long = line(&[(1, 1), (1, 2), (1, 3)]);
        let candidates = vec![Some(long), Some(short)];
        let m = AgentMemory::default();

        let chase = PerformanceScorer::new(Objective::Shortest).score_all(&candidates, &m);
        assert_eq!(best(&chase), Some(1));
        let flee = PerformanceScorer::new(Objective::Longest).score_all(&candidates, &m);
        assert_eq!(best(&flee), Some(0));
    }

    #[test]
    fn absent_candidates_never_win() {
        assert_eq!(best(&[None, None]), None);
        assert_eq!(best(&[None, Some(3), Some(3)]), Some(1));
        assert_eq!(rank(&[Some(1), None, Some(5), Some(1)]), vec![2, 0, 3]);
    }

    #[test]
    fn scores_ignore_candidate_order() {
        let scorer = PerformanceScorer::new(Objective::efficiency(&PursuedConfig::default()));
        let mut m = AgentMemory::default();
        m.visited.insert((1, 2).into());
        let a = line(&[(1, 1), (1, 2), (1, 3)]);
        let b = line(&[(1, 1), (2, 1), (3, 1)]);

        let forward = scorer.score_all(&[Some(a.clone()), Some(b.clone())], &m);
        let reverse = scorer.score_all(&[Some(b.clone()), Some(a.clone())], &m);
        assert_eq!(forward[0], reverse[1]);
        assert_eq!(forward[1], reverse[0]);
        assert_eq!(best(&forward), Some(1));
        assert_eq!(best(&reverse), Some(0));
        assert_eq!(scorer.score_all(&[Some(a), Some(b)], &m), forward);
    }

    #[test]
    fn nearest_goals_limit_and_ties() {
        let from = Position::new(0, 0);
        let goals = [Position::new(3, 0), Position::new(0, 1), Position::new(1, 0), Position::new(2, 2)];
        assert_eq!(
            nearest_goals(from, &goals, Some(2)),
            vec![Position::new(0, 1), Position::new(1, 0)]
        );
        assert_eq!(nearest_goals(from, &goals, None).len(), 4);
    }

    #[test]
    fn unreachable_goal_is_absent_candidate() {
        let world = grid(RING);
        let goals = [Position::new(3, 3), Position::new(2, 2)];
        for kind in [SearchKind::BreadthFirst, SearchKind::AStar] {
            let c = plan_candidates(kind, &world, Position::new(1, 1), &goals);
            assert_eq!(c[0].as_ref().map(|p| p.edge_count()), Some(4));
            assert!(c[1].is_none());
        }
    }
}

// ── Pursued controller ────────────────────────────────────────────────────────

#[cfg(test)]
mod forager {
    use mz_agent::Role;
    use mz_core::{AgentId, AvoidPolicy, Position, PursuedConfig};

    use super::{Fixture, RING, ROOM};
    use crate::{Action, BehavioralState, Forager, Outcome, PursuedState};

    fn forager() -> Forager {
        Forager::new(PursuedConfig::default()).unwrap()
    }

    #[test]
    fn ring_first_step_toward_pellet() {
        let mut f = Fixture::new(RING, &[(Role::Pursued, (1, 1))]).objectives(&[(3, 3)]);
        let d = f.decide(&forager(), AgentId(0));
        assert_eq!(d.action, Action::Move);
        assert_eq!(d.outcome, Outcome::Moved);
        assert_eq!(d.step, Some(Position::new(1, 2)));
        let path = d.path.unwrap();
        assert_eq!(path.edge_count(), 4);
        assert_eq!(path.goal(), Position::new(3, 3));
        assert_eq!(d.score, Some(496));
    }

    #[test]
    fn no_objectives_stops() {
        let mut f = Fixture::new(RING, &[(Role::Pursued, (1, 1))]);
        let d = f.decide(&forager(), AgentId(0));
        assert_eq!(d.action, Action::Stop);
        assert_eq!(d.outcome, Outcome::Stopped);
        assert_eq!(d.completion.as_str(), "goal");
    }

    #[test]
    fn unreachable_objectives_hold() {
        let mut f = Fixture::new(
            &["#######", "#..#..#", "#######"],
            &[(Role::Pursued, (1, 1))],
        )
        .objectives(&[(4, 1), (5, 1)]);
        let d = f.decide(&forager(), AgentId(0));
        assert_eq!(d.action, Action::Stop);
        assert_eq!(d.outcome, Outcome::Held);
        assert!(d.step.is_none());
    }

    #[test]
    fn backtrack_penalty_breaks_symmetry() {
        // Pellets at equal distance on either side; the agent just came from
        // the west.
        let mut f = Fixture::new(&["#######", "#.....#", "#######"], &[(Role::Pursued, (3, 1))])
            .objectives(&[(1, 1), (5, 1)]);
        f.minds.get_mut(AgentId(0)).memory.record_move((2, 1).into(), (3, 1).into());
        let d = f.decide(&forager(), AgentId(0));
        assert_eq!(d.step, Some(Position::new(4, 1)));
    }

    #[test]
    fn evades_nearby_agent() {
        let mut f = Fixture::new(ROOM, &[(Role::Pursued, (3, 3)), (Role::Wanderer, (3, 5))])
            .objectives(&[(1, 1)]);
        let d = f.decide(&forager(), AgentId(0));
        assert_eq!(d.state, BehavioralState::Pursued(PursuedState::NearAgent));
        assert_eq!(d.action, Action::Avoid);
        assert_eq!(d.step, Some(Position::new(3, 2)));
    }

    #[test]
    fn evasion_keeps_collecting_when_the_step_is_safe() {
        let mut f = Fixture::new(ROOM, &[(Role::Pursued, (3, 3)), (Role::Wanderer, (3, 5))])
            .objectives(&[(3, 1)]);
        let d = f.decide(&forager(), AgentId(0));
        assert_eq!(d.action, Action::Avoid);
        assert_eq!(d.step, Some(Position::new(3, 2)));
        assert_eq!(d.path.unwrap().goal(), Position::new(3, 1));
        assert_eq!(d.score, Some(498));
    }

    #[test]
    fn evasion_refuses_to_walk_towards_an_agent() {
        let mut f = Fixture::new(
            &["#######", "#.....#", "#######"],
            &[(Role::Pursued, (3, 1)), (Role::Wanderer, (5, 1))],
        )
        .objectives(&[(4, 1)]);
        let d = f.decide(&forager(), AgentId(0));
        assert_eq!(d.action, Action::Avoid);
        assert_eq!(d.step, Some(Position::new(2, 1)));
        assert_eq!(d.score, None);
    }

    #[test]
    fn evasion_does_not_double_back_while_another_exit_helps() {
        let mut f = Fixture::new(ROOM, &[(Role::Pursued, (3, 3)), (Role::Wanderer, (3, 5))])
            .objectives(&[(3, 4)]);
        f.minds.get_mut(AgentId(0)).memory.record_move((3, 2).into(), (3, 3).into());
        let d = f.decide(&forager(), AgentId(0));
        assert_eq!(d.action, Action::Avoid);
        assert_eq!(d.step, Some(Position::new(2, 3)));
    }

    #[test]
    fn evasion_doubles_back_as_a_last_resort() {
        let mut f = Fixture::new(
            &["######", "#....#", "######"],
            &[(Role::Pursued, (2, 1)), (Role::Wanderer, (4, 1))],
        )
        .objectives(&[(3, 1)]);
        f.minds.get_mut(AgentId(0)).memory.record_move((1, 1).into(), (2, 1).into());
        let d = f.decide(&forager(), AgentId(0));
        assert_eq!(d.action, Action::Avoid);
        assert_eq!(d.step, Some(Position::new(1, 1)));
    }

    #[test]
    fn hold_policy_never_moves() {
        let cfg = PursuedConfig { avoid: AvoidPolicy::Hold, ..PursuedConfig::default() };
        let mut f = Fixture::new(ROOM, &[(Role::Pursued, (3, 3)), (Role::Wanderer, (3, 5))])
            .objectives(&[(1, 1)]);
        let d = f.decide(&Forager::new(cfg).unwrap(), AgentId(0));
        assert_eq!(d.action, Action::Avoid);
        assert_eq!(d.outcome, Outcome::Stopped);
    }

    #[test]
    fn only_pellet_under_another_agent_blocks() {
        let mut f = Fixture::new(
            &["######", "#....#", "######"],
            &[(Role::Pursued, (1, 1)), (Role::Wanderer, (2, 1))],
        )
        .objectives(&[(2, 1)]);
        let cfg = PursuedConfig { perception_radius: 0, ..PursuedConfig::default() };
        let d = f.decide(&Forager::new(cfg).unwrap(), AgentId(0));
        assert_eq!(d.action, Action::Stop);
        assert_eq!(d.outcome, Outcome::Blocked);
        assert!(d.step.is_none());
    }

    #[test]
    fn occupied_pellet_cell_falls_back_to_next_candidate() {
        let mut f = Fixture::new(
            &["#######", "#.....#", "#######"],
            &[(Role::Pursued, (3, 1)), (Role::Wanderer, (4, 1))],
        )
        .objectives(&[(4, 1), (1, 1)]);
        // Window radius 0 keeps the pursued agent in Clear.
        let cfg = PursuedConfig { perception_radius: 0, ..PursuedConfig::default() };
        let d = f.decide(&Forager::new(cfg).unwrap(), AgentId(0));
        assert_eq!(d.outcome, Outcome::Moved);
        assert_eq!(d.step, Some(Position::new(2, 1)));
    }
}

// ── Pursuer controllers ───────────────────────────────────────────────────────

#[cfg(test)]
mod interceptor {
    use mz_agent::Role;
    use mz_core::{AgentId, Position, PursuerConfig};

    use super::{Fixture, ROOM, grid};
    use crate::controller::ambush_set;
    use crate::{Action, BehavioralState, Interceptor, Outcome, PursuerState};

    fn interceptor() -> Interceptor {
        Interceptor::new(PursuerConfig::default()).unwrap()
    }

    #[test]
    fn ambush_set_in_open_room() {
        let world = grid(ROOM);
        let set = ambush_set(&world, Position::new(3, 3));
        assert_eq!(
            set,
            vec![
                Position::new(3, 3),
                Position::new(3, 1),
                Position::new(3, 5),
                Position::new(1, 3),
                Position::new(5, 3),
            ]
        );
        // Near the wall only the quarry cell and the inward cells survive.
        assert_eq!(ambush_set(&world, Position::new(1, 1)).len(), 3);
    }

    #[test]
    fn no_ambush_cell_behind_a_wall() {
        let world = grid(&["#####", "#...#", "#####", "#...#", "#####"]);
        assert!(world.passable(Position::new(2, 3)));
        assert_eq!(ambush_set(&world, Position::new(2, 1)), vec![Position::new(2, 1)]);
    }

    #[test]
    fn corridor_without_ambush_cells_chases_directly() {
        let mut f = Fixture::new(
            &["#####", "#...#", "###.#", "###.#", "#####"],
            &[(Role::Pursued, (3, 2)), (Role::Interceptor, (1, 1))],
        );
        assert_eq!(ambush_set(&f.world, (3, 2).into()), vec![Position::new(3, 2)]);
        let d = f.decide(&interceptor(), AgentId(1));
        assert_eq!(d.outcome, Outcome::Moved);
        assert_eq!(d.step, Some(Position::new(2, 1)));
        assert_eq!(d.path.unwrap().goal(), Position::new(3, 2));
        assert_eq!(d.score, Some(-3));
    }

    #[test]
    fn occupied_first_step_tries_next_candidate() {
        let mut f = Fixture::new(ROOM, &[(Role::Pursued, (3, 3)), (Role::Interceptor, (3, 4))]);
        let d = f.decide(&interceptor(), AgentId(1));
        assert_eq!(d.state, BehavioralState::Pursuer(PursuerState::Normal));
        assert_eq!(d.outcome, Outcome::Moved);
        // Quarry cell is taken; the ambush cell behind is one step away.
        assert_eq!(d.step, Some(Position::new(3, 5)));
        assert_eq!(d.score, Some(-1));
    }

    #[test]
    fn scared_heads_for_longest_route() {
        let mut f = Fixture::new(ROOM, &[(Role::Pursued, (3, 3)), (Role::Interceptor, (3, 4))]);
        {
            let m = &mut f.minds.get_mut(AgentId(1)).memory;
            m.fear = 3;
            m.scared = true;
        }
        let d = f.decide(&interceptor(), AgentId(1));
        assert_eq!(d.state, BehavioralState::Pursuer(PursuerState::Scared));
        let path = d.path.unwrap();
        assert_eq!(path.goal(), Position::new(3, 1));
        assert_eq!(path.edge_count(), 5);
        assert!(Position::new(3, 4).is_adjacent(d.step.unwrap()));
    }

    #[test]
    fn scare_scenario_through_controller() {
        let mut f = Fixture::new(ROOM, &[(Role::Pursued, (2, 2)), (Role::Interceptor, (4, 4))]);
        let model = interceptor();
        // Pin the pursuer next to the quarry for three ticks.
        f.place(AgentId(1), (2, 3));
        let mut states = Vec::new();
        for _ in 0..3 {
            states.push(f.decide(&model, AgentId(1)).state);
        }
        // Quarry walks off; the pursuer stays put.
        f.place(AgentId(0), (5, 1));
        for _ in 0..3 {
            states.push(f.decide(&model, AgentId(1)).state);
        }
        let n = BehavioralState::Pursuer(PursuerState::Normal);
        let s = BehavioralState::Pursuer(PursuerState::Scared);
        assert_eq!(states, vec![n, n, s, s, s, n]);
    }

    #[test]
    fn caught_stops() {
        let mut f = Fixture::new(
            &["#####", "#...#", "#####"],
            &[(Role::Pursued, (1, 1)), (Role::Interceptor, (2, 1))],
        );
        let d = f.decide(&interceptor(), AgentId(1));
        assert!(d.completion.is_caught());
        assert_eq!(d.action, Action::Stop);
        assert_eq!(d.outcome, Outcome::Stopped);
    }

    #[test]
    fn no_pursued_agent_holds() {
        let mut f = Fixture::new(ROOM, &[(Role::Interceptor, (3, 3))]);
        let d = f.decide(&interceptor(), AgentId(0));
        assert_eq!(d.action, Action::Stop);
        assert_eq!(d.outcome, Outcome::Held);
    }
}

#[cfg(test)]
mod wanderer {
    use mz_agent::Role;
    use mz_core::{AgentId, Direction, Position, PursuerConfig, RandomSource};

    use super::{Fixture, grid};
    use crate::controller::wander_heading;
    use crate::{Outcome, Wanderer};

    /// Returns scripted indices; panics if asked for more.
    struct Scripted(Vec<usize>);

    impl RandomSource for Scripted {
        fn pick_index(&mut self, len: usize) -> usize {
            let i = self.0.remove(0);
            assert!(i < len, "scripted index {i} out of range {len}");
            i
        }
    }

    const JUNCTION: &[&str] = &["#####", "#...#", "##.##", "#####"];

    #[test]
    fn keeps_open_heading_without_randomness() {
        let world = grid(JUNCTION);
        let mut rng = Scripted(vec![]);
        let d = wander_heading(&world, Position::new(2, 1), Some(Direction::West), &mut rng);
        assert_eq!(d, Some(Direction::West));
    }

    #[test]
    fn blocked_heading_turns_at_random() {
        let world = grid(JUNCTION);
        // Open headings from (2,1): south, west, east.
        let mut rng = Scripted(vec![2]);
        let d = wander_heading(&world, Position::new(2, 1), Some(Direction::North), &mut rng);
        assert_eq!(d, Some(Direction::East));
        let mut rng = Scripted(vec![0]);
        let d = wander_heading(&world, Position::new(2, 1), None, &mut rng);
        assert_eq!(d, Some(Direction::South));
    }

    #[test]
    fn boxed_in_has_no_heading() {
        let world = grid(&["###", "#.#", "###"]);
        let mut rng = Scripted(vec![]);
        assert_eq!(wander_heading(&world, Position::new(1, 1), None, &mut rng), None);
    }

    #[test]
    fn decide_persists_heading() {
        let mut f = Fixture::new(
            &["#######", "#.....#", "#######"],
            &[(Role::Wanderer, (1, 1))],
        );
        let model = Wanderer::new(PursuerConfig::default()).unwrap();
        let d = f.decide(&model, AgentId(0));
        assert_eq!(d.outcome, Outcome::Moved);
        assert_eq!(d.step, Some(Position::new(2, 1)));
        assert_eq!(f.minds.get(AgentId(0)).memory.heading, Some(Direction::East));
    }

    #[test]
    fn boxed_in_wanderer_is_blocked() {
        let mut f = Fixture::new(&["###", "#.#", "###"], &[(Role::Wanderer, (1, 1))]);
        let model = Wanderer::new(PursuerConfig::default()).unwrap();
        assert_eq!(f.decide(&model, AgentId(0)).outcome, Outcome::Blocked);
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use mz_agent::Role;
    use mz_core::{AgentId, EngineConfig};

    use super::{Fixture, ROOM};
    use crate::{BehavioralState, RoleBehavior};

    #[test]
    fn routes_by_role() {
        let mut f = Fixture::new(
            ROOM,
            &[(Role::Pursued, (1, 1)), (Role::Wanderer, (5, 5)), (Role::Interceptor, (5, 1))],
        )
        .objectives(&[(1, 5)]);
        let model = RoleBehavior::new(&EngineConfig::default()).unwrap();
        assert!(matches!(f.decide(&model, AgentId(0)).state, BehavioralState::Pursued(_)));
        assert!(matches!(f.decide(&model, AgentId(1)).state, BehavioralState::Pursuer(_)));
        assert!(f.decide(&model, AgentId(2)).path.is_some());
    }

    #[test]
    fn invalid_config_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.pursuer.scare_threshold = 0;
        assert!(RoleBehavior::new(&cfg).is_err());
    }
}
