//! Unit tests for mz-agent.

#[cfg(test)]
mod builder {
    use mz_core::Position;

    use crate::{AgentStoreBuilder, Role};

    #[test]
    fn correct_count() {
        let (store, minds) = AgentStoreBuilder::new(1)
            .agent(Role::Pursued, Position::new(1, 1))
            .agent(Role::Wanderer, Position::new(2, 1))
            .agent(Role::Interceptor, Position::new(3, 1))
            .build();
        assert_eq!(store.count, 3);
        assert_eq!(minds.len(), 3);
    }

    #[test]
    fn zero_agents() {
        let (store, minds) = AgentStoreBuilder::new(0).build();
        assert!(store.is_empty());
        assert!(minds.is_empty());
    }

    #[test]
    fn agents_start_on_start_cell() {
        let (store, minds) = AgentStoreBuilder::new(0)
            .agent(Role::Pursued, Position::new(4, 2))
            .build();
        assert_eq!(store.position[0], Position::new(4, 2));
        assert_eq!(store.start[0], Position::new(4, 2));
        assert!(store.path[0].is_none());
        assert!(minds.inner[0].memory.visited.is_empty());
    }
}

#[cfg(test)]
mod store {
    use mz_core::{AgentId, Position};
    use mz_spatial::Path;

    use crate::{AgentStore, AgentStoreBuilder, Role};

    fn roster() -> AgentStore {
        AgentStoreBuilder::new(0)
            .agent(Role::Wanderer, Position::new(1, 1))
            .agent(Role::Pursued, Position::new(2, 2))
            .agent(Role::Interceptor, Position::new(3, 3))
            .build()
            .0
    }

    #[test]
    fn agent_ids_iterator() {
        let store = roster();
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn pursued_and_pursuers() {
        let store = roster();
        assert_eq!(store.pursued(), Some(AgentId(1)));
        let pursuers: Vec<AgentId> = store.pursuers().collect();
        assert_eq!(pursuers, vec![AgentId(0), AgentId(2)]);
    }

    #[test]
    fn others_excludes_self() {
        let store = roster();
        let others: Vec<_> = store.others(AgentId(1)).collect();
        assert_eq!(
            others,
            vec![(AgentId(0), Position::new(1, 1)), (AgentId(2), Position::new(3, 3))]
        );
        assert_eq!(store.agent_at(Position::new(3, 3)), Some(AgentId(2)));
        assert_eq!(store.agent_at(Position::new(5, 5)), None);
    }

    #[test]
    fn reset_restores_start_and_drops_path() {
        let mut store = roster();
        store.position[2] = Position::new(5, 3);
        store.path[2] = Path::new(vec![Position::new(5, 3), Position::new(6, 3)]);
        store.reset(AgentId(2));
        assert_eq!(store.position_of(AgentId(2)), Position::new(3, 3));
        assert!(store.path_of(AgentId(2)).is_none());
    }
}

#[cfg(test)]
mod minds {
    use mz_core::{AgentId, Direction, Position, RandomSource};

    use crate::{AgentMemory, AgentStoreBuilder, Role};

    #[test]
    fn per_agent_determinism() {
        let build = || {
            AgentStoreBuilder::new(999)
                .agent(Role::Wanderer, Position::new(1, 1))
                .agent(Role::Wanderer, Position::new(2, 1))
                .build()
                .1
        };
        let (mut a, mut b) = (build(), build());
        for i in 0..2u32 {
            for _ in 0..50 {
                assert_eq!(
                    a.get_mut(AgentId(i)).rng.pick_index(4),
                    b.get_mut(AgentId(i)).rng.pick_index(4),
                    "agent {i} RNG should be deterministic"
                );
            }
        }
    }

    #[test]
    fn record_move_tracks_previous() {
        let mut m = AgentMemory::default();
        m.record_move(Position::new(1, 1), Position::new(2, 1));
        m.record_move(Position::new(2, 1), Position::new(3, 1));
        assert_eq!(m.previous, Some(Position::new(2, 1)));
        assert_eq!(m.visited.len(), 3);
    }

    #[test]
    fn performance_summary() {
        let mut m = AgentMemory::default();
        assert!(m.performance_summary().is_none());
        m.record_score(490);
        m.record_score(480);
        let s = m.performance_summary().unwrap();
        assert_eq!(s.decisions, 2);
        assert_eq!(s.average, 485.0);
        assert_eq!(s.best, 490);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut m = AgentMemory {
            fear: 4,
            scared: true,
            heading: Some(Direction::East),
            ..AgentMemory::default()
        };
        m.record_move(Position::new(1, 1), Position::new(1, 2));
        m.record_score(1);
        m.clear();
        assert_eq!(m.fear, 0);
        assert!(!m.scared);
        assert!(m.heading.is_none());
        assert!(m.previous.is_none());
        assert!(m.visited.is_empty());
        assert!(m.performance.is_empty());
    }
}
