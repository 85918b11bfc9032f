//! Unit tests for mz-spatial.
//!
//! Mazes are written in the integer format (0 = open, 1 = wall) so the
//! fixtures read the same way level files do.

#[cfg(test)]
mod helpers {
    use crate::GridWorld;

    pub fn world(rows: &[&[u8]]) -> GridWorld {
        let rows: Vec<Vec<u8>> = rows.iter().map(|r| r.to_vec()).collect();
        GridWorld::from_codes(&rows).unwrap()
    }

    /// 5×5 ring around a centre pillar.
    pub fn ring() -> GridWorld {
        world(&[
            &[1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 1, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 1, 1, 1, 1],
        ])
    }

    /// 10×10 maze with several dead ends.  Shortest (1,1) → (8,8) is 14 moves.
    pub fn maze() -> GridWorld {
        world(&[
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 1, 0, 1, 0, 1, 1, 0, 1],
            &[1, 0, 1, 0, 0, 0, 0, 1, 0, 1],
            &[1, 0, 1, 1, 1, 1, 0, 1, 0, 1],
            &[1, 0, 0, 0, 0, 0, 0, 1, 0, 1],
            &[1, 1, 1, 0, 1, 1, 1, 1, 0, 1],
            &[1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            &[1, 0, 1, 1, 1, 1, 1, 1, 0, 1],
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ])
    }

    /// Every consecutive pair adjacent and every intermediate cell open.
    pub fn assert_walkable(world: &GridWorld, path: &crate::Path) {
        for pair in path.cells().windows(2) {
            assert!(pair[0].is_adjacent(pair[1]), "{} -> {} is not a single step", pair[0], pair[1]);
        }
        let inner = path.cells().get(1..path.cell_count().saturating_sub(1)).unwrap_or(&[]);
        for &c in inner {
            assert!(world.passable(c), "path crosses impassable {c}");
        }
    }

    /// All-pairs distances by Floyd–Warshall over the open cells, indexed by
    /// cell index.  Independent of both searches.
    pub fn all_pairs(world: &GridWorld) -> Vec<Vec<Option<u32>>> {
        let n = world.cell_count();
        let mut dist = vec![vec![None; n]; n];
        for pos in world.floor_cells() {
            let Some(i) = world.index_of(pos) else { continue };
            dist[i][i] = Some(0);
            for next in world.passable_neighbors(pos) {
                if let Some(j) = world.index_of(next) {
                    dist[i][j] = Some(1);
                }
            }
        }
        for k in 0..n {
            for i in 0..n {
                let Some(ik) = dist[i][k] else { continue };
                for j in 0..n {
                    let Some(kj) = dist[k][j] else { continue };
                    if dist[i][j].is_none_or(|d| ik + kj < d) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
        dist
    }
}

// ── Grid construction ─────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use mz_core::{Direction, Position};

    use crate::{CellKind, GridWorld, GridWorldBuilder, SpatialError};

    #[test]
    fn from_codes_dimensions() {
        let w = super::helpers::maze();
        assert_eq!(w.width(), 10);
        assert_eq!(w.height(), 10);
        assert_eq!(w.cell_count(), 100);
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(GridWorld::from_codes(&[]), Err(SpatialError::Empty)));
        assert!(matches!(GridWorld::from_codes(&[vec![]]), Err(SpatialError::Empty)));
    }

    #[test]
    fn ragged_rejected() {
        let err = GridWorld::from_codes(&[vec![0, 0], vec![0]]).unwrap_err();
        assert!(matches!(err, SpatialError::RaggedRow { row: 1, expected: 2, got: 1 }));
    }

    #[test]
    fn unknown_code_rejected() {
        let err = GridWorld::from_codes(&[vec![0, 7]]).unwrap_err();
        assert!(matches!(err, SpatialError::UnknownCode { code: 7, .. }));
    }

    #[test]
    fn cell_at_out_of_bounds_is_error() {
        let w = super::helpers::ring();
        assert!(matches!(w.cell_at(Position::new(5, 0)), Err(SpatialError::OutOfBounds { .. })));
        assert!(matches!(w.cell_at(Position::new(-1, 2)), Err(SpatialError::OutOfBounds { .. })));
        assert_eq!(w.cell_at(Position::new(1, 1)).unwrap(), CellKind::Open);
    }

    #[test]
    fn outside_reads_as_wall() {
        let w = super::helpers::ring();
        assert_eq!(w.kind_or_wall(Position::new(-3, 9)), CellKind::Wall);
        assert!(!w.passable(Position::new(-1, 0)));
    }

    #[test]
    fn index_roundtrip() {
        let w = super::helpers::maze();
        for i in 0..w.cell_count() {
            assert_eq!(w.index_of(w.position_of(i)), Some(i));
        }
    }

    #[test]
    fn passable_directions_in_corner() {
        let w = super::helpers::ring();
        assert_eq!(
            w.passable_directions(Position::new(1, 1)),
            vec![Direction::South, Direction::East]
        );
    }

    #[test]
    fn occupancy_marker_lifecycle() {
        let mut w = super::helpers::ring();
        let p = Position::new(1, 1);
        w.mark_occupied(p).unwrap();
        assert!(w.is_occupied(p));
        assert!(!w.passable(p));
        assert!(matches!(w.mark_occupied(p), Err(SpatialError::AlreadyOccupied(_))));
        w.clear_occupied(p).unwrap();
        assert!(w.passable(p));
        // Clearing twice is harmless.
        w.clear_occupied(p).unwrap();
    }

    #[test]
    fn occupancy_on_wall_rejected() {
        let mut w = super::helpers::ring();
        let pillar = Position::new(2, 2);
        assert!(matches!(w.mark_occupied(pillar), Err(SpatialError::Wall(_))));
        assert!(matches!(w.clear_occupied(pillar), Err(SpatialError::Wall(_))));
        assert!(matches!(
            w.mark_occupied(Position::new(9, 9)),
            Err(SpatialError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn builder_border_and_display() {
        let w = GridWorldBuilder::new(4, 3).border().build();
        assert_eq!(w.to_string(), "####\n#..#\n####\n");
        assert_eq!(w.floor_cells().count(), 2);
    }

    #[test]
    fn builder_clamps_zero_size() {
        let w = GridWorldBuilder::new(0, 0).build();
        assert_eq!(w.cell_count(), 1);
    }
}

// ── Path value ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use mz_core::Position;

    use crate::Path;

    #[test]
    fn empty_is_not_a_path() {
        assert!(Path::new(vec![]).is_none());
    }

    #[test]
    fn accessors() {
        let p = Path::new(vec![(1, 1).into(), (2, 1).into(), (3, 1).into()]).unwrap();
        assert_eq!(p.start(), Position::new(1, 1));
        assert_eq!(p.goal(), Position::new(3, 1));
        assert_eq!(p.edge_count(), 2);
        assert_eq!(p.next_step(), Some(Position::new(2, 1)));
        assert_eq!(p.steps(), &[Position::new(2, 1), Position::new(3, 1)]);
        assert!(p.contains(Position::new(2, 1)));
        assert!(!p.is_trivial());
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use mz_core::{Position, SearchKind};

    use crate::{AStar, BreadthFirst, Pathfinder, find_path, optimal_path, shortest_path};

    #[test]
    fn ring_corner_to_corner() {
        let w = super::helpers::ring();
        let start = Position::new(1, 1);
        let goal = Position::new(3, 3);
        let p = shortest_path(&w, start, goal).unwrap();
        assert_eq!(p.cell_count(), 5);
        assert_eq!(p.edge_count(), 4);
        assert_eq!(p.start(), start);
        assert_eq!(p.goal(), goal);
        super::helpers::assert_walkable(&w, &p);
    }

    #[test]
    fn maze_length() {
        let w = super::helpers::maze();
        let p = shortest_path(&w, Position::new(1, 1), Position::new(8, 8)).unwrap();
        assert_eq!(p.edge_count(), 14);
        super::helpers::assert_walkable(&w, &p);
    }

    #[test]
    fn wall_goal_has_no_path() {
        let w = super::helpers::ring();
        assert!(shortest_path(&w, Position::new(1, 1), Position::new(2, 2)).is_none());
        assert!(optimal_path(&w, Position::new(1, 1), Position::new(2, 2)).is_none());
    }

    #[test]
    fn outside_endpoints_have_no_path() {
        let w = super::helpers::ring();
        assert!(shortest_path(&w, Position::new(-1, 1), Position::new(1, 1)).is_none());
        assert!(optimal_path(&w, Position::new(1, 1), Position::new(7, 7)).is_none());
    }

    #[test]
    fn same_cell_is_single_cell_path() {
        let w = super::helpers::ring();
        let p = Position::new(3, 1);
        for kind in [SearchKind::BreadthFirst, SearchKind::AStar] {
            let path = find_path(kind, &w, p, p).unwrap();
            assert_eq!(path.cells(), &[p]);
            assert_eq!(path.edge_count(), 0);
        }
    }

    #[test]
    fn disconnected_region_unreachable() {
        let w = super::helpers::world(&[
            &[0, 1, 0],
            &[0, 1, 0],
            &[0, 1, 0],
        ]);
        assert!(shortest_path(&w, Position::new(0, 0), Position::new(2, 2)).is_none());
        assert!(optimal_path(&w, Position::new(0, 0), Position::new(2, 2)).is_none());
    }

    #[test]
    fn occupied_cells_block_search() {
        let mut w = super::helpers::world(&[
            &[0, 0, 0],
            &[1, 1, 0],
            &[0, 0, 0],
        ]);
        w.mark_occupied(Position::new(2, 1)).unwrap();
        assert!(shortest_path(&w, Position::new(0, 0), Position::new(0, 2)).is_none());
    }

    #[test]
    fn occupied_goal_is_reachable() {
        let mut w = super::helpers::ring();
        let quarry = Position::new(3, 3);
        w.mark_occupied(quarry).unwrap();
        let bfs = shortest_path(&w, Position::new(1, 1), quarry).unwrap();
        let astar = optimal_path(&w, Position::new(1, 1), quarry).unwrap();
        assert_eq!(bfs.goal(), quarry);
        assert_eq!(bfs.edge_count(), 4);
        assert_eq!(astar.edge_count(), 4);
    }

    #[test]
    fn bfs_and_astar_agree_on_every_pair() {
        let w = super::helpers::maze();
        let floor: Vec<Position> = w.floor_cells().collect();
        for &a in &floor {
            for &b in &floor {
                let bfs = BreadthFirst.find(&w, a, b);
                let astar = AStar.find(&w, a, b);
                assert_eq!(
                    bfs.as_ref().map(|p| p.edge_count()),
                    astar.as_ref().map(|p| p.edge_count()),
                    "{a} -> {b}"
                );
                if let Some(p) = astar {
                    super::helpers::assert_walkable(&w, &p);
                }
            }
        }
    }

    #[test]
    fn lengths_match_exhaustive_distances() {
        for w in [super::helpers::ring(), super::helpers::maze()] {
            let dist = super::helpers::all_pairs(&w);
            let floor: Vec<Position> = w.floor_cells().collect();
            for &a in &floor {
                for &b in &floor {
                    let (Some(i), Some(j)) = (w.index_of(a), w.index_of(b)) else { unreachable!() };
                    let expected = dist[i][j];
                    let bfs = shortest_path(&w, a, b).map(|p| p.edge_count() as u32);
                    let astar = optimal_path(&w, a, b).map(|p| p.edge_count() as u32);
                    assert_eq!(bfs, expected, "bfs {a} -> {b}");
                    assert_eq!(astar, expected, "astar {a} -> {b}");
                }
            }
        }
    }

    #[test]
    fn search_is_deterministic() {
        let w = super::helpers::maze();
        let a = optimal_path(&w, Position::new(1, 7), Position::new(8, 1));
        let b = optimal_path(&w, Position::new(1, 7), Position::new(8, 1));
        assert_eq!(a, b);
    }
}
