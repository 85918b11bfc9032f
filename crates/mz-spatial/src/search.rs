//! Path search over a [`GridWorld`].
//!
//! # Pluggability
//!
//! Controllers call search through the [`Pathfinder`] trait so the engine can
//! pick breadth-first or A* per agent family from configuration, and tests
//! can swap in a scripted finder.
//!
//! # Path convention
//!
//! Every [`Path`] lists cells from the start cell to the goal cell
//! **inclusive of both**.  `shortest_path(p, p)` is therefore `[p]`, and the
//! cell an agent moves to next is [`Path::next_step`] (index 1).  Both
//! searches follow the same convention; A* prepends the start cell after
//! walking its parent links.
//!
//! # Costs
//!
//! Moves are cardinal only and cost 1, so a path's length is its edge count
//! (`cells - 1`).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use mz_core::{Position, SearchKind};

use crate::grid::{CellKind, GridWorld};

/// Parent sentinel for cells not yet reached.
const UNREACHED: usize = usize::MAX;

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered walk from a start cell to a goal cell, both included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    /// Wrap a non-empty cell sequence.  Returns `None` for an empty list;
    /// there is no empty path.
    pub fn new(cells: Vec<Position>) -> Option<Path> {
        (!cells.is_empty()).then_some(Path { cells })
    }

    /// The single-cell path `[pos]`.
    pub fn at(pos: Position) -> Path {
        Path { cells: vec![pos] }
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.cells[0]
    }

    #[inline]
    pub fn goal(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    /// All cells, start first.
    #[inline]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Cells after the start: the moves still to be made.
    #[inline]
    pub fn steps(&self) -> &[Position] {
        &self.cells[1..]
    }

    /// Number of moves (edges).  0 for a single-cell path.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.cells.len() - 1
    }

    /// Number of cells, both endpoints included.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// `true` if start and goal coincide.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.cells.len() == 1
    }

    /// The cell to move to this tick, if any move remains.
    #[inline]
    pub fn next_step(&self) -> Option<Position> {
        self.cells.get(1).copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable search engine.
///
/// Implementations must be `Send + Sync` so candidate paths can be computed
/// on Rayon worker threads (feature `parallel` of `mz-behavior`).
pub trait Pathfinder: Send + Sync {
    /// Find a path from `start` to `goal`.
    ///
    /// Returns `None` when no passable path connects them, including when
    /// `goal` is a wall or outside the grid.  Unreachability is an expected
    /// outcome, not an error.
    fn find(&self, world: &GridWorld, start: Position, goal: Position) -> Option<Path>;
}

/// Breadth-first search: minimum edge count.
#[derive(Copy, Clone, Debug, Default)]
pub struct BreadthFirst;

impl Pathfinder for BreadthFirst {
    fn find(&self, world: &GridWorld, start: Position, goal: Position) -> Option<Path> {
        shortest_path(world, start, goal)
    }
}

/// A* with the Manhattan heuristic: optimal on unit-cost grids, usually
/// expands fewer cells than breadth-first.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar;

impl Pathfinder for AStar {
    fn find(&self, world: &GridWorld, start: Position, goal: Position) -> Option<Path> {
        optimal_path(world, start, goal)
    }
}

/// The search engine configured by `kind`.
pub fn pathfinder(kind: SearchKind) -> &'static dyn Pathfinder {
    match kind {
        SearchKind::BreadthFirst => &BreadthFirst,
        SearchKind::AStar        => &AStar,
    }
}

/// One-shot search with the engine configured by `kind`.
pub fn find_path(kind: SearchKind, world: &GridWorld, start: Position, goal: Position) -> Option<Path> {
    pathfinder(kind).find(world, start, goal)
}

// ── Shared endpoint rules ─────────────────────────────────────────────────────

/// Resolve the endpoints common to both searches.
///
/// `Err(result)` short-circuits the search with `result`; `Ok((s, g))`
/// yields the start and goal cell indices.
fn endpoints(
    world: &GridWorld,
    start: Position,
    goal:  Position,
) -> Result<(usize, usize), Option<Path>> {
    let (Some(s), Some(g)) = (world.index_of(start), world.index_of(goal)) else {
        return Err(None);
    };
    if world.kind_or_wall(goal) == CellKind::Wall {
        return Err(None);
    }
    if s == g {
        return Err(Some(Path::at(start)));
    }
    Ok((s, g))
}

/// Whether a search may step onto `pos`.  Intermediate cells must be
/// passable; the goal may also carry the `Occupied` marker.
#[inline]
fn enterable(world: &GridWorld, pos: Position, goal: Position) -> bool {
    world.passable(pos) || (pos == goal && world.is_occupied(pos))
}

fn reconstruct(world: &GridWorld, parent: &[usize], start: usize, goal: usize) -> Path {
    let mut cells = Vec::new();
    let mut cur = goal;
    while cur != start {
        cells.push(world.position_of(cur));
        cur = parent[cur];
    }
    cells.push(world.position_of(start));
    cells.reverse();
    Path { cells }
}

// ── Breadth-first search ──────────────────────────────────────────────────────

/// Unweighted shortest path.
///
/// A cell is marked visited the first time it is enqueued, so the first
/// discovery of any cell is along a shortest route and nothing is expanded
/// twice.  The search stops as soon as the goal is discovered.
pub fn shortest_path(world: &GridWorld, start: Position, goal: Position) -> Option<Path> {
    let (s, g) = match endpoints(world, start, goal) {
        Ok(ends) => ends,
        Err(result) => return result,
    };

    let mut parent = vec![UNREACHED; world.cell_count()];
    parent[s] = s;

    let mut queue = VecDeque::from([s]);
    while let Some(cur) = queue.pop_front() {
        let here = world.position_of(cur);
        for next in here.neighbors() {
            if !enterable(world, next, goal) {
                continue;
            }
            // `enterable` implies in bounds.
            let Some(n) = world.index_of(next) else { continue };
            if parent[n] != UNREACHED {
                continue;
            }
            parent[n] = cur;
            if n == g {
                return Some(reconstruct(world, &parent, s, g));
            }
            queue.push_back(n);
        }
    }

    None
}

// ── A* search ─────────────────────────────────────────────────────────────────

/// Heuristic-guided shortest path.
///
/// Heap key is `(f, g, cell)` with `f = g + manhattan(cell, goal)`.  `g`
/// breaks ties between equal `f`, and the cell index breaks the rest, so
/// results are reproducible.  The Manhattan heuristic is consistent on a
/// 4-connected unit-cost grid, so the first pop of the goal is optimal.
/// Improved frontier costs are pushed as fresh heap entries; stale entries
/// are skipped on pop by comparing against the best known cost.
pub fn optimal_path(world: &GridWorld, start: Position, goal: Position) -> Option<Path> {
    let (s, g) = match endpoints(world, start, goal) {
        Ok(ends) => ends,
        Err(result) => return result,
    };

    let n = world.cell_count();
    // best[v] = cheapest known cost from start to v.
    let mut best   = vec![u32::MAX; n];
    let mut parent = vec![UNREACHED; n];

    best[s] = 0;
    parent[s] = s;

    // Min-heap via Reverse: (f, g, cell).
    let mut heap: BinaryHeap<Reverse<(u32, u32, usize)>> = BinaryHeap::new();
    heap.push(Reverse((start.manhattan(goal), 0, s)));

    while let Some(Reverse((_f, cost, cur))) = heap.pop() {
        // Skip stale heap entries.
        if cost > best[cur] {
            continue;
        }
        if cur == g {
            return Some(reconstruct(world, &parent, s, g));
        }

        let here = world.position_of(cur);
        for next in here.neighbors() {
            if !enterable(world, next, goal) {
                continue;
            }
            let Some(v) = world.index_of(next) else { continue };
            let new_cost = cost + 1;
            if new_cost < best[v] {
                best[v] = new_cost;
                parent[v] = cur;
                heap.push(Reverse((new_cost + next.manhattan(goal), new_cost, v)));
            }
        }
    }

    None
}
