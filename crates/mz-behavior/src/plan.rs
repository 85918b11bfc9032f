//! Candidate path planning.
//!
//! Search calls are pure reads of the grid, so with the `parallel` feature
//! the candidates are planned on Rayon's pool.  `collect` on an indexed
//! parallel iterator preserves order, so the result is the same list either
//! way.

use mz_core::{Position, SearchKind};
use mz_spatial::{GridWorld, Path, pathfinder};

/// One path per goal, `None` where the goal is unreachable.
pub fn plan_candidates(
    kind:  SearchKind,
    world: &GridWorld,
    start: Position,
    goals: &[Position],
) -> Vec<Option<Path>> {
    let finder = pathfinder(kind);

    #[cfg(not(feature = "parallel"))]
    {
        goals.iter().map(|&g| finder.find(world, start, g)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        goals.par_iter().map(|&g| finder.find(world, start, g)).collect()
    }
}

/// The `limit` goals nearest to `from` by Manhattan distance, ties broken
/// by position.  `None` keeps them all.
pub fn nearest_goals<'a>(
    from:  Position,
    goals: impl IntoIterator<Item = &'a Position>,
    limit: Option<usize>,
) -> Vec<Position> {
    let mut sorted: Vec<Position> = goals.into_iter().copied().collect();
    sorted.sort_by_key(|&g| (from.manhattan(g), g));
    if let Some(n) = limit {
        sorted.truncate(n);
    }
    sorted
}
