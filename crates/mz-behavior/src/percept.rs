//! Perception: a bounded, side-effect-free read of the world around one
//! agent.
//!
//! | Field                 | Source                                          |
//! |-----------------------|-------------------------------------------------|
//! | `neighbors`           | grid cells N/S/W/E, outside the grid = `Wall`   |
//! | `agents_in_window`    | `Occupied` markers in the Chebyshev window      |
//! | `nearest_agent`       | Manhattan distance to the closest other agent   |
//! | `pursued`             | position of the pursued agent (pursuers only)   |
//! | `pursued_cornered`    | pursued agent has no passable neighbour         |
//!
//! Window detection reads the grid's `Occupied` markers rather than the
//! agent list, so it sees exactly what search sees.  The agent's own cell is
//! excluded.

use mz_core::{AgentId, Direction, Position};
use mz_spatial::CellKind;

use crate::TickContext;

/// One agent's momentary observation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Percept {
    pub position: Position,

    /// Cell kinds in [`Direction::ALL`] order.
    pub neighbors: [CellKind; 4],

    /// Other agents inside the square window of the requested radius.
    pub agents_in_window: usize,

    /// Manhattan distance to the closest other agent.
    pub nearest_agent: Option<u32>,

    /// Where the pursued agent stands, for everyone except the pursued agent.
    pub pursued: Option<Position>,

    /// `true` if the pursued agent has no passable neighbour.
    pub pursued_cornered: bool,
}

impl Percept {
    /// Number of `Open` neighbours.
    pub fn open_neighbors(&self) -> usize {
        self.neighbors.iter().filter(|&&k| k == CellKind::Open).count()
    }

    /// Headings whose neighbour is `Open`.
    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .zip(self.neighbors)
            .filter(|&(_, k)| k == CellKind::Open)
            .map(|(d, _)| d)
    }

    /// Manhattan distance to the pursued agent.
    pub fn pursued_distance(&self) -> Option<u32> {
        self.pursued.map(|p| self.position.manhattan(p))
    }

    /// `true` if the pursued agent is within `radius` (Manhattan).
    pub fn pursued_within(&self, radius: u32) -> bool {
        self.pursued_distance().is_some_and(|d| d <= radius)
    }
}

/// Observe the world from `agent`'s cell with a square window of
/// half-width `radius`.
pub fn perceive(agent: AgentId, ctx: &TickContext<'_>, radius: u32) -> Percept {
    let world = ctx.world;
    let position = ctx.agents.position_of(agent);
    let neighbors = position.neighbors().map(|n| world.kind_or_wall(n));

    let r = radius as i32;
    let mut agents_in_window = 0;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx == 0 && dy == 0 {
                continue;
            }
            if world.is_occupied(Position::new(position.x + dx, position.y + dy)) {
                agents_in_window += 1;
            }
        }
    }

    let nearest_agent = ctx
        .agents
        .others(agent)
        .map(|(_, p)| position.manhattan(p))
        .min();

    let pursued = ctx
        .agents
        .pursued()
        .filter(|&p| p != agent)
        .map(|p| ctx.agents.position_of(p));

    let pursued_cornered = pursued.is_some_and(|p| world.passable_neighbors(p).next().is_none());

    Percept {
        position,
        neighbors,
        agents_in_window,
        nearest_agent,
        pursued,
        pursued_cornered,
    }
}
