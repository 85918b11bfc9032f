//! Level loading: maze, objectives, and agent starts.
//!
//! # Text layout
//!
//! | Glyph       | Cell                                      |
//! |-------------|-------------------------------------------|
//! | `#`         | wall                                      |
//! | `.`         | open, with an objective                   |
//! | ` ` or `_`  | open, empty                               |
//! | `P`         | open, pursued agent starts here           |
//! | `W`         | open, wanderer starts here                |
//! | `I`         | open, interceptor starts here             |
//!
//! Agents are numbered in row-major reading order.

use mz_agent::Role;
use mz_core::Position;
use mz_spatial::{CellKind, GridWorld};

use crate::{SimError, SimResult};

/// The 15×15 maze of the classic game.  Every open cell except the agent
/// starts holds a pellet (106 in total).
pub const CLASSIC: &str = "\
###############
#P...#...#...I#
#.##.#.#.#.##.#
#.#....#....#.#
#.#.#######.#.#
#.............#
#.#.##.#.##.#.#
#.#.........#.#
#.#.#######.#.#
#.#....#....#.#
#.##.#.#.#.##.#
#....#...#....#
#.#.#######.#.#
#............W#
###############
";

/// A loaded level, ready for [`SimBuilder::from_level`](crate::SimBuilder::from_level).
#[derive(Debug)]
pub struct Level {
    pub world:      GridWorld,
    pub objectives: Vec<Position>,
    pub agents:     Vec<(Role, Position)>,
}

impl Level {
    /// Parse a text layout.  Trailing blank lines are ignored; every other
    /// row must have the width of the first.
    pub fn parse(text: &str) -> SimResult<Level> {
        let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let Some(first) = lines.first() else {
            return Err(SimError::Level { line: 0, message: "level has no rows".into() });
        };
        let width = first.chars().count();

        let mut rows = Vec::with_capacity(lines.len());
        let mut objectives = Vec::new();
        let mut agents = Vec::new();

        for (y, line) in lines.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(SimError::Level {
                    line:    y + 1,
                    message: format!("row has {got} cells, expected {width}"),
                });
            }
            let mut row = Vec::with_capacity(width);
            for (x, glyph) in line.chars().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                let kind = match glyph {
                    '#' => CellKind::Wall,
                    '.' => {
                        objectives.push(pos);
                        CellKind::Open
                    }
                    ' ' | '_' => CellKind::Open,
                    'P' | 'W' | 'I' => {
                        agents.push((role_for(glyph), pos));
                        CellKind::Open
                    }
                    other => {
                        return Err(SimError::Level {
                            line:    y + 1,
                            message: format!("unknown glyph {other:?} at column {}", x + 1),
                        });
                    }
                };
                row.push(kind);
            }
            rows.push(row);
        }

        Ok(Level { world: GridWorld::from_rows(rows)?, objectives, agents })
    }

    /// Build from an integer maze (0 open, 1 wall, 2 occupied) with explicit
    /// objectives and agent starts.
    pub fn from_codes(
        rows:       &[Vec<u8>],
        objectives: impl IntoIterator<Item = Position>,
        agents:     Vec<(Role, Position)>,
    ) -> SimResult<Level> {
        Ok(Level {
            world: GridWorld::from_codes(rows)?,
            objectives: objectives.into_iter().collect(),
            agents,
        })
    }

    /// The classic 15×15 level: pursued agent top-left, interceptor
    /// top-right, wanderer bottom-right.
    pub fn classic() -> SimResult<Level> {
        Level::parse(CLASSIC)
    }
}

fn role_for(glyph: char) -> Role {
    match glyph {
        'P' => Role::Pursued,
        'W' => Role::Wanderer,
        _   => Role::Interceptor,
    }
}
