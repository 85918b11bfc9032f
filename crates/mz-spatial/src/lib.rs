//! `mz-spatial` — grid world and path search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                          |
//! |------------|-------------------------------------------------------------------|
//! | [`grid`]   | `CellKind`, `GridWorld`, `GridWorldBuilder`                       |
//! | [`search`] | `Path`, `Pathfinder` trait, `BreadthFirst`, `AStar`, `pathfinder` |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                                |
//!
//! # Passability
//!
//! [`GridWorld::passable`] is the single rule both perception and search
//! consult: a cell is passable iff it is in bounds and `Open`.  Cells
//! carrying the transient `Occupied` marker are never planned through, so
//! agents do not route through each other.  The only exception is a search
//! *goal* that is `Occupied`: a pursuer may target the cell its quarry
//! stands on.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod search;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use grid::{CellKind, GridWorld, GridWorldBuilder};
pub use search::{
    AStar, BreadthFirst, Path, Pathfinder, find_path, optimal_path, pathfinder, shortest_path,
};
