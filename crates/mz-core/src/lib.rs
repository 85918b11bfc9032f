//! `mz-core` — foundational types for the maze pursuit engine.
//!
//! This crate is a dependency of every other `mz-*` crate.  It intentionally
//! has no `mz-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`position`]    | `Position`, `Direction`, Manhattan/Chebyshev metrics  |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent), `RandomSource`                |
//! | [`config`]      | `EngineConfig` and its per-family sections            |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on public types (JSON configs)   |

pub mod config;
pub mod error;
pub mod ids;
pub mod position;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AvoidPolicy, EngineConfig, PursuedConfig, PursuerConfig, SearchKind};
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use position::{Direction, Position};
pub use rng::{AgentRng, RandomSource};
pub use time::Tick;
