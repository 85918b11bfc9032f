//! `mz-agent` — Structure-of-Arrays agent storage for the maze pursuit engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`role`]      | `Role` (pursued / wanderer / interceptor)                   |
//! | [`store`]     | `AgentStore` (SoA positions, starts, paths)                 |
//! | [`mind`]      | `AgentMinds`, `AgentMind`, `AgentMemory` (per-agent state)  |
//! | [`builder`]   | `AgentStoreBuilder` (fluent construction)                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Role`.                  |

pub mod builder;
pub mod mind;
pub mod role;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use mind::{AgentMemory, AgentMind, AgentMinds, PerformanceSummary};
pub use role::Role;
pub use store::AgentStore;
