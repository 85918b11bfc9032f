//! `mz-behavior` — perception, classification, rule tables, scoring, and
//! agent controllers.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`context`]    | `TickContext<'a>` — read-only world snapshot for one agent   |
//! | [`percept`]    | `Percept`, `perceive`                                        |
//! | [`state`]      | Behavioral / completion state enums, `StateSpace`            |
//! | [`classify`]   | State classifiers, `FearMeter` (hysteresis)                  |
//! | [`rules`]      | `Action`, `RuleTable`, canonical tables                      |
//! | [`plan`]       | Candidate path planning (parallel with `parallel`)           |
//! | [`scoring`]    | `PerformanceScorer`, `Objective`, `best`, `rank`             |
//! | [`decision`]   | `Decision`, `Outcome`                                        |
//! | [`model`]      | `BehaviorModel` trait                                        |
//! | [`controller`] | `Forager`, `Wanderer`, `Interceptor`, `RoleBehavior`         |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                         |
//!
//! # Decision cycle
//!
//! ```text
//! perceive(agent) ─► classify ─► RuleTable::lookup ─┬─ Stop  ─► hold
//!                                                   ├─ Avoid ─► evade / hold
//!                                                   └─ Move  ─► plan ─► score ─► commit
//! ```
//!
//! Controllers never write the world.  They return a [`Decision`] and the
//! tick driver in `mz-sim` applies it before the next agent perceives.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Plans candidate paths on Rayon's thread pool.             |

pub mod classify;
pub mod context;
pub mod controller;
pub mod decision;
pub mod error;
pub mod model;
pub mod percept;
pub mod plan;
pub mod rules;
pub mod scoring;
pub mod state;

#[cfg(test)]
mod tests;

pub use classify::{FearMeter, classify_chase, classify_completion, classify_pursued};
pub use context::TickContext;
pub use controller::{Forager, Interceptor, RoleBehavior, Wanderer};
pub use decision::{Decision, Outcome};
pub use error::{BehaviorError, BehaviorResult};
pub use model::BehaviorModel;
pub use percept::{Percept, perceive};
pub use rules::{Action, PursuedRules, PursuerRules, RuleTable, pursued_rules, pursuer_rules};
pub use scoring::{Objective, PerformanceScorer};
pub use state::{
    BehavioralState, ChaseState, Completion, CompletionState, PursuedState, PursuerState,
    StateSpace,
};
