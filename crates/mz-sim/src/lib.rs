//! `mz-sim` — tick driver for the maze pursuit engine.
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① Pursued   — consume objective underfoot, decide, apply step,
//!                 consume objective on arrival.
//!   ② Pursuers  — decide and apply, ascending AgentId.  Every agent sees
//!                 the occupancy written by agents before it.
//!   ③ Captures  — report Caught pursuers; reset all agents if configured.
//!   ④ Output    — on_tick_end, then on_snapshot every output interval.
//! ```
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`sim`]        | `Sim` (`advance_tick`, `run`, `reset`, queries)     |
//! | [`builder`]    | `SimBuilder`                                        |
//! | [`level`]      | `Level` text / integer loader, the classic maze     |
//! | [`objectives`] | `ObjectiveSet`, `Scoreboard`, `ScoreReport`         |
//! | [`observer`]   | `SimObserver`, `NoopObserver`, per-step reports     |
//! | [`error`]      | `SimError`, `SimResult<T>`                          |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Plans candidate paths on Rayon's thread pool.          |
//! | `serde`    | Serde derives on core, spatial, and agent types.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mz_core::EngineConfig;
//! use mz_sim::{Level, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::from_level(EngineConfig::default(), Level::classic()?)?
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("score {}", sim.score().score);
//! ```

pub mod builder;
pub mod error;
pub mod level;
pub mod objectives;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use level::{CLASSIC, Level};
pub use objectives::{ObjectiveSet, ScoreReport, Scoreboard};
pub use observer::{NoopObserver, SimObserver, StepReport, TickSummary};
pub use sim::Sim;
