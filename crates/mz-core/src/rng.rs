//! Deterministic per-agent RNG and the injectable `RandomSource` seam.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space, so
//! adding a pursuer at the end of the roster does not disturb the random
//! headings of the existing ones.
//!
//! # Injection
//!
//! Policies never call `rand` directly.  They take a `&mut impl RandomSource`
//! so tests can drive random tie-breaks with a scripted stub instead of a
//! seeded generator.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The only randomness a policy is allowed to consume: a uniform index into
/// a non-empty list of options.
pub trait RandomSource {
    /// Uniform index in `0..len`.  `len` is always at least 1.
    fn pick_index(&mut self, len: usize) -> usize;
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Created once per agent by `AgentStoreBuilder` and kept outside the shared
/// agent store so a policy can hold `&mut AgentRng` while reading the store.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for AgentRng {
    #[inline]
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
