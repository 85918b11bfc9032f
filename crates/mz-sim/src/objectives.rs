//! Live objective cells and the running score.

use std::collections::BTreeSet;

use mz_core::Position;

// ── ObjectiveSet ──────────────────────────────────────────────────────────────

/// The cells the pursued agent still has to visit (pellets).
///
/// Ordered so that iteration, and therefore candidate planning, never
/// depends on hash seeds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectiveSet {
    live: BTreeSet<Position>,
}

impl ObjectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an objective.  Returns `false` if it was already live.
    pub fn insert(&mut self, pos: Position) -> bool {
        self.live.insert(pos)
    }

    /// Remove an objective.  Returns `false` if it was not live.
    pub fn remove(&mut self, pos: Position) -> bool {
        self.live.remove(&pos)
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.live.contains(&pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.live.iter().copied()
    }

    /// The set as controllers read it through `TickContext`.
    #[inline]
    pub fn as_set(&self) -> &BTreeSet<Position> {
        &self.live
    }
}

impl FromIterator<Position> for ObjectiveSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self { live: iter.into_iter().collect() }
    }
}

impl Extend<Position> for ObjectiveSet {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        self.live.extend(iter);
    }
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

/// Score state after an objective is consumed, or at any time on request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScoreReport {
    pub score:     u64,
    pub eaten:     usize,
    pub remaining: usize,
}

impl ScoreReport {
    /// `true` once no objective remains.
    #[inline]
    pub fn is_won(&self) -> bool {
        self.remaining == 0
    }
}

/// Running totals: points, objectives consumed, captures suffered.
#[derive(Clone, Debug)]
pub struct Scoreboard {
    pellet_value: u32,
    score:        u64,
    eaten:        usize,
    captures:     usize,
}

impl Scoreboard {
    pub fn new(pellet_value: u32) -> Self {
        Self { pellet_value, score: 0, eaten: 0, captures: 0 }
    }

    /// Credit one consumed objective.  `remaining` is the live count after
    /// removal.
    pub fn eat(&mut self, remaining: usize) -> ScoreReport {
        self.score += u64::from(self.pellet_value);
        self.eaten += 1;
        self.report(remaining)
    }

    pub fn record_capture(&mut self) {
        self.captures += 1;
    }

    pub fn report(&self, remaining: usize) -> ScoreReport {
        ScoreReport { score: self.score, eaten: self.eaten, remaining }
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn eaten(&self) -> usize {
        self.eaten
    }

    #[inline]
    pub fn captures(&self) -> usize {
        self.captures
    }
}
