//! Rule tables: (behavioral state × completion state) → action.
//!
//! A table is immutable data built once and injected into a controller.
//! [`RuleTable::new`] refuses to build unless every combination of the two
//! axes has exactly one entry, so `lookup` itself cannot fail.
//!
//! # Canonical tables
//!
//! Pursued agent:
//!
//! | Behavioral | Completion | Action |
//! |------------|------------|--------|
//! | Clear      | Acting     | Move   |
//! | NearAgent  | Acting     | Avoid  |
//! | Blocked    | Acting     | Stop   |
//! | *any*      | Goal       | Stop   |
//!
//! Pursuers:
//!
//! | Behavioral | Completion | Action |
//! |------------|------------|--------|
//! | *any*      | Chasing    | Move   |
//! | *any*      | Caught     | Stop   |

use std::fmt;

use crate::state::{ChaseState, CompletionState, PursuedState, PursuerState, StateSpace};
use crate::{BehaviorError, BehaviorResult};

/// Abstract action chosen by a rule table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    Move,
    Avoid,
    Stop,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Move  => "move",
            Action::Avoid => "avoid",
            Action::Stop  => "stop",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RuleTable ─────────────────────────────────────────────────────────────────

/// Dense, validated (S × C) → [`Action`] map.
#[derive(Clone, Debug)]
pub struct RuleTable<S: StateSpace, C: StateSpace> {
    /// `actions[s.ordinal() * C::ALL.len() + c.ordinal()]`
    actions: Vec<Action>,
    _axes:   std::marker::PhantomData<(S, C)>,
}

impl<S: StateSpace, C: StateSpace> RuleTable<S, C> {
    /// Build from `(state, completion, action)` rows.
    ///
    /// # Errors
    ///
    /// [`BehaviorError::DuplicateRule`] if a combination appears twice,
    /// [`BehaviorError::IncompleteRuleTable`] for the first combination
    /// with no row.
    pub fn new(rows: &[(S, C, Action)]) -> BehaviorResult<Self> {
        let width = C::ALL.len();
        let mut slots: Vec<Option<Action>> = vec![None; S::ALL.len() * width];

        for &(s, c, action) in rows {
            let slot = &mut slots[s.ordinal() * width + c.ordinal()];
            if slot.is_some() {
                return Err(BehaviorError::DuplicateRule {
                    state:      s.as_str(),
                    completion: c.as_str(),
                });
            }
            *slot = Some(action);
        }

        let mut actions = Vec::with_capacity(slots.len());
        for &s in S::ALL {
            for &c in C::ALL {
                match slots[s.ordinal() * width + c.ordinal()] {
                    Some(action) => actions.push(action),
                    None => {
                        return Err(BehaviorError::IncompleteRuleTable {
                            state:      s.as_str(),
                            completion: c.as_str(),
                        });
                    }
                }
            }
        }

        Ok(Self { actions, _axes: std::marker::PhantomData })
    }

    #[inline]
    pub fn lookup(&self, state: S, completion: C) -> Action {
        self.actions[state.ordinal() * C::ALL.len() + completion.ordinal()]
    }

    /// Every `(state, completion, action)` triple, state-major.
    pub fn entries(&self) -> impl Iterator<Item = (S, C, Action)> + '_ {
        S::ALL
            .iter()
            .flat_map(|&s| C::ALL.iter().map(move |&c| (s, c)))
            .map(|(s, c)| (s, c, self.lookup(s, c)))
    }
}

pub type PursuedRules = RuleTable<PursuedState, CompletionState>;
pub type PursuerRules = RuleTable<PursuerState, ChaseState>;

/// The canonical pursued-agent table.
pub fn pursued_rules() -> BehaviorResult<PursuedRules> {
    use CompletionState::{Acting, Goal};
    use PursuedState::{Blocked, Clear, NearAgent};

    RuleTable::new(&[
        (Clear,     Acting, Action::Move),
        (NearAgent, Acting, Action::Avoid),
        (Blocked,   Acting, Action::Stop),
        (Clear,     Goal,   Action::Stop),
        (NearAgent, Goal,   Action::Stop),
        (Blocked,   Goal,   Action::Stop),
    ])
}

/// The canonical pursuer table.  No `Avoid`: a scared pursuer still moves,
/// it just scores candidates differently.
pub fn pursuer_rules() -> BehaviorResult<PursuerRules> {
    use ChaseState::{Caught, Chasing};
    use PursuerState::{Normal, Scared};

    RuleTable::new(&[
        (Normal, Chasing, Action::Move),
        (Scared, Chasing, Action::Move),
        (Normal, Caught,  Action::Stop),
        (Scared, Caught,  Action::Stop),
    ])
}
