use thiserror::Error;

use mz_core::CoreError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("rule table has no action for ({state}, {completion})")]
    IncompleteRuleTable {
        state:      &'static str,
        completion: &'static str,
    },

    #[error("rule table maps ({state}, {completion}) twice")]
    DuplicateRule {
        state:      &'static str,
        completion: &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
