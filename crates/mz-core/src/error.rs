//! Engine-wide base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so configuration problems surface unchanged at the
//! simulation boundary.

use thiserror::Error;

/// The top-level error type for `mz-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mz-core`.
pub type CoreResult<T> = Result<T, CoreError>;
