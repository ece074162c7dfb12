//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors detected while validating run parameters, before any step executes.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `wc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
