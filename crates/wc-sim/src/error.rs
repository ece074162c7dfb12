use thiserror::Error;

use wc_core::CoreError;
use wc_dispatch::DispatchError;
use wc_grid::GridError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match configured count {expected}")]
    EntityCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("placement failed: {0}")]
    Grid(#[from] GridError),

    #[error("step failed: {0}")]
    Dispatch(#[from] DispatchError),
}

pub type SimResult<T> = Result<T, SimError>;
