use thiserror::Error;

use wc_fleet::FleetError;

#[derive(Debug, Error, PartialEq)]
pub enum DispatchError {
    #[error("fill probability must be in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error(transparent)]
    Fleet(#[from] FleetError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
