//! Grid error type.

use thiserror::Error;

use wc_core::Cell;

/// Errors produced by `wc-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("no free passable cell: requested {requested}, available {available}")]
    NoFreeCell { requested: usize, available: usize },

    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    #[error("cell {0} is impassable")]
    Impassable(Cell),

    #[error("map parse error: {0}")]
    Parse(String),
}

pub type GridResult<T> = Result<T, GridError>;
