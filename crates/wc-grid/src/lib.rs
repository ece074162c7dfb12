//! `wc-grid`: the static terrain map.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `Grid` (row-major passability), `GridBuilder`, ASCII maps   |
//! | [`error`]   | `GridError`, `GridResult<T>`                                |
//!
//! The grid owns no simulation state beyond the terrain itself.  After
//! construction it is only ever queried, so the simulation shares it by
//! plain `&Grid` borrows.

pub mod error;
pub mod grid;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::{Grid, GridBuilder};
