//! `wc-core`: foundational types for the waste-collection fleet simulator.
//!
//! This crate is a dependency of every other `wc-*` crate.  It has no `wc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`, `ContainerId`                            |
//! | [`geo`]         | `Cell`, Euclidean / Chebyshev / Manhattan distances   |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `FleetConfig` and its validation                      |
//! | [`rng`]         | `SimRng` (the single injectable random source)        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_MAP_SIDE, FleetConfig};
pub use error::{CoreError, CoreResult};
pub use geo::Cell;
pub use ids::{ContainerId, VehicleId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
