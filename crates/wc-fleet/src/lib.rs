//! `wc-fleet`: the two entity kinds and their state machines.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`container`]   | `Container`, `ContainerState` (`Empty → Full → Assigned`)  |
//! | [`vehicle`]     | `Vehicle`: position, load, target, service bookkeeping    |
//! | [`movement`]    | `greedy_step`, `StepOutcome`: one-cell hill-climbing      |
//! | [`fleet`]       | `Fleet` (two typed collections), `FleetBuilder`            |
//! | [`error`]       | `FleetError`, `FleetResult<T>`                             |
//!
//! # Design notes
//!
//! Vehicles and containers never need polymorphic dispatch through a common
//! interface, so they live in two explicit `Vec`s indexed by their typed IDs
//! rather than in one heterogeneous agent list.  Every state change goes
//! through a checked transition method; an out-of-order call returns
//! [`FleetError`] and leaves both entities untouched.

pub mod container;
pub mod error;
pub mod fleet;
pub mod movement;
pub mod vehicle;


pub use container::{Container, ContainerState};
pub use error::{FleetError, FleetResult};
pub use fleet::{Fleet, FleetBuilder};
pub use movement::{StepOutcome, greedy_step};
pub use vehicle::Vehicle;
