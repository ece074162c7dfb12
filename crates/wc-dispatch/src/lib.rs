//! `wc-dispatch`: the per-step dispatch-and-routing policy.
//!
//! # Step phases
//!
//! ```text
//! ① Fill   : each empty container becomes full with probability p_fill
//!             (one draw per empty container, ascending ContainerId).
//! ② Match  : for each full, unassigned container in ascending ContainerId:
//!               eligible = idle vehicles with headroom ≥ container capacity
//!               pick min by (distance, load, VehicleId) and assign.
//! ③ Move   : for each active vehicle in ascending VehicleId:
//!               at target      → service
//!               otherwise      → one greedy step toward the target
//! ```
//!
//! The phase order is part of the contract; swapping phases changes results.
//! Matching is single-pass and greedy: no backtracking, no global
//! optimisation.  A container with no eligible vehicle simply waits for a
//! later step.

pub mod dispatcher;
pub mod error;
pub mod report;


pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use report::{Assignment, Service, StepReport};
