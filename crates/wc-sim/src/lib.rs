//! `wc-sim`: step loop orchestrator for the waste-collection fleet simulator.
//!
//! # Step loop
//!
//! ```text
//! for step in 0..config.steps:
//!   observer.on_step_start(step)
//!   Dispatcher::step                  fill → match → move/service
//!   observer.on_step_end(step, &report)
//!   observer.on_snapshot(&snapshot)   immutable copy of every entity
//! observer.on_sim_end(&summary)
//! ```
//!
//! Everything runs on the caller's thread; a step finishes completely before
//! the next one begins.  Setup errors abort before the first step; an error
//! inside a step is returned from [`Sim::step`] / [`Sim::run`] immediately.
//!
//! # Quick-start
//!
//! ```rust
//! use wc_core::FleetConfig;
//! use wc_sim::{NoopObserver, SimBuilder};
//!
//! let config = FleetConfig { steps: 10, ..FleetConfig::default() };
//! let mut sim = SimBuilder::new(config).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! assert_eq!(summary.steps_run, 10);
//! # Ok::<(), wc_sim::SimError>(())
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, SnapshotRecorder};
pub use sim::Sim;
pub use snapshot::{RunSummary, StepSnapshot, VehicleSummary};
