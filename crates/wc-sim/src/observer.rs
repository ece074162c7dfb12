//! Simulation observer trait for progress reporting and data collection.

use wc_core::Tick;
use wc_dispatch::StepReport;

use crate::{RunSummary, StepSnapshot};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at each step boundary.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, tick: Tick, report: &StepReport) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} serviced", report.serviced.len());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any phase runs.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after all three phases of a step have completed.
    fn on_step_end(&mut self, _tick: Tick, _report: &StepReport) {}

    /// Called once per step with an immutable copy of every entity.
    fn on_snapshot(&mut self, _snapshot: &StepSnapshot) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps every snapshot in memory, in step order.
#[derive(Default)]
pub struct SnapshotRecorder {
    pub snapshots: Vec<StepSnapshot>,
}

impl SnapshotRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SimObserver for SnapshotRecorder {
    fn on_snapshot(&mut self, snapshot: &StepSnapshot) {
        self.snapshots.push(snapshot.clone());
    }
}
