//! The `Sim` struct and its step loop.

use wc_core::{FleetConfig, SimClock, SimRng, Tick};
use wc_dispatch::{Dispatcher, StepReport};
use wc_fleet::Fleet;
use wc_grid::Grid;

use crate::{RunSummary, SimObserver, SimResult, StepSnapshot};

/// The main simulation runner.
///
/// Owns the terrain, both entity collections, the dispatcher and the single
/// random source.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run parameters.
    pub config: FleetConfig,

    /// Step counter and budget.
    pub clock: SimClock,

    /// Read-only terrain.
    pub grid: Grid,

    /// Vehicles and containers, mutated only by the dispatcher.
    pub fleet: Fleet,

    /// Per-step policy.
    pub dispatcher: Dispatcher,

    /// Seeded from `config.seed`; placement draws have already been taken.
    pub rng: SimRng,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the remaining steps of the budget, then report the summary.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        while !self.clock.is_finished() {
            self.observed_step(observer)?;
        }
        let summary = self.summary();
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Run exactly `n` steps from the current position (ignores the budget).
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end`.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    /// Execute one fill → match → move/service step and advance the clock.
    pub fn step(&mut self) -> SimResult<StepReport> {
        let report = self.dispatcher.step(&mut self.fleet, &self.grid, &mut self.rng)?;
        self.clock.advance();
        Ok(report)
    }

    /// Immutable copy of the current entity state, labelled with the last
    /// completed step.  `None` until the first step has run.
    pub fn snapshot(&self) -> Option<StepSnapshot> {
        let last = self.clock.current_tick.0.checked_sub(1)?;
        Some(StepSnapshot::capture(Tick(last), &self.fleet))
    }

    /// Per-vehicle final position, load and service count, plus totals.
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_fleet(self.clock.current_tick.0, &self.fleet)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_step_start(now);
        let report = self.step()?;
        observer.on_step_end(now, &report);
        observer.on_snapshot(&StepSnapshot::capture(now, &self.fleet));
        Ok(())
    }
}
