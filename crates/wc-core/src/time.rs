//! Discrete step counter.
//!
//! The simulation has no wall-clock mapping: one `Tick` is one
//! fill → match → move/service cycle.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.  Tick 0 is the first step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the next step to execute against a fixed step budget.
///
/// There is no early-stop condition: a run is finished exactly when
/// `current_tick` reaches `total_steps`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Steps to execute in a full run.
    pub total_steps: u64,
    /// The next step to execute: advanced by `SimClock::advance()`.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(total_steps: u64) -> Self {
        Self {
            total_steps,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// `true` once the step budget is exhausted.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_tick.0 >= self.total_steps
    }

    /// Steps left before the budget is exhausted.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.total_steps.saturating_sub(self.current_tick.0)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.current_tick, self.total_steps)
    }
}
