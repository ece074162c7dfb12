//! Greedy one-cell movement.
//!
//! Each tick an active vehicle looks at its passable 4-neighbours and moves
//! to the one with the smallest Euclidean distance to the target, provided
//! that neighbour is strictly closer than where it already stands.  Ties go
//! to the first neighbour in enumeration order (`+x, -x, +y, -y`).
//!
//! This is local hill-climbing, not path search.  Around a concave obstacle
//! the vehicle can reach a cell where no neighbour improves on the current
//! distance; it then stays put every tick ([`StepOutcome::Stalled`]) until
//! something external changes.  A vehicle with no passable neighbour at all
//! reports [`StepOutcome::Blocked`].  Neither is an error.

use wc_core::Cell;
use wc_grid::Grid;

/// Result of one movement attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// Moved one cell.
    Moved { from: Cell, to: Cell },
    /// Passable neighbours exist but none is closer to the target.
    Stalled,
    /// No passable neighbour.
    Blocked,
}

impl StepOutcome {
    #[inline]
    pub fn moved(self) -> bool {
        matches!(self, StepOutcome::Moved { .. })
    }
}

/// Pick the next cell from `from` toward `target` without mutating anything.
pub fn greedy_step(from: Cell, target: Cell, grid: &Grid) -> StepOutcome {
    let mut best: Option<(Cell, f64)> = None;
    for n in grid.passable_neighbors(from) {
        let d = n.distance(target);
        // Strict `<` keeps the earliest neighbour on ties.
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((n, d));
        }
    }

    match best {
        None => StepOutcome::Blocked,
        Some((to, d)) if d < from.distance(target) => StepOutcome::Moved { from, to },
        Some(_) => StepOutcome::Stalled,
    }
}
