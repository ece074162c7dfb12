//! Run parameters.
//!
//! Typically built in code or loaded from a JSON file by the application
//! crate (with the `serde` feature) and passed to the simulation builder.

use crate::{CoreError, CoreResult};

/// Map side used when a config leaves out `width` or `height`.
pub const DEFAULT_MAP_SIDE: u32 = 20;

#[cfg(feature = "serde")]
fn default_map_side() -> u32 {
    DEFAULT_MAP_SIDE
}

/// Top-level simulation configuration.
///
/// The grid itself is supplied separately to the builder; `width`/`height`
/// describe the all-passable map used when no explicit grid is given.  Both
/// may be left out of a serialized config and default to
/// [`DEFAULT_MAP_SIDE`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetConfig {
    /// Number of collection vehicles.
    pub vehicle_count: usize,

    /// Number of waste containers.
    pub container_count: usize,

    /// Total steps to simulate.
    pub steps: u64,

    /// Load units each vehicle can carry over the whole run.
    pub vehicle_capacity: u32,

    /// Load units a full container hands over when serviced.
    pub container_capacity: u32,

    /// Per-step probability that an empty container becomes full.
    pub fill_probability: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Map width in cells (used when no explicit grid is supplied).
    #[cfg_attr(feature = "serde", serde(default = "default_map_side"))]
    pub width: u32,

    /// Map height in cells (used when no explicit grid is supplied).
    #[cfg_attr(feature = "serde", serde(default = "default_map_side"))]
    pub height: u32,
}

impl FleetConfig {
    /// Reject non-positive counts, capacities, steps or map dimensions, and a
    /// fill probability outside `(0, 1]`.
    ///
    /// Grid-size sufficiency is checked by the builder once the actual grid
    /// is known.
    pub fn validate(&self) -> CoreResult<()> {
        let positive: [(&str, u64); 7] = [
            ("vehicle_count", self.vehicle_count as u64),
            ("container_count", self.container_count as u64),
            ("steps", self.steps),
            ("vehicle_capacity", u64::from(self.vehicle_capacity)),
            ("container_capacity", u64::from(self.container_capacity)),
            ("width", u64::from(self.width)),
            ("height", u64::from(self.height)),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(CoreError::Config(format!("{name} must be positive")));
            }
        }

        if !(self.fill_probability > 0.0 && self.fill_probability <= 1.0) {
            return Err(CoreError::Config(format!(
                "fill_probability must be in (0, 1], got {}",
                self.fill_probability
            )));
        }
        Ok(())
    }

    /// Passable cells needed to place every entity on its own cell.
    #[inline]
    pub fn required_cells(&self) -> usize {
        self.vehicle_count + self.container_count
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            vehicle_count:      3,
            container_count:    10,
            steps:              100,
            vehicle_capacity:   500,
            container_capacity: 50,
            fill_probability:   0.05,
            seed:               42,
            width:              DEFAULT_MAP_SIDE,
            height:             DEFAULT_MAP_SIDE,
        }
    }
}
