//! Data handed to collaborators: per-step snapshots and the end-of-run summary.

use wc_core::{Cell, Tick, VehicleId};
use wc_fleet::{Container, Fleet, Vehicle};

/// Every entity's state at the end of one step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSnapshot {
    /// Index of the step that produced this state (first step is `T0`).
    pub step:       Tick,
    pub vehicles:   Vec<Vehicle>,
    pub containers: Vec<Container>,
}

impl StepSnapshot {
    pub(crate) fn capture(step: Tick, fleet: &Fleet) -> Self {
        Self {
            step,
            vehicles:   fleet.vehicles.clone(),
            containers: fleet.containers.clone(),
        }
    }
}

/// Final state of one vehicle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleSummary {
    pub vehicle:             VehicleId,
    pub position:            Cell,
    pub load:                u32,
    pub containers_serviced: u32,
}

/// End-of-run record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub steps_run:           u64,
    pub vehicles:            Vec<VehicleSummary>,
    pub total_load:          u64,
    pub containers_serviced: u64,
    /// Containers still full when the run ended.
    pub containers_waiting:  usize,
}

impl RunSummary {
    pub(crate) fn from_fleet(steps_run: u64, fleet: &Fleet) -> Self {
        let vehicles: Vec<VehicleSummary> = fleet
            .vehicles
            .iter()
            .map(|v| VehicleSummary {
                vehicle:             v.id,
                position:            v.position,
                load:                v.load(),
                containers_serviced: v.units_collected(),
            })
            .collect();

        Self {
            steps_run,
            total_load:          vehicles.iter().map(|v| u64::from(v.load)).sum(),
            containers_serviced: vehicles.iter().map(|v| u64::from(v.containers_serviced)).sum(),
            containers_waiting:  fleet.containers.iter().filter(|c| c.is_full()).count(),
            vehicles,
        }
    }
}
