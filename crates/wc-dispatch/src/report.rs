//! What happened during one step.

use wc_core::{ContainerId, VehicleId};

/// A vehicle claimed a container during the match phase.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Assignment {
    pub vehicle:   VehicleId,
    pub container: ContainerId,
    /// Euclidean distance at the time of matching.
    pub distance:  f64,
}

/// A vehicle emptied its target container during the move phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Service {
    pub vehicle:   VehicleId,
    pub container: ContainerId,
    pub units:     u32,
}

/// Per-step outcome lists, each in ascending ID order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Containers that went from empty to full.
    pub filled:      Vec<ContainerId>,
    pub assignments: Vec<Assignment>,
    /// Full containers left waiting because no vehicle was eligible.
    pub unmatched:   Vec<ContainerId>,
    pub serviced:    Vec<Service>,
    pub moved:       Vec<VehicleId>,
    /// Active vehicles with no closer passable neighbour.
    pub stalled:     Vec<VehicleId>,
    /// Active vehicles with no passable neighbour at all.
    pub blocked:     Vec<VehicleId>,
}

impl StepReport {
    /// Units collected across all services this step.
    pub fn units_collected(&self) -> u64 {
        self.serviced.iter().map(|s| u64::from(s.units)).sum()
    }
}
