use thiserror::Error;

use wc_core::{ContainerId, VehicleId};

use crate::ContainerState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("invalid state: cannot {action} {container} while it is {state}")]
    InvalidContainerState {
        container: ContainerId,
        action:    &'static str,
        state:     ContainerState,
    },

    #[error("invalid state: {vehicle} {reason}")]
    InvalidVehicleState {
        vehicle: VehicleId,
        reason:  String,
    },

    #[error("{vehicle} cannot take {amount} units: load {load} of capacity {capacity}")]
    CapacityExceeded {
        vehicle:  VehicleId,
        load:     u32,
        capacity: u32,
        amount:   u32,
    },

    #[error("fleet invariant violated: {0}")]
    InvariantViolated(String),
}

impl FleetError {
    /// `true` for the state-machine misuse variants (as opposed to capacity
    /// or whole-fleet invariant failures).
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            FleetError::InvalidContainerState { .. } | FleetError::InvalidVehicleState { .. }
        )
    }
}

pub type FleetResult<T> = Result<T, FleetError>;
