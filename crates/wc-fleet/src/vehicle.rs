//! Mobile collection vehicle.

use wc_core::{Cell, ContainerId, VehicleId};
use wc_grid::Grid;

use crate::movement::{StepOutcome, greedy_step};
use crate::{Container, FleetError, FleetResult};

/// A collection vehicle.
///
/// `target` is the only activity flag: a vehicle is active exactly when it
/// holds a target.  `load` accumulates over the whole run and never resets,
/// so remaining headroom is `capacity - load`.  Deserialized vehicles are
/// checked the same way as [`Vehicle::with_load`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawVehicle")
)]
pub struct Vehicle {
    pub id:          VehicleId,
    pub position:    Cell,
    pub capacity:    u32,
    load:            u32,
    target:          Option<ContainerId>,
    units_collected: u32,
}

impl Vehicle {
    /// An idle, empty vehicle at `position`.
    pub fn new(id: VehicleId, position: Cell, capacity: u32) -> Self {
        Self {
            id,
            position,
            capacity,
            load: 0,
            target: None,
            units_collected: 0,
        }
    }

    /// Start from a non-zero load (scenario setup).
    pub fn with_load(mut self, load: u32) -> FleetResult<Self> {
        if load > self.capacity {
            return Err(FleetError::CapacityExceeded {
                vehicle:  self.id,
                load:     self.load,
                capacity: self.capacity,
                amount:   load,
            });
        }
        self.load = load;
        Ok(self)
    }

    #[inline]
    pub fn load(&self) -> u32 {
        self.load
    }

    #[inline]
    pub fn target(&self) -> Option<ContainerId> {
        self.target
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Containers serviced so far.
    #[inline]
    pub fn units_collected(&self) -> u32 {
        self.units_collected
    }

    /// Remaining capacity.
    #[inline]
    pub fn headroom(&self) -> u32 {
        self.capacity - self.load
    }

    /// Idle with room for `container`'s whole capacity.
    #[inline]
    pub fn is_eligible_for(&self, container: &Container) -> bool {
        !self.is_active() && self.headroom() >= container.capacity
    }

    /// Euclidean distance from the current position.  Ranking only.
    #[inline]
    pub fn distance_to(&self, point: Cell) -> f64 {
        self.position.distance(point)
    }

    /// Move at most one passable cell toward `target`.
    pub fn step_toward(&mut self, target: Cell, grid: &Grid) -> StepOutcome {
        let outcome = greedy_step(self.position, target, grid);
        if let StepOutcome::Moved { to, .. } = outcome {
            self.position = to;
        }
        outcome
    }

    /// Claim `container`: the vehicle becomes active and the container
    /// becomes assigned, or neither changes.
    pub fn assign(&mut self, container: &mut Container) -> FleetResult<()> {
        if let Some(current) = self.target {
            return Err(FleetError::InvalidVehicleState {
                vehicle: self.id,
                reason:  format!("is already assigned to {current}"),
            });
        }
        container.mark_assigned()?;
        self.target = Some(container.id);
        Ok(())
    }

    /// Empty `container` into this vehicle.
    ///
    /// Requires the vehicle to stand on the container's cell with that
    /// container as its target, and enough headroom for the container's
    /// capacity.  On success the vehicle is idle again and the container is
    /// empty; returns the units collected.
    pub fn service(&mut self, container: &mut Container) -> FleetResult<u32> {
        if self.target != Some(container.id) {
            return Err(FleetError::InvalidVehicleState {
                vehicle: self.id,
                reason:  format!("is not assigned to {}", container.id),
            });
        }
        if self.position != container.position {
            return Err(FleetError::InvalidVehicleState {
                vehicle: self.id,
                reason:  format!(
                    "is at {} but {} is at {}",
                    self.position, container.id, container.position
                ),
            });
        }
        if self.headroom() < container.capacity {
            return Err(FleetError::CapacityExceeded {
                vehicle:  self.id,
                load:     self.load,
                capacity: self.capacity,
                amount:   container.capacity,
            });
        }

        container.service()?;
        self.load += container.capacity;
        self.units_collected += 1;
        self.target = None;
        Ok(container.capacity)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawVehicle {
    id:              VehicleId,
    position:        Cell,
    capacity:        u32,
    load:            u32,
    target:          Option<ContainerId>,
    units_collected: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawVehicle> for Vehicle {
    type Error = FleetError;

    fn try_from(raw: RawVehicle) -> FleetResult<Self> {
        let mut vehicle = Vehicle::new(raw.id, raw.position, raw.capacity).with_load(raw.load)?;
        vehicle.target = raw.target;
        vehicle.units_collected = raw.units_collected;
        Ok(vehicle)
    }
}
