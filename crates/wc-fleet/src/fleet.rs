//! The two typed entity collections and their consistency check.

use std::collections::HashMap;

use wc_core::{Cell, ContainerId, VehicleId};
use wc_grid::Grid;

use crate::{Container, FleetError, FleetResult, Vehicle};

/// All simulation entities.
///
/// Index `i` of `vehicles` holds `VehicleId(i)`, index `i` of `containers`
/// holds `ContainerId(i)`.  Entities are updated in place and never removed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    pub vehicles:   Vec<Vehicle>,
    pub containers: Vec<Container>,
}

impl Fleet {
    #[inline]
    pub fn vehicle(&self, id: VehicleId) -> &Vehicle {
        &self.vehicles[id.index()]
    }

    #[inline]
    pub fn container(&self, id: ContainerId) -> &Container {
        &self.containers[id.index()]
    }

    /// Vehicles currently holding a target.
    pub fn active_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_active()).count()
    }

    /// Check every cross-entity invariant:
    ///
    /// - each entity stands on a passable cell;
    /// - `load <= capacity` for every vehicle;
    /// - no two vehicles target the same container;
    /// - a container is assigned iff exactly one vehicle targets it.
    ///
    /// Returns the first violation found.
    pub fn verify(&self, grid: &Grid) -> FleetResult<()> {
        let mut claimed: HashMap<ContainerId, VehicleId> = HashMap::new();

        for v in &self.vehicles {
            if !grid.is_passable(v.position) {
                return Err(violation(format!("{} stands on impassable {}", v.id, v.position)));
            }
            if v.load() > v.capacity {
                return Err(violation(format!(
                    "{} load {} exceeds capacity {}",
                    v.id, v.load(), v.capacity
                )));
            }
            if let Some(c) = v.target() {
                if c.index() >= self.containers.len() {
                    return Err(violation(format!("{} targets unknown {c}", v.id)));
                }
                if let Some(other) = claimed.insert(c, v.id) {
                    return Err(violation(format!("{c} targeted by both {other} and {}", v.id)));
                }
            }
        }

        for c in &self.containers {
            if !grid.is_passable(c.position) {
                return Err(violation(format!("{} stands on impassable {}", c.id, c.position)));
            }
            if c.is_assigned() != claimed.contains_key(&c.id) {
                return Err(violation(format!(
                    "{} is {} but {} vehicle(s) target it",
                    c.id,
                    c.state(),
                    usize::from(claimed.contains_key(&c.id))
                )));
            }
        }
        Ok(())
    }
}

fn violation(msg: String) -> FleetError {
    FleetError::InvariantViolated(msg)
}

// ── FleetBuilder ──────────────────────────────────────────────────────────────

/// Fluent builder for a [`Fleet`] with uniform capacities.
///
/// # Usage
///
/// ```rust
/// use wc_core::Cell;
/// use wc_fleet::FleetBuilder;
///
/// let fleet = FleetBuilder::new(100, 50)
///     .vehicles_at([Cell::new(0, 0), Cell::new(4, 0)])
///     .containers_at([Cell::new(2, 2)])
///     .build();
///
/// assert_eq!(fleet.vehicles.len(), 2);
/// assert!(!fleet.containers[0].is_full());
/// ```
pub struct FleetBuilder {
    vehicle_capacity:   u32,
    container_capacity: u32,
    vehicles:           Vec<Cell>,
    containers:         Vec<Cell>,
}

impl FleetBuilder {
    pub fn new(vehicle_capacity: u32, container_capacity: u32) -> Self {
        Self {
            vehicle_capacity,
            container_capacity,
            vehicles:   Vec::new(),
            containers: Vec::new(),
        }
    }

    /// Append one idle, empty vehicle per cell, IDs in iteration order.
    pub fn vehicles_at<I: IntoIterator<Item = Cell>>(mut self, cells: I) -> Self {
        self.vehicles.extend(cells);
        self
    }

    /// Append one empty container per cell, IDs in iteration order.
    pub fn containers_at<I: IntoIterator<Item = Cell>>(mut self, cells: I) -> Self {
        self.containers.extend(cells);
        self
    }

    pub fn build(self) -> Fleet {
        let vehicles = self
            .vehicles
            .into_iter()
            .enumerate()
            .map(|(i, cell)| Vehicle::new(VehicleId(i as u32), cell, self.vehicle_capacity))
            .collect();
        let containers = self
            .containers
            .into_iter()
            .enumerate()
            .map(|(i, cell)| Container::new(ContainerId(i as u32), cell, self.container_capacity))
            .collect();
        Fleet { vehicles, containers }
    }
}
