//! Stationary waste container.

use std::fmt;

use wc_core::{Cell, ContainerId};

use crate::{FleetError, FleetResult};

/// Where a container is in its collection cycle.
///
/// ```text
/// Empty ──mark_full──▶ Full ──mark_assigned──▶ Assigned ──service──▶ Empty
/// ```
///
/// "Assigned but empty" has no representation, so `is_assigned` implies
/// `is_full`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerState {
    #[default]
    Empty,
    /// Full and waiting for a vehicle.
    Full,
    /// Full, with exactly one vehicle on its way.
    Assigned,
}

impl ContainerState {
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerState::Empty    => "empty",
            ContainerState::Full     => "full",
            ContainerState::Assigned => "assigned",
        }
    }
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed container with a fill state and a service capacity.
///
/// Created once at setup and never destroyed; only the state changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    pub id:       ContainerId,
    pub position: Cell,
    /// Units handed to the vehicle that services this container.
    pub capacity: u32,
    state:        ContainerState,
}

impl Container {
    /// A new, empty container.
    pub fn new(id: ContainerId, position: Cell, capacity: u32) -> Self {
        Self { id, position, capacity, state: ContainerState::Empty }
    }

    #[inline]
    pub fn state(&self) -> ContainerState {
        self.state
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self.state, ContainerState::Full | ContainerState::Assigned)
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.state == ContainerState::Assigned
    }

    /// Full and not yet claimed by any vehicle.
    #[inline]
    pub fn awaits_vehicle(&self) -> bool {
        self.state == ContainerState::Full
    }

    /// `Empty → Full`.
    pub fn mark_full(&mut self) -> FleetResult<()> {
        self.transition(ContainerState::Empty, ContainerState::Full, "fill")
    }

    /// `Full → Assigned`.  Prefer [`Vehicle::assign`](crate::Vehicle::assign),
    /// which updates both sides together.
    pub fn mark_assigned(&mut self) -> FleetResult<()> {
        self.transition(ContainerState::Full, ContainerState::Assigned, "assign")
    }

    /// `Assigned → Empty`.  Prefer [`Vehicle::service`](crate::Vehicle::service).
    pub fn service(&mut self) -> FleetResult<()> {
        self.transition(ContainerState::Assigned, ContainerState::Empty, "service")
    }

    fn transition(
        &mut self,
        from:   ContainerState,
        to:     ContainerState,
        action: &'static str,
    ) -> FleetResult<()> {
        if self.state != from {
            return Err(FleetError::InvalidContainerState {
                container: self.id,
                action,
                state: self.state,
            });
        }
        self.state = to;
        Ok(())
    }
}
