//! The `Dispatcher` and its three phases.

use wc_core::{ContainerId, SimRng, VehicleId};
use wc_fleet::{Container, Fleet, StepOutcome, Vehicle};
use wc_grid::Grid;

use crate::{Assignment, DispatchError, DispatchResult, Service, StepReport};

/// Stateless per-step policy; all mutable state lives in the [`Fleet`].
#[derive(Clone, Debug)]
pub struct Dispatcher {
    fill_probability: f64,
}

impl Dispatcher {
    pub fn new(fill_probability: f64) -> DispatchResult<Self> {
        if !(0.0..=1.0).contains(&fill_probability) {
            return Err(DispatchError::InvalidProbability(fill_probability));
        }
        Ok(Self { fill_probability })
    }

    #[inline]
    pub fn fill_probability(&self) -> f64 {
        self.fill_probability
    }

    /// Run fill, match and move/service in that order.
    ///
    /// A contract violation in any phase aborts the step and is returned;
    /// phases already applied are not rolled back.
    pub fn step(&self, fleet: &mut Fleet, grid: &Grid, rng: &mut SimRng) -> DispatchResult<StepReport> {
        let mut report = StepReport {
            filled: self.fill_containers(&mut fleet.containers, rng)?,
            ..StepReport::default()
        };
        self.match_vehicles(fleet, &mut report)?;
        self.move_and_service(fleet, grid, &mut report)?;
        Ok(report)
    }

    /// ① Each empty container becomes full with probability `p_fill`.
    ///
    /// Draws exactly one random value per empty container; full containers
    /// consume no randomness.
    pub fn fill_containers(
        &self,
        containers: &mut [Container],
        rng:        &mut SimRng,
    ) -> DispatchResult<Vec<ContainerId>> {
        let mut filled = Vec::new();
        for c in containers.iter_mut().filter(|c| !c.is_full()) {
            if rng.gen_bool(self.fill_probability) {
                c.mark_full()?;
                filled.push(c.id);
            }
        }
        Ok(filled)
    }

    /// ② Greedy nearest-eligible matching, containers in ascending ID order.
    ///
    /// Low-index containers get first pick when vehicles are scarce.
    pub fn match_vehicles(&self, fleet: &mut Fleet, report: &mut StepReport) -> DispatchResult<()> {
        let Fleet { vehicles, containers } = fleet;

        for container in containers.iter_mut().filter(|c| c.awaits_vehicle()) {
            match best_vehicle(vehicles, container) {
                None => report.unmatched.push(container.id),
                Some(vi) => {
                    let vehicle = &mut vehicles[vi];
                    let distance = vehicle.distance_to(container.position);
                    vehicle.assign(container)?;
                    report.assignments.push(Assignment {
                        vehicle: vehicle.id,
                        container: container.id,
                        distance,
                    });
                }
            }
        }
        Ok(())
    }

    /// ③ Every active vehicle either services its target (if standing on it)
    /// or takes one greedy step.  Never both in the same tick.
    pub fn move_and_service(
        &self,
        fleet:  &mut Fleet,
        grid:   &Grid,
        report: &mut StepReport,
    ) -> DispatchResult<()> {
        let Fleet { vehicles, containers } = fleet;

        for vehicle in vehicles.iter_mut() {
            let Some(target) = vehicle.target() else {
                continue;
            };
            let container = &mut containers[target.index()];

            if vehicle.position == container.position {
                let units = vehicle.service(container)?;
                report.serviced.push(Service { vehicle: vehicle.id, container: target, units });
                continue;
            }

            let list: &mut Vec<VehicleId> = match vehicle.step_toward(container.position, grid) {
                StepOutcome::Moved { .. } => &mut report.moved,
                StepOutcome::Stalled      => &mut report.stalled,
                StepOutcome::Blocked      => &mut report.blocked,
            };
            list.push(vehicle.id);
        }
        Ok(())
    }
}

/// Index of the eligible vehicle nearest to `container`; ties go to the
/// lower current load, then to the lower `VehicleId`.
fn best_vehicle(vehicles: &[Vehicle], container: &Container) -> Option<usize> {
    vehicles
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_eligible_for(container))
        .map(|(i, v)| (i, v.distance_to(container.position), v.load()))
        // `min_by` keeps the first of equal elements, i.e. the lowest index.
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.2.cmp(&b.2)))
        .map(|(i, _, _)| i)
}
