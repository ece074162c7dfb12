//! Fluent builder for constructing a [`Sim`].

use wc_core::{Cell, CoreError, FleetConfig, SimClock, SimRng};
use wc_dispatch::Dispatcher;
use wc_fleet::FleetBuilder;
use wc_grid::Grid;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`FleetConfig`]: counts, capacities, step budget, fill probability, seed
///
/// # Optional inputs (have defaults)
///
/// | Method                      | Default                                   |
/// |-----------------------------|-------------------------------------------|
/// | `.grid(g)`                  | Open `width × height` map from the config |
/// | `.vehicle_positions(v)`     | Random distinct passable cells            |
/// | `.container_positions(v)`   | Random distinct passable cells            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .grid(Grid::from_ascii(MAP)?)
///     .vehicle_positions(vec![Cell::new(0, 0)])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:              FleetConfig,
    grid:                Option<Grid>,
    vehicle_positions:   Option<Vec<Cell>>,
    container_positions: Option<Vec<Cell>>,
}

impl SimBuilder {
    pub fn new(config: FleetConfig) -> Self {
        Self {
            config,
            grid:                None,
            vehicle_positions:   None,
            container_positions: None,
        }
    }

    /// Use `grid` instead of an open map of the configured dimensions.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Place vehicles explicitly (must be length `vehicle_count`, all
    /// passable).
    pub fn vehicle_positions(mut self, positions: Vec<Cell>) -> Self {
        self.vehicle_positions = Some(positions);
        self
    }

    /// Place containers explicitly (must be length `container_count`, all
    /// passable).
    pub fn container_positions(mut self, positions: Vec<Cell>) -> Self {
        self.container_positions = Some(positions);
        self
    }

    /// Validate inputs, place every entity and return a ready-to-run [`Sim`].
    ///
    /// Random placement draws `vehicle_count + container_count` distinct
    /// passable cells up front (vehicles take the first slice), so the RNG
    /// stream after setup does not depend on which positions were overridden.
    /// Explicit positions are not checked for overlap with each other or with
    /// sampled cells.
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let grid = self
            .grid
            .unwrap_or_else(|| Grid::open(config.width, config.height));

        let available = grid.passable_count();
        let required  = config.required_cells();
        if available < required {
            return Err(CoreError::Config(format!(
                "grid has {available} passable cells, {required} entities need their own cell"
            ))
            .into());
        }

        let mut rng = SimRng::new(config.seed);
        let mut sampled = grid.sample_passable_cells(required, &mut rng)?;
        let sampled_containers = sampled.split_off(config.vehicle_count);

        let vehicles = resolve_positions(
            self.vehicle_positions,
            sampled,
            config.vehicle_count,
            "vehicle positions",
            &grid,
        )?;
        let containers = resolve_positions(
            self.container_positions,
            sampled_containers,
            config.container_count,
            "container positions",
            &grid,
        )?;

        let fleet = FleetBuilder::new(config.vehicle_capacity, config.container_capacity)
            .vehicles_at(vehicles)
            .containers_at(containers)
            .build();

        Ok(Sim {
            clock:      SimClock::new(config.steps),
            dispatcher: Dispatcher::new(config.fill_probability)?,
            config,
            grid,
            fleet,
            rng,
        })
    }
}

/// Use `explicit` if given (after length and passability checks), otherwise
/// the sampled cells.
fn resolve_positions(
    explicit: Option<Vec<Cell>>,
    sampled:  Vec<Cell>,
    expected: usize,
    what:     &'static str,
    grid:     &Grid,
) -> SimResult<Vec<Cell>> {
    let Some(cells) = explicit else {
        return Ok(sampled);
    };
    if cells.len() != expected {
        return Err(SimError::EntityCountMismatch { expected, got: cells.len(), what });
    }
    for &cell in &cells {
        grid.check_passable(cell)?;
    }
    Ok(cells)
}
