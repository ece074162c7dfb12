//! collection: demonstration run of the waste-collection fleet simulator.
//!
//! Simulates a small fleet on a district map with a few blocked streets.
//! Pass a JSON-encoded `FleetConfig` path as the first argument to override
//! the built-in parameters.  The map stays the same: `width`/`height` may be
//! left out of the file and are overwritten with the map's dimensions.

use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result};

use wc_core::{FleetConfig, Tick};
use wc_dispatch::StepReport;
use wc_grid::Grid;
use wc_sim::{RunSummary, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const PROGRESS_INTERVAL: u64 = 10;

// `#` = blocked (parks, buildings), `.` = drivable.
const DISTRICT_MAP: &str = "
    ....................
    ....###......###....
    ....###......###....
    ....................
    ..##....####....##..
    ..##....#..#....##..
    ........#..#........
    ........##.#........
    ....................
    .####..........####.
    ....................
    ......###..###......
    ......#......#......
    ......#......#......
    ......########......
    ....................
";

// ── Progress observer ─────────────────────────────────────────────────────────

/// Prints a one-line status every `interval` steps and keeps running totals.
struct ProgressPrinter {
    interval: u64,
    filled:   usize,
    serviced: usize,
    stalls:   usize,
}

impl ProgressPrinter {
    fn new(interval: u64) -> Self {
        Self { interval, filled: 0, serviced: 0, stalls: 0 }
    }
}

impl SimObserver for ProgressPrinter {
    fn on_step_end(&mut self, tick: Tick, report: &StepReport) {
        self.filled   += report.filled.len();
        self.serviced += report.serviced.len();
        self.stalls   += report.stalled.len() + report.blocked.len();

        if tick.0.is_multiple_of(self.interval) {
            println!(
                "{tick:>6}  assigned {:>2}  moved {:>2}  waiting {:>2}  | filled {:>4}  serviced {:>4}",
                report.assignments.len(),
                report.moved.len(),
                report.unmatched.len(),
                self.filled,
                self.serviced,
            );
        }
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        println!();
        println!(
            "Run finished after {} steps: {} containers filled, {} serviced, {} stalled vehicle-steps",
            summary.steps_run, self.filled, self.serviced, self.stalls
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config() -> Result<FleetConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(FleetConfig {
            vehicle_count:      4,
            container_count:    18,
            steps:              200,
            vehicle_capacity:   600,
            container_capacity: 40,
            fill_probability:   0.04,
            seed:               42,
            width:              20,
            height:             16,
        });
    };
    let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing config {path}"))
}

fn main() -> Result<()> {
    let mut config = load_config()?;
    let grid = Grid::from_ascii(DISTRICT_MAP)?;
    config.width = grid.width();
    config.height = grid.height();

    println!("=== collection: waste-collection fleet ===");
    println!(
        "Vehicles: {}  |  Containers: {}  |  Steps: {}  |  Seed: {}",
        config.vehicle_count, config.container_count, config.steps, config.seed
    );
    println!(
        "Map: {}×{} ({} drivable cells)",
        grid.width(),
        grid.height(),
        grid.passable_count()
    );
    println!();

    let mut sim = SimBuilder::new(config).grid(grid).build()?;
    let mut obs = ProgressPrinter::new(PROGRESS_INTERVAL);

    let t0 = Instant::now();
    let summary = sim.run(&mut obs)?;
    println!("Simulation complete in {:.3} s", t0.elapsed().as_secs_f64());
    println!();

    // Final vehicle table.
    println!("{:<10} {:<10} {:>8} {:>10}", "Vehicle", "Position", "Load", "Serviced");
    println!("{}", "-".repeat(41));
    for v in &summary.vehicles {
        println!(
            "{:<10} {:<10} {:>8} {:>10}",
            v.vehicle.0,
            v.position.to_string(),
            format!("{}/{}", v.load, sim.config.vehicle_capacity),
            v.containers_serviced,
        );
    }
    println!();
    println!("Containers still waiting: {}", summary.containers_waiting);
    println!();
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
