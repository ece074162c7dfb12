//! Unit tests for wc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ContainerId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(VehicleId::try_from(7usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(ContainerId(3).to_string(), "ContainerId(3)");
        assert_eq!(VehicleId(0).to_string(), "VehicleId(0)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Cell;

    #[test]
    fn euclidean_distance() {
        let a = Cell::new(0, 0);
        assert_eq!(a.distance(a), 0.0);
        assert!((a.distance(Cell::new(3, 4)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn chebyshev_and_manhattan() {
        let a = Cell::new(0, 0);
        let b = Cell::new(4, -2);
        assert_eq!(a.chebyshev(b), 4);
        assert_eq!(a.manhattan(b), 6);
    }

    #[test]
    fn neighbor_order_is_plus_x_minus_x_plus_y_minus_y() {
        let n = Cell::new(2, 2).neighbors4();
        assert_eq!(n, [Cell::new(3, 2), Cell::new(1, 2), Cell::new(2, 3), Cell::new(2, 1)]);
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(1, -1).to_string(), "(1, -1)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(3) + 2, Tick(5));
        assert_eq!(Tick::ZERO.offset(4), Tick(4));
        assert_eq!(Tick(9).to_string(), "T9");
    }

    #[test]
    fn clock_finishes_at_budget() {
        let mut clock = SimClock::new(2);
        assert!(!clock.is_finished());
        assert_eq!(clock.remaining(), 2);
        clock.advance();
        clock.advance();
        assert!(clock.is_finished());
        assert_eq!(clock.remaining(), 0);
        assert_eq!(clock.current_tick, Tick(2));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        let xs: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(1);
        assert!((0..100).all(|_| rng.gen_bool(1.0)));
        assert!((0..100).all(|_| !rng.gen_bool(0.0)));
        // Out-of-range probabilities are clamped rather than panicking.
        assert!(rng.gen_bool(7.5));
    }

    #[test]
    fn sample_indices_are_distinct() {
        let mut rng = SimRng::new(5);
        let mut picked = rng.sample_indices(10, 10);
        picked.sort_unstable();
        assert_eq!(picked, (0..10).collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, FleetConfig};

    #[test]
    fn default_is_valid() {
        assert_eq!(FleetConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_counts_rejected() {
        let cfg = FleetConfig { vehicle_count: 0, ..FleetConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(msg)) if msg.contains("vehicle_count")));

        let cfg = FleetConfig { container_capacity: 0, ..FleetConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = FleetConfig { steps: 0, ..FleetConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn probability_bounds() {
        for p in [0.0, -0.1, 1.01, f64::NAN] {
            let cfg = FleetConfig { fill_probability: p, ..FleetConfig::default() };
            assert!(cfg.validate().is_err(), "p = {p} should be rejected");
        }
        let cfg = FleetConfig { fill_probability: 1.0, ..FleetConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn required_cells_counts_both_fleets() {
        let cfg = FleetConfig { vehicle_count: 4, container_count: 9, ..FleetConfig::default() };
        assert_eq!(cfg.required_cells(), 13);
    }
}

#[cfg(all(test, feature = "serde"))]
mod config_json {
    use crate::{DEFAULT_MAP_SIDE, FleetConfig};

    #[test]
    fn map_dimensions_may_be_omitted() {
        let json = r#"{
            "vehicle_count": 2, "container_count": 5, "steps": 30,
            "vehicle_capacity": 200, "container_capacity": 20,
            "fill_probability": 0.5, "seed": 9
        }"#;
        let cfg: FleetConfig = serde_json::from_str(json).unwrap();
        assert_eq!((cfg.width, cfg.height), (DEFAULT_MAP_SIDE, DEFAULT_MAP_SIDE));
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn missing_count_is_still_an_error() {
        let json = r#"{"container_count": 5, "steps": 30, "vehicle_capacity": 200,
            "container_capacity": 20, "fill_probability": 0.5, "seed": 9}"#;
        assert!(serde_json::from_str::<FleetConfig>(json).is_err());
    }
}
