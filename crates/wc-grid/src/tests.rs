//! Unit tests for wc-grid.

use wc_core::{Cell, SimRng};

use crate::{Grid, GridBuilder, GridError};

/// 5×5 map with a 3×3 ring of walls around (2, 2), open at the bottom.
const POCKET: &str = "
    .....
    .###.
    .#.#.
    .#.#.
    .....
";

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn open_grid_is_fully_passable() {
        let g = Grid::open(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.passable_count(), 12);
        assert!(g.passable(0, 0));
        assert!(g.passable(3, 2));
    }

    #[test]
    fn out_of_bounds_is_impassable() {
        let g = Grid::open(2, 2);
        assert!(!g.passable(-1, 0));
        assert!(!g.passable(0, 2));
        assert!(!g.passable(2, 0));
        assert_eq!(g.check_passable(Cell::new(5, 5)), Err(GridError::OutOfBounds(Cell::new(5, 5))));
    }

    #[test]
    fn builder_blocks_cells() {
        let g = GridBuilder::new(3, 3)
            .block_all([Cell::new(0, 0), Cell::new(2, 2), Cell::new(9, 9)])
            .build();
        assert!(!g.passable(0, 0));
        assert!(!g.passable(2, 2));
        assert_eq!(g.passable_count(), 7);
        assert_eq!(g.check_passable(Cell::new(0, 0)), Err(GridError::Impassable(Cell::new(0, 0))));
        assert_eq!(g.check_passable(Cell::new(1, 1)), Ok(()));
    }

    #[test]
    fn ascii_parse_and_render() {
        let g = Grid::from_ascii(POCKET).unwrap();
        assert_eq!((g.width(), g.height()), (5, 5));
        assert!(!g.passable(1, 1));
        assert!(g.passable(2, 2));
        assert!(g.passable(2, 3));
        assert_eq!(g.to_ascii(), ".....\n.###.\n.#.#.\n.#.#.\n.....\n");
    }

    #[test]
    fn ascii_rejects_ragged_rows() {
        let err = Grid::from_ascii("...\n..\n").unwrap_err();
        assert!(matches!(err, GridError::Parse(_)));
    }

    #[test]
    fn from_cells_checks_length() {
        let g = Grid::from_cells(2, 2, vec![true, false, true, true]).unwrap();
        assert!(!g.passable(1, 0));
        assert_eq!(g.passable_count(), 3);
        assert!(matches!(Grid::from_cells(5, 5, Vec::new()), Err(GridError::Parse(_))));
        assert!(matches!(Grid::from_cells(2, 2, vec![true; 5]), Err(GridError::Parse(_))));
    }

    #[test]
    fn ascii_rejects_unknown_characters() {
        assert!(matches!(Grid::from_ascii(".x.").unwrap_err(), GridError::Parse(_)));
        assert!(matches!(Grid::from_ascii("\n  \n").unwrap_err(), GridError::Parse(_)));
    }
}

#[cfg(test)]
mod neighbours {
    use super::*;

    #[test]
    fn corner_has_two_neighbours_in_order() {
        let g = Grid::open(3, 3);
        let n: Vec<Cell> = g.passable_neighbors(Cell::new(0, 0)).collect();
        assert_eq!(n, vec![Cell::new(1, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn walled_cell_has_one_exit() {
        let g = Grid::from_ascii(POCKET).unwrap();
        let n: Vec<Cell> = g.passable_neighbors(Cell::new(2, 2)).collect();
        assert_eq!(n, vec![Cell::new(2, 3)]);
    }

    #[test]
    fn isolated_cell_has_none() {
        let g = Grid::from_ascii(".#\n##").unwrap();
        assert_eq!(g.passable_neighbors(Cell::new(0, 0)).count(), 0);
    }
}

#[cfg(test)]
mod placement {
    use super::*;

    #[test]
    fn random_cell_is_passable() {
        let g = Grid::from_ascii(POCKET).unwrap();
        let mut rng = SimRng::new(3);
        for _ in 0..50 {
            let c = g.random_passable_cell(&mut rng).unwrap();
            assert!(g.is_passable(c));
        }
    }

    #[test]
    fn random_cell_on_blocked_map_fails() {
        let g = Grid::from_ascii("##\n##").unwrap();
        let mut rng = SimRng::new(3);
        assert_eq!(
            g.random_passable_cell(&mut rng),
            Err(GridError::NoFreeCell { requested: 1, available: 0 })
        );
    }

    #[test]
    fn sample_is_distinct_and_passable() {
        let g = Grid::from_ascii(POCKET).unwrap();
        let mut rng = SimRng::new(11);
        let n = g.passable_count();
        let mut cells = g.sample_passable_cells(n, &mut rng).unwrap();
        assert!(cells.iter().all(|&c| g.is_passable(c)));
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), n);
    }

    #[test]
    fn sample_too_many_fails() {
        let g = Grid::from_ascii(".#\n#.").unwrap();
        let mut rng = SimRng::new(0);
        assert_eq!(
            g.sample_passable_cells(3, &mut rng),
            Err(GridError::NoFreeCell { requested: 3, available: 2 })
        );
    }

    #[test]
    fn sampling_is_reproducible() {
        let g = Grid::open(10, 10);
        let a = g.sample_passable_cells(6, &mut SimRng::new(8)).unwrap();
        let b = g.sample_passable_cells(6, &mut SimRng::new(8)).unwrap();
        assert_eq!(a, b);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_input {
    use super::*;

    #[test]
    fn json_round_trip_keeps_map() {
        let g = Grid::from_ascii(POCKET).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), g);
    }

    #[test]
    fn json_with_short_cell_vector_is_rejected() {
        let res = serde_json::from_str::<Grid>(r#"{"width":5,"height":5,"passable":[]}"#);
        assert!(res.is_err());
    }
}
