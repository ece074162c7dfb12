//! Terrain representation and builder.
//!
//! # Data layout
//!
//! Passability is a single row-major `Vec<bool>`: cell `(x, y)` lives at
//! index `y * width + x`.  Out-of-bounds cells are reported as impassable,
//! so callers can check neighbours at the map edge without a separate
//! bounds check.
//!
//! # ASCII maps
//!
//! [`Grid::from_ascii`] reads one row per line, `.` for open road and `#`
//! for an obstacle.  Blank lines and surrounding whitespace are ignored.

use wc_core::{Cell, SimRng};

use crate::{GridError, GridResult};

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Immutable 2-D passability map.  Dimensions are fixed at construction.
///
/// Deserializing goes through [`Grid::from_cells`], so a payload whose
/// `passable` length disagrees with its dimensions is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct Grid {
    width:    u32,
    height:   u32,
    passable: Vec<bool>,
}

impl Grid {
    /// An obstacle-free `width × height` map.
    pub fn open(width: u32, height: u32) -> Self {
        GridBuilder::new(width, height).build()
    }

    /// A map from a row-major passability vector.
    ///
    /// Fails with [`GridError::Parse`] unless `passable` holds exactly
    /// `width * height` entries.
    pub fn from_cells(width: u32, height: u32, passable: Vec<bool>) -> GridResult<Self> {
        let expected = width as usize * height as usize;
        if passable.len() != expected {
            return Err(GridError::Parse(format!(
                "{width}x{height} map needs {expected} cells, got {}",
                passable.len()
            )));
        }
        Ok(Self { width, height, passable })
    }

    /// Parse a `.`/`#` map.  Every row must have the same width.
    pub fn from_ascii(map: &str) -> GridResult<Self> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(GridError::Parse("map has no rows".into()));
        };
        let width = first.chars().count();

        let mut passable = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GridError::Parse(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                match ch {
                    '.' => passable.push(true),
                    '#' => passable.push(false),
                    other => {
                        return Err(GridError::Parse(format!(
                            "unexpected character {other:?} at ({x}, {y})"
                        )));
                    }
                }
            }
        }

        let width  = u32::try_from(width).map_err(|_| GridError::Parse("map too wide".into()))?;
        let height = u32::try_from(rows.len()).map_err(|_| GridError::Parse("map too tall".into()))?;
        Ok(Self { width, height, passable })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` if `cell` lies inside the map (passable or not).
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// `true` if `(x, y)` is inside the map and not an obstacle.
    #[inline]
    pub fn passable(&self, x: i32, y: i32) -> bool {
        self.is_passable(Cell::new(x, y))
    }

    /// Cell-typed form of [`passable`](Self::passable).
    #[inline]
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.passable[self.offset(cell)]
    }

    /// `Ok(())` if an entity may stand on `cell`.
    pub fn check_passable(&self, cell: Cell) -> GridResult<()> {
        if !self.in_bounds(cell) {
            return Err(GridError::OutOfBounds(cell));
        }
        if !self.passable[self.offset(cell)] {
            return Err(GridError::Impassable(cell));
        }
        Ok(())
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.passable.iter().filter(|&&p| p).count()
    }

    /// All passable cells in row-major order.
    pub fn passable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.passable
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p)
            .map(move |(i, _)| self.cell_at(i))
    }

    /// Passable 4-neighbours of `cell` in enumeration order `+x, -x, +y, -y`.
    pub fn passable_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors4().into_iter().filter(move |&n| self.is_passable(n))
    }

    /// A uniformly random passable cell.
    pub fn random_passable_cell(&self, rng: &mut SimRng) -> GridResult<Cell> {
        let cells: Vec<Cell> = self.passable_cells().collect();
        rng.choose(&cells)
            .copied()
            .ok_or(GridError::NoFreeCell { requested: 1, available: 0 })
    }

    /// `n` pairwise-distinct passable cells, uniformly at random.
    ///
    /// Fails with [`GridError::NoFreeCell`] if fewer than `n` cells are
    /// passable; no cell is handed out twice.
    pub fn sample_passable_cells(&self, n: usize, rng: &mut SimRng) -> GridResult<Vec<Cell>> {
        let cells: Vec<Cell> = self.passable_cells().collect();
        if cells.len() < n {
            return Err(GridError::NoFreeCell { requested: n, available: cells.len() });
        }
        Ok(rng
            .sample_indices(cells.len(), n)
            .into_iter()
            .map(|i| cells[i])
            .collect())
    }

    /// Render back to the `.`/`#` form accepted by [`from_ascii`](Self::from_ascii).
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.passable.len() + self.height as usize);
        if self.width == 0 {
            return out;
        }
        for row in self.passable.chunks(self.width as usize) {
            out.extend(row.iter().map(|&p| if p { '.' } else { '#' }));
            out.push('\n');
        }
        out
    }

    #[inline]
    fn offset(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    #[inline]
    fn cell_at(&self, offset: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((offset % w) as i32, (offset / w) as i32)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    width:    u32,
    height:   u32,
    passable: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> GridResult<Self> {
        Grid::from_cells(raw.width, raw.height, raw.passable)
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Incremental builder: start open, block individual cells, then freeze.
///
/// # Example
///
/// ```rust
/// use wc_core::Cell;
/// use wc_grid::GridBuilder;
///
/// let grid = GridBuilder::new(3, 3).block(Cell::new(1, 1)).build();
/// assert!(!grid.passable(1, 1));
/// assert_eq!(grid.passable_count(), 8);
/// ```
pub struct GridBuilder {
    width:    u32,
    height:   u32,
    passable: Vec<bool>,
}

impl GridBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            passable: vec![true; width as usize * height as usize],
        }
    }

    /// Mark `cell` impassable.  Out-of-bounds cells are ignored.
    pub fn block(mut self, cell: Cell) -> Self {
        if cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height {
            let i = cell.y as usize * self.width as usize + cell.x as usize;
            self.passable[i] = false;
        }
        self
    }

    /// Block every cell in `cells`.
    pub fn block_all<I: IntoIterator<Item = Cell>>(self, cells: I) -> Self {
        cells.into_iter().fold(self, GridBuilder::block)
    }

    pub fn build(self) -> Grid {
        Grid {
            width:    self.width,
            height:   self.height,
            passable: self.passable,
        }
    }
}
