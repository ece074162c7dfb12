//! Integer grid coordinates and the distance measures used on them.
//!
//! `x` grows to the east (column), `y` grows to the south (row).  Coordinates
//! are signed so that neighbour arithmetic at the map edge never underflows;
//! bounds are checked by the grid, not here.

use std::fmt;

/// A cell address on the 2-D map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.  Used for ranking candidates and choosing the next
    /// step, never for deciding whether a move is legal.
    #[inline]
    pub fn distance(self, other: Cell) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        dx.hypot(dy)
    }

    /// Chebyshev (king-move) distance.
    #[inline]
    pub fn chebyshev(self, other: Cell) -> u32 {
        (other.x - self.x).unsigned_abs().max((other.y - self.y).unsigned_abs())
    }

    /// Manhattan distance: the number of 4-neighbourhood moves on an open map.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        (other.x - self.x).unsigned_abs() + (other.y - self.y).unsigned_abs()
    }

    /// The four orthogonal neighbours in fixed enumeration order:
    /// `+x`, `-x`, `+y`, `-y`.
    ///
    /// Movement tie-breaks depend on this order; do not reorder.
    #[inline]
    pub fn neighbors4(self) -> [Cell; 4] {
        [
            Cell::new(self.x + 1, self.y),
            Cell::new(self.x - 1, self.y),
            Cell::new(self.x, self.y + 1),
            Cell::new(self.x, self.y - 1),
        ]
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
