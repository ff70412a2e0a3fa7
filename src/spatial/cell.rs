//! Canonical grid cell addressing and 4-neighbour adjacency

use crate::io::error::{AlgorithmError, invalid_configuration};
use std::fmt;
use std::str::FromStr;

/// A grid cell addressed by column `x` and row `y`
///
/// Ordering is row-major (`y` first, then `x`) so sets of cells iterate in
/// the same order the grid is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Cell {
    /// Create a cell at column `x`, row `y`
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Test whether two cells share an edge (no diagonals)
    pub const fn is_adjacent(&self, other: &Self) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }

    /// Translate by a non-negative offset
    pub const fn offset(&self, dx: usize, dy: usize) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// In-bounds 4-neighbours in up, left, right, down order
    pub fn neighbors(&self, size: usize) -> Vec<Self> {
        let mut result = Vec::with_capacity(4);
        if self.y > 0 {
            result.push(Self::new(self.x, self.y - 1));
        }
        if self.x > 0 {
            result.push(Self::new(self.x - 1, self.y));
        }
        if self.x + 1 < size {
            result.push(Self::new(self.x + 1, self.y));
        }
        if self.y + 1 < size {
            result.push(Self::new(self.x, self.y + 1));
        }
        result
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Cell {
    type Err = AlgorithmError;

    /// Parse the `"x,y"` key form produced by `Display`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || invalid_configuration("cell", &s, &"expected \"x,y\"");

        let (x, y) = s.split_once(',').ok_or_else(malformed)?;
        let x = x.trim().parse().map_err(|_parse_error| malformed())?;
        let y = y.trim().parse().map_err(|_parse_error| malformed())?;

        Ok(Self::new(x, y))
    }
}

/// Every cell of a `size` x `size` grid in row-major order
pub fn all_cells(size: usize) -> Vec<Cell> {
    (0..size)
        .flat_map(|y| (0..size).map(move |x| Cell::new(x, y)))
        .collect()
}
