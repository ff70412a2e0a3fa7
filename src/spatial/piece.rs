//! Connected cell clusters produced by the merge engine

use crate::spatial::cell::Cell;
use std::collections::BTreeSet;

/// Piece identifier; issued monotonically and never reused within one run
pub type PieceId = u32;

/// A piece during generation, holding its cells at their solved positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPiece {
    /// Unique identifier
    pub id: PieceId,
    /// Occupied cells in grid coordinates
    pub cells: BTreeSet<Cell>,
}

impl GeneratorPiece {
    /// Create a one-cell piece
    pub fn singleton(id: PieceId, cell: Cell) -> Self {
        Self {
            id,
            cells: BTreeSet::from([cell]),
        }
    }

    /// Number of cells in the piece
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test whether the piece has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Minimum corner of the bounding box, `None` for an empty piece
    pub fn min_corner(&self) -> Option<Cell> {
        let min_x = self.cells.iter().map(|cell| cell.x).min()?;
        let min_y = self.cells.iter().map(|cell| cell.y).min()?;
        Some(Cell::new(min_x, min_y))
    }

    /// Bounding box dimensions as (width, height)
    pub fn bounding_size(&self) -> (usize, usize) {
        let Some(origin) = self.min_corner() else {
            return (0, 0);
        };
        let max_x = self.cells.iter().map(|cell| cell.x).max().unwrap_or(origin.x);
        let max_y = self.cells.iter().map(|cell| cell.y).max().unwrap_or(origin.y);
        (max_x - origin.x + 1, max_y - origin.y + 1)
    }

    /// Cells translated so the bounding box starts at (0, 0), in row-major order
    pub fn normalized_cells(&self) -> Vec<Cell> {
        let Some(origin) = self.min_corner() else {
            return Vec::new();
        };
        // BTreeSet order survives a uniform translation
        self.cells
            .iter()
            .map(|cell| Cell::new(cell.x - origin.x, cell.y - origin.y))
            .collect()
    }

    /// Union of both pieces' cells under a fresh id
    #[must_use]
    pub fn merged(&self, other: &Self, id: PieceId) -> Self {
        Self {
            id,
            cells: self.cells.union(&other.cells).copied().collect(),
        }
    }

    /// Test whether two pieces are translations of one another
    ///
    /// Rotations and reflections count as different shapes.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.len() == other.len() && self.normalized_cells() == other.normalized_cells()
    }

    /// Test whether every cell is reachable from every other through shared edges
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.cells.iter().next() else {
            return false;
        };

        let mut visited = BTreeSet::from([start]);
        let mut frontier = vec![start];
        while let Some(cell) = frontier.pop() {
            for next in self.cells.iter().filter(|next| cell.is_adjacent(next)) {
                if visited.insert(*next) {
                    frontier.push(*next);
                }
            }
        }

        visited.len() == self.cells.len()
    }
}
