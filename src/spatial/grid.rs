//! Generator state: the current partition of the grid into pieces
//!
//! The state always holds a partition of the full `size` x `size` grid.
//! Merging replaces two pieces with their union under a fresh id, so the
//! piece count falls by one per merge while the cell coverage is unchanged.

use ndarray::Array2;

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::cell::{Cell, all_cells};
use crate::spatial::piece::{GeneratorPiece, PieceId};

/// Mutable partition state owned by a single generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorState {
    /// Current pieces; order carries no meaning beyond indexing
    pub pieces: Vec<GeneratorPiece>,
    /// Grid edge length
    pub size: usize,
    /// Id given to the next merged piece
    pub next_id: PieceId,
}

impl GeneratorState {
    /// Create the initial state of `size`² singleton pieces
    ///
    /// Ids run from 1 in row-major order.
    pub fn new(size: usize) -> Self {
        let pieces: Vec<GeneratorPiece> = all_cells(size)
            .into_iter()
            .zip(1..)
            .map(|(cell, id)| GeneratorPiece::singleton(id, cell))
            .collect();
        let next_id = pieces.len() as PieceId + 1;

        Self {
            pieces,
            size,
            next_id,
        }
    }

    /// Number of pieces
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Number of grid cells
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Largest id issued so far
    pub const fn last_id(&self) -> PieceId {
        self.next_id.saturating_sub(1)
    }

    /// Merge the pieces at indices `i` and `j`, returning the new piece's id
    ///
    /// Both pieces are removed and the union is appended at the end.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range or both are equal
    pub fn merge(&mut self, i: usize, j: usize) -> Result<PieceId> {
        let piece_count = self.pieces.len();
        for index in [i, j] {
            if index >= piece_count {
                return Err(AlgorithmError::InvalidPieceIndex { index, piece_count });
            }
        }
        if i == j {
            return Err(AlgorithmError::InvalidPieceIndex {
                index: i,
                piece_count,
            });
        }

        // Remove the higher index first so the lower one stays valid
        let (low, high) = if i < j { (i, j) } else { (j, i) };
        let second = self.pieces.remove(high);
        let first = self.pieces.remove(low);

        let id = self.next_id;
        self.pieces.push(first.merged(&second, id));
        self.next_id += 1;

        Ok(id)
    }

    /// Map each cell (indexed `[y, x]`) to the index of the piece owning it
    ///
    /// Cells outside the grid are ignored; when two pieces claim a cell the
    /// later piece wins. Use [`Self::check_partition`] to detect either case.
    pub fn ownership(&self) -> Array2<Option<usize>> {
        let mut owners = Array2::from_elem((self.size, self.size), None);
        for (index, piece) in self.pieces.iter().enumerate() {
            for cell in &piece.cells {
                if let Some(owner) = owners.get_mut([cell.y, cell.x]) {
                    *owner = Some(index);
                }
            }
        }
        owners
    }

    /// Verify every grid cell belongs to exactly one piece
    ///
    /// # Errors
    ///
    /// Returns a partition violation naming the first out-of-bounds,
    /// duplicated or missing cell
    pub fn check_partition(&self) -> Result<()> {
        let mut claims = Array2::<u32>::zeros((self.size, self.size));

        for piece in &self.pieces {
            if piece.is_empty() {
                return Err(AlgorithmError::PartitionViolation {
                    reason: format!("piece {} has no cells", piece.id),
                });
            }
            for cell in &piece.cells {
                let claim = claims.get_mut([cell.y, cell.x]).ok_or_else(|| {
                    AlgorithmError::PartitionViolation {
                        reason: format!("piece {} holds out-of-bounds cell ({cell})", piece.id),
                    }
                })?;
                *claim += 1;
                if *claim > 1 {
                    return Err(AlgorithmError::PartitionViolation {
                        reason: format!("cell ({cell}) is covered more than once"),
                    });
                }
            }
        }

        if let Some(((y, x), _)) = claims.indexed_iter().find(|(_, count)| **count == 0) {
            return Err(AlgorithmError::PartitionViolation {
                reason: format!("cell ({}) is not covered", Cell::new(x, y)),
            });
        }

        Ok(())
    }
}
