//! Finished puzzle handed to consumers
//!
//! Pieces carry normalised shapes only. Where each piece sits on the board
//! is the consumer's concern, so every placement slot starts out empty.

use ndarray::Array2;

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::cell::Cell;
use crate::spatial::grid::GeneratorState;
use crate::spatial::piece::PieceId;

/// A palette colour in `#RRGGBB` form
pub type Color = &'static str;

/// A finished piece with its shape anchored at (0, 0)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzlePiece {
    /// Identifier carried over from generation
    pub id: PieceId,
    /// Cells relative to the bounding box corner, in row-major order
    pub cells: Vec<Cell>,
    /// Assigned palette colour
    pub color: Color,
    /// Board position chosen by a consumer; never set by the generator
    pub placement: Option<Cell>,
}

/// Generated puzzle: board size, empty board slots and the pieces to place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Board edge length
    pub size: usize,
    /// Occupancy of each board cell (indexed `[y, x]`), initially all empty
    pub grid: Array2<Option<PieceId>>,
    /// Pieces in generator order
    pub pieces: Vec<PuzzlePiece>,
}

impl Puzzle {
    /// Build a puzzle from a finished state and one colour per piece
    ///
    /// # Errors
    ///
    /// Returns an error if the colour count differs from the piece count
    pub fn from_state(state: &GeneratorState, colors: &[Color]) -> Result<Self> {
        if colors.len() != state.piece_count() {
            return Err(AlgorithmError::InvalidConfiguration {
                parameter: "colors",
                value: colors.len().to_string(),
                reason: format!("expected one colour per piece ({})", state.piece_count()),
            });
        }

        let pieces = state
            .pieces
            .iter()
            .zip(colors)
            .map(|(piece, &color)| PuzzlePiece {
                id: piece.id,
                cells: piece.normalized_cells(),
                color,
                placement: None,
            })
            .collect();

        Ok(Self {
            size: state.size,
            grid: Array2::from_elem((state.size, state.size), None),
            pieces,
        })
    }

    /// Number of pieces
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Total cells over all pieces; equals `size`² for a generated puzzle
    pub fn cell_count(&self) -> usize {
        self.pieces.iter().map(|piece| piece.cells.len()).sum()
    }

    /// Look up a piece by id
    pub fn piece(&self, id: PieceId) -> Option<&PuzzlePiece> {
        self.pieces.iter().find(|piece| piece.id == id)
    }
}
