//! Exact-cover encoding of "tile the grid with the current pieces"
//!
//! Columns `0..size²` are the grid cells in row-major order, followed by
//! one column per piece. Each row places one piece's normalised shape at a
//! translation that keeps every cell on the board, covering those cells and
//! the piece's own column. Only translations are generated; pieces are never
//! rotated or reflected.

use crate::algorithm::solver::ExactCoverSolver;
use crate::io::configuration::UNIQUENESS_PROBE_LIMIT;
use crate::io::error::Result;
use crate::spatial::{Cell, GeneratorState};

/// Row label: a piece (by index in the state) translated to `origin`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Index of the piece in the state's piece list
    pub piece_index: usize,
    /// Board position of the shape's bounding box corner
    pub origin: Cell,
}

/// Column covering a grid cell
pub const fn cell_column(cell: Cell, size: usize) -> usize {
    cell.y * size + cell.x
}

/// Column identifying a piece
pub const fn piece_column(piece_index: usize, size: usize) -> usize {
    size * size + piece_index
}

/// Build the solver for the given partition
///
/// # Errors
///
/// Propagates an unknown column error from row registration, which only
/// arises if the encoding above is broken
pub fn build_solver(state: &GeneratorState) -> Result<ExactCoverSolver<Placement>> {
    let size = state.size;
    let mut solver = ExactCoverSolver::new(state.cell_count() + state.piece_count());

    for (piece_index, piece) in state.pieces.iter().enumerate() {
        let shape = piece.normalized_cells();
        let (width, height) = piece.bounding_size();
        if shape.is_empty() || width > size || height > size {
            continue;
        }

        for start_y in 0..=size - height {
            for start_x in 0..=size - width {
                let mut columns: Vec<usize> = shape
                    .iter()
                    .map(|cell| cell_column(cell.offset(start_x, start_y), size))
                    .collect();
                columns.push(piece_column(piece_index, size));

                solver.add_constraint(
                    Placement {
                        piece_index,
                        origin: Cell::new(start_x, start_y),
                    },
                    &columns,
                )?;
            }
        }
    }

    Ok(solver)
}

/// Count tilings of the grid by the state's pieces, stopping at `limit`
///
/// # Errors
///
/// Returns an error if the solver cannot be built
pub fn count_solutions(state: &GeneratorState, limit: usize) -> Result<usize> {
    Ok(build_solver(state)?.count(limit))
}

/// Test whether the state's pieces tile the grid in exactly one way
///
/// The state's own arrangement is always a tiling, so a valid partition
/// never reports zero solutions.
///
/// # Errors
///
/// Returns an error if the solver cannot be built
pub fn has_unique_solution(state: &GeneratorState) -> Result<bool> {
    Ok(count_solutions(state, UNIQUENESS_PROBE_LIMIT)? == 1)
}
