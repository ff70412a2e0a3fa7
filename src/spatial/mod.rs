//! Spatial data structures for the puzzle grid
//!
//! This module contains spatial-related functionality including:
//! - Cell addressing and adjacency
//! - Pieces and the generator's partition state
//! - The finished puzzle handed to consumers

/// Cell coordinates and 4-neighbour adjacency
pub mod cell;
/// Generator state holding the current grid partition
pub mod grid;
/// Connected cell clusters and shape normalisation
pub mod piece;
/// Finished puzzle output
pub mod puzzle;

pub use cell::Cell;
pub use grid::GeneratorState;
pub use piece::{GeneratorPiece, PieceId};
pub use puzzle::{Color, Puzzle, PuzzlePiece};
