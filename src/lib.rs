//! Random jigsaw dissection of a square grid with a unique-solution guarantee
//!
//! The grid starts as one piece per cell. Randomly chosen adjacent pieces are
//! merged, biased towards small pieces, until an exact-cover search confirms
//! the remaining pieces tile the grid in exactly one way.

#![forbid(unsafe_code)]

/// Merge engine, adjacency scoring, exact-cover formulation and solver
pub mod algorithm;
/// Command-line interface, configuration, progress, rendering and errors
pub mod io;
/// Cells, pieces, partition state and the finished puzzle
pub mod spatial;

pub use algorithm::executor::{
    Generation, GeneratorConfig, Phase, PuzzleGenerator, generate_puzzle, generate_puzzle_with,
};
pub use io::error::{AlgorithmError, Result};
