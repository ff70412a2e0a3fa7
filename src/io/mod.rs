/// Command-line interface for batch generation
pub mod cli;
/// Generation constants and configuration defaults
pub mod configuration;
/// Error types for all operations
pub mod error;
/// PNG export of solved layouts
pub mod image;
/// Progress reporting during batch generation
pub mod progress;
/// Plain-text rendering of puzzles
pub mod render;
