//! Generation constants and runtime configuration defaults

use crate::spatial::puzzle::Color;

// Generation parameters
/// Grid sizes with a tuned unconditional merge count
pub const SUPPORTED_SIZES: [usize; 3] = [6, 7, 8];

/// Merges performed before uniqueness checking begins, keyed by grid size
pub const UNCONDITIONAL_MERGES: [(usize, usize); 3] = [(6, 24), (7, 34), (8, 45)];

/// Grid size used when none is requested
pub const DEFAULT_SIZE: usize = 6;

/// Default base of the pair scoring function
pub const DEFAULT_EVALUATION_BASE: f64 = 3.0;

/// Solutions requested from the solver when testing uniqueness
pub const UNIQUENESS_PROBE_LIMIT: usize = 2;

/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 16;

/// Fixed piece palette, chosen for distinguishability against a light background
pub const PALETTE: [Color; 16] = [
    "#E74C3C", "#FF5722", "#F39C12", "#F1C40F", "#CDDC39", "#2ECC71", "#1ABC9C", "#3498DB",
    "#3F51B5", "#9B59B6", "#E91E63", "#FF6B35", "#4FC3F7", "#FFB74D", "#FF9800", "#26A69A",
];

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of puzzles per invocation
pub const DEFAULT_COUNT: usize = 1;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Prefix of exported image filenames
pub const OUTPUT_PREFIX: &str = "puzzle";
/// Edge length of one grid cell in exported images, in pixels
pub const CELL_PIXELS: u32 = 32;
/// Width of the outline drawn between different pieces, in pixels
pub const BORDER_PIXELS: u32 = 2;
