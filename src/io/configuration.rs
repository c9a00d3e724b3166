//! Table dimensions, seeds and runtime configuration defaults

/// Bytes in the palette mapping table, one per RGB555 colour
pub const PALETTE_MAP_SIZE: usize = 0x8000;

/// Entries in a palette
pub const PALETTE_SIZE: usize = 256;

/// Side length of each blue-noise grid
pub const NOISE_SIDE: usize = 128;
/// Cells in each blue-noise grid
pub const NOISE_CELLS: usize = NOISE_SIDE * NOISE_SIDE;

// Half of a standard deviation in log space; puts the largest multiplier near 4.23
/// Scale applied to the probit value before exponentiating
pub const MULTIPLIER_SPREAD: f64 = 0.5;

// Default values for configurable parameters
/// Fixed seed for the bundled noise grids and for avalanche sampling
pub const DEFAULT_SEED: u64 = 42;

/// Default number of single-bit flips sampled by the avalanche check
pub const DEFAULT_AVALANCHE_SAMPLES: usize = 4096;

/// Default input length in bytes for the avalanche check
pub const DEFAULT_AVALANCHE_LENGTH: usize = 64;

/// Default number of sample points per function in the accuracy sweep
pub const DEFAULT_ACCURACY_STEPS: usize = 100_000;

// Progress bar display settings
/// Sweeps shorter than this finish without a progress bar
pub const MIN_PROGRESS_LENGTH: usize = 1024;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Directory rendered tables are written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "tables";
/// File names for the three rendered dither tables
pub const DITHER_OUTPUT_NAMES: [&str; 3] = ["dither_a.png", "dither_b.png", "dither_c.png"];
/// File name for the rendered palette map
pub const PALETTE_OUTPUT_NAME: &str = "palette_map.png";
/// File name for the rendered curve slices
pub const CURVE_OUTPUT_NAME: &str = "pealbert.png";
