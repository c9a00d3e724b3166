//! Precomputed constant tables
//!
//! This module contains:
//! - The embedded RGB555 to palette-index mapping
//! - Noise grid sources (external blue noise, or bundled white noise)
//! - Dither multiplier grids derived from those sources

/// Lognormal dither multipliers
pub mod dither;
/// Noise grid providers
pub mod noise;
/// Palette index mapping
pub mod palette;

pub use dither::{DitherTables, dither_tables};
pub use noise::{BlueNoiseSource, TriangularNoise};
pub use palette::{DEFAULT_PALETTE, palette_map};
