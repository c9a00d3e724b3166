//! Numeric building blocks for palette-based rendering
//!
//! A deterministic hash family, fast trigonometric approximations, 3D
//! space-filling curve tables, and the constant palette and dither tables
//! a colour-quantizing renderer reads from.

#![forbid(unsafe_code)]

/// Hash avalanche and trig accuracy measurements
pub mod analysis;
/// Water hash family for primitives, strings and sequences
pub mod hashing;
/// Input/output operations and error handling
pub mod io;
/// Trigonometric approximations and probability helpers
pub mod math;
/// Hilbert and Pealbert space-filling curves
pub mod spatial;
/// Palette mapping and dither multiplier tables
pub mod tables;

pub use io::error::{PaletteError, Result};
