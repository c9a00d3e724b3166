//! Space-filling curves over small cubes
//!
//! This module contains:
//! - The 16×16×16 Hilbert base curve and its lookup tables
//! - The 32×32×32 Pealbert curve built from eight base cubes
//! - A self-check that walks a curve and verifies adjacency and coverage

/// Base Hilbert curve tables
pub mod hilbert;
/// Composed 32-wide curve
pub mod pealbert;
/// Curve adjacency and coverage checks
pub mod verify;

pub use hilbert::{HilbertTables, init_3d};
pub use pealbert::{pealbert_distance, pealbert_point, pealbert_x, pealbert_y, pealbert_z};
pub use verify::CurveReport;
