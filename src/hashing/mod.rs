//! Water hash family
//!
//! Deterministic 32-bit and 64-bit fingerprints over sequences of primitives,
//! strings and nested containers. Absent input (`None`) always hashes to 0.

/// `std::hash` integration
pub mod hasher;
/// Element widening into hash lanes
pub mod lanes;
/// Mixing primitives and the hash entry points
pub mod water;

pub use hasher::{BuildWaterHasher, WaterHasher, WaterMap};
pub use lanes::Lane;
pub use water::{WaterHash, hash32, hash32_items, hash64, hash64_items};
