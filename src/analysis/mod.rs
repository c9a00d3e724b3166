//! Diagnostic measurements over the hash and trig implementations

/// Trig approximation error sweeps
pub mod accuracy;
/// Hash avalanche sampling
pub mod avalanche;
