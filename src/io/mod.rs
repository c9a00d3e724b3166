//! Input/output operations and error handling

/// Command-line interface
pub mod cli;
/// Table sizes, seeds and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering
pub mod image;
/// Log subscriber setup
pub mod logging;
/// Progress bars for long sweeps
pub mod progress;
