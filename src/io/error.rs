//! Error types for table decoding and the diagnostic tool

use std::fmt;
use std::path::PathBuf;

/// Main error type for the crate
#[derive(Debug)]
pub enum PaletteError {
    /// Embedded palette text is not valid base64
    PaletteDecode {
        /// Underlying decoder error
        source: base64::DecodeError,
    },

    /// Palette text decoded, but to the wrong number of bytes
    PaletteLength {
        /// Declared table size
        expected: usize,
        /// Number of bytes actually decoded
        actual: usize,
    },

    /// A curve self-check found broken steps or coverage gaps
    CurveCheck {
        /// Name of the curve that failed
        curve: &'static str,
        /// Summary of the failed walk
        summary: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered table to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The global log subscriber could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaletteDecode { source } => {
                write!(f, "Failed to decode palette map: {source}")
            }
            Self::PaletteLength { expected, actual } => {
                write!(f, "Palette map has {actual} bytes, expected {expected}")
            }
            Self::CurveCheck { curve, summary } => {
                write!(f, "Curve check failed for {curve}: {summary}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { reason } => {
                write!(f, "Failed to initialize logging: {reason}")
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PaletteDecode { source } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, PaletteError>;

impl From<base64::DecodeError> for PaletteError {
    fn from(source: base64::DecodeError) -> Self {
        Self::PaletteDecode { source }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PaletteError {
    PaletteError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O failure with the path and operation it happened in
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PaletteError {
    PaletteError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
