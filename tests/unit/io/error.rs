//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use palettemath::PaletteError;
    use palettemath::io::error::file_system_error;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error("/tmp/table.png", "read", io_error);
        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/table.png"));
    }

    // Tests length mismatch message names both sizes
    // Verified by omitting the expected size
    #[test]
    fn test_palette_length_message() {
        let error = PaletteError::PaletteLength {
            expected: 32_768,
            actual: 12,
        };
        let message = error.to_string();
        assert!(message.contains("32768"));
        assert!(message.contains("12"));
        assert!(error.source().is_none());
    }

    // Tests curve failures name the curve
    // Verified by dropping the curve name from the message
    #[test]
    fn test_curve_check_message() {
        let error = PaletteError::CurveCheck {
            curve: "pealbert",
            summary: "1 broken".to_string(),
        };
        assert!(error.to_string().contains("pealbert"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = PaletteError::InvalidParameter {
            parameter: "length",
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("length"));
        assert!(message.contains('0'));
        assert!(message.contains("must be positive"));
    }
}
