//! Tests for the lognormal dither multipliers

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use palettemath::io::configuration::NOISE_SIDE;
    use palettemath::tables::dither::multiplier;
    use palettemath::tables::{DitherTables, TriangularNoise, dither_tables};

    // Tests multipliers increase with the noise byte
    // Verified by negating the probit
    #[test]
    fn test_multiplier_is_increasing() {
        for byte in 1..=u8::MAX {
            assert!(multiplier(byte) > multiplier(byte - 1));
        }
    }

    // Tests the extreme multipliers
    // Verified by using a spread of one
    #[test]
    fn test_extremes() {
        assert!((multiplier(255) - 4.2326).abs() < 1e-3);
        assert!((multiplier(0) - 1.0 / 4.2326).abs() < 1e-4);
    }

    // Tests the shared tables come from the default triangular noise
    // Verified by seeding the shared tables differently
    #[test]
    fn test_shared_tables_use_default_seed() {
        let fresh = DitherTables::derive(&TriangularNoise::new(42));
        let shared = dither_tables();
        assert_eq!(fresh.a, shared.a);
        assert_eq!(fresh.c, shared.c);
    }

    // Tests every grid keeps the noise shape
    // Verified by transposing one grid
    #[test]
    fn test_grid_shapes() {
        let noise = [
            Array2::from_elem((NOISE_SIDE, NOISE_SIDE), 0_u8),
            Array2::from_elem((NOISE_SIDE, NOISE_SIDE), 128_u8),
            Array2::from_elem((2, 3), 255_u8),
        ];
        let tables = DitherTables::derive(&noise);
        assert_eq!(tables.a.dim(), (NOISE_SIDE, NOISE_SIDE));
        assert_eq!(tables.c.dim(), (2, 3));
        assert!(tables.b.iter().all(|&v| v > 1.0));
    }

    // Tests mirrored bytes give reciprocal multipliers around one
    // Verified by offsetting the probability by one byte
    #[test]
    fn test_mirrored_bytes_are_reciprocal() {
        assert!(multiplier(128) >= 1.0);
        assert!(multiplier(127) <= 1.0);
        for byte in 0..=u8::MAX {
            let product = multiplier(byte) * multiplier(u8::MAX - byte);
            assert!((product - 1.0).abs() < 1e-5);
        }
    }
}
