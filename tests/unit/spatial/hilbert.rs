//! Tests for the base Hilbert curve tables

#[cfg(test)]
mod tests {
    use palettemath::spatial::hilbert::{
        HILBERT_BITS, HILBERT_POINTS, HILBERT_SIDE, HilbertTables, hilbert_distance, hilbert_point,
        hilbert_x, hilbert_y, hilbert_z, init_3d, morton_encode_3d, morton_to_hilbert_3d,
    };
    use std::collections::HashSet;

    // Tests the cube dimensions agree with each other
    // Verified by changing the bit count alone
    #[test]
    fn test_dimensions() {
        assert_eq!(HILBERT_SIDE, 16);
        assert_eq!(HILBERT_POINTS, 1 << (3 * HILBERT_BITS));
    }

    // Tests the recurrence is a bijection on 12-bit codes
    // Verified by skipping the final gray-code step
    #[test]
    fn test_recurrence_is_bijective() {
        let mut seen = HashSet::new();
        for x in 0..HILBERT_SIDE {
            for y in 0..HILBERT_SIDE {
                for z in 0..HILBERT_SIDE {
                    let code = morton_to_hilbert_3d(morton_encode_3d(x, y, z), HILBERT_BITS);
                    assert!(code < HILBERT_POINTS as u32);
                    assert!(seen.insert(code));
                }
            }
        }
        assert_eq!(seen.len(), HILBERT_POINTS);
    }

    // Tests a single bit per axis reduces to a Gray-code walk of the unit cube
    // Verified by disabling the gray-code step
    #[test]
    fn test_one_bit_curve() {
        let codes: Vec<u32> = (0..8).map(|m| morton_to_hilbert_3d(m, 1)).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..8).collect::<Vec<_>>());
    }

    // Tests the shared tables match a freshly built copy
    // Verified by writing y into the x table
    #[test]
    fn test_shared_tables_match_fresh_build() {
        let fresh = HilbertTables::build();
        let shared = init_3d();
        for d in (0..HILBERT_POINTS as u32).step_by(13) {
            assert_eq!(fresh.point(d), shared.point(d));
            assert_eq!([hilbert_x(d), hilbert_y(d), hilbert_z(d)], hilbert_point(d));
        }
    }

    // Tests the inverse table round-trips every cell
    // Verified by storing the Morton code instead of the distance
    #[test]
    fn test_inverse() {
        for d in 0..HILBERT_POINTS as u32 {
            let [x, y, z] = hilbert_point(d);
            assert_eq!(hilbert_distance(x, y, z), d);
        }
    }

    // Tests Morton codes interleave with x in the lowest bit
    // Verified by interleaving z lowest
    #[test]
    fn test_morton_interleaves_x_lowest() {
        assert_eq!(morton_encode_3d(1, 0, 0), 0b001);
        assert_eq!(morton_encode_3d(0, 1, 0), 0b010);
        assert_eq!(morton_encode_3d(0, 0, 1), 0b100);
        assert_eq!(morton_encode_3d(2, 0, 0), 0b1000);
        assert_eq!(morton_encode_3d(31, 31, 31), 0x7FFF);
    }

    // Tests known cells along the curve, including both endpoints
    // Verified by swapping the y and z tables
    #[test]
    fn test_known_cells() {
        assert_eq!(hilbert_point(0), [0, 0, 0]);
        assert_eq!(hilbert_point(1), [1, 0, 0]);
        assert_eq!(hilbert_point(2), [1, 1, 0]);
        assert_eq!(hilbert_point(7), [0, 0, 1]);
        assert_eq!(hilbert_point(100), [1, 6, 3]);
        assert_eq!(hilbert_point(2048), [7, 15, 8]);
        assert_eq!(hilbert_point(4095), [0, 0, 15]);
    }

    // Tests distances and coordinates wrap by masking
    // Verified by clamping out-of-range distances
    #[test]
    fn test_lookups_wrap() {
        assert_eq!(hilbert_point(4096), hilbert_point(0));
        assert_eq!(hilbert_distance(16, 17, 18), hilbert_distance(0, 1, 2));
    }
}
