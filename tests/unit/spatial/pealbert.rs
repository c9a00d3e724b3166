//! Tests for the composed 32-wide curve

#[cfg(test)]
mod tests {
    use palettemath::spatial::hilbert::HILBERT_SIDE;
    use palettemath::spatial::pealbert::{
        PEALBERT_POINTS, PEALBERT_SIDE, SECTIONS, pealbert_distance, pealbert_point,
        verify_pealbert,
    };
    use palettemath::spatial::verify::manhattan;

    // Tests each section fills exactly one octant
    // Verified by giving two sections the same octant
    #[test]
    fn test_sections_tile_the_cube() {
        let mut octants: Vec<[u32; 3]> = SECTIONS.iter().map(|s| s.offset).collect();
        octants.sort_unstable();
        octants.dedup();
        assert_eq!(octants.len(), 8);
        assert!(
            SECTIONS
                .iter()
                .all(|s| s.offset.iter().all(|&o| o == 0 || o == HILBERT_SIDE))
        );
    }

    // Tests every axis permutation is a permutation
    // Verified by repeating an axis in one section
    #[test]
    fn test_section_axes_are_permutations() {
        for section in &SECTIONS {
            let mut axes = section.axes;
            axes.sort_unstable();
            assert_eq!(axes, [0, 1, 2]);
        }
    }

    // Tests consecutive sections join with a unit step
    // Verified by flipping x in the fourth section
    #[test]
    fn test_section_seams() {
        for section in 1..8_u32 {
            let start = section * 4096;
            assert_eq!(
                manhattan(pealbert_point(start - 1), pealbert_point(start)),
                1,
                "seam before section {section}"
            );
        }
    }

    // Tests an interior point and the inverse lookup
    // Verified by applying flips before the axis permutation
    #[test]
    fn test_interior_point() {
        assert_eq!(pealbert_point(12_345), [14, 19, 14]);
        assert_eq!(pealbert_distance(14, 19, 14), 12_345);
    }

    // Tests the full self-check passes
    // Verified by swapping the last two sections
    #[test]
    fn test_self_check() {
        let report = verify_pealbert();
        assert!(report.is_valid(), "{report}");
        assert_eq!(report.steps_checked, PEALBERT_POINTS - 1);
        assert_eq!(PEALBERT_SIDE, 32);
    }

    // Tests the first and last cell of every section
    // Verified by translating the fifth section along y instead of x
    #[test]
    fn test_section_boundaries() {
        assert_eq!(pealbert_point(0), [0, 0, 0]);
        assert_eq!(pealbert_point(4095), [0, 0, 15]);
        assert_eq!(pealbert_point(4096), [0, 0, 16]);
        assert_eq!(pealbert_point(8192), [0, 16, 16]);
        assert_eq!(pealbert_point(12288), [15, 16, 15]);
        assert_eq!(pealbert_point(16384), [16, 16, 0]);
        assert_eq!(pealbert_point(20480), [16, 16, 16]);
        assert_eq!(pealbert_point(24576), [16, 15, 31]);
        assert_eq!(pealbert_point(28672), [16, 15, 15]);
        assert_eq!(pealbert_point(32767), [16, 15, 0]);
    }

    // Tests the inverse at section edges
    // Verified by building the inverse table from the base curve only
    #[test]
    fn test_inverse_at_section_edges() {
        for d in [0, 1, 4095, 4096, 12345, 32767] {
            let [x, y, z] = pealbert_point(d);
            assert_eq!(pealbert_distance(x, y, z), d);
        }
    }
}
