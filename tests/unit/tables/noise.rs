//! Tests for the bundled noise source

#[cfg(test)]
mod tests {
    use palettemath::io::configuration::{NOISE_CELLS, NOISE_SIDE};
    use palettemath::tables::{BlueNoiseSource, TriangularNoise};

    // Tests all three grids hold the same multiset of values
    // Verified by drawing values from the generator instead of shuffling
    #[test]
    fn test_grids_share_histogram() {
        let noise = TriangularNoise::new(3);
        let histograms: Vec<[usize; 256]> = noise
            .grids()
            .iter()
            .map(|grid| {
                let mut histogram = [0; 256];
                for &value in grid.iter() {
                    if let Some(count) = histogram.get_mut(usize::from(value)) {
                        *count += 1;
                    }
                }
                histogram
            })
            .collect();
        assert!(histograms.windows(2).all(|pair| pair.first() == pair.get(1)));
        assert_eq!(histograms.first().map(|h| h.iter().sum::<usize>()), Some(NOISE_CELLS));
    }

    // Tests the grids are square
    // Verified by building a single row
    #[test]
    fn test_grid_shape() {
        let noise = TriangularNoise::new(0);
        for grid in noise.grids() {
            assert_eq!(grid.dim(), (NOISE_SIDE, NOISE_SIDE));
        }
    }

    // Tests the value range covers both extremes
    // Verified by dropping the extra bit from the value formula
    #[test]
    fn test_value_range() {
        let noise = TriangularNoise::new(0);
        let [grid, _, _] = noise.grids();
        assert_eq!(grid.iter().min(), Some(&0));
        assert_eq!(grid.iter().max(), Some(&255));
    }

    // Tests the value histogram is symmetric and peaks in the middle
    // Verified by dropping the extra bit from the value formula
    #[test]
    fn test_histogram_is_symmetric_triangle() {
        let noise = TriangularNoise::new(9);
        let [grid, _, _] = noise.grids();
        let mut histogram = [0_usize; 256];
        for &value in grid {
            if let Some(count) = histogram.get_mut(usize::from(value)) {
                *count += 1;
            }
        }
        for u in 0..128 {
            assert_eq!(histogram.get(u), histogram.get(255 - u));
        }
        assert!(histogram.get(128) > histogram.get(64));
        assert!(histogram.get(64) > histogram.get(8));
    }

    // Tests the same seed rebuilds the same grids
    // Verified by seeding the shuffle from entropy
    #[test]
    fn test_same_seed_same_grids() {
        let first = TriangularNoise::new(7);
        let second = TriangularNoise::new(7);
        assert_eq!(first.grids(), second.grids());
    }
}
