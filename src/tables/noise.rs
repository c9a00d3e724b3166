//! Noise grid providers for the dither tables
//!
//! Dither multipliers are derived from three 128×128 byte grids. Blue-noise
//! textures are supplied from outside through [`BlueNoiseSource`]. The bundled
//! [`TriangularNoise`] has the right value distribution but no spatial
//! shaping: its cells are shuffled independently, so it is white noise.

use crate::io::configuration::{NOISE_CELLS, NOISE_SIDE};
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

/// Supplies the three byte grids the dither tables are derived from
pub trait BlueNoiseSource {
    /// The three grids, each [`NOISE_SIDE`] × [`NOISE_SIDE`]
    fn grids(&self) -> [&Array2<u8>; 3];
}

impl BlueNoiseSource for [Array2<u8>; 3] {
    fn grids(&self) -> [&Array2<u8>; 3] {
        let [a, b, c] = self;
        [a, b, c]
    }
}

/// Deterministic white-noise grids with a triangular value distribution
///
/// Every grid holds the same multiset of values, in which `u` and `255 - u`
/// occur equally often and middle values are the most common. Only the
/// arrangement differs, a uniform shuffle by a seeded generator. Neighbouring
/// cells are uncorrelated, so dithering with these grids is noisier than with
/// a void-and-cluster texture.
#[derive(Clone, Debug)]
pub struct TriangularNoise {
    grids: [Array2<u8>; 3],
}

// Sum of two 7-bit fields plus one extra bit; complementing the index maps u to 255 - u
fn triangular_value(index: usize) -> u8 {
    ((index & 127) + ((index >> 7) & 127) + ((index >> 6) & 1)) as u8
}

fn shuffled_grid(seed: u64) -> Array2<u8> {
    let mut values: Vec<u8> = (0..NOISE_CELLS).map(triangular_value).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    values.shuffle(&mut rng);
    Array2::from_shape_fn((NOISE_SIDE, NOISE_SIDE), |(row, col)| {
        values.get(row * NOISE_SIDE + col).copied().unwrap_or(0)
    })
}

impl TriangularNoise {
    /// Generate three grids from one seed
    pub fn new(seed: u64) -> Self {
        Self {
            grids: [
                shuffled_grid(seed),
                shuffled_grid(seed.wrapping_add(1)),
                shuffled_grid(seed.wrapping_add(2)),
            ],
        }
    }
}

impl BlueNoiseSource for TriangularNoise {
    fn grids(&self) -> [&Array2<u8>; 3] {
        self.grids.grids()
    }
}

