//! Avalanche sampling for the Water hash
//!
//! Random inputs get one bit flipped; the fraction of output bits that change
//! is averaged over all samples. A well-mixed hash sits close to 0.5 on both
//! the 64-bit and 32-bit paths.

use crate::hashing::water::{hash_lanes32, hash_lanes64};
use crate::io::error::{Result, invalid_parameter};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Averages over all sampled bit flips
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AvalancheReport {
    /// Number of inputs sampled
    pub samples: usize,
    /// Input length in bytes
    pub length: usize,
    /// Mean fraction of the 64 output bits that changed
    pub mean_fraction_64: f64,
    /// Mean fraction of the 32 output bits that changed
    pub mean_fraction_32: f64,
    /// Smallest number of 64-bit output bits changed by any flip
    pub min_changed_64: u32,
    /// Largest number of 64-bit output bits changed by any flip
    pub max_changed_64: u32,
}

impl AvalancheReport {
    /// Largest distance of either mean from the ideal 0.5
    pub fn bias(&self) -> f64 {
        (self.mean_fraction_64 - 0.5)
            .abs()
            .max((self.mean_fraction_32 - 0.5).abs())
    }
}

/// Flip one random bit in each of `samples` random byte arrays and measure output change
///
/// `on_sample` is called after every sample, for progress display.
///
/// # Errors
///
/// Returns an error if `samples` or `length` is zero
pub fn measure_avalanche<F>(
    samples: usize,
    length: usize,
    seed: u64,
    mut on_sample: F,
) -> Result<AvalancheReport>
where
    F: FnMut(usize),
{
    if samples == 0 {
        return Err(invalid_parameter("samples", &samples, &"must be positive"));
    }
    if length == 0 {
        return Err(invalid_parameter("length", &length, &"must be positive"));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut input = vec![0_u8; length];
    let mut changed_64 = 0_u64;
    let mut changed_32 = 0_u64;
    let mut min_changed_64 = u32::MAX;
    let mut max_changed_64 = 0;

    for sample in 0..samples {
        rng.fill(input.as_mut_slice());
        let before_64 = hash_lanes64(&input);
        let before_32 = hash_lanes32(&input);

        let bit = rng.random_range(0..length * 8);
        if let Some(byte) = input.get_mut(bit / 8) {
            *byte ^= 1 << (bit % 8);
        }

        let flipped_64 = (before_64 ^ hash_lanes64(&input)).count_ones();
        let flipped_32 = (before_32 ^ hash_lanes32(&input)).count_ones();
        changed_64 += u64::from(flipped_64);
        changed_32 += u64::from(flipped_32);
        min_changed_64 = min_changed_64.min(flipped_64);
        max_changed_64 = max_changed_64.max(flipped_64);

        on_sample(sample + 1);
    }

    Ok(AvalancheReport {
        samples,
        length,
        mean_fraction_64: changed_64 as f64 / (samples as f64 * 64.0),
        mean_fraction_32: changed_32 as f64 / (samples as f64 * 32.0),
        min_changed_64,
        max_changed_64,
    })
}
