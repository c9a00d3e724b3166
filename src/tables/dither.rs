//! Lognormal dither multipliers derived from noise grids
//!
//! Each noise byte `u` is treated as the probability `(u + 0.5) / 256`, pushed
//! through the inverse normal CDF and exponentiated. Bytes above the midpoint
//! give multipliers in [1, ~4.23]; the mirrored byte `255 - u` gives the
//! reciprocal, so a symmetric grid has a geometric mean of 1.

use crate::io::configuration::{DEFAULT_SEED, MULTIPLIER_SPREAD};
use crate::math::probability::probit;
use crate::tables::noise::{BlueNoiseSource, TriangularNoise};
use ndarray::Array2;
use std::sync::LazyLock;
use tracing::debug;

/// Multiplier for a single noise byte
pub fn multiplier(byte: u8) -> f32 {
    let p = (f64::from(byte) + 0.5) / 256.0;
    (MULTIPLIER_SPREAD * probit(p)).exp() as f32
}

static MULTIPLIERS: LazyLock<[f32; 256]> = LazyLock::new(|| {
    let mut lut = [1.0_f32; 256];
    for (byte, slot) in (0..=u8::MAX).zip(lut.iter_mut()) {
        *slot = multiplier(byte);
    }
    lut
});

fn derive_grid(grid: &Array2<u8>) -> Array2<f32> {
    grid.mapv(|byte| MULTIPLIERS.get(usize::from(byte)).copied().unwrap_or(1.0))
}

/// Three multiplier grids, one per noise grid
#[derive(Clone, Debug)]
pub struct DitherTables {
    /// Multipliers from the first noise grid
    pub a: Array2<f32>,
    /// Multipliers from the second noise grid
    pub b: Array2<f32>,
    /// Multipliers from the third noise grid
    pub c: Array2<f32>,
}

impl DitherTables {
    /// Derive multiplier grids from a noise source
    pub fn derive<S: BlueNoiseSource + ?Sized>(source: &S) -> Self {
        let [a, b, c] = source.grids();
        Self {
            a: derive_grid(a),
            b: derive_grid(b),
            c: derive_grid(c),
        }
    }

    /// All three grids in order
    pub const fn tables(&self) -> [&Array2<f32>; 3] {
        [&self.a, &self.b, &self.c]
    }
}

static DITHER_TABLES: LazyLock<DitherTables> = LazyLock::new(|| {
    debug!(seed = DEFAULT_SEED, "deriving dither multiplier tables");
    DitherTables::derive(&TriangularNoise::new(DEFAULT_SEED))
});

/// Process-wide tables derived from the bundled [`TriangularNoise`] grids
///
/// These carry white noise, not blue noise. Callers with a blue-noise texture
/// derive their own tables with [`DitherTables::derive`].
pub fn dither_tables() -> &'static DitherTables {
    &DITHER_TABLES
}
