//! 16×16×16 Hilbert curve lookup tables
//!
//! Distances are produced by Morton-encoding the three axis indices and then
//! rewriting the Morton code into a Hilbert index with a closed-form bit
//! recurrence (three bits per level, tracked through a packed rotation/sign
//! state), finished by a Gray-code style XOR fold. The recurrence follows
//! "Fast 2D and 3D Hilbert curves and Morton codes" (and-what-happened,
//! 2011) instruction for instruction.

use std::sync::LazyLock;
use tracing::debug;

/// Bits per axis of the base curve
pub const HILBERT_BITS: u32 = 4;
/// Cells along each axis of the base curve
pub const HILBERT_SIDE: u32 = 1 << HILBERT_BITS;
/// Cells in the base cube
pub const HILBERT_POINTS: usize = 1 << (3 * HILBERT_BITS);

const DISTANCE_MASK: u32 = HILBERT_POINTS as u32 - 1;
const AXIS_MASK: u32 = HILBERT_SIDE - 1;

const fn spread_bits(index: u32) -> u32 {
    let v = (index & 0x1F).wrapping_mul(0x0104_1041) & 0x1020_4081;
    v.wrapping_mul(0x0001_1111) & 0x1249_0000
}

/// Interleave three 5-bit indices into a 15-bit Morton code, `x` in the lowest bit
pub const fn morton_encode_3d(x: u32, y: u32, z: u32) -> u32 {
    (spread_bits(x) >> 16) | (spread_bits(y) >> 15) | (spread_bits(z) >> 14)
}

/// Convert a 3D Morton code with `bits` bits per axis into a Hilbert index
pub const fn morton_to_hilbert_3d(morton: u32, bits: u32) -> u32 {
    let mut hilbert = morton;
    if bits > 1 {
        let mut block = bits * 3 - 3;
        let mut hcode = (hilbert >> block) & 7;
        let mut shift = 0_u32;
        let mut signs = 0_u32;
        while block > 0 {
            block -= 3;
            hcode <<= 2;
            let mut mcode = (0x2021_2021 >> hcode) & 3;
            shift = (0x48 >> (7 - shift - mcode)) & 3;
            signs = (signs | (signs << 3)) >> mcode;
            signs = (signs ^ (0x5356_0300 >> hcode)) & 7;
            mcode = (hilbert >> block) & 7;
            hcode = mcode;
            hcode = ((hcode | (hcode << 3)) >> shift) & 7;
            hcode ^= signs;
            hilbert ^= (mcode ^ hcode) << block;
        }
    }
    hilbert ^= (hilbert >> 1) & 0x9249_2492;
    hilbert ^= (hilbert & 0x9249_2492) >> 1;
    hilbert
}

/// Coordinate and distance tables for every cell of the base cube
#[derive(Clone, Debug)]
pub struct HilbertTables {
    x: Vec<u8>,
    y: Vec<u8>,
    z: Vec<u8>,
    distances: Vec<u16>,
}

impl HilbertTables {
    /// Populate all four tables
    pub fn build() -> Self {
        let mut tables = Self {
            x: vec![0; HILBERT_POINTS],
            y: vec![0; HILBERT_POINTS],
            z: vec![0; HILBERT_POINTS],
            distances: vec![0; HILBERT_POINTS],
        };

        for x in 0..HILBERT_SIDE {
            for y in 0..HILBERT_SIDE {
                for z in 0..HILBERT_SIDE {
                    let hilbert = morton_to_hilbert_3d(morton_encode_3d(x, y, z), HILBERT_BITS);
                    let d = (hilbert & DISTANCE_MASK) as usize;
                    if let Some(slot) = tables.x.get_mut(d) {
                        *slot = x as u8;
                    }
                    if let Some(slot) = tables.y.get_mut(d) {
                        *slot = y as u8;
                    }
                    if let Some(slot) = tables.z.get_mut(d) {
                        *slot = z as u8;
                    }
                    if let Some(slot) = tables.distances.get_mut(cell_index(x, y, z)) {
                        *slot = d as u16;
                    }
                }
            }
        }

        tables
    }

    /// Cell visited at `distance`, wrapped into the 12-bit range
    pub fn point(&self, distance: u32) -> [u32; 3] {
        let d = (distance & DISTANCE_MASK) as usize;
        [
            self.x.get(d).copied().map_or(0, u32::from),
            self.y.get(d).copied().map_or(0, u32::from),
            self.z.get(d).copied().map_or(0, u32::from),
        ]
    }

    /// Distance along the curve of the cell `(x, y, z)`, each axis wrapped to 4 bits
    pub fn distance(&self, x: u32, y: u32, z: u32) -> u32 {
        self.distances
            .get(cell_index(x, y, z))
            .copied()
            .map_or(0, u32::from)
    }
}

const fn cell_index(x: u32, y: u32, z: u32) -> usize {
    ((x & AXIS_MASK) | ((y & AXIS_MASK) << HILBERT_BITS) | ((z & AXIS_MASK) << (2 * HILBERT_BITS)))
        as usize
}

static TABLES: LazyLock<HilbertTables> = LazyLock::new(|| {
    debug!(points = HILBERT_POINTS, "building 3D Hilbert tables");
    HilbertTables::build()
});

/// Make sure the Hilbert tables are populated and return them
///
/// Safe to call any number of times from any thread; the tables are built once.
pub fn init_3d() -> &'static HilbertTables {
    &TABLES
}

/// X coordinate at `distance` along the base curve
pub fn hilbert_x(distance: u32) -> u32 {
    let [x, _, _] = TABLES.point(distance);
    x
}

/// Y coordinate at `distance` along the base curve
pub fn hilbert_y(distance: u32) -> u32 {
    let [_, y, _] = TABLES.point(distance);
    y
}

/// Z coordinate at `distance` along the base curve
pub fn hilbert_z(distance: u32) -> u32 {
    let [_, _, z] = TABLES.point(distance);
    z
}

/// All three coordinates at `distance`
pub fn hilbert_point(distance: u32) -> [u32; 3] {
    TABLES.point(distance)
}

/// Inverse lookup: distance of the cell `(x, y, z)`
pub fn hilbert_distance(x: u32, y: u32, z: u32) -> u32 {
    TABLES.distance(x, y, z)
}
