//! 32×32×32 "Pealbert" curve assembled from eight transformed Hilbert cubes
//!
//! The 15-bit distance splits into a 3-bit section and a 12-bit offset along
//! the base curve. Each section places a copy of the base cube in one octant,
//! permuting and mirroring its axes so that the last cell of one section is
//! face-adjacent to the first cell of the next. The base curve runs from
//! (0,0,0) to (0,0,15); the composed curve runs from (0,0,0) to (16,15,0).

use crate::spatial::hilbert::{HILBERT_SIDE, hilbert_point};
use crate::spatial::verify::{CurveReport, verify_curve};
use std::sync::LazyLock;
use tracing::debug;

/// Cells along each axis of the composed curve
pub const PEALBERT_SIDE: u32 = 2 * HILBERT_SIDE;
/// Cells in the composed cube
pub const PEALBERT_POINTS: usize = 1 << 15;

const DISTANCE_MASK: u32 = PEALBERT_POINTS as u32 - 1;
const AXIS_MASK: u32 = PEALBERT_SIDE - 1;
const SECTION_SHIFT: u32 = 12;
const LOCAL_MAX: u32 = HILBERT_SIDE - 1;

/// Placement of one base cube inside the composed cube
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionTransform {
    /// Output axis `i` reads base axis `axes[i]`
    pub axes: [usize; 3],
    /// Mirror output axis `i` inside its 16-cell span
    pub flip: [bool; 3],
    /// Translation of each output axis (0 or 16)
    pub offset: [u32; 3],
}

impl SectionTransform {
    const fn new(axes: [usize; 3], flip: [bool; 3], octant: [u32; 3]) -> Self {
        Self {
            axes,
            flip,
            offset: [
                octant[0] * HILBERT_SIDE,
                octant[1] * HILBERT_SIDE,
                octant[2] * HILBERT_SIDE,
            ],
        }
    }

    /// Map a base-cube cell into the composed cube
    pub fn apply(&self, base: [u32; 3]) -> [u32; 3] {
        let mut out = [0; 3];
        for (((slot, &axis), &flip), &offset) in out
            .iter_mut()
            .zip(&self.axes)
            .zip(&self.flip)
            .zip(&self.offset)
        {
            let v = base.get(axis).copied().unwrap_or(0);
            let v = if flip { LOCAL_MAX - v } else { v };
            *slot = v + offset;
        }
        out
    }
}

const IDENTITY: [usize; 3] = [0, 1, 2];
const NO_FLIP: [bool; 3] = [false, false, false];

/// Transforms for the eight 4096-step sections, in curve order
pub const SECTIONS: [SectionTransform; 8] = [
    SectionTransform::new(IDENTITY, NO_FLIP, [0, 0, 0]),
    SectionTransform::new([0, 2, 1], NO_FLIP, [0, 0, 1]),
    SectionTransform::new([2, 0, 1], NO_FLIP, [0, 1, 1]),
    SectionTransform::new(IDENTITY, [true, false, true], [0, 1, 0]),
    SectionTransform::new(IDENTITY, NO_FLIP, [1, 1, 0]),
    SectionTransform::new(IDENTITY, NO_FLIP, [1, 1, 1]),
    SectionTransform::new(IDENTITY, [false, true, true], [1, 0, 1]),
    SectionTransform::new(IDENTITY, [false, true, true], [1, 0, 0]),
];

/// Cell visited at `distance`, wrapped into the 15-bit range
pub fn pealbert_point(distance: u32) -> [u32; 3] {
    let d = distance & DISTANCE_MASK;
    let base = hilbert_point(d);
    SECTIONS
        .get((d >> SECTION_SHIFT) as usize)
        .map_or(base, |section| section.apply(base))
}

/// X coordinate at `distance` along the composed curve
pub fn pealbert_x(distance: u32) -> u32 {
    let [x, _, _] = pealbert_point(distance);
    x
}

/// Y coordinate at `distance` along the composed curve
pub fn pealbert_y(distance: u32) -> u32 {
    let [_, y, _] = pealbert_point(distance);
    y
}

/// Z coordinate at `distance` along the composed curve
pub fn pealbert_z(distance: u32) -> u32 {
    let [_, _, z] = pealbert_point(distance);
    z
}

const fn cell_index(x: u32, y: u32, z: u32) -> usize {
    ((x & AXIS_MASK) | ((y & AXIS_MASK) << 5) | ((z & AXIS_MASK) << 10)) as usize
}

static DISTANCES: LazyLock<Vec<u16>> = LazyLock::new(|| {
    debug!(points = PEALBERT_POINTS, "building Pealbert inverse table");
    let mut distances = vec![0_u16; PEALBERT_POINTS];
    for d in 0..PEALBERT_POINTS as u32 {
        let [x, y, z] = pealbert_point(d);
        if let Some(slot) = distances.get_mut(cell_index(x, y, z)) {
            *slot = d as u16;
        }
    }
    distances
});

/// Distance along the composed curve of `(x, y, z)`, each axis wrapped to 5 bits
pub fn pealbert_distance(x: u32, y: u32, z: u32) -> u32 {
    DISTANCES
        .get(cell_index(x, y, z))
        .copied()
        .map_or(0, u32::from)
}

/// Walk the whole composed curve and report adjacency and coverage
pub fn verify_pealbert() -> CurveReport {
    verify_curve(PEALBERT_POINTS as u32, PEALBERT_SIDE, pealbert_point)
}
