//! Self-check for space-filling curves: unit steps and full coverage

use bitvec::prelude::*;
use std::fmt;

/// Outcome of walking a curve from its first cell to its last
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurveReport {
    /// Number of consecutive pairs examined
    pub steps_checked: usize,
    /// Distances `d` whose step to `d + 1` is not a single unit move
    pub broken_steps: Vec<u32>,
    /// Cells reached more than once
    pub revisited: usize,
    /// Cells never reached
    pub unvisited: usize,
}

impl CurveReport {
    /// True when every step is a unit move and every cell is visited exactly once
    pub const fn is_valid(&self) -> bool {
        self.broken_steps.is_empty() && self.revisited == 0 && self.unvisited == 0
    }
}

impl fmt::Display for CurveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} steps, {} broken, {} revisited, {} unvisited",
            self.steps_checked,
            self.broken_steps.len(),
            self.revisited,
            self.unvisited
        )
    }
}

/// Manhattan distance between two cells
pub fn manhattan(a: [u32; 3], b: [u32; 3]) -> u32 {
    a.iter().zip(b.iter()).map(|(&p, &q)| p.abs_diff(q)).sum()
}

/// Walk `points` cells of a cube with `side` cells per axis
///
/// `point` maps a distance to its cell. Coordinates outside the cube count as
/// unvisited cells rather than panicking.
pub fn verify_curve<F>(points: u32, side: u32, point: F) -> CurveReport
where
    F: Fn(u32) -> [u32; 3],
{
    let cells = (side as usize).pow(3);
    let mut visited = bitvec![0; cells];
    let mut report = CurveReport::default();
    let mut previous: Option<[u32; 3]> = None;

    for distance in 0..points {
        let cell = point(distance);
        let [x, y, z] = cell;
        if x < side && y < side && z < side {
            let index = (x + side * (y + side * z)) as usize;
            if visited.get(index).as_deref() == Some(&true) {
                report.revisited += 1;
            } else {
                visited.set(index, true);
            }
        }

        if let Some(last) = previous {
            report.steps_checked += 1;
            if manhattan(last, cell) != 1 {
                report.broken_steps.push(distance - 1);
            }
        }
        previous = Some(cell);
    }

    report.unvisited = visited.count_zeros();
    report
}
