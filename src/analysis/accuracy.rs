//! Error sweep of the trig approximations against the standard library

use crate::math::{trig, trig32};
use std::f64::consts::{PI, TAU};

/// Worst error observed for one approximation
#[derive(Clone, Debug, PartialEq)]
pub struct AccuracyRow {
    /// Function name
    pub name: &'static str,
    /// Largest absolute difference from the reference
    pub max_error: f64,
    /// Input at which that difference occurred
    pub worst_input: f64,
}

struct Probe {
    name: &'static str,
    low: f64,
    high: f64,
    approximate: fn(f64) -> f64,
    reference: fn(f64) -> f64,
}

const PROBES: [Probe; 10] = [
    Probe {
        name: "sin",
        low: -PI,
        high: PI,
        approximate: trig::sin,
        reference: f64::sin,
    },
    Probe {
        name: "cos",
        low: -PI,
        high: PI,
        approximate: trig::cos,
        reference: f64::cos,
    },
    Probe {
        name: "sin_deg",
        low: -180.0,
        high: 180.0,
        approximate: trig::sin_deg,
        reference: |degrees| degrees.to_radians().sin(),
    },
    Probe {
        name: "cos_turns",
        low: -0.5,
        high: 0.5,
        approximate: trig::cos_turns,
        reference: |turns| (turns * TAU).cos(),
    },
    Probe {
        name: "sin (f32)",
        low: -PI,
        high: PI,
        approximate: |radians| f64::from(trig32::sin(radians as f32)),
        reference: f64::sin,
    },
    // atan2 probes walk a circle of radius 3 by angle
    Probe {
        name: "atan2",
        low: -PI + 1e-9,
        high: PI,
        approximate: |angle| trig::atan2(3.0 * angle.sin(), 3.0 * angle.cos()),
        reference: |angle| (3.0 * angle.sin()).atan2(3.0 * angle.cos()),
    },
    Probe {
        name: "atan2_turns",
        low: 0.0,
        high: TAU - 1e-9,
        approximate: |angle| trig::atan2_turns(angle.sin(), angle.cos()),
        reference: |angle| angle.sin().atan2(angle.cos()).rem_euclid(TAU) / TAU,
    },
    Probe {
        name: "asin",
        low: -1.0,
        high: 1.0,
        approximate: trig::asin,
        reference: f64::asin,
    },
    Probe {
        name: "acos",
        low: -1.0,
        high: 1.0,
        approximate: trig::acos,
        reference: f64::acos,
    },
    Probe {
        name: "acos_deg (as radians)",
        low: -1.0,
        high: 1.0,
        approximate: |a| trig::acos_deg(a).to_radians(),
        reference: f64::acos,
    },
];

/// Sample every approximation at `steps + 1` evenly spaced points of its domain
pub fn trig_accuracy(steps: usize) -> Vec<AccuracyRow> {
    let steps = steps.max(1);
    PROBES
        .iter()
        .map(|probe| {
            let mut row = AccuracyRow {
                name: probe.name,
                max_error: 0.0,
                worst_input: probe.low,
            };
            for step in 0..=steps {
                let t = step as f64 / steps as f64;
                let input = (probe.high - probe.low).mul_add(t, probe.low);
                let error = ((probe.approximate)(input) - (probe.reference)(input)).abs();
                if error > row.max_error {
                    row.max_error = error;
                    row.worst_input = input;
                }
            }
            row
        })
        .collect()
}
