//! Fast `f64` trigonometric approximations
//!
//! Sine and cosine fold the input into half-turn segments and evaluate a
//! two-stage parabola; the absolute error stays below 0.0011. `atan2` uses a
//! minimax odd polynomial over the ratio of the smaller to the larger
//! magnitude (error below 0.0003 radians). `asin` and `acos` use a Padé-form
//! rational approximation with error below 0.025 radians, worst near ±1.
//!
//! None of these validate their input. Non-finite or out-of-domain arguments
//! give unspecified results rather than errors.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

const QUARTER_TURNS_PER_RADIAN: f64 = 0.636_619_772_367_581_4;
const QUARTER_TURNS_PER_DEGREE: f64 = 1.0 / 90.0;
const DEGREES_PER_RADIAN: f64 = 57.295_779_513_082_32;
const TURNS_PER_RADIAN: f64 = 1.0 / TAU;

// Input is measured in quarter turns
#[inline]
fn wave(quarter_turns: f64) -> f64 {
    let floor = (quarter_turns.floor() as i64) & -2;
    let x = quarter_turns - floor as f64;
    let x = x * (2.0 - x);
    x * (-0.225_f64).mul_add(x, -0.775) * ((floor & 2) - 1) as f64
}

#[inline]
fn atan_unit(a: f64) -> f64 {
    let s = a * a;
    let p = (-0.046_496_474_9_f64)
        .mul_add(s, 0.159_314_22)
        .mul_add(s, -0.327_622_764);
    (p * s).mul_add(a, a)
}

#[inline]
fn pade_asin(a: f64) -> f64 {
    let s = a * a;
    let numerator = s.mul_add(s.mul_add(-0.719_110_791_477_959_4, -0.141_514_171_442_891_43), 1.0);
    let denominator = s.mul_add(s.mul_add(-0.471_306_172_023_844_5, -0.439_110_389_941_411_1), 1.0);
    a * numerator / denominator
}

/// Approximate sine of an angle in radians
#[inline]
pub fn sin(radians: f64) -> f64 {
    wave(radians * QUARTER_TURNS_PER_RADIAN)
}

/// Approximate cosine of an angle in radians
#[inline]
pub fn cos(radians: f64) -> f64 {
    wave(radians.mul_add(QUARTER_TURNS_PER_RADIAN, 1.0))
}

/// Approximate sine of an angle in degrees
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    wave(degrees * QUARTER_TURNS_PER_DEGREE)
}

/// Approximate cosine of an angle in degrees
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    wave(degrees.mul_add(QUARTER_TURNS_PER_DEGREE, 1.0))
}

/// Approximate sine of an angle in turns, where 1.0 is a full circle
#[inline]
pub fn sin_turns(turns: f64) -> f64 {
    wave(turns * 4.0)
}

/// Approximate cosine of an angle in turns
#[inline]
pub fn cos_turns(turns: f64) -> f64 {
    wave(turns.mul_add(4.0, 1.0))
}

/// Approximate angle of the point `(x, y)` in radians, in (-π, π]
///
/// Returns 0 when `y` is zero and `x` is non-negative, including the origin.
pub fn atan2(y: f64, x: f64) -> f64 {
    if y == 0.0 && x >= 0.0 {
        return 0.0;
    }
    let ax = x.abs();
    let ay = y.abs();
    let r = if ax < ay {
        FRAC_PI_2 - atan_unit(ax / ay)
    } else {
        atan_unit(ay / ax)
    };
    if x < 0.0 {
        if y < 0.0 { r - PI } else { PI - r }
    } else if y < 0.0 {
        -r
    } else {
        r
    }
}

/// Approximate angle of `(x, y)` in degrees, in (-180, 180]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    if y == 0.0 && x >= 0.0 {
        return 0.0;
    }
    let ax = x.abs();
    let ay = y.abs();
    let r = if ax < ay {
        atan_unit(ax / ay).mul_add(-DEGREES_PER_RADIAN, 90.0)
    } else {
        atan_unit(ay / ax) * DEGREES_PER_RADIAN
    };
    if x < 0.0 {
        if y < 0.0 { r - 180.0 } else { 180.0 - r }
    } else if y < 0.0 {
        -r
    } else {
        r
    }
}

/// Approximate angle of `(x, y)` in degrees, in [0, 360)
pub fn atan2_deg360(y: f64, x: f64) -> f64 {
    if y == 0.0 && x >= 0.0 {
        return 0.0;
    }
    let ax = x.abs();
    let ay = y.abs();
    let r = if ax < ay {
        atan_unit(ax / ay).mul_add(-DEGREES_PER_RADIAN, 90.0)
    } else {
        atan_unit(ay / ax) * DEGREES_PER_RADIAN
    };
    if x < 0.0 {
        if y < 0.0 { 180.0 + r } else { 180.0 - r }
    } else if y < 0.0 {
        // a vanishing r must not round up to a full turn
        (360.0 - r) % 360.0
    } else {
        r
    }
}

/// Approximate angle of `(x, y)` in turns, in [0, 1)
///
/// `atan2_turns(0.0, x)` is exactly 0.0 for any non-negative `x`.
pub fn atan2_turns(y: f64, x: f64) -> f64 {
    if y == 0.0 && x >= 0.0 {
        return 0.0;
    }
    let ax = x.abs();
    let ay = y.abs();
    let r = if ax < ay {
        atan_unit(ax / ay).mul_add(-TURNS_PER_RADIAN, 0.25)
    } else {
        atan_unit(ay / ax) * TURNS_PER_RADIAN
    };
    if x < 0.0 {
        if y < 0.0 { 0.5 + r } else { 0.5 - r }
    } else if y < 0.0 {
        (1.0 - r) % 1.0
    } else {
        r
    }
}

/// Approximate arcsine in radians, for inputs in [-1, 1]
#[inline]
pub fn asin(a: f64) -> f64 {
    pade_asin(a)
}

/// Approximate arccosine in radians, in [0, π]
#[inline]
pub fn acos(a: f64) -> f64 {
    FRAC_PI_2 - pade_asin(a)
}

/// Approximate arcsine in degrees
#[inline]
pub fn asin_deg(a: f64) -> f64 {
    pade_asin(a) * DEGREES_PER_RADIAN
}

/// Approximate arccosine in degrees
#[inline]
pub fn acos_deg(a: f64) -> f64 {
    pade_asin(a).mul_add(-DEGREES_PER_RADIAN, 90.0)
}

/// Approximate arcsine in turns, in [-0.25, 0.25]
#[inline]
pub fn asin_turns(a: f64) -> f64 {
    pade_asin(a) * TURNS_PER_RADIAN
}

/// Approximate arccosine in turns, in [0, 0.5]
#[inline]
pub fn acos_turns(a: f64) -> f64 {
    pade_asin(a).mul_add(-TURNS_PER_RADIAN, 0.25)
}
