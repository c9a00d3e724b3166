//! Fast `f32` trigonometric approximations
//!
//! Same algorithms and error bounds as [`crate::math::trig`], evaluated in
//! single precision.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

const QUARTER_TURNS_PER_RADIAN: f32 = 0.636_619_8;
const QUARTER_TURNS_PER_DEGREE: f32 = 1.0 / 90.0;
const DEGREES_PER_RADIAN: f32 = 57.295_78;
const TURNS_PER_RADIAN: f32 = 1.0 / TAU;

// Input is measured in quarter turns
#[inline]
fn wave(quarter_turns: f32) -> f32 {
    let floor = (quarter_turns.floor() as i32) & -2;
    let x = quarter_turns - floor as f32;
    let x = x * (2.0 - x);
    x * (-0.225_f32).mul_add(x, -0.775) * ((floor & 2) - 1) as f32
}

#[inline]
fn atan_unit(a: f32) -> f32 {
    let s = a * a;
    let p = (-0.046_496_475_f32)
        .mul_add(s, 0.159_314_22)
        .mul_add(s, -0.327_622_76);
    (p * s).mul_add(a, a)
}

#[inline]
fn pade_asin(a: f32) -> f32 {
    let s = a * a;
    let numerator = s.mul_add(s.mul_add(-0.719_110_8, -0.141_514_17), 1.0);
    let denominator = s.mul_add(s.mul_add(-0.471_306_18, -0.439_110_4), 1.0);
    a * numerator / denominator
}

/// Approximate sine of an angle in radians
#[inline]
pub fn sin(radians: f32) -> f32 {
    wave(radians * QUARTER_TURNS_PER_RADIAN)
}

/// Approximate cosine of an angle in radians
#[inline]
pub fn cos(radians: f32) -> f32 {
    wave(radians.mul_add(QUARTER_TURNS_PER_RADIAN, 1.0))
}

/// Approximate sine of an angle in degrees
#[inline]
pub fn sin_deg(degrees: f32) -> f32 {
    wave(degrees * QUARTER_TURNS_PER_DEGREE)
}

/// Approximate cosine of an angle in degrees
#[inline]
pub fn cos_deg(degrees: f32) -> f32 {
    wave(degrees.mul_add(QUARTER_TURNS_PER_DEGREE, 1.0))
}

/// Approximate sine of an angle in turns, where 1.0 is a full circle
#[inline]
pub fn sin_turns(turns: f32) -> f32 {
    wave(turns * 4.0)
}

/// Approximate cosine of an angle in turns
#[inline]
pub fn cos_turns(turns: f32) -> f32 {
    wave(turns.mul_add(4.0, 1.0))
}

/// Approximate angle of the point `(x, y)` in radians, in (-π, π]
///
/// Returns 0 when `y` is zero and `x` is non-negative, including the origin.
pub fn atan2(y: f32, x: f32) -> f32 {
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
pub fn atan2_deg(y: f32, x: f32) -> f32 {
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
pub fn atan2_deg360(y: f32, x: f32) -> f32 {
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
pub fn atan2_turns(y: f32, x: f32) -> f32 {
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
pub fn asin(a: f32) -> f32 {
    pade_asin(a)
}

/// Approximate arccosine in radians, in [0, π]
#[inline]
pub fn acos(a: f32) -> f32 {
    FRAC_PI_2 - pade_asin(a)
}

/// Approximate arcsine in degrees
#[inline]
pub fn asin_deg(a: f32) -> f32 {
    pade_asin(a) * DEGREES_PER_RADIAN
}

/// Approximate arccosine in degrees
#[inline]
pub fn acos_deg(a: f32) -> f32 {
    pade_asin(a).mul_add(-DEGREES_PER_RADIAN, 90.0)
}

/// Approximate arcsine in turns, in [-0.25, 0.25]
#[inline]
pub fn asin_turns(a: f32) -> f32 {
    pade_asin(a) * TURNS_PER_RADIAN
}

/// Approximate arccosine in turns, in [0, 0.5]
#[inline]
pub fn acos_turns(a: f32) -> f32 {
    pade_asin(a).mul_add(-TURNS_PER_RADIAN, 0.25)
}
