use num_traits::Float;

/// Error function approximation using Abramowitz and Stegun method
///
/// Accurate to about 1.5e-7, which is plenty for checking the inverse
/// normal approximation against its forward counterpart.
pub fn erf(x: f64) -> f64 {
    let a1 = 0.254_829_592_f64;
    let a2 = -0.284_496_736_f64;
    let a3 = 1.421_413_741_f64;
    let a4 = -1.453_152_027_f64;
    let a5 = 1.061_405_429_f64;
    let p = 0.327_591_1_f64;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / p.mul_add(x, 1.0);
    let y = (((((a5.mul_add(t, a4)).mul_add(t, a3)).mul_add(t, a2)).mul_add(t, a1)) * t)
        .mul_add(-(-x * x).exp(), 1.0);

    sign * y
}

/// Cumulative distribution function of the standard normal distribution
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

// Acklam's rational approximation, relative error about 1.15e-9
const CENTRAL_NUMERATOR: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const CENTRAL_DENOMINATOR: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const TAIL_NUMERATOR: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const TAIL_DENOMINATOR: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];
const TAIL_CUTOFF: f64 = 0.024_25;

fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .fold(0.0, |accumulator, &c| accumulator.mul_add(x, c))
}

// Lower-tail branch, for p in (0, TAIL_CUTOFF)
fn probit_tail(p: f64) -> f64 {
    let q = (-2.0 * p.ln()).sqrt();
    horner(&TAIL_NUMERATOR, q) / horner(&TAIL_DENOMINATOR, q).mul_add(q, 1.0)
}

/// Inverse of the standard normal CDF
///
/// Odd-symmetric around 0.5: `probit(1.0 - p) == -probit(p)` whenever
/// `1.0 - p` is exactly representable. Saturates to negative infinity at or
/// below 0 and to positive infinity at or above 1; NaN stays NaN.
pub fn probit(p: f64) -> f64 {
    if p <= 0.0 {
        f64::NEG_INFINITY
    } else if p >= 1.0 {
        f64::INFINITY
    } else if p < TAIL_CUTOFF {
        probit_tail(p)
    } else if p > 1.0 - TAIL_CUTOFF {
        -probit_tail(1.0 - p)
    } else {
        let q = p - 0.5;
        let r = q * q;
        horner(&CENTRAL_NUMERATOR, r) * q / horner(&CENTRAL_DENOMINATOR, r).mul_add(r, 1.0)
    }
}

/// Geometric mean of a sequence of positive values
///
/// Returns NaN for an empty sequence.
pub fn geometric_mean<F, I>(values: I) -> F
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    let (log_sum, count) = values
        .into_iter()
        .fold((F::zero(), F::zero()), |(sum, count), value| {
            (sum + value.ln(), count + F::one())
        });
    (log_sum / count).exp()
}
