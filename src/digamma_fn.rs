//! Digamma (psi) function via recurrence and asymptotic expansion.

use crate::{is_integer, FloatScalar};

/// Shift threshold: the recurrence moves x up here before the asymptotic
/// tail is applied.
const C: f64 = 12.0;

/// ψ near zero: ψ(x) ≈ −γ − 1/x + (π²/6)·x.
const D1: f64 = -0.57721566490153286;
const D2: f64 = 1.6449340668482264365;

/// Bernoulli-derived tail coefficients B_{2k}/(2k) for the asymptotic
/// expansion ψ(x) ≈ ln x − 1/(2x) − Σ s_k / x^{2k}.
const S3: f64 = 1.0 / 12.0;
const S4: f64 = 1.0 / 120.0;
const S5: f64 = 1.0 / 252.0;
const S6: f64 = 1.0 / 240.0;
const S7: f64 = 1.0 / 132.0;

/// Digamma function ψ(x) = d/dx ln Γ(x).
///
/// Reflection ψ(x) = ψ(1−x) + π/tan(−πx) for x < 0, a near-zero expansion
/// for 0 < x ≤ 1e-6, otherwise the recurrence ψ(x+1) = ψ(x) + 1/x shifts
/// the argument up to 12 before a 5-term asymptotic tail in 1/x².
/// NaN at the non-positive integer poles, at −∞ and for NaN input.
///
/// # Example
///
/// ```
/// use specfun::digamma;
///
/// // ψ(1) = −γ
/// assert!((digamma(1.0_f64) + 0.5772156649015329).abs() < 1e-12);
/// ```
pub fn digamma<T: FloatScalar>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();

    if x.is_nan() {
        return x;
    }
    if x == T::neg_infinity() {
        return T::nan();
    }
    if x <= zero && is_integer(x) {
        return T::nan();
    }

    // Reflection for negative arguments
    if x < zero {
        let pi = T::from(core::f64::consts::PI).unwrap();
        return digamma(one - x) + pi / (-pi * x).tan();
    }

    if x <= T::from(1e-6).unwrap() {
        return T::from(D1).unwrap() - one / x + T::from(D2).unwrap() * x;
    }

    let mut result = zero;
    let mut xx = x;
    let c = T::from(C).unwrap();
    while xx < c {
        result = result - one / xx;
        xx = xx + one;
    }

    let half = T::from(0.5).unwrap();
    let mut r = one / xx;
    result = result + xx.ln() - half * r;
    r = r * r;
    result = result
        - r * (T::from(S3).unwrap()
            - r * (T::from(S4).unwrap()
                - r * (T::from(S5).unwrap()
                    - r * (T::from(S6).unwrap() - r * T::from(S7).unwrap()))));

    result
}
