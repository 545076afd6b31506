//! Gamma, log-gamma and sign-of-gamma.
//!
//! Near-integer arguments route through an exact integer kernel; everything
//! else goes through the Lanczos approximation (g = 7, 9 coefficients) with
//! the reflection formula below 0.5. Log-gamma follows the Cephes scheme:
//! reduction into [2,3) plus a rational correction below 13, a Stirling
//! asymptotic series above.

use crate::evaluate::{p1evl, polevl};
use crate::{comparison_eps, consts, factorial, is_integer, FloatScalar};

/// Lanczos parameter g.
const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients (g = 7, n = 9).
/// Coefficients from Paul Godfrey / Boost / CPython.
const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Factorial lookup table for small positive integers: FACTORIAL[n] = n!
/// Valid for n = 0..=20 (20! < 2^64, fits in f64 exactly up to 18!).
const FACTORIAL: [f64; 21] = [
    1.0,
    1.0,
    2.0,
    6.0,
    24.0,
    120.0,
    720.0,
    5040.0,
    40320.0,
    362880.0,
    3628800.0,
    39916800.0,
    479001600.0,
    6227020800.0,
    87178291200.0,
    1307674368000.0,
    20922789888000.0,
    355687428096000.0,
    6402373705728000.0,
    121645100408832000.0,
    2432902008176640000.0,
];

/// Cephes log-gamma coefficient tables, descending power order.
/// A: Stirling correction on 1/x²; B/C: rational correction on [2,3).
const LOG_GAMMA_A: [f64; 5] = [
    8.11614167470508450300e-4,
    -5.95061904284301438324e-4,
    7.93650340457716943945e-4,
    -2.77777777730099687205e-3,
    8.33333333333331927722e-2,
];

const LOG_GAMMA_B: [f64; 6] = [
    -1.37825152569120859100e3,
    -3.88016315134637840924e4,
    -3.31612992738871184744e5,
    -1.16237097492762307383e6,
    -1.72173700820839662146e6,
    -8.53555664245765465627e5,
];

/// Denominator for the [2,3) correction, implicit leading 1 (see `p1evl`).
const LOG_GAMMA_C: [f64; 6] = [
    -3.51815701436523470549e2,
    -1.70642106651881159223e4,
    -2.20528590553854454839e5,
    -1.13933444367982507207e6,
    -2.53252307177582951285e6,
    -2.01889141433532773231e6,
];

/// Gamma function Γ(x).
///
/// Arguments within the comparison epsilon of an integer route to the
/// exact integer kernel; at non-positive integers that kernel returns the
/// limit-consistent finite values this library uses throughout (Γ(0) ↦ γ,
/// and a signed downward recurrence below zero) rather than signaling the
/// poles. Non-integer arguments use the Lanczos approximation with
/// reflection for x < 0.5. Γ(+∞) = +∞, Γ(−∞) = NaN, NaN propagates.
///
/// # Example
///
/// ```
/// use specfun::gamma;
///
/// // Γ(n) = (n-1)!
/// assert_eq!(gamma(5.0_f64), 24.0);
///
/// // Γ(0.5) = √π
/// let sqrt_pi = core::f64::consts::PI.sqrt();
/// assert!((gamma(0.5_f64) - sqrt_pi).abs() < 1e-14);
/// ```
pub fn gamma<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return if x > T::zero() { x } else { T::nan() };
    }
    let xabs = x.abs();
    let xint = xabs.round();
    if (xabs - xint).abs() <= comparison_eps::<T>() {
        if let Some(n) = num_traits::cast::<T, i64>(xint) {
            let n = if x < T::zero() { -n } else { n };
            return gamma_int(n);
        }
    }
    lanczos_gamma(x)
}

/// Gamma at integer points.
///
/// Γ(n) = (n−1)! for n ≥ 1. At non-positive integers the true function has
/// simple poles; this kernel instead returns the finite limit-consistent
/// convention the rest of the library relies on: γ at n = 0 and the signed
/// downward recurrence
/// Γ(n) = sign/(r·r!) − Γ(n+1)/r with r = −n below zero.
fn gamma_int<T: FloatScalar>(n: i64) -> T {
    if n >= 1 {
        let n = n as u64;
        if n <= 21 {
            // Γ(n) = (n-1)!
            return T::from(FACTORIAL[(n - 1) as usize]).unwrap();
        }
        return factorial::<T>(n - 1);
    }
    // n = 0 and the negative integers: finite pole-limit convention,
    // built iteratively from Γ(0) ↦ γ
    let one = T::one();
    let mut g = T::from(consts::EULER_MASCHERONI).unwrap();
    let mut factr = one;
    for m in 1..=(-n) {
        let r = T::from(m).unwrap();
        factr = factr * r;
        let sign = if m % 2 == 0 { one } else { -one };
        g = sign / (r * factr) - g / r;
    }
    g
}

/// Lanczos approximation for non-integer arguments, with reflection
/// below 0.5.
fn lanczos_gamma<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let pi = T::from(core::f64::consts::PI).unwrap();

    if x < half {
        // Γ(x)·Γ(1−x) = π/sin(πx)
        return pi / ((pi * x).sin() * lanczos_gamma(one - x));
    }

    let z = x - one;
    let g = T::from(LANCZOS_G).unwrap();
    let t = z + g + half;
    let sqrt_2pi = T::from(core::f64::consts::TAU.sqrt()).unwrap();

    sqrt_2pi * t.powf(z + half) * (-t).exp() * lanczos_sum(z)
}

/// Evaluate the Lanczos series Ag(z) = c0 + c1/(z+1) + c2/(z+2) + …
/// by direct summation.
#[inline]
fn lanczos_sum<T: FloatScalar>(z: T) -> T {
    let mut sum = T::from(LANCZOS_COEFFS[0]).unwrap();
    for (i, &c) in LANCZOS_COEFFS[1..].iter().enumerate() {
        sum = sum + T::from(c).unwrap() / (z + T::from(i + 1).unwrap());
    }
    sum
}

/// Natural logarithm of the absolute gamma function, ln |Γ(x)|.
///
/// Integer arguments route through ln |Γ| of the integer kernel (so the
/// finite pole-limit convention of [`gamma`] carries over). Otherwise:
/// the log-reflection identity below −34, factorial-style reduction into
/// [2,3) plus a rational correction below 13, and a Stirling asymptotic
/// series above 13 (short-circuited for very large arguments).
///
/// # Example
///
/// ```
/// use specfun::lgamma;
///
/// // ln Γ(4) = ln 6
/// assert!((lgamma(4.0_f64) - 6.0_f64.ln()).abs() < 1e-14);
///
/// // ln Γ(100) — no overflow
/// assert!((lgamma(100.0_f64) - 359.1342053695754).abs() < 1e-8);
/// ```
pub fn lgamma<T: FloatScalar>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();

    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return if x > zero { x } else { T::nan() };
    }
    if is_integer(x) {
        if let Some(n) = num_traits::cast::<T, i64>(x.round()) {
            return gamma_int::<T>(n).abs().ln();
        }
    }

    if x < T::from(-34.0).unwrap() {
        // ln|Γ(x)| = ln π − ln|q·sin(πq̂)| − ln Γ(q), q = −x
        let q = -x;
        let w = lgamma(q);
        let mut p = q.floor();
        if p == q {
            return T::nan();
        }
        let mut z = q - p;
        if z > T::from(0.5).unwrap() {
            p = p + one;
            z = p - q;
        }
        z = q * (T::from(core::f64::consts::PI).unwrap() * z).sin();
        if z == zero {
            return T::nan();
        }
        return T::from(consts::LN_PI).unwrap() - z.ln() - w;
    }

    if x < T::from(13.0).unwrap() {
        // reduce into [2,3) accumulating the factorial factor in z
        let mut z = one;
        let mut xx = x;
        while xx >= T::from(3.0).unwrap() {
            xx = xx - one;
            z = z * xx;
        }
        while xx < two {
            if xx == zero {
                return T::nan();
            }
            z = z / xx;
            xx = xx + one;
        }
        if z < zero {
            z = -z;
        }
        if xx == two {
            return z.ln();
        }
        xx = xx - two;
        let p = xx * polevl(xx, &LOG_GAMMA_B) / p1evl(xx, &LOG_GAMMA_C);
        return z.ln() + p;
    }

    // Stirling asymptotic region
    if x > T::from(2.556348e305).unwrap() {
        return T::nan();
    }
    let half = T::from(0.5).unwrap();
    let mut q = (x - half) * x.ln() - x + T::from(0.91893853320467274178).unwrap();
    if x > T::from(1.0e8).unwrap() {
        return q;
    }
    let p = one / (x * x);
    if x >= T::from(1000.0).unwrap() {
        q = q + ((T::from(7.9365079365079365079365e-4).unwrap() * p
            - T::from(2.7777777777777777777778e-3).unwrap())
            * p
            + T::from(0.0833333333333333333333).unwrap())
            / x;
    } else {
        q = q + polevl(p, &LOG_GAMMA_A) / x;
    }
    q
}

/// Sign of Γ(x) without the magnitude.
///
/// 1 for x > 0 (and +∞); at negative integers the sign of the integer
/// kernel's finite convention; for other negative x the sign alternates
/// with the parity of ⌊−x⌋. NaN at NaN and −∞.
///
/// # Example
///
/// ```
/// use specfun::sgn_gamma;
///
/// assert_eq!(sgn_gamma(2.5_f64), 1.0);
/// // Γ(-2.5) < 0, Γ(-1.5) > 0
/// assert_eq!(sgn_gamma(-2.5_f64), -1.0);
/// assert_eq!(sgn_gamma(-1.5_f64), 1.0);
/// ```
pub fn sgn_gamma<T: FloatScalar>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();

    if x.is_nan() {
        return x;
    }
    if x == T::infinity() {
        return one;
    }
    if x == T::neg_infinity() {
        return T::nan();
    }
    if x > zero {
        return one;
    }
    if is_integer(x) {
        if let Some(n) = num_traits::cast::<T, i64>(x.round()) {
            let g = gamma_int::<T>(n);
            return if g > zero {
                one
            } else if g < zero {
                -one
            } else {
                zero
            };
        }
    }
    let fx = (-x).floor();
    if (fx % T::from(2.0).unwrap()).floor() == zero {
        -one
    } else {
        one
    }
}
