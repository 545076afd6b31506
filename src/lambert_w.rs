//! Real-valued Lambert W function, both real branches.
//!
//! The principal branch W₀ short-circuits a handful of closed-form points,
//! expands in √(x + 1/e) near the branch point, and otherwise refines a
//! range-dependent initial guess with Halley's iteration. The W₋₁ branch
//! uses the direct analytical approximation of Barry (2000).

use crate::evaluate::polynomial;
use crate::{comparison_eps, consts, FloatScalar};

/// Series coefficients for W₀ near the branch point −1/e, in powers of
/// r = √(x + 1/e) (GSL's `lambert.c` series).
const W_NEAR_BRANCH: [f64; 12] = [
    -1.0,
    2.331643981597124203363536062168,
    -1.812187885639363490240191647568,
    1.936631114492359755363277457668,
    -2.353551201881614516821543561516,
    3.066858901050631912893148922704,
    -4.175335600258177138854984177460,
    5.858023729874774148815053846119,
    -8.401032217523977370984161688514,
    12.250753501314460424,
    -18.100697012472442755,
    27.029044799010561650,
];

/// Halley iteration cap.
const MAX_ITER: usize = 100;

/// Branch-selected Lambert W: the inverse of w·e^w.
///
/// `branch` within the comparison epsilon of 0 selects [`lambert_w0`], of
/// −1 selects [`lambert_wm1`]; any other branch id yields NaN, as does NaN
/// in either argument.
///
/// # Example
///
/// ```
/// use specfun::{consts, lambert_w};
///
/// assert_eq!(lambert_w(0.0_f64, 0.0), 0.0);
/// assert_eq!(lambert_w(-consts::FRAC_1_E, -1.0), -1.0);
/// assert!(lambert_w(1.0_f64, 2.0).is_nan());
/// ```
pub fn lambert_w<T: FloatScalar>(x: T, branch: T) -> T {
    if x.is_nan() || branch.is_nan() {
        return T::nan();
    }
    if branch.abs() <= comparison_eps::<T>() {
        return lambert_w0(x);
    }
    if (branch + T::one()).abs() <= comparison_eps::<T>() {
        return lambert_wm1(x);
    }
    T::nan()
}

/// Principal branch W₀ of the Lambert W function, defined for x ≥ −1/e.
///
/// Exact at the closed-form points 0, −1/e, 1, e and −ln√2; a series in
/// √(x + 1/e) within 1e-3 of the branch point; otherwise Halley's
/// iteration from a Padé-style (x < 1) or logarithmic (x ≥ 1) initial
/// guess. NaN below −1/e or if the iteration fails to converge.
///
/// # Example
///
/// ```
/// use specfun::{consts, lambert_w0};
///
/// assert_eq!(lambert_w0(1.0_f64), consts::OMEGA);
/// assert!((lambert_w0(2.0_f64) - 0.8526055020137255).abs() < 1e-12);
/// ```
pub fn lambert_w0<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let eps = comparison_eps::<T>();
    let e = T::from(core::f64::consts::E).unwrap();
    let exp_m1 = T::from(consts::FRAC_1_E).unwrap();
    let ln_sqrt_2 = T::from(consts::LN_SQRT_2).unwrap();

    if x.is_nan() {
        return x;
    }
    // closed-form points
    if x.abs() <= eps {
        return T::zero();
    }
    if (x + exp_m1).abs() <= eps {
        return -one;
    }
    if (x - one).abs() <= eps {
        return T::from(consts::OMEGA).unwrap();
    }
    if (x - e).abs() <= eps {
        return one;
    }
    if (x + ln_sqrt_2).abs() <= eps {
        return -two * ln_sqrt_2;
    }
    if x < -exp_m1 {
        return T::nan();
    }

    // branch-point series in sqrt(x + 1/e)
    let q = x + exp_m1;
    if q < T::from(1.0e-3).unwrap() {
        return polynomial(q.sqrt(), &W_NEAR_BRANCH);
    }

    let w = if x < one {
        let p = (two * e * q).sqrt();
        -one + p * (one + p * (T::from(-1.0 / 3.0).unwrap() + p * T::from(11.0 / 72.0).unwrap()))
    } else {
        let mut w = x.ln();
        if x > T::from(3.0).unwrap() {
            w = w - w.ln();
        }
        w
    };
    match halley_iteration(x, w) {
        Some(w) => w,
        None => T::nan(),
    }
}

/// Secondary branch W₋₁, defined for −1/e ≤ x < 0.
///
/// Direct analytical approximation after Barry (2000), "Analytical
/// approximations for real values of the Lambert W-function"; no
/// iterative refinement. NaN outside the domain, −1 at the branch point.
///
/// # Example
///
/// ```
/// use specfun::lambert_wm1;
///
/// let w = lambert_wm1(-0.1_f64);
/// // w·e^w = x, within the accuracy of the analytical approximation
/// assert!((w * w.exp() + 0.1).abs() < 1e-3);
/// ```
pub fn lambert_wm1<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let eps = comparison_eps::<T>();
    let exp_m1 = T::from(consts::FRAC_1_E).unwrap();

    if x.is_nan() {
        return x;
    }
    if x >= -eps {
        return T::nan();
    }
    if x < -exp_m1 {
        return T::nan();
    }
    if (x + exp_m1).abs() <= eps {
        return -one;
    }

    let m1 = T::from(0.3361).unwrap();
    let m2 = T::from(-0.0042).unwrap();
    let m3 = T::from(-0.0201).unwrap();
    let s = -one - (-x).ln();
    -one - s
        - (two / m1)
            * (one
                - one
                    / (one
                        + (m1 * (s / two).sqrt()) / (one + m2 * s * (m3 * s.sqrt()).exp())))
}

/// Halley's iteration on w·e^w − x, with the GSL step form and a stopping
/// tolerance scaled by the machine epsilon of the scalar type. Returns
/// None if the step has not shrunk below tolerance within the cap.
fn halley_iteration<T: FloatScalar>(x: T, w_initial: T) -> Option<T> {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let mut w = w_initial;

    for _ in 0..MAX_ITER {
        let e = w.exp();
        let p = w + one;
        let mut t = w * e - x;
        if w > T::zero() {
            // avoid overflow in the Halley denominator
            t = (t / p) / e;
        } else {
            t = t / (e * p - half * (p + one) * t / p);
        }
        w = w - t;
        let tol = T::epsilon() * w.abs().max(one / (p.abs() * e));
        if t.abs() < tol {
            return Some(w);
        }
    }
    None
}
