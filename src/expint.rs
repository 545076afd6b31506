//! Exponential integral Ei(x) and the logarithmic integrals li(x), Li(x).
//!
//! Ei is evaluated by one of three kernels selected by range: a continued
//! fraction for x < −5 and x ≥ 50, a power series on [−5, 6.8), and an
//! argument-addition series on [6.8, 50) anchored on precomputed Ei values
//! at the integer points 7..=50.

use crate::consts;
use crate::FloatScalar;

/// Precomputed Ei(k) for k = 7..=50, anchors for the argument-addition
/// series. EI[k − 7] = Ei(k).
const EI: [f64; 44] = [
    1.915047433355013959531e2,
    4.403798995348382689974e2,
    1.037878290717089587658e3,
    2.492228976241877759138e3,
    6.071406374098611507965e3,
    1.495953266639752885229e4,
    3.719768849068903560439e4,
    9.319251363396537129882e4,
    2.349558524907683035782e5,
    5.955609986708370018502e5,
    1.516637894042516884433e6,
    3.877904330597443502996e6,
    9.950907251046844760026e6,
    2.561565266405658882048e7,
    6.612718635548492136250e7,
    1.711446713003636684975e8,
    4.439663698302712208698e8,
    1.154115391849182948287e9,
    3.005950906525548689841e9,
    7.842940991898186370453e9,
    2.049649711988081236484e10,
    5.364511859231469415605e10,
    1.405991957584069047340e11,
    3.689732094072741970640e11,
    9.694555759683939661662e11,
    2.550043566357786926147e12,
    6.714640184076497558707e12,
    1.769803724411626854310e13,
    4.669055014466159544500e13,
    1.232852079912097685431e14,
    3.257988998672263996790e14,
    8.616388199965786544948e14,
    2.280446200301902595341e15,
    6.039718263611241578359e15,
    1.600664914324504111070e16,
    4.244796092136850759368e16,
    1.126348290166966760275e17,
    2.990444718632336675058e17,
    7.943916035704453771510e17,
    2.111342388647824195000e18,
    5.614329680810343111535e18,
    1.493630213112993142255e19,
    3.975442747903744836007e19,
    1.058563689713169096306e20,
];

/// Iteration cap for the Ei kernels. The observed worst case near the
/// range boundaries stays well under 100 iterations.
const MAX_ITER: usize = 1000;

/// Relative convergence tolerance: 10 machine epsilons.
#[inline]
fn ei_epsilon<T: FloatScalar>() -> T {
    T::from(10.0).unwrap() * T::epsilon()
}

/// Exponential integral Ei(x).
///
/// Dispatches by range: continued fraction for x < −5 and x ≥ 50, power
/// series on [−5, 6.8), argument-addition series on [6.8, 50). At the
/// logarithmic pole x = 0 the most negative finite value is returned as a
/// pole marker rather than −∞. Returns NaN for NaN input or if a kernel
/// fails to converge within its iteration cap.
///
/// # Example
///
/// ```
/// use specfun::ei;
///
/// assert!((ei(1.0_f64) - 1.8951178163559368).abs() < 1e-12);
///
/// // pole marker at x = 0
/// assert_eq!(ei(0.0_f64), -f64::MAX);
/// ```
pub fn ei<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x == T::zero() {
        return -T::max_value();
    }
    let result = if x < T::from(-5.0).unwrap() {
        continued_fraction_ei(x)
    } else if x < T::from(6.8).unwrap() {
        power_series_ei(x)
    } else if x < T::from(50.0).unwrap() {
        argument_addition_series_ei(x)
    } else {
        continued_fraction_ei(x)
    };
    result.unwrap_or_else(T::nan)
}

/// Logarithmic integral li(x) = Ei(ln x).
///
/// NaN for x < 0, 0 at x = 0, and the exact [`consts::LI2`] constant at
/// x = 2 (bypassing the rounding of ln 2). li(1) inherits the Ei pole
/// marker.
///
/// # Example
///
/// ```
/// use specfun::{consts, li};
///
/// assert_eq!(li(2.0_f64), consts::LI2);
/// assert!((li(10.0_f64) - 6.165599504787297).abs() < 1e-10);
/// ```
pub fn li<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x < T::zero() {
        return T::nan();
    }
    if x == T::zero() {
        return T::zero();
    }
    if x == T::from(2.0).unwrap() {
        return T::from(consts::LI2).unwrap();
    }
    ei(x.ln())
}

/// Offset logarithmic integral Li(x) = li(x) − li(2).
///
/// NaN for x < 0 and −li(2) at x = 0.
pub fn li_offset<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x < T::zero() {
        return T::nan();
    }
    if x == T::zero() {
        return -T::from(consts::LI2).unwrap();
    }
    li(x) - T::from(consts::LI2).unwrap()
}

/// Continued-fraction expansion of Ei, convergent for large |x|.
///
/// Evaluates successive convergents Aⱼ/Bⱼ, renormalizing by Bⱼ₊₁ whenever
/// it grows past 1 to keep the recurrence in range.
fn continued_fraction_ei<T: FloatScalar>(x: T) -> Option<T> {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let eps = ei_epsilon::<T>();

    let mut am1 = one;
    let mut a0 = T::zero();
    let mut bm1 = T::zero();
    let mut b0 = one;
    let mut a = x.exp();
    let mut b = -x + one;
    let mut ap1 = b * a0 + a * am1;
    let mut bp1 = b * b0 + a * bm1;

    let mut j = 1usize;
    while (ap1 * b0 - a0 * bp1).abs() > eps * (a0 * bp1).abs() {
        if j > MAX_ITER {
            return None;
        }
        if bp1.abs() > one {
            am1 = a0 / bp1;
            a0 = ap1 / bp1;
            bm1 = b0 / bp1;
            b0 = one;
        } else {
            am1 = a0;
            a0 = ap1;
            bm1 = b0;
            b0 = bp1;
        }
        let jf = T::from(j).unwrap();
        a = -(jf * jf);
        b = b + two;
        ap1 = b * a0 + a * am1;
        bp1 = b * b0 + a * bm1;
        j += 1;
    }
    Some(-ap1 / bp1)
}

/// Power series Ei(x) = γ + ln|x| − e^x · Σ, for moderate arguments.
fn power_series_ei<T: FloatScalar>(x: T) -> Option<T> {
    let one = T::one();
    let eps = ei_epsilon::<T>();
    let g = T::from(consts::EULER_MASCHERONI).unwrap();

    let mut xn = -x;
    let mut sn = -x;
    let mut sm1 = T::zero();
    let mut hsum = one;
    let mut y = one;
    let mut fact = one;

    let mut iter = 0usize;
    while (sn - sm1).abs() > eps * sm1.abs() {
        if iter > MAX_ITER {
            return None;
        }
        sm1 = sn;
        y = y + one;
        xn = xn * (-x);
        fact = fact * y;
        hsum = hsum + one / y;
        sn = sn + hsum * xn / fact;
        iter += 1;
    }
    Some(g + x.abs().ln() - x.exp() * sn)
}

/// Argument-addition series: anchor at the nearest integer point k with
/// the tabulated Ei(k), then refine with a local series in the fractional
/// offset dx = x − k.
fn argument_addition_series_ei<T: FloatScalar>(x: T) -> Option<T> {
    let one = T::one();
    let eps = ei_epsilon::<T>();

    // k in 7..=50 for x in [6.8, 50)
    let k = num_traits::cast::<T, usize>(x + T::from(0.5).unwrap()).unwrap();
    let xx = T::from(k).unwrap();
    let dx = x - xx;
    let mut xxj = xx;
    let edx = dx.exp();
    let mut sm = one;
    let mut sn = (edx - one) / xxj;
    let mut term = T::max_value();
    let mut fact = one;
    let mut dxj = one;

    let mut j = 0usize;
    while term.abs() > eps * sn.abs() {
        if j > MAX_ITER {
            return None;
        }
        j += 1;
        fact = fact * T::from(j).unwrap();
        xxj = xxj * xx;
        dxj = dxj * (-dx);
        sm = sm + dxj / fact;
        term = (fact * (edx * sm - one)) / xxj;
        sn = sn + term;
    }
    Some(T::from(EI[k - 7]).unwrap() + sn * xx.exp())
}
