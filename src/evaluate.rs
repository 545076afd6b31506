//! Horner-scheme polynomial evaluation over `f64` coefficient tables.
//!
//! Two coefficient conventions coexist in this crate, inherited from the
//! approximation sources: the error-function tables are stored in ascending
//! power order ([`polynomial`]), the log-gamma tables in descending Cephes
//! order ([`polevl`] / [`p1evl`]). Table ordering must match the evaluator
//! that consumes it; a transposed table corrupts results silently.

use crate::FloatScalar;

/// Evaluate `c[0] + c[1]·z + c[2]·z² + …` (ascending power order).
#[inline]
pub(crate) fn polynomial<T: FloatScalar>(z: T, coeffs: &[f64]) -> T {
    let mut sum = T::from(coeffs[coeffs.len() - 1]).unwrap();
    for &c in coeffs[..coeffs.len() - 1].iter().rev() {
        sum = sum * z + T::from(c).unwrap();
    }
    sum
}

/// Evaluate `c[0]·xⁿ + c[1]·xⁿ⁻¹ + … + c[n]` (descending power order).
#[inline]
pub(crate) fn polevl<T: FloatScalar>(x: T, coeffs: &[f64]) -> T {
    let mut ans = T::from(coeffs[0]).unwrap();
    for &c in &coeffs[1..] {
        ans = ans * x + T::from(c).unwrap();
    }
    ans
}

/// Like [`polevl`] with an implicit leading coefficient of 1:
/// `xⁿ + c[0]·xⁿ⁻¹ + … + c[n−1]`.
#[inline]
pub(crate) fn p1evl<T: FloatScalar>(x: T, coeffs: &[f64]) -> T {
    let mut ans = x + T::from(coeffs[0]).unwrap();
    for &c in &coeffs[1..] {
        ans = ans * x + T::from(c).unwrap();
    }
    ans
}
