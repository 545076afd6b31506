use core::fmt::Debug;
use num_traits::Float;

/// Trait for scalars the special functions are evaluated over.
///
/// Blanket-implemented for all types satisfying the bounds — in practice
/// `f32` and `f64`. Coefficient tables are stored as `f64` and converted
/// into the target scalar at evaluation time, so `f32` evaluation reuses
/// the double-precision approximations.
pub trait FloatScalar: Copy + PartialEq + Debug + Float {}

impl<T: Copy + PartialEq + Debug + Float> FloatScalar for T {}
