//! Mathematical constants shared across the special functions.
//!
//! π, e, τ and friends come from [`core::f64::consts`]; this module only
//! carries the constants the standard library does not.

/// Euler–Mascheroni constant γ.
pub const EULER_MASCHERONI: f64 = 0.57721566490153286060651209008240243104215933593992;

/// Logarithmic integral at 2, li(2).
pub const LI2: f64 = 1.045163780117492784844588889194613136522615578151;

/// Omega constant Ω = W₀(1), the solution of Ω·e^Ω = 1.
pub const OMEGA: f64 = 0.5671432904097838729999686622103555497538;

/// 1/e.
pub const FRAC_1_E: f64 = 0.36787944117144232159552377016146086744581113103177;

/// ln √2.
pub const LN_SQRT_2: f64 = 0.34657359027997265470861606072908828403775006718013;

/// ln π.
pub const LN_PI: f64 = 1.14472988584940017414342735135305871164729481291531;
