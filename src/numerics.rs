//! Shared numeric utilities
//!
//! Small helpers used across the physics and simulator layers:
//!
//! - Unit conversions between the operator-facing units (bar, °C, minutes)
//!   and the SI units used internally (Pa, K, seconds)
//! - A closed-form solver for monic cubic polynomials with real coefficients
//!
//! # Unit Convention
//!
//! Every function in this crate computes in SI units. Conversions happen
//! exactly once, at the boundary where operator inputs enter a calculation.

// =================================================================================================
// Unit Conversions
// =================================================================================================

/// Convert a temperature from degrees Celsius to Kelvin.
#[inline]
pub fn celsius_to_kelvin(temperature_celsius: f64) -> f64 {
    temperature_celsius + 273.15
}

/// Convert a pressure from bar to Pascal.
#[inline]
pub fn bar_to_pascal(pressure_bar: f64) -> f64 {
    pressure_bar * 1.0e5
}

/// Convert a duration from minutes to seconds.
#[inline]
pub fn minutes_to_seconds(minutes: f64) -> f64 {
    minutes * 60.0
}

// =================================================================================================
// Cubic Root Solver
// =================================================================================================

/// Discriminant tolerance below which a cubic is treated as having repeated
/// real roots.
///
/// This threshold plays the role of an imaginary-part cut: a root pair whose
/// imaginary part would fall below ~1e-10 is collapsed onto the real axis
/// instead of being discarded.
pub const DISCRIMINANT_TOLERANCE: f64 = 1.0e-10;

/// Real roots of the monic cubic `x³ + c2·x² + c1·x + c0 = 0`.
///
/// Uses the closed-form resolution of the depressed cubic:
///
/// - Positive discriminant: one real root (Cardano)
/// - Negative discriminant: three distinct real roots (trigonometric method)
/// - Near-zero discriminant: repeated real roots
///
/// The returned vector contains one or three entries in no particular order.
/// A cubic with real coefficients always has at least one real root, so the
/// result is never empty for finite inputs.
///
/// # Example
///
/// ```rust
/// use sfe_rs::numerics::cubic_real_roots;
///
/// // (x - 1)(x - 2)(x - 3) = x³ - 6x² + 11x - 6
/// let mut roots = cubic_real_roots(-6.0, 11.0, -6.0);
/// roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
/// assert!((roots[0] - 1.0).abs() < 1e-9);
/// assert!((roots[2] - 3.0).abs() < 1e-9);
/// ```
pub fn cubic_real_roots(c2: f64, c1: f64, c0: f64) -> Vec<f64> {
    // Depressed form: substitute x = y - c2/3 to obtain y³ + p·y + q = 0
    let shift = c2 / 3.0;
    let p = c1 - c2 * c2 / 3.0;
    let q = 2.0 * c2.powi(3) / 27.0 - c2 * c1 / 3.0 + c0;

    let discriminant = (q / 2.0).powi(2) + (p / 3.0).powi(3);

    if discriminant > DISCRIMINANT_TOLERANCE {
        // One real root; the other two form a complex-conjugate pair
        let sqrt_disc = discriminant.sqrt();
        let u = (-q / 2.0 + sqrt_disc).cbrt();
        let v = (-q / 2.0 - sqrt_disc).cbrt();
        vec![u + v - shift]
    } else if discriminant < -DISCRIMINANT_TOLERANCE {
        // Three distinct real roots (p < 0 is guaranteed here)
        let m = 2.0 * (-p / 3.0).sqrt();
        let phi = (3.0 * q / (p * m)).clamp(-1.0, 1.0).acos();
        (0..3)
            .map(|k| m * ((phi - 2.0 * std::f64::consts::PI * k as f64) / 3.0).cos() - shift)
            .collect()
    } else if p.abs() <= DISCRIMINANT_TOLERANCE {
        // Triple root
        vec![(-q).cbrt() - shift]
    } else {
        // Double root plus a simple root
        let simple = 3.0 * q / p;
        let double = -3.0 * q / (2.0 * p);
        vec![simple - shift, double - shift, double - shift]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
