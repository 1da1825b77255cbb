//! Peng–Robinson density solver for CO₂
//!
//! # Mathematical Background
//!
//! The Peng–Robinson equation of state relates pressure, temperature, and
//! molar volume of a fluid. Written in terms of the dimensionless
//! compressibility factor Z = P·Vm / (R·T), it becomes a monic cubic:
//!
//! ```text
//! Z³ - (1 - B)·Z² + (A - 3B² - 2B)·Z - (AB - B² - B³) = 0
//!
//! A = a·α·P / (R·T)²        B = b·P / (R·T)
//! a = 0.45724·R²·Tc² / Pc   b = 0.07780·R·Tc / Pc
//! α = (1 + κ·(1 - √(T/Tc)))²
//! κ = 0.37464 + 1.54226·ω - 0.26992·ω²
//! ```
//!
//! The critical constants (Tc, Pc), acentric factor ω, and molar mass are
//! fixed physical properties of CO₂, not operating inputs.
//!
//! # Root Selection
//!
//! Above the critical point the cubic usually has a single real root. When
//! several real roots exist, the largest root strictly above B is taken (the
//! vapor/supercritical-like branch, appropriate for the operating envelope
//! of supercritical extraction). If no root clears B, the largest real root
//! is used; if the solve produces nothing usable, the density falls back to
//! the ideal-gas estimate ρ = P·M / (R·T).
//!
//! With these fallbacks the solver never fails for finite positive inputs.

use crate::numerics::{bar_to_pascal, celsius_to_kelvin, cubic_real_roots};

// =================================================================================================
// Physical Constants of the Solvent
// =================================================================================================

/// Universal gas constant \[J/(mol·K)\]
pub const GAS_CONSTANT: f64 = 8.314_462_618;

/// CO₂ critical temperature \[K\]
pub const CRITICAL_TEMPERATURE: f64 = 304.1282;

/// CO₂ critical pressure \[Pa\]
pub const CRITICAL_PRESSURE: f64 = 7.3773e6;

/// CO₂ acentric factor \[-\]
pub const ACENTRIC_FACTOR: f64 = 0.22394;

/// CO₂ molar mass \[kg/mol\]
pub const MOLAR_MASS: f64 = 0.044_009_8;

// =================================================================================================
// Density Calculation
// =================================================================================================

/// CO₂ mass density \[kg/m³\] at the given pressure \[bar\] and temperature \[°C\].
///
/// Solves the Peng–Robinson cubic for the compressibility factor and converts
/// the selected root into a mass density. The caller is expected to pass
/// physically plausible ranges (P > 0 bar, T > -273.15 °C); no validation is
/// performed here.
///
/// Always returns a positive, finite value for finite positive inputs — the
/// documented root-selection fallbacks absorb every degenerate case.
///
/// # Example
///
/// ```rust
/// use sfe_rs::physics::co2_density;
///
/// // Dense supercritical fluid
/// let rho = co2_density(250.0, 50.0);
/// assert!(rho > 600.0 && rho < 1000.0);
///
/// // Near-ambient gas behaves almost ideally
/// let gas = co2_density(1.0, 50.0);
/// assert!(gas > 1.0 && gas < 2.5);
/// ```
pub fn co2_density(pressure_bar: f64, temperature_celsius: f64) -> f64 {
    let pressure = bar_to_pascal(pressure_bar);
    let temperature = celsius_to_kelvin(temperature_celsius);

    // Temperature-dependent attraction correction
    let kappa =
        0.37464 + 1.54226 * ACENTRIC_FACTOR - 0.26992 * ACENTRIC_FACTOR * ACENTRIC_FACTOR;
    let alpha = {
        let reduced = temperature / CRITICAL_TEMPERATURE;
        let base = 1.0 + kappa * (1.0 - reduced.sqrt());
        base * base
    };

    // Attraction parameter a and co-volume b
    let attraction =
        0.45724 * GAS_CONSTANT.powi(2) * CRITICAL_TEMPERATURE.powi(2) / CRITICAL_PRESSURE * alpha;
    let covolume = 0.07780 * GAS_CONSTANT * CRITICAL_TEMPERATURE / CRITICAL_PRESSURE;

    // Reduced parameters of the cubic
    let rt = GAS_CONSTANT * temperature;
    let big_a = attraction * pressure / (rt * rt);
    let big_b = covolume * pressure / rt;

    // Monic cubic in Z
    let c2 = big_b - 1.0;
    let c1 = big_a - 3.0 * big_b * big_b - 2.0 * big_b;
    let c0 = big_b * big_b + big_b.powi(3) - big_a * big_b;

    let roots = cubic_real_roots(c2, c1, c0);

    // Prefer the largest root strictly above B (vapor/supercritical branch);
    // fall back to the largest real root.
    let selected = roots
        .iter()
        .copied()
        .filter(|z| *z > big_b)
        .fold(f64::NEG_INFINITY, f64::max);
    let z = if selected.is_finite() {
        selected
    } else {
        roots.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    };

    if !z.is_finite() || z <= 0.0 {
        return ideal_gas_density(pressure, temperature);
    }

    let molar_volume = z * rt / pressure;
    if molar_volume <= 0.0 || !molar_volume.is_finite() {
        return ideal_gas_density(pressure, temperature);
    }

    MOLAR_MASS / molar_volume
}

/// Ideal-gas density estimate ρ = P·M / (R·T) \[kg/m³\].
///
/// Used as the terminal fallback of [`co2_density`] and useful on its own as
/// a sanity reference at low pressures.
pub fn ideal_gas_density(pressure_pa: f64, temperature_kelvin: f64) -> f64 {
    pressure_pa * MOLAR_MASS / (GAS_CONSTANT * temperature_kelvin)
}

// =================================================================================================
// Tests
// =================================================================================================
