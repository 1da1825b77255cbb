//! Chrastil-form solubility correlation
//!
//! The equilibrium concentration of a solute in supercritical CO₂ is modeled
//! with a density/temperature correlation of Chrastil form:
//!
//! ```text
//! S = exp(k·ln(ρ) + a/T + b) · (1 + 5·x_cosolvent)
//! ```
//!
//! where ρ is the solvent density \[kg/m³\], T the temperature \[K\], and
//! (k, a, b) compound-specific coefficients. The linear co-solvent term is a
//! conservative enhancement model for small ethanol fractions.
//!
//! The raw correlation can produce wild values for coefficients far outside
//! their calibration range, so the output is clamped to a physical sanity
//! interval before it reaches the transport simulation.

/// Lower clamp of the equilibrium concentration \[kg/m³\].
pub const MIN_CONCENTRATION: f64 = 1.0e-6;

/// Upper clamp of the equilibrium concentration \[kg/m³\].
pub const MAX_CONCENTRATION: f64 = 200.0;

/// Linear co-solvent enhancement slope \[-\].
const COSOLVENT_ENHANCEMENT: f64 = 5.0;

/// Density floor applied before the logarithm \[kg/m³\].
const DENSITY_FLOOR: f64 = 1.0e-6;

// =================================================================================================
// Solubility Parameters
// =================================================================================================

/// Compound-specific coefficients of the solubility correlation.
///
/// # Fields
///
/// - `k`: density association exponent \[-\]
/// - `a`: temperature coefficient \[K\]
/// - `b`: intercept \[-\]
/// - `cosolvent_fraction`: ethanol co-solvent fraction, kept in \[0, 0.99\]
///
/// # Example
///
/// ```rust
/// use sfe_rs::physics::SolubilityParams;
///
/// let neat = SolubilityParams::new(3.0, -1200.0, -5.5);
/// let boosted = neat.with_cosolvent(0.05);
/// assert_eq!(boosted.cosolvent_fraction, 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolubilityParams {
    /// Density association exponent
    pub k: f64,
    /// Temperature coefficient \[K\]
    pub a: f64,
    /// Intercept
    pub b: f64,
    /// Co-solvent fraction in \[0, 0.99\]
    pub cosolvent_fraction: f64,
}

impl SolubilityParams {
    /// Create parameters for a neat (co-solvent-free) extraction.
    pub fn new(k: f64, a: f64, b: f64) -> Self {
        Self {
            k,
            a,
            b,
            cosolvent_fraction: 0.0,
        }
    }

    /// Return a copy with the given co-solvent fraction.
    ///
    /// Out-of-range fractions are clamped into \[0, 0.99\] rather than
    /// rejected.
    pub fn with_cosolvent(mut self, fraction: f64) -> Self {
        self.cosolvent_fraction = fraction.clamp(0.0, 0.99);
        self
    }
}

// =================================================================================================
// Correlation
// =================================================================================================

/// Equilibrium solute concentration S \[kg/m³\] in the solvent phase.
///
/// # Arguments
///
/// * `density` - Solvent density \[kg/m³\]; floored to a small positive
///   epsilon before the logarithm so degenerate values cannot produce NaN
/// * `temperature_kelvin` - Temperature \[K\]
/// * `params` - Compound coefficients and co-solvent fraction
///
/// # Returns
///
/// The correlated concentration, clamped to
/// [[`MIN_CONCENTRATION`], [`MAX_CONCENTRATION`]] regardless of the formula
/// output.
pub fn equilibrium_concentration(
    density: f64,
    temperature_kelvin: f64,
    params: &SolubilityParams,
) -> f64 {
    let rho = density.max(DENSITY_FLOOR);
    let boost = 1.0 + COSOLVENT_ENHANCEMENT * params.cosolvent_fraction.clamp(0.0, 0.99);

    let raw = (params.k * rho.ln() + params.a / temperature_kelvin + params.b).exp() * boost;

    if raw.is_nan() {
        return MIN_CONCENTRATION;
    }
    raw.clamp(MIN_CONCENTRATION, MAX_CONCENTRATION)
}

// =================================================================================================
// Tests
// =================================================================================================
