//! Process parameter value types
//!
//! Every quantity an operator controls travels through these structs. They
//! are plain values: construct them, pass them by value (or reference) into
//! the simulator, and drop them. No global or session state is read anywhere
//! in the crate — a deliberate design rule, since the input surface replaces
//! the mutable widget state of typical dashboard front-ends.
//!
//! # Validation Policy
//!
//! Constructors that take geometric or mass-fraction arguments fail fast with
//! a panic on values that can never describe a real packed bed (non-positive
//! dimensions, porosity outside ]0,1[, fractions outside [0,1]). Everything
//! else — zero flow, zero particle size, zero oil content — is a degenerate
//! but representable state that the simulator absorbs with clamps and
//! epsilon floors.

use crate::numerics::celsius_to_kelvin;
use crate::physics::SolubilityParams;

/// Slope of the moisture penalty applied to transfer coefficients.
const MOISTURE_PENALTY_SLOPE: f64 = 0.3;

/// Lower bound of the moisture penalty factor.
const MOISTURE_PENALTY_FLOOR: f64 = 0.05;

/// Floor applied to the particle diameter before computing specific area \[m\].
const DIAMETER_FLOOR: f64 = 1.0e-9;

// =================================================================================================
// Fluid Conditions
// =================================================================================================

/// Operating pressure and temperature of the solvent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidConditions {
    /// Pressure \[bar\]
    pub pressure_bar: f64,
    /// Temperature \[°C\]
    pub temperature_celsius: f64,
}

impl FluidConditions {
    /// Temperature in Kelvin.
    pub fn temperature_kelvin(&self) -> f64 {
        celsius_to_kelvin(self.temperature_celsius)
    }
}

// =================================================================================================
// Bed Geometry
// =================================================================================================

/// Cylindrical packed-bed geometry.
///
/// # Example
///
/// ```rust
/// use sfe_rs::models::BedGeometry;
///
/// let bed = BedGeometry::new(0.3, 0.05, 0.4);
/// assert!((bed.cross_section_area() - 1.9635e-3).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BedGeometry {
    /// Bed height \[m\]
    pub height: f64,
    /// Bed diameter \[m\]
    pub diameter: f64,
    /// Void fraction ε in ]0,1[
    pub porosity: f64,
}

impl BedGeometry {
    /// Create a bed geometry.
    ///
    /// # Panics
    ///
    /// Panics when `height` or `diameter` is not strictly positive, or when
    /// `porosity` lies outside ]0,1[.
    pub fn new(height: f64, diameter: f64, porosity: f64) -> Self {
        assert!(height > 0.0, "Bed height must be positive, got {}", height);
        assert!(
            diameter > 0.0,
            "Bed diameter must be positive, got {}",
            diameter
        );
        assert!(
            porosity > 0.0 && porosity < 1.0,
            "Porosity must be in ]0,1[, got {}",
            porosity
        );
        Self {
            height,
            diameter,
            porosity,
        }
    }

    /// Cross-section area \[m²\].
    pub fn cross_section_area(&self) -> f64 {
        std::f64::consts::PI * (self.diameter / 2.0).powi(2)
    }

    /// Total bed volume \[m³\].
    pub fn total_volume(&self) -> f64 {
        self.cross_section_area() * self.height
    }

    /// Volume occupied by solvent (pore space) \[m³\].
    pub fn fluid_volume(&self) -> f64 {
        self.total_volume() * self.porosity
    }

    /// Volume occupied by the solid charge \[m³\].
    pub fn solid_volume(&self) -> f64 {
        self.total_volume() * (1.0 - self.porosity)
    }
}

// =================================================================================================
// Particle Properties
// =================================================================================================

/// Milled-particle description (spheres assumed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleProperties {
    /// Particle diameter \[m\]
    pub diameter: f64,
}

impl ParticleProperties {
    /// Create particle properties from a diameter in meters.
    pub fn new(diameter: f64) -> Self {
        Self { diameter }
    }

    /// Specific surface area of spherical particles, 6/d \[m²/m³\].
    ///
    /// The diameter is floored to a small epsilon so a zero diameter
    /// degenerates into a very large (saturating) area instead of a
    /// division by zero.
    pub fn specific_surface_area(&self) -> f64 {
        6.0 / self.diameter.max(DIAMETER_FLOOR)
    }
}

// =================================================================================================
// Solid Charge
// =================================================================================================

/// Mass and oil content of the solid material loaded into the bed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidCharge {
    /// Charge mass \[kg\]
    pub mass: f64,
    /// Initial oil mass fraction of the charge, in \[0,1\]
    pub oil_mass_fraction: f64,
    /// Fraction of the oil that is readily solvent-accessible, in \[0,1\]
    pub free_fraction: f64,
}

impl SolidCharge {
    /// Create a solid charge.
    ///
    /// # Panics
    ///
    /// Panics when `mass` is negative or either fraction lies outside
    /// \[0,1\]. A zero mass or zero oil fraction is a valid degenerate
    /// charge and simply yields nothing.
    pub fn new(mass: f64, oil_mass_fraction: f64, free_fraction: f64) -> Self {
        assert!(mass >= 0.0, "Charge mass must be non-negative, got {}", mass);
        assert!(
            (0.0..=1.0).contains(&oil_mass_fraction),
            "Oil mass fraction must be in [0,1], got {}",
            oil_mass_fraction
        );
        assert!(
            (0.0..=1.0).contains(&free_fraction),
            "Free-oil fraction must be in [0,1], got {}",
            free_fraction
        );
        Self {
            mass,
            oil_mass_fraction,
            free_fraction,
        }
    }

    /// Total extractable oil mass \[kg\].
    pub fn initial_oil_mass(&self) -> f64 {
        self.mass * self.oil_mass_fraction
    }

    /// Readily accessible oil mass \[kg\].
    pub fn free_oil_mass(&self) -> f64 {
        self.initial_oil_mass() * self.free_fraction
    }

    /// Diffusion-limited oil mass \[kg\].
    pub fn locked_oil_mass(&self) -> f64 {
        self.initial_oil_mass() * (1.0 - self.free_fraction)
    }
}

// =================================================================================================
// Transfer Coefficients
// =================================================================================================

/// Film mass-transfer coefficients of the two oil reservoirs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferCoefficients {
    /// Coefficient of the readily accessible reservoir \[m/s\]
    pub k_free: f64,
    /// Coefficient of the diffusion-limited reservoir \[m/s\]
    pub k_locked: f64,
}

impl TransferCoefficients {
    /// Create a coefficient pair.
    pub fn new(k_free: f64, k_locked: f64) -> Self {
        Self { k_free, k_locked }
    }

    /// Coefficients scaled down by the moisture penalty.
    pub fn penalized(&self, moisture_fraction: f64) -> Self {
        let penalty = moisture_penalty(moisture_fraction);
        Self {
            k_free: self.k_free * penalty,
            k_locked: self.k_locked * penalty,
        }
    }
}

/// Moisture penalty factor in ]0,1] applied to both transfer coefficients.
///
/// Water in the matrix blocks solute pathways; the linear slope follows the
/// calibration used for the compound presets. The factor is floored above
/// zero so even fully saturated material keeps a residual transfer rate.
pub fn moisture_penalty(moisture_fraction: f64) -> f64 {
    (1.0 - MOISTURE_PENALTY_SLOPE * moisture_fraction.clamp(0.0, 1.0))
        .clamp(MOISTURE_PENALTY_FLOOR, 1.0)
}

// =================================================================================================
// Extraction Input
// =================================================================================================

/// Complete input of one simulation run.
///
/// The flat set of scalar parameters a presentation layer collects, grouped
/// into value types. Passed by reference into
/// [`BedSimulator::run`](crate::simulator::BedSimulator::run); the simulator
/// reads nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionInput {
    /// Solvent operating conditions
    pub fluid: FluidConditions,
    /// Packed-bed geometry
    pub geometry: BedGeometry,
    /// Milled-particle description
    pub particle: ParticleProperties,
    /// Solid material loaded into the bed
    pub charge: SolidCharge,
    /// Reservoir transfer coefficients (before moisture penalty)
    pub transfer: TransferCoefficients,
    /// Compound solubility coefficients
    pub solubility: SolubilityParams,
    /// CO₂ mass flow \[kg/min\]
    pub flow_kg_per_min: f64,
    /// Total extraction time \[min\]
    pub duration_min: f64,
    /// Material moisture fraction in \[0,1\]
    pub moisture_fraction: f64,
}

// =================================================================================================
// Tests
// =================================================================================================
