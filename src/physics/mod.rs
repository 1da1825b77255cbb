//! Thermodynamic property correlations
//!
//! This module provides the two property calculations every extraction run
//! depends on:
//!
//! - [`eos`]: solvent (CO₂) mass density from pressure and temperature,
//!   obtained by solving a cubic equation of state
//! - [`solubility`]: equilibrium solute concentration in the solvent phase,
//!   from a Chrastil-form density/temperature correlation
//!
//! # Architecture
//!
//! Property correlations are **separate from the transport simulation**:
//! - This module answers "what can the solvent do at these conditions?"
//! - The [`simulator`](crate::simulator) answers "how does mass actually move?"
//!
//! Both functions here are total over physically plausible inputs: degenerate
//! values are absorbed by documented fallbacks and clamps rather than errors.
//!
//! # Example
//!
//! ```rust
//! use sfe_rs::physics::{co2_density, equilibrium_concentration, SolubilityParams};
//!
//! // Supercritical CO2 at 250 bar and 50 °C
//! let density = co2_density(250.0, 50.0);
//! assert!(density > 0.0);
//!
//! let params = SolubilityParams::new(3.0, -1900.0, -12.0);
//! let saturation = equilibrium_concentration(density, 323.15, &params);
//! assert!(saturation >= 1.0e-6 && saturation <= 200.0);
//! ```

// module declaration
pub mod eos;
pub mod solubility;

// re-export commonly used items for convenience
pub use eos::{co2_density, ideal_gas_density};
pub use solubility::{
    equilibrium_concentration, SolubilityParams, MAX_CONCENTRATION, MIN_CONCENTRATION,
};
