//! sfe-rs: Supercritical CO₂ Extraction Simulation Framework
//!
//! A framework for estimating the time-resolved extraction yield of a target
//! compound from a solid plant matrix using supercritical CO₂ as solvent.
//! Built with Rust for performance and safety.
//!
//! # Architecture
//!
//! sfe-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Property correlations define the thermodynamics (what the solvent can do)
//!    - The bed simulator provides the discretized transport scheme (how mass moves)
//!
//! 2. **Explicit Inputs, Explicit Outputs**
//!    - All operating parameters travel in one input struct passed by value
//!    - One simulation run returns one result artifact; no ambient state survives
//!
//! # Quick Start
//!
//! ```rust
//! use sfe_rs::models::compound;
//! use sfe_rs::models::{
//!     BedGeometry, ExtractionInput, FluidConditions, ParticleProperties, SolidCharge,
//!     TransferCoefficients,
//! };
//! use sfe_rs::simulator::BedSimulator;
//!
//! # fn main() -> Result<(), String> {
//! // 1. Pick a compound preset and describe the process
//! let tocopherol = compound::find("Tocopherol").ok_or("unknown compound")?;
//!
//! let input = ExtractionInput {
//!     fluid: FluidConditions { pressure_bar: 250.0, temperature_celsius: 50.0 },
//!     geometry: BedGeometry::new(0.3, 0.05, 0.4),
//!     particle: ParticleProperties::new(0.6e-3),
//!     charge: SolidCharge::new(0.08, 0.15, 0.25),
//!     transfer: TransferCoefficients::new(5.0e-5, 8.0e-6),
//!     solubility: tocopherol.solubility_params(0.0),
//!     flow_kg_per_min: 1.0,
//!     duration_min: 210.0,
//!     moisture_fraction: 0.10,
//! };
//!
//! // 2. Run the simulation
//! let simulator = BedSimulator::default();
//! let result = simulator.run(&input)?;
//!
//! // 3. Access results
//! println!("Final yield: {:.2} %", result.trace.final_yield());
//! println!("CO2 density: {:.1} kg/m3", result.summary.solvent_density);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Thermodynamic property correlations (CO₂ density, solubility)
//! - [`models`]: Extraction models, compound presets, and input value types
//! - [`simulator`]: Discretized packed-bed transport simulation
//! - [`numerics`]: Shared numeric utilities (unit conversions, cubic roots)

// Core modules
pub mod numerics;
pub mod physics;

pub mod models;
pub mod simulator;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use sfe_rs::prelude::*;
    //! ```
    pub use crate::models::{
        compound, BedGeometry, ExtractionInput, ExtractionModel, FluidConditions,
        ParticleProperties, SolidCharge, TransferCoefficients,
    };
    pub use crate::physics::{equilibrium_concentration, SolubilityParams};
    pub use crate::simulator::{
        BedSimulator, ExtractionResult, RunSummary, SimulatorConfiguration, YieldSample,
        YieldTrace,
    };
}
