//! Bed simulator and its configuration
//!
//! # The Scheme
//!
//! The simulator performs a single forward space-time pass over a bed of N
//! cells and S time steps, with no backtracking:
//!
//! ```text
//! for each time step:
//!     (a) transfer pass    — per cell, independent, may run in parallel
//!     (b) convective pass  — ordered upwind shift, after (a) completes
//!     (c) accounting       — outlet mass → cumulative yield sample
//! ```
//!
//! Splitting the oil into a readily accessible ("free") and a
//! diffusion-limited ("locked") reservoir reproduces the characteristic
//! fast-then-slow extraction curve without a full PDE solve — a deliberate
//! low-order numerical compromise (first-order upwind advection, explicit
//! equilibrium-seeking transfer) favoring robustness and interpretability
//! over high-order accuracy.
//!
//! # Degenerate Inputs
//!
//! Zero flow, zero particle size, and zero oil content are absorbed by
//! clamps and epsilon floors, yielding zero or saturated outputs rather than
//! errors. The accounting step bounds the per-step outlet throughput by the
//! volume one cell can advect at the clamped Courant number, so the
//! cumulative extracted mass can never outrun the oil the bed actually
//! released.

use crate::models::ExtractionInput;
use crate::numerics::minutes_to_seconds;
use crate::physics::{co2_density, equilibrium_concentration};
use crate::simulator::bed::{BedCells, TransferContext};
use crate::simulator::{validate_finite, ExtractionResult, RunSummary, YieldTrace};

/// Oil masses below this threshold count as an empty charge \[kg\].
const OIL_EPSILON: f64 = 1.0e-12;

// =================================================================================================
// Configuration
// =================================================================================================

/// Discretization of one simulation run.
///
/// # Examples
///
/// ```rust
/// use sfe_rs::simulator::SimulatorConfiguration;
///
/// // Defaults: 30 cells along the bed, 180 time steps
/// let config = SimulatorConfiguration::default();
/// assert_eq!(config.cells, 30);
/// assert_eq!(config.time_steps, 180);
///
/// // A finer grid for convergence studies
/// let fine = SimulatorConfiguration::new(120, 720);
/// assert!(fine.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfiguration {
    /// Number of cells along the bed axis
    pub cells: usize,
    /// Number of time steps over the extraction duration
    pub time_steps: usize,
}

impl Default for SimulatorConfiguration {
    fn default() -> Self {
        Self {
            cells: 30,
            time_steps: 180,
        }
    }
}

impl SimulatorConfiguration {
    /// Create a configuration with explicit discretization.
    pub fn new(cells: usize, time_steps: usize) -> Self {
        Self { cells, time_steps }
    }

    /// Validate that the discretization is usable.
    pub fn validate(&self) -> Result<(), String> {
        if self.cells < 2 {
            return Err("Bed discretization needs at least 2 cells".to_string());
        }
        if self.time_steps == 0 {
            return Err("Time steps must be greater than 0".to_string());
        }
        Ok(())
    }
}

// =================================================================================================
// Bed Simulator
// =================================================================================================

/// Discretized two-reservoir packed-bed simulator.
///
/// Stateless between runs: the same simulator value can be reused for any
/// number of simulations, and identical inputs produce identical traces.
///
/// # Example
///
/// ```rust,ignore
/// let simulator = BedSimulator::default();
/// let result = simulator.run(&input)?;
/// println!("{:.2} % extracted", result.trace.final_yield());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BedSimulator {
    configuration: SimulatorConfiguration,
}

impl BedSimulator {
    /// Create a simulator with an explicit discretization.
    pub fn new(configuration: SimulatorConfiguration) -> Self {
        Self { configuration }
    }

    /// Discretization used by this simulator.
    pub fn configuration(&self) -> &SimulatorConfiguration {
        &self.configuration
    }

    /// Run one simulation.
    ///
    /// # Errors
    ///
    /// Fails when the configuration is unusable or when NaN/infinity appears
    /// during the marching loop (numerical instability in the supplied
    /// parameters). Degenerate-but-representable inputs do not error.
    pub fn run(&self, input: &ExtractionInput) -> Result<ExtractionResult, String> {
        // ====== Step 1: Validation ======

        self.configuration.validate()?;

        let cells = self.configuration.cells;
        let steps = self.configuration.time_steps;

        // ====== Step 2: Thermodynamic operating point ======

        let density = co2_density(input.fluid.pressure_bar, input.fluid.temperature_celsius);
        let equilibrium = equilibrium_concentration(
            density,
            input.fluid.temperature_kelvin(),
            &input.solubility,
        );

        // ====== Step 3: Geometry and kinetics derivatives ======

        let transfer = input.transfer.penalized(input.moisture_fraction);

        let cross_section = input.geometry.cross_section_area();
        let cell_fluid_volume = input.geometry.fluid_volume() / cells as f64;
        let cell_area =
            input.particle.specific_surface_area() * input.geometry.solid_volume() / cells as f64;
        let cell_length = input.geometry.height / cells as f64;

        // Solvent throughput: mass flow → volumetric flow → superficial velocity
        let volumetric_flow = input.flow_kg_per_min.max(0.0) / 60.0 / density;
        let velocity = volumetric_flow / cross_section;

        let dt = minutes_to_seconds(input.duration_min) / steps as f64;

        // Fraction of one cell length traversed in one time step
        let courant = (velocity * dt / cell_length).clamp(0.0, 1.0);

        // ====== Step 4: Bed state ======

        let initial_oil = input.charge.initial_oil_mass();
        let mut bed = BedCells::new(
            cells,
            input.charge.free_oil_mass(),
            input.charge.locked_oil_mass(),
        );

        let context = TransferContext {
            equilibrium,
            dt,
            k_free: transfer.k_free,
            k_locked: transfer.k_locked,
            cell_area,
            cell_fluid_volume,
        };

        // ====== Step 5: Time marching ======

        let mut extracted = 0.0_f64;
        let mut trace = YieldTrace::with_capacity(steps);

        // Volume leaving the column per step: the throughput, bounded by the
        // volume one cell can advect at the clamped Courant number.
        let outlet_volume = (volumetric_flow * dt).min(cell_fluid_volume);

        for step in 0..steps {
            // (a) Local transfer pass — independent per cell
            let outlet = bed.transfer_pass(&context);

            // (b) Convective pass — ordered, after all cells finished (a)
            bed.advect(&outlet, courant);

            // (c) Mass accounting
            let outlet_concentration = outlet[cells - 1];
            validate_finite(outlet_concentration, "outlet concentration", step + 1)?;

            extracted += outlet_concentration * outlet_volume;

            let yield_percent = if initial_oil > OIL_EPSILON {
                (100.0 * extracted / initial_oil).clamp(0.0, 100.0)
            } else {
                0.0
            };
            validate_finite(yield_percent, "yield", step + 1)?;

            // Time points computed from the index, not accumulated, so the
            // final sample lands on the requested duration within epsilon.
            let minutes = (step as f64 + 1.0) * dt / 60.0;
            trace.push(minutes, yield_percent);
        }

        // ====== Step 6: Build result ======

        let summary = RunSummary {
            solvent_density: density,
            equilibrium_concentration: equilibrium,
            k_free_effective: transfer.k_free,
            k_locked_effective: transfer.k_locked,
            volumetric_flow,
            extracted_mass: extracted,
            initial_oil_mass: initial_oil,
        };

        let mut result = ExtractionResult::new(trace, summary);
        result.add_metadata("model", "two-reservoir");
        result.add_metadata("cells", &cells.to_string());
        result.add_metadata("time steps", &steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("courant", &courant.to_string());

        Ok(result)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BedGeometry, FluidConditions, ParticleProperties, SolidCharge, TransferCoefficients,
    };
    use crate::physics::SolubilityParams;

    fn reference_input() -> ExtractionInput {
        ExtractionInput {
            fluid: FluidConditions {
                pressure_bar: 250.0,
                temperature_celsius: 50.0,
            },
            geometry: BedGeometry::new(0.3, 0.05, 0.4),
            particle: ParticleProperties::new(0.6e-3),
            charge: SolidCharge::new(0.08, 0.15, 0.25),
            transfer: TransferCoefficients::new(5.0e-5, 8.0e-6),
            solubility: SolubilityParams::new(3.0, -1200.0, -5.5),
            flow_kg_per_min: 1.0,
            duration_min: 210.0,
            moisture_fraction: 0.10,
        }
    }

    #[test]
    fn test_configuration_defaults() {
        let config = SimulatorConfiguration::default();
        assert_eq!(config.cells, 30);
        assert_eq!(config.time_steps, 180);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_configuration_rejects_degenerate_grid() {
        assert!(SimulatorConfiguration::new(1, 100).validate().is_err());
        assert!(SimulatorConfiguration::new(30, 0).validate().is_err());
        let error = BedSimulator::new(SimulatorConfiguration::new(1, 100))
            .run(&reference_input())
            .unwrap_err();
        assert!(error.contains("at least 2 cells"));
    }

    #[test]
    fn test_trace_has_one_sample_per_step() {
        let result = BedSimulator::default().run(&reference_input()).unwrap();
        assert_eq!(result.len(), 180);
        // Last sample sits on the requested duration
        let last = result.trace.last().unwrap();
        assert!((last.time_min - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_yield_monotone_and_bounded() {
        let result = BedSimulator::default().run(&reference_input()).unwrap();
        let mut previous = 0.0;
        for sample in result.trace.iter() {
            assert!(sample.yield_percent >= previous);
            assert!((0.0..=100.0).contains(&sample.yield_percent));
            previous = sample.yield_percent;
        }
        assert!(result.trace.final_yield() > 0.0);
    }

    #[test]
    fn test_extracted_mass_never_exceeds_initial_oil() {
        let result = BedSimulator::default().run(&reference_input()).unwrap();
        assert!(result.summary.extracted_mass <= result.summary.initial_oil_mass + 1e-12);
        assert!((result.summary.initial_oil_mass - 0.012).abs() < 1e-12);
    }

    #[test]
    fn test_zero_flow_extracts_nothing() {
        let mut input = reference_input();
        input.flow_kg_per_min = 0.0;
        let result = BedSimulator::default().run(&input).unwrap();
        assert_eq!(result.trace.final_yield(), 0.0);
        assert_eq!(result.summary.extracted_mass, 0.0);
    }

    #[test]
    fn test_zero_oil_charge_extracts_nothing() {
        let mut input = reference_input();
        input.charge = SolidCharge::new(0.08, 0.0, 0.25);
        let result = BedSimulator::default().run(&input).unwrap();
        assert_eq!(result.trace.final_yield(), 0.0);
        for sample in result.trace.iter() {
            assert!(sample.yield_percent.is_finite());
            assert_eq!(sample.yield_percent, 0.0);
        }
    }

    #[test]
    fn test_zero_particle_size_stays_finite() {
        let mut input = reference_input();
        input.particle = ParticleProperties::new(0.0);
        let result = BedSimulator::default().run(&input).unwrap();
        assert!(result.trace.final_yield().is_finite());
        assert!((0.0..=100.0).contains(&result.trace.final_yield()));
    }

    #[test]
    fn test_runs_are_deterministic() {
        let simulator = BedSimulator::default();
        let first = simulator.run(&reference_input()).unwrap();
        let second = simulator.run(&reference_input()).unwrap();
        assert_eq!(first.trace, second.trace);
        assert_eq!(first.summary.extracted_mass, second.summary.extracted_mass);
    }

    #[test]
    fn test_summary_reports_operating_point() {
        let result = BedSimulator::default().run(&reference_input()).unwrap();
        // Dense supercritical CO2 expected at 250 bar / 50 °C
        assert!(result.summary.solvent_density > 700.0);
        assert!(result.summary.equilibrium_concentration >= 1.0e-6);
        assert!(result.summary.equilibrium_concentration <= 200.0);
        // Moisture penalty applied to both coefficients
        assert!(result.summary.k_free_effective < 5.0e-5);
        assert!(result.summary.k_locked_effective < 8.0e-6);
        assert!(result.summary.volumetric_flow > 0.0);
    }

    #[test]
    fn test_metadata_describes_discretization() {
        let simulator = BedSimulator::new(SimulatorConfiguration::new(40, 200));
        let result = simulator.run(&reference_input()).unwrap();
        assert_eq!(result.metadata.get("cells").unwrap(), "40");
        assert_eq!(result.metadata.get("time steps").unwrap(), "200");
        assert_eq!(result.metadata.get("model").unwrap(), "two-reservoir");
    }
}
