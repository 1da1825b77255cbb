//! Two-reservoir packed-bed extraction model
//!
//! The registry face of the bed simulator: adapts the
//! [`ExtractionModel`](crate::models::ExtractionModel) interface onto
//! [`BedSimulator`](crate::simulator::BedSimulator) with a chosen
//! discretization.

use crate::models::{ExtractionInput, ExtractionModel};
use crate::simulator::{BedSimulator, ExtractionResult, SimulatorConfiguration};

/// Two-reservoir plug-flow model with a configurable discretization.
///
/// # Example
///
/// ```rust
/// use sfe_rs::models::TwoReservoirModel;
/// use sfe_rs::models::ExtractionModel;
/// use sfe_rs::simulator::SimulatorConfiguration;
///
/// let model = TwoReservoirModel::default();
/// assert_eq!(model.name(), "two-reservoir");
///
/// let fine = TwoReservoirModel::new(SimulatorConfiguration::new(60, 360));
/// assert_eq!(fine.configuration().cells, 60);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TwoReservoirModel {
    configuration: SimulatorConfiguration,
}

impl TwoReservoirModel {
    /// Create the model with an explicit discretization.
    pub fn new(configuration: SimulatorConfiguration) -> Self {
        Self { configuration }
    }

    /// Discretization used for every prediction of this model.
    pub fn configuration(&self) -> &SimulatorConfiguration {
        &self.configuration
    }
}

impl ExtractionModel for TwoReservoirModel {
    fn simulate(&self, input: &ExtractionInput) -> Result<ExtractionResult, String> {
        BedSimulator::new(self.configuration).run(input)
    }

    fn name(&self) -> &str {
        "two-reservoir"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "Discretized plug-flow bed with a readily-accessible and a \
             diffusion-limited oil reservoir per cell, bounded by a \
             Chrastil solubility correlation over Peng-Robinson CO2 density.",
        )
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
    fn test_model_matches_direct_simulator_call() {
        let model = TwoReservoirModel::default();
        let via_model = model.simulate(&reference_input()).unwrap();
        let direct = BedSimulator::default().run(&reference_input()).unwrap();
        assert_eq!(via_model.trace, direct.trace);
    }

    #[test]
    fn test_model_description_present() {
        let model = TwoReservoirModel::default();
        assert!(model.description().unwrap().contains("plug-flow"));
    }

    #[test]
    fn test_custom_discretization_flows_through() {
        let model = TwoReservoirModel::new(SimulatorConfiguration::new(45, 90));
        let result = model.simulate(&reference_input()).unwrap();
        assert_eq!(result.len(), 90);
        assert_eq!(result.metadata.get("cells").unwrap(), "45");
    }
}
