//! Presentation-layer stand-in: run one tocopherol extraction and print the
//! curve plus the summary, the way a dashboard front-end would render it.
//!
//! ```bash
//! cargo run --example tocopherol_run
//! ```

use sfe_rs::models::compound;
use sfe_rs::models::{
    BedGeometry, ExtractionInput, FluidConditions, ParticleProperties, SolidCharge,
    TransferCoefficients,
};
use sfe_rs::simulator::BedSimulator;

fn main() -> Result<(), String> {
    let tocopherol = compound::find("Tocopherol").ok_or("unknown compound")?;

    let input = ExtractionInput {
        fluid: FluidConditions {
            pressure_bar: 250.0,
            temperature_celsius: 50.0,
        },
        geometry: BedGeometry::new(0.3, 0.05, 0.4),
        particle: ParticleProperties::new(0.6e-3),
        charge: SolidCharge::new(0.08, 0.15, 0.25),
        transfer: TransferCoefficients::new(2.0e-6, 1.0e-9),
        solubility: tocopherol.solubility_params(0.0),
        flow_kg_per_min: 1.0,
        duration_min: 210.0,
        moisture_fraction: 0.10,
    };

    let result = BedSimulator::default().run(&input)?;

    println!("Extraction of {} — yield vs. time", tocopherol.name);
    println!("{:>10}  {:>10}", "t [min]", "yield [%]");
    for sample in result.trace.iter().step_by(12) {
        println!("{:>10.1}  {:>10.2}", sample.time_min, sample.yield_percent);
    }
    if let Some(last) = result.trace.last() {
        println!("{:>10.1}  {:>10.2}", last.time_min, last.yield_percent);
    }

    let summary = &result.summary;
    println!();
    println!("CO2 density:            {:>10.1} kg/m3", summary.solvent_density);
    println!(
        "Equilibrium solubility: {:>10.4} kg/m3",
        summary.equilibrium_concentration
    );
    println!("k_free (effective):     {:>10.3e} m/s", summary.k_free_effective);
    println!("k_locked (effective):   {:>10.3e} m/s", summary.k_locked_effective);
    println!("Volumetric flow:        {:>10.3e} m3/s", summary.volumetric_flow);
    println!("Extracted mass:         {:>10.5} kg", summary.extracted_mass);
    println!("Initial oil mass:       {:>10.5} kg", summary.initial_oil_mass);

    Ok(())
}
