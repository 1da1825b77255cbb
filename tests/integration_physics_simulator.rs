//! Integration tests: physics module + simulator module
//!
//! These tests verify that the property correlations and the bed simulator
//! work correctly together over the whole operating envelope.

use sfe_rs::models::SolidCharge;
use sfe_rs::physics::{
    co2_density, equilibrium_concentration, SolubilityParams, MAX_CONCENTRATION,
    MIN_CONCENTRATION,
};
use sfe_rs::simulator::{BedSimulator, SimulatorConfiguration};

mod common;
use common::{assert_well_formed_trace, reference_input, slow_kinetics_input};

// =================================================================================================
// Property Correlations Across the Envelope
// =================================================================================================

#[test]
fn test_density_positive_and_finite_everywhere() {
    for &pressure in &[0.1, 1.0, 20.0, 73.8, 150.0, 300.0, 500.0] {
        for &temperature in &[-60.0, -20.0, 0.0, 31.1, 50.0, 80.0, 120.0] {
            let rho = co2_density(pressure, temperature);
            assert!(
                rho > 0.0 && rho.is_finite(),
                "Density {} unusable at {} bar / {} °C",
                rho,
                pressure,
                temperature
            );
        }
    }
}

#[test]
fn test_density_non_decreasing_in_pressure() {
    for &temperature in &[35.0, 45.0, 60.0, 80.0] {
        let mut previous = 0.0;
        for &pressure in &[50.0, 74.0, 100.0, 150.0, 200.0, 250.0, 300.0, 400.0] {
            let rho = co2_density(pressure, temperature);
            assert!(
                rho + 1e-9 >= previous,
                "Density fell from {} to {} at {} bar / {} °C",
                previous,
                rho,
                pressure,
                temperature
            );
            previous = rho;
        }
    }
}

#[test]
fn test_solubility_bounded_for_arbitrary_coefficients() {
    let coefficient_grid = [-20.0, -5.0, 0.0, 3.0, 12.0];
    for &k in &coefficient_grid {
        for &a in &[-50_000.0, -1200.0, 0.0, 800.0] {
            for &b in &coefficient_grid {
                let params = SolubilityParams::new(k, a, b);
                let s = equilibrium_concentration(830.0, 323.15, &params);
                assert!(
                    (MIN_CONCENTRATION..=MAX_CONCENTRATION).contains(&s),
                    "S = {} out of bounds for ({}, {}, {})",
                    s,
                    k,
                    a,
                    b
                );
            }
        }
    }
}

// =================================================================================================
// Full-Run Invariants
// =================================================================================================

#[test]
fn test_reference_run_trace_is_well_formed() {
    let result = BedSimulator::default().run(&reference_input()).unwrap();
    assert_eq!(result.len(), 180);
    assert_well_formed_trace(&result.trace);
    assert!(result.trace.final_yield() > 0.0);
}

#[test]
fn test_kinetic_run_trace_is_well_formed() {
    let result = BedSimulator::default().run(&slow_kinetics_input()).unwrap();
    assert_well_formed_trace(&result.trace);
    assert!(result.trace.final_yield() > 0.0);
    assert!(result.trace.final_yield() < 100.0);
}

#[test]
fn test_identical_inputs_identical_traces() {
    // Two distinct simulator values, same input: no hidden state anywhere
    let first = BedSimulator::default().run(&reference_input()).unwrap();
    let second = BedSimulator::new(SimulatorConfiguration::default())
        .run(&reference_input())
        .unwrap();
    assert_eq!(first.trace, second.trace);
    assert_eq!(
        first.summary.extracted_mass,
        second.summary.extracted_mass
    );
}

#[test]
fn test_zero_flow_yields_nothing() {
    let mut input = reference_input();
    input.flow_kg_per_min = 0.0;
    let result = BedSimulator::default().run(&input).unwrap();
    for sample in result.trace.iter() {
        assert_eq!(sample.yield_percent, 0.0);
    }
    assert_eq!(result.summary.extracted_mass, 0.0);
}

#[test]
fn test_oil_free_charge_yields_nothing() {
    let mut input = reference_input();
    input.charge = SolidCharge::new(0.08, 0.0, 0.25);
    let result = BedSimulator::default().run(&input).unwrap();
    for sample in result.trace.iter() {
        assert!(sample.yield_percent.is_finite(), "NaN leaked into the trace");
        assert_eq!(sample.yield_percent, 0.0);
    }
}

#[test]
fn test_extraction_bounded_by_inventory() {
    for input in [reference_input(), slow_kinetics_input()] {
        let result = BedSimulator::default().run(&input).unwrap();
        assert!(
            result.summary.extracted_mass <= result.summary.initial_oil_mass + 1e-12,
            "Extracted {} kg from an inventory of {} kg",
            result.summary.extracted_mass,
            result.summary.initial_oil_mass
        );
    }
}

#[test]
fn test_finer_grids_stay_well_formed() {
    for (cells, steps) in [(2, 1), (10, 40), (60, 360), (120, 720)] {
        let simulator = BedSimulator::new(SimulatorConfiguration::new(cells, steps));
        let result = simulator.run(&slow_kinetics_input()).unwrap();
        assert_eq!(result.len(), steps);
        assert_well_formed_trace(&result.trace);
    }
}

#[test]
fn test_cosolvent_raises_yield() {
    let input = slow_kinetics_input();
    let mut boosted = input;
    boosted.solubility = input.solubility.with_cosolvent(0.10);

    let neat = BedSimulator::default().run(&input).unwrap();
    let with_ethanol = BedSimulator::default().run(&boosted).unwrap();

    assert!(
        with_ethanol.trace.final_yield() > neat.trace.final_yield(),
        "Co-solvent boost did not raise the yield: {} vs {}",
        with_ethanol.trace.final_yield(),
        neat.trace.final_yield()
    );
}
