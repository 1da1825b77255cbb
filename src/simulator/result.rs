//! Simulation result types
//!
//! One run produces one [`ExtractionResult`]: the yield-versus-time trace,
//! a summary of the derived physical quantities, and free-form metadata for
//! diagnostics. The result is the sole artifact returned to the caller;
//! rendering and export belong to the presentation layer.

use std::collections::HashMap;

// =================================================================================================
// Yield Trace
// =================================================================================================

/// One sample of the extraction curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSample {
    /// Elapsed time since the start of the run \[min\]
    pub time_min: f64,
    /// Cumulative yield \[% of the initial oil mass\]
    pub yield_percent: f64,
}

/// Append-only, monotonically non-decreasing extraction curve.
///
/// Two invariants are enforced on append rather than trusted:
///
/// - every yield value lies within [0, 100]
/// - the sequence never decreases
///
/// # Example
///
/// ```rust
/// use sfe_rs::simulator::YieldTrace;
///
/// let mut trace = YieldTrace::new();
/// trace.push(1.0, 4.2);
/// trace.push(2.0, 3.0); // held at the previous level: the curve cannot drop
/// assert_eq!(trace.final_yield(), 4.2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YieldTrace {
    samples: Vec<YieldSample>,
}

impl YieldTrace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trace with preallocated capacity.
    pub fn with_capacity(samples: usize) -> Self {
        Self {
            samples: Vec::with_capacity(samples),
        }
    }

    /// Append one sample, clamping into [0, 100] and holding the curve at
    /// its running maximum.
    pub fn push(&mut self, time_min: f64, yield_percent: f64) {
        let floor = self.final_yield();
        self.samples.push(YieldSample {
            time_min,
            yield_percent: yield_percent.clamp(0.0, 100.0).max(floor),
        });
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no sample has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples in chronological order.
    pub fn samples(&self) -> &[YieldSample] {
        &self.samples
    }

    /// Iterator over the samples.
    pub fn iter(&self) -> impl Iterator<Item = &YieldSample> {
        self.samples.iter()
    }

    /// Last sample, if any.
    pub fn last(&self) -> Option<&YieldSample> {
        self.samples.last()
    }

    /// Yield of the last sample, or 0 for an empty trace.
    pub fn final_yield(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.yield_percent)
    }

    /// Yield at the latest sample taken no later than `time_min`, or 0 when
    /// the trace has not reached that time yet.
    pub fn yield_at(&self, time_min: f64) -> f64 {
        self.samples
            .iter()
            .take_while(|s| s.time_min <= time_min)
            .last()
            .map_or(0.0, |s| s.yield_percent)
    }
}

// =================================================================================================
// Run Summary
// =================================================================================================

/// Derived quantities of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Solvent density at the operating point \[kg/m³\]
    pub solvent_density: f64,
    /// Equilibrium solute concentration at the operating point \[kg/m³\]
    pub equilibrium_concentration: f64,
    /// Moisture-penalized free-reservoir coefficient \[m/s\]
    pub k_free_effective: f64,
    /// Moisture-penalized locked-reservoir coefficient \[m/s\]
    pub k_locked_effective: f64,
    /// Solvent volumetric flow \[m³/s\]
    pub volumetric_flow: f64,
    /// Total extracted oil mass \[kg\]
    pub extracted_mass: f64,
    /// Oil mass initially held by the charge \[kg\]
    pub initial_oil_mass: f64,
}

// =================================================================================================
// Extraction Result
// =================================================================================================

/// Complete artifact of one simulation run.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Yield-versus-time curve
    pub trace: YieldTrace,
    /// Derived physical quantities
    pub summary: RunSummary,
    /// Free-form diagnostic metadata (solver name, discretization, ...)
    pub metadata: HashMap<String, String>,
}

impl ExtractionResult {
    /// Create a result from a trace and a summary.
    pub fn new(trace: YieldTrace, summary: RunSummary) -> Self {
        Self {
            trace,
            summary,
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry for diagnostics and reproducibility.
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Number of trace samples.
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// True when the trace holds no sample.
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
