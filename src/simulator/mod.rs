//! Discretized packed-bed transport simulation
//!
//! This module turns the property correlations of [`physics`](crate::physics)
//! into a yield-versus-time curve. The bed is discretized into N cells along
//! the flow axis; each time step performs:
//!
//! 1. **Local transfer pass** — every cell independently moves oil from its
//!    two reservoirs (readily accessible, then diffusion-limited) into the
//!    solvent, driven by the distance to the equilibrium concentration.
//! 2. **Convective pass** — an ordered first-order upwind shift of
//!    concentrations toward the outlet; the first cell blends toward fresh
//!    solvent.
//! 3. **Accounting** — the mass leaving the last cell accumulates into the
//!    extracted total and one (time, yield) sample is appended to the trace.
//!
//! The transfer pass is embarrassingly parallel across cells and may be
//! dispatched to Rayon (feature `parallel`); the convective pass has an
//! upstream dependency and always runs as an ordered barrier afterwards.
//!
//! # Module Organization
//!
//! - **`engine`**: [`BedSimulator`] and [`SimulatorConfiguration`]
//! - **`result`**: [`YieldTrace`], [`RunSummary`], [`ExtractionResult`]
//! - **`bed`** (private): the discretized cell state and the two passes
//!
//! # Resource Model
//!
//! One run is a single finite, deterministic computation. All state is
//! function-local, owned by the running simulator, and reclaimed when the
//! call returns; nothing survives between runs.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod bed;
mod engine;
mod result;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand the transfer pass to Rayon is a numerical-execution
// concern, not a physics concern, so it lives here rather than in the bed
// state itself.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on every
// pass. Relaxed ordering is sufficient: the value is a performance hint, not
// a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of cells above which the transfer pass switches to
/// parallel iteration.
///
/// Below this point the overhead of Rayon's thread-pool dispatch outweighs
/// the per-cell arithmetic; typical beds (N = 30) stay sequential.
const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The transfer pass uses sequential iteration when the bed contains fewer
/// cells than this value and switches to Rayon when it contains more — but
/// only when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use sfe_rs::simulator::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero-cell threshold would force parallel
/// dispatch on every single-cell pass, which is never the intended
/// behaviour.
///
/// # Example
///
/// ```rust
/// use sfe_rs::simulator::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use engine::{BedSimulator, SimulatorConfiguration};
pub use result::{ExtractionResult, RunSummary, YieldSample, YieldTrace};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Validate one scalar produced during the marching loop.
///
/// NaN or infinity at this point indicates numerical instability in the
/// physics inputs; the run is aborted with a diagnostic message instead of
/// propagating the poison into the trace.
pub(crate) fn validate_finite(value: f64, quantity: &str, step: usize) -> Result<(), String> {
    if value.is_nan() {
        return Err(format!(
            "NaN detected in {} at step {}. This indicates numerical instability \
             in the supplied parameters.",
            quantity, step
        ));
    }
    if value.is_infinite() {
        return Err(format!(
            "Infinity detected in {} at step {}. This indicates numerical overflow \
             in the supplied parameters.",
            quantity, step
        ));
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
