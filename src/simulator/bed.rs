//! Discretized bed state and per-step passes
//!
//! The bed is an ordered sequence of cells along the flow axis. Each cell
//! owns three numbers: the oil mass remaining in its two reservoirs and the
//! solvent concentration entering it. The state lives exactly as long as one
//! simulation run.
//!
//! Concentrations are expressed per cell pore volume. Keeping the transfer
//! takes bounded by the saturation headroom `(S - c)·V_cell` guarantees the
//! outlet clamp to `[0, S]` never has to discard mass that already left a
//! reservoir.

use nalgebra::DVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Floor for the cell pore volume in mass/concentration conversions \[m³\].
const VOLUME_FLOOR: f64 = 1.0e-15;

/// Per-step transfer constants shared by all cells.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TransferContext {
    /// Equilibrium concentration S \[kg/m³\]
    pub equilibrium: f64,
    /// Time step \[s\]
    pub dt: f64,
    /// Effective free-reservoir coefficient \[m/s\]
    pub k_free: f64,
    /// Effective locked-reservoir coefficient \[m/s\]
    pub k_locked: f64,
    /// Interfacial area owned by one cell \[m²\]
    pub cell_area: f64,
    /// Pore volume owned by one cell \[m³\]
    pub cell_fluid_volume: f64,
}

/// Discretized bed state: N cells of {free oil, locked oil, inlet concentration}.
#[derive(Debug, Clone)]
pub(crate) struct BedCells {
    free_oil: DVector<f64>,
    locked_oil: DVector<f64>,
    inlet: DVector<f64>,
}

impl BedCells {
    /// Allocate a bed of `cells` cells with the reservoir masses split
    /// evenly and fresh solvent (zero concentration) everywhere.
    pub(crate) fn new(cells: usize, free_total: f64, locked_total: f64) -> Self {
        let n = cells.max(1) as f64;
        Self {
            free_oil: DVector::from_element(cells, free_total.max(0.0) / n),
            locked_oil: DVector::from_element(cells, locked_total.max(0.0) / n),
            inlet: DVector::zeros(cells),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.inlet.len()
    }

    /// Oil mass still held by the bed \[kg\].
    pub(crate) fn residual_oil(&self) -> f64 {
        self.free_oil.sum() + self.locked_oil.sum()
    }

    /// Local transfer pass: every cell independently raises its bulk
    /// concentration toward the equilibrium value, draining the free
    /// reservoir first and the locked reservoir second.
    ///
    /// Returns the outlet concentration of every cell. Cells are independent
    /// here; the pass runs on Rayon when the bed is large enough and the
    /// `parallel` feature is enabled.
    pub(crate) fn transfer_pass(&mut self, ctx: &TransferContext) -> DVector<f64> {
        let n = self.len();
        let mut outlet = DVector::zeros(n);

        #[cfg(feature = "parallel")]
        {
            if n >= crate::simulator::parallel_threshold() {
                let context = *ctx;
                self.free_oil
                    .as_mut_slice()
                    .par_iter_mut()
                    .zip(self.locked_oil.as_mut_slice().par_iter_mut())
                    .zip(self.inlet.as_slice().par_iter())
                    .zip(outlet.as_mut_slice().par_iter_mut())
                    .for_each(|(((free, locked), inlet), out)| {
                        *out = transfer_cell(free, locked, *inlet, &context);
                    });
                return outlet;
            }
        }

        for i in 0..n {
            outlet[i] = transfer_cell(
                &mut self.free_oil[i],
                &mut self.locked_oil[i],
                self.inlet[i],
                ctx,
            );
        }
        outlet
    }

    /// Convective pass: first-order upwind shift of concentrations toward
    /// the outlet.
    ///
    /// `courant` is the fraction of one cell length traversed during one
    /// time step, clamped to [0,1]. Each cell's new inlet blends toward the
    /// outlet of its upstream neighbour; the first cell blends toward fresh
    /// solvent. Ordered by construction — must run after the transfer pass
    /// has finished for every cell.
    pub(crate) fn advect(&mut self, outlet: &DVector<f64>, courant: f64) {
        let f = courant.clamp(0.0, 1.0);
        let n = self.len();
        if n == 0 {
            return;
        }
        for i in (1..n).rev() {
            self.inlet[i] = (1.0 - f) * self.inlet[i] + f * outlet[i - 1];
        }
        // Column entry: fresh solvent
        self.inlet[0] *= 1.0 - f;
    }
}

/// One cell of the transfer pass.
///
/// Each reservoir take is limited by three caps:
/// 1. the driving force: k·a·(S − c)·dt
/// 2. the mass remaining in the reservoir
/// 3. the saturation headroom of the cell fluid: (S − c)·V_cell
///
/// Cap 3 keeps the resulting concentration inside [0, S] without discarding
/// transferred mass.
fn transfer_cell(free: &mut f64, locked: &mut f64, inlet: f64, ctx: &TransferContext) -> f64 {
    let volume = ctx.cell_fluid_volume.max(VOLUME_FLOOR);
    let mut c = inlet.max(0.0);

    for (reservoir, coefficient) in [(free, ctx.k_free), (locked, ctx.k_locked)] {
        let drive = (ctx.equilibrium - c).max(0.0);
        let take = (coefficient * ctx.cell_area * drive * ctx.dt)
            .max(0.0)
            .min(*reservoir)
            .min(drive * volume);
        *reservoir -= take;
        c += take / volume;
    }

    c.clamp(0.0, ctx.equilibrium.max(0.0))
}

// =================================================================================================
// Tests
// =================================================================================================
