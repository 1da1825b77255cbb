//! Named compound presets
//!
//! A static table of compound-specific constants: the solubility correlation
//! coefficients (k, a, b) and a practical maximum yield figure. The table is
//! plain configuration data — the simulator only ever sees the
//! [`SolubilityParams`] derived from one row.
//!
//! The practical maximum is a guidance figure for presentation layers
//! (achievable percent of feed mass under favorable conditions); the core
//! never caps a trace with it.

use crate::physics::SolubilityParams;

/// One row of the compound preset table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compound {
    /// Display name
    pub name: &'static str,
    /// Density association exponent of the solubility correlation
    pub chrastil_k: f64,
    /// Temperature coefficient of the solubility correlation \[K\]
    pub chrastil_a: f64,
    /// Intercept of the solubility correlation
    pub chrastil_b: f64,
    /// Practical maximum yield \[% of feed mass\], guidance only
    pub practical_max_percent: f64,
}

impl Compound {
    /// Solubility parameters of this compound with an optional co-solvent
    /// fraction.
    pub fn solubility_params(&self, cosolvent_fraction: f64) -> SolubilityParams {
        SolubilityParams::new(self.chrastil_k, self.chrastil_a, self.chrastil_b)
            .with_cosolvent(cosolvent_fraction)
    }
}

/// Compound preset table.
///
/// Coefficients are literal calibration values; they are not derived from
/// first principles and carry no uncertainty information.
pub const PRESETS: &[Compound] = &[
    Compound {
        name: "Tocopherol",
        chrastil_k: 3.0,
        chrastil_a: -1200.0,
        chrastil_b: -5.5,
        practical_max_percent: 20.0,
    },
    Compound {
        name: "Beta-Carotene",
        chrastil_k: 3.4,
        chrastil_a: -1600.0,
        chrastil_b: -9.2,
        practical_max_percent: 12.0,
    },
    Compound {
        name: "Lycopene",
        chrastil_k: 3.6,
        chrastil_a: -1750.0,
        chrastil_b: -10.4,
        practical_max_percent: 10.0,
    },
    Compound {
        name: "Caffeine",
        chrastil_k: 2.6,
        chrastil_a: -950.0,
        chrastil_b: -4.8,
        practical_max_percent: 18.0,
    },
    Compound {
        name: "Curcumin",
        chrastil_k: 2.9,
        chrastil_a: -1450.0,
        chrastil_b: -7.6,
        practical_max_percent: 15.0,
    },
    Compound {
        name: "Squalene",
        chrastil_k: 2.4,
        chrastil_a: -820.0,
        chrastil_b: -4.1,
        practical_max_percent: 14.0,
    },
];

/// Find a preset by name, case-insensitively.
///
/// # Example
///
/// ```rust
/// use sfe_rs::models::compound;
///
/// let toco = compound::find("tocopherol").unwrap();
/// assert_eq!(toco.practical_max_percent, 20.0);
/// assert!(compound::find("Unobtainium").is_none());
/// ```
pub fn find(name: &str) -> Option<&'static Compound> {
    PRESETS
        .iter()
        .find(|compound| compound.name.eq_ignore_ascii_case(name))
}

// =================================================================================================
// Tests
// =================================================================================================
