//! # linkplan-budget
//!
//! Free-space link budget calculator for point-to-point radio links.
//!
//! [`compute`] evaluates free-space path loss, EIRP, received power, and
//! fade margin from a set of RF input parameters. The computation is a pure
//! function over its inputs; validation failures report every violated
//! constraint together rather than stopping at the first.
//!
//! ## Example
//!
//! ```
//! use linkplan_budget::{compute, BudgetInputs};
//!
//! let inputs = BudgetInputs {
//!     frequency_ghz: 5.8,
//!     distance_km: 10.0,
//!     tx_power_dbm: 20.0,
//!     tx_gain_dbi: 24.0,
//!     rx_gain_dbi: 24.0,
//!     tx_feeder_loss_db: 1.0,
//!     rx_feeder_loss_db: 1.0,
//!     misc_losses_db: 2.0,
//!     rx_threshold_dbm: -80.0,
//! };
//!
//! let result = compute(&inputs).unwrap();
//! assert!(result.fade_margin_db > 0.0);
//! ```

use thiserror::Error;

/// FSPL constant for frequency in GHz and distance in km:
/// `20*log10(4*pi/c) + 20*log10(1e9) + 20*log10(1e3)` collapsed to one term.
const FSPL_GHZ_KM_CONST: f64 = 92.45;

/// RF inputs for a link budget computation.
///
/// Gains are in dBi, powers in dBm, losses in dB.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BudgetInputs {
    /// Carrier frequency in GHz. Must be finite and > 0.
    pub frequency_ghz: f64,
    /// Link distance in km. Must be finite and > 0.
    pub distance_km: f64,
    /// Transmitter output power (dBm).
    pub tx_power_dbm: f64,
    /// Transmitter antenna gain (dBi).
    pub tx_gain_dbi: f64,
    /// Receiver antenna gain (dBi).
    pub rx_gain_dbi: f64,
    /// Transmitter feeder/cable loss (dB).
    pub tx_feeder_loss_db: f64,
    /// Receiver feeder/cable loss (dB).
    pub rx_feeder_loss_db: f64,
    /// Miscellaneous losses (connectors, weather margin, ...) in dB.
    pub misc_losses_db: f64,
    /// Receiver sensitivity threshold (dBm).
    pub rx_threshold_dbm: f64,
}

impl Default for BudgetInputs {
    fn default() -> Self {
        Self {
            frequency_ghz: 5.8,
            distance_km: 10.0,
            tx_power_dbm: 20.0,
            tx_gain_dbi: 24.0,
            rx_gain_dbi: 24.0,
            tx_feeder_loss_db: 1.0,
            rx_feeder_loss_db: 1.0,
            misc_losses_db: 2.0,
            rx_threshold_dbm: -80.0,
        }
    }
}

/// A single violated input constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Violation {
    /// Frequency was non-finite or not greater than 0 GHz.
    Frequency,
    /// Distance was non-finite or not greater than 0 km.
    Distance,
}

impl Violation {
    /// Human-readable message for this violation.
    pub fn message(&self) -> &'static str {
        match self {
            Violation::Frequency => "Frequency must be a number greater than 0 GHz.",
            Violation::Distance => "Link distance must be a number greater than 0 km.",
        }
    }
}

/// One or more invalid inputs, reported together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .violations.iter().map(|v| v.message()).collect::<Vec<_>>().join(" "))]
pub struct ValidationError {
    /// Every violated constraint, in field order.
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// True if the given field is among the violations.
    pub fn flags(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }
}

/// Computed link budget figures, all in dB/dBm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkBudgetResult {
    /// Free-space path loss (dB).
    pub fspl_db: f64,
    /// Effective isotropic radiated power (dBm).
    pub eirp_dbm: f64,
    /// Power at the receiver input (dBm).
    pub rx_power_dbm: f64,
    /// Received power minus the receiver threshold (dB).
    pub fade_margin_db: f64,
    /// Extension point for additional loss terms; currently always 0 but
    /// carried through the received-power sum.
    pub additional_losses_db: f64,
}

/// Free-space path loss in dB for frequency in GHz and distance in km.
pub fn fspl_ghz_km(frequency_ghz: f64, distance_km: f64) -> f64 {
    FSPL_GHZ_KM_CONST + 20.0 * frequency_ghz.log10() + 20.0 * distance_km.log10()
}

/// Compute the link budget for the given inputs.
///
/// # Errors
///
/// [`ValidationError`] listing every violated constraint: frequency and
/// distance are checked independently and can both be flagged at once.
pub fn compute(inputs: &BudgetInputs) -> Result<LinkBudgetResult, ValidationError> {
    let mut violations = Vec::new();
    if !inputs.frequency_ghz.is_finite() || inputs.frequency_ghz <= 0.0 {
        violations.push(Violation::Frequency);
    }
    if !inputs.distance_km.is_finite() || inputs.distance_km <= 0.0 {
        violations.push(Violation::Distance);
    }
    if !violations.is_empty() {
        return Err(ValidationError { violations });
    }

    let fspl_db = fspl_ghz_km(inputs.frequency_ghz, inputs.distance_km);
    let eirp_dbm = inputs.tx_power_dbm + inputs.tx_gain_dbi - inputs.tx_feeder_loss_db;
    let additional_losses_db = 0.0;
    let rx_power_dbm = eirp_dbm + inputs.rx_gain_dbi
        - inputs.rx_feeder_loss_db
        - fspl_db
        - inputs.misc_losses_db
        - additional_losses_db;
    let fade_margin_db = rx_power_dbm - inputs.rx_threshold_dbm;

    Ok(LinkBudgetResult {
        fspl_db,
        eirp_dbm,
        rx_power_dbm,
        fade_margin_db,
        additional_losses_db,
    })
}

/// Format a dB/dBm figure to 2 decimal places, `—` for non-finite values.
///
/// This is the display contract used by presentation layers; the library
/// itself only ever returns plain floats.
pub fn format_db(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "—".to_string()
    }
}
