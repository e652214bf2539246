//! Per-sample clearance geometry and worst-point analysis.

use linkplan_profile::Profile;
use thiserror::Error;

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Mean Earth radius in meters, scaled by the k-factor to get the
/// effective radius used for the curvature bulge.
pub const MEAN_EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Fraction of the first Fresnel radius that must stay clear of terrain.
/// 60% is the common link-planning threshold.
pub const FRESNEL_CLEARANCE_FRACTION: f64 = 0.6;

/// Link parameters for a clearance computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkParams {
    /// Carrier frequency in GHz.
    pub frequency_ghz: f64,
    /// Effective-Earth k-factor (multiplier on the true Earth radius
    /// modeling atmospheric refraction). 4/3 is the standard atmosphere.
    pub k_factor: f64,
    /// Transmitter antenna height above ground at the path start (meters).
    pub tx_height_m: f64,
    /// Receiver antenna height above ground at the path end (meters).
    pub rx_height_m: f64,
}

impl Default for LinkParams {
    fn default() -> Self {
        Self {
            frequency_ghz: 5.8,
            k_factor: 4.0 / 3.0,
            tx_height_m: 10.0,
            rx_height_m: 10.0,
        }
    }
}

impl LinkParams {
    /// Validate the parameters, aggregating every violated constraint.
    fn validate(&self) -> Result<(), ClearanceError> {
        let mut problems: Vec<&str> = Vec::new();
        if !self.frequency_ghz.is_finite() || self.frequency_ghz <= 0.0 {
            problems.push("frequency must be finite and > 0 GHz");
        }
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            problems.push("k-factor must be finite and > 0");
        }
        if !self.tx_height_m.is_finite() || self.tx_height_m < 0.0 {
            problems.push("TX height must be finite and >= 0 m");
        }
        if !self.rx_height_m.is_finite() || self.rx_height_m < 0.0 {
            problems.push("RX height must be finite and >= 0 m");
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ClearanceError::InvalidParams(problems.join("; ")))
        }
    }

    /// Wavelength in meters for the configured frequency.
    pub fn wavelength_m(&self) -> f64 {
        SPEED_OF_LIGHT_M_S / (self.frequency_ghz * 1e9)
    }

    /// Effective Earth radius in meters for the configured k-factor.
    pub fn effective_earth_radius_m(&self) -> f64 {
        self.k_factor * MEAN_EARTH_RADIUS_M
    }
}

/// Errors that can occur during a clearance computation.
#[derive(Debug, Error, PartialEq)]
pub enum ClearanceError {
    /// The path has zero or negative length.
    #[error("Degenerate path: total distance must be > 0")]
    DegeneratePath,

    /// Sample geometry was inconsistent (a sample outside the path span).
    #[error("Invalid geometry at sample {index}")]
    InvalidGeometry {
        /// Index of the offending sample.
        index: usize,
    },

    /// One or more link parameters violated their constraints.
    #[error("Invalid link parameters: {0}")]
    InvalidParams(String),
}

/// Antenna height increases that bring the worst point up to 60% Fresnel
/// clearance.
///
/// Non-finite values mean the corresponding adjustment cannot achieve
/// clearance (raising one end has no effect at the opposite endpoint). All
/// fields are zero when the link already passes.
///
/// A suggested raise guarantees clearance only at the analyzed worst point;
/// after applying it, a different sample may become the new worst point.
/// Callers that apply a suggestion should recompute.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightSuggestions {
    /// Raise only the TX antenna by this many meters.
    pub raise_tx_only_m: f64,
    /// Raise only the RX antenna by this many meters.
    pub raise_rx_only_m: f64,
    /// Raise both antennas equally by this many meters.
    pub raise_both_m: f64,
}

impl HeightSuggestions {
    /// No adjustment needed (the link passes).
    pub const NONE: Self = Self {
        raise_tx_only_m: 0.0,
        raise_rx_only_m: 0.0,
        raise_both_m: 0.0,
    };
}

/// Summary of a clearance analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearanceSummary {
    /// Total path length in meters.
    pub path_length_m: f64,
    /// True when every sample meets the 60% Fresnel clearance criterion.
    pub passes: bool,
    /// Index of the worst-clearance sample (first occurrence on ties).
    pub worst_index: usize,
    /// Distance of the worst sample from the path start (meters).
    pub worst_distance_m: f64,
    /// LOS-to-ground clearance at the worst sample (meters).
    pub worst_clearance_m: f64,
    /// 60% Fresnel envelope half-width at the worst sample (meters).
    pub worst_envelope_m: f64,
    /// Clearance minus envelope at the worst sample (meters).
    pub worst_margin_m: f64,
    /// Additional vertical clearance needed at the worst sample (meters);
    /// zero when the link passes.
    pub deficit_m: f64,
    /// Height adjustments that close the deficit.
    pub suggestions: HeightSuggestions,
}

/// Result of a clearance computation.
///
/// All per-sample vectors are parallel to the input profile's samples. The
/// result is a plain value; it is never mutated after being returned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearanceResult {
    /// Sample distances from the path start (meters).
    pub distance_m: Vec<f64>,
    /// Earth-curvature-adjusted ground elevation (meters AMSL).
    pub ground_elevation: Vec<f64>,
    /// Line-of-sight elevation between the two antennas (meters AMSL).
    pub los_elevation: Vec<f64>,
    /// First Fresnel zone radius (meters).
    pub fresnel_radius: Vec<f64>,
    /// Lower edge of the 60% Fresnel envelope (meters AMSL).
    pub fresnel_lower: Vec<f64>,
    /// Upper edge of the 60% Fresnel envelope (meters AMSL).
    pub fresnel_upper: Vec<f64>,
    /// LOS elevation minus adjusted ground elevation (meters).
    pub clearance: Vec<f64>,
    /// Clearance minus the 60% Fresnel envelope (meters); negative values
    /// are obstructions.
    pub clearance_vs_60pct: Vec<f64>,
    /// Worst-point summary and height suggestions.
    pub summary: ClearanceSummary,
}

impl ClearanceResult {
    /// Ground elevation line series as `(distance, elevation)` pairs.
    pub fn ground_series(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.distance_m
            .iter()
            .copied()
            .zip(self.ground_elevation.iter().copied())
    }

    /// Line-of-sight line series as `(distance, elevation)` pairs.
    pub fn los_series(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.distance_m
            .iter()
            .copied()
            .zip(self.los_elevation.iter().copied())
    }

    /// Shaded Fresnel band as `(distance, lower, upper)` triples.
    pub fn fresnel_band(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        (0..self.distance_m.len())
            .map(|i| (self.distance_m[i], self.fresnel_lower[i], self.fresnel_upper[i]))
    }

    /// Marker series for every sample failing the 60% criterion, plotted at
    /// `(distance, ground_elevation)`.
    pub fn obstruction_points(&self) -> Vec<(f64, f64)> {
        (0..self.distance_m.len())
            .filter(|&i| self.clearance_vs_60pct[i] < 0.0)
            .map(|i| (self.distance_m[i], self.ground_elevation[i]))
            .collect()
    }
}

/// Compute line-of-sight and first-Fresnel-zone clearance along a terrain
/// profile.
///
/// Pure function: identical inputs always yield identical output, and
/// nothing is kept between calls.
///
/// # Errors
///
/// - [`ClearanceError::InvalidParams`] if `params` violates its constraints
///   (all violations reported together).
/// - [`ClearanceError::DegeneratePath`] if the path length is not positive.
/// - [`ClearanceError::InvalidGeometry`] if a sample lies outside the path
///   span (cannot happen for a [`Profile`] honoring its invariants).
pub fn compute(profile: &Profile, params: &LinkParams) -> Result<ClearanceResult, ClearanceError> {
    params.validate()?;

    let samples = profile.samples();
    let n = samples.len();
    let start = samples[0].distance_m;
    let total = samples[n - 1].distance_m - start;
    if total <= 0.0 {
        return Err(ClearanceError::DegeneratePath);
    }

    let wavelength = params.wavelength_m();
    let effective_radius = params.effective_earth_radius_m();
    let los_start = samples[0].elevation_m + params.tx_height_m;
    let los_end = samples[n - 1].elevation_m + params.rx_height_m;

    let mut distance_m = Vec::with_capacity(n);
    let mut ground_elevation = Vec::with_capacity(n);
    let mut los_elevation = Vec::with_capacity(n);
    let mut fresnel_radius = Vec::with_capacity(n);
    let mut fresnel_lower = Vec::with_capacity(n);
    let mut fresnel_upper = Vec::with_capacity(n);
    let mut clearance = Vec::with_capacity(n);
    let mut clearance_vs_60pct = Vec::with_capacity(n);

    let mut worst_index = 0;
    let mut worst_margin = f64::INFINITY;

    for (i, sample) in samples.iter().enumerate() {
        let d1 = sample.distance_m - start;
        let d2 = total - d1;
        // d1*d2 < 0 would mean a sample outside [start, end], which the
        // profile ordering rules out.
        if d1 * d2 < 0.0 {
            return Err(ClearanceError::InvalidGeometry { index: i });
        }

        let bulge = d1 * d2 / (2.0 * effective_radius);
        let ground = sample.elevation_m + bulge;

        // Weighted form so the endpoints reproduce the antenna elevations
        // exactly.
        let frac = d1 / total;
        let los = los_start * (1.0 - frac) + los_end * frac;

        let radius = (wavelength * d1 * d2 / total).sqrt();
        let envelope = FRESNEL_CLEARANCE_FRACTION * radius;
        let clear = los - ground;
        let margin = clear - envelope;

        // Strict less-than keeps the first occurrence on ties.
        if margin < worst_margin {
            worst_margin = margin;
            worst_index = i;
        }

        distance_m.push(d1);
        ground_elevation.push(ground);
        los_elevation.push(los);
        fresnel_radius.push(radius);
        fresnel_lower.push(los - envelope);
        fresnel_upper.push(los + envelope);
        clearance.push(clear);
        clearance_vs_60pct.push(margin);
    }

    let worst_clearance = clearance[worst_index];
    let worst_envelope = FRESNEL_CLEARANCE_FRACTION * fresnel_radius[worst_index];
    let passes = worst_margin >= 0.0;
    let deficit = (worst_envelope - worst_clearance).max(0.0);

    let suggestions = if deficit > 0.0 {
        // LOS is linear between the endpoints, so raising TX by dh lifts
        // sample i by dh*(1 - w_i) and raising RX lifts it by dh*w_i, where
        // w_i is the fractional position. Solving for the lift needed at
        // the worst point gives the raises below. raise_both lifts every
        // point by at least the deficit.
        let rx_weight = distance_m[worst_index] / total;
        let tx_weight = 1.0 - rx_weight;
        HeightSuggestions {
            raise_tx_only_m: if tx_weight > 0.0 {
                deficit / tx_weight
            } else {
                f64::INFINITY
            },
            raise_rx_only_m: if rx_weight > 0.0 {
                deficit / rx_weight
            } else {
                f64::INFINITY
            },
            raise_both_m: deficit,
        }
    } else {
        HeightSuggestions::NONE
    };

    let summary = ClearanceSummary {
        path_length_m: total,
        passes,
        worst_index,
        worst_distance_m: distance_m[worst_index],
        worst_clearance_m: worst_clearance,
        worst_envelope_m: worst_envelope,
        worst_margin_m: worst_margin,
        deficit_m: deficit,
        suggestions,
    };

    Ok(ClearanceResult {
        distance_m,
        ground_elevation,
        los_elevation,
        fresnel_radius,
        fresnel_lower,
        fresnel_upper,
        clearance,
        clearance_vs_60pct,
        summary,
    })
}
