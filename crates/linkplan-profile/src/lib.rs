//! # linkplan-profile
//!
//! Terrain elevation profile parser for distance/elevation CSV exports.
//!
//! This crate turns raw CSV text into an ordered, distance-normalized
//! [`Profile`] suitable for line-of-sight clearance analysis.
//!
//! ## CSV format
//!
//! Comma-separated text with an optional header row. If the header contains
//! (case-insensitive, trimmed) `distance_m` and `elevation_m` column names,
//! those columns are used; otherwise the first column is distance and the
//! second is elevation. Distances and elevations are in meters.
//!
//! Malformed rows are skipped rather than failing the whole parse, since
//! stray blank or corrupt lines are common in exported terrain data. The
//! number of skipped rows is recorded on the returned [`Profile`].
//!
//! ## Example
//!
//! ```
//! use linkplan_profile::Profile;
//!
//! let csv = "distance_m,elevation_m\n0,120.5\n250,131.0\n500,118.2\n";
//! let profile = Profile::parse(csv).unwrap();
//!
//! assert_eq!(profile.len(), 3);
//! assert_eq!(profile.samples()[0].distance_m, 0.0);
//! assert_eq!(profile.path_length_m(), 500.0);
//! ```

mod error;

pub use error::ProfileError;

use tracing::{debug, warn};

/// A single terrain sample along the path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileSample {
    /// Distance from the start of the path in meters.
    pub distance_m: f64,
    /// Ground elevation above mean sea level in meters.
    pub elevation_m: f64,
}

/// An ordered terrain elevation profile.
///
/// Invariants, established by [`Profile::parse`]:
/// - at least 2 samples,
/// - distances non-decreasing,
/// - the first sample is at distance 0 (distances are normalized by
///   subtracting the minimum observed distance).
///
/// A `Profile` is immutable once constructed; callers replace it wholesale
/// when a new CSV is loaded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    samples: Vec<ProfileSample>,
    skipped_rows: usize,
}

impl Profile {
    /// Parse raw CSV text into a `Profile`.
    ///
    /// Rows that cannot be read as a numeric distance/elevation pair are
    /// skipped and counted, not treated as an overall error. Rows too short
    /// to cover both required column indices are skipped, and when a header
    /// row is present, rows with more fields than the header are skipped as
    /// well.
    ///
    /// # Errors
    ///
    /// - [`ProfileError::Empty`] if the text has no non-empty lines.
    /// - [`ProfileError::InsufficientSamples`] if fewer than 2 valid samples
    ///   remain after skipping.
    pub fn parse(text: &str) -> Result<Profile, ProfileError> {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.trim_end_matches('\r').trim())
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(ProfileError::Empty);
        }

        // Header detection: look for distance_m and elevation_m column names
        // in the first line. If both are present, their positions select the
        // columns and data starts at the second line.
        let header: Vec<String> = lines[0]
            .split(',')
            .map(|field| field.trim().to_lowercase())
            .collect();
        let header_cols = (
            header.iter().position(|f| f == "distance_m"),
            header.iter().position(|f| f == "elevation_m"),
        );
        let (distance_col, elevation_col, expected_fields, data_start) = match header_cols {
            (Some(d), Some(e)) => (d, e, Some(header.len()), 1),
            _ => (0, 1, None, 0),
        };

        let mut samples: Vec<ProfileSample> = Vec::with_capacity(lines.len() - data_start);
        let mut skipped_rows = 0;

        for &line in &lines[data_start..] {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();

            let covers_columns = fields.len() > distance_col.max(elevation_col);
            let shape_ok = covers_columns
                && expected_fields.map_or(true, |expected| fields.len() <= expected);
            if !shape_ok {
                debug!(line, "skipping row with unexpected field count");
                skipped_rows += 1;
                continue;
            }

            match (
                fields[distance_col].parse::<f64>(),
                fields[elevation_col].parse::<f64>(),
            ) {
                (Ok(distance_m), Ok(elevation_m)) => {
                    samples.push(ProfileSample {
                        distance_m,
                        elevation_m,
                    });
                }
                _ => {
                    debug!(line, "skipping non-numeric row");
                    skipped_rows += 1;
                }
            }
        }

        if skipped_rows > 0 {
            warn!(skipped_rows, "dropped malformed profile rows");
        }

        if samples.len() < 2 {
            return Err(ProfileError::InsufficientSamples {
                found: samples.len(),
            });
        }

        // Normalize so the path starts at distance 0, then order by distance.
        // This only reorders the given samples; no interpolation happens.
        let min_distance = samples
            .iter()
            .map(|s| s.distance_m)
            .fold(f64::INFINITY, f64::min);
        for sample in &mut samples {
            sample.distance_m -= min_distance;
        }
        samples.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));

        Ok(Profile {
            samples,
            skipped_rows,
        })
    }

    /// The samples in path order.
    pub fn samples(&self) -> &[ProfileSample] {
        &self.samples
    }

    /// Number of samples in the profile.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; a parsed profile has at least 2 samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total path length in meters (distance of the last sample).
    pub fn path_length_m(&self) -> f64 {
        self.samples[self.samples.len() - 1].distance_m
    }

    /// Number of malformed rows that were dropped during parsing.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Sample distances in meters, in path order.
    pub fn distances(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.distance_m)
    }

    /// Sample elevations in meters, in path order.
    pub fn elevations(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.elevation_m)
    }
}
