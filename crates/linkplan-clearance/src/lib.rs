//! # linkplan-clearance
//!
//! Line-of-sight and first-Fresnel-zone clearance analysis for
//! point-to-point radio links over terrain profiles.
//!
//! Given a [`linkplan_profile::Profile`] and [`LinkParams`], [`compute`]
//! models the Earth-curvature-adjusted ground height and the line-of-sight
//! path between the two antennas, computes the first Fresnel zone radius at
//! every sample, finds the worst-clearance point against the 60% Fresnel
//! criterion, and derives the antenna height increases needed to clear it.
//!
//! ## Features
//!
//! - **Per-sample geometry**: curvature bulge, LOS interpolation, Fresnel
//!   radius and envelope, clearance margins.
//! - **Worst-point analysis**: pass/fail verdict, deficit, and three height
//!   adjustment suggestions (TX only, RX only, both equally).
//! - **Presentation**: plotting series accessors on [`ClearanceResult`] and
//!   a plain-text summary via [`render_summary`].
//!
//! ## Example
//!
//! ```
//! use linkplan_clearance::{compute, render_summary, LinkParams};
//! use linkplan_profile::Profile;
//!
//! let profile = Profile::parse("0,100\n1000,100\n2000,100\n").unwrap();
//! let params = LinkParams {
//!     tx_height_m: 30.0,
//!     rx_height_m: 30.0,
//!     ..LinkParams::default()
//! };
//!
//! let result = compute(&profile, &params).unwrap();
//! assert!(result.summary.passes);
//! println!("{}", render_summary(&result, &params));
//! ```

mod compute;
mod report;

pub use compute::{
    compute, ClearanceError, ClearanceResult, ClearanceSummary, HeightSuggestions, LinkParams,
    FRESNEL_CLEARANCE_FRACTION, MEAN_EARTH_RADIUS_M, SPEED_OF_LIGHT_M_S,
};
pub use report::{format_meters, render_summary};

// Re-export the profile types callers need to drive the engine.
pub use linkplan_profile::{Profile, ProfileError, ProfileSample};
