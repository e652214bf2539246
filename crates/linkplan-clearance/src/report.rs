//! Plain-text summary rendering for clearance results.

use crate::compute::{ClearanceResult, LinkParams};
use std::fmt::Write;

/// Format a length in meters to 2 decimal places, `N/A` for non-finite
/// values (a suggestion that cannot be achieved by that adjustment).
pub fn format_meters(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2} m")
    } else {
        "N/A".to_string()
    }
}

/// Render a human-readable summary of a clearance analysis.
///
/// Includes the link parameters used, the worst-point statistics, the
/// `PASS`/`FAIL` verdict, and on failure the three suggested antenna
/// raises.
pub fn render_summary(result: &ClearanceResult, params: &LinkParams) -> String {
    let s = &result.summary;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Path length: {:.3} km", s.path_length_m / 1000.0);
    let _ = writeln!(out, "Frequency: {:.3} GHz", params.frequency_ghz);
    let _ = writeln!(out, "k-factor: {:.3}", params.k_factor);
    let _ = writeln!(
        out,
        "Antenna heights: TX {} / RX {}",
        format_meters(params.tx_height_m),
        format_meters(params.rx_height_m)
    );
    let _ = writeln!(out, "Worst point: {} from TX", format_meters(s.worst_distance_m));
    let _ = writeln!(out, "  Clearance: {}", format_meters(s.worst_clearance_m));
    let _ = writeln!(out, "  60% Fresnel envelope: {}", format_meters(s.worst_envelope_m));
    let _ = writeln!(out, "  Margin: {}", format_meters(s.worst_margin_m));
    let _ = writeln!(out, "Result: {}", if s.passes { "PASS" } else { "FAIL" });

    if !s.passes {
        let sg = &s.suggestions;
        let _ = writeln!(out, "Suggested raises for 60% Fresnel clearance:");
        let _ = writeln!(out, "  Raise TX only: {}", format_meters(sg.raise_tx_only_m));
        let _ = writeln!(out, "  Raise RX only: {}", format_meters(sg.raise_rx_only_m));
        let _ = writeln!(out, "  Raise both: {}", format_meters(sg.raise_both_m));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{compute, LinkParams};
    use linkplan_profile::Profile;

    fn flat_profile() -> Profile {
        Profile::parse("0,100\n1000,100\n2000,100\n").unwrap()
    }

    #[test]
    fn test_render_passing_link() {
        let params = LinkParams {
            tx_height_m: 30.0,
            rx_height_m: 30.0,
            ..LinkParams::default()
        };
        let result = compute(&flat_profile(), &params).unwrap();
        let text = render_summary(&result, &params);

        assert!(text.contains("Path length: 2.000 km"));
        assert!(text.contains("Result: PASS"));
        assert!(!text.contains("Suggested raises"));
    }

    #[test]
    fn test_render_failing_link_includes_suggestions() {
        let params = LinkParams {
            tx_height_m: 0.0,
            rx_height_m: 0.0,
            ..LinkParams::default()
        };
        let result = compute(&flat_profile(), &params).unwrap();
        let text = render_summary(&result, &params);

        assert!(text.contains("Result: FAIL"));
        assert!(text.contains("Raise TX only:"));
        assert!(text.contains("Raise RX only:"));
        assert!(text.contains("Raise both:"));
    }

    #[test]
    fn test_render_non_finite_suggestion_as_na() {
        let params = LinkParams {
            tx_height_m: 0.0,
            rx_height_m: 0.0,
            ..LinkParams::default()
        };
        let mut result = compute(&flat_profile(), &params).unwrap();
        result.summary.suggestions.raise_tx_only_m = f64::INFINITY;
        let text = render_summary(&result, &params);

        assert!(text.contains("Raise TX only: N/A"));
    }

    #[test]
    fn test_format_meters() {
        assert_eq!(format_meters(1.2345), "1.23 m");
        assert_eq!(format_meters(0.0), "0.00 m");
        assert_eq!(format_meters(f64::INFINITY), "N/A");
        assert_eq!(format_meters(f64::NAN), "N/A");
    }
}
