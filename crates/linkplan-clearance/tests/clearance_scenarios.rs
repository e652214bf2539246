//! End-to-end scenarios: CSV text through the parser, the clearance engine,
//! and the summary renderer.

use approx::assert_relative_eq;
use linkplan_clearance::{
    compute, render_summary, ClearanceError, LinkParams, Profile, ProfileError,
};

fn params(tx_height_m: f64, rx_height_m: f64) -> LinkParams {
    LinkParams {
        frequency_ghz: 5.8,
        k_factor: 1.333,
        tx_height_m,
        rx_height_m,
    }
}

#[test]
fn flat_path_with_masts_passes() {
    let csv = "distance_m,elevation_m\n0,100\n1000,100\n2000,100\n";
    let profile = Profile::parse(csv).unwrap();
    let result = compute(&profile, &params(30.0, 30.0)).unwrap();

    // Ground bulges slightly above 100 m at the midpoint; LOS is flat at
    // 130 m; clearance comfortably exceeds the Fresnel envelope.
    assert!(result.ground_elevation[1] > 100.0);
    assert_relative_eq!(result.los_elevation[1], 130.0);
    assert!(result.clearance[1] > 0.0);
    assert!(result.summary.passes);

    let text = render_summary(&result, &params(30.0, 30.0));
    assert!(text.contains("Result: PASS"));
}

#[test]
fn flat_path_with_zero_masts_fails_with_suggestions() {
    let csv = "distance_m,elevation_m\n0,100\n1000,100\n2000,100\n";
    let profile = Profile::parse(csv).unwrap();
    let result = compute(&profile, &params(0.0, 0.0)).unwrap();

    assert!(!result.summary.passes);
    assert!(result.summary.deficit_m > 0.0);

    let s = result.summary.suggestions;
    assert!(s.raise_tx_only_m.is_finite() && s.raise_tx_only_m > 0.0);
    assert!(s.raise_rx_only_m.is_finite() && s.raise_rx_only_m > 0.0);
    assert_eq!(s.raise_both_m, result.summary.deficit_m);

    let text = render_summary(&result, &params(0.0, 0.0));
    assert!(text.contains("Result: FAIL"));
    assert!(text.contains("Raise both:"));
}

#[test]
fn malformed_row_is_dropped_and_analysis_proceeds() {
    let csv = "distance_m,elevation_m\n0,10\n500,9999999,extra\n1000,12\n";
    let profile = Profile::parse(csv).unwrap();

    assert_eq!(profile.len(), 2);
    assert_eq!(profile.skipped_rows(), 1);

    let result = compute(&profile, &params(15.0, 15.0)).unwrap();
    assert_eq!(result.distance_m.len(), 2);
    assert_relative_eq!(result.summary.path_length_m, 1000.0);
}

#[test]
fn sparse_csv_is_rejected_before_compute() {
    let csv = "distance_m,elevation_m\n0,10\n";
    assert_eq!(
        Profile::parse(csv),
        Err(ProfileError::InsufficientSamples { found: 1 })
    );
}

#[test]
fn zero_length_path_is_degenerate() {
    let profile = Profile::parse("100,10\n100,20\n").unwrap();
    assert_eq!(
        compute(&profile, &LinkParams::default()),
        Err(ClearanceError::DegeneratePath)
    );
}

#[test]
fn raising_both_by_deficit_clears_the_worst_point() {
    let csv = "0,100\n600,118\n1000,95\n1600,122\n2400,100\n";
    let profile = Profile::parse(csv).unwrap();
    let base = params(1.0, 1.0);
    let result = compute(&profile, &base).unwrap();
    assert!(!result.summary.passes);

    let worst = result.summary.worst_index;
    let raised = params(
        base.tx_height_m + result.summary.suggestions.raise_both_m,
        base.rx_height_m + result.summary.suggestions.raise_both_m,
    );
    let after = compute(&profile, &raised).unwrap();

    // The previous worst point now meets the 60% criterion (up to float
    // rounding). Other points may still fail; that is the documented
    // limitation of the single-point suggestion.
    assert!(after.clearance_vs_60pct[worst] >= -1e-9);
}
