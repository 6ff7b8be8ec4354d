mod support;

use wavedrive::{
    FeasibilityReport, WaveDriveInputs, WaveDriveParams, is_feasible,
};

use crate::support::{approx_eq, params_with, reference_inputs, reference_params};

#[test]
fn reference_drive_is_feasible() {
    let params = reference_params();
    assert!(is_feasible(&params));

    let report = FeasibilityReport::evaluate(&params);
    assert!(report.feasible);
    assert!(approx_eq(report.internal_radius, 72.6, 1e-12));
    assert!(approx_eq(report.min_cycloid_radius, 35.589, 1e-3));
    assert!(approx_eq(report.margin, 72.6 - params.min_cycloid_radius(), 1e-12));
    assert!(report.shaft_clears_cam);
}

#[test]
fn gate_matches_internal_radius_comparison() {
    for rollers in [3, 5, 17, 40] {
        for diameter in [10.0, 25.0, 40.0, 75.0, 150.0] {
            let params = params_with(rollers, diameter);
            assert_eq!(
                is_feasible(&params),
                params.internal_radius() >= params.min_cycloid_radius(),
            );
        }
    }
}

#[test]
fn growing_the_cycloid_never_breaks_feasibility() {
    for rollers in [5, 17, 33] {
        let mut seen_feasible = false;
        let mut diameter = 5.0;
        while diameter < 300.0 {
            let feasible = is_feasible(&params_with(rollers, diameter));
            assert!(
                !(seen_feasible && !feasible),
                "{rollers} rollers: feasible below {diameter} but not at it"
            );
            seen_feasible |= feasible;
            diameter += 0.25;
        }
        assert!(seen_feasible);
    }
}

#[test]
fn threshold_diameter_is_the_boundary() {
    let params = reference_params();
    let threshold = FeasibilityReport::required_cycloid_diameter(&params);
    assert!(is_feasible(&params_with(17, threshold + 1e-9)));
    assert!(!is_feasible(&params_with(17, threshold - 1e-6)));
}

#[test]
fn undersized_drive_reports_negative_margin() {
    let params = params_with(17, 30.0);
    let report = FeasibilityReport::evaluate(&params);
    assert!(!report.feasible);
    assert!(report.margin < 0.0);
}

#[test]
fn minimal_diameter_substitute_is_feasible() {
    let params = WaveDriveParams::new(&WaveDriveInputs {
        use_minimal_diameter: true,
        cycloid_diameter: 10.0,
        ..reference_inputs()
    })
    .unwrap();
    assert!(!is_feasible(&params));
    assert!(is_feasible(&params.effective()));
}

#[test]
fn oversized_shaft_is_advisory_only() {
    let params = WaveDriveParams::new(&WaveDriveInputs {
        shaft_diameter: 200.0,
        ..reference_inputs()
    })
    .unwrap();
    let report = FeasibilityReport::evaluate(&params);
    assert!(!report.shaft_clears_cam);
    assert!(report.feasible);
}
