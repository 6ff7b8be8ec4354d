mod support;

use wavedrive::{
    GeometryError, WaveDriveInputs, WaveDriveParams,
    float_types::{EPSILON, TAU},
    profile::generate_profile,
};
use geo::Area;

use crate::support::{approx_eq, params_with, reference_inputs, reference_params, roller_params};

#[test]
fn sample_count_and_closure() {
    let profile = generate_profile(&reference_params()).unwrap();
    assert_eq!(profile.len(), 145);
    assert!(profile.is_closed());
    let points = profile.points();
    assert_eq!(points[0], points[144]);
    assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn one_radial_maximum_per_lobe() {
    for (rollers, diameter) in [(17, 75.0), (5, 40.0), (11, 60.0), (30, 130.0)] {
        let params = params_with(rollers, diameter);
        let profile = generate_profile(&params).unwrap();
        assert_eq!(
            profile.count_radial_maxima(EPSILON),
            rollers + 1,
            "{rollers} rollers should give {} lobes",
            rollers + 1
        );
    }
}

#[test]
fn radial_maxima_use_the_given_tolerance() {
    let profile = generate_profile(&reference_params()).unwrap();
    let lobes = profile.count_radial_maxima(EPSILON);
    assert_eq!(lobes, 18);
    assert_eq!(profile.count_radial_maxima(EPSILON), lobes);
    // a tolerance wider than the whole radial swing flattens every lobe
    let swing = profile.max_radius() - profile.min_radius();
    assert_eq!(profile.count_radial_maxima(2.0 * swing), 0);
}

#[test]
fn lobe_peaks_sit_on_the_sampling_grid() {
    let params = reference_params();
    let profile = generate_profile(&params).unwrap();
    let radii = profile.radii();
    // peak radius: l = E + (r + R), pushed out by r along the radial direction
    let peak = params.eccentricity() + params.roller_radius() + params.cam_radius() + params.roller_radius();
    for k in 0..params.lobe_count() {
        assert!(approx_eq(radii[k * 8], peak, 1e-9));
    }
    assert!(approx_eq(profile.max_radius(), peak, 1e-9));
    assert!(profile.min_radius() < peak - params.eccentricity());
}

#[test]
fn first_sample_matches_closed_form() {
    let params = reference_params();
    let profile = generate_profile(&params).unwrap();

    let (r, e, n, cam) = (3.0, 1.2, 18.0, 67.8);
    let theta = TAU / 144.0;
    let s = ((r + cam) * (r + cam) - (e * (n * theta).sin()).powi(2)).sqrt();
    let l = e * (n * theta).cos() + s;
    let xi = (e * n * (n * theta).sin()).atan2(s);
    let x = l * theta.sin() + r * (theta + xi).sin();
    let y = l * theta.cos() + r * (theta + xi).cos();

    let p = profile.points()[1];
    assert!(approx_eq(p.x, x, 1e-9));
    assert!(approx_eq(p.y, y, 1e-9));
}

#[test]
fn profile_is_bit_identical_across_calls() {
    let a = generate_profile(&reference_params()).unwrap();
    let b = generate_profile(&reference_params()).unwrap();
    assert_eq!(a, b);
    for (p, q) in a.points().iter().zip(b.points()) {
        assert_eq!(p.x.to_bits(), q.x.to_bits());
        assert_eq!(p.y.to_bits(), q.y.to_bits());
    }
}

#[test]
fn profile_does_not_depend_on_element_shape() {
    let balls = generate_profile(&reference_params()).unwrap();
    let rollers = generate_profile(&roller_params()).unwrap();
    assert_eq!(balls, rollers);
}

#[test]
fn feasible_profile_is_simple() {
    let profile = generate_profile(&reference_params()).unwrap();
    assert!(profile.is_simple());

    let polygon = profile.to_polygon();
    let area = polygon.unsigned_area();
    let (rmin, rmax) = (profile.min_radius(), profile.max_radius());
    assert!(area > std::f64::consts::PI * rmin * rmin);
    assert!(area < std::f64::consts::PI * rmax * rmax);
}

#[test]
fn negative_radicand_is_a_domain_error() {
    // r + R collapses to zero, so (E·sin(Nθ))² dominates from the second sample on
    let params = WaveDriveParams::new(&WaveDriveInputs {
        cycloid_diameter: 4.2,
        ..reference_inputs()
    })
    .unwrap();
    match generate_profile(&params) {
        Err(GeometryError::Domain { radicand, .. }) => assert!(radicand < 0.0),
        other => panic!("expected a domain error, got {other:?}"),
    }
}

#[test]
fn resolution_scales_with_lobes() {
    for rollers in [3, 8, 24] {
        let params = params_with(rollers, 200.0);
        let profile = generate_profile(&params).unwrap();
        assert_eq!(profile.len(), 8 * (rollers + 1) + 1);
    }
}
