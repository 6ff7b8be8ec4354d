//! Test support library
//! Provides the reference drive and small helpers shared by the integration tests.

#![allow(dead_code)]

use wavedrive::{
    WaveDriveInputs, WaveDriveParams,
    float_types::Real,
};

/// The reference drive: 17 balls of diameter 6 on a 75 cycloid.
pub fn reference_inputs() -> WaveDriveInputs {
    WaveDriveInputs {
        roller_diameter: 6.0,
        rollers_number: 17,
        use_balls: true,
        roller_height: 6.0,
        use_minimal_diameter: false,
        cycloid_diameter: 75.0,
        shaft_diameter: 5.0,
        roller_tolerance: 0.1,
    }
}

pub fn reference_params() -> WaveDriveParams {
    WaveDriveParams::new(&reference_inputs()).expect("reference inputs are valid")
}

/// Same drive with cylindrical rollers instead of balls.
pub fn roller_params() -> WaveDriveParams {
    WaveDriveParams::new(&WaveDriveInputs {
        use_balls: false,
        ..reference_inputs()
    })
    .expect("roller inputs are valid")
}

pub fn params_with(rollers_number: usize, cycloid_diameter: Real) -> WaveDriveParams {
    WaveDriveParams::new(&WaveDriveInputs {
        rollers_number,
        cycloid_diameter,
        ..reference_inputs()
    })
    .expect("inputs are valid")
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Difference of two angles folded into `(-π, π]`.
pub fn angle_diff(a: Real, b: Real) -> Real {
    use wavedrive::float_types::{PI, TAU};
    let mut d = (a - b) % TAU;
    if d > PI {
        d -= TAU;
    } else if d <= -PI {
        d += TAU;
    }
    d
}
