//! Feasibility gate for a parameter set.
//!
//! A single check decides whether the disk is large enough for the requested rollers:
//! `internal_radius ≥ min_cycloid_radius`. Infeasibility is reported as data, never as an
//! error, so an interactive host can keep re-evaluating on every input change and simply
//! withhold confirmation while the result is `false`.

use crate::float_types::Real;
use crate::params::WaveDriveParams;

/// Whether `params` leave room for the requested roller count and size.
#[inline]
pub fn is_feasible(params: &WaveDriveParams) -> bool {
    params.internal_radius() >= params.min_cycloid_radius()
}

/// Outcome of the feasibility check together with the numbers that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityReport {
    pub feasible: bool,
    pub internal_radius: Real,
    pub min_cycloid_radius: Real,
    /// `internal_radius − min_cycloid_radius`; negative when infeasible.
    pub margin: Real,
    /// Advisory only: the shaft bore stays inside `cam_radius − eccentricity`.
    pub shaft_clears_cam: bool,
}

impl FeasibilityReport {
    pub fn evaluate(params: &WaveDriveParams) -> Self {
        let internal_radius = params.internal_radius();
        let min_cycloid_radius = params.min_cycloid_radius();
        Self {
            feasible: is_feasible(params),
            internal_radius,
            min_cycloid_radius,
            margin: internal_radius - min_cycloid_radius,
            shaft_clears_cam: params.shaft_radius() < params.cam_radius() - params.eccentricity(),
        }
    }

    /// Smallest `cycloid_diameter` that passes the gate for otherwise unchanged inputs.
    pub fn required_cycloid_diameter(params: &WaveDriveParams) -> Real {
        params.min_cycloid_radius() + 2.0 * params.eccentricity()
    }
}
