//! End-to-end evaluation: inputs → parameters → feasibility → profile and layout.

use crate::errors::{GeometryError, WaveDriveError};
use crate::feasibility::FeasibilityReport;
use crate::float_types::Real;
use crate::layout::{CamGeometry, Layout, SeparatorGeometry, plan_layout};
use crate::params::{WaveDriveInputs, WaveDriveParams};
use crate::profile::{Profile, generate_profile};
use nalgebra::Point2;

/// Every output the model-construction side consumes for one parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveDrive {
    params: WaveDriveParams,
    profile: Profile,
    layout: Layout,
}

impl WaveDrive {
    /// Generate the disk profile and layout for `params` as given.
    ///
    /// This does not apply the minimal-diameter substitution nor the feasibility gate;
    /// use [`evaluate`] for the checked pipeline.
    pub fn build(params: &WaveDriveParams) -> Result<Self, GeometryError> {
        Ok(Self {
            params: params.clone(),
            profile: generate_profile(params)?,
            layout: plan_layout(params)?,
        })
    }

    #[inline]
    pub const fn params(&self) -> &WaveDriveParams {
        &self.params
    }

    #[inline]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    #[inline]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn profile_points(&self) -> &[Point2<Real>] {
        self.profile.points()
    }

    pub fn roller_centers(&self) -> &[Point2<Real>] {
        &self.layout.roller_centers
    }

    pub const fn separator(&self) -> &SeparatorGeometry {
        &self.layout.separator
    }

    pub const fn cam(&self) -> &CamGeometry {
        &self.layout.cam
    }

    pub const fn extrusion_height(&self) -> Real {
        self.params.extrusion_height()
    }

    pub const fn roller_height(&self) -> Real {
        self.params.roller_height()
    }

    /// Label for the assembled component, named after the reduction ratio.
    pub fn component_name(&self) -> String {
        format!("RollerWaveDrive-1-to-{}", self.params.rollers_number())
    }
}

/// Result of one interactive evaluation.
///
/// `drive` is only present when the parameter set passed the feasibility gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub params: WaveDriveParams,
    pub feasibility: FeasibilityReport,
    pub drive: Option<WaveDrive>,
}

impl Evaluation {
    #[inline]
    pub const fn is_feasible(&self) -> bool {
        self.feasibility.feasible
    }
}

/// Validate `inputs`, apply the minimal-diameter substitution, gate on feasibility and,
/// when feasible, generate the profile and layout.
///
/// # Errors
/// [`WaveDriveError::Parameter`] for rejected inputs. A [`WaveDriveError::Geometry`] can only
/// surface for parameter sets that passed the gate yet still leave the orbit undefined.
pub fn evaluate(inputs: &WaveDriveInputs) -> Result<Evaluation, WaveDriveError> {
    let params = WaveDriveParams::new(inputs)?.effective();
    let feasibility = FeasibilityReport::evaluate(&params);

    tracing::debug!(
        rollers = params.rollers_number(),
        eccentricity = params.eccentricity(),
        cycloid_diameter = params.cycloid_diameter(),
        internal_radius = feasibility.internal_radius,
        min_cycloid_radius = feasibility.min_cycloid_radius,
        "evaluating wave drive"
    );

    if !feasibility.feasible {
        tracing::warn!(
            margin = feasibility.margin,
            "cycloid diameter too small for {} rollers of diameter {}",
            params.rollers_number(),
            params.roller_diameter()
        );
        return Ok(Evaluation {
            params,
            feasibility,
            drive: None,
        });
    }
    if !feasibility.shaft_clears_cam {
        tracing::warn!(
            shaft_radius = params.shaft_radius(),
            cam_radius = params.cam_radius(),
            "input shaft bore reaches past the cam wall"
        );
    }

    let drive = WaveDrive::build(&params)?;
    Ok(Evaluation {
        params,
        feasibility,
        drive: Some(drive),
    })
}
