//! Rolling element placement, separator bore layout and cam dimensions.
//!
//! The ball/roller choice is resolved once into a [`RollingElement`], and the separator
//! hole follows from it as a [`HoleSpec`]. Nothing downstream branches on `use_balls`
//! again.

use crate::errors::GeometryError;
use crate::float_types::{Real, TAU};
use crate::orbit::{EccentricOrbit, polar_point};
use crate::params::WaveDriveParams;
use nalgebra::{Point2, Vector2};

/// Axial offset of the plane the separator holes are sketched on.
pub const HOLE_PLANE_OFFSET: Real = 0.1;

/// Axial offset of the rolling elements above the base plane, before tolerance.
pub const ELEMENT_PLANE_OFFSET: Real = 0.1;

/// Shape of the rolling elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RollingElement {
    /// Spherical element, produced by revolving a circle.
    Ball { radius: Real },
    /// Cylindrical element, produced by extruding a circle.
    Roller { radius: Real, height: Real },
}

impl RollingElement {
    pub const fn from_params(params: &WaveDriveParams) -> Self {
        if params.use_balls() {
            RollingElement::Ball {
                radius: params.roller_radius(),
            }
        } else {
            RollingElement::Roller {
                radius: params.roller_radius(),
                height: params.roller_height(),
            }
        }
    }

    #[inline]
    pub const fn radius(&self) -> Real {
        match *self {
            RollingElement::Ball { radius } | RollingElement::Roller { radius, .. } => radius,
        }
    }

    #[inline]
    pub const fn height(&self) -> Real {
        match *self {
            RollingElement::Ball { radius } => 2.0 * radius,
            RollingElement::Roller { height, .. } => height,
        }
    }

    /// The separator bore that carries this element.
    pub const fn hole_spec(&self, params: &WaveDriveParams) -> HoleSpec {
        let clearance = params.clearance_radius();
        match *self {
            RollingElement::Ball { .. } => HoleSpec::Round {
                center_radius: params.separator_outer_radius(),
                radius: clearance,
                depth: 2.0 * params.separator_thickness(),
            },
            RollingElement::Roller { height, .. } => HoleSpec::Rectangular {
                center_radius: params.separator_middle_radius(),
                half_width: clearance,
                half_height: params.separator_thickness() / 2.0,
                depth: height + 2.0 * params.roller_tolerance(),
            },
        }
    }
}

/// One representative separator hole, centred on +Y at `center_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoleSpec {
    /// Round bore for balls.
    Round {
        center_radius: Real,
        radius: Real,
        depth: Real,
    },
    /// Rectangular slot for rollers; `half_width` is tangential, `half_height` radial.
    Rectangular {
        center_radius: Real,
        half_width: Real,
        half_height: Real,
        depth: Real,
    },
}

impl HoleSpec {
    #[inline]
    pub const fn center_radius(&self) -> Real {
        match *self {
            HoleSpec::Round { center_radius, .. } | HoleSpec::Rectangular { center_radius, .. } => {
                center_radius
            },
        }
    }

    /// Tangential clearance around the element; the same for both variants.
    #[inline]
    pub const fn clearance_radius(&self) -> Real {
        match *self {
            HoleSpec::Round { radius, .. } => radius,
            HoleSpec::Rectangular { half_width, .. } => half_width,
        }
    }

    /// How deep the cut goes along the axis.
    #[inline]
    pub const fn depth(&self) -> Real {
        match *self {
            HoleSpec::Round { depth, .. } | HoleSpec::Rectangular { depth, .. } => depth,
        }
    }

    #[inline]
    pub fn center(&self) -> Point2<Real> {
        Point2::new(0.0, self.center_radius())
    }

    /// Outline of the hole rotated to pattern angle `theta`, as a closed ring.
    pub fn outline(&self, theta: Real, segments: usize) -> Vec<Point2<Real>> {
        let center = polar_point(self.center_radius(), theta);
        let mut ring: Vec<Point2<Real>> = match *self {
            HoleSpec::Round { radius, .. } => {
                let segments = segments.max(3);
                (0..segments)
                    .map(|i| center + polar_point(radius, TAU * (i as Real) / (segments as Real)).coords)
                    .collect()
            },
            HoleSpec::Rectangular {
                half_width,
                half_height,
                ..
            } => {
                let radial = polar_point(1.0, theta).coords;
                let tangential = Vector2::new(radial.y, -radial.x);
                [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
                    .iter()
                    .map(|&(t, r)| center + tangential * (t * half_width) + radial * (r * half_height))
                    .collect()
            },
        };
        ring.push(ring[0]);
        ring
    }
}

/// Replicates a feature evenly over a full turn about the drive axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularPattern {
    pub count: usize,
    /// Total sweep in radians
    pub sweep: Real,
    pub symmetric: bool,
}

impl CircularPattern {
    pub const fn full_turn(count: usize) -> Self {
        Self {
            count,
            sweep: TAU,
            symmetric: false,
        }
    }

    #[inline]
    pub fn sweep_degrees(&self) -> Real {
        self.sweep.to_degrees()
    }

    /// Instance angles `sweep·i/count`; a full non-symmetric turn never repeats the start.
    pub fn angles(&self) -> Vec<Real> {
        (0..self.count)
            .map(|i| self.sweep * (i as Real) / (self.count as Real))
            .collect()
    }

    /// Positions of a feature whose first instance sits at `radius` on +Y.
    pub fn place(&self, radius: Real) -> Vec<Point2<Real>> {
        self.angles().into_iter().map(|theta| polar_point(radius, theta)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorGeometry {
    pub inner_radius: Real,
    pub middle_radius: Real,
    pub outer_radius: Real,
    pub thickness: Real,
    /// Axial height of the separator ring
    pub height: Real,
    pub hole: HoleSpec,
    pub hole_plane_offset: Real,
    pub pattern: CircularPattern,
}

impl SeparatorGeometry {
    /// Centres of every hole instance after patterning.
    pub fn hole_centers(&self) -> Vec<Point2<Real>> {
        self.pattern.place(self.hole.center_radius())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamGeometry {
    pub shaft_radius: Real,
    pub cam_radius: Real,
    /// Offset of the cam centre from the axis, along +Y.
    pub eccentric_offset: Real,
    pub height: Real,
}

impl CamGeometry {
    #[inline]
    pub fn center(&self) -> Point2<Real> {
        Point2::new(0.0, self.eccentric_offset)
    }
}

/// Everything placed around the disk: rolling elements, separator and cam.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub roller_centers: Vec<Point2<Real>>,
    pub element: RollingElement,
    /// Axial offset of the rolling elements above the base plane.
    pub element_plane_offset: Real,
    pub separator: SeparatorGeometry,
    pub cam: CamGeometry,
}

/// Rolling element centres on the undeflected orbit at `θᵢ = 2π·i / rollers_number`.
///
/// # Errors
/// [`GeometryError::Domain`] if the orbit cannot be evaluated at some `θᵢ`.
pub fn roller_centers(params: &WaveDriveParams) -> Result<Vec<Point2<Real>>, GeometryError> {
    let orbit = EccentricOrbit::from_params(params);
    let count = params.rollers_number();
    (0..count)
        .map(|i| {
            let theta = TAU * (i as Real) / (count as Real);
            orbit.sample(theta).map(|sample| sample.center())
        })
        .collect()
}

pub const fn separator_geometry(params: &WaveDriveParams) -> SeparatorGeometry {
    SeparatorGeometry {
        inner_radius: params.separator_inner_radius(),
        middle_radius: params.separator_middle_radius(),
        outer_radius: params.separator_outer_radius(),
        thickness: params.separator_thickness(),
        height: params.extrusion_height(),
        hole: RollingElement::from_params(params).hole_spec(params),
        hole_plane_offset: HOLE_PLANE_OFFSET,
        pattern: CircularPattern::full_turn(params.rollers_number()),
    }
}

pub const fn cam_geometry(params: &WaveDriveParams) -> CamGeometry {
    CamGeometry {
        shaft_radius: params.shaft_radius(),
        cam_radius: params.cam_radius(),
        eccentric_offset: params.eccentricity(),
        height: params.extrusion_height(),
    }
}

/// Plan the full layout for `params`.
pub fn plan_layout(params: &WaveDriveParams) -> Result<Layout, GeometryError> {
    Ok(Layout {
        roller_centers: roller_centers(params)?,
        element: RollingElement::from_params(params),
        element_plane_offset: ELEMENT_PLANE_OFFSET + params.roller_tolerance(),
        separator: separator_geometry(params),
        cam: cam_geometry(params),
    })
}
