//! **Eccentric lobe orbit**
//!
//! Both the disk outline and the rolling-element placement are built on the same
//! N-lobed eccentric orbit. For a polar angle θ (measured clockwise from +Y):
//!
//! ```text
//! S(θ)  = √((r + R)² − (E·sin(Nθ))²)
//! l(θ)  = E·cos(Nθ) + S(θ)
//! ξ(θ)  = atan2(E·N·sin(Nθ), S(θ))
//! ```
//!
//! where `r` is the rolling element radius, `R` the cam radius, `E` the eccentricity
//! and `N` the lobe count. `l` is the distance from the axis to the rolling element
//! centre; `ξ` is the angle between the radial direction and the contact normal, used
//! to push the profile point out by `r` along that normal.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::params::WaveDriveParams;
use nalgebra::Point2;

/// Point at `radius` from the origin in direction `theta`, measured clockwise from +Y.
#[inline]
pub fn polar_point(radius: Real, theta: Real) -> Point2<Real> {
    Point2::new(radius * theta.sin(), radius * theta.cos())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EccentricOrbit {
    lobes: usize,
    eccentricity: Real,
    element_radius: Real,
    cam_radius: Real,
}

/// One evaluation of the orbit at angle `theta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSample {
    pub theta: Real,
    pub s: Real,
    /// Undeflected orbit radius `l(θ)`
    pub radius: Real,
    /// Contact normal deflection `ξ(θ)`
    pub xi: Real,
}

impl EccentricOrbit {
    pub const fn new(lobes: usize, eccentricity: Real, element_radius: Real, cam_radius: Real) -> Self {
        Self {
            lobes,
            eccentricity,
            element_radius,
            cam_radius,
        }
    }

    pub const fn from_params(params: &WaveDriveParams) -> Self {
        Self::new(
            params.lobe_count(),
            params.eccentricity(),
            params.roller_radius(),
            params.cam_radius(),
        )
    }

    #[inline]
    pub const fn lobes(&self) -> usize {
        self.lobes
    }

    #[inline]
    pub const fn element_radius(&self) -> Real {
        self.element_radius
    }

    /// Evaluate the orbit at `theta`.
    ///
    /// # Errors
    /// [`GeometryError::Domain`] when `(r + R)² < (E·sin(Nθ))²`.
    pub fn sample(&self, theta: Real) -> Result<OrbitSample, GeometryError> {
        let n = self.lobes as Real;
        let (sin_n, cos_n) = (n * theta).sin_cos();
        let reach = self.element_radius + self.cam_radius;
        let radicand = reach * reach - (self.eccentricity * sin_n).powi(2);
        if radicand < 0.0 {
            return Err(GeometryError::Domain { theta, radicand });
        }
        let s = radicand.sqrt();

        Ok(OrbitSample {
            theta,
            s,
            radius: self.eccentricity * cos_n + s,
            xi: (self.eccentricity * n * sin_n).atan2(s),
        })
    }
}

impl OrbitSample {
    /// Rolling element centre: the bare orbit radius without contact deflection.
    #[inline]
    pub fn center(&self) -> Point2<Real> {
        polar_point(self.radius, self.theta)
    }

    /// Profile point: the centre pushed out by `offset` along the deflected contact normal.
    #[inline]
    pub fn contact_point(&self, offset: Real) -> Point2<Real> {
        self.center() + polar_point(offset, self.theta + self.xi).coords
    }
}
