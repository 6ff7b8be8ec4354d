//! **Lobed disk profile**
//!
//! Samples the closed outline of the cycloidal disk that the rolling elements track.
//! The outline is the eccentric orbit (see [`orbit`](crate::orbit)) offset by the rolling
//! element radius along the contact normal, a peritrochoid-family curve with one convex
//! lobe per `lobe_count`.
//!
//! ## Sampling
//! ```text
//! θᵢ = 2π·i / resolution,  i ∈ {0, …, resolution − 1}
//! Pᵢ = l(θᵢ)·(sin θᵢ, cos θᵢ) + r·(sin(θᵢ + ξᵢ), cos(θᵢ + ξᵢ))
//! ```
//! and a copy of `P₀` closes the loop, so the polyline holds `resolution + 1` points.
//! Evaluation is deterministic: identical parameters give bit-identical points.

use crate::errors::GeometryError;
use crate::float_types::{Real, TAU};
use crate::orbit::EccentricOrbit;
use crate::params::WaveDriveParams;
use geo::{Coord, Line, LineString, Polygon as GeoPolygon};
use geo::line_intersection::{LineIntersection, line_intersection};
use nalgebra::Point2;

/// Closed, ordered outline of the lobed disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<Point2<Real>>,
}

/// Sample the disk outline for `params`.
///
/// Callers are expected to run the feasibility check first.
///
/// # Errors
/// [`GeometryError::Domain`] if the orbit radicand goes negative at any sample, and
/// [`GeometryError::NonFiniteCoordinate`] if a coordinate is not finite.
pub fn generate_profile(params: &WaveDriveParams) -> Result<Profile, GeometryError> {
    let orbit = EccentricOrbit::from_params(params);
    let resolution = params.resolution();
    let offset = orbit.element_radius();

    let mut points = Vec::with_capacity(resolution + 1);
    for i in 0..resolution {
        let theta = TAU * (i as Real) / (resolution as Real);
        let point = orbit.sample(theta)?.contact_point(offset);
        if !(point.x.is_finite() && point.y.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate { index: i });
        }
        points.push(point);
    }
    // close it
    points.push(points[0]);

    tracing::trace!(samples = points.len(), lobes = orbit.lobes(), "sampled disk profile");
    Ok(Profile { points })
}

impl Profile {
    #[inline]
    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last points are bit-identical.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Distinct samples, without the closing duplicate.
    fn ring(&self) -> &[Point2<Real>] {
        &self.points[..self.points.len().saturating_sub(1)]
    }

    /// Distance of every distinct sample from the axis.
    pub fn radii(&self) -> Vec<Real> {
        self.ring().iter().map(|p| p.coords.norm()).collect()
    }

    pub fn max_radius(&self) -> Real {
        self.radii().into_iter().fold(0.0, Real::max)
    }

    pub fn min_radius(&self) -> Real {
        self.radii().into_iter().fold(Real::INFINITY, Real::min)
    }

    /// Count of local maxima of the radius along the closed ring; one per lobe.
    ///
    /// Differences below `tol` count as flat; a flat run counts once. [`EPSILON`] suits
    /// double-precision profiles.
    ///
    /// [`EPSILON`]: crate::float_types::EPSILON
    pub fn count_radial_maxima(&self, tol: Real) -> usize {
        let radii = self.radii();
        let n = radii.len();
        if n < 3 {
            return 0;
        }
        (0..n)
            .filter(|&i| {
                let prev = radii[(i + n - 1) % n];
                let next = radii[(i + 1) % n];
                radii[i] - prev > tol && radii[i] - next >= -tol
            })
            .count()
    }

    /// True when no two non-adjacent edges of the outline intersect.
    pub fn is_simple(&self) -> bool {
        let ring = self.ring();
        let n = ring.len();
        if n < 3 {
            return false;
        }
        let edges: Vec<Line<Real>> = (0..n)
            .map(|i| Line::new(to_coord(&ring[i]), to_coord(&ring[(i + 1) % n])))
            .collect();

        for i in 0..n {
            for j in (i + 2)..n {
                // first and last edges share the closing vertex
                if i == 0 && j == n - 1 {
                    continue;
                }
                match line_intersection(edges[i], edges[j]) {
                    None => {},
                    Some(LineIntersection::SinglePoint { .. })
                    | Some(LineIntersection::Collinear { .. }) => return false,
                }
            }
        }
        true
    }

    pub fn to_line_string(&self) -> LineString<Real> {
        self.points.iter().map(to_coord).collect()
    }

    /// The region enclosed by the outline.
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        GeoPolygon::new(self.to_line_string(), vec![])
    }
}

#[inline]
fn to_coord(p: &Point2<Real>) -> Coord<Real> {
    Coord { x: p.x, y: p.y }
}
