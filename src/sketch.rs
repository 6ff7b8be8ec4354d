//! Plan-view 2D outlines of every part of the drive, in the XY plane.
//!
//! These are the sketches a modelling host extrudes or revolves: the lobed disk cut
//! from its blank, the separator ring with its patterned holes, the cam with the input
//! shaft bore, and one circle per rolling element.

use crate::drive::WaveDrive;
use crate::float_types::{Real, TAU};
use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon as GeoPolygon};
use nalgebra::Point2;

/// Segments used for full circles unless a caller asks otherwise.
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 64;

/// Named plan-view regions of one wave drive.
#[derive(Debug, Clone)]
pub struct PlanSketch {
    pub disk: MultiPolygon<Real>,
    pub separator: MultiPolygon<Real>,
    pub cam: MultiPolygon<Real>,
    pub elements: MultiPolygon<Real>,
    /// Reference circle the lobed profile is cut from.
    pub blank_radius: Real,
}

impl PlanSketch {
    pub fn from_drive(drive: &WaveDrive) -> Self {
        Self::with_segments(drive, DEFAULT_CIRCLE_SEGMENTS)
    }

    pub fn with_segments(drive: &WaveDrive, segments: usize) -> Self {
        let params = drive.params();
        let layout = drive.layout();

        // disk: blank circle with the lobed profile as its hole
        let blank_radius = params.blank_radius();
        let blank = circle_ring(Point2::origin(), blank_radius, segments);
        let disk = MultiPolygon::new(vec![GeoPolygon::new(
            blank,
            vec![drive.profile().to_line_string()],
        )]);

        // separator: annulus minus the patterned holes
        let sep = &layout.separator;
        let annulus = MultiPolygon::new(vec![GeoPolygon::new(
            circle_ring(Point2::origin(), sep.outer_radius, segments),
            vec![circle_ring(Point2::origin(), sep.inner_radius, segments)],
        )]);
        let holes: MultiPolygon<Real> = sep
            .pattern
            .angles()
            .into_iter()
            .map(|theta| GeoPolygon::new(ring_from_points(&sep.hole.outline(theta, segments)), vec![]))
            .collect();
        let separator = annulus.difference(&holes);

        // cam: offset circle minus the shaft bore on the axis
        let cam_disc = MultiPolygon::new(vec![GeoPolygon::new(
            circle_ring(layout.cam.center(), layout.cam.cam_radius, segments),
            vec![],
        )]);
        let shaft = MultiPolygon::new(vec![GeoPolygon::new(
            circle_ring(Point2::origin(), layout.cam.shaft_radius, segments),
            vec![],
        )]);
        let cam = cam_disc.difference(&shaft);

        let element_radius = layout.element.radius();
        let elements = layout
            .roller_centers
            .iter()
            .map(|&center| GeoPolygon::new(circle_ring(center, element_radius, segments), vec![]))
            .collect();

        Self {
            disk,
            separator,
            cam,
            elements,
            blank_radius,
        }
    }

    /// Parts in drawing order, paired with a layer name.
    pub fn layers(&self) -> [(&'static str, &MultiPolygon<Real>); 4] {
        [
            ("disk", &self.disk),
            ("separator", &self.separator),
            ("cam", &self.cam),
            ("elements", &self.elements),
        ]
    }
}

/// Closed circle ring, counter-clockwise from +X.
pub fn circle_ring(center: Point2<Real>, radius: Real, segments: usize) -> LineString<Real> {
    let segments = segments.max(3);
    let mut coords: Vec<Coord<Real>> = (0..segments)
        .map(|i| {
            let theta = TAU * (i as Real) / (segments as Real);
            Coord {
                x: center.x + radius * theta.cos(),
                y: center.y + radius * theta.sin(),
            }
        })
        .collect();
    // close it
    coords.push(coords[0]);
    LineString::new(coords)
}

fn ring_from_points(points: &[Point2<Real>]) -> LineString<Real> {
    points.iter().map(|p| Coord { x: p.x, y: p.y }).collect()
}
