use crate::float_types::Real;
use crate::sketch::PlanSketch;
use geo::{BoundingRect, CoordsIter, LineString, MultiPolygon};
use svg::Document;
use svg::node::element::{Group, Path};

/// Margin around the drawing, as a fraction of its largest extent.
const VIEW_MARGIN: Real = 0.05;

impl PlanSketch {
    /// Render every part as a filled `<path>` inside a `<g id="...">` layer.
    ///
    /// Y is flipped so the drawing reads the same way as the XY plane.
    pub fn to_svg(&self) -> String {
        let (min_x, min_y, width, height) = self.view_box();
        let mut document = Document::new()
            .set("viewBox", format!("{min_x} {min_y} {width} {height}"))
            .set("width", format!("{width}"))
            .set("height", format!("{height}"));

        let mut flipped = Group::new().set("transform", "scale(1,-1)");
        for (name, parts) in self.layers() {
            let layer = Group::new().set("id", name).add(
                Path::new()
                    .set("d", path_data(parts))
                    .set("fill-rule", "evenodd")
                    .set("fill", "none")
                    .set("stroke", "black")
                    .set("stroke-width", format!("{}", width / 1000.0)),
            );
            flipped = flipped.add(layer);
        }
        document = document.add(flipped);
        document.to_string()
    }

    /// `(min_x, min_y, width, height)` of the flipped drawing.
    fn view_box(&self) -> (Real, Real, Real, Real) {
        let extent = self
            .layers()
            .iter()
            .filter_map(|(_, parts)| parts.bounding_rect())
            .fold(self.blank_radius, |acc, rect| {
                acc.max(rect.min().x.abs())
                    .max(rect.min().y.abs())
                    .max(rect.max().x.abs())
                    .max(rect.max().y.abs())
            });
        let half = extent * (1.0 + VIEW_MARGIN);
        (-half, -half, 2.0 * half, 2.0 * half)
    }
}

fn path_data(parts: &MultiPolygon<Real>) -> String {
    let mut d = String::new();
    for polygon in parts {
        push_ring(&mut d, polygon.exterior());
        for interior in polygon.interiors() {
            push_ring(&mut d, interior);
        }
    }
    d
}

fn push_ring(d: &mut String, ring: &LineString<Real>) {
    for (i, c) in ring.coords_iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{command}{:.4},{:.4} ", c.x, c.y));
    }
    d.push_str("Z ");
}
