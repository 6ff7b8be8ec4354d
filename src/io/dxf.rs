use crate::float_types::Real;
use crate::io::IoError;
use crate::sketch::PlanSketch;
use dxf::Drawing;
use dxf::entities::{Entity, EntityType, Line};
use geo::{CoordsIter, LineString};

impl PlanSketch {
    /// Export the plan view as a DXF drawing with one layer per part.
    ///
    /// Every ring edge becomes a `LINE` entity on the `disk`, `separator`, `cam` or
    /// `elements` layer.
    pub fn to_dxf(&self) -> Result<Vec<u8>, IoError> {
        let mut drawing = Drawing::new();

        for (name, parts) in self.layers() {
            for polygon in parts {
                add_ring(&mut drawing, name, polygon.exterior());
                for interior in polygon.interiors() {
                    add_ring(&mut drawing, name, interior);
                }
            }
        }

        let mut buffer = Vec::new();
        drawing.save(&mut buffer)?;
        Ok(buffer)
    }
}

fn add_ring(drawing: &mut Drawing, layer: &str, ring: &LineString<Real>) {
    let coords: Vec<_> = ring.coords_iter().collect();
    for pair in coords.windows(2) {
        let line = Line::new(
            dxf::Point::new(pair[0].x, pair[0].y, 0.0),
            dxf::Point::new(pair[1].x, pair[1].y, 0.0),
        );
        let mut entity = Entity::new(EntityType::Line(line));
        entity.common.layer = layer.to_string();
        drawing.add_entity(entity);
    }
}
