use tracing::debug;

use crate::error::{Result, SdoError};
use crate::geometry::{Geometry, GeometryCollection, SridGeometry};
use crate::io::sdo::geometry::SdoGeometry;
use crate::io::sdo::gtype::TypeGeometry;
use crate::io::sdo::options::SdoOptions;
use crate::io::sdo::reader::linestring::{read_line_string, read_multi_line_string};
use crate::io::sdo::reader::point::{read_multi_point, read_point};
use crate::io::sdo::reader::polygon::{read_multi_polygon, read_polygon};

/// Decode the geometry tree of an `SDO_GEOMETRY`, without the SRID.
fn read_geometry(sdo: &SdoGeometry, options: &SdoOptions) -> Result<Geometry> {
    let geometry = match sdo.gtype().type_geometry() {
        TypeGeometry::Point => Geometry::Point(read_point(sdo)?),
        TypeGeometry::Line => Geometry::LineString(read_line_string(sdo, options)?),
        TypeGeometry::Polygon => Geometry::Polygon(read_polygon(sdo, options)?),
        TypeGeometry::MultiPoint => Geometry::MultiPoint(read_multi_point(sdo)?),
        TypeGeometry::MultiLine => {
            Geometry::MultiLineString(read_multi_line_string(sdo, options)?)
        }
        TypeGeometry::MultiPolygon => Geometry::MultiPolygon(read_multi_polygon(sdo, options)?),
        TypeGeometry::Collection => {
            let members = sdo
                .element_geometries()?
                .iter()
                .map(|element| read_geometry(element, options))
                .collect::<Result<Vec<_>>>()?;
            Geometry::GeometryCollection(GeometryCollection(members))
        }
        other @ (TypeGeometry::Unknown | TypeGeometry::Solid | TypeGeometry::MultiSolid) => {
            return Err(SdoError::UnsupportedGeometryType(format!(
                "{other:?} (SDO_GTYPE {})",
                sdo.gtype()
            )))
        }
    };
    Ok(geometry)
}

/// Decode an `SDO_GEOMETRY` into an SRID-tagged geometry.
pub fn from_sdo(sdo: &SdoGeometry, options: &SdoOptions) -> Result<SridGeometry> {
    options.validate()?;
    debug!(
        gtype = sdo.gtype().int_value(),
        srid = sdo.srid(),
        elements = sdo.num_elements(),
        "decoding SDO_GEOMETRY"
    );
    let geometry = read_geometry(sdo, options)?;
    Ok(SridGeometry::new(
        sdo.srid(),
        sdo.gtype().coord_dimension(),
        geometry,
    ))
}
