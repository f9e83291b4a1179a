use tracing::debug;

use crate::datatypes::Dimension;
use crate::error::{Result, SdoError};
use crate::geometry::{Geometry, SridGeometry};
use crate::io::sdo::geometry::SdoGeometry;
use crate::io::sdo::options::SdoOptions;
use crate::io::sdo::writer::linestring::{write_line_string, write_multi_line_string};
use crate::io::sdo::writer::point::{write_multi_point, write_point};
use crate::io::sdo::writer::polygon::{write_multi_polygon, write_polygon};

fn write_geometry(
    geometry: &Geometry,
    dim: Dimension,
    srid: i32,
    options: &SdoOptions,
) -> Result<SdoGeometry> {
    match geometry {
        Geometry::Point(g) => write_point(g, dim, srid, options),
        Geometry::LineString(g) => write_line_string(g, dim, srid),
        Geometry::Polygon(g) => write_polygon(g, dim, srid),
        Geometry::MultiPoint(g) => write_multi_point(g, dim, srid),
        Geometry::MultiLineString(g) => write_multi_line_string(g, dim, srid),
        Geometry::MultiPolygon(g) => write_multi_polygon(g, dim, srid),
        Geometry::GeometryCollection(g) => {
            // members always use the element arrays, the inline point cannot be joined
            let member_options = SdoOptions {
                use_point_type: false,
                ..options.clone()
            };
            let members = g
                .0
                .iter()
                .filter(|member| !member.is_empty())
                .map(|member| write_geometry(member, dim, srid, &member_options))
                .collect::<Result<Vec<_>>>()?;
            SdoGeometry::join(&members)
        }
    }
}

/// Encode an SRID-tagged geometry as an `SDO_GEOMETRY`.
pub fn to_sdo(geometry: &SridGeometry, options: &SdoOptions) -> Result<SdoGeometry> {
    options.validate()?;
    if geometry.geometry.is_empty() {
        return Err(SdoError::EmptyGeometry);
    }
    debug!(
        geometry_type = geometry.geometry.geometry_type(),
        dim = %geometry.dim,
        srid = geometry.srid,
        "encoding SDO_GEOMETRY"
    );
    write_geometry(&geometry.geometry, geometry.dim, geometry.srid, options)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{Coord, GeometryCollection, LineString, Point};
    use crate::io::sdo::reader::from_sdo;
    use crate::test::{geometry, sdo};

    fn round_trip(geometry: SridGeometry) {
        let options = SdoOptions::default();
        let encoded = to_sdo(&geometry, &options).unwrap();
        assert_eq!(from_sdo(&encoded, &options).unwrap(), geometry);
    }

    #[test]
    fn round_trips() {
        for geometry in geometry::all() {
            round_trip(geometry);
        }
    }

    #[test]
    fn collection_matches_fixture() {
        let collection = SridGeometry::new(
            4326,
            Dimension::XY,
            GeometryCollection(vec![
                Point(Coord::xy(10., 5.)).into(),
                LineString::new(vec![Coord::xy(0., 0.), Coord::xy(1., 1.), Coord::xy(2., 0.)])
                    .into(),
            ]),
        );
        let encoded = to_sdo(&collection, &SdoOptions::default()).unwrap();
        assert_eq!(encoded, sdo::point_and_line_collection());
    }

    #[test]
    fn collection_ignores_point_type() {
        let options = SdoOptions {
            use_point_type: true,
            ..Default::default()
        };
        let collection = SridGeometry::new(
            0,
            Dimension::XY,
            GeometryCollection(vec![
                Point(Coord::xy(1., 2.)).into(),
                Point(Coord::xy(3., 4.)).into(),
            ]),
        );
        let encoded = to_sdo(&collection, &options).unwrap();
        assert_eq!(encoded.info().triplets(), &[1, 1, 1, 3, 1, 1]);
        assert!(encoded.point().is_none());
    }

    #[test]
    fn empty_geometry() {
        let empty = SridGeometry::new(0, Dimension::XY, GeometryCollection::default());
        assert!(matches!(
            to_sdo(&empty, &SdoOptions::default()),
            Err(SdoError::EmptyGeometry)
        ));
    }
}
