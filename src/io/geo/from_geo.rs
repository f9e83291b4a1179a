use crate::datatypes::Dimension;
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon, SridGeometry,
};

pub fn coord_from_geo(coord: &geo::Coord) -> Coord {
    Coord::xy(coord.x, coord.y)
}

fn line_string_from_geo(line_string: &geo::LineString) -> LineString {
    LineString::new(line_string.coords().map(coord_from_geo).collect())
}

fn polygon_from_geo(polygon: &geo::Polygon) -> Polygon {
    Polygon::new(
        line_string_from_geo(polygon.exterior()),
        polygon.interiors().iter().map(line_string_from_geo).collect(),
    )
}

fn from_geo(geometry: &geo::Geometry) -> Geometry {
    match geometry {
        geo::Geometry::Point(g) => Point(coord_from_geo(&g.0)).into(),
        geo::Geometry::Line(g) => {
            LineString::new(vec![coord_from_geo(&g.start), coord_from_geo(&g.end)]).into()
        }
        geo::Geometry::LineString(g) => line_string_from_geo(g).into(),
        geo::Geometry::Polygon(g) => polygon_from_geo(g).into(),
        geo::Geometry::MultiPoint(g) => {
            MultiPoint(g.iter().map(|p| Point(coord_from_geo(&p.0))).collect()).into()
        }
        geo::Geometry::MultiLineString(g) => {
            MultiLineString(g.iter().map(line_string_from_geo).collect()).into()
        }
        geo::Geometry::MultiPolygon(g) => {
            MultiPolygon(g.iter().map(polygon_from_geo).collect()).into()
        }
        geo::Geometry::GeometryCollection(g) => {
            GeometryCollection(g.iter().map(from_geo).collect()).into()
        }
        geo::Geometry::Rect(g) => polygon_from_geo(&g.to_polygon()).into(),
        geo::Geometry::Triangle(g) => polygon_from_geo(&g.to_polygon()).into(),
    }
}

/// Convert a [`geo::Geometry`] into a two-dimensional [`SridGeometry`].
///
/// `Line`, `Rect` and `Triangle` become a LineString or Polygon.
pub fn geometry_from_geo(geometry: &geo::Geometry, srid: i32) -> SridGeometry {
    SridGeometry::new(srid, Dimension::XY, from_geo(geometry))
}
