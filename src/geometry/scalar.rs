use crate::datatypes::Dimension;
use crate::geometry::Coord;

#[derive(Debug, Clone, PartialEq)]
pub struct Point(pub Coord);

impl Point {
    pub fn coord(&self) -> &Coord {
        &self.0
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Point(value)
    }
}

/// An ordered sequence of coordinates. Also used for polygon rings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(pub Vec<Coord>);

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the first and last coordinate share the same x/y.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first.equals_2d(last),
            _ => false,
        }
    }

    /// A copy of this line string with the coordinate order reversed.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(value: Vec<Coord>) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: LineString,
    interiors: Vec<LineString>,
}

impl Polygon {
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    pub fn exterior(&self) -> &LineString {
        &self.exterior
    }

    pub fn interiors(&self) -> &[LineString] {
        &self.interiors
    }

    pub fn num_interiors(&self) -> usize {
        self.interiors.len()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint(pub Vec<Point>);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString(pub Vec<LineString>);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(pub Vec<Polygon>);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection(pub Vec<Geometry>);

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The OGC name of this geometry's type.
    pub fn geometry_type(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// Whether this geometry holds no coordinates at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::LineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.exterior().is_empty(),
            Geometry::MultiPoint(g) => g.0.is_empty(),
            Geometry::MultiLineString(g) => g.0.iter().all(LineString::is_empty),
            Geometry::MultiPolygon(g) => g.0.iter().all(|p| p.exterior().is_empty()),
            Geometry::GeometryCollection(g) => g.0.iter().all(Geometry::is_empty),
        }
    }
}

macro_rules! impl_into_geometry {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Geometry::$variant(value)
                }
            }
        )*
    };
}

impl_into_geometry!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);

/// A geometry tagged with its spatial reference id and coordinate dimension.
///
/// An SRID of 0 means the spatial reference is unspecified.
#[derive(Debug, Clone, PartialEq)]
pub struct SridGeometry {
    pub srid: i32,
    pub dim: Dimension,
    pub geometry: Geometry,
}

impl SridGeometry {
    pub fn new(srid: i32, dim: Dimension, geometry: impl Into<Geometry>) -> Self {
        Self {
            srid,
            dim,
            geometry: geometry.into(),
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn into_inner(self) -> Geometry {
        self.geometry
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn closed_ring() {
        let ring = LineString::new(vec![
            Coord::xy(0., 0.),
            Coord::xy(1., 0.),
            Coord::xy(1., 1.),
            Coord::xy(0., 0.),
        ]);
        assert!(ring.is_closed());
        assert!(!LineString::default().is_closed());
        assert_eq!(ring.reversed().coords()[1], Coord::xy(1., 1.));
    }

    #[test]
    fn empty_geometries() {
        assert!(Geometry::from(MultiPoint::default()).is_empty());
        assert!(Geometry::from(GeometryCollection(vec![LineString::default().into()])).is_empty());
        assert!(!Geometry::from(Point(Coord::xy(0., 0.))).is_empty());
    }
}
