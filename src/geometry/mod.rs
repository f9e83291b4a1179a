//! A dimension-aware geometry model that keeps z and measure ordinates.
//!
//! The [`geo`] types only carry x/y, which is not enough to represent 3D or linear-referenced
//! `SDO_GEOMETRY` values. Conversion to and from [`geo`] lives in [`crate::io::geo`].

pub use coord::Coord;
pub use scalar::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, SridGeometry,
};

mod coord;
mod scalar;
