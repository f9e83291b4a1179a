//! Encoding geometry trees as `SDO_GEOMETRY` values.

mod coord;
mod geometry;
mod linestring;
mod point;
mod polygon;

pub use geometry::to_sdo;
