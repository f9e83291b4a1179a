//! Decoding `SDO_GEOMETRY` values into geometry trees.

pub(crate) mod coord;
pub(crate) mod element;
mod geometry;
mod linestring;
mod point;
mod polygon;

pub use element::{expand_rect, RectRole};
pub use geometry::from_sdo;
