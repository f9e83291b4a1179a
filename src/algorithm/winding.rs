//! Ring orientation, computed on x and y only.

use geo::algorithm::winding_order::{Winding, WindingOrder};

use crate::geometry::LineString;
use crate::io::geo::line_string_to_geo;

/// The winding order of a closed ring, or `None` when it has no area.
pub fn winding_order(ring: &LineString) -> Option<WindingOrder> {
    line_string_to_geo(ring).winding_order()
}

/// The ring with the requested winding order, reversing it if needed.
///
/// Rings without a defined winding order are returned unchanged.
pub fn oriented(ring: &LineString, order: WindingOrder) -> LineString {
    match winding_order(ring) {
        Some(current) if current != order => ring.reversed(),
        _ => ring.clone(),
    }
}
