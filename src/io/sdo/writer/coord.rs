use crate::datatypes::Dimension;
use crate::geometry::Coord;

/// Append coordinates as ordinate tuples in `x, y, [z], [m]` order.
pub(crate) fn push_coords<'a>(
    ordinates: &mut Vec<f64>,
    coords: impl IntoIterator<Item = &'a Coord>,
    dim: Dimension,
) {
    for coord in coords {
        ordinates.extend((0..dim.size()).filter_map(|n| coord.nth(dim, n)));
    }
}

/// The 1-based offset of the next ordinate to be written.
pub(crate) fn next_offset(ordinates: &[f64]) -> i32 {
    ordinates.len() as i32 + 1
}
