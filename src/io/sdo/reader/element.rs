use geo::coord;

use crate::algorithm::linearize::{linearize_arc, linearize_circle, Circle};
use crate::datatypes::Dimension;
use crate::error::{Result, SdoError};
use crate::geometry::Coord;
use crate::io::sdo::element_type::ElementType;
use crate::io::sdo::geometry::SdoGeometry;
use crate::io::sdo::options::SdoOptions;
use crate::io::sdo::reader::coord::CoordLayout;

/// How the two corners of a rectangle are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectRole {
    /// Counter-clockwise closed ring.
    Exterior,
    /// Clockwise closed ring.
    Interior,
    /// The two corners as given.
    Bounds,
}

/// Expand a lower-left / upper-right corner pair.
///
/// Rectangle elements always decode as rings. [`RectRole::Bounds`] is there for callers that
/// need the corner pair outside of a ring, such as a bounding box.
///
/// The two derived corners take z from the lower-left corner and have no measure.
///
/// ```
/// use sdo_geometry::geometry::Coord;
/// use sdo_geometry::io::sdo::reader::{expand_rect, RectRole};
///
/// let (ll, ur) = (Coord::xy(0., 0.), Coord::xy(2., 1.));
/// assert_eq!(expand_rect(ll, ur, RectRole::Exterior).len(), 5);
/// assert_eq!(expand_rect(ll, ur, RectRole::Bounds), vec![ll, ur]);
/// ```
pub fn expand_rect(ll: Coord, ur: Coord, role: RectRole) -> Vec<Coord> {
    let lr = Coord::new(ur.x, ll.y, ll.z, f64::NAN);
    let ul = Coord::new(ll.x, ur.y, ll.z, f64::NAN);
    match role {
        RectRole::Exterior => vec![ll, lr, ur, ul, ll],
        RectRole::Interior => vec![ll, ul, ur, lr, ll],
        RectRole::Bounds => vec![ll, ur],
    }
}

/// Linearize a run of arcs, or a single circle, given as three-point groups.
///
/// Consecutive arcs share their end and start point. Measures are kept on the declared points
/// only: the first and last point of every arc, and the arc's middle point where it appears
/// unchanged in the output. All other points get a `NaN` measure.
pub(crate) fn linearize_arcs(
    coords: &[Coord],
    dim: Dimension,
    circle: bool,
    options: &SdoOptions,
) -> Result<Vec<Coord>> {
    if !matches!(dim, Dimension::XY | Dimension::XYM) {
        return Err(SdoError::Unsupported(format!(
            "linearizing arcs of {dim} geometries"
        )));
    }
    if coords.len() < 3 || coords.len() % 2 == 0 || (circle && coords.len() != 3) {
        return Err(SdoError::Malformed(format!(
            "{} points do not describe {}",
            coords.len(),
            if circle { "a circle" } else { "a run of arcs" }
        )));
    }

    let mut out: Vec<Coord> = Vec::new();
    for (arc_idx, arc) in coords.windows(3).step_by(2).enumerate() {
        let (c1, c2, c3) = (arc[0], arc[1], arc[2]);
        let p1 = coord! { x: c1.x, y: c1.y };
        let p2 = coord! { x: c2.x, y: c2.y };
        let p3 = coord! { x: c3.x, y: c3.y };
        let tolerance = Circle::from_three_points(p1, p2, p3)?.radius() * options.arc_tolerance;

        let points = if circle {
            linearize_circle(p1, p2, p3, tolerance)?
        } else {
            linearize_arc(p1, p2, p3, tolerance)?
        };
        let last = points.len() - 1;
        let linearized = points.into_iter().enumerate().map(|(k, p)| {
            let m = if k == 0 {
                c1.m
            } else if k == last {
                if circle {
                    c1.m
                } else {
                    c3.m
                }
            } else if p.x == c2.x && p.y == c2.y {
                c2.m
            } else if circle && p.x == c3.x && p.y == c3.y {
                c3.m
            } else {
                f64::NAN
            };
            Coord::new(p.x, p.y, f64::NAN, m)
        });

        if arc_idx == 0 {
            out.extend(linearized);
        } else {
            // the first point of this arc is the last point of the previous one
            out.extend(linearized.skip(1));
        }
    }
    Ok(out)
}

/// The coordinates of a single (non-compound) element.
pub(crate) fn element_coords(
    sdo: &SdoGeometry,
    i: usize,
    includes_next_start: bool,
    options: &SdoOptions,
) -> Result<Vec<Coord>> {
    let element_type = sdo.info().element_type(i)?;
    let layout = CoordLayout::new(sdo.gtype())?;
    let coords = layout.coords(sdo.element_ordinates(i, includes_next_start)?)?;

    if element_type.is_point() || element_type.is_straight_segment() {
        Ok(coords)
    } else if element_type.is_arc_segment() {
        linearize_arcs(&coords, layout.dimension(), false, options)
    } else if element_type.is_circle() {
        linearize_arcs(&coords, layout.dimension(), true, options)
    } else if element_type.is_rect() {
        let [ll, ur] = coords.as_slice() else {
            return Err(SdoError::Malformed(format!(
                "rectangle element with {} points",
                coords.len()
            )));
        };
        let role = if element_type.is_interior_ring() {
            RectRole::Interior
        } else {
            RectRole::Exterior
        };
        Ok(expand_rect(*ll, *ur, role))
    } else if element_type == ElementType::Unsupported {
        Err(SdoError::Unsupported("element type 0".to_string()))
    } else {
        Err(SdoError::Malformed(format!(
            "unexpected element type {element_type:?} at element {i}"
        )))
    }
}

/// Stitch the sub-elements `first..=last` of a compound element into one coordinate sequence.
pub(crate) fn compound_coords(
    sdo: &SdoGeometry,
    first: usize,
    last: usize,
    options: &SdoOptions,
) -> Result<Vec<Coord>> {
    let mut coords: Vec<Coord> = Vec::new();
    for i in first..=last {
        // shared with the start of this sub-element
        coords.pop();
        coords.extend(element_coords(sdo, i, i < last, options)?);
    }
    Ok(coords)
}

/// The coordinates of the logical element starting at element `i`, and the index of the element
/// after it.
pub(crate) fn logical_element_coords(
    sdo: &SdoGeometry,
    i: usize,
    options: &SdoOptions,
) -> Result<(Vec<Coord>, usize)> {
    let next = sdo.next_element(i)?;
    if sdo.info().is_compound(i)? {
        Ok((compound_coords(sdo, i + 1, next - 1, options)?, next))
    } else {
        Ok((element_coords(sdo, i, false, options)?, next))
    }
}
