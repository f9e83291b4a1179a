use crate::error::{Result, SdoError};
use crate::geometry::{LineString, MultiPolygon, Polygon};
use crate::io::sdo::geometry::SdoGeometry;
use crate::io::sdo::options::SdoOptions;
use crate::io::sdo::reader::element::logical_element_coords;

/// A ring and whether it is an exterior ring.
fn read_rings(sdo: &SdoGeometry, options: &SdoOptions) -> Result<Vec<(bool, LineString)>> {
    let mut rings = Vec::new();
    let mut i = 0;
    while i < sdo.num_elements() {
        let element_type = sdo.info().element_type(i)?;
        if !element_type.is_exterior_ring() && !element_type.is_interior_ring() {
            return Err(SdoError::Malformed(format!(
                "element {i} of type {element_type:?} is not a polygon ring"
            )));
        }
        let (coords, next) = logical_element_coords(sdo, i, options)?;
        rings.push((element_type.is_exterior_ring(), LineString::new(coords)));
        i = next;
    }
    Ok(rings)
}

/// Decode a POLYGON made of exactly one exterior ring and any number of holes.
pub(crate) fn read_polygon(sdo: &SdoGeometry, options: &SdoOptions) -> Result<Polygon> {
    let mut shell = None;
    let mut holes = Vec::new();
    for (exterior, ring) in read_rings(sdo, options)? {
        if !exterior {
            holes.push(ring);
        } else if shell.is_none() {
            shell = Some(ring);
        } else {
            return Err(SdoError::Malformed(
                "polygon with more than one exterior ring".to_string(),
            ));
        }
    }
    let shell =
        shell.ok_or_else(|| SdoError::Malformed("polygon without exterior ring".to_string()))?;
    Ok(Polygon::new(shell, holes))
}

/// Decode a MULTIPOLYGON. Every exterior ring starts a new polygon.
pub(crate) fn read_multi_polygon(sdo: &SdoGeometry, options: &SdoOptions) -> Result<MultiPolygon> {
    let mut polygons = Vec::new();
    let mut shell: Option<LineString> = None;
    let mut holes = Vec::new();
    for (exterior, ring) in read_rings(sdo, options)? {
        if exterior {
            if let Some(previous) = shell.replace(ring) {
                polygons.push(Polygon::new(previous, std::mem::take(&mut holes)));
            }
        } else if shell.is_some() {
            holes.push(ring);
        } else {
            return Err(SdoError::Malformed(
                "interior ring before any exterior ring".to_string(),
            ));
        }
    }
    if let Some(last) = shell {
        polygons.push(Polygon::new(last, holes));
    }
    Ok(MultiPolygon(polygons))
}
