use geo::algorithm::winding_order::WindingOrder;

use crate::algorithm::winding::oriented;
use crate::datatypes::Dimension;
use crate::error::{Result, SdoError};
use crate::geometry::{MultiPolygon, Polygon};
use crate::io::sdo::elem_info::ElemInfo;
use crate::io::sdo::geometry::SdoGeometry;
use crate::io::sdo::gtype::{SdoGType, TypeGeometry};
use crate::io::sdo::ordinates::Ordinates;
use crate::io::sdo::writer::coord::{next_offset, push_coords};

/// Append the rings of a polygon: the exterior counter-clockwise, holes clockwise.
fn push_polygon(
    info: &mut ElemInfo,
    ordinates: &mut Vec<f64>,
    polygon: &Polygon,
    dim: Dimension,
) -> Result<()> {
    if polygon.exterior().is_empty() {
        return Err(SdoError::EmptyGeometry);
    }
    let exterior = oriented(polygon.exterior(), WindingOrder::CounterClockwise);
    info.add_element(&[next_offset(ordinates), 1003, 1])?;
    push_coords(ordinates, exterior.coords(), dim);

    for interior in polygon.interiors() {
        let interior = oriented(interior, WindingOrder::Clockwise);
        info.add_element(&[next_offset(ordinates), 2003, 1])?;
        push_coords(ordinates, interior.coords(), dim);
    }
    Ok(())
}

pub(crate) fn write_polygon(polygon: &Polygon, dim: Dimension, srid: i32) -> Result<SdoGeometry> {
    let mut info = ElemInfo::with_capacity(1 + polygon.num_interiors());
    let mut ordinates = Vec::new();
    push_polygon(&mut info, &mut ordinates, polygon, dim)?;
    Ok(SdoGeometry::new(
        SdoGType::from_dimension(dim, TypeGeometry::Polygon),
        srid,
        None,
        info,
        Ordinates::new(ordinates),
    ))
}

pub(crate) fn write_multi_polygon(
    multi_polygon: &MultiPolygon,
    dim: Dimension,
    srid: i32,
) -> Result<SdoGeometry> {
    if multi_polygon.0.is_empty() {
        return Err(SdoError::EmptyGeometry);
    }
    let mut info = ElemInfo::default();
    let mut ordinates = Vec::new();
    for polygon in &multi_polygon.0 {
        push_polygon(&mut info, &mut ordinates, polygon, dim)?;
    }
    Ok(SdoGeometry::new(
        SdoGType::from_dimension(dim, TypeGeometry::MultiPolygon),
        srid,
        None,
        info,
        Ordinates::new(ordinates),
    ))
}
