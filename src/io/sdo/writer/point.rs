use crate::datatypes::Dimension;
use crate::error::{Result, SdoError};
use crate::geometry::{MultiPoint, Point};
use crate::io::sdo::elem_info::ElemInfo;
use crate::io::sdo::geometry::SdoGeometry;
use crate::io::sdo::gtype::{SdoGType, TypeGeometry};
use crate::io::sdo::options::SdoOptions;
use crate::io::sdo::ordinates::Ordinates;
use crate::io::sdo::point::SdoPoint;
use crate::io::sdo::writer::coord::push_coords;

/// Encode a Point, either as a `[1, 1, 1]` element or as the inline `SDO_POINT`.
pub(crate) fn write_point(
    point: &Point,
    dim: Dimension,
    srid: i32,
    options: &SdoOptions,
) -> Result<SdoGeometry> {
    let gtype = SdoGType::from_dimension(dim, TypeGeometry::Point);
    let c = point.coord();

    if options.use_point_type && dim != Dimension::XYZM {
        let third = match dim {
            Dimension::XYZ => c.z,
            Dimension::XYM => c.m,
            _ => f64::NAN,
        };
        return Ok(SdoGeometry::new(
            gtype,
            srid,
            Some(SdoPoint::new(c.x, c.y, third)),
            ElemInfo::default(),
            Ordinates::default(),
        ));
    }

    let mut ordinates = Vec::with_capacity(dim.size());
    push_coords(&mut ordinates, [c], dim);
    Ok(SdoGeometry::new(
        gtype,
        srid,
        None,
        ElemInfo::new(vec![1, 1, 1])?,
        Ordinates::new(ordinates),
    ))
}

/// Encode a MultiPoint as a single point cluster element.
pub(crate) fn write_multi_point(
    multi_point: &MultiPoint,
    dim: Dimension,
    srid: i32,
) -> Result<SdoGeometry> {
    if multi_point.0.is_empty() {
        return Err(SdoError::EmptyGeometry);
    }
    let mut ordinates = Vec::with_capacity(dim.size() * multi_point.0.len());
    push_coords(&mut ordinates, multi_point.0.iter().map(Point::coord), dim);
    Ok(SdoGeometry::new(
        SdoGType::from_dimension(dim, TypeGeometry::MultiPoint),
        srid,
        None,
        ElemInfo::new(vec![1, 1, multi_point.0.len() as i32])?,
        Ordinates::new(ordinates),
    ))
}
