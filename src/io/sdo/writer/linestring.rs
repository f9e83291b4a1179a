use crate::datatypes::Dimension;
use crate::error::{Result, SdoError};
use crate::geometry::{LineString, MultiLineString};
use crate::io::sdo::elem_info::ElemInfo;
use crate::io::sdo::geometry::SdoGeometry;
use crate::io::sdo::gtype::{SdoGType, TypeGeometry};
use crate::io::sdo::ordinates::Ordinates;
use crate::io::sdo::writer::coord::{next_offset, push_coords};

fn push_line_string(
    info: &mut ElemInfo,
    ordinates: &mut Vec<f64>,
    line_string: &LineString,
    dim: Dimension,
) -> Result<()> {
    if line_string.is_empty() {
        return Err(SdoError::EmptyGeometry);
    }
    info.add_element(&[next_offset(ordinates), 2, 1])?;
    push_coords(ordinates, line_string.coords(), dim);
    Ok(())
}

pub(crate) fn write_line_string(
    line_string: &LineString,
    dim: Dimension,
    srid: i32,
) -> Result<SdoGeometry> {
    let mut info = ElemInfo::with_capacity(1);
    let mut ordinates = Vec::with_capacity(dim.size() * line_string.num_coords());
    push_line_string(&mut info, &mut ordinates, line_string, dim)?;
    Ok(SdoGeometry::new(
        SdoGType::from_dimension(dim, TypeGeometry::Line),
        srid,
        None,
        info,
        Ordinates::new(ordinates),
    ))
}

pub(crate) fn write_multi_line_string(
    multi_line_string: &MultiLineString,
    dim: Dimension,
    srid: i32,
) -> Result<SdoGeometry> {
    if multi_line_string.0.is_empty() {
        return Err(SdoError::EmptyGeometry);
    }
    let mut info = ElemInfo::with_capacity(multi_line_string.0.len());
    let mut ordinates = Vec::new();
    for line_string in &multi_line_string.0 {
        push_line_string(&mut info, &mut ordinates, line_string, dim)?;
    }
    Ok(SdoGeometry::new(
        SdoGType::from_dimension(dim, TypeGeometry::MultiLine),
        srid,
        None,
        info,
        Ordinates::new(ordinates),
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Coord;
    use crate::test::sdo;

    #[test]
    fn line() {
        let line = LineString::new(vec![Coord::xy(0., 0.), Coord::xy(1., 1.), Coord::xy(2., 0.)]);
        assert_eq!(write_line_string(&line, Dimension::XY, 0).unwrap(), sdo::line());
    }

    #[test]
    fn multi_line_offsets() {
        let mls = MultiLineString(vec![
            LineString::new(vec![Coord::xym(0., 0., 0.), Coord::xym(1., 0., 1.)]),
            LineString::new(vec![Coord::xym(5., 5., 2.), Coord::xym(6., 5., 3.)]),
        ]);
        let sdo = write_multi_line_string(&mls, Dimension::XYM, 0).unwrap();
        assert_eq!(sdo.gtype().int_value(), 3306);
        assert_eq!(sdo.info().triplets(), &[1, 2, 1, 7, 2, 1]);
        assert_eq!(sdo.ordinates().len(), 12);
    }

    #[test]
    fn empty_line() {
        assert!(matches!(
            write_line_string(&LineString::default(), Dimension::XY, 0),
            Err(SdoError::EmptyGeometry)
        ));
    }
}
