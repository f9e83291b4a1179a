use crate::error::{Result, SdoError};
use crate::geometry::{MultiPoint, Point};
use crate::io::sdo::element_type::ElementType;
use crate::io::sdo::geometry::SdoGeometry;
use crate::io::sdo::reader::coord::CoordLayout;

/// Decode a POINT.
///
/// The ordinates array is used when it holds values; otherwise the inline `SDO_POINT`.
pub(crate) fn read_point(sdo: &SdoGeometry) -> Result<Point> {
    let layout = CoordLayout::new(sdo.gtype())?;

    let ordinates = if !sdo.ordinates().is_empty() {
        if sdo.num_elements() > 1 && sdo.info().element_type(1)? == ElementType::Orientation {
            // oriented point: the orientation vector follows the point itself
            sdo.element_ordinates(0, false)?.to_vec()
        } else {
            sdo.ordinates().ordinate_array().to_vec()
        }
    } else if let Some(point) = sdo.point() {
        point.ordinates(layout.size())
    } else {
        return Err(SdoError::Malformed(
            "point without ordinates or SDO_POINT".to_string(),
        ));
    };

    match layout.coords(&ordinates)?.as_slice() {
        [coord] => Ok(Point(*coord)),
        coords => Err(SdoError::Malformed(format!(
            "point geometry with {} coordinates",
            coords.len()
        ))),
    }
}

/// Decode a MULTIPOINT from the whole ordinates array.
pub(crate) fn read_multi_point(sdo: &SdoGeometry) -> Result<MultiPoint> {
    let layout = CoordLayout::new(sdo.gtype())?;
    let points = layout
        .coords(sdo.ordinates().ordinate_array())?
        .into_iter()
        .map(Point)
        .collect();
    Ok(MultiPoint(points))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Coord;
    use crate::io::sdo::elem_info::ElemInfo;
    use crate::io::sdo::gtype::SdoGType;
    use crate::io::sdo::ordinates::Ordinates;
    use crate::io::sdo::point::SdoPoint;
    use crate::test::sdo;

    #[test]
    fn point_from_ordinates() {
        assert_eq!(read_point(&sdo::point()).unwrap(), Point(Coord::xy(10., 20.)));
    }

    #[test]
    fn point_from_inline_point() {
        let geom = SdoGeometry::new(
            SdoGType::parse(3001).unwrap(),
            4326,
            Some(SdoPoint::new(1., 2., 3.)),
            ElemInfo::default(),
            Ordinates::default(),
        );
        assert_eq!(read_point(&geom).unwrap(), Point(Coord::xyz(1., 2., 3.)));
    }

    #[test]
    fn ordinates_win_over_inline_point() {
        let mut geom = sdo::point();
        geom.set_point(Some(SdoPoint::xy(-1., -1.)));
        assert_eq!(read_point(&geom).unwrap(), Point(Coord::xy(10., 20.)));
    }

    #[test]
    fn oriented_point() {
        let geom = SdoGeometry::new(
            SdoGType::parse(2001).unwrap(),
            0,
            None,
            ElemInfo::new(vec![1, 1, 1, 3, 1, 0]).unwrap(),
            Ordinates::new(vec![12., 14., 0.3, 0.2]),
        );
        assert_eq!(read_point(&geom).unwrap(), Point(Coord::xy(12., 14.)));
    }

    #[test]
    fn point_without_coordinates() {
        let geom = SdoGeometry::empty(SdoGType::parse(2001).unwrap(), 0);
        assert!(matches!(read_point(&geom), Err(SdoError::Malformed(_))));
    }

    #[test]
    fn multi_point() {
        let mp = read_multi_point(&sdo::multi_point()).unwrap();
        assert_eq!(
            mp,
            MultiPoint(vec![
                Point(Coord::xy(1., 1.)),
                Point(Coord::xy(2., 2.)),
                Point(Coord::xy(3., 4.)),
            ])
        );
    }
}
