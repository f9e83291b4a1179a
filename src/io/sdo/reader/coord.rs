use crate::datatypes::Dimension;
use crate::error::{Result, SdoError};
use crate::geometry::Coord;
use crate::io::sdo::gtype::SdoGType;

/// Where x, y, z and the measure live inside one ordinate tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CoordLayout {
    size: usize,
    z_index: Option<usize>,
    m_index: Option<usize>,
}

impl CoordLayout {
    pub(crate) fn new(gtype: SdoGType) -> Result<Self> {
        let slot = |one_based: i32| usize::try_from(one_based - 1).ok();
        let layout = match gtype.dimension() {
            2 => Self {
                size: 2,
                z_index: None,
                m_index: None,
            },
            3 if gtype.is_lrs_geometry() => Self {
                size: 3,
                z_index: None,
                m_index: slot(gtype.lrs_dimension()),
            },
            3 => Self {
                size: 3,
                z_index: slot(gtype.z_dimension()),
                m_index: None,
            },
            4 if gtype.is_lrs_geometry() => Self {
                size: 4,
                z_index: slot(gtype.z_dimension()),
                m_index: slot(gtype.measure_dimension()),
            },
            dimension => return Err(SdoError::InvalidDimension(dimension)),
        };
        Ok(layout)
    }

    /// The number of ordinates per coordinate.
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn dimension(&self) -> Dimension {
        Dimension::from_flags(self.z_index.is_some(), self.m_index.is_some())
    }

    pub(crate) fn coord(&self, tuple: &[f64]) -> Coord {
        Coord::new(
            tuple[0],
            tuple[1],
            self.z_index.map_or(f64::NAN, |i| tuple[i]),
            self.m_index.map_or(f64::NAN, |i| tuple[i]),
        )
    }

    /// Group a flat ordinate run into coordinates.
    pub(crate) fn coords(&self, ordinates: &[f64]) -> Result<Vec<Coord>> {
        if ordinates.len() % self.size != 0 {
            return Err(SdoError::Malformed(format!(
                "{} ordinates do not form {}-dimensional coordinates",
                ordinates.len(),
                self.size
            )));
        }
        Ok(ordinates
            .chunks_exact(self.size)
            .map(|tuple| self.coord(tuple))
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn layout(gtype: i32) -> CoordLayout {
        CoordLayout::new(SdoGType::parse(gtype).unwrap()).unwrap()
    }

    #[test]
    fn two_dimensional() {
        let coords = layout(2002).coords(&[0., 1., 2., 3.]).unwrap();
        assert_eq!(coords, vec![Coord::xy(0., 1.), Coord::xy(2., 3.)]);
        assert_eq!(layout(2002).dimension(), Dimension::XY);
    }

    #[test]
    fn three_dimensional() {
        assert_eq!(layout(3001).coord(&[1., 2., 3.]), Coord::xyz(1., 2., 3.));
        assert_eq!(layout(3301).coord(&[1., 2., 3.]), Coord::xym(1., 2., 3.));
        assert_eq!(layout(3301).dimension(), Dimension::XYM);
    }

    #[test]
    fn four_dimensional() {
        assert_eq!(
            layout(4401).coord(&[1., 2., 3., 4.]),
            Coord::xyzm(1., 2., 3., 4.)
        );
        assert_eq!(
            layout(4301).coord(&[1., 2., 3., 4.]),
            Coord::xyzm(1., 2., 4., 3.)
        );
        assert_eq!(
            layout(4001).coord(&[1., 2., 3., 4.]),
            Coord::xyzm(1., 2., 3., 4.)
        );
    }

    #[test]
    fn ragged_ordinates() {
        assert!(matches!(
            layout(2002).coords(&[0., 1., 2.]),
            Err(SdoError::Malformed(_))
        ));
    }
}
