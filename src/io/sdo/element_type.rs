use crate::error::{Result, SdoError};

/// The kind of an element in `SDO_ELEM_INFO`, keyed by its `(etype, interpretation)` pair.
///
/// For compound elements the interpretation is not part of the key: it holds the number of
/// sub-elements that follow the compound head. The same goes for point clusters, where it holds the
/// number of points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    Unsupported,
    Point,
    Orientation,
    PointCluster,
    LineStraightSegments,
    LineArcSegments,
    InteriorRingStraightSegments,
    ExteriorRingStraightSegments,
    InteriorRingArcSegments,
    ExteriorRingArcSegments,
    InteriorRingRect,
    ExteriorRingRect,
    InteriorRingCircle,
    ExteriorRingCircle,
    CompoundLine,
    CompoundExteriorRing,
    CompoundInteriorRing,
}

impl ElementType {
    /// Classify an `(etype, interpretation)` pair.
    pub fn parse(etype: i32, interpretation: i32) -> Result<Self> {
        use ElementType::*;

        let element_type = match (etype, interpretation) {
            (0, _) => Unsupported,
            (1, 1) => Point,
            (1, 0) => Orientation,
            (1, n) if n > 1 => PointCluster,
            (2, 1) => LineStraightSegments,
            (2, 2) => LineArcSegments,
            (2003, 1) => InteriorRingStraightSegments,
            (1003, 1) => ExteriorRingStraightSegments,
            (2003, 2) => InteriorRingArcSegments,
            (1003, 2) => ExteriorRingArcSegments,
            (2003, 3) => InteriorRingRect,
            (1003, 3) => ExteriorRingRect,
            (2003, 4) => InteriorRingCircle,
            (1003, 4) => ExteriorRingCircle,
            (4, _) => CompoundLine,
            (1005, _) => CompoundExteriorRing,
            (2005, _) => CompoundInteriorRing,
            _ => {
                return Err(SdoError::InvalidElementType {
                    etype,
                    interpretation,
                })
            }
        };
        Ok(element_type)
    }

    /// The `SDO_ETYPE` of this element kind.
    pub fn etype(&self) -> i32 {
        use ElementType::*;
        match self {
            Unsupported => 0,
            Point | Orientation | PointCluster => 1,
            LineStraightSegments | LineArcSegments => 2,
            InteriorRingStraightSegments
            | InteriorRingArcSegments
            | InteriorRingRect
            | InteriorRingCircle => 2003,
            ExteriorRingStraightSegments
            | ExteriorRingArcSegments
            | ExteriorRingRect
            | ExteriorRingCircle => 1003,
            CompoundLine => 4,
            CompoundExteriorRing => 1005,
            CompoundInteriorRing => 2005,
        }
    }

    /// The fixed interpretation of this element kind.
    ///
    /// Returns `None` for kinds whose interpretation slot holds a count.
    pub fn interpretation(&self) -> Option<i32> {
        use ElementType::*;
        match self {
            Orientation => Some(0),
            Point
            | LineStraightSegments
            | InteriorRingStraightSegments
            | ExteriorRingStraightSegments => Some(1),
            LineArcSegments | InteriorRingArcSegments | ExteriorRingArcSegments => Some(2),
            InteriorRingRect | ExteriorRingRect => Some(3),
            InteriorRingCircle | ExteriorRingCircle => Some(4),
            Unsupported | PointCluster | CompoundLine | CompoundExteriorRing
            | CompoundInteriorRing => None,
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            ElementType::CompoundLine
                | ElementType::CompoundExteriorRing
                | ElementType::CompoundInteriorRing
        )
    }

    pub fn is_point(&self) -> bool {
        matches!(
            self,
            ElementType::Point | ElementType::Orientation | ElementType::PointCluster
        )
    }

    pub fn is_line(&self) -> bool {
        matches!(
            self,
            ElementType::LineStraightSegments
                | ElementType::LineArcSegments
                | ElementType::CompoundLine
        )
    }

    pub fn is_interior_ring(&self) -> bool {
        self.etype() == 2003 || self.etype() == 2005
    }

    pub fn is_exterior_ring(&self) -> bool {
        self.etype() == 1003 || self.etype() == 1005
    }

    pub fn is_straight_segment(&self) -> bool {
        self.interpretation() == Some(1) && !self.is_point()
    }

    pub fn is_arc_segment(&self) -> bool {
        self.interpretation() == Some(2)
    }

    pub fn is_circle(&self) -> bool {
        self.interpretation() == Some(4)
    }

    pub fn is_rect(&self) -> bool {
        self.interpretation() == Some(3)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const FIXED: [ElementType; 13] = [
        ElementType::Point,
        ElementType::Orientation,
        ElementType::LineStraightSegments,
        ElementType::LineArcSegments,
        ElementType::InteriorRingStraightSegments,
        ElementType::ExteriorRingStraightSegments,
        ElementType::InteriorRingArcSegments,
        ElementType::ExteriorRingArcSegments,
        ElementType::InteriorRingRect,
        ElementType::ExteriorRingRect,
        ElementType::InteriorRingCircle,
        ElementType::ExteriorRingCircle,
        ElementType::Unsupported,
    ];

    #[test]
    fn fixed_interpretations_round_trip() {
        for element_type in FIXED {
            let interpretation = element_type.interpretation().unwrap_or(0);
            assert_eq!(
                ElementType::parse(element_type.etype(), interpretation).unwrap(),
                element_type
            );
        }
    }

    #[test]
    fn counted_interpretations() {
        assert_eq!(ElementType::parse(1, 7).unwrap(), ElementType::PointCluster);
        assert_eq!(ElementType::parse(4, 2).unwrap(), ElementType::CompoundLine);
        assert_eq!(
            ElementType::parse(1005, 3).unwrap(),
            ElementType::CompoundExteriorRing
        );
        assert_eq!(
            ElementType::parse(2005, 2).unwrap(),
            ElementType::CompoundInteriorRing
        );
        assert!(!ElementType::PointCluster.is_compound());
        assert!(ElementType::CompoundLine.is_compound());
    }

    #[test]
    fn unknown_pairs() {
        assert!(matches!(
            ElementType::parse(2, 3),
            Err(SdoError::InvalidElementType {
                etype: 2,
                interpretation: 3
            })
        ));
        assert!(ElementType::parse(1003, 5).is_err());
        assert!(ElementType::parse(3, 1).is_err());
        assert!(ElementType::parse(1, -1).is_err());
    }

    #[test]
    fn predicates() {
        assert!(ElementType::ExteriorRingRect.is_exterior_ring());
        assert!(ElementType::ExteriorRingRect.is_rect());
        assert!(ElementType::CompoundInteriorRing.is_interior_ring());
        assert!(!ElementType::CompoundInteriorRing.is_exterior_ring());
        assert!(ElementType::LineArcSegments.is_arc_segment());
        assert!(ElementType::LineArcSegments.is_line());
        assert!(ElementType::InteriorRingCircle.is_circle());
        assert!(ElementType::LineStraightSegments.is_straight_segment());
        assert!(!ElementType::Point.is_straight_segment());
        assert!(!ElementType::CompoundLine.is_straight_segment());
    }
}
