use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::datatypes::Dimension;
use crate::error::{Result, SdoError};

/// The geometry kind, stored in the last two digits of `SDO_GTYPE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum TypeGeometry {
    Unknown = 0,
    Point = 1,
    Line = 2,
    Polygon = 3,
    Collection = 4,
    MultiPoint = 5,
    MultiLine = 6,
    MultiPolygon = 7,
    Solid = 8,
    MultiSolid = 9,
}

/// The `SDO_GTYPE` of a geometry: `dimension * 1000 + lrs_dimension * 100 + type_geometry`.
///
/// `lrs_dimension` is the 1-based ordinate slot holding the measure, or 0 when the geometry
/// carries no explicit measure slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SdoGType {
    dimension: i32,
    lrs_dimension: i32,
    type_geometry: TypeGeometry,
}

impl SdoGType {
    pub fn new(dimension: i32, lrs_dimension: i32, type_geometry: TypeGeometry) -> Result<Self> {
        validate(dimension, lrs_dimension)?;
        Ok(Self {
            dimension,
            lrs_dimension,
            type_geometry,
        })
    }

    /// The gtype for a geometry of the given kind and coordinate dimension.
    ///
    /// Measures are always written into the last ordinate slot.
    pub fn from_dimension(dim: Dimension, type_geometry: TypeGeometry) -> Self {
        let (dimension, lrs_dimension) = match dim {
            Dimension::XY => (2, 0),
            Dimension::XYZ => (3, 0),
            Dimension::XYM => (3, 3),
            Dimension::XYZM => (4, 4),
        };
        Self {
            dimension,
            lrs_dimension,
            type_geometry,
        }
    }

    /// Decode an `SDO_GTYPE` integer.
    pub fn parse(value: i32) -> Result<Self> {
        if value < 0 {
            return Err(SdoError::InvalidGType(value));
        }
        let dimension = value / 1000;
        let lrs_dimension = (value - dimension * 1000) / 100;
        let type_code = value - dimension * 1000 - lrs_dimension * 100;
        let type_geometry =
            TypeGeometry::try_from(type_code).map_err(|_| SdoError::InvalidGType(value))?;
        Self::new(dimension, lrs_dimension, type_geometry)
    }

    /// Encode as an `SDO_GTYPE` integer.
    pub fn int_value(&self) -> i32 {
        self.dimension * 1000 + self.lrs_dimension * 100 + i32::from(self.type_geometry)
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    pub fn lrs_dimension(&self) -> i32 {
        self.lrs_dimension
    }

    pub fn type_geometry(&self) -> TypeGeometry {
        self.type_geometry
    }

    /// Whether this geometry carries measures.
    ///
    /// A 4D geometry without an explicit measure slot is treated as LRS, with the measure last.
    pub fn is_lrs_geometry(&self) -> bool {
        self.lrs_dimension > 0 || (self.lrs_dimension == 0 && self.dimension == 4)
    }

    /// The effective 1-based measure slot, or 0 for geometries without measures.
    pub fn measure_dimension(&self) -> i32 {
        if self.lrs_dimension > 0 {
            self.lrs_dimension
        } else if self.dimension == 4 {
            4
        } else {
            0
        }
    }

    /// The 1-based z slot, or 0 for geometries without z.
    pub fn z_dimension(&self) -> i32 {
        if self.dimension <= 2 {
            return 0;
        }
        if !self.is_lrs_geometry() {
            return self.dimension;
        }
        if self.dimension == 3 {
            // x, y and the measure
            return 0;
        }
        if self.measure_dimension() < self.dimension {
            self.dimension
        } else {
            self.dimension - 1
        }
    }

    /// The coordinate dimension of the decoded geometry.
    pub fn coord_dimension(&self) -> Dimension {
        Dimension::from_flags(self.z_dimension() > 0, self.is_lrs_geometry())
    }

    pub fn set_dimension(&mut self, dimension: i32) -> Result<()> {
        validate(dimension, self.lrs_dimension)?;
        self.dimension = dimension;
        Ok(())
    }

    pub fn set_lrs_dimension(&mut self, lrs_dimension: i32) -> Result<()> {
        validate(self.dimension, lrs_dimension)?;
        self.lrs_dimension = lrs_dimension;
        Ok(())
    }

    pub fn set_type_geometry(&mut self, type_geometry: TypeGeometry) {
        self.type_geometry = type_geometry;
    }

    /// A copy of this gtype with a different geometry kind.
    pub fn with_type_geometry(&self, type_geometry: TypeGeometry) -> Self {
        Self {
            type_geometry,
            ..*self
        }
    }
}

fn validate(dimension: i32, lrs_dimension: i32) -> Result<()> {
    if !(2..=4).contains(&dimension) {
        return Err(SdoError::InvalidDimension(dimension));
    }
    if lrs_dimension < 0 || lrs_dimension > dimension {
        return Err(SdoError::InvalidLrsDimension {
            dimension,
            lrs_dimension,
        });
    }
    Ok(())
}

impl Display for SdoGType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.int_value())
    }
}

impl TryFrom<i32> for SdoGType {
    type Error = SdoError;

    fn try_from(value: i32) -> Result<Self> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ALL_TYPES: [TypeGeometry; 10] = [
        TypeGeometry::Unknown,
        TypeGeometry::Point,
        TypeGeometry::Line,
        TypeGeometry::Polygon,
        TypeGeometry::Collection,
        TypeGeometry::MultiPoint,
        TypeGeometry::MultiLine,
        TypeGeometry::MultiPolygon,
        TypeGeometry::Solid,
        TypeGeometry::MultiSolid,
    ];

    #[test]
    fn parse_int_value_round_trip() {
        for dimension in 2..=4 {
            for lrs_dimension in 0..=dimension {
                for type_geometry in ALL_TYPES {
                    let gtype = SdoGType::new(dimension, lrs_dimension, type_geometry).unwrap();
                    assert_eq!(SdoGType::parse(gtype.int_value()).unwrap(), gtype);
                }
            }
        }
    }

    #[test]
    fn parse_components() {
        let gtype = SdoGType::parse(3302).unwrap();
        assert_eq!(gtype.dimension(), 3);
        assert_eq!(gtype.lrs_dimension(), 3);
        assert_eq!(gtype.type_geometry(), TypeGeometry::Line);
        assert!(gtype.is_lrs_geometry());
        assert_eq!(gtype.z_dimension(), 0);
        assert_eq!(gtype.coord_dimension(), Dimension::XYM);
    }

    #[test]
    fn z_dimension() {
        assert_eq!(SdoGType::parse(2001).unwrap().z_dimension(), 0);
        assert_eq!(SdoGType::parse(3001).unwrap().z_dimension(), 3);
        // measure in the last slot
        assert_eq!(SdoGType::parse(4402).unwrap().z_dimension(), 3);
        // measure before z
        assert_eq!(SdoGType::parse(4302).unwrap().z_dimension(), 4);
        // bare 4D geometries keep the measure last
        let bare = SdoGType::parse(4002).unwrap();
        assert!(bare.is_lrs_geometry());
        assert_eq!(bare.measure_dimension(), 4);
        assert_eq!(bare.z_dimension(), 3);
        assert_eq!(bare.coord_dimension(), Dimension::XYZM);
    }

    #[test]
    fn invalid_dimensions() {
        assert!(matches!(
            SdoGType::new(5, 0, TypeGeometry::Point),
            Err(SdoError::InvalidDimension(5))
        ));
        assert!(matches!(
            SdoGType::new(1, 0, TypeGeometry::Point),
            Err(SdoError::InvalidDimension(1))
        ));
        assert!(matches!(
            SdoGType::new(2, 3, TypeGeometry::Point),
            Err(SdoError::InvalidLrsDimension { .. })
        ));
        assert!(SdoGType::parse(2010).is_err());
        assert!(SdoGType::parse(-2001).is_err());
    }

    #[test]
    fn setters_validate() {
        let mut gtype = SdoGType::parse(3302).unwrap();
        assert!(gtype.set_dimension(2).is_err());
        assert_eq!(gtype.dimension(), 3);
        gtype.set_lrs_dimension(0).unwrap();
        gtype.set_dimension(2).unwrap();
        gtype.set_type_geometry(TypeGeometry::MultiLine);
        assert_eq!(gtype.int_value(), 2006);
    }

    #[test]
    fn from_dimension() {
        assert_eq!(
            SdoGType::from_dimension(Dimension::XYM, TypeGeometry::Line).int_value(),
            3302
        );
        assert_eq!(
            SdoGType::from_dimension(Dimension::XYZM, TypeGeometry::Point).int_value(),
            4401
        );
        for dim in [
            Dimension::XY,
            Dimension::XYZ,
            Dimension::XYM,
            Dimension::XYZM,
        ] {
            let gtype = SdoGType::from_dimension(dim, TypeGeometry::Polygon);
            assert_eq!(gtype.coord_dimension(), dim);
        }
    }
}
