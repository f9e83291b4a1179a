//! The boundary to a database driver.
//!
//! Drivers hand over `SDO_GEOMETRY` values as a loosely typed record of nullable numbers,
//! [`SdoStruct`]. [`SdoValueExtractor`] turns such a record into a geometry and
//! [`SdoValueBinder`] goes the other way, delegating the creation of the vendor object to an
//! [`SdoStructFactory`] supplied by the driver integration.

use tracing::trace;

use crate::error::{Result, SdoError};
use crate::geometry::SridGeometry;
use crate::io::geo::{geometry_from_geo, geometry_to_geo};
use crate::io::sdo::elem_info::ElemInfo;
use crate::io::sdo::geometry::SdoGeometry;
use crate::io::sdo::gtype::SdoGType;
use crate::io::sdo::options::{GeometryModel, SdoOptions};
use crate::io::sdo::ordinates::Ordinates;
use crate::io::sdo::point::SdoPoint;
use crate::io::sdo::reader::from_sdo;
use crate::io::sdo::writer::to_sdo;

/// The five attributes of an `SDO_GEOMETRY` object as read from or written to a driver.
///
/// Every attribute, and every entry of the arrays, may be SQL `NULL`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SdoStruct {
    pub gtype: Option<i64>,
    pub srid: Option<i64>,
    pub point: Option<[Option<f64>; 3]>,
    pub elem_info: Option<Vec<Option<i64>>>,
    pub ordinates: Option<Vec<Option<f64>>>,
}

impl SdoStruct {
    /// Whether every attribute is `NULL`, i.e. the value itself is SQL `NULL`.
    pub fn is_null(&self) -> bool {
        self.gtype.is_none()
            && self.srid.is_none()
            && self.point.is_none()
            && self.elem_info.is_none()
            && self.ordinates.is_none()
    }
}

fn to_i32(value: i64, what: &str) -> Result<i32> {
    i32::try_from(value).map_err(|_| SdoError::OutOfRange(format!("{what} {value}")))
}

fn read_point(point: &[Option<f64>; 3]) -> Result<Option<SdoPoint>> {
    match point {
        [None, None, None] => Ok(None),
        [Some(x), Some(y), z] => Ok(Some(SdoPoint::new(*x, *y, z.unwrap_or(f64::NAN)))),
        _ => Err(SdoError::Malformed("SDO_POINT without x or y".to_string())),
    }
}

impl TryFrom<&SdoStruct> for SdoGeometry {
    type Error = SdoError;

    fn try_from(value: &SdoStruct) -> Result<Self> {
        let gtype = value
            .gtype
            .ok_or_else(|| SdoError::Malformed("SDO_GTYPE is NULL".to_string()))?;
        let gtype = SdoGType::parse(to_i32(gtype, "SDO_GTYPE")?)?;
        let srid = value
            .srid
            .map(|srid| to_i32(srid, "SDO_SRID"))
            .transpose()?
            .unwrap_or(0);
        let point = match &value.point {
            Some(point) => read_point(point)?,
            None => None,
        };

        let triplets = value
            .elem_info
            .iter()
            .flatten()
            .enumerate()
            .map(|(i, entry)| {
                let entry = entry.ok_or_else(|| {
                    SdoError::Malformed(format!("SDO_ELEM_INFO entry {} is NULL", i + 1))
                })?;
                to_i32(entry, "SDO_ELEM_INFO entry")
            })
            .collect::<Result<Vec<_>>>()?;
        let ordinates = value
            .ordinates
            .iter()
            .flatten()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect();

        Ok(SdoGeometry::new(
            gtype,
            srid,
            point,
            ElemInfo::new(triplets)?,
            Ordinates::new(ordinates),
        ))
    }
}

impl From<&SdoGeometry> for SdoStruct {
    fn from(value: &SdoGeometry) -> Self {
        let nullable = |v: f64| if v.is_nan() { None } else { Some(v) };
        Self {
            gtype: Some(value.gtype().int_value().into()),
            srid: (value.srid() != 0).then(|| value.srid().into()),
            point: value
                .point()
                .map(|p| [nullable(p.x), nullable(p.y), nullable(p.z)]),
            elem_info: (!value.info().is_empty()).then(|| {
                value
                    .info()
                    .triplets()
                    .iter()
                    .map(|v| Some((*v).into()))
                    .collect()
            }),
            ordinates: (!value.ordinates().is_empty()).then(|| {
                value
                    .ordinates()
                    .ordinate_array()
                    .iter()
                    .map(|v| nullable(*v))
                    .collect()
            }),
        }
    }
}

/// A decoded geometry in the representation chosen by [`GeometryModel`].
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedGeometry {
    Native(SridGeometry),
    Geo { srid: i32, geometry: geo::Geometry },
}

impl DecodedGeometry {
    pub fn srid(&self) -> i32 {
        match self {
            DecodedGeometry::Native(g) => g.srid,
            DecodedGeometry::Geo { srid, .. } => *srid,
        }
    }
}

/// Creates the driver's `SDO_GEOMETRY` object from its attributes.
///
/// Implemented by the driver integration, which owns the connection type and the object type.
pub trait SdoStructFactory {
    type Connection;
    type Object;

    fn create(&self, connection: &Self::Connection, value: &SdoStruct) -> Result<Self::Object>;
}

/// Reads geometries out of driver records.
#[derive(Debug, Clone, Default)]
pub struct SdoValueExtractor {
    options: SdoOptions,
}

impl SdoValueExtractor {
    pub fn new(options: SdoOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &SdoOptions {
        &self.options
    }

    /// Decode a driver record. A SQL `NULL` value decodes to `None`.
    pub fn extract(&self, value: &SdoStruct) -> Result<Option<DecodedGeometry>> {
        if value.is_null() {
            trace!("extracted NULL SDO_GEOMETRY");
            return Ok(None);
        }
        let sdo = SdoGeometry::try_from(value)?;
        let geometry = from_sdo(&sdo, &self.options)?;
        let decoded = match self.options.model {
            GeometryModel::Native => DecodedGeometry::Native(geometry),
            GeometryModel::Geo => DecodedGeometry::Geo {
                srid: geometry.srid,
                geometry: geometry_to_geo(&geometry.geometry),
            },
        };
        Ok(Some(decoded))
    }
}

/// Writes geometries into driver objects.
#[derive(Debug, Clone, Default)]
pub struct SdoValueBinder {
    options: SdoOptions,
}

impl SdoValueBinder {
    pub fn new(options: SdoOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &SdoOptions {
        &self.options
    }

    /// Encode `geometry` and hand its attributes to `factory`.
    pub fn bind<F: SdoStructFactory>(
        &self,
        geometry: &SridGeometry,
        connection: &F::Connection,
        factory: &F,
    ) -> Result<F::Object> {
        let sdo = to_sdo(geometry, &self.options)?;
        factory.create(connection, &SdoStruct::from(&sdo))
    }

    /// Encode a two-dimensional [`geo::Geometry`] with the given SRID.
    pub fn bind_geo<F: SdoStructFactory>(
        &self,
        geometry: &geo::Geometry,
        srid: i32,
        connection: &F::Connection,
        factory: &F,
    ) -> Result<F::Object> {
        self.bind(&geometry_from_geo(geometry, srid), connection, factory)
    }
}

#[cfg(test)]
mod test {
    use geo::line_string;

    use super::*;
    use crate::datatypes::Dimension;
    use crate::geometry::{Coord, Geometry, Point};
    use crate::test::sdo;

    /// Records the attributes it was asked to create an object from.
    struct EchoFactory;

    impl SdoStructFactory for EchoFactory {
        type Connection = ();
        type Object = SdoStruct;

        fn create(&self, _connection: &(), value: &SdoStruct) -> Result<SdoStruct> {
            Ok(value.clone())
        }
    }

    #[test]
    fn struct_round_trip() {
        for geom in [sdo::point(), sdo::multi_polygon(), sdo::point_and_line_collection()] {
            let raw = SdoStruct::from(&geom);
            assert_eq!(SdoGeometry::try_from(&raw).unwrap(), geom);
        }
    }

    #[test]
    fn struct_nulls() {
        let raw = SdoStruct::from(&sdo::point());
        assert_eq!(raw.gtype, Some(2001));
        assert_eq!(raw.srid, None);
        assert_eq!(raw.point, None);
        assert_eq!(raw.elem_info, Some(vec![Some(1), Some(1), Some(1)]));

        let raw = SdoStruct {
            gtype: Some(2002),
            elem_info: Some(vec![Some(1), Some(2), Some(1)]),
            ordinates: Some(vec![Some(0.), None, Some(1.), Some(1.)]),
            ..Default::default()
        };
        let geom = SdoGeometry::try_from(&raw).unwrap();
        assert_eq!(geom.srid(), 0);
        assert!(geom.ordinates().ordinate_array()[1].is_nan());
    }

    #[test]
    fn struct_errors() {
        let missing_gtype = SdoStruct {
            srid: Some(4326),
            ..Default::default()
        };
        assert!(matches!(
            SdoGeometry::try_from(&missing_gtype),
            Err(SdoError::Malformed(_))
        ));

        let null_triplet = SdoStruct {
            gtype: Some(2001),
            elem_info: Some(vec![Some(1), None, Some(1)]),
            ordinates: Some(vec![Some(1.), Some(2.)]),
            ..Default::default()
        };
        assert!(matches!(
            SdoGeometry::try_from(&null_triplet),
            Err(SdoError::Malformed(_))
        ));

        let huge_srid = SdoStruct {
            gtype: Some(2001),
            srid: Some(i64::MAX),
            ..Default::default()
        };
        assert!(matches!(
            SdoGeometry::try_from(&huge_srid),
            Err(SdoError::OutOfRange(_))
        ));
    }

    #[test]
    fn inline_point() {
        let raw = SdoStruct {
            gtype: Some(2001),
            srid: Some(8307),
            point: Some([Some(-79.), Some(43.), None]),
            ..Default::default()
        };
        let decoded = SdoValueExtractor::default().extract(&raw).unwrap().unwrap();
        assert_eq!(decoded.srid(), 8307);
        assert_eq!(
            decoded,
            DecodedGeometry::Native(SridGeometry::new(
                8307,
                Dimension::XY,
                Point(Coord::xy(-79., 43.))
            ))
        );
    }

    #[test]
    fn extract_null() {
        let extractor = SdoValueExtractor::default();
        assert_eq!(extractor.extract(&SdoStruct::default()).unwrap(), None);
    }

    #[test]
    fn extract_geo_model() {
        let extractor = SdoValueExtractor::new(SdoOptions {
            model: GeometryModel::Geo,
            ..Default::default()
        })
        .unwrap();
        let decoded = extractor
            .extract(&SdoStruct::from(&sdo::line()))
            .unwrap()
            .unwrap();
        assert_eq!(
            decoded,
            DecodedGeometry::Geo {
                srid: 0,
                geometry: line_string![(x: 0., y: 0.), (x: 1., y: 1.), (x: 2., y: 0.)].into(),
            }
        );
    }

    #[test]
    fn bind_native() {
        let binder = SdoValueBinder::default();
        let geometry = SridGeometry::new(0, Dimension::XY, Point(Coord::xy(10., 20.)));
        let raw = binder.bind(&geometry, &(), &EchoFactory).unwrap();
        assert_eq!(raw, SdoStruct::from(&sdo::point()));

        let extracted = SdoValueExtractor::default().extract(&raw).unwrap();
        assert_eq!(extracted, Some(DecodedGeometry::Native(geometry)));
    }

    #[test]
    fn bind_geo() {
        let binder = SdoValueBinder::default();
        let line: geo::Geometry = line_string![(x: 0., y: 0.), (x: 1., y: 1.), (x: 2., y: 0.)].into();
        let raw = binder.bind_geo(&line, 0, &(), &EchoFactory).unwrap();
        assert_eq!(raw, SdoStruct::from(&sdo::line()));
    }

    #[test]
    fn bind_empty() {
        let binder = SdoValueBinder::default();
        let empty = SridGeometry::new(0, Dimension::XY, Geometry::MultiPoint(Default::default()));
        assert!(matches!(
            binder.bind(&empty, &(), &EchoFactory),
            Err(SdoError::EmptyGeometry)
        ));
    }

    #[test]
    fn rejects_bad_options() {
        let options = SdoOptions {
            arc_tolerance: 0.,
            ..Default::default()
        };
        assert!(SdoValueExtractor::new(options.clone()).is_err());
        assert!(SdoValueBinder::new(options).is_err());
    }
}
