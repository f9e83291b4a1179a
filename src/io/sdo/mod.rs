//! Read and write Oracle Spatial `SDO_GEOMETRY` values.
//!
//! An `SDO_GEOMETRY` stores a geometry in five attributes: the geometry type code
//! ([`SdoGType`]), an SRID, an optional inline point ([`SdoPoint`]), the element info array
//! ([`ElemInfo`]) describing how to interpret the ordinates, and the flat ordinate array
//! ([`Ordinates`]). [`SdoGeometry`] holds all five.
//!
//! ```
//! use sdo_geometry::io::sdo::{from_sdo, to_sdo, SdoGeometry, SdoOptions};
//!
//! let sdo: SdoGeometry = "SDO_GEOMETRY(2002, 4326, NULL, SDO_ELEM_INFO_ARRAY(1, 2, 1), \
//!     SDO_ORDINATE_ARRAY(0, 0, 1, 1, 2, 0))"
//!     .parse()
//!     .unwrap();
//! let options = SdoOptions::default();
//! let geometry = from_sdo(&sdo, &options).unwrap();
//! assert_eq!(geometry.srid, 4326);
//! assert_eq!(to_sdo(&geometry, &options).unwrap(), sdo);
//! ```

pub mod binding;
pub mod elem_info;
pub mod element_type;
pub mod geometry;
pub mod gtype;
pub mod options;
pub mod ordinates;
pub mod point;
pub mod reader;
mod text;
pub mod writer;

pub use binding::{
    DecodedGeometry, SdoStruct, SdoStructFactory, SdoValueBinder, SdoValueExtractor,
};
pub use elem_info::ElemInfo;
pub use element_type::ElementType;
pub use geometry::SdoGeometry;
pub use gtype::{SdoGType, TypeGeometry};
pub use options::{GeometryModel, SdoOptions, MIN_ARC_TOLERANCE};
pub use ordinates::Ordinates;
pub use point::SdoPoint;
pub use reader::from_sdo;
pub use writer::to_sdo;
