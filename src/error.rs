//! Defines [`SdoError`], representing all errors returned by this crate.

use std::error::Error;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SdoError {
    /// The coordinate dimension is outside of `2..=4`.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(i32),

    /// The measure slot does not fit inside the coordinate dimension.
    #[error("Invalid LRS dimension {lrs_dimension} for a geometry of dimension {dimension}")]
    InvalidLrsDimension { dimension: i32, lrs_dimension: i32 },

    /// An `SDO_GTYPE` value that could not be decoded.
    #[error("Invalid SDO_GTYPE: {0}")]
    InvalidGType(i32),

    /// An `(etype, interpretation)` pair with no matching element type.
    #[error("Invalid element type: etype {etype}, interpretation {interpretation}")]
    InvalidElementType { etype: i32, interpretation: i32 },

    /// The geometry kind has no decoder or encoder.
    #[error("Geometry type not supported: {0}")]
    UnsupportedGeometryType(String),

    /// Returned for element or coordinate layouts that cannot be converted.
    #[error("Not supported: {0}")]
    Unsupported(String),

    /// An element index or ordinate range that lies outside of its array.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Element info and ordinates that are inconsistent with each other.
    #[error("Malformed SDO_GEOMETRY: {0}")]
    Malformed(String),

    /// Three arc points that do not determine a circle.
    #[error("Arc points are collinear or coincident")]
    DegenerateArc,

    /// A geometry without any coordinates.
    #[error("Cannot encode an empty geometry")]
    EmptyGeometry,

    /// Error parsing the `SDO_GEOMETRY(...)` text form.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid codec configuration.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Wraps an external error.
    #[error("External error: {0}")]
    External(#[from] Box<dyn Error + Send + Sync>),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, SdoError>;
