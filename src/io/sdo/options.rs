use serde::{Deserialize, Serialize};

use crate::error::{Result, SdoError};

/// Which geometry representation decoding produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryModel {
    /// [`crate::geometry::SridGeometry`], keeping z and measure values.
    #[default]
    Native,

    /// [`geo::Geometry`] plus the SRID. Only x and y are kept.
    Geo,
}

/// Options for reading and writing `SDO_GEOMETRY` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdoOptions {
    /// Maximum distance between a circular arc and its linear approximation, relative to the
    /// arc's radius.
    pub arc_tolerance: f64,

    /// Write two- and three-dimensional points into the inline `SDO_POINT` instead of the
    /// element info and ordinates arrays.
    pub use_point_type: bool,

    /// The representation produced when decoding.
    pub model: GeometryModel,
}

/// The smallest accepted [`SdoOptions::arc_tolerance`].
pub const MIN_ARC_TOLERANCE: f64 = 1e-9;

impl SdoOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.arc_tolerance.is_finite() || self.arc_tolerance < MIN_ARC_TOLERANCE {
            return Err(SdoError::InvalidOptions(format!(
                "arc_tolerance must be a number of at least {MIN_ARC_TOLERANCE}, got {}",
                self.arc_tolerance
            )));
        }
        Ok(())
    }
}

impl Default for SdoOptions {
    fn default() -> Self {
        Self {
            arc_tolerance: 0.001,
            use_point_type: false,
            model: GeometryModel::Native,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let options = SdoOptions::default();
        assert_eq!(options.arc_tolerance, 0.001);
        assert!(!options.use_point_type);
        assert_eq!(options.model, GeometryModel::Native);
        options.validate().unwrap();
    }

    #[test]
    fn from_json() {
        let options: SdoOptions =
            serde_json::from_str(r#"{"model": "geo", "use_point_type": true}"#).unwrap();
        assert_eq!(options.model, GeometryModel::Geo);
        assert!(options.use_point_type);
        assert_eq!(options.arc_tolerance, 0.001);
    }

    #[test]
    fn invalid_tolerance() {
        for arc_tolerance in [0.0, -1.0, 1e-10, 1e-17, f64::NAN, f64::INFINITY] {
            let options = SdoOptions {
                arc_tolerance,
                ..Default::default()
            };
            assert!(matches!(
                options.validate(),
                Err(SdoError::InvalidOptions(_))
            ));
        }
    }

    #[test]
    fn smallest_tolerance() {
        let options = SdoOptions {
            arc_tolerance: MIN_ARC_TOLERANCE,
            ..Default::default()
        };
        options.validate().unwrap();
    }
}
