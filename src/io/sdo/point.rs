/// The inline `SDO_POINT` of an `SDO_GEOMETRY`, used as a fast path for single points.
///
/// `z` is `NaN` for two-dimensional points.
#[derive(Debug, Clone, Copy)]
pub struct SdoPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SdoPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, f64::NAN)
    }

    /// The first `dimension` ordinates of this point.
    pub(crate) fn ordinates(&self, dimension: usize) -> Vec<f64> {
        [self.x, self.y, self.z]
            .into_iter()
            .take(dimension.min(3))
            .collect()
    }
}

impl PartialEq for SdoPoint {
    fn eq(&self, other: &Self) -> bool {
        [self.x, self.y, self.z]
            .into_iter()
            .zip([other.x, other.y, other.z])
            .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()))
    }
}
