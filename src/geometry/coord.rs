use crate::datatypes::Dimension;

/// A coordinate with optional z and measure values.
///
/// Slots that are not part of the geometry's [`Dimension`] hold `NaN`. Equality treats two `NaN`
/// values as equal, so that coordinates with an absent (or unknown) measure compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self { x, y, z, m }
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, f64::NAN, f64::NAN)
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, f64::NAN)
    }

    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self::new(x, y, f64::NAN, m)
    }

    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self::new(x, y, z, m)
    }

    /// Access the n-th ordinate in `x, y, [z], [m]` order for the given dimension.
    pub fn nth(&self, dim: Dimension, n: usize) -> Option<f64> {
        match (dim, n) {
            (_, 0) => Some(self.x),
            (_, 1) => Some(self.y),
            (Dimension::XYZ | Dimension::XYZM, 2) => Some(self.z),
            (Dimension::XYM, 2) | (Dimension::XYZM, 3) => Some(self.m),
            _ => None,
        }
    }

    /// Whether the x and y ordinates are exactly equal.
    pub fn equals_2d(&self, other: &Coord) -> bool {
        self.x == other.x && self.y == other.y
    }
}

fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        same_value(self.x, other.x)
            && same_value(self.y, other.y)
            && same_value(self.z, other.z)
            && same_value(self.m, other.m)
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Coord::xy(x, y)
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Coord::xy(x, y)
    }
}
