//! Approximate circular arcs and circles with straight segments.

use std::f64::consts::{FRAC_PI_2, TAU};

use geo::algorithm::kernels::{Kernel, Orientation, RobustKernel};
use geo::{coord, Coord};

use crate::error::{Result, SdoError};

/// The smallest angle a single segment spans, whatever the tolerance.
///
/// The sagitta of such a segment is about `1.25e-11` times the radius.
const MIN_SEGMENT_ANGLE: f64 = 1e-5;

/// The circle through three points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Coord,
    radius: f64,
}

impl Circle {
    /// The unique circle passing through `p1`, `p2` and `p3`.
    ///
    /// Collinear or coincident points do not define a circle and return
    /// [`SdoError::DegenerateArc`].
    pub fn from_three_points(p1: Coord, p2: Coord, p3: Coord) -> Result<Self> {
        if RobustKernel::orient2d(p1, p2, p3) == Orientation::Collinear {
            return Err(SdoError::DegenerateArc);
        }

        let d = 2.0 * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y));
        if d == 0.0 || !d.is_finite() {
            return Err(SdoError::DegenerateArc);
        }

        let s1 = p1.x * p1.x + p1.y * p1.y;
        let s2 = p2.x * p2.x + p2.y * p2.y;
        let s3 = p3.x * p3.x + p3.y * p3.y;
        let center = coord! {
            x: (s1 * (p2.y - p3.y) + s2 * (p3.y - p1.y) + s3 * (p1.y - p2.y)) / d,
            y: (s1 * (p3.x - p2.x) + s2 * (p1.x - p3.x) + s3 * (p2.x - p1.x)) / d,
        };
        let radius = (p1.x - center.x).hypot(p1.y - center.y);
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Coord {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn angle(&self, p: Coord) -> f64 {
        (p.y - self.center.y).atan2(p.x - self.center.x)
    }

    fn point_at(&self, angle: f64) -> Coord {
        coord! {
            x: self.center.x + self.radius * angle.cos(),
            y: self.center.y + self.radius * angle.sin(),
        }
    }

    /// The largest angle a single segment may span so that it stays within `tolerance` of the
    /// circle, never below [`MIN_SEGMENT_ANGLE`].
    fn max_segment_angle(&self, tolerance: f64) -> f64 {
        let ratio = (tolerance / self.radius).clamp(0.0, 1.0);
        (2.0 * (1.0 - ratio).acos()).clamp(MIN_SEGMENT_ANGLE, FRAC_PI_2)
    }

    /// Push the points strictly between `from` and `to`, walking in the given direction.
    fn push_between(
        &self,
        out: &mut Vec<Coord>,
        from: Coord,
        to: Coord,
        counter_clockwise: bool,
        tolerance: f64,
    ) {
        let start = self.angle(from);
        let end = self.angle(to);
        let sweep = if counter_clockwise {
            (end - start).rem_euclid(TAU)
        } else {
            -(start - end).rem_euclid(TAU)
        };
        let segments = (sweep.abs() / self.max_segment_angle(tolerance))
            .ceil()
            .max(1.0) as usize;
        let step = sweep / segments as f64;
        out.extend((1..segments).map(|k| self.point_at(start + step * k as f64)));
    }
}

fn is_counter_clockwise(p1: Coord, p2: Coord, p3: Coord) -> Result<bool> {
    match RobustKernel::orient2d(p1, p2, p3) {
        Orientation::CounterClockwise => Ok(true),
        Orientation::Clockwise => Ok(false),
        Orientation::Collinear => Err(SdoError::DegenerateArc),
    }
}

/// Approximate the circular arc that starts at `p1`, passes through `p2` and ends at `p3`.
///
/// No segment deviates from the arc by more than `tolerance`, unless that would need segments
/// shorter than an angle of `1e-5` radians. The three input points are part of the output,
/// unchanged.
///
/// ```
/// use geo::coord;
/// use sdo_geometry::algorithm::linearize::linearize_arc;
///
/// let points = linearize_arc(
///     coord! { x: 1.0, y: 0.0 },
///     coord! { x: 0.0, y: 1.0 },
///     coord! { x: -1.0, y: 0.0 },
///     0.001,
/// )
/// .unwrap();
/// assert_eq!(points.first(), Some(&coord! { x: 1.0, y: 0.0 }));
/// assert_eq!(points.last(), Some(&coord! { x: -1.0, y: 0.0 }));
/// assert!(points.contains(&coord! { x: 0.0, y: 1.0 }));
/// ```
pub fn linearize_arc(p1: Coord, p2: Coord, p3: Coord, tolerance: f64) -> Result<Vec<Coord>> {
    let circle = Circle::from_three_points(p1, p2, p3)?;
    let ccw = is_counter_clockwise(p1, p2, p3)?;

    let mut out = vec![p1];
    circle.push_between(&mut out, p1, p2, ccw, tolerance);
    out.push(p2);
    circle.push_between(&mut out, p2, p3, ccw, tolerance);
    out.push(p3);
    Ok(out)
}

/// Approximate the full circle through `p1`, `p2` and `p3`.
///
/// The result is a closed ring starting and ending at `p1` that visits the three points in order.
pub fn linearize_circle(p1: Coord, p2: Coord, p3: Coord, tolerance: f64) -> Result<Vec<Coord>> {
    let circle = Circle::from_three_points(p1, p2, p3)?;
    let ccw = is_counter_clockwise(p1, p2, p3)?;

    let mut out = vec![p1];
    circle.push_between(&mut out, p1, p2, ccw, tolerance);
    out.push(p2);
    circle.push_between(&mut out, p2, p3, ccw, tolerance);
    out.push(p3);
    circle.push_between(&mut out, p3, p1, ccw, tolerance);
    out.push(p1);
    Ok(out)
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn circle_through_three_points() {
        let circle = Circle::from_three_points(
            coord! { x: 2.0, y: 0.0 },
            coord! { x: 0.0, y: 2.0 },
            coord! { x: -2.0, y: 0.0 },
        )
        .unwrap();
        assert_relative_eq!(circle.center().x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(circle.center().y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(circle.radius(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let result = linearize_arc(
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 1.0 },
            coord! { x: 2.0, y: 2.0 },
            0.01,
        );
        assert!(matches!(result, Err(SdoError::DegenerateArc)));

        let result = Circle::from_three_points(
            coord! { x: 1.0, y: 1.0 },
            coord! { x: 1.0, y: 1.0 },
            coord! { x: 2.0, y: 0.0 },
        );
        assert!(matches!(result, Err(SdoError::DegenerateArc)));
    }

    #[test]
    fn arc_points_stay_on_circle() {
        let p1 = coord! { x: 10.0, y: 0.0 };
        let p2 = coord! { x: 0.0, y: 10.0 };
        let p3 = coord! { x: -10.0, y: 0.0 };
        let points = linearize_arc(p1, p2, p3, 0.01).unwrap();

        assert_eq!(points[0], p1);
        assert_eq!(*points.last().unwrap(), p3);
        assert!(points.contains(&p2));
        assert!(points.len() > 3);
        for p in &points {
            assert_relative_eq!(p.x.hypot(p.y), 10.0, epsilon = 1e-9);
            // upper half only, the arc is counter-clockwise through (0, 10)
            assert!(p.y >= -1e-9);
        }
    }

    #[test]
    fn clockwise_arc() {
        let p1 = coord! { x: -10.0, y: 0.0 };
        let p2 = coord! { x: 0.0, y: 10.0 };
        let p3 = coord! { x: 10.0, y: 0.0 };
        let points = linearize_arc(p1, p2, p3, 0.01).unwrap();
        for p in &points {
            assert!(p.y >= -1e-9);
        }
        // x increases monotonically along a clockwise upper half circle
        assert!(points.windows(2).all(|w| w[1].x > w[0].x));
    }

    #[test]
    fn segments_respect_tolerance() {
        let p1 = coord! { x: 1.0, y: 0.0 };
        let p2 = coord! { x: 0.0, y: 1.0 };
        let p3 = coord! { x: -1.0, y: 0.0 };
        let coarse = linearize_arc(p1, p2, p3, 0.1).unwrap();
        let fine = linearize_arc(p1, p2, p3, 0.0001).unwrap();
        assert!(fine.len() > coarse.len());

        for w in fine.windows(2) {
            let mid = coord! { x: (w[0].x + w[1].x) / 2.0, y: (w[0].y + w[1].y) / 2.0 };
            let sagitta = 1.0 - mid.x.hypot(mid.y);
            assert!(sagitta <= 0.0001 + 1e-12);
        }
    }

    #[test]
    fn tiny_tolerance_is_bounded() {
        let p1 = coord! { x: 1.0, y: 0.0 };
        let p2 = coord! { x: 0.0, y: 1.0 };
        let p3 = coord! { x: -1.0, y: 0.0 };
        let points = linearize_arc(p1, p2, p3, 1e-17).unwrap();
        // two quarter arcs of at most pi / 2 / 1e-5 segments each
        assert!(points.len() <= 2 * 157_080 + 1);
        assert_eq!(*points.last().unwrap(), p3);
    }

    #[test]
    fn full_circle_is_closed() {
        let p1 = coord! { x: 0.0, y: -5.0 };
        let p2 = coord! { x: 5.0, y: 0.0 };
        let p3 = coord! { x: 0.0, y: 5.0 };
        let points = linearize_circle(p1, p2, p3, 0.005).unwrap();
        assert_eq!(points[0], p1);
        assert_eq!(*points.last().unwrap(), p1);
        assert!(points.contains(&p2));
        assert!(points.contains(&p3));
        // passes through the left side as well
        assert!(points.iter().any(|p| p.x < -4.9));
    }
}
