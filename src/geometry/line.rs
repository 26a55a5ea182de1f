use std::fmt;

use nalgebra::{Point, SVector};

use crate::math::tolerance::{is_zero, vec_eq_eps};
use crate::math::Real;

use super::fmt_components;

/// An infinite line through `point` along `direction`.
///
/// The parametric form is: `P(t) = point + t * direction`. The direction
/// is not normalized by the type; callers normalize it when distances
/// must be metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<T: Real, const D: usize> {
    point: Point<T, D>,
    direction: SVector<T, D>,
}

/// 3D line over `f64`.
pub type Line3 = Line<f64, 3>;

impl<T: Real, const D: usize> Line<T, D> {
    /// Creates a new line from an anchor point and direction.
    #[must_use]
    pub fn new(point: Point<T, D>, direction: SVector<T, D>) -> Self {
        Self { point, direction }
    }

    /// Returns the anchor point of the line.
    #[must_use]
    pub fn point(&self) -> &Point<T, D> {
        &self.point
    }

    /// Returns the direction of the line.
    #[must_use]
    pub fn direction(&self) -> &SVector<T, D> {
        &self.direction
    }

    /// Projects `point` onto the line and returns the signed distance from
    /// the anchor to the projection.
    #[must_use]
    pub fn distance(&self, point: &Point<T, D>) -> T {
        (point - self.point).dot(&self.direction)
    }

    /// Returns the point at `distance` along the direction.
    #[must_use]
    pub fn point_at_distance(&self, distance: T) -> Point<T, D> {
        self.point + self.direction * distance
    }

    /// Orthogonally projects `point` onto the line.
    #[must_use]
    pub fn project(&self, point: &Point<T, D>) -> Point<T, D> {
        self.point_at_distance(self.distance(point))
    }

    /// Returns the unique representation of this line.
    ///
    /// The direction is normalized and oriented so its first non-zero
    /// component is positive; the anchor is the point of the line closest
    /// to the origin. A line with a zero direction is returned unchanged.
    #[must_use]
    pub fn make_canonical(&self) -> Self {
        let len_sq = self.direction.norm_squared();
        if len_sq <= T::zero() {
            return *self;
        }
        let mut direction = self.direction / len_sq.sqrt();
        if let Some(lead) = direction.iter().copied().find(|c| !is_zero(*c)) {
            if lead < T::zero() {
                direction = -direction;
            }
        }
        let along = self.point.coords.dot(&direction);
        Self::new(self.point - direction * along, direction)
    }

    /// Returns `true` if both lines describe the same set of points, within
    /// the kernel tolerance.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        let a = self.make_canonical();
        let b = other.make_canonical();
        vec_eq_eps(&a.point.coords, &b.point.coords, T::ALMOST_ZERO)
            && vec_eq_eps(&a.direction, &b.direction, T::ALMOST_ZERO)
    }
}

impl<T: Real, const D: usize> fmt::Display for Line<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ point: (")?;
        fmt_components(f, &self.point.coords)?;
        f.write_str("), direction: (")?;
        fmt_components(f, &self.direction)?;
        f.write_str(") }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use approx::assert_relative_eq;

    #[test]
    fn distance_and_projection() {
        let line = Line3::new(Point3::new(1.0, 1.0, 0.0), Vector3::x());
        assert_relative_eq!(line.distance(&Point3::new(4.0, 5.0, 6.0)), 3.0);
        assert_eq!(line.project(&Point3::new(4.0, 5.0, 6.0)), Point3::new(4.0, 1.0, 0.0));
    }

    #[test]
    fn distance_is_negative_behind_anchor() {
        let line = Line3::new(Point3::origin(), Vector3::y());
        assert_relative_eq!(line.distance(&Point3::new(0.0, -2.5, 0.0)), -2.5);
    }

    #[test]
    fn canonical_anchor_is_closest_to_origin() {
        let line = Line3::new(Point3::new(7.0, 2.0, 3.0), Vector3::new(-2.0, 0.0, 0.0));
        let canonical = line.make_canonical();
        assert_relative_eq!(canonical.point().coords, Vector3::new(0.0, 2.0, 3.0));
        assert_relative_eq!(*canonical.direction(), Vector3::x());
    }

    #[test]
    fn different_anchors_are_equivalent() {
        let dir = Vector3::new(1.0, 1.0, 0.0).normalize();
        let a = Line3::new(Point3::new(0.0, 0.0, 5.0), dir);
        let b = Line3::new(Point3::new(3.0, 3.0, 5.0), -dir);
        assert!(a.is_equivalent(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn offset_lines_are_not_equivalent() {
        let a = Line3::new(Point3::origin(), Vector3::z());
        let b = Line3::new(Point3::new(1.0, 0.0, 0.0), Vector3::z());
        assert!(!a.is_equivalent(&b));
    }

    #[test]
    fn zero_direction_is_left_alone() {
        let line = Line3::new(Point3::new(1.0, 2.0, 3.0), Vector3::zeros());
        assert_eq!(line.make_canonical(), line);
    }

    #[test]
    fn display() {
        let line = Line3::new(Point3::new(0.0, 1.0, 0.0), Vector3::z());
        assert_eq!(line.to_string(), "{ point: (0 1 0), direction: (0 0 1) }");
    }
}
