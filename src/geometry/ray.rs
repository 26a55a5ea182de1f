use std::fmt;

use nalgebra::{Point, SVector};

use crate::math::Real;

use super::{fmt_components, PointStatus};

/// A half-line starting at `origin` and extending along `direction`.
///
/// Only non-negative parameters lie on the ray. The direction is not
/// normalized by the type; distances are measured in multiples of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T: Real, const D: usize> {
    origin: Point<T, D>,
    direction: SVector<T, D>,
}

/// 3D ray over `f64`, the picking ray of the editor views.
pub type Ray3 = Ray<f64, 3>;

impl<T: Real, const D: usize> Ray<T, D> {
    /// Creates a new ray.
    #[must_use]
    pub fn new(origin: Point<T, D>, direction: SVector<T, D>) -> Self {
        Self { origin, direction }
    }

    /// Returns the origin of the ray.
    #[must_use]
    pub fn origin(&self) -> &Point<T, D> {
        &self.origin
    }

    /// Returns the direction of the ray.
    #[must_use]
    pub fn direction(&self) -> &SVector<T, D> {
        &self.direction
    }

    /// Returns `origin + direction * distance`.
    #[must_use]
    pub fn point_at_distance(&self, distance: T) -> Point<T, D> {
        self.origin + self.direction * distance
    }

    /// Classifies a point as ahead of, behind, or level with the origin
    /// along the ray direction.
    #[must_use]
    pub fn point_status(&self, point: &Point<T, D>) -> PointStatus {
        let scale = self.direction.dot(&(point - self.origin));
        if scale > T::POINT_STATUS_EPSILON {
            PointStatus::Above
        } else if scale < -T::POINT_STATUS_EPSILON {
            PointStatus::Below
        } else {
            PointStatus::Inside
        }
    }

    /// Distance along the ray to the orthogonal projection of `point`.
    #[must_use]
    pub fn distance_to_point_on_ray(&self, point: &Point<T, D>) -> T {
        (point - self.origin).dot(&self.direction)
    }
}

impl<T: Real, const D: usize> fmt::Display for Ray<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ origin: (")?;
        fmt_components(f, &self.origin.coords)?;
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
    fn point_at_distance() {
        let ray = Ray3::new(Point3::origin(), Vector3::x());
        assert_eq!(ray.point_at_distance(5.0), Point3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn point_status() {
        let ray = Ray3::new(Point3::origin(), Vector3::z());
        assert_eq!(ray.point_status(&Point3::new(0.0, 0.0, 1.0)), PointStatus::Above);
        assert_eq!(ray.point_status(&Point3::new(0.0, 0.0, 0.0)), PointStatus::Inside);
        assert_eq!(ray.point_status(&Point3::new(0.0, 0.0, -1.0)), PointStatus::Below);
    }

    #[test]
    fn point_status_ignores_lateral_offset() {
        let ray = Ray3::new(Point3::origin(), Vector3::z());
        assert_eq!(ray.point_status(&Point3::new(7.0, -3.0, 0.0)), PointStatus::Inside);
    }

    #[test]
    fn distance_to_projected_point() {
        let ray = Ray3::new(Point3::new(1.0, 0.0, 0.0), Vector3::x());
        assert_relative_eq!(ray.distance_to_point_on_ray(&Point3::new(4.0, 2.0, -1.0)), 3.0);
        assert_relative_eq!(ray.distance_to_point_on_ray(&Point3::new(-1.0, 0.0, 0.0)), -2.0);
    }

    #[test]
    fn display() {
        let ray = Ray3::new(Point3::new(1.0, 2.0, 3.0), Vector3::y());
        assert_eq!(ray.to_string(), "{ origin: (1 2 3), direction: (0 1 0) }");
    }

    #[test]
    fn works_in_two_dimensions() {
        let ray = Ray::<f32, 2>::new(nalgebra::Point2::new(0.0, 0.0), nalgebra::Vector2::new(0.0, 2.0));
        assert_eq!(ray.point_at_distance(1.5), nalgebra::Point2::new(0.0, 3.0));
    }
}
