use std::fmt;

use nalgebra::{Point, SVector};

use crate::error::{GeometryError, Result};
use crate::math::Real;

use super::fmt_components;

/// An axis-aligned bounding box with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<T: Real, const D: usize> {
    min: Point<T, D>,
    max: Point<T, D>,
}

/// 2D box, used for lasso selection rectangles.
pub type BBox2 = BoundingBox<f64, 2>;

/// 3D box, used for brush and entity bounds.
pub type BBox3 = BoundingBox<f64, 3>;

impl<T: Real, const D: usize> BoundingBox<T, D> {
    /// Creates a new box from its corners.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidBounds` if `min` exceeds `max` on any axis.
    pub fn new(min: Point<T, D>, max: Point<T, D>) -> Result<Self> {
        for axis in 0..D {
            if min[axis] > max[axis] {
                return Err(GeometryError::InvalidBounds {
                    axis,
                    min: min[axis].to_string(),
                    max: max[axis].to_string(),
                }
                .into());
            }
        }
        Ok(Self { min, max })
    }

    /// Creates the smallest box containing all `points`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `points` is empty.
    pub fn from_points(points: &[Point<T, D>]) -> Result<Self> {
        let Some((first, rest)) = points.split_first() else {
            return Err(GeometryError::Degenerate("bounding box of no points".into()).into());
        };
        let start = Self {
            min: *first,
            max: *first,
        };
        Ok(rest.iter().fold(start, |bounds, p| bounds.merged_with_point(p)))
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> &Point<T, D> {
        &self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> &Point<T, D> {
        &self.max
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point<T, D> {
        let two = T::one() + T::one();
        Point::from((self.min.coords + self.max.coords) / two)
    }

    /// Returns the extent of the box along each axis.
    #[must_use]
    pub fn size(&self) -> SVector<T, D> {
        self.max - self.min
    }

    /// Returns the smallest box containing both boxes.
    #[must_use]
    pub fn merged_with(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Returns the smallest box containing this box and `point`.
    #[must_use]
    pub fn merged_with_point(&self, point: &Point<T, D>) -> Self {
        Self {
            min: self.min.inf(point),
            max: self.max.sup(point),
        }
    }

    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: &Point<T, D>) -> bool {
        (0..D).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Returns `true` if `other` lies entirely inside this box.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Returns `true` if the boxes overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        (0..D).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }
}

impl<T: Real, const D: usize> fmt::Display for BoundingBox<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ (")?;
        fmt_components(f, &self.min.coords)?;
        f.write_str(") (")?;
        fmt_components(f, &self.max.coords)?;
        f.write_str(") ]")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point2, Point3, Vector3};

    fn unit_box() -> BBox3 {
        BBox3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0)).unwrap()
    }

    #[test]
    fn rejects_inverted_bounds() {
        let r = BBox3::new(Point3::new(0.0, 2.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        match r {
            Err(crate::Error::Geometry(GeometryError::InvalidBounds { axis, .. })) => {
                assert_eq!(axis, 1);
            }
            other => panic!("expected InvalidBounds, got {other:?}"),
        }
    }

    #[test]
    fn from_points_covers_all() {
        let bounds = BBox3::from_points(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 1.0, 1.0),
            Point3::new(-1.0, 3.0, 0.5),
        ])
        .unwrap();
        assert_eq!(*bounds.min(), Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(*bounds.max(), Point3::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn from_no_points_fails() {
        assert!(BBox3::from_points(&[]).is_err());
    }

    #[test]
    fn center_and_size() {
        let bounds = BBox3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0)).unwrap();
        assert_eq!(bounds.center(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.size(), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn merge() {
        let a = BBox3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0)).unwrap();
        let merged = a.merged_with(&unit_box());
        assert_eq!(*merged.min(), Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(*merged.max(), Point3::new(2.0, 1.0, 1.0));
    }

    #[test]
    fn merge_with_point_grows_each_axis_independently() {
        let merged = unit_box().merged_with_point(&Point3::new(3.0, -2.0, 0.5));
        assert_eq!(*merged.min(), Point3::new(-1.0, -2.0, -1.0));
        assert_eq!(*merged.max(), Point3::new(3.0, 1.0, 1.0));
    }

    #[test]
    fn containment_is_inclusive() {
        let bounds = unit_box();
        assert!(bounds.contains_point(&Point3::new(1.0, 0.0, -1.0)));
        assert!(!bounds.contains_point(&Point3::new(1.01, 0.0, 0.0)));
        let inner = BBox3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.5, 0.5, 1.0)).unwrap();
        assert!(bounds.contains(&inner));
        assert!(!inner.contains(&bounds));
    }

    #[test]
    fn intersection_of_boxes() {
        let bounds = unit_box();
        let touching = BBox3::new(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0)).unwrap();
        let apart = BBox3::new(Point3::new(3.0, 0.0, 0.0), Point3::new(4.0, 1.0, 1.0)).unwrap();
        assert!(bounds.intersects(&touching));
        assert!(!bounds.intersects(&apart));
    }

    #[test]
    fn display_in_two_dimensions() {
        let bounds = BBox2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 1.0)).unwrap();
        assert_eq!(bounds.to_string(), "[ (0 0) (2 1) ]");
    }
}
