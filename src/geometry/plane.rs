use std::fmt;

use nalgebra::{Point, SVector};

use crate::error::{GeometryError, PolygonError, Result};
use crate::math::tolerance::{is_null, is_zero};
use crate::math::{Point3Of, Real, Vector3Of};

use super::{fmt_components, PointStatus};

/// An infinite plane `{ p | dot(p, normal) = distance }`.
///
/// The normal is unit length; `distance` is the signed offset of the plane
/// from the origin along the normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<T: Real, const D: usize> {
    normal: SVector<T, D>,
    distance: T,
}

/// 3D plane over `f64`, the face plane of a brush.
pub type Plane3 = Plane<f64, 3>;

impl<T: Real, const D: usize> Plane<T, D> {
    /// Creates a plane from a unit normal and a signed distance.
    #[must_use]
    pub fn new(normal: SVector<T, D>, distance: T) -> Self {
        debug_assert!(
            is_zero(normal.norm_squared() - T::one()),
            "plane normal must be unit length"
        );
        Self { normal, distance }
    }

    /// Creates a plane through `anchor` with the given unit normal.
    #[must_use]
    pub fn from_anchor(anchor: &Point<T, D>, normal: SVector<T, D>) -> Self {
        Self::new(normal, anchor.coords.dot(&normal))
    }

    /// Creates a plane through `anchor`, normalizing `normal` first.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the normal is zero-length.
    pub fn from_normal(anchor: &Point<T, D>, normal: SVector<T, D>) -> Result<Self> {
        let len = normal.norm();
        if len <= T::ALMOST_ZERO {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::from_anchor(anchor, normal / len))
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &SVector<T, D> {
        &self.normal
    }

    /// Returns the signed distance from the origin.
    #[must_use]
    pub fn distance(&self) -> T {
        self.distance
    }

    /// Returns the point of the plane closest to the origin.
    #[must_use]
    pub fn anchor(&self) -> Point<T, D> {
        Point::from(self.normal * self.distance)
    }

    /// Signed distance from `point` to the plane.
    /// Positive = on the normal side, negative = opposite.
    #[must_use]
    pub fn point_distance(&self, point: &Point<T, D>) -> T {
        point.coords.dot(&self.normal) - self.distance
    }

    /// Classifies a point relative to the plane.
    #[must_use]
    pub fn point_status(&self, point: &Point<T, D>) -> PointStatus {
        let dist = self.point_distance(point);
        if dist > T::POINT_STATUS_EPSILON {
            PointStatus::Above
        } else if dist < -T::POINT_STATUS_EPSILON {
            PointStatus::Below
        } else {
            PointStatus::Inside
        }
    }

    /// Orthogonally projects `point` onto the plane.
    #[must_use]
    pub fn project_point(&self, point: &Point<T, D>) -> Point<T, D> {
        point - self.normal * self.point_distance(point)
    }

    /// Removes the normal component of `v`.
    #[must_use]
    pub fn project_vector(&self, v: &SVector<T, D>) -> SVector<T, D> {
        v - self.normal * v.dot(&self.normal)
    }

    /// Returns the same plane with the opposite orientation.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
        }
    }
}

impl<T: Real> Plane<T, 3> {
    /// Creates the plane through three points, anchored at `p0`.
    ///
    /// The normal is `normalize((p2 - p0) x (p1 - p0))`.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::Colinear` if the points do not span a plane.
    pub fn from_points(p0: &Point3Of<T>, p1: &Point3Of<T>, p2: &Point3Of<T>) -> Result<Self> {
        let normal: Vector3Of<T> = (p2 - p0).cross(&(p1 - p0));
        if is_null(&normal) {
            return Err(PolygonError::Colinear.into());
        }
        Ok(Self::from_anchor(p0, normal.normalize()))
    }
}

impl<T: Real, const D: usize> fmt::Display for Plane<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ normal: (")?;
        fmt_components(f, &self.normal)?;
        write!(f, "), distance: {} }}", self.distance)
    }
}
