use crate::error::{PolygonError, Result};
use crate::geometry::{Plane, Ray};

use super::axis::{first_component, swizzle, Axis};
use super::intersect_3d::intersect_ray_plane;
use super::tolerance::{is_neg, is_null, is_pos, is_zero, Real};
use super::{Point3Of, Vector3Of};

/// How a polygon edge relates to the positive X axis of the test frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeCrossing {
    /// The edge does not cross the positive X axis.
    Miss,
    /// The edge crosses the positive X axis once.
    Cross,
    /// The test point lies on the edge or on its start vertex.
    OnBoundary,
}

/// Classifies the edge `v0 -> v1`, given in a frame where the test point is
/// the origin.
///
/// A Y coordinate of zero (within tolerance) counts as negative, so an edge
/// touching the axis at a vertex is counted exactly once.
fn edge_crossing<T: Real>(v0: &Vector3Of<T>, v1: &Vector3Of<T>) -> EdgeCrossing {
    if is_zero(v0.x) && is_zero(v0.y) {
        return EdgeCrossing::OnBoundary;
    }

    // Edge lying on the X axis: the point is on it if it spans x = 0.
    if is_zero(v0.y) && is_zero(v1.y) {
        let one_side = (is_pos(v0.x) && is_pos(v1.x)) || (is_neg(v0.x) && is_neg(v1.x));
        return if one_side {
            EdgeCrossing::Miss
        } else {
            EdgeCrossing::OnBoundary
        };
    }

    // Exactly one endpoint must lie strictly above the X axis.
    if is_pos(v0.y) == is_pos(v1.y) {
        return EdgeCrossing::Miss;
    }

    if is_pos(v0.x) && is_pos(v1.x) {
        return EdgeCrossing::Cross;
    }
    if is_neg(v0.x) && is_neg(v1.x) {
        return EdgeCrossing::Miss;
    }

    let x = -v0.y * (v1.x - v0.x) / (v1.y - v0.y) + v0.x;
    if is_zero(x) {
        EdgeCrossing::OnBoundary
    } else if is_pos(x) {
        EdgeCrossing::Cross
    } else {
        EdgeCrossing::Miss
    }
}

/// Point-in-polygon test for a point coplanar with the polygon.
///
/// Drops `axis` to project onto 2D, then counts crossings of a ray cast
/// along +X from the point (even-odd rule). Points on the boundary are
/// reported as contained.
#[must_use]
pub fn polygon_contains_point_on_axis<T: Real>(
    point: &Point3Of<T>,
    axis: Axis,
    polygon: &[Point3Of<T>],
) -> bool {
    debug_assert!(polygon.len() >= 3, "polygon needs at least 3 vertices");
    let Some(first) = polygon.first() else {
        return false;
    };

    let origin = swizzle(point, axis);
    let project = |p: &Point3Of<T>| swizzle(p, axis) - origin;

    let first = project(first);
    let mut prev = first;
    let mut crossings = 0usize;
    for current in polygon[1..].iter().map(&project).chain(std::iter::once(first)) {
        match edge_crossing(&prev, &current) {
            EdgeCrossing::OnBoundary => return true,
            EdgeCrossing::Cross => crossings += 1,
            EdgeCrossing::Miss => {}
        }
        prev = current;
    }
    crossings % 2 == 1
}

/// Point-in-polygon test projecting along the dominant axis of `normal`.
#[must_use]
pub fn polygon_contains_point_with_normal<T: Real>(
    point: &Point3Of<T>,
    normal: &Vector3Of<T>,
    polygon: &[Point3Of<T>],
) -> bool {
    polygon_contains_point_on_axis(point, first_component(normal), polygon)
}

/// Point-in-polygon test deriving the projection from the first three
/// vertices. Returns `false` if they do not span a plane.
#[must_use]
pub fn polygon_contains_point<T: Real>(point: &Point3Of<T>, polygon: &[Point3Of<T>]) -> bool {
    debug_assert!(polygon.len() >= 3, "polygon needs at least 3 vertices");
    let [p1, p2, p3, ..] = polygon else {
        return false;
    };
    let normal = (p3 - p1).cross(&(p2 - p1));
    if is_null(&normal) {
        tracing::debug!(vertices = polygon.len(), "polygon has no normal");
        return false;
    }
    polygon_contains_point_with_normal(point, &normal, polygon)
}

/// Fits the supporting plane of a planar polygon from its first three
/// vertices.
///
/// The normal faces the viewer for whom the polygon winds clockwise.
///
/// # Errors
///
/// Returns `PolygonError::InsufficientPoints` for fewer than 3 points, or
/// `PolygonError::Colinear` if the first three points are colinear.
pub fn polygon_plane<T: Real>(points: &[Point3Of<T>]) -> Result<Plane<T, 3>> {
    let [a, b, c, ..] = points else {
        return Err(PolygonError::InsufficientPoints {
            actual: points.len(),
        }
        .into());
    };
    Plane::from_points(b, c, a).inspect_err(|err| {
        tracing::debug!(%err, "cannot fit polygon plane");
    })
}

/// Intersects a ray with a polygon lying in `plane`.
///
/// Returns the distance along the ray to the hit, or `None` if the ray
/// misses the plane or the hit point falls outside the polygon.
#[must_use]
pub fn intersect_ray_polygon_with_plane<T: Real>(
    ray: &Ray<T, 3>,
    plane: &Plane<T, 3>,
    polygon: &[Point3Of<T>],
) -> Option<T> {
    let distance = intersect_ray_plane(ray, plane)?;
    let point = ray.point_at_distance(distance);
    polygon_contains_point_with_normal(&point, plane.normal(), polygon).then_some(distance)
}

/// Intersects a ray with a planar polygon, fitting its plane first.
#[must_use]
pub fn intersect_ray_polygon<T: Real>(ray: &Ray<T, 3>, polygon: &[Point3Of<T>]) -> Option<T> {
    let plane = polygon_plane(polygon).ok()?;
    intersect_ray_polygon_with_plane(ray, &plane, polygon)
}
