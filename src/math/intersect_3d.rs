//! Ray, line and plane intersection routines used for picking.
//!
//! Every routine returns `None` when there is no intersection. A `Some`
//! value is the parameter along the ray (or line) at which the hit occurs;
//! call `point_at_distance` to recover the point.

use nalgebra::{Point, SVector};

use crate::geometry::{BoundingBox, Line, Plane, Ray};

use super::tolerance::{gt, is_neg, is_null, is_zero, Real};
use super::{Point3Of, Vector3Of};

/// Intersects a ray with a plane.
///
/// Returns the distance along the ray to the crossing point, or `None` if
/// the ray is parallel to the plane or the plane lies behind the origin.
#[must_use]
pub fn intersect_ray_plane<T: Real, const D: usize>(
    ray: &Ray<T, D>,
    plane: &Plane<T, D>,
) -> Option<T> {
    let d = ray.direction().dot(plane.normal());
    if is_zero(d) {
        return None;
    }

    let s = (plane.anchor() - ray.origin()).dot(plane.normal()) / d;
    if is_neg(s) {
        return None;
    }
    Some(s)
}

/// Intersects a ray with the triangle `(p1, p2, p3)` (Möller–Trumbore).
///
/// Returns the distance along the ray, not a barycentric coordinate.
/// Hits within the tolerance band outside an edge are rejected.
#[must_use]
pub fn intersect_ray_triangle<T: Real>(
    ray: &Ray<T, 3>,
    p1: &Point3Of<T>,
    p2: &Point3Of<T>,
    p3: &Point3Of<T>,
) -> Option<T> {
    let o = ray.origin();
    let d = ray.direction();
    let e1: Vector3Of<T> = p2 - p1;
    let e2: Vector3Of<T> = p3 - p1;
    let p = d.cross(&e2);
    let a = p.dot(&e1);
    if is_zero(a) {
        return None;
    }

    let t: Vector3Of<T> = o - p1;
    let q = t.cross(&e1);

    let distance = q.dot(&e2) / a;
    if is_neg(distance) {
        return None;
    }

    let v = p.dot(&t) / a;
    if is_neg(v) {
        return None;
    }

    let w = q.dot(d) / a;
    if is_neg(w) {
        return None;
    }

    if gt(v + w, T::one()) {
        return None;
    }
    Some(distance)
}

/// Intersects a ray with an axis-aligned box using the slab method.
///
/// If the origin is inside the box the distance to the exit face is
/// returned; otherwise the distance to the entry face. Comparisons against
/// the box bounds are exact.
#[must_use]
pub fn intersect_ray_bbox<T: Real, const D: usize>(
    ray: &Ray<T, D>,
    bounds: &BoundingBox<T, D>,
) -> Option<T> {
    if D == 0 {
        return None;
    }
    let origin = ray.origin();
    let direction = ray.direction();
    let (min, max) = (bounds.min(), bounds.max());

    // Candidate plane per axis.
    let mut planes = [T::zero(); D];
    let mut inside = [true; D];
    for i in 0..D {
        if origin[i] < min[i] {
            planes[i] = min[i];
            inside[i] = false;
        } else if origin[i] > max[i] {
            planes[i] = max[i];
            inside[i] = false;
        } else if direction[i] < T::zero() {
            planes[i] = min[i];
        } else {
            planes[i] = max[i];
        }
    }
    let all_inside = inside.iter().all(|&b| b);

    // An axis the ray runs parallel to never contributes a hit.
    let mut distances = [None; D];
    for i in 0..D {
        if direction[i] != T::zero() {
            distances[i] = Some((planes[i] - origin[i]) / direction[i]);
        }
    }

    let best = if all_inside {
        // Nearest exit face.
        select_axis(&distances, |_| true, |candidate, best| candidate < best)
    } else {
        // Farthest of the faces the ray must cross to enter.
        let best = select_axis(&distances, |i| !inside[i], |candidate, best| candidate > best);
        if (0..D).any(|i| !inside[i] && distances[i].is_none()) {
            // Outside on an axis the ray never moves along.
            return None;
        }
        best
    };

    let (best_axis, distance) = best?;
    if distance < T::zero() {
        return None;
    }

    for i in (0..D).filter(|&i| i != best_axis) {
        let coord = origin[i] + direction[i] * distance;
        if coord < min[i] || coord > max[i] {
            return None;
        }
    }
    Some(distance)
}

/// Picks the axis whose distance wins under `better`, among the axes
/// accepted by `eligible` that have a distance at all.
fn select_axis<T: Real, const D: usize>(
    distances: &[Option<T>; D],
    eligible: impl Fn(usize) -> bool,
    better: impl Fn(T, T) -> bool,
) -> Option<(usize, T)> {
    let mut best: Option<(usize, T)> = None;
    for (i, distance) in distances.iter().enumerate() {
        let Some(distance) = *distance else { continue };
        if !eligible(i) {
            continue;
        }
        match best {
            Some((_, current)) if !better(distance, current) => {}
            _ => best = Some((i, distance)),
        }
    }
    best
}

/// Intersects a ray with the sphere at `center` with the given `radius`.
///
/// Returns the nearest hit in front of the origin. If the origin is inside
/// the sphere, this is the exit point.
#[must_use]
pub fn intersect_ray_sphere<T: Real, const D: usize>(
    ray: &Ray<T, D>,
    center: &Point<T, D>,
    radius: T,
) -> Option<T> {
    debug_assert!(radius > T::zero(), "sphere radius must be positive");

    let two = T::one() + T::one();
    let four = two + two;
    let diff: SVector<T, D> = ray.origin() - center;

    let p = two * diff.dot(ray.direction());
    let q = diff.norm_squared() - radius * radius;

    let disc = p * p - four * q;
    if disc < T::zero() {
        return None;
    }

    let s = disc.sqrt();
    let t0 = (-p + s) / two;
    let t1 = (-p - s) / two;

    if t0 < T::zero() && t1 < T::zero() {
        None
    } else if t0 > T::zero() && t1 > T::zero() {
        Some(if t0 < t1 { t0 } else { t1 })
    } else {
        Some(if t0 > t1 { t0 } else { t1 })
    }
}

/// Intersects an infinite line with a plane.
///
/// Returns the distance from the line's anchor, which is negative when the
/// crossing lies against the direction, or `None` if they are parallel.
#[must_use]
pub fn intersect_line_plane<T: Real, const D: usize>(
    line: &Line<T, D>,
    plane: &Plane<T, D>,
) -> Option<T> {
    let f = line.direction().dot(plane.normal());
    if is_zero(f) {
        return None;
    }
    Some((plane.anchor() - line.point()).dot(plane.normal()) / f)
}

/// Computes the line along which two planes meet.
///
/// The direction is `normalize(n1 x n2)`. Returns `None` for parallel
/// (or coincident) planes.
#[must_use]
pub fn intersect_plane_plane<T: Real>(p1: &Plane<T, 3>, p2: &Plane<T, 3>) -> Option<Line<T, 3>> {
    let cross = p1.normal().cross(p2.normal());
    if is_null(&cross) {
        tracing::trace!(%p1, %p2, "planes are parallel");
        return None;
    }
    let direction = cross.normalize();

    // Walk from p1's anchor, within p1, towards p2.
    let towards = p1.project_vector(p2.normal());
    if is_null(&towards) {
        return None;
    }
    let line_to_p2 = Line::new(p1.anchor(), towards.normalize());
    let distance = intersect_line_plane(&line_to_p2, p2)?;
    let point = line_to_p2.point_at_distance(distance);
    if !point.coords.iter().all(|c| c.is_finite()) {
        return None;
    }
    Some(Line::new(point, direction))
}
