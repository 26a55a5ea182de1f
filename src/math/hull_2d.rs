use std::cmp::Ordering;

use nalgebra::ComplexField;

use crate::error::{PolygonError, Result};

use super::axis::{first_component, is_left, linearly_dependent, swizzle, unswizzle, Axis, Side};
use super::tolerance::Real;
use super::Point3Of;

/// Computes the convex hull of a set of coplanar points (Graham scan).
///
/// The points are projected along the dominant axis of their plane, so any
/// orientation of the plane works. The hull starts at the lowest point
/// (ties broken by the largest X in the projection) and proceeds by
/// increasing angle around it. Points on hull edges are dropped.
pub struct ConvexHull2D<'a, T: Real> {
    points: &'a [Point3Of<T>],
}

impl<'a, T: Real> ConvexHull2D<'a, T> {
    /// Creates a new `ConvexHull2D` operation.
    #[must_use]
    pub fn new(points: &'a [Point3Of<T>]) -> Self {
        Self { points }
    }

    /// Executes the operation, returning the ordered hull vertices.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::InsufficientPoints` for fewer than 3 points,
    /// or `PolygonError::Colinear` if the points do not span a plane.
    pub fn execute(&self) -> Result<Vec<Point3Of<T>>> {
        let points = self.points;
        let (p0, p1, rest) = match points {
            [p0, p1, rest @ ..] if !rest.is_empty() => (p0, p1, rest),
            _ => {
                tracing::trace!(count = points.len(), "too few points for a hull");
                return Err(PolygonError::InsufficientPoints {
                    actual: points.len(),
                }
                .into());
            }
        };

        let Some(p2) = rest.iter().find(|p| !linearly_dependent(p0, p1, p)) else {
            tracing::trace!(count = points.len(), "hull input is colinear");
            return Err(PolygonError::Colinear.into());
        };

        let axis = first_component(&(p2 - p0).cross(&(p1 - p0)));
        let projected: Vec<Point3Of<T>> = points.iter().map(|p| swizzle(p, axis)).collect();

        let hull = graham_scan(projected)?;
        Ok(hull.iter().map(|p| unswizzle(p, axis)).collect())
    }

    /// Returns the axis the points are projected along.
    ///
    /// `None` if the points do not span a plane.
    #[must_use]
    pub fn projection_axis(&self) -> Option<Axis> {
        let [p0, p1, rest @ ..] = self.points else {
            return None;
        };
        let p2 = rest.iter().find(|p| !linearly_dependent(p0, p1, p))?;
        Some(first_component(&(p2 - p0).cross(&(p1 - p0))))
    }
}

/// Convenience wrapper around [`ConvexHull2D`].
///
/// # Errors
///
/// See [`ConvexHull2D::execute`].
pub fn convex_hull_2d<T: Real>(points: &[Point3Of<T>]) -> Result<Vec<Point3Of<T>>> {
    ConvexHull2D::new(points).execute()
}

/// Runs the scan on points already projected onto the XY plane.
fn graham_scan<T: Real>(mut points: Vec<Point3Of<T>>) -> Result<Vec<Point3Of<T>>> {
    let anchor = points.swap_remove(find_anchor(&points));
    // Copies of the anchor have no angle around it.
    points.retain(|p| *p != anchor);

    points.sort_by(|lhs, rhs| compare_by_angle(&anchor, lhs, rhs));
    // Of the points on a common ray from the anchor, only the farthest
    // (sorted first) can be a hull vertex.
    points.dedup_by(|current, kept| is_left(&anchor, kept, current) == Side::On);

    if points.len() < 2 {
        tracing::trace!("hull input is colinear after projection");
        return Err(PolygonError::Colinear.into());
    }

    let mut stack = Vec::with_capacity(points.len() + 1);
    stack.push(anchor);
    stack.push(points[0]);
    for p in &points[1..] {
        pop_stale_points(&mut stack, p);
        stack.push(*p);
    }

    if stack.len() < 3 {
        return Err(PolygonError::Colinear.into());
    }
    Ok(stack)
}

/// Index of the lowest point, preferring the largest X among ties.
fn find_anchor<T: Real>(points: &[Point3Of<T>]) -> usize {
    let mut anchor = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let best = &points[anchor];
        if p.y < best.y || (p.y == best.y && p.x > best.x) {
            anchor = i;
        }
    }
    anchor
}

/// Orders points by increasing angle around `anchor`; colinear points
/// are ordered farthest first.
fn compare_by_angle<T: Real>(anchor: &Point3Of<T>, lhs: &Point3Of<T>, rhs: &Point3Of<T>) -> Ordering {
    match is_left(anchor, lhs, rhs) {
        Side::Left => Ordering::Less,
        Side::Right => Ordering::Greater,
        Side::On => {
            let dxl = ComplexField::abs(lhs.x - anchor.x);
            let dxr = ComplexField::abs(rhs.x - anchor.x);
            let farther = if dxl == dxr {
                let dyl = ComplexField::abs(lhs.y - anchor.y);
                let dyr = ComplexField::abs(rhs.y - anchor.y);
                dyr.partial_cmp(&dyl)
            } else {
                dxr.partial_cmp(&dxl)
            };
            farther.unwrap_or(Ordering::Equal)
        }
    }
}

/// Pops the stack until `p` makes a strict left turn with its top two
/// entries. The anchor at the bottom is never popped.
fn pop_stale_points<T: Real>(stack: &mut Vec<Point3Of<T>>, p: &Point3Of<T>) {
    while let [.., t1, t2] = stack.as_slice() {
        if is_left(t1, t2, p) == Side::Left {
            break;
        }
        stack.pop();
    }
}
