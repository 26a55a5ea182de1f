use std::fmt;

use super::tolerance::{is_null_eps, Real};
use super::{Point3Of, Vector3Of};

/// A coordinate axis in 3D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index of this axis.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Returns the axis of the component with the largest magnitude.
///
/// This is the dominant axis of a plane normal: dropping it gives the 2D
/// projection with the least distortion. Ties resolve to the lower axis.
#[must_use]
pub fn first_component<T: Real>(v: &Vector3Of<T>) -> Axis {
    let a = v.abs();
    let (x, y, z) = (a.x, a.y, a.z);
    if x >= y && x >= z {
        Axis::X
    } else if y >= z {
        Axis::Y
    } else {
        Axis::Z
    }
}

/// Cyclically permutes the components of `p` so that `axis` lands in the
/// Z slot. The remaining two components form the 2D projection.
#[must_use]
pub fn swizzle<T: Real>(p: &Point3Of<T>, axis: Axis) -> Point3Of<T> {
    match axis {
        Axis::X => Point3Of::new(p.y, p.z, p.x),
        Axis::Y => Point3Of::new(p.z, p.x, p.y),
        Axis::Z => *p,
    }
}

/// Inverse of [`swizzle`].
#[must_use]
pub fn unswizzle<T: Real>(p: &Point3Of<T>, axis: Axis) -> Point3Of<T> {
    match axis {
        Axis::X => Point3Of::new(p.z, p.x, p.y),
        Axis::Y => Point3Of::new(p.y, p.z, p.x),
        Axis::Z => *p,
    }
}

/// Returns `true` if the three points lie on a common line.
#[must_use]
pub fn linearly_dependent<T: Real>(p1: &Point3Of<T>, p2: &Point3Of<T>, p3: &Point3Of<T>) -> bool {
    let ortho = (p3 - p1).cross(&(p2 - p1));
    is_null_eps(&ortho, T::COLINEAR_EPSILON)
}

/// Orientation of a point relative to a directed line in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    On,
}

/// Tests which side of the line `p1 -> p2` the point `p3` lies on,
/// using only the X and Y components. The comparison is exact.
#[must_use]
pub fn is_left<T: Real>(p1: &Point3Of<T>, p2: &Point3Of<T>, p3: &Point3Of<T>) -> Side {
    let result = (p2.x - p1.x) * (p3.y - p1.y) - (p3.x - p1.x) * (p2.y - p1.y);
    if result < T::zero() {
        Side::Right
    } else if result > T::zero() {
        Side::Left
    } else {
        Side::On
    }
}
