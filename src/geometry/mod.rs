pub mod bbox;
pub mod line;
pub mod plane;
pub mod ray;

use std::fmt;

use nalgebra::SVector;

pub use bbox::{BBox2, BBox3, BoundingBox};
pub use line::{Line, Line3};
pub use plane::{Plane, Plane3};
pub use ray::{Ray, Ray3};

/// Position of a point relative to an oriented entity (plane or ray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointStatus {
    /// On the side the normal (or direction) points to.
    Above,
    /// On the opposite side.
    Below,
    /// Within the status epsilon of the entity.
    Inside,
}

/// Writes vector components separated by spaces.
fn fmt_components<T: fmt::Display, const D: usize>(
    f: &mut fmt::Formatter<'_>,
    v: &SVector<T, D>,
) -> fmt::Result {
    for (i, c) in v.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}
