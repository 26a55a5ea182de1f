pub mod error;
pub mod geometry;
pub mod math;

pub use error::{Error, Result};
pub use geometry::{BoundingBox, Line, Plane, PointStatus, Ray};
