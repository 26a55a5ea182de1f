pub mod axis;
pub mod hull_2d;
pub mod intersect_3d;
pub mod polygon_3d;
pub mod tolerance;

pub use tolerance::Real;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3D point over an arbitrary scalar.
pub type Point3Of<T> = nalgebra::Point3<T>;

/// 3D vector over an arbitrary scalar.
pub type Vector3Of<T> = nalgebra::Vector3<T>;
