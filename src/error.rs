use thiserror::Error;

/// Top-level error type for the brushgeom kernel.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Polygon(#[from] PolygonError),
}

/// Errors related to constructing geometric entities.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("inverted bounds on axis {axis}: min {min} > max {max}")]
    InvalidBounds {
        axis: usize,
        min: String,
        max: String,
    },
}

/// Errors related to point sequences (polygons and hull inputs).
#[derive(Debug, Error)]
pub enum PolygonError {
    #[error("at least 3 points are required, got {actual}")]
    InsufficientPoints { actual: usize },

    #[error("all points are colinear")]
    Colinear,
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
