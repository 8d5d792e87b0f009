use thiserror::Error;

/// Precondition violations on geometric input.
///
/// The math itself never guards against these (see `Vector3::normalize`);
/// constructors reject them up front so downstream code never divides by
/// zero or propagates NaN.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("ray direction must have non-zero length")]
    ZeroLengthDirection,
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("{0} has a non-finite component")]
    NonFiniteVector(&'static str),
}

/// Failures while loading a scene description.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sphere '{name}' is invalid: {source}")]
    Geometry {
        name: String,
        source: GeometryError,
    },
}
