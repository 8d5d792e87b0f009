use crate::{algebra::Vector3, error::GeometryError};

/// A ray `origin + α·direction`.
///
/// The direction is not required to be unit length: the intersection math
/// solves the general quadratic in α, so the reported distance is a
/// multiplier of the direction's own magnitude. Normalize the direction
/// first if a metric distance is wanted.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
}

impl Ray {
    /// Build a ray, rejecting a zero-length or non-finite direction so the
    /// intersection quadratic never sees `a == 0`.
    pub fn new(origin: Vector3, direction: Vector3) -> Result<Self, GeometryError> {
        if !origin.is_finite() {
            return Err(GeometryError::NonFiniteVector("ray origin"));
        }
        if !direction.is_finite() {
            return Err(GeometryError::NonFiniteVector("ray direction"));
        }
        if direction.length_squared() == 0.0 {
            return Err(GeometryError::ZeroLengthDirection);
        }
        Ok(Self { origin, direction })
    }

    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// The point `origin + alpha·direction`.
    pub fn at(&self, alpha: f32) -> Vector3 {
        self.origin.add(self.direction.scale(alpha))
    }
}
