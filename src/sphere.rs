//! src/sphere.rs
//! -------------
//! Implicit sphere `|p - center| = radius` and its ray intersection.

use crate::{algebra::Vector3, error::GeometryError, ray::Ray};

#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    center: Vector3,
    radius: f32,
}

/// A valid ray–sphere intersection. Misses carry nothing: `raycast`
/// returns `None`, never a struct with placeholder fields.
#[derive(Clone, Copy, Debug)]
pub struct Intersection {
    /// The closest valid intersection point.
    pub point: Vector3,
    /// Unit surface normal at `point`, pointing outward from the center.
    pub normal: Vector3,
    /// Ray parameter α of the hit; a metric distance only when the ray
    /// direction is unit length.
    pub distance: f32,
}

impl Sphere {
    /// Build a sphere, rejecting a non-finite center or a radius that is
    /// not positive and finite.
    pub fn new(center: Vector3, radius: f32) -> Result<Self, GeometryError> {
        if !center.is_finite() {
            return Err(GeometryError::NonFiniteVector("sphere center"));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Closest valid intersection of `ray` with this sphere.
    ///
    /// Solves `a·α² + b·α + c = 0` for the ray parameter α. A hit is valid
    /// only when both roots are non-negative: a ray whose origin is inside
    /// the sphere, or a sphere entirely behind the origin, is a miss. This
    /// differs from the nearest-positive-root policy most renderers use and
    /// is deliberate: callers treat "inside the sphere" as no intersection.
    pub fn raycast(&self, ray: &Ray) -> Option<Intersection> {
        let oc = ray.origin().sub(self.center);
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let alpha0 = (-b + root) / (2.0 * a);
        let alpha1 = (-b - root) / (2.0 * a);
        if alpha0 < 0.0 || alpha1 < 0.0 {
            return None;
        }

        // both roots are in front of the ray, so the numeric minimum is the
        // closest one
        let alpha = alpha0.min(alpha1);
        let point = ray.at(alpha);
        let normal = point.sub(self.center).normalize();
        Some(Intersection {
            point,
            normal,
            distance: alpha,
        })
    }
}

/// Unit sphere at the origin, the documented fallback for absent
/// construction input.
impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Vector3::zero(),
            radius: 1.0,
        }
    }
}
