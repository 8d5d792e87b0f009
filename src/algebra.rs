//! src/algebra.rs
//! --------------
//! 3D vector type used by every other module.

use serde::Deserialize;
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Overwrite all three components in place.
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Copy the components of `other` into `self`.
    pub fn copy_from(&mut self, other: Self) -> &mut Self {
        self.set(other.x, other.y, other.z)
    }

    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    pub fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }

    pub fn sub(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }

    pub fn scale(self, f: f32) -> Self {
        Self::new(self.x * f, self.y * f, self.z * f)
    }

    pub fn dot(self, v: Self) -> f32 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    pub fn cross(self, v: Self) -> Self {
        Self::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length, for comparisons that don't need the square root.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Scale to unit length.
    ///
    /// Precondition: `self` must have non-zero length; a zero vector
    /// produces non-finite components. Callers that cannot guarantee this
    /// validate first (see `Ray::new`).
    pub fn normalize(self) -> Self {
        self.scale(1.0 / self.length())
    }

    /// The directed vector from `from` to `to`.
    pub fn from_to(from: Self, to: Self) -> Self {
        to.sub(from)
    }

    /// Vector projection of `self` onto `onto`.
    ///
    /// Precondition: `onto` must have non-zero length.
    pub fn project(self, onto: Self) -> Self {
        let scalar = self.dot(onto) / onto.length();
        onto.normalize().scale(scalar)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, v: Self) -> Self {
        Vector3::add(self, v)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, v: Self) -> Self {
        Vector3::sub(self, v)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    fn mul(self, f: f32) -> Self {
        self.scale(f)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

/* Custom helper so Serde turns a JSON array into Vector3 */
pub fn vector3_from_array<'de, D>(d: D) -> Result<Vector3, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <[f32; 3]>::deserialize(d)?;
    Ok(arr.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_relative_eq, relative_eq};

    #[test]
    fn componentwise_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(a.add(b), Vector3::new(5.0, -3.0, 9.0));
        assert_eq!(a.sub(b), Vector3::new(-3.0, 7.0, -3.0));
        assert_eq!(a.scale(2.0), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a.negate(), Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.sub(b));
        assert_eq!(a * 2.0, a.scale(2.0));
        assert_eq!(-a, a.negate());
    }

    #[test]
    fn set_and_copy_chain() {
        let mut v = Vector3::zero();
        v.set(1.0, 2.0, 3.0).copy_from(Vector3::new(7.0, 8.0, 9.0));
        assert_eq!(v, Vector3::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn dot_and_cross() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(
            Vector3::new(1.0, 2.0, 3.0).dot(Vector3::new(4.0, 5.0, 6.0)),
            32.0
        );
    }

    #[test]
    fn length_and_length_squared() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_relative_eq!(v.length(), 5.0);
        assert_relative_eq!(v.length_squared(), 25.0);
    }

    #[test]
    fn normalize_yields_unit_length() {
        for v in [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-0.01, 40.0, 0.5),
            Vector3::new(0.0, 0.0, 100.0),
        ] {
            assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
            // direction is invariant under prior scaling
            let scaled = v.scale(37.5).normalize();
            let unit = v.normalize();
            assert_relative_eq!(scaled.x, unit.x, epsilon = 1e-6);
            assert_relative_eq!(scaled.y, unit.y, epsilon = 1e-6);
            assert_relative_eq!(scaled.z, unit.z, epsilon = 1e-6);
        }
    }

    #[test]
    fn from_to_is_directed_difference() {
        let from = Vector3::new(1.0, 1.0, 1.0);
        let to = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(Vector3::from_to(from, to), Vector3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn project_onto_axis() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        let x = Vector3::new(10.0, 0.0, 0.0);
        let p = v.project(x);
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.0);
        assert_relative_eq!(p.z, 0.0);
    }

    #[test]
    fn project_is_idempotent() {
        let v = Vector3::new(2.0, -3.0, 5.0);
        let onto = Vector3::new(1.0, 1.0, 2.0);
        let once = v.project(onto);
        let twice = once.project(onto);
        assert!(relative_eq!(once.x, twice.x, epsilon = 1e-5));
        assert!(relative_eq!(once.y, twice.y, epsilon = 1e-5));
        assert!(relative_eq!(once.z, twice.z, epsilon = 1e-5));
    }

    #[test]
    fn finite_check() {
        assert!(Vector3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vector3::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Vector3::new(0.0, f32::INFINITY, 0.0).is_finite());
    }
}
