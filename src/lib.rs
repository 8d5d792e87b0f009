//! Geometry core for implicit-sphere ray casting.
//!
//! Two layers: the vector/matrix algebra in [`algebra`] and [`matrix`],
//! and the ray–sphere intersection built on top of it in [`ray`] and
//! [`sphere`]. [`scene`] adds a JSON description of named spheres for
//! consumers that cast against a whole set at once. All operations are
//! pure, synchronous and callable from any scheduling context.

pub mod algebra;
pub mod error;
pub mod matrix;
pub mod ray;
pub mod scene;
pub mod sphere;

pub use algebra::Vector3;
pub use error::{GeometryError, SceneError};
pub use matrix::Matrix4;
pub use ray::Ray;
pub use scene::Scene;
pub use sphere::{Intersection, Sphere};
