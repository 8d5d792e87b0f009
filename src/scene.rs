//! src/scene.rs
//! ------------
//! JSON scene description: a camera, render settings and a list of named
//! spheres. Absent sphere fields fall back to the documented defaults
//! (center at the origin, radius 1); present but invalid values fail the
//! load instead of being silently repaired.

use crate::{
    algebra::{vector3_from_array, Vector3},
    error::SceneError,
    ray::Ray,
    sphere::{Intersection, Sphere},
};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
pub struct CameraJson {
    #[serde(deserialize_with = "vector3_from_array")]
    pub pos: Vector3,
    #[serde(deserialize_with = "vector3_from_array")]
    pub look_at: Vector3,
    #[serde(deserialize_with = "vector3_from_array")]
    pub up: Vector3,
    pub fov: f32,
}

#[derive(Deserialize)]
pub struct RenderJson {
    pub width: u32,
    pub height: u32,
}

#[derive(Deserialize)]
struct SphereDesc {
    name: String,
    #[serde(default, deserialize_with = "vector3_from_array_opt")]
    center: Option<Vector3>,
    #[serde(default)]
    radius: Option<f32>,
}

fn vector3_from_array_opt<'de, D>(d: D) -> Result<Option<Vector3>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    vector3_from_array(d).map(Some)
}

#[derive(Deserialize)]
struct SceneFile {
    camera: CameraJson,
    render: RenderJson,
    spheres: Vec<SphereDesc>,
}

/// A named sphere in a loaded scene.
pub struct SceneSphere {
    pub name: String,
    pub sphere: Sphere,
}

/// Loaded scene, ready to cast rays against.
pub struct Scene {
    pub camera: CameraJson,
    pub render: RenderJson,
    pub spheres: Vec<SceneSphere>,
}

impl Scene {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, SceneError> {
        let file: SceneFile = serde_json::from_str(data)?;

        let mut spheres = Vec::with_capacity(file.spheres.len());
        for desc in file.spheres {
            let fallback = Sphere::default();
            let center = desc.center.unwrap_or_else(|| fallback.center());
            let radius = desc.radius.unwrap_or_else(|| fallback.radius());
            let sphere =
                Sphere::new(center, radius).map_err(|source| SceneError::Geometry {
                    name: desc.name.clone(),
                    source,
                })?;
            spheres.push(SceneSphere {
                name: desc.name,
                sphere,
            });
        }

        Ok(Self {
            camera: file.camera,
            render: file.render,
            spheres,
        })
    }

    /// Nearest valid intersection across all spheres, with the index of the
    /// sphere that was hit.
    pub fn cast(&self, ray: &Ray) -> Option<(usize, Intersection)> {
        let mut nearest: Option<(usize, Intersection)> = None;
        for (i, s) in self.spheres.iter().enumerate() {
            if let Some(hit) = s.sphere.raycast(ray) {
                if nearest
                    .as_ref()
                    .map_or(true, |(_, best)| hit.distance < best.distance)
                {
                    nearest = Some((i, hit));
                }
            }
        }
        nearest
    }
}
