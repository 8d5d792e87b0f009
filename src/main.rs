use image::{Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use raycast::{Matrix4, Ray, Scene, Vector3};
use rayon::prelude::*;
use std::path::Path;
use std::{env, fs, process};

fn main() {
    let args: Vec<String> = env::args().collect();
    let quiet_mode = args.contains(&"--quiet".to_string()) || args.contains(&"-q".to_string());

    // --orbit <degrees> swings the camera position about the Y axis
    let orbit_idx = args.iter().position(|a| a == "--orbit");
    let orbit_deg: f32 = orbit_idx
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.0);

    let path = args
        .iter()
        .enumerate()
        .skip(1)
        .find(|(i, a)| !a.starts_with('-') && orbit_idx.map_or(true, |oi| *i != oi + 1))
        .map(|(_, a)| a.clone())
        .unwrap_or_else(|| "scene.json".to_string());

    let scene = match Scene::load(&path) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("{path}: {e}");
            process::exit(1);
        }
    };

    let width = scene.render.width;
    let height = scene.render.height;
    let fov_rad = scene.camera.fov.to_radians();

    // orbit, then build the camera basis from pos/look_at/up
    let pos = Matrix4::rotation_y(orbit_deg.to_radians()).apply_point(scene.camera.pos);
    let forward = Vector3::from_to(pos, scene.camera.look_at).normalize();
    let right = scene.camera.up.cross(forward).normalize();
    let real_up = forward.cross(right).normalize();

    let aspect = width as f32 / height as f32;
    let scale = (fov_rad * 0.5).tan();

    if !quiet_mode {
        println!("=== CAMERA ===");
        println!(" position : {:?}", pos);
        println!(" look_at  : {:?}", scene.camera.look_at);
        println!(" fov (°)  : {:.2}", scene.camera.fov);
        println!(" orbit (°): {:.2}", orbit_deg);

        println!("\n=== SPHERES ({}) ===", scene.spheres.len());
        for (i, s) in scene.spheres.iter().enumerate() {
            println!(
                " [{}] '{}' {{ center: {:?}, radius: {:.4} }}",
                i,
                s.name,
                s.sphere.center(),
                s.sphere.radius()
            );
        }
    }

    let bar = if quiet_mode {
        None
    } else {
        let pb = ProgressBar::new(height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise}")
                .unwrap(),
        );
        Some(pb)
    };

    let rows: Vec<_> = (0..height)
        .into_par_iter()
        .flat_map(|y| {
            if let Some(b) = &bar {
                b.inc(1);
            }
            let mut row = Vec::with_capacity(width as usize);
            for x in 0..width {
                row.push(((x, y), pixel_color(&scene, pos, right, real_up, forward, aspect, scale, x, y)));
            }
            row
        })
        .collect();

    if let Some(b) = bar {
        b.finish_with_message("done");
    }

    let mut img = RgbImage::new(width, height);
    for ((x, y), rgb) in rows {
        img.put_pixel(x, y, Rgb(rgb));
    }

    let name = format!("renders/cast_{width}x{height}_orbit{orbit_deg:.0}.png");
    if let Some(dir) = Path::new(&name).parent() {
        fs::create_dir_all(dir).expect("create renders directory");
    }
    img.save(&name).expect("write image");
    println!("Saved → {name}");
}

/// One primary ray per pixel, shaded from the hit normal with a headlight
/// lambert term. Misses fade to a dark background.
#[allow(clippy::too_many_arguments)]
fn pixel_color(
    scene: &Scene,
    pos: Vector3,
    right: Vector3,
    real_up: Vector3,
    forward: Vector3,
    aspect: f32,
    scale: f32,
    x: u32,
    y: u32,
) -> [u8; 3] {
    let width = scene.render.width as f32;
    let height = scene.render.height as f32;
    let px = (2.0 * (x as f32 + 0.5) / width - 1.0) * aspect * scale;
    let py = (1.0 - 2.0 * (y as f32 + 0.5) / height) * scale;
    let dir = right
        .scale(px)
        .add(real_up.scale(py))
        .add(forward)
        .normalize();

    // forward has unit length, so dir can never be zero
    let ray = Ray::new(pos, dir).expect("camera ray");
    match scene.cast(&ray) {
        Some((_, hit)) => {
            let lambert = hit.normal.dot(dir.negate()).max(0.0);
            let tint = hit.normal.scale(0.5).add(Vector3::new(0.5, 0.5, 0.5));
            let shaded = tint.scale(lambert);
            [
                (shaded.x * 255.0) as u8,
                (shaded.y * 255.0) as u8,
                (shaded.z * 255.0) as u8,
            ]
        }
        None => [12, 12, 24],
    }
}
