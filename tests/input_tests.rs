// Host-side tests for pointer picking helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod camera {
    include!("../src/camera.rs");
}

use camera::Camera;
use glam::{Vec2, Vec3};
use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    let hit = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    let t = hit.expect("ray should hit");
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    let hit = ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(hit.is_none());
}

#[test]
fn ray_sphere_ignores_spheres_behind_the_ray() {
    let hit = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0);
    assert!(hit.is_none());
}

#[test]
fn ray_sphere_from_inside_reports_no_hit() {
    // The near root is behind the origin
    let hit = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::X, Vec3::new(0.0, 0.0, 5.0), 3.0);
    assert!(hit.is_none());
}

#[test]
fn client_to_ndc_maps_rect_corners() {
    let tl = client_to_ndc(10.0, 20.0, 10.0, 20.0, 200.0, 100.0).unwrap();
    assert_eq!(tl, Vec2::new(-1.0, 1.0));
    let br = client_to_ndc(210.0, 120.0, 10.0, 20.0, 200.0, 100.0).unwrap();
    assert_eq!(br, Vec2::new(1.0, -1.0));
    let mid = client_to_ndc(110.0, 70.0, 10.0, 20.0, 200.0, 100.0).unwrap();
    assert!(mid.length() < 1e-6);
}

#[test]
fn client_to_ndc_rejects_empty_rect() {
    assert!(client_to_ndc(1.0, 1.0, 0.0, 0.0, 0.0, 100.0).is_none());
    assert!(client_to_ndc(1.0, 1.0, 0.0, 0.0, 100.0, 0.0).is_none());
}

#[test]
fn pointer_state_reports_movement_once() {
    let mut p = PointerState::default();
    assert!(p.ndc.is_none());
    assert!(!p.take_moved());

    p.move_to(Vec2::new(0.25, -0.5));
    assert!(p.take_moved());
    assert!(!p.take_moved());
    assert_eq!(p.ndc, Some(Vec2::new(0.25, -0.5)));

    p.leave();
    assert!(p.take_moved());
    assert!(p.ndc.is_none());
}

#[test]
fn centre_ray_points_at_camera_target() {
    let mut cam = Camera::looking_forward(Vec3::new(0.0, 0.0, 60.0), 60.0, 0.1, 1000.0);
    cam.set_viewport(1600, 900);
    let (ro, rd) = cam.ray_through(Vec2::ZERO);
    assert_eq!(ro, cam.eye);
    assert!((rd - Vec3::NEG_Z).length() < 1e-4);
    assert!((rd.length() - 1.0).abs() < 1e-5);
}

#[test]
fn edge_ray_spans_half_the_vertical_fov() {
    let mut cam = Camera::looking_forward(Vec3::ZERO, 60.0, 0.1, 1000.0);
    cam.set_viewport(800, 800);
    let (_, rd) = cam.ray_through(Vec2::new(0.0, 1.0));
    let angle = rd.angle_between(Vec3::NEG_Z).to_degrees();
    assert!((angle - 30.0).abs() < 0.05, "angle was {angle}");
    assert!(rd.y > 0.0);
}
