// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod color {
    include!("../src/color.rs");
}

use color::*;
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_ids_are_distinct() {
    assert_ne!(MODEL_CANVAS_ID, FALLBACK_CANVAS_ID);
    assert_ne!(MODEL_CANVAS_ID, SPHERE_CANVAS_ID);
    assert_ne!(FALLBACK_CANVAS_ID, SPHERE_CANVAS_ID);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particles_spawn_behind_the_reset_plane() {
    // Fresh particles start at or beyond the far-near edge, which must sit
    // behind the plane that recycles them
    assert!(BACKDROP_Z_FAR_NEAR < BACKDROP_Z_RESET);
    assert!(BACKDROP_Z_DEPTH > 0.0);
    assert!(BACKDROP_SPEED_MIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sphere_field_constants_are_sane() {
    assert!(SPHERE_COUNT > 0);
    assert!(SPHERE_FLASH_MS > 0.0);
    assert!(SPHERE_FLASH_SCALE > 1.0);
    assert!(SPHERE_Z_NEAR < SPHERE_CAMERA_EYE[2]);
    assert!((0.0..=1.0).contains(&SPHERE_METALNESS));
    assert!((0.0..=1.0).contains(&SPHERE_ROUGHNESS));
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
fn colours_are_24_bit() {
    for c in [
        SPHERE_BASE_COLOR,
        SPHERE_HOVER_EMISSIVE,
        SPHERE_FLASH_COLOR,
        BACKDROP_PARTICLE_COLOR,
        BACKDROP_CLEAR_COLOR,
    ] {
        assert!(c <= 0xff_ffff);
    }
}

#[test]
fn hex_to_linear_darkens_midtones() {
    assert_eq!(hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    let white = hex_to_linear(0xffffff);
    for ch in white {
        assert!((ch - 1.0).abs() < 1e-6);
    }
    let [r, g, b] = hex_to_linear(SPHERE_BASE_COLOR);
    assert!(r < 0x22 as f32 / 255.0);
    assert_eq!(r, g);
    assert_eq!(g, b);
}

#[test]
fn flash_colour_is_blue_dominant() {
    let [r, g, b] = hex_to_linear(SPHERE_FLASH_COLOR);
    assert!(b > g && g > r);
}

#[test]
fn scaled_multiplies_each_channel() {
    assert_eq!(scaled([1.0, 0.5, 0.25], 0.8), [0.8, 0.4, 0.2]);
}
