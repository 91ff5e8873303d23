pub mod fallback;
pub mod model;
pub mod spheres;

use crate::color::scaled;
use crate::render::{DirectionalLight, PointStyle};
use glam::Vec3;

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

pub(crate) fn white_light(direction: [f32; 3], intensity: f32) -> DirectionalLight {
    DirectionalLight {
        direction: Vec3::from(direction),
        color: scaled(WHITE, intensity),
    }
}

pub(crate) fn white_ambient(intensity: f32) -> [f32; 3] {
    scaled(WHITE, intensity)
}

pub(crate) const NO_POINTS: PointStyle = PointStyle {
    color: [0.0; 3],
    opacity: 0.0,
    size: 0.0,
};
