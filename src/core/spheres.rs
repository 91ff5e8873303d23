use crate::camera::Camera;
use crate::color::hex_to_linear;
use crate::constants::*;
use crate::input::{ray_sphere, PointerState};
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Sphere {
    pub position: Vec3,
    pub rotation_y: f32,
    pub color: [f32; 3],
    pub base_color: [f32; 3],
    pub emissive: [f32; 3],
    pub scale: f32,
}

impl Sphere {
    fn restore(&mut self) {
        self.color = self.base_color;
        self.scale = 1.0;
    }
}

/// A pending click highlight and the moment it must be undone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flash {
    pub index: usize,
    pub revert_at_ms: f64,
}

/// The floating spheres plus their hover/click state.
///
/// The sphere list is fixed at construction; animation only mutates the
/// entries in place.
pub struct SphereField {
    spheres: Vec<Sphere>,
    hovered: Option<usize>,
    flash: Option<Flash>,
}

impl SphereField {
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        let base_color = hex_to_linear(SPHERE_BASE_COLOR);
        let spheres = (0..count)
            .map(|_| Sphere {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * SPHERE_SPAN_X,
                    (rng.gen::<f32>() - 0.5) * SPHERE_SPAN_Y,
                    SPHERE_Z_NEAR - rng.gen::<f32>() * SPHERE_Z_DEPTH,
                ),
                rotation_y: 0.0,
                color: base_color,
                base_color,
                emissive: [0.0; 3],
                scale: 1.0,
            })
            .collect();
        Self {
            spheres,
            hovered: None,
            flash: None,
        }
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn flash(&self) -> Option<Flash> {
        self.flash
    }

    /// Advance one frame: bob, spin, and undo an expired click highlight.
    pub fn animate(&mut self, now_ms: f64) {
        for (i, s) in self.spheres.iter_mut().enumerate() {
            let phase = now_ms * SPHERE_BOB_FREQ + i as f64;
            s.position.y += phase.sin() as f32 * SPHERE_BOB_STEP;
            s.rotation_y += SPHERE_SPIN_STEP;
        }
        self.expire_flash(now_ms);
    }

    /// Nearest sphere hit by the ray, if any.
    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<usize> {
        let mut best = None::<(usize, f32)>;
        for (i, s) in self.spheres.iter().enumerate() {
            if let Some(t) = ray_sphere(ray_origin, ray_dir, s.position, SPHERE_RADIUS * s.scale) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best.map(|(i, _)| i)
    }

    /// Re-pick under the pointer, but only when it moved since the last call.
    ///
    /// Spheres bobbing under a still pointer keep their hover state.
    pub fn update_hover(&mut self, pointer: &mut PointerState, camera: &Camera) {
        if !pointer.take_moved() {
            return;
        }
        let next = pointer.ndc.and_then(|ndc| {
            let (ro, rd) = camera.ray_through(ndc);
            self.pick(ro, rd)
        });
        self.set_hovered(next);
    }

    /// Move the hover highlight, clearing the previous one.
    pub fn set_hovered(&mut self, next: Option<usize>) {
        let next = next.filter(|&i| i < self.spheres.len());
        if self.hovered == next {
            return;
        }
        if let Some(prev) = self.hovered {
            self.spheres[prev].emissive = [0.0; 3];
        }
        self.hovered = next;
        if let Some(i) = next {
            self.spheres[i].emissive = hex_to_linear(SPHERE_HOVER_EMISSIVE);
        }
    }

    /// Flash the hovered sphere. Returns false when nothing is hovered.
    ///
    /// Only one reversion is ever pending: a later click replaces it, and a
    /// sphere that loses its pending reversion is restored on the spot.
    pub fn click(&mut self, now_ms: f64) -> bool {
        let Some(index) = self.hovered else {
            return false;
        };
        if let Some(prev) = self.flash.take() {
            if prev.index != index {
                self.spheres[prev.index].restore();
            }
        }
        let s = &mut self.spheres[index];
        s.color = hex_to_linear(SPHERE_FLASH_COLOR);
        s.scale = SPHERE_FLASH_SCALE;
        self.flash = Some(Flash {
            index,
            revert_at_ms: now_ms + SPHERE_FLASH_MS,
        });
        true
    }

    fn expire_flash(&mut self, now_ms: f64) {
        if let Some(f) = self.flash {
            if now_ms >= f.revert_at_ms {
                self.spheres[f.index].restore();
                self.flash = None;
            }
        }
    }
}
