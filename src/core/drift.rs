use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// One dot of the 2D fallback; positions are css pixels.
#[derive(Clone, Copy, Debug)]
pub struct DriftParticle {
    pub pos: Vec2,
    pub radius: f32,
    pub heading: f32,
    pub speed: f32,
}

/// Screen-space particles that wander along slowly turning headings and
/// wrap around every edge.
pub struct DriftField {
    particles: Vec<DriftParticle>,
    width: f32,
    height: f32,
}

impl DriftField {
    pub fn new<R: Rng>(count: usize, width: f32, height: f32, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| DriftParticle {
                pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                radius: FALLBACK_RADIUS_MIN + rng.gen::<f32>() * FALLBACK_RADIUS_SPAN,
                heading: rng.gen::<f32>() * std::f32::consts::TAU,
                speed: FALLBACK_SPEED_MIN + rng.gen::<f32>() * FALLBACK_SPEED_SPAN,
            })
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[DriftParticle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pos.x += p.heading.cos() * p.speed;
            p.pos.y += p.heading.sin() * (p.speed * FALLBACK_VERTICAL_DAMP);
            p.heading += FALLBACK_TURN_STEP;
            p.pos.x = wrap(p.pos.x, w);
            p.pos.y = wrap(p.pos.y, h);
        }
    }
}

/// Teleport a coordinate to the opposite edge once it leaves
/// `[-margin, extent + margin]`.
#[inline]
pub fn wrap(v: f32, extent: f32) -> f32 {
    if v < -FALLBACK_MARGIN {
        extent + FALLBACK_MARGIN
    } else if v > extent + FALLBACK_MARGIN {
        -FALLBACK_MARGIN
    } else {
        v
    }
}
