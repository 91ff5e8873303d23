use crate::constants::*;
use glam::Vec3;
use rand::Rng;

/// Depth-recycled particles drifting toward the camera behind the model.
pub struct StarField {
    positions: Vec<Vec3>,
    speeds: Vec<f32>,
}

impl StarField {
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut speeds = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * BACKDROP_SPAN_X,
                (rng.gen::<f32>() - 0.5) * BACKDROP_SPAN_Y,
                far_depth(rng),
            ));
            speeds.push(BACKDROP_SPEED_MIN + rng.gen::<f32>() * BACKDROP_SPEED_SPAN);
        }
        Self { positions, speeds }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn step<R: Rng>(&mut self, now_ms: f64, rng: &mut R) {
        for (i, (p, speed)) in self.positions.iter_mut().zip(&self.speeds).enumerate() {
            let fi = i as f64;
            p.x += (now_ms * BACKDROP_DRIFT_FREQ_X + fi).sin() as f32 * BACKDROP_DRIFT_AMP_X;
            p.y += (now_ms * BACKDROP_DRIFT_FREQ_Y + fi).cos() as f32 * BACKDROP_DRIFT_AMP_Y;
            p.z += speed * BACKDROP_SPEED_SCALE;
            if p.z > BACKDROP_Z_RESET {
                p.z = far_depth(rng);
            }
        }
    }
}

#[inline]
fn far_depth<R: Rng>(rng: &mut R) -> f32 {
    BACKDROP_Z_FAR_NEAR - rng.gen::<f32>() * BACKDROP_Z_DEPTH
}
