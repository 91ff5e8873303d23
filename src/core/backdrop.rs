use super::bounds::Aabb;
use crate::constants::*;
use crate::error::LoadError;
use glam::{Mat4, Vec3};

/// Uniform scale plus recentring that fits a model into the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub scale: f32,
    /// Model-space centre of the source bounds; subtracted before scaling.
    pub pivot: Vec3,
    /// World-space position of the recentred model.
    pub offset: Vec3,
    pub rotation_y: f32,
}

impl Placement {
    /// Scale `bounds` so its largest side equals `target`, then move its
    /// centre to `(0, y_offset, 0)`.
    pub fn fit(bounds: &Aabb, target: f32, y_offset: f32) -> Result<Self, LoadError> {
        let max_dim = bounds.max_dimension();
        if !max_dim.is_finite() || max_dim <= f32::EPSILON {
            return Err(LoadError::Degenerate(max_dim));
        }
        Ok(Self {
            scale: target / max_dim,
            pivot: bounds.center(),
            offset: Vec3::new(0.0, y_offset, 0.0),
            rotation_y: 0.0,
        })
    }

    /// Model-to-world transform. Spins about the recentred origin so the
    /// model turns in place.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.offset)
            * Mat4::from_rotation_y(self.rotation_y)
            * Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_translation(-self.pivot)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssetState {
    Unloaded,
    Loading,
    Loaded(Placement),
    Failed,
}

/// Lifecycle of the single backdrop model.
///
/// `Unloaded -> Loading -> {Loaded | Failed}`; both end states are final and
/// out-of-order transitions are ignored.
pub struct ModelSlot {
    state: AssetState,
}

impl Default for ModelSlot {
    fn default() -> Self {
        Self {
            state: AssetState::Unloaded,
        }
    }
}

impl ModelSlot {
    pub fn state(&self) -> &AssetState {
        &self.state
    }

    pub fn begin_loading(&mut self) -> bool {
        if self.state == AssetState::Unloaded {
            self.state = AssetState::Loading;
            true
        } else {
            false
        }
    }

    /// Settle a pending load with the model's bounds. A degenerate model is
    /// treated as a failed load.
    pub fn finish(&mut self, bounds: Result<Aabb, LoadError>) -> Result<Placement, LoadError> {
        if self.state != AssetState::Loading {
            log::warn!("[model] load settled while {:?}; ignored", self.state);
        }
        let placement = bounds.and_then(|b| Placement::fit(&b, MODEL_TARGET_SIZE, MODEL_Y_OFFSET));
        if self.state == AssetState::Loading {
            self.state = match &placement {
                Ok(p) => AssetState::Loaded(*p),
                Err(_) => AssetState::Failed,
            };
        }
        placement
    }

    pub fn step(&mut self) {
        if let AssetState::Loaded(p) = &mut self.state {
            p.rotation_y += MODEL_SPIN_STEP;
        }
    }

    pub fn transform(&self) -> Option<Mat4> {
        match &self.state {
            AssetState::Loaded(p) => Some(p.matrix()),
            _ => None,
        }
    }
}
