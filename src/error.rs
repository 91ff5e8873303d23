use thiserror::Error;

/// Reasons the backdrop model can fail to load.
///
/// Every variant ends in the same place: the error is logged and the
/// backdrop keeps rendering its particles without a model.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch of {path} failed: {reason}")]
    Fetch { path: String, reason: String },
    #[error("fetch of {path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("invalid glTF: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("buffer {0} is not embedded in the GLB")]
    ExternalBuffer(usize),
    #[error("model contains no triangle geometry")]
    Empty,
    #[error("model bounds are degenerate (max dimension {0})")]
    Degenerate(f32),
}
