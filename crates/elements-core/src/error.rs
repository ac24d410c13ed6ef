use thiserror::Error;

/// Recoverable failures of the scene core.
///
/// None of these are fatal: callers log them and keep the previous state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("viewport {width}x{height} has no usable aspect ratio")]
    DegenerateViewport { width: f32, height: f32 },
    #[error("segment index {0} is out of range")]
    UnknownSegment(usize),
}
