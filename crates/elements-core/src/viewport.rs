use glam::Mat4;

use crate::constants::{CAMERA_FAR, CAMERA_NEAR, FRUSTUM_SIZE};
use crate::error::SceneError;

/// Orthographic frustum bounds for the current viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::with_aspect(1.0)
    }
}

impl Projection {
    /// Fixed vertical extent, horizontal extent follows the aspect ratio.
    pub fn with_aspect(aspect: f32) -> Self {
        let half_h = FRUSTUM_SIZE / 2.0;
        let half_w = FRUSTUM_SIZE * aspect / 2.0;
        Self {
            left: -half_w,
            right: half_w,
            top: half_h,
            bottom: -half_h,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    pub fn from_viewport(width: f32, height: f32) -> Result<Self, SceneError> {
        let usable = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if !usable {
            return Err(SceneError::DegenerateViewport { width, height });
        }
        Ok(Self::with_aspect(width / height))
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        (self.right - self.left) / (self.top - self.bottom)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}
