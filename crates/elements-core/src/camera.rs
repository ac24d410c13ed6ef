//! Camera pose driven by the pan phase.

use glam::{Mat4, Vec3};

use crate::constants::{CAMERA_PAN_SPAN, CAMERA_Z};
use crate::mapper::ProgressMap;

/// Right-handed camera looking at the stage. Only `eye.y` moves.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl CameraPose {
    #[inline]
    pub fn y(&self) -> f32 {
        self.eye.y
    }

    /// Pan for a live slot. Returns false (and leaves the pose alone) in
    /// dead zones.
    pub fn apply_pan(&mut self, map: &ProgressMap) -> bool {
        if !map.slot.is_live() {
            return false;
        }
        self.eye.y = pan_offset(map.pan_phase);
        // orientation follows position, so always reassert the target
        self.target = Vec3::ZERO;
        true
    }

    /// World to view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Linear pan across \[-5, 5\] as the phase goes 0 → 1.
#[inline]
pub fn pan_offset(pan_phase: f32) -> f32 {
    (pan_phase - 0.5) * CAMERA_PAN_SPAN
}
