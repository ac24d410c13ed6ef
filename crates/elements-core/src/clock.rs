//! Wall-time driven idle animation.
//!
//! Rotation and texture scroll are pure functions of elapsed time, so a
//! dropped frame just lands on the right pose the next time around.

use instant::Instant;

use crate::constants::{ROTATION_PER_SEC, TEXTURE_SCROLL_PER_SEC};

/// Monotonic session time source for the host's frame loop.
#[derive(Clone, Copy, Debug)]
pub struct SessionClock {
    start: Instant,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_sec(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[inline]
pub fn idle_rotation(elapsed_sec: f64) -> f32 {
    (elapsed_sec * ROTATION_PER_SEC as f64) as f32
}

/// Horizontal scroll of the core shell's texture.
#[inline]
pub fn texture_offset(elapsed_sec: f64) -> [f32; 2] {
    [(elapsed_sec * TEXTURE_SCROLL_PER_SEC as f64) as f32, 0.0]
}
