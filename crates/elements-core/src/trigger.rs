//! Scroll-position helpers the host uses to feed the scene.

/// Maps a scroll offset between `start` and `end` onto \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub start: f32,
    pub end: f32,
}

impl ScrollTrigger {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Element top hits viewport top → element bottom hits viewport bottom.
    pub fn pinned_container(element_top: f32, element_height: f32, viewport_height: f32) -> Self {
        Self::new(element_top, element_top + element_height - viewport_height)
    }

    /// Element top hits viewport top → element bottom hits viewport top.
    pub fn slide(element_top: f32, element_height: f32) -> Self {
        Self::new(element_top, element_top + element_height)
    }

    pub fn progress(&self, scroll: f32) -> f32 {
        let span = self.end - self.start;
        if span <= 0.0 || !span.is_finite() {
            return if scroll < self.start { 0.0 } else { 1.0 };
        }
        ((scroll - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Scroll velocity in pixels per second from consecutive samples.
#[derive(Clone, Copy, Debug, Default)]
pub struct VelocityTracker {
    last: Option<(f32, f64)>,
    velocity: f32,
}

impl VelocityTracker {
    pub fn sample(&mut self, scroll: f32, now_sec: f64) -> f32 {
        if let Some((prev_scroll, prev_sec)) = self.last {
            let dt = now_sec - prev_sec;
            if dt > 0.0 {
                self.velocity = ((scroll - prev_scroll) as f64 / dt) as f32;
            }
        }
        self.last = Some((scroll, now_sec));
        self.velocity
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}
