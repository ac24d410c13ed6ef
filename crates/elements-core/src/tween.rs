//! Cancelable decay tween.
//!
//! A [`TweenSlot`] holds at most one running tween. Issuing a new one bumps
//! the slot generation, so handles to the superseded tween go stale and the
//! old curve is never sampled again.

/// Easing curves, evaluated on `t` clamped to \[0, 1\].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ease {
    Linear,
    /// `1 - (1 - t)^3`: fast start, gentle landing.
    #[default]
    Power3Out,
}

impl Ease {
    #[inline]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power3Out => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
        }
    }
}

/// Eases a scalar from `from` to 0 over `duration_sec`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayTween {
    pub from: f32,
    pub start_sec: f64,
    pub duration_sec: f32,
    pub ease: Ease,
}

impl DecayTween {
    pub fn new(from: f32, start_sec: f64, duration_sec: f32) -> Self {
        Self {
            from,
            start_sec,
            duration_sec,
            ease: Ease::default(),
        }
    }

    #[inline]
    fn progress_at(&self, now_sec: f64) -> f32 {
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        ((now_sec - self.start_sec) as f32 / self.duration_sec).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now_sec: f64) -> f32 {
        self.from * (1.0 - self.ease.evaluate(self.progress_at(now_sec)))
    }

    pub fn is_finished_at(&self, now_sec: f64) -> bool {
        self.progress_at(now_sec) >= 1.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweenHandle(u64);

#[derive(Debug, Default)]
pub struct TweenSlot {
    generation: u64,
    active: Option<DecayTween>,
}

impl TweenSlot {
    /// Start `tween`, cancelling whatever was running.
    pub fn issue(&mut self, tween: DecayTween) -> TweenHandle {
        self.generation = self.generation.wrapping_add(1);
        self.active = Some(tween);
        TweenHandle(self.generation)
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.active = None;
    }

    /// True only for the handle of the tween currently running.
    pub fn is_current(&self, handle: TweenHandle) -> bool {
        self.active.is_some() && handle.0 == self.generation
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Sample the running tween. The final sample is exactly 0 and retires
    /// the tween; afterwards this returns `None`.
    pub fn sample(&mut self, now_sec: f64) -> Option<f32> {
        let tween = self.active?;
        if tween.is_finished_at(now_sec) {
            self.active = None;
            return Some(0.0);
        }
        Some(tween.value_at(now_sec))
    }
}
