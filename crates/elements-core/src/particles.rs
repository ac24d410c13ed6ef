//! Velocity-reactive background star field.
//!
//! Each star drifts right on its own at a fixed speed. Scroll velocity
//! stretches every star vertically and pushes it against the scroll
//! direction; the response decays back to rest with a cancelable tween.

use rand::prelude::*;

use crate::constants::*;
use crate::tween::{DecayTween, TweenHandle, TweenSlot};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position in percent of the container width.
    pub x_pos: f32,
    /// Vertical anchor in percent of the container height.
    pub top: f32,
    /// Base size in pixels.
    pub size: f32,
    /// Idle drift in percent per frame, independent of scrolling.
    pub drift: f32,
    pub height: f32,
    pub vertical_offset: f32,
}

impl Particle {
    pub fn new(x_pos: f32, top: f32, size: f32, drift: f32) -> Self {
        Self {
            x_pos,
            top,
            size,
            drift,
            height: size,
            vertical_offset: 0.0,
        }
    }

    /// Recompute the velocity-derived geometry.
    #[inline]
    pub fn respond(&mut self, vel: f32) {
        self.height = particle_height(vel, self.size);
        self.vertical_offset = particle_offset(vel, self.size);
    }

    /// Advance by one frame of idle drift, wrapping past the right edge.
    #[inline]
    pub fn step_drift(&mut self) {
        if self.x_pos > PARTICLE_WRAP_AT {
            self.x_pos = PARTICLE_RESPAWN_AT;
        } else {
            self.x_pos += self.drift;
        }
    }
}

/// `|clamp(vel * size / 5, ±1500)| * 0.02 + size`
#[inline]
pub fn particle_height(vel: f32, size: f32) -> f32 {
    let stretch = (vel * size / VELOCITY_SIZE_DIVISOR).clamp(-HEIGHT_CLAMP_BOUND, HEIGHT_CLAMP_BOUND);
    stretch.abs() * HEIGHT_GAIN + size
}

/// `-clamp(vel * size / 5, ±3000)` scaled harder when scrolling forward.
#[inline]
pub fn particle_offset(vel: f32, size: f32) -> f32 {
    let push = (vel * size / VELOCITY_SIZE_DIVISOR).clamp(-OFFSET_CLAMP_BOUND, OFFSET_CLAMP_BOUND);
    let gain = if vel > 0.0 {
        OFFSET_GAIN_FORWARD
    } else {
        OFFSET_GAIN_BACKWARD
    };
    -push * gain
}

/// The shared scalar every particle reads, plus its decay task.
#[derive(Debug)]
pub struct ParticleVelocityState {
    vel: f32,
    decay: TweenSlot,
    decay_duration_sec: f32,
}

impl ParticleVelocityState {
    pub fn new(decay_duration_sec: f32) -> Self {
        Self {
            vel: 0.0,
            decay: TweenSlot::default(),
            decay_duration_sec,
        }
    }

    #[inline]
    pub fn vel(&self) -> f32 {
        self.vel
    }

    pub fn is_decaying(&self) -> bool {
        self.decay.is_running()
    }

    /// Overwrite `vel` and restart the decay from it. Non-finite input is
    /// ignored and the running decay (if any) carries on.
    pub fn assign(&mut self, vel: f32, now_sec: f64) -> Option<TweenHandle> {
        if !vel.is_finite() {
            return None;
        }
        self.vel = vel;
        Some(
            self.decay
                .issue(DecayTween::new(vel, now_sec, self.decay_duration_sec)),
        )
    }

    pub fn is_current(&self, handle: TweenHandle) -> bool {
        self.decay.is_current(handle)
    }

    /// Step the decay; returns true when `vel` changed.
    pub fn tick(&mut self, now_sec: f64) -> bool {
        match self.decay.sample(now_sec) {
            Some(v) if v != self.vel => {
                self.vel = v;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    velocity: ParticleVelocityState,
}

impl ParticleField {
    /// Scatter `count` stars with a seeded RNG so layouts are reproducible.
    pub fn generate(count: usize, seed: u64, decay_duration_sec: f32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| {
                let x_pos = rng.gen::<f32>() * PARTICLE_WRAP_AT;
                let top = rng.gen::<f32>() * 100.0;
                let size = (rng.gen::<f32>() * PARTICLE_MAX_SIZE).ceil().max(1.0);
                let drift = rng.gen::<f32>() * PARTICLE_DRIFT_RANDOM_SPAN + PARTICLE_DRIFT_MIN;
                Particle::new(x_pos, top, size, drift)
            })
            .collect();
        Self::from_particles(particles, decay_duration_sec)
    }

    pub fn from_particles(particles: Vec<Particle>, decay_duration_sec: f32) -> Self {
        Self {
            particles,
            velocity: ParticleVelocityState::new(decay_duration_sec),
        }
    }

    #[inline]
    pub fn vel(&self) -> f32 {
        self.velocity.vel()
    }

    pub fn velocity_state(&self) -> &ParticleVelocityState {
        &self.velocity
    }

    /// Take a new velocity sample: overwrite, respond, restart the decay.
    pub fn set_velocity(&mut self, vel: f32, now_sec: f64) -> Option<TweenHandle> {
        let handle = self.velocity.assign(vel, now_sec)?;
        self.respond();
        Some(handle)
    }

    /// Advance the decay; particles are recomputed on every change.
    pub fn tick_decay(&mut self, now_sec: f64) -> bool {
        let changed = self.velocity.tick(now_sec);
        if changed {
            self.respond();
        }
        changed
    }

    pub fn drift(&mut self) {
        for p in &mut self.particles {
            p.step_drift();
        }
    }

    fn respond(&mut self) {
        let vel = self.velocity.vel();
        for p in &mut self.particles {
            p.respond(vel);
        }
    }
}
