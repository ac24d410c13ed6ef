//! The scene aggregate the host drives.
//!
//! `SceneState` owns every segment, the star field, the camera and the
//! projection for the whole session. Hosts feed it through three entry
//! points: [`SceneState::on_scroll_update`] per scroll tick,
//! [`SceneState::frame`] per animation frame and [`SceneState::resize`] per
//! viewport change. Each call runs to completion before returning, so a
//! frame never sees a half-applied scroll update.

use crate::camera::CameraPose;
use crate::clock::{idle_rotation, texture_offset};
use crate::constants::{DECAY_DURATION_SEC, DEFAULT_SEED, GHOST_SHELLS, PARTICLE_COUNT};
use crate::error::SceneError;
use crate::mapper::{ProgressMap, SegmentSlot};
use crate::particles::ParticleField;
use crate::segment::{AlphaSource, Element, Segment, TextureStatus};
use crate::transition::{apply_transition, Targets};
use crate::tween::TweenHandle;
use crate::viewport::Projection;
use crate::visibility::{apply_visibility, visible_count};

/// Build-time knobs. Defaults reproduce the shipped page.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub ghost_shells: usize,
    pub particle_count: usize,
    pub seed: u64,
    pub decay_duration_sec: f32,
    pub image_scale: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            ghost_shells: GHOST_SHELLS,
            particle_count: PARTICLE_COUNT,
            seed: DEFAULT_SEED,
            decay_duration_sec: DECAY_DURATION_SEC,
            image_scale: 1.0,
        }
    }
}

/// What a single progress update did.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollOutcome {
    pub map: ProgressMap,
    pub visibility_changed: bool,
    pub camera_moved: bool,
    pub depth_targets: Targets,
}

#[derive(Debug)]
pub struct SceneState {
    pub segments: Vec<Segment>,
    pub camera: CameraPose,
    pub projection: Projection,
    pub particles: ParticleField,
    last_map: Option<ProgressMap>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(SceneParams::default())
    }
}

impl SceneState {
    pub fn new(params: SceneParams) -> Self {
        let segments = Element::ALL
            .iter()
            .map(|&e| Segment::build(e, params.ghost_shells, params.image_scale))
            .collect::<Vec<_>>();
        log::info!(
            "[scene] segments={} shells/segment={} particles={}",
            segments.len(),
            params.ghost_shells + 1,
            params.particle_count
        );
        Self {
            segments,
            camera: CameraPose::default(),
            projection: Projection::default(),
            particles: ParticleField::generate(
                params.particle_count,
                params.seed,
                params.decay_duration_sec,
            ),
            last_map: None,
        }
    }

    /// Host entry point for one scroll-orchestrator tick.
    ///
    /// Progress and velocity are applied independently; a non-finite value
    /// only skips its own half of the update.
    pub fn on_scroll_update(
        &mut self,
        progress: f32,
        velocity: f32,
        now_sec: f64,
    ) -> Option<ScrollOutcome> {
        let outcome = self.apply_progress(progress);
        self.apply_velocity(velocity, now_sec);
        outcome
    }

    /// Mapper → visibility, camera and transition, in one step.
    pub fn apply_progress(&mut self, progress: f32) -> Option<ScrollOutcome> {
        let Some(map) = ProgressMap::from_progress(progress) else {
            log::warn!("[scroll] ignoring non-finite progress {progress}");
            return None;
        };
        if self.last_map.map(|m| m.slot) != Some(map.slot) {
            log::debug!(
                "[scroll] slot {:?} -> {:?} (progress {:.4})",
                self.last_map.map(|m| m.slot),
                map.slot,
                progress
            );
        }
        let visibility_changed = apply_visibility(&mut self.segments, map.slot);
        let camera_moved = self.camera.apply_pan(&map);
        let depth_targets = apply_transition(&mut self.segments, &map);
        self.last_map = Some(map);
        Some(ScrollOutcome {
            map,
            visibility_changed,
            camera_moved,
            depth_targets,
        })
    }

    pub fn apply_velocity(&mut self, velocity: f32, now_sec: f64) -> Option<TweenHandle> {
        let handle = self.particles.set_velocity(velocity, now_sec);
        if handle.is_none() {
            log::warn!("[scroll] ignoring non-finite velocity {velocity}");
        }
        handle
    }

    /// Per-frame update: velocity decay, idle rotation, texture scroll and
    /// star drift.
    pub fn frame(&mut self, elapsed_sec: f64) {
        self.particles.tick_decay(elapsed_sec);
        let rotation = idle_rotation(elapsed_sec);
        let offset = texture_offset(elapsed_sec);
        for segment in &mut self.segments {
            segment.rotation = rotation;
            if let Some(core) = segment.core_mut() {
                core.material.texture_offset = offset;
            }
        }
        self.particles.drift();
    }

    /// Recompute the orthographic bounds. A degenerate viewport keeps the
    /// previous projection.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), SceneError> {
        match Projection::from_viewport(width, height) {
            Ok(p) => {
                self.projection = p;
                Ok(())
            }
            Err(e) => {
                log::warn!("[viewport] {e}; keeping previous projection");
                Err(e)
            }
        }
    }

    pub fn mark_texture_loaded(&mut self, segment: usize) -> Result<(), SceneError> {
        let seg = self
            .segments
            .get_mut(segment)
            .ok_or(SceneError::UnknownSegment(segment))?;
        seg.texture = TextureStatus::Loaded;
        if let Some(core) = seg.core_mut() {
            core.material.alpha = AlphaSource::Image;
        }
        log::info!("[texture] {} ready", seg.element.image());
        Ok(())
    }

    /// The core keeps its default pattern; rendering is unaffected otherwise.
    pub fn mark_texture_failed(&mut self, segment: usize) -> Result<(), SceneError> {
        let seg = self
            .segments
            .get_mut(segment)
            .ok_or(SceneError::UnknownSegment(segment))?;
        seg.texture = TextureStatus::Failed;
        log::warn!(
            "[texture] {} failed to load; using default pattern",
            seg.element.image()
        );
        Ok(())
    }

    pub fn last_map(&self) -> Option<&ProgressMap> {
        self.last_map.as_ref()
    }

    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.visible)
            .map(|(i, _)| i)
    }

    pub fn all_visible(&self) -> bool {
        visible_count(&self.segments) == self.segments.len()
    }

    /// Depth of what is on screen: the active segment, or the shared value
    /// in all-visible mode.
    pub fn active_depth(&self) -> Option<f32> {
        let map = self.last_map?;
        match map.slot {
            SegmentSlot::Single(i) => self.segments.get(i).map(|s| s.depth_offset),
            SegmentSlot::LeadIn | SegmentSlot::AllVisible => {
                self.segments.first().map(|s| s.depth_offset)
            }
            SegmentSlot::BeforeFirst | SegmentSlot::AfterLast => None,
        }
    }
}
