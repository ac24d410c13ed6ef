//! Scroll progress → segment slot and phases.
//!
//! Every scroll stop is one unit of `x = progress * SNAP_INC - 2`. A segment
//! owns a window of [`WINDOW_LEN`] units starting at `x = 4k - 1`; the
//! trailing half of each window (`(x + 4) mod 4 > 2`) straddles the boundary
//! with the next segment and drives the depth transition.

use crate::constants::{AFTER_LAST_INDEX, ALL_VISIBLE_INDEX, SNAP_INC, WINDOW_LEN};

/// Classification of the raw segment index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentSlot {
    /// Scrolled above the page (out-of-domain progress). No updates.
    BeforeFirst,
    /// The opening stretch before segment 0's first window.
    LeadIn,
    /// Exactly one real segment is active.
    Single(usize),
    /// Sentinel one past the last segment: every segment shows at once.
    AllVisible,
    /// Scrolled past the page end. No updates.
    AfterLast,
}

impl SegmentSlot {
    pub fn classify(index: i32, progress: f32) -> Self {
        match index {
            i if i < -1 => SegmentSlot::BeforeFirst,
            -1 if progress < 0.0 => SegmentSlot::BeforeFirst,
            -1 => SegmentSlot::LeadIn,
            i if i >= AFTER_LAST_INDEX => SegmentSlot::AfterLast,
            ALL_VISIBLE_INDEX => SegmentSlot::AllVisible,
            i => SegmentSlot::Single(i as usize),
        }
    }

    /// Dead zones leave camera, depth and visibility untouched.
    #[inline]
    pub fn is_live(self) -> bool {
        !matches!(self, SegmentSlot::BeforeFirst | SegmentSlot::AfterLast)
    }
}

/// Everything derived from one progress value. Pure and stateless.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressMap {
    pub progress: f32,
    pub x: f32,
    pub index: i32,
    pub slot: SegmentSlot,
    /// 1 at the start of a window, 0 at its end.
    pub pan_phase: f32,
    /// `Some(t)` with t in \[0, 1) inside the trailing transition window.
    pub transition: Option<f32>,
}

impl ProgressMap {
    /// Returns `None` for NaN or infinite progress so callers can keep their
    /// previous state.
    pub fn from_progress(progress: f32) -> Option<Self> {
        if !progress.is_finite() {
            return None;
        }
        let x = progress * SNAP_INC - 2.0;
        let window = (x + 1.0) / WINDOW_LEN;
        let index = window.floor() as i32;
        let slot = SegmentSlot::classify(index, progress);
        let pan_phase = match slot {
            SegmentSlot::LeadIn => 1.0,
            _ => 1.0 - window.rem_euclid(1.0),
        };
        let wrapped = (x + WINDOW_LEN).rem_euclid(WINDOW_LEN);
        let transition = (wrapped > 2.0).then(|| (wrapped - 2.0) / 2.0);
        Some(Self {
            progress,
            x,
            index,
            slot,
            pan_phase,
            transition,
        })
    }
}

/// Progress values the page settles on once scrolling stops.
///
/// Three stops per segment window (the fourth collapses into the
/// transition), the page top, and the page end.
pub fn snap_points() -> Vec<f32> {
    let mut stops = vec![0.0];
    stops.extend(
        (0..=21)
            .filter(|i| i % 4 != 3)
            .map(|i| (i + 2) as f32 / SNAP_INC),
    );
    let second_to_last = stops.len() - 2;
    stops.remove(second_to_last);
    stops.push(1.0);
    stops.dedup_by(|a, b| (*a - *b).abs() < 1e-6);
    stops
}

/// Closest snap stop to `progress`; non-finite input snaps to the top.
pub fn nearest_snap(progress: f32) -> f32 {
    if !progress.is_finite() {
        return 0.0;
    }
    snap_points()
        .into_iter()
        .min_by(|a, b| (a - progress).abs().total_cmp(&(b - progress).abs()))
        .unwrap_or(0.0)
}
