//! Depth slide between neighbouring segments.
//!
//! The receding segment sinks to half the travel over the first half of the
//! transition window; the incoming one rises back from there over the second
//! half, so the depth is continuous across the segment switch.

use smallvec::SmallVec;

use crate::constants::{DEPTH_TRAVEL, SEGMENT_COUNT};
use crate::mapper::{ProgressMap, SegmentSlot};
use crate::segment::Segment;

pub type Targets = SmallVec<[usize; SEGMENT_COUNT]>;

/// Depth offset for a transition phase; exactly 0 outside the window.
#[inline]
pub fn depth_for(transition: Option<f32>) -> f32 {
    match transition {
        Some(t) if t < 0.5 => -t * DEPTH_TRAVEL,
        Some(t) => DEPTH_TRAVEL * t - DEPTH_TRAVEL,
        None => 0.0,
    }
}

/// Segments that receive the depth offset for `slot`.
pub fn targets(slot: SegmentSlot, segment_count: usize) -> Targets {
    match slot {
        SegmentSlot::Single(i) if i < segment_count => smallvec::smallvec![i],
        // lead-in dips segment 0 to -DEPTH_TRAVEL/2 and back up into its window
        SegmentSlot::LeadIn if segment_count > 0 => smallvec::smallvec![0],
        SegmentSlot::AllVisible => (0..segment_count).collect(),
        _ => Targets::new(),
    }
}

/// Write the depth offset for `map` into its targets and return them.
pub fn apply_transition(segments: &mut [Segment], map: &ProgressMap) -> Targets {
    let depth = depth_for(map.transition);
    let targets = targets(map.slot, segments.len());
    for &i in &targets {
        segments[i].depth_offset = depth;
    }
    targets
}
