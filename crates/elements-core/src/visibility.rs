use crate::mapper::SegmentSlot;
use crate::segment::Segment;

/// Show/hide segments for `slot`. Returns true if any flag flipped.
///
/// Dead zones keep whatever was shown last.
pub fn apply_visibility(segments: &mut [Segment], slot: SegmentSlot) -> bool {
    let active = match slot {
        SegmentSlot::Single(i) => Some(i),
        SegmentSlot::LeadIn => Some(0),
        SegmentSlot::AllVisible => None,
        SegmentSlot::BeforeFirst | SegmentSlot::AfterLast => return false,
    };
    let mut changed = false;
    for (i, segment) in segments.iter_mut().enumerate() {
        let visible = active.map_or(true, |a| a == i);
        changed |= segment.visible != visible;
        segment.visible = visible;
    }
    changed
}

#[inline]
pub fn visible_count(segments: &[Segment]) -> usize {
    segments.iter().filter(|s| s.visible).count()
}
