// Host-side tests for scroll range and velocity helpers.

use elements_core::{ScrollTrigger, VelocityTracker};

#[test]
fn pinned_container_runs_top_to_bottom() {
    let t = ScrollTrigger::pinned_container(100.0, 1000.0, 400.0);
    assert_eq!((t.start, t.end), (100.0, 700.0));
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(400.0), 0.5);
    assert_eq!(t.progress(900.0), 1.0);
}

#[test]
fn slide_range_ends_when_bottom_reaches_top() {
    let t = ScrollTrigger::slide(200.0, 300.0);
    assert_eq!(t.end, 500.0);
    assert_eq!(t.progress(350.0), 0.5);
}

#[test]
fn empty_range_is_a_step() {
    let t = ScrollTrigger::new(50.0, 50.0);
    assert_eq!(t.progress(10.0), 0.0);
    assert_eq!(t.progress(50.0), 1.0);
    let inverted = ScrollTrigger::pinned_container(0.0, 300.0, 800.0);
    assert_eq!(inverted.progress(0.0), 1.0);
}

#[test]
fn velocity_is_pixels_per_second() {
    let mut v = VelocityTracker::default();
    assert_eq!(v.sample(0.0, 0.0), 0.0, "first sample has no history");
    assert_eq!(v.sample(100.0, 0.5), 200.0);
    // same timestamp keeps the last estimate
    assert_eq!(v.sample(120.0, 0.5), 200.0);
    assert_eq!(v.sample(70.0, 1.0), -100.0);
    assert_eq!(v.velocity(), -100.0);
}
