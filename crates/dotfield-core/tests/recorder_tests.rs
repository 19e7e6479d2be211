// Host-side tests for the ring buffers and the trail/shock recorders.

use dotfield_core::*;
use glam::Vec2;

#[test]
fn ring_head_tracks_most_recent_write_across_wrap() {
    let mut ring = TimedRing::<4>::new();
    assert!(ring.is_empty());
    assert_eq!(ring.head(), 0);

    for i in 0..5 {
        ring.push(Vec2::new(i as f32, 0.0), i as f32);
    }
    assert_eq!(ring.cursor(), 5);
    assert_eq!(ring.head(), 0);
    assert_eq!(ring.oldest_slot(), 1);
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.get(0).map(|s| s.time), Some(4.0));
    assert_eq!(ring.get(1).map(|s| s.time), Some(1.0));
}

#[test]
fn ring_predecessor_wraps() {
    assert_eq!(TimedRing::<32>::predecessor(0), 31);
    assert_eq!(TimedRing::<32>::predecessor(5), 4);
    assert_eq!(TimedRing::<16>::predecessor(0), 15);
}

#[test]
fn ring_unused_slots_are_none() {
    let mut ring = TimedRing::<8>::new();
    ring.push(Vec2::ZERO, 1.0);
    assert!(ring.get(0).is_some());
    assert!(ring.slots()[1..].iter().all(Option::is_none));
    assert!(ring.get(99).is_none());
}

#[test]
fn ring_live_filters_by_age() {
    let mut ring = TimedRing::<8>::new();
    ring.push(Vec2::ZERO, 0.0);
    ring.push(Vec2::ZERO, 1.5);
    ring.push(Vec2::ZERO, 3.0);
    let live: Vec<usize> = ring.live(3.0, 1.8).map(|(i, _)| i).collect();
    assert_eq!(live, vec![1, 2]);
}

#[test]
fn ring_samples_at_or_before_time_zero_are_unused() {
    let mut ring = TimedRing::<4>::new();
    ring.push(Vec2::ZERO, 0.0);
    ring.push(Vec2::ZERO, -1.0);
    ring.push(Vec2::ZERO, 0.25);
    let live: Vec<usize> = ring.live(0.5, 1.8).map(|(i, _)| i).collect();
    assert_eq!(live, vec![2]);
    assert!(!TimedSample { pos: Vec2::ZERO, time: 0.0 }.is_live(0.0, 1.8));
}

#[test]
fn replaying_a_sequence_overwrites_without_accumulating() {
    let seq: Vec<(Vec2, f32)> = (0..MAX_WAVES)
        .map(|i| (Vec2::new(i as f32 * 0.05, 0.3), 0.1 * i as f32))
        .collect();

    let mut a = ShockRing::new();
    let mut b = ShockRing::new();
    for &(p, t) in &seq {
        a.push(p, t);
        b.push(p, t);
    }
    assert_eq!(a, b);

    let first_pass = *a.slots();
    for &(p, t) in &seq {
        a.push(p, t);
    }
    assert_eq!(*a.slots(), first_pass);
    assert_eq!(a.len(), MAX_WAVES);
}

#[test]
fn trail_first_move_from_unset_position_samples_immediately() {
    let mut trail = TrailRecorder::default();
    assert_eq!(trail.sample(Vec2::splat(0.5), 0.0), Some(0));
    assert_eq!(trail.head(), 0);
}

#[test]
fn trail_samples_during_fast_motion() {
    let mut trail = TrailRecorder::default();
    trail.sample(Vec2::splat(0.5), 0.0);

    // 0.5 -> 0.9 over 0.1 s at 60 fps.
    let frames = 6;
    for k in 1..=frames {
        let t = k as f32 / 60.0;
        let x = 0.5 + 0.4 * k as f32 / frames as f32;
        trail.sample(Vec2::new(x, 0.5), t);
    }
    assert!(trail.ring().len() >= 2);
    assert_eq!(trail.ring().len(), frames + 1, "every frame jumps past the min distance");
}

#[test]
fn trail_ignores_jitter_below_threshold() {
    let mut trail = TrailRecorder::default();
    trail.sample(Vec2::splat(0.5), 0.0);
    for k in 1..120 {
        let jitter = if k % 2 == 0 { 0.001 } else { -0.001 };
        let wrote = trail.sample(Vec2::new(0.5 + jitter, 0.5), k as f32 / 60.0);
        assert!(wrote.is_none());
    }
    assert_eq!(trail.ring().len(), 1);
}

#[test]
fn trail_slow_motion_waits_for_interval() {
    let mut trail = TrailRecorder::default();
    trail.sample(Vec2::splat(0.5), 0.0);
    // Moved past the jitter threshold but not the jump distance, too soon.
    assert!(trail.sample(Vec2::new(0.505, 0.5), 0.01).is_none());
    // Same displacement once the interval has elapsed.
    assert!(trail.sample(Vec2::new(0.505, 0.5), 0.05).is_some());
}

#[test]
fn shocks_stack_without_dedup() {
    let mut shocks = ShockRecorder::new();
    for _ in 0..3 {
        shocks.record(Vec2::splat(0.2), 1.0);
    }
    assert_eq!(shocks.ring().len(), 3);
    assert_eq!(shocks.ring().head(), 2);
}

#[test]
fn shock_ring_overwrites_oldest() {
    let mut shocks = ShockRecorder::new();
    for i in 0..(MAX_WAVES + 3) {
        shocks.record(Vec2::ZERO, i as f32);
    }
    assert_eq!(shocks.ring().len(), MAX_WAVES);
    assert_eq!(shocks.ring().get(0).map(|s| s.time), Some(MAX_WAVES as f32));
}

#[test]
fn intro_shock_fires_exactly_once_after_delay() {
    let mut shocks = ShockRecorder::new();
    assert!(!shocks.fire_intro(0.1, INTRO_SHOCK_DELAY));
    assert!(!shocks.fire_intro(0.3, INTRO_SHOCK_DELAY));
    assert!(shocks.fire_intro(0.31, INTRO_SHOCK_DELAY));
    assert!(!shocks.fire_intro(0.5, INTRO_SHOCK_DELAY));
    assert!(shocks.intro_fired());

    assert_eq!(shocks.ring().len(), 1);
    let s = shocks.ring().get(0).copied();
    assert_eq!(s.map(|s| s.pos), Some(Vec2::splat(0.5)));
}
