// Host-side tests for the field kernels and per-pixel composition.

use dotfield_core::compositor::*;
use dotfield_core::math::{cosine_taper, inner_falloff, smoothstep};
use dotfield_core::*;
use glam::{Vec2, Vec3};
use rand::prelude::*;

fn square_snapshot(time: f32) -> FieldSnapshot {
    FieldSnapshot::idle(Vec2::new(100.0, 100.0), time)
}

fn cell_center_uv(ix: f32, iy: f32) -> Vec2 {
    Vec2::new((ix + 0.5) / GRID_DENSITY, (iy + 0.5) / GRID_DENSITY)
}

#[test]
fn taper_has_compact_support() {
    assert_eq!(cosine_taper(0.0, 0.3), 1.0);
    assert!((cosine_taper(0.15, 0.3) - 0.5).abs() < 1e-6);
    assert_eq!(cosine_taper(0.3, 0.3), 0.0);
    assert_eq!(cosine_taper(10.0, 0.3), 0.0);
    assert_eq!(cosine_taper(0.0, 0.0), 0.0);
}

#[test]
fn falloff_and_smoothstep_edges() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert_eq!(inner_falloff(0.0, 0.0), 0.0);
    assert_eq!(inner_falloff(0.1, 0.0), 1.0);
    assert_eq!(inner_falloff(0.1, 0.2), 0.0);
}

#[test]
fn grid_cell_centres_and_local_coords() {
    // 0.5 * 90 lands exactly on a cell edge.
    let edge = grid_cell(Vec2::splat(0.5));
    assert!((edge.world.x - 45.5 / GRID_DENSITY).abs() < 1e-6);
    assert!((edge.local.x + 0.5).abs() < 1e-4);

    let mid = grid_cell(cell_center_uv(45.0, 10.0));
    assert!((mid.world.y - 10.5 / GRID_DENSITY).abs() < 1e-6);
    assert!(mid.local.abs().max_element() < 1e-3);
}

#[test]
fn cursor_kernel_is_zero_beyond_influence() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2_000 {
        let mouse = Vec2::new(rng.gen_range(-0.5..2.0), rng.gen_range(-0.5..1.5));
        let speed = rng.gen_range(0.0..8.0);
        let cell = Vec2::new(rng.gen_range(-0.5..2.0), rng.gen_range(-0.5..1.5));
        let k = cursor_kernel(cell, mouse, speed);
        if k.dist >= k.radius {
            assert_eq!(k.offset, Vec2::ZERO, "mouse={mouse} cell={cell} speed={speed}");
        } else {
            assert!(k.offset.is_finite());
        }
    }
}

#[test]
fn cursor_influence_grows_with_speed_and_saturates() {
    let slow = cursor_kernel(Vec2::ZERO, Vec2::ONE, 0.0);
    let fast = cursor_kernel(Vec2::ZERO, Vec2::ONE, 2.2);
    let faster = cursor_kernel(Vec2::ZERO, Vec2::ONE, 50.0);
    assert!((slow.radius - CURSOR_INFLUENCE_BASE).abs() < 1e-6);
    assert!(fast.radius > slow.radius);
    assert!((faster.radius - (CURSOR_INFLUENCE_BASE + CURSOR_INFLUENCE_SPAN)).abs() < 1e-6);
    assert_eq!(speed_inflation(-1.0), 0.0);
}

#[test]
fn cursor_kernel_pushes_away_from_cursor() {
    let k = cursor_kernel(Vec2::new(0.55, 0.5), Vec2::new(0.5, 0.5), 0.0);
    assert!(k.offset.x > 0.0);
    let at = cursor_kernel(Vec2::splat(0.5), Vec2::splat(0.5), 0.0);
    assert!(at.offset.is_finite(), "degenerate delta must not produce NaN");
}

#[test]
fn stale_trail_samples_contribute_nothing() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut trail = TrailRing::new();
    for _ in 0..TRAIL_LEN {
        trail.push(Vec2::new(rng.gen(), rng.gen()), rng.gen_range(0.0..1.0));
    }
    let now = 1.0 + TRAIL_MAX_AGE + 0.01;
    for _ in 0..500 {
        let cell = Vec2::new(rng.gen(), rng.gen());
        let k = trail_kernel(cell, &trail, now, 1.0, rng.gen());
        assert_eq!(k.offset, Vec2::ZERO);
        assert_eq!(k.glow, 0.0);
    }
}

#[test]
fn trail_glow_takes_max_not_sum() {
    let p = Vec2::new(0.4, 0.6);
    let now = 1.4;
    let mut single = TrailRing::new();
    single.push(p, 1.0);
    let mut doubled = TrailRing::new();
    doubled.push(p, 1.0);
    doubled.push(p, 1.0);

    let a = trail_kernel(p, &single, now, 1.0, 0.0);
    let b = trail_kernel(p, &doubled, now, 1.0, 0.0);
    let expected = (-0.4f32 * TRAIL_DECAY).exp();
    assert!((a.glow - expected).abs() < 1e-5);
    assert!((b.glow - a.glow).abs() < 1e-6, "overlap must not brighten");
}

#[test]
fn trail_segments_fill_the_gap_between_samples() {
    let now = 2.0;
    let mut trail = TrailRing::new();
    trail.push(Vec2::new(0.2, 0.5), now);
    trail.push(Vec2::new(0.4, 0.5), now);

    let mid = Vec2::new(0.3, 0.5);
    let k = trail_kernel(mid, &trail, now, 1.0, 0.0);
    assert!(k.glow > 0.9, "segment glow at midpoint was {}", k.glow);

    // The points alone would not reach the midpoint.
    let mut lone = TrailRing::new();
    lone.push(Vec2::new(0.2, 0.5), now);
    assert_eq!(trail_kernel(mid, &lone, now, 1.0, 0.0).glow, 0.0);
}

#[test]
fn trail_does_not_bridge_newest_to_oldest() {
    let now = 5.0;
    let far = Vec2::new(0.5, 0.1);
    let mut trail = TrailRing::new();
    // Slot 0 is written twice; after TRAIL_LEN + 1 writes slot 0 is the
    // newest and slot 1 the oldest.
    trail.push(far, now);
    trail.push(Vec2::new(0.2, 0.5), now);
    for _ in 2..TRAIL_LEN {
        trail.push(far, now);
    }
    trail.push(Vec2::new(0.8, 0.5), now);
    assert_eq!(trail.head(), 0);
    assert_eq!(trail.oldest_slot(), 1);

    let k = trail_kernel(Vec2::new(0.5, 0.5), &trail, now, 1.0, 0.0);
    assert_eq!(k.glow, 0.0);
}

#[test]
fn overlapping_shocks_sum_past_one() {
    let origin = Vec2::splat(0.5);
    let t0 = 1.0;
    let now = t0 + 0.01;

    let mut one = ShockRing::new();
    one.push(origin, t0);
    let mut two = ShockRing::new();
    two.push(origin, t0);
    two.push(origin, now);

    let a = shock_kernel(origin, origin, &one, now, 1.0);
    let b = shock_kernel(origin, origin, &two, now, 1.0);
    let second = shock_strength(0.0, 0.0);
    assert!((second - 1.0).abs() < 1e-6);
    assert!((b.intensity - (a.intensity + second)).abs() < 1e-5);
    assert!(b.intensity > 1.0, "summed shocks are not clamped");
}

#[test]
fn shock_ring_travels_outward() {
    // At age 1 s the front sits at radius 0.5.
    let on_front = shock_strength(0.5, 1.0);
    let inside = shock_strength(0.1, 1.0);
    assert!(on_front > inside * 10.0);
    assert!((on_front - (-SHOCK_DECAY).exp()).abs() < 1e-6);
}

#[test]
fn stale_shocks_are_inert() {
    let mut shocks = ShockRing::new();
    shocks.push(Vec2::splat(0.5), 0.0);
    let k = shock_kernel(Vec2::splat(0.5), Vec2::splat(0.5), &shocks, SHOCK_MAX_AGE + 0.1, 1.0);
    assert_eq!(k.intensity, 0.0);
    assert_eq!(k.offset, Vec2::ZERO);
}

#[test]
fn composite_offset_is_clamped() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut snap = square_snapshot(1.0);
    snap.speed = 6.0;
    snap.mouse = Vec2::new(0.5, 0.5);
    for i in 0..MAX_WAVES {
        snap.shocks.push(Vec2::splat(0.5), 1.0 - i as f32 * 0.02);
    }
    for i in 0..TRAIL_LEN {
        snap.trail.push(Vec2::new(0.3 + i as f32 * 0.01, 0.5), 1.0);
    }
    for _ in 0..1_000 {
        let uv = Vec2::new(rng.gen(), rng.gen());
        let f = composite_cell(uv, &snap);
        assert!(f.offset.abs().max_element() <= OFFSET_CLAMP + 1e-6);
        assert!(f.color.is_finite());
    }
}

#[test]
fn dark_theme_shows_idle_dots_light_theme_hides_them() {
    let uv = cell_center_uv(5.0, 85.0);
    let mut snap = square_snapshot(0.0);

    let dark = composite_cell(uv, &snap);
    assert!(dark.dot_mask > 0.99);
    assert_eq!(dark.near, 0.0);
    assert!(dark.color.x > 0.05, "dot visible on black: {}", dark.color);

    snap.theme = Theme::Light;
    let light = composite_cell(uv, &snap);
    assert!(light.dot_mask > 0.99);
    assert!((light.color - Vec3::ONE).abs().max_element() <= GRAIN_AMOUNT * 0.5 + 1e-4);
}

#[test]
fn light_theme_reveals_dots_near_cursor() {
    let mut snap = square_snapshot(0.0);
    snap.theme = Theme::Light;
    let centre = cell_center_uv(45.0, 45.0);
    snap.mouse = centre;
    // The cursor pushes the dot off its centre; sample where it landed.
    let push = cursor_kernel(grid_cell(centre).world, centre, 0.0).offset;
    let uv = centre + push / GRID_DENSITY;
    let f = composite_cell(uv, &snap);
    assert!(f.near > 0.99);
    assert!(f.dot_mask > 0.99);
    assert!(f.color.x < 0.5, "dot should darken the white background");
}

#[test]
fn touch_visibility_zero_shows_background_only() {
    let mut snap = square_snapshot(0.0);
    snap.touch_visibility = 0.0;
    snap.mouse = cell_center_uv(45.0, 45.0);
    let f = composite_cell(snap.mouse, &snap);
    // Dark background plus grain; the ambient gradient is still faded out at t=0.
    assert!(f.color.abs().max_element() <= GRAIN_AMOUNT * 0.5 + 1e-4);
}

#[test]
fn focus_blur_only_inside_hovered_ellipse() {
    let mut snap = square_snapshot(0.7);
    snap.focus.hovered = true;

    let outside = Vec2::new(0.1, 0.1);
    assert_eq!(shade(outside, &snap), composite_cell(outside, &snap).color);

    let inside = snap.focus.center;
    let mut sum = Vec3::ZERO;
    for dy in -2..=2 {
        for dx in -2..=2 {
            let o = Vec2::new(dx as f32, dy as f32) * FOCUS_BLUR_STEP;
            sum += composite_cell(inside + o, &snap).color;
        }
    }
    let blurred = shade(inside, &snap);
    assert!((blurred - sum / 25.0).abs().max_element() < 1e-5);

    snap.focus.hovered = false;
    assert_eq!(shade(inside, &snap), composite_cell(inside, &snap).color);
}
