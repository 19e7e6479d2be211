// Host-side tests for relationships between tuning constants.

#![allow(clippy::assertions_on_constants)]

use dotfield_core::*;

#[test]
fn speed_releases_faster_than_it_rises() {
    assert!(SPEED_RATE_FALLING > SPEED_RATE_RISING);
    assert!(SPEED_AMBIENT_DECAY > 0.0 && SPEED_AMBIENT_DECAY < 1.0);
}

#[test]
fn trail_jump_distance_exceeds_jitter_threshold() {
    assert!(TRAIL_MIN_DIST > TRAIL_MOVE_EPS);
    assert!(TRAIL_INTERVAL > 0.0);
}

#[test]
fn shocks_outlive_trail() {
    assert!(SHOCK_MAX_AGE > TRAIL_MAX_AGE);
    assert!(INTRO_SHOCK_DELAY < TOUCH_FADE_START);
}

#[test]
fn dots_stay_inside_their_cell() {
    assert!(OFFSET_CLAMP + DOT_RADIUS + DOT_RADIUS_NEAR + DOT_SOFTNESS < 0.5 + DOT_SOFTNESS);
    assert!(DOT_RADIUS > DOT_SOFTNESS);
}

#[test]
fn near_highlight_sits_inside_cursor_influence() {
    assert!(NEAR_RADIUS < CURSOR_INFLUENCE_BASE);
}

#[test]
fn focus_ellipse_is_wider_than_tall() {
    assert!(FOCUS_RADIUS[0] > FOCUS_RADIUS[1]);
    assert_eq!(FOCUS_BLUR_TAPS, 2);
}
