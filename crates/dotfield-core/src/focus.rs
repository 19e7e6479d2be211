//! Focus affordance ("pill") tracking.
//!
//! The pill sits just below the screen centre and shies away from the
//! cursor by a few pixels; its on-screen position follows that nudge through
//! a damped spring. The compositor blurs an ellipse around the tracked
//! position while the host reports the pill as hovered.

use crate::constants::*;
use crate::pointer::Viewport;
use glam::Vec2;

/// Elliptical blur region in unit space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusRegion {
    pub center: Vec2,
    pub radius: Vec2,
    pub hovered: bool,
}

impl Default for FocusRegion {
    fn default() -> Self {
        Self {
            center: Vec2::new(0.5, FOCUS_CENTER_Y),
            radius: Vec2::from(FOCUS_RADIUS),
            hovered: false,
        }
    }
}

impl FocusRegion {
    /// True when `uv` lies strictly inside the ellipse and hover is on.
    #[inline]
    pub fn contains(&self, uv: Vec2) -> bool {
        if !self.hovered || self.radius.x <= 0.0 || self.radius.y <= 0.0 {
            return false;
        }
        ((uv - self.center) / self.radius).length() < 1.0
    }
}

/// Damped spring following a pixel-space magnet offset.
#[derive(Clone, Debug)]
pub struct PillTracker {
    target: Vec2,
    pos: Vec2,
    vel: Vec2,
    hovered: bool,
}

impl Default for PillTracker {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            hovered: false,
        }
    }
}

impl PillTracker {
    /// Recompute the magnet target from a raw cursor position (pixels, y down).
    pub fn on_cursor(&mut self, viewport: &Viewport, raw_x: f32, raw_y: f32) {
        self.target = magnet_offset(viewport, raw_x, raw_y);
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    #[inline]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Current spring displacement in pixels.
    #[inline]
    pub fn offset_px(&self) -> Vec2 {
        self.pos
    }

    /// Integrate the spring by `dt_sec`, substepping for stability.
    ///
    /// Gaps longer than [`PILL_MAX_DT_SEC`] (a hidden tab, a stalled frame)
    /// are clamped so every substep stays within [`PILL_MAX_STEP_SEC`].
    pub fn step(&mut self, dt_sec: f32) {
        if dt_sec.is_nan() || dt_sec <= 0.0 {
            return;
        }
        let dt_sec = dt_sec.min(PILL_MAX_DT_SEC);
        let steps = (dt_sec / PILL_MAX_STEP_SEC).ceil().max(1.0) as u32;
        let h = dt_sec / steps as f32;
        for _ in 0..steps {
            let accel =
                PILL_SPRING_STIFFNESS * (self.target - self.pos) - PILL_SPRING_DAMPING * self.vel;
            self.vel += accel * h;
            self.pos += self.vel * h;
        }
    }

    pub fn region(&self, viewport: &Viewport) -> FocusRegion {
        let w = viewport.width.max(1.0);
        let h = viewport.height.max(1.0);
        FocusRegion {
            center: Vec2::new(0.5 + self.pos.x / w, FOCUS_CENTER_Y - self.pos.y / h),
            radius: Vec2::from(FOCUS_RADIUS),
            hovered: self.hovered,
        }
    }
}

/// Push away from the cursor, strongest when the cursor is at the centre.
pub fn magnet_offset(viewport: &Viewport, raw_x: f32, raw_y: f32) -> Vec2 {
    let center = Vec2::new(viewport.width * 0.5, viewport.height * 0.5);
    let d = center - Vec2::new(raw_x, raw_y);
    let dist = d.length();
    let falloff = if dist < PILL_MAGNET_RADIUS_PX {
        1.0 - dist / PILL_MAGNET_RADIUS_PX
    } else {
        0.0
    };
    let len = if dist > 0.0 { dist } else { 1.0 };
    d / len * PILL_MAGNET_STRENGTH_PX * falloff
}
