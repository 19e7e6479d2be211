use crate::focus::FocusRegion;
use crate::recorder::{ShockRing, TrailRing};
use crate::theme::Theme;
use glam::Vec2;

/// Everything the compositor reads for one frame.
///
/// Built by [`crate::FieldEngine::tick`]; immutable afterwards, so the
/// compositor is a pure function of `(uv, &FieldSnapshot)`.
#[derive(Clone, Debug)]
pub struct FieldSnapshot {
    /// Surface size in pixels; only the ratio matters to the field.
    pub resolution: Vec2,
    pub time: f32,
    pub theme: Theme,
    /// Overall visibility multiplier in [0, 1] (touch gating on narrow screens).
    pub touch_visibility: f32,
    pub speed: f32,
    pub mouse: Vec2,
    pub trail: TrailRing,
    pub shocks: ShockRing,
    pub focus: FocusRegion,
}

impl FieldSnapshot {
    /// An idle frame: pointer centred, no history, fully visible.
    pub fn idle(resolution: Vec2, time: f32) -> Self {
        Self {
            resolution,
            time,
            theme: Theme::Dark,
            touch_visibility: 1.0,
            speed: 0.0,
            mouse: Vec2::splat(0.5),
            trail: TrailRing::new(),
            shocks: ShockRing::new(),
            focus: FocusRegion::default(),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.resolution.x.max(1.0) / self.resolution.y.max(1.0)
    }

    #[inline]
    pub fn trail_head(&self) -> usize {
        self.trail.head()
    }
}
