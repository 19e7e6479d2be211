use crate::constants::{TOUCH_FADE_LEN, TOUCH_FADE_START};
use crate::error::FieldResult;
use crate::focus::PillTracker;
use crate::params::FieldParams;
use crate::pointer::{PointerKind, PointerState, Viewport};
use crate::recorder::{ShockRecorder, TrailRecorder};
use crate::snapshot::FieldSnapshot;
use crate::speed::SpeedEstimator;
use crate::theme::Theme;
use glam::Vec2;

/// All per-surface state. Created on mount, dropped on unmount.
///
/// Event callbacks only write pointer/ring state; [`FieldEngine::tick`] is
/// the single per-frame step that derives speed, samples the trail and
/// produces the snapshot for the compositor.
#[derive(Clone, Debug)]
pub struct FieldEngine {
    params: FieldParams,
    viewport: Viewport,
    resolution: Vec2,
    pointer: PointerState,
    speed: SpeedEstimator,
    trail: TrailRecorder,
    shocks: ShockRecorder,
    pill: PillTracker,
    theme: Theme,
    now: f32,
    last_tick: Option<f32>,
}

impl FieldEngine {
    pub fn new(viewport: Viewport) -> Self {
        Self::build(viewport, FieldParams::default())
    }

    pub fn with_params(viewport: Viewport, params: FieldParams) -> FieldResult<Self> {
        params.validate()?;
        Ok(Self::build(viewport, params))
    }

    fn build(viewport: Viewport, params: FieldParams) -> Self {
        Self {
            speed: SpeedEstimator::new(&params),
            trail: TrailRecorder::new(&params),
            shocks: ShockRecorder::new(),
            pill: PillTracker::default(),
            pointer: PointerState::default(),
            resolution: Vec2::new(viewport.width, viewport.height),
            theme: Theme::default(),
            now: 0.0,
            last_tick: None,
            viewport,
            params,
        }
    }

    /// `viewport` is in logical pixels (pointer space); `resolution` is the
    /// backing surface size used for aspect correction.
    pub fn resize(&mut self, viewport: Viewport, resolution: Vec2) {
        self.viewport = viewport;
        self.resolution = resolution;
    }

    /// Moves the field pointer. Only hovering pointers (mouse, pen) steer
    /// the focus pill; touch contacts leave it where it is.
    pub fn on_pointer_move(&mut self, raw_x: f32, raw_y: f32, kind: PointerKind) {
        self.pointer.on_move(&self.viewport, raw_x, raw_y);
        if kind != PointerKind::Touch {
            self.pill.on_cursor(&self.viewport, raw_x, raw_y);
        }
    }

    pub fn on_pointer_down(&mut self, kind: PointerKind) {
        self.pointer.on_down(kind);
    }

    pub fn on_pointer_up(&mut self, kind: PointerKind) {
        self.pointer.on_up(kind);
    }

    /// Moves the pointer and records a shock at the click position using the
    /// last frame's clock. `suppressed` is set by hosts when the event came
    /// from an element that opts out of background interaction; the pointer
    /// still moves. Clicks do not steer the focus pill.
    pub fn on_click(&mut self, raw_x: f32, raw_y: f32, suppressed: bool) -> Option<usize> {
        self.pointer.on_move(&self.viewport, raw_x, raw_y);
        if suppressed {
            return None;
        }
        let origin = self.viewport.to_unit(raw_x, raw_y);
        Some(self.shocks.record(origin, self.now))
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_focus_hovered(&mut self, hovered: bool) {
        self.pill.set_hovered(hovered);
    }

    /// Visibility gate: always 1 on wide viewports; on narrow ones, on while
    /// touching or during the start-up fade.
    pub fn touch_visibility(&self, t: f32) -> f32 {
        if self.viewport.width >= self.params.narrow_viewport_px {
            return 1.0;
        }
        let intro = if t < TOUCH_FADE_START + TOUCH_FADE_LEN {
            1.0 - ((t - TOUCH_FADE_START) / TOUCH_FADE_LEN).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let touch = if self.pointer.touch_active() { 1.0 } else { 0.0 };
        f32::max(touch, intro)
    }

    /// Per-frame step at engine time `t` (seconds since mount).
    pub fn tick(&mut self, t: f32) -> FieldSnapshot {
        let dt = self.last_tick.map(|prev| (t - prev).max(0.0)).unwrap_or(0.0);
        self.last_tick = Some(t);
        self.now = t;

        self.shocks.fire_intro(t, self.params.intro_shock_delay);
        let speed = self.speed.update(self.pointer.pos, t);
        self.trail.sample(self.pointer.pos, t);
        self.pill.step(dt);

        FieldSnapshot {
            resolution: self.resolution,
            time: t,
            theme: self.theme,
            touch_visibility: self.touch_visibility(t),
            speed,
            mouse: self.pointer.pos,
            trail: self.trail.ring().clone(),
            shocks: self.shocks.ring().clone(),
            focus: self.pill.region(&self.viewport),
        }
    }

    #[inline]
    pub fn now(&self) -> f32 {
        self.now
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed.value()
    }

    #[inline]
    pub fn trail(&self) -> &TrailRecorder {
        &self.trail
    }

    #[inline]
    pub fn shocks(&self) -> &ShockRecorder {
        &self.shocks
    }

    #[inline]
    pub fn params(&self) -> &FieldParams {
        &self.params
    }
}
