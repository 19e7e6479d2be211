use crate::params::FieldParams;
use glam::Vec2;

/// Asymmetric exponential smoothing of pointer speed (unit space per second).
///
/// The rising and falling rates are applied on whichever side the raw speed
/// lands, then a constant per-frame decay pulls the value toward zero.
#[derive(Clone, Debug)]
pub struct SpeedEstimator {
    smoothed: f32,
    prev_pos: Vec2,
    prev_time: f32,
    rate_rising: f32,
    rate_falling: f32,
    ambient_decay: f32,
    min_dt: f32,
}

impl Default for SpeedEstimator {
    fn default() -> Self {
        Self::new(&FieldParams::default())
    }
}

impl SpeedEstimator {
    pub fn new(params: &FieldParams) -> Self {
        Self {
            smoothed: 0.0,
            prev_pos: Vec2::splat(0.5),
            prev_time: 0.0,
            rate_rising: params.speed_rate_rising,
            rate_falling: params.speed_rate_falling,
            ambient_decay: params.speed_ambient_decay,
            min_dt: crate::constants::SPEED_MIN_DT,
        }
    }

    /// Advance one frame and return the smoothed speed.
    pub fn update(&mut self, pos: Vec2, t: f32) -> f32 {
        let dt = (t - self.prev_time).max(self.min_dt);
        let raw = pos.distance(self.prev_pos) / dt;
        self.prev_pos = pos;
        self.prev_time = t;

        if raw.is_finite() {
            let rate = if raw > self.smoothed {
                self.rate_rising
            } else {
                self.rate_falling
            };
            self.smoothed += (raw - self.smoothed) * rate;
        }
        self.smoothed = (self.smoothed * self.ambient_decay).max(0.0);
        self.smoothed
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.smoothed
    }
}
