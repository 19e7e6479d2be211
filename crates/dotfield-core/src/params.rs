use crate::constants::*;
use crate::error::{FieldError, FieldResult};

/// Runtime tunables for the host-side samplers.
///
/// Kernel shapes are fixed (they are mirrored in the shader); only the
/// parameters that govern how input is sampled and smoothed live here.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub trail_move_eps: f32,
    pub trail_interval: f32,
    pub trail_min_dist: f32,
    pub speed_rate_rising: f32,
    pub speed_rate_falling: f32,
    pub speed_ambient_decay: f32,
    pub intro_shock_delay: f32,
    pub narrow_viewport_px: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            trail_move_eps: TRAIL_MOVE_EPS,
            trail_interval: TRAIL_INTERVAL,
            trail_min_dist: TRAIL_MIN_DIST,
            speed_rate_rising: SPEED_RATE_RISING,
            speed_rate_falling: SPEED_RATE_FALLING,
            speed_ambient_decay: SPEED_AMBIENT_DECAY,
            intro_shock_delay: INTRO_SHOCK_DELAY,
            narrow_viewport_px: NARROW_VIEWPORT_PX,
        }
    }
}

impl FieldParams {
    pub fn validate(&self) -> FieldResult<()> {
        non_negative("trail_move_eps", self.trail_move_eps)?;
        non_negative("trail_interval", self.trail_interval)?;
        non_negative("trail_min_dist", self.trail_min_dist)?;
        unit_rate("speed_rate_rising", self.speed_rate_rising)?;
        unit_rate("speed_rate_falling", self.speed_rate_falling)?;
        unit_rate("speed_ambient_decay", self.speed_ambient_decay)?;
        non_negative("intro_shock_delay", self.intro_shock_delay)?;
        non_negative("narrow_viewport_px", self.narrow_viewport_px)?;
        if self.trail_min_dist < self.trail_move_eps {
            return Err(FieldError::InvalidParam {
                name: "trail_min_dist",
                value: self.trail_min_dist,
            });
        }
        log::debug!("field params ok: {:?}", self);
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f32) -> FieldResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FieldError::InvalidParam { name, value })
    }
}

// Smoothing rates must stay in [0, 1] or the EMA overshoots.
fn unit_rate(name: &'static str, value: f32) -> FieldResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(FieldError::InvalidParam { name, value })
    }
}
