use crate::constants::{INTRO_SHOCK_ORIGIN, MAX_WAVES, TRAIL_LEN, TRAIL_UNSET_POS};
use crate::params::FieldParams;
use crate::ring::TimedRing;
use glam::Vec2;

pub type TrailRing = TimedRing<TRAIL_LEN>;
pub type ShockRing = TimedRing<MAX_WAVES>;

/// Samples the pointer path into a 32-slot ring, denser during fast motion.
#[derive(Clone, Debug)]
pub struct TrailRecorder {
    ring: TrailRing,
    last_pos: Vec2,
    last_time: f32,
    move_eps: f32,
    interval: f32,
    min_dist: f32,
}

impl Default for TrailRecorder {
    fn default() -> Self {
        Self::new(&FieldParams::default())
    }
}

impl TrailRecorder {
    pub fn new(params: &FieldParams) -> Self {
        Self {
            ring: TrailRing::new(),
            last_pos: Vec2::from(TRAIL_UNSET_POS),
            last_time: 0.0,
            move_eps: params.trail_move_eps,
            interval: params.trail_interval,
            min_dist: params.trail_min_dist,
        }
    }

    /// Per-frame check; returns the written slot when a sample was taken.
    pub fn sample(&mut self, pos: Vec2, t: f32) -> Option<usize> {
        let dist = pos.distance(self.last_pos);
        let moved = dist > self.move_eps;
        let time_ok = t - self.last_time > self.interval;
        let dist_ok = dist > self.min_dist;
        if !(moved && (time_ok || dist_ok)) {
            return None;
        }
        let slot = self.ring.push(pos, t);
        self.last_pos = pos;
        self.last_time = t;
        log::trace!("trail sample slot={} pos=({:.3},{:.3}) t={:.3}", slot, pos.x, pos.y, t);
        Some(slot)
    }

    #[inline]
    pub fn head(&self) -> usize {
        self.ring.head()
    }

    #[inline]
    pub fn ring(&self) -> &TrailRing {
        &self.ring
    }
}

/// One slot per discrete click or tap, plus the one-shot intro wave.
#[derive(Clone, Debug, Default)]
pub struct ShockRecorder {
    ring: ShockRing,
    intro_fired: bool,
}

impl ShockRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, origin: Vec2, t: f32) -> usize {
        let slot = self.ring.push(origin, t);
        log::debug!(
            "shock slot={} origin=({:.3},{:.3}) t={:.3}",
            slot,
            origin.x,
            origin.y,
            t
        );
        slot
    }

    /// Fires the centred intro wave once `t` passes `delay`. Returns true
    /// only on the call that fired.
    pub fn fire_intro(&mut self, t: f32, delay: f32) -> bool {
        if self.intro_fired || t <= delay {
            return false;
        }
        self.intro_fired = true;
        self.record(Vec2::from(INTRO_SHOCK_ORIGIN), t);
        log::debug!("intro shock fired at t={:.3}", t);
        true
    }

    #[inline]
    pub fn intro_fired(&self) -> bool {
        self.intro_fired
    }

    #[inline]
    pub fn ring(&self) -> &ShockRing {
        &self.ring
    }
}
