use crate::constants::{MAX_WAVES, TRAIL_LEN};
use crate::ring::TimedSample;
use crate::snapshot::FieldSnapshot;

/// Uniform block consumed by `shaders/dotfield.wgsl`.
///
/// Ring slots are packed as `vec4(x, y, time, live)`; `live` is 1.0 for a
/// written slot and 0.0 for an unused one.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FieldUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub theme: f32,
    pub mouse: [f32; 2],
    pub speed: f32,
    pub touch_visibility: f32,
    pub focus_center: [f32; 2],
    pub focus_radius: [f32; 2],
    pub focus_hovered: f32,
    pub trail_head: f32,
    pub _pad: [f32; 2],
    pub trail: [[f32; 4]; TRAIL_LEN],
    pub shocks: [[f32; 4]; MAX_WAVES],
}

impl FieldUniforms {
    pub fn from_snapshot(snap: &FieldSnapshot) -> Self {
        let mut trail = [[0.0; 4]; TRAIL_LEN];
        for (dst, src) in trail.iter_mut().zip(snap.trail.slots()) {
            *dst = pack_slot(src.as_ref());
        }
        let mut shocks = [[0.0; 4]; MAX_WAVES];
        for (dst, src) in shocks.iter_mut().zip(snap.shocks.slots()) {
            *dst = pack_slot(src.as_ref());
        }
        Self {
            resolution: snap.resolution.to_array(),
            time: snap.time,
            theme: snap.theme.weight(),
            mouse: snap.mouse.to_array(),
            speed: snap.speed,
            touch_visibility: snap.touch_visibility,
            focus_center: snap.focus.center.to_array(),
            focus_radius: snap.focus.radius.to_array(),
            focus_hovered: if snap.focus.hovered { 1.0 } else { 0.0 },
            trail_head: snap.trail_head() as f32,
            _pad: [0.0; 2],
            trail,
            shocks,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[inline]
fn pack_slot(slot: Option<&TimedSample>) -> [f32; 4] {
    match slot {
        Some(s) => [s.pos.x, s.pos.y, s.time, 1.0],
        None => [0.0; 4],
    }
}
