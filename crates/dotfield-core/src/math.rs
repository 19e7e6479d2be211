//! Small scalar helpers with shader semantics.
//!
//! These follow GLSL/WGSL definitions (e.g. `fract` is `x - floor(x)`), so
//! the CPU compositor and the shader agree bit-for-bit on shape if not on
//! rounding.

use crate::constants::NORMALIZE_EPS;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
pub fn fract2(v: Vec2) -> Vec2 {
    Vec2::new(fract(v.x), fract(v.y))
}

#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn mix3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Hermite step between `edge0 < edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let span = edge1 - edge0;
    if span <= 0.0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / span).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// 1 at the centre, 0 at and beyond `radius` (a reversed smoothstep).
#[inline]
pub fn inner_falloff(radius: f32, dist: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    1.0 - smoothstep(0.0, radius, dist)
}

/// Half-cosine bump with compact support: 1 at `dist == 0`, exactly 0 once
/// `dist >= extent`.
#[inline]
pub fn cosine_taper(dist: f32, extent: f32) -> f32 {
    if extent <= 0.0 || dist >= extent {
        return 0.0;
    }
    let t = (dist / extent).clamp(0.0, 1.0);
    0.5 + 0.5 * (t * PI).cos()
}

/// `normalize(v + eps)`; zero only in the degenerate `v == -eps` case.
#[inline]
pub fn nudged_dir(v: Vec2) -> Vec2 {
    (v + Vec2::splat(NORMALIZE_EPS)).normalize_or_zero()
}

/// Closest point to `p` on the segment `a..b` and its parameter in `[0, 1]`.
#[inline]
pub fn closest_on_segment(p: Vec2, a: Vec2, b: Vec2) -> (Vec2, f32) {
    let seg = b - a;
    let len = seg.length() + NORMALIZE_EPS;
    let t = ((p - a).dot(seg) / (len * len)).clamp(0.0, 1.0);
    (a + seg * t, t)
}

/// Cheap 2D -> [0, 1) hash used for film grain.
#[inline]
pub fn hash21(p: Vec2) -> f32 {
    let mut q = fract2(p * Vec2::new(234.34, 435.345));
    let d = q.dot(q + Vec2::splat(34.23));
    q += Vec2::splat(d);
    fract(q.x * q.y)
}
