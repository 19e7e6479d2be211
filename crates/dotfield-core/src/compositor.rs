//! Per-pixel field composition.
//!
//! `composite_cell` is the whole field as a pure function of a unit-space
//! coordinate and the frame snapshot. The WGSL shader in `shaders/` is a
//! line-for-line mirror; keep the two in step when changing a kernel.

use crate::constants::*;
use crate::math::*;
use crate::recorder::{ShockRing, TrailRing};
use crate::snapshot::FieldSnapshot;
use glam::{Vec2, Vec3};

/// Grid cell containing a point in aspect-corrected space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    /// Cell centre in aspect-corrected space.
    pub world: Vec2,
    /// Position inside the cell, in [-0.5, 0.5).
    pub local: Vec2,
}

#[inline]
pub fn grid_cell(scaled: Vec2) -> GridCell {
    let grid = scaled * GRID_DENSITY;
    let id = grid.floor();
    GridCell {
        world: (id + Vec2::splat(0.5)) / GRID_DENSITY,
        local: fract2(grid) - Vec2::splat(0.5),
    }
}

/// Unit space -> aspect-corrected space (x scaled by width/height).
#[inline]
pub fn to_scaled(uv: Vec2, aspect: f32) -> Vec2 {
    Vec2::new(uv.x * aspect, uv.y)
}

/// Bounded power curve in [0, 1] growing with pointer speed.
#[inline]
pub fn speed_inflation(speed: f32) -> f32 {
    (speed.max(0.0) / CURSOR_SPEED_REF)
        .powf(CURSOR_SPEED_EXP)
        .min(1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorInfluence {
    pub offset: Vec2,
    pub dist: f32,
    pub radius: f32,
}

/// Radial displacement away from the cursor with compact support.
pub fn cursor_kernel(cell_world: Vec2, mouse_scaled: Vec2, speed: f32) -> CursorInfluence {
    let delta = cell_world - mouse_scaled;
    let dist = delta.length();
    let radius = CURSOR_INFLUENCE_BASE + speed_inflation(speed) * CURSOR_INFLUENCE_SPAN;
    let falloff = cosine_taper(dist, radius);
    CursorInfluence {
        offset: nudged_dir(delta) * falloff * CURSOR_STRENGTH,
        dist,
        radius,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrailInfluence {
    pub offset: Vec2,
    pub glow: f32,
}

// Displacement and glow of one trail blob (point or closest segment point)
// aged `age` seconds.
fn trail_blob(cell_world: Vec2, center: Vec2, age: f32, glow_radius: f32) -> (Vec2, f32) {
    let decay = (-age * TRAIL_DECAY).exp();
    let shrink = 1.0 - age / TRAIL_MAX_AGE;
    let delta = cell_world - center;
    let dist = delta.length();

    let push = inner_falloff(TRAIL_RADIUS * shrink, dist);
    let offset = nudged_dir(delta) * push * decay * TRAIL_STRENGTH;
    let glow = cosine_taper(dist, glow_radius * shrink * TRAIL_GLOW_EXTENT) * decay;
    (offset, glow)
}

/// Trail points and the segments between chronological neighbours.
///
/// Displacements add up; glow takes the running maximum so overlapping
/// segments do not over-brighten.
pub fn trail_kernel(
    cell_world: Vec2,
    trail: &TrailRing,
    now: f32,
    aspect: f32,
    inflation: f32,
) -> TrailInfluence {
    let glow_radius = TRAIL_GLOW_BASE + inflation * TRAIL_GLOW_SPAN;
    let oldest = trail.oldest_slot();
    let mut out = TrailInfluence::default();

    for (i, sample) in trail.live(now, TRAIL_MAX_AGE) {
        let age = sample.age(now);
        let p = to_scaled(sample.pos, aspect);

        let (offset, glow) = trail_blob(cell_world, p, age, glow_radius);
        out.offset += offset;
        out.glow = out.glow.max(glow);

        // Do not bridge from the oldest slot back to the newest one.
        if i == oldest {
            continue;
        }
        let Some(prev) = trail.get(TrailRing::predecessor(i)) else {
            continue;
        };
        if !prev.is_live(now, TRAIL_MAX_AGE) {
            continue;
        }
        let q = to_scaled(prev.pos, aspect);
        let (closest, t) = closest_on_segment(cell_world, p, q);
        let seg_age = mix(age, prev.age(now), t);
        let (offset, glow) = trail_blob(cell_world, closest, seg_age, glow_radius);
        out.offset += offset;
        out.glow = out.glow.max(glow);
    }
    out.glow = out.glow.clamp(0.0, 1.0);
    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShockInfluence {
    pub offset: Vec2,
    pub intensity: f32,
}

/// Gaussian wavefront of one shock at distance `dist` from its origin.
#[inline]
pub fn shock_strength(dist: f32, age: f32) -> f32 {
    let radius = age * SHOCK_SPEED;
    let width = SHOCK_WIDTH_BASE + age * SHOCK_WIDTH_GROWTH;
    let x = (dist - radius) / width;
    (-(x * x)).exp() * (-age * SHOCK_DECAY).exp()
}

/// Expanding rings. Intensities sum, so crossing wavefronts brighten.
pub fn shock_kernel(
    scaled: Vec2,
    cell_world: Vec2,
    shocks: &ShockRing,
    now: f32,
    aspect: f32,
) -> ShockInfluence {
    let mut out = ShockInfluence::default();
    for (_, shock) in shocks.live(now, SHOCK_MAX_AGE) {
        let origin = to_scaled(shock.pos, aspect);
        let strength = shock_strength(scaled.distance(origin), shock.age(now));
        out.offset += nudged_dir(cell_world - origin) * strength * SHOCK_STRENGTH;
        out.intensity += strength;
    }
    out
}

/// Everything computed for one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellField {
    pub cell: GridCell,
    /// Summed, clamped dot displacement in cell units.
    pub offset: Vec2,
    pub cursor: CursorInfluence,
    /// 1 at the cursor, 0 beyond `NEAR_RADIUS`.
    pub near: f32,
    pub trail_glow: f32,
    pub shock: f32,
    pub dot_mask: f32,
    pub color: Vec3,
}

pub fn composite_cell(uv: Vec2, snap: &FieldSnapshot) -> CellField {
    let aspect = snap.aspect();
    let theme = snap.theme.weight();
    let scaled = to_scaled(uv, aspect);
    let cell = grid_cell(scaled);
    let mouse = to_scaled(snap.mouse, aspect);

    let cursor = cursor_kernel(cell.world, mouse, snap.speed);
    let trail = trail_kernel(
        cell.world,
        &snap.trail,
        snap.time,
        aspect,
        speed_inflation(snap.speed),
    );
    let shock = shock_kernel(scaled, cell.world, &snap.shocks, snap.time, aspect);

    let offset = (cursor.offset + trail.offset + shock.offset)
        .clamp(Vec2::splat(-OFFSET_CLAMP), Vec2::splat(OFFSET_CLAMP));
    let d = cell.local.distance(offset);

    let near = inner_falloff(NEAR_RADIUS, cursor.dist);
    let radius = DOT_RADIUS + near * DOT_RADIUS_NEAR;
    let dot_mask = 1.0 - smoothstep(radius - DOT_SOFTNESS, radius + DOT_SOFTNESS, d);

    // Light mode only shows dots near activity.
    let visibility = mix(1.0, near + trail.glow * 0.8 + shock.intensity, theme).clamp(0.0, 1.0);
    let vis_mask = dot_mask * visibility;

    let bg = Vec3::splat(theme);
    let dot_color = Vec3::splat(mix(1.0, LIGHT_DOT_GREY, theme))
        * (DOT_BRIGHTNESS + near * DOT_BRIGHTNESS_NEAR);
    let warm = dot_color
        * mix3(
            Vec3::from(WARM_TINT_DARK),
            Vec3::from(WARM_TINT_LIGHT),
            theme,
        );
    let bottom = 1.0 - smoothstep(0.12, 0.5, snap.mouse.y);
    let lit = mix3(dot_color, warm, bottom.max(trail.glow * 0.25));

    let mut col = mix3(bg, lit, vis_mask);
    col += Vec3::from(TRAIL_TINT_DARK) * trail.glow * vis_mask * 0.5 * (1.0 - theme);
    col -= Vec3::from(TRAIL_TINT_LIGHT) * trail.glow * vis_mask * 0.3 * theme;

    // Dark: peaks blow out to white. Light: peaks crush to black.
    let si = shock.intensity * dot_mask;
    let flash = mix3(Vec3::from(SHOCK_TINT_DARK), Vec3::ONE, si.min(1.0)) * si * SHOCK_GAIN;
    col += flash * (1.0 - theme);
    col -= Vec3::splat(si * SHOCK_GAIN) * theme;

    let grain = (hash21(uv * 1200.0 + Vec2::splat(snap.time * 4.0)) - 0.5) * GRAIN_AMOUNT;

    col = mix3(bg, col, snap.touch_visibility);
    col += ambient_gradient(uv, snap.time) * (1.0 - theme);

    CellField {
        cell,
        offset,
        cursor,
        near,
        trail_glow: trail.glow,
        shock: shock.intensity,
        dot_mask,
        color: col + Vec3::splat(grain),
    }
}

/// Slowly wandering warm glow, faded in over the first second.
fn ambient_gradient(uv: Vec2, time: f32) -> Vec3 {
    let fade_in = smoothstep(0.0, 1.2, time);
    let slow = time * AMBIENT_DRIFT_RATE;
    let center = Vec2::new(
        0.5 + (slow).sin() * 0.28 + (slow * 0.61).sin() * 0.14,
        0.5 + (slow * 0.77).cos() * 0.28 + (slow * 1.13).cos() * 0.12,
    );
    let r = uv.distance(center);
    let g = (1.0 - smoothstep(0.1, 0.85, r)) * fade_in;
    Vec3::from(AMBIENT_TINT) * g
}

/// Final pixel color, with the 5x5 focus blur inside the hovered pill.
pub fn shade(uv: Vec2, snap: &FieldSnapshot) -> Vec3 {
    if !snap.focus.contains(uv) {
        return composite_cell(uv, snap).color;
    }
    let mut sum = Vec3::ZERO;
    let mut taps = 0.0;
    for dy in -FOCUS_BLUR_TAPS..=FOCUS_BLUR_TAPS {
        for dx in -FOCUS_BLUR_TAPS..=FOCUS_BLUR_TAPS {
            let o = Vec2::new(dx as f32, dy as f32) * FOCUS_BLUR_STEP;
            sum += composite_cell(uv + o, snap).color;
            taps += 1.0;
        }
    }
    sum / taps
}
