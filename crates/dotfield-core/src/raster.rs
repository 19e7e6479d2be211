//! CPU rendering of a snapshot into an RGBA8 buffer.

use crate::compositor::shade;
use crate::error::{FieldError, FieldResult};
use crate::snapshot::FieldSnapshot;
use glam::{Vec2, Vec3};

/// Evaluate the field at every pixel centre. Row 0 is the top of the image.
pub fn render_rgba8(
    snap: &FieldSnapshot,
    width: u32,
    height: u32,
    out: &mut [u8],
) -> FieldResult<()> {
    if width == 0 || height == 0 {
        return Err(FieldError::EmptyViewport { width, height });
    }
    let expected = width as usize * height as usize * 4;
    if out.len() != expected {
        return Err(FieldError::BufferSize {
            expected,
            actual: out.len(),
        });
    }

    let w = width as f32;
    let h = height as f32;
    for (row, line) in out.chunks_exact_mut(width as usize * 4).enumerate() {
        let v = 1.0 - (row as f32 + 0.5) / h;
        for (col, px) in line.chunks_exact_mut(4).enumerate() {
            let u = (col as f32 + 0.5) / w;
            let rgb = to_rgb8(shade(Vec2::new(u, v), snap));
            px[..3].copy_from_slice(&rgb);
            px[3] = u8::MAX;
        }
    }
    Ok(())
}

/// Convenience wrapper that allocates the buffer.
pub fn render_frame(snap: &FieldSnapshot, width: u32, height: u32) -> FieldResult<Vec<u8>> {
    let mut buf = vec![0u8; width as usize * height as usize * 4];
    render_rgba8(snap, width, height, &mut buf)?;
    Ok(buf)
}

#[inline]
fn to_rgb8(c: Vec3) -> [u8; 3] {
    let c = c.clamp(Vec3::ZERO, Vec3::ONE) * 255.0 + Vec3::splat(0.5);
    [c.x as u8, c.y as u8, c.z as u8]
}
