use dotfield_core::{Theme, Viewport};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Device pixel ratio is clamped so high-density screens do not pay for
/// invisible pixels.
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 1.5;

pub const NO_SHOCKWAVE_SELECTOR: &str = "[data-no-shockwave]";
pub const FOCUS_PILL_SELECTOR: &str = "[data-focus-pill]";
pub const THEME_ATTR: &str = "data-theme";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

#[inline]
pub fn clamped_dpr() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .clamp(DPR_MIN, DPR_MAX)
}

/// Match the canvas backing store to its CSS size times the clamped DPR.
/// Returns the new backing size in device pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let dpr = clamped_dpr();
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() != w_px || canvas.height() != h_px {
        canvas.set_width(w_px);
        canvas.set_height(h_px);
        log::debug!("[dom] canvas backing {}x{} (dpr {:.2})", w_px, h_px, dpr);
    }
    Vec2::new(w_px as f32, h_px as f32)
}

/// Browser viewport in CSS pixels; pointer coordinates live in this space.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    Viewport::new(width as f32, height as f32)
}

/// Raw `data-theme` attribute on `<html>`, if any.
pub fn theme_attr() -> Option<String> {
    window_document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.get_attribute(THEME_ATTR))
}

pub fn parse_theme_attr(raw: &str) -> Option<Theme> {
    match raw.parse::<Theme>() {
        Ok(t) => Some(t),
        Err(e) => {
            log::warn!("[dom] ignoring {}: {}", THEME_ATTR, e);
            None
        }
    }
}

/// True when `target` is (inside) an element matching `selector`.
pub fn within(target: Option<web::EventTarget>, selector: &str) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}
