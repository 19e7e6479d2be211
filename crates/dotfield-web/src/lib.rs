#![cfg(target_arch = "wasm32")]
//! Browser host for the dot field: mounts on a `<canvas>`, forwards DOM
//! input into a [`FieldEngine`] and draws each frame with WebGPU.

mod dom;
mod events;
mod frame;
mod render;

use dotfield_core::{FieldEngine, Theme};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dotfield-web loaded");
    Ok(())
}

struct Mounted {
    engine: Rc<RefCell<FieldEngine>>,
    // Field order is drop order: stop the loop before detaching listeners.
    _frame: frame::FrameLoop,
    _listeners: Vec<events::ListenerGuard>,
}

/// One mounted field. Each instance owns its engine, listeners and frame
/// loop; nothing is shared between instances.
#[wasm_bindgen]
pub struct DotField {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl DotField {
    /// Attach to the canvas with id `canvas_id` and start rendering.
    pub async fn mount(canvas_id: String) -> Result<DotField, JsValue> {
        let mounted = mount_inner(&canvas_id).await.map_err(to_js)?;
        Ok(DotField {
            inner: Some(mounted),
        })
    }

    /// `"dark"` or `"light"`; takes effect on the next frame.
    pub fn set_theme(&self, theme: &str) -> Result<(), JsValue> {
        let theme: Theme = theme.parse().map_err(|e| to_js(anyhow::Error::new(e)))?;
        if let Some(m) = &self.inner {
            m.engine.borrow_mut().set_theme(theme);
        }
        Ok(())
    }

    pub fn set_focus_hovered(&self, hovered: bool) {
        if let Some(m) = &self.inner {
            m.engine.borrow_mut().set_focus_hovered(hovered);
        }
    }

    /// Stop the frame loop and detach every listener. Idempotent.
    pub fn unmount(&mut self) {
        if self.inner.take().is_some() {
            log::info!("dotfield unmounted");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.is_some()
    }
}

impl Drop for DotField {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn mount_inner(canvas_id: &str) -> anyhow::Result<Mounted> {
    let canvas = dom::canvas_by_id(canvas_id)?;
    let engine = Rc::new(RefCell::new(FieldEngine::new(dom::viewport())));
    let backing = events::apply_resize(&engine, &canvas);

    if let Some(theme) = dom::theme_attr().as_deref().and_then(dom::parse_theme_attr) {
        engine.borrow_mut().set_theme(theme);
    }

    // Avoid grabbing a 2D context here so WebGPU can acquire the canvas
    let gpu = render::GpuState::new(&canvas).await?;

    let listeners = events::wire_input_handlers(&events::InputWiring {
        engine: engine.clone(),
        canvas: canvas.clone(),
    })?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        engine.clone(),
        canvas,
        gpu,
    )));
    let frame = frame::FrameLoop::start(frame_ctx);

    log::info!(
        "dotfield mounted on #{} ({}x{} backing)",
        canvas_id,
        backing.x,
        backing.y
    );
    Ok(Mounted {
        engine,
        _frame: frame,
        _listeners: listeners,
    })
}

fn to_js(e: anyhow::Error) -> JsValue {
    log::error!("{:#}", e);
    JsValue::from_str(&format!("{:#}", e))
}
