use crate::dom;
use crate::render::GpuState;
use dotfield_core::{FieldEngine, FieldUniforms};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<FieldEngine>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState<'static>,
    pub started: Instant,
    /// Last `data-theme` value applied, so API calls are not overwritten
    /// every frame.
    pub seen_theme_attr: Option<String>,
}

impl FrameContext {
    pub fn new(
        engine: Rc<RefCell<FieldEngine>>,
        canvas: web::HtmlCanvasElement,
        gpu: GpuState<'static>,
    ) -> Self {
        Self {
            engine,
            canvas,
            gpu,
            started: Instant::now(),
            seen_theme_attr: None,
        }
    }

    pub fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        self.sync_theme_attr();

        let snap = self.engine.borrow_mut().tick(t);
        let uniforms = FieldUniforms::from_snapshot(&snap);

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        match self.gpu.render(&uniforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    fn sync_theme_attr(&mut self) {
        let attr = dom::theme_attr();
        if attr == self.seen_theme_attr {
            return;
        }
        if let Some(theme) = attr.as_deref().and_then(dom::parse_theme_attr) {
            log::info!("[frame] theme -> {}", theme);
            self.engine.borrow_mut().set_theme(theme);
        }
        self.seen_theme_attr = attr;
    }
}

/// A running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and releases the callback.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_ctx.borrow_mut().frame();
            handle_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));

        handle.set(request_frame(&tick));
        Self { handle, tick }
    }

    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure -> Rc -> closure cycle.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let guard = tick.borrow();
    let cb = guard.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
