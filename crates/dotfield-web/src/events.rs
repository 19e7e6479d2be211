use crate::dom;
use dotfield_core::{FieldEngine, PointerKind};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Removes itself from its target on drop.
pub struct ListenerGuard {
    target: web::EventTarget,
    kind: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.kind,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

#[derive(Clone, Copy, Default)]
pub struct ListenOptions {
    pub capture: bool,
    pub passive: bool,
}

const PASSIVE: ListenOptions = ListenOptions {
    capture: false,
    passive: true,
};
const CAPTURE_PASSIVE: ListenOptions = ListenOptions {
    capture: true,
    passive: true,
};

/// Register `handler` for `kind` events of concrete type `E` on `target`.
pub fn listen<E, F>(
    target: &web::EventTarget,
    kind: &'static str,
    opts: ListenOptions,
    mut handler: F,
) -> anyhow::Result<ListenerGuard>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);

    let options = web::AddEventListenerOptions::new();
    options.set_capture(opts.capture);
    options.set_passive(opts.passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| anyhow::anyhow!("add {} listener failed: {:?}", kind, e))?;
    Ok(ListenerGuard {
        target: target.clone(),
        kind,
        capture: opts.capture,
        closure,
    })
}

pub struct InputWiring {
    pub engine: Rc<RefCell<FieldEngine>>,
    pub canvas: web::HtmlCanvasElement,
}

/// Wire every listener the field needs. Dropping the returned guards
/// detaches them all.
pub fn wire_input_handlers(w: &InputWiring) -> anyhow::Result<Vec<ListenerGuard>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let win_t: &web::EventTarget = window.as_ref();
    let doc_t: &web::EventTarget = document.as_ref();
    let mut guards = Vec::with_capacity(10);

    // Pointer position. Capture on the document so overlays with their own
    // handlers still move the field.
    for kind in ["pointermove", "pointerover", "pointerdown"] {
        let engine = w.engine.clone();
        guards.push(listen(
            doc_t,
            kind,
            CAPTURE_PASSIVE,
            move |ev: web::PointerEvent| {
                engine.borrow_mut().on_pointer_move(
                    ev.client_x() as f32,
                    ev.client_y() as f32,
                    PointerKind::from_dom(&ev.pointer_type()),
                );
            },
        )?);
    }

    // Touch contact count.
    {
        let engine = w.engine.clone();
        guards.push(listen(win_t, "pointerdown", PASSIVE, move |ev: web::PointerEvent| {
            engine
                .borrow_mut()
                .on_pointer_down(PointerKind::from_dom(&ev.pointer_type()));
        })?);
    }
    for kind in ["pointerup", "pointercancel"] {
        let engine = w.engine.clone();
        guards.push(listen(win_t, kind, PASSIVE, move |ev: web::PointerEvent| {
            engine
                .borrow_mut()
                .on_pointer_up(PointerKind::from_dom(&ev.pointer_type()));
        })?);
    }

    // Click / tap -> shockwave.
    {
        let engine = w.engine.clone();
        guards.push(listen(win_t, "click", PASSIVE, move |ev: web::MouseEvent| {
            let suppressed = dom::within(ev.target(), dom::NO_SHOCKWAVE_SELECTOR);
            let slot =
                engine
                    .borrow_mut()
                    .on_click(ev.client_x() as f32, ev.client_y() as f32, suppressed);
            if slot.is_none() {
                log::debug!("[events] click suppressed");
            }
        })?);
    }

    // Focus pill hover, delegated from the document.
    {
        let engine = w.engine.clone();
        guards.push(listen(doc_t, "pointerover", PASSIVE, move |ev: web::PointerEvent| {
            if dom::within(ev.target(), dom::FOCUS_PILL_SELECTOR) {
                engine.borrow_mut().set_focus_hovered(true);
            }
        })?);
    }
    {
        let engine = w.engine.clone();
        guards.push(listen(doc_t, "pointerout", PASSIVE, move |ev: web::PointerEvent| {
            let left_pill = dom::within(ev.target(), dom::FOCUS_PILL_SELECTOR)
                && !dom::within(ev.related_target(), dom::FOCUS_PILL_SELECTOR);
            if left_pill {
                engine.borrow_mut().set_focus_hovered(false);
            }
        })?);
    }

    // Resize keeps the backing store and the pointer space in step.
    {
        let engine = w.engine.clone();
        let canvas = w.canvas.clone();
        guards.push(listen(win_t, "resize", PASSIVE, move |_: web::Event| {
            apply_resize(&engine, &canvas);
        })?);
    }

    log::info!("[events] {} listeners attached", guards.len());
    Ok(guards)
}

pub fn apply_resize(engine: &Rc<RefCell<FieldEngine>>, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let backing = dom::sync_canvas_backing_size(canvas);
    engine.borrow_mut().resize(dom::viewport(), backing);
    backing
}
