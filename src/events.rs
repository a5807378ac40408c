//! Event wiring: pointer and resize streams feeding the frame loop.
//!
//! Listeners are owned. A [`ListenerHandle`] keeps its closure alive and
//! removes the registration on drop, so unmounting a layer releases every
//! callback instead of forgetting it into the JS heap.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use dotfield_core::offscreen_pointer;

/// Last observed pointer position in client (CSS px) coordinates.
/// Holds the off-canvas sentinel until the first pointer event arrives.
pub struct PointerState {
    pub client: Vec2,
    pub seen: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            client: offscreen_pointer(),
            seen: false,
        }
    }
}

/// Convert the shared pointer position to canvas backing-pixel
/// coordinates for this layer's canvas.
#[inline]
pub fn pointer_canvas_px(state: &PointerState, canvas: &web::HtmlCanvasElement) -> Vec2 {
    if !state.seen {
        return offscreen_pointer();
    }
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return offscreen_pointer();
    }
    let x_css = state.client.x - rect.left() as f32;
    let y_css = state.client.y - rect.top() as f32;
    Vec2::new(
        (x_css / w) * canvas.width() as f32,
        (y_css / h) * canvas.height() as f32,
    )
}

/// A registered event listener that deregisters itself on drop.
pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    function: js_sys::Function,
    _closure: Box<dyn std::any::Any>,
}

impl ListenerHandle {
    pub fn add<F: ?Sized + 'static>(
        target: web::EventTarget,
        event: &'static str,
        closure: Closure<F>,
    ) -> anyhow::Result<Self> {
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("failed to add {event} listener: {:?}", e))?;
        let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        Ok(Self {
            target,
            event,
            function,
            _closure: Box::new(closure),
        })
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.function);
    }
}

/// Track the global pointer on window `pointermove`. The handler only
/// writes the shared position; it never triggers a redraw of its own.
pub fn wire_pointer_move(pointer: Rc<RefCell<PointerState>>) -> anyhow::Result<ListenerHandle> {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut p = pointer.borrow_mut();
        p.client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        p.seen = true;
    }) as Box<dyn FnMut(_)>);
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    ListenerHandle::add(window.into(), "pointermove", closure)
}

/// Re-sync the canvas backing size on window resize. The handler only
/// updates dimensions; the next frame picks them up.
pub fn wire_resize(canvas: web::HtmlCanvasElement) -> anyhow::Result<ListenerHandle> {
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    ListenerHandle::add(window.into(), "resize", closure)
}
