//! The per-layer frame loop: an owned requestAnimationFrame chain with
//! deterministic cancellation.

use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::events::{self, ListenerHandle, PointerState};
use crate::render::CanvasSurface;
use dotfield_core::{Field, Viewport};

/// Everything one layer needs per frame. The frame callback is the sole
/// reader and mutator of field state; pointer and resize handlers only
/// write their own cells, consumed here at the start of each frame.
pub struct FrameContext {
    pub field: Field,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_instant).as_secs_f64() * 1000.0;
        self.last_instant = now;

        let viewport = Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32);
        let pointer = events::pointer_canvas_px(&self.pointer.borrow(), &self.canvas);

        self.field.step(dt_ms, pointer, viewport);
        self.field.draw(&mut self.surface, pointer, viewport);
    }
}

/// Owned handle to a running frame loop.
///
/// `stop` is exact-once: it cancels the pending animation frame, flips the
/// alive flag so an already-dispatched tick returns without touching
/// state, and drops the listeners. Dropping the handle stops the loop.
pub struct FieldLoop {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    listeners: Vec<ListenerHandle>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FieldLoop {
    pub fn start(mut ctx: FrameContext, listeners: Vec<ListenerHandle>) -> anyhow::Result<Self> {
        let alive = Rc::new(Cell::new(true));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let alive_tick = alive.clone();
        let raf_tick = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !alive_tick.get() {
                return;
            }
            ctx.frame();
            if !alive_tick.get() {
                return;
            }
            if let Some(w) = web::window() {
                if let Ok(id) = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    raf_tick.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let id = window
            .request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("requestAnimationFrame failed: {:?}", e))?;
        raf_id.set(Some(id));

        Ok(Self {
            alive,
            raf_id,
            listeners,
            _tick: tick,
        })
    }

    pub fn stop(&mut self) {
        if !self.alive.replace(false) {
            return;
        }
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        self.listeners.clear();
        log::info!("field loop stopped");
    }
}

impl Drop for FieldLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
