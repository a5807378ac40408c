#![cfg(target_arch = "wasm32")]
//! WASM embedding layer for the dotfield background.
//!
//! Mounts one field layer per canvas: the drift layer behind, the orbit
//! layer above. Layers are independent instances sharing nothing but the
//! window's pointer and resize event streams. Each mount returns an owned
//! handle; dropping or stopping it cancels the frame loop and removes the
//! listeners deterministically.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use dotfield_core::{DriftField, Field, OrbitField, Viewport};
use instant::Instant;

mod constants;
mod dom;
mod events;
mod frame;
mod render;

use constants::{DRIFT_CANVAS_ID, ORBIT_CANVAS_ID};

#[derive(Clone, Copy)]
enum LayerKind {
    Orbit,
    Drift,
}

thread_local! {
    // Layers mounted automatically at startup; owned here so they are
    // stoppable state, not a forgotten callback chain.
    static AUTO_MOUNTED: RefCell<Vec<frame::FieldLoop>> = RefCell::new(Vec::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dotfield-web starting");

    if let Err(e) = mount_default_layers() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Wire up any of the default canvases present in the host page. Pages
/// may carry either layer, both, or none.
fn mount_default_layers() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    for (id, kind) in [
        (DRIFT_CANVAS_ID, LayerKind::Drift),
        (ORBIT_CANVAS_ID, LayerKind::Orbit),
    ] {
        if document.get_element_by_id(id).is_none() {
            continue;
        }
        if let Some(layer) = mount_layer(id, kind)? {
            AUTO_MOUNTED.with(|m| m.borrow_mut().push(layer));
        }
    }
    Ok(())
}

/// Mount a field on the given canvas and start its frame loop.
///
/// Returns `Ok(None)` when the canvas cannot provide a 2D context: the
/// layer stays inert and the loop never starts. Listener registration
/// failure is an error; the layer cannot honor its contract without the
/// pointer and resize streams.
fn mount_layer(canvas_id: &str, kind: LayerKind) -> anyhow::Result<Option<frame::FieldLoop>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    dom::sync_canvas_backing_size(&canvas);

    let Some(surface) = render::CanvasSurface::from_canvas(&canvas) else {
        log::warn!("no 2d context on #{canvas_id}; field loop not started");
        return Ok(None);
    };

    let viewport = Viewport::new(canvas.width() as f32, canvas.height() as f32);
    let mut rng = StdRng::from_entropy();
    let field = match kind {
        LayerKind::Orbit => Field::Orbit(OrbitField::new(&mut rng)),
        LayerKind::Drift => Field::Drift(DriftField::new(viewport, &mut rng)),
    };

    let pointer = Rc::new(RefCell::new(events::PointerState::default()));
    let listeners = vec![
        events::wire_pointer_move(pointer.clone())?,
        events::wire_resize(canvas.clone())?,
    ];

    let ctx = frame::FrameContext {
        field,
        surface,
        canvas,
        pointer,
        last_instant: Instant::now(),
    };
    let field_loop = frame::FieldLoop::start(ctx, listeners)?;
    log::info!("mounted field layer on #{canvas_id}");
    Ok(Some(field_loop))
}

/// Owned handle to a mounted layer, exposed to the host page.
#[wasm_bindgen]
pub struct LayerHandle {
    field_loop: Option<frame::FieldLoop>,
}

#[wasm_bindgen]
impl LayerHandle {
    /// Stop the layer: cancel the pending frame and release the pointer
    /// and resize listeners. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut l) = self.field_loop.take() {
            l.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.field_loop.is_some()
    }
}

#[wasm_bindgen]
pub fn mount_orbit(canvas_id: &str) -> Result<LayerHandle, JsValue> {
    mount_handle(canvas_id, LayerKind::Orbit)
}

#[wasm_bindgen]
pub fn mount_drift(canvas_id: &str) -> Result<LayerHandle, JsValue> {
    mount_handle(canvas_id, LayerKind::Drift)
}

fn mount_handle(canvas_id: &str, kind: LayerKind) -> Result<LayerHandle, JsValue> {
    mount_layer(canvas_id, kind)
        .map(|field_loop| LayerHandle { field_loop })
        .map_err(|e| JsValue::from_str(&format!("{e:?}")))
}
