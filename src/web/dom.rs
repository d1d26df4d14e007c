use anyhow::anyhow;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Nearest ancestor of the event target (inclusive) matching `selector`.
pub fn event_closest(ev: &web::Event, selector: &str) -> Option<web::Element> {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

/// An event subscription that is removed again when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::error!("[dom] failed to listen for {}: {:?}", event, e);
                None
            }
        }
    }

    pub fn on_window(event: &'static str, handler: impl FnMut(web::Event) + 'static) -> Option<Self> {
        let window = web::window()?;
        Self::new(window.as_ref(), event, handler)
    }

    pub fn on_element(
        document: &web::Document,
        element_id: &str,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let el = document.get_element_by_id(element_id)?;
        Self::new(el.as_ref(), event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Match the canvas drawing buffer to its on-screen size and return that size.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width().max(1.0) as u32;
    let h = rect.height().max(1.0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    Vec2::new(w as f32, h as f32)
}

/// Resolve after `ms` milliseconds. The pending timeout id is published in
/// `pending` so an owner can cancel it; a cancelled sleep never resolves.
pub async fn sleep_ms(ms: i32, pending: Rc<Cell<Option<i32>>>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let mut scheduled: Result<i32, JsValue> = Err(JsValue::NULL);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    let id = scheduled.map_err(|e| anyhow!("setTimeout failed: {:?}", e))?;
    pending.set(Some(id));
    let waited = JsFuture::from(promise).await;
    pending.set(None);
    waited.map_err(|e| anyhow!("timer rejected: {:?}", e))?;
    Ok(())
}

/// Cancel a timeout published by `sleep_ms`, if one is pending.
pub fn cancel_pending(pending: &Cell<Option<i32>>) {
    if let (Some(id), Some(w)) = (pending.take(), web::window()) {
        w.clear_timeout_with_handle(id);
    }
}
