use super::dom::Listener;
use crate::core::ParticleField;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in canvas pixels (the canvas buffer matches its CSS size).
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(x_css, y_css)
}

/// Feed window pointer moves into `field` as canvas-relative coordinates.
///
/// Listens on the window because the particle canvas does not take pointer events.
pub fn track_canvas_pointer(
    canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
) -> Option<Listener> {
    Listener::on_window("pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if !canvas.is_connected() {
            return;
        }
        let pos = pointer_canvas_px(ev, &canvas);
        field.borrow_mut().set_pointer(pos);
    })
}

/// Move `cursor` so it trails the pointer.
pub fn follow_pointer(cursor: web::HtmlElement) -> Option<Listener> {
    Listener::on_window("pointermove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let transform = format!("translate3d({}px, {}px, 0)", ev.client_x(), ev.client_y());
            _ = cursor.style().set_property("transform", &transform);
        }
    })
}
