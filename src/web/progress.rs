use super::dom::{self, Listener};
use crate::core::{progress_width, scroll_progress};
use crate::markup::PROGRESS_BAR_ID;
use web_sys as web;

fn current_progress(window: &web::Window, document: &web::Document) -> f64 {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let doc_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(scroll_y, doc_height, viewport)
}

/// Keep the progress bar width in step with the scroll position.
pub fn wire_scroll_progress(document: &web::Document) -> Option<Listener> {
    let bar: web::HtmlElement = dom::element_by_id(document, PROGRESS_BAR_ID)?;
    let window = web::window()?;
    let document = document.clone();
    let update = move || {
        let pct = current_progress(&window, &document);
        _ = bar.style().set_property("width", &progress_width(pct));
    };
    update();
    Listener::on_window("scroll", move |_| update())
}
