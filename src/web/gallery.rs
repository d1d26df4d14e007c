use super::dom::{self, Listener};
use super::pointer;
use crate::core::GalleryState;
use crate::markup::{
    filter_buttons, project_grid, PROJECT_CURSOR_ID, PROJECT_FILTERS_ID, PROJECT_GRID_ID,
    PROJECT_SEARCH_ID,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const CURSOR_HOVER_TEXT: &str = "View";

/// Search box, tag buttons, card selection and the trailing cursor.
pub struct GalleryWiring {
    _listeners: Vec<Listener>,
}

fn render_filters(document: &web::Document, gallery: &GalleryState) {
    if let Some(el) = document.get_element_by_id(PROJECT_FILTERS_ID) {
        el.set_inner_html(&filter_buttons(gallery.tags(), |t| gallery.filter().is_active(t)));
    }
}

fn render_grid(document: &web::Document, gallery: &GalleryState) {
    if let Some(el) = document.get_element_by_id(PROJECT_GRID_ID) {
        el.set_inner_html(&project_grid(&gallery.visible(), gallery.active_card()));
    }
}

fn set_cursor_text(document: &web::Document, text: &str) {
    let Some(cursor) = document.get_element_by_id(PROJECT_CURSOR_ID) else {
        return;
    };
    _ = cursor.class_list().toggle_with_force("expanded", !text.is_empty());
    if let Ok(Some(label)) = cursor.query_selector("span") {
        label.set_text_content(Some(text));
    }
}

pub fn wire_gallery(document: &web::Document, state: Rc<RefCell<GalleryState>>) -> GalleryWiring {
    let mut listeners = Vec::new();

    {
        let doc = document.clone();
        let state = state.clone();
        listeners.extend(Listener::on_element(document, PROJECT_SEARCH_ID, "input", move |ev| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            else {
                return;
            };
            let mut gallery = state.borrow_mut();
            gallery.set_search(&input.value());
            render_grid(&doc, &gallery);
        }));
    }

    {
        let doc = document.clone();
        let state = state.clone();
        listeners.extend(Listener::on_element(document, PROJECT_FILTERS_ID, "click", move |ev| {
            let Some(tag) = dom::event_closest(&ev, "[data-tag]")
                .and_then(|el| el.get_attribute("data-tag"))
            else {
                return;
            };
            let mut gallery = state.borrow_mut();
            let active = gallery.toggle_tag(&tag);
            log::debug!("[gallery] tag {} {}", tag, if active { "on" } else { "off" });
            render_filters(&doc, &gallery);
            render_grid(&doc, &gallery);
        }));
    }

    {
        let doc = document.clone();
        let state = state.clone();
        listeners.extend(Listener::on_element(document, PROJECT_GRID_ID, "click", move |ev| {
            let Some(index) = dom::event_closest(&ev, "[data-card]")
                .and_then(|el| el.get_attribute("data-card"))
                .and_then(|s| s.parse::<usize>().ok())
            else {
                return;
            };
            let mut gallery = state.borrow_mut();
            if gallery.set_active(index) {
                render_grid(&doc, &gallery);
            }
        }));
    }

    {
        let doc = document.clone();
        listeners.extend(Listener::on_element(document, PROJECT_GRID_ID, "mouseover", move |ev| {
            if dom::event_closest(&ev, "[data-card]").is_some() {
                set_cursor_text(&doc, CURSOR_HOVER_TEXT);
            }
        }));
        let doc = document.clone();
        listeners.extend(Listener::on_element(document, PROJECT_GRID_ID, "mouseout", move |ev| {
            if dom::event_closest(&ev, "[data-card]").is_some() {
                set_cursor_text(&doc, "");
            }
        }));
    }

    if let Some(cursor) = dom::element_by_id::<web::HtmlElement>(document, PROJECT_CURSOR_ID) {
        listeners.extend(pointer::follow_pointer(cursor));
    }

    {
        let gallery = state.borrow();
        render_filters(document, &gallery);
        render_grid(document, &gallery);
        log::info!(
            "[gallery] {} projects, {} tags",
            gallery.visible().len(),
            gallery.tags().len()
        );
    }

    GalleryWiring {
        _listeners: listeners,
    }
}
