use super::dom::{self, Listener};
use crate::core::{section_scroll_target, PageState};
use crate::markup::{menu_icon, MENU_TOGGLE_ID, MOBILE_MENU_ID};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Section tracking and navigation clicks. Disconnects the observer on drop.
pub struct NavWiring {
    observer: Option<web::IntersectionObserver>,
    _on_intersect: Option<ObserverCallback>,
    _clicks: Option<Listener>,
    _menu: Option<Listener>,
}

impl Drop for NavWiring {
    fn drop(&mut self) {
        if let Some(o) = &self.observer {
            o.disconnect();
        }
    }
}

fn for_each_element(document: &web::Document, selector: &str, mut f: impl FnMut(web::Element)) {
    let Ok(list) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            f(el);
        }
    }
}

/// Mark every nav entry pointing at `active` and clear the rest.
fn highlight(document: &web::Document, active: &str) {
    for_each_element(document, "[data-nav]", |el| {
        let is_active = el.get_attribute("data-nav").as_deref() == Some(active);
        _ = el.class_list().toggle_with_force("active", is_active);
    });
}

fn render_menu(document: &web::Document, open: bool) {
    if let Some(menu) = document.get_element_by_id(MOBILE_MENU_ID) {
        _ = menu.class_list().toggle_with_force("hidden", !open);
    }
    if let Some(btn) = document.get_element_by_id(MENU_TOGGLE_ID) {
        btn.set_text_content(Some(menu_icon(open)));
    }
}

/// Smooth-scroll so the section's top clears the fixed header.
pub fn scroll_to_section(document: &web::Document, section_id: &str, header_offset: f64) {
    let (Some(window), Some(el)) = (web::window(), document.get_element_by_id(section_id)) else {
        return;
    };
    let top = el.get_bounding_client_rect().top();
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let opts = web::ScrollToOptions::new();
    opts.set_top(section_scroll_target(top, page_y, header_offset));
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

fn observe_sections(
    document: &web::Document,
    state: Rc<RefCell<PageState>>,
    root_margin: &str,
) -> Option<(web::IntersectionObserver, ObserverCallback)> {
    let doc = document.clone();
    let on_intersect: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let id = entry.target().id();
                let moved = state
                    .borrow_mut()
                    .nav
                    .on_section_visible(&id, entry.is_intersecting());
                if moved {
                    highlight(&doc, &id);
                    log::debug!("[nav] active section {}", id);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_root_margin(root_margin);
    opts.set_threshold(&JsValue::from_f64(0.0));
    let observer = match web::IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &opts,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[nav] IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    for_each_element(document, "section", |section| observer.observe(&section));
    Some((observer, on_intersect))
}

pub fn wire_navigation(
    document: &web::Document,
    state: Rc<RefCell<PageState>>,
    header_offset: f64,
    root_margin: &str,
) -> NavWiring {
    let (observer, on_intersect) = match observe_sections(document, state.clone(), root_margin) {
        Some((o, cb)) => (Some(o), Some(cb)),
        None => (None, None),
    };

    let header = document.query_selector("header").ok().flatten();
    let clicks = header.and_then(|header| {
        let doc = document.clone();
        let state = state.clone();
        Listener::new(header.as_ref(), "click", move |ev| {
            let Some(target) = dom::event_closest(&ev, "[data-nav]") else {
                return;
            };
            let Some(id) = target.get_attribute("data-nav") else {
                return;
            };
            let selected = state.borrow_mut().nav.select(&id);
            render_menu(&doc, false);
            if let Some(item) = selected {
                scroll_to_section(&doc, item.id, header_offset);
            }
        })
    });

    let doc = document.clone();
    let menu = Listener::on_element(document, MENU_TOGGLE_ID, "click", move |ev| {
        ev.stop_propagation();
        let open = state.borrow_mut().nav.toggle_menu();
        render_menu(&doc, open);
    });

    NavWiring {
        observer,
        _on_intersect: on_intersect,
        _clicks: clicks,
        _menu: menu,
    }
}
