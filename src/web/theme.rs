use super::dom::Listener;
use crate::core::{PageState, Theme};
use crate::markup::THEME_TOGGLE_ID;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Reflect `theme` on `<body>` and on the toggle button.
pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(body) = document.body() {
        _ = body
            .class_list()
            .toggle_with_force(Theme::DARK_CLASS, theme.is_dark());
    }
    if let Some(btn) = document.get_element_by_id(THEME_TOGGLE_ID) {
        btn.set_text_content(Some(theme.toggle_icon()));
    }
}

pub fn wire_theme_toggle(document: &web::Document, state: Rc<RefCell<PageState>>) -> Option<Listener> {
    let doc = document.clone();
    Listener::on_element(document, THEME_TOGGLE_ID, "click", move |_| {
        let theme = state.borrow_mut().toggle_theme();
        apply(&doc, theme);
        log::info!("[theme] {}", theme.name());
    })
}
