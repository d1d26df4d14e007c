use super::dom::{self, Listener};
use crate::core::{ContactForm, ContactMessage, Field, SubmitError, SubmitStatus};
use crate::markup::{CONTACT_FORM_ID, CONTACT_NOTICE_ID, CONTACT_SUBMIT_ID};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Form listeners plus the simulated delivery timer; cancels the timer on drop.
pub struct ContactWiring {
    pending_timer: Rc<Cell<Option<i32>>>,
    _listeners: Vec<Listener>,
}

impl Drop for ContactWiring {
    fn drop(&mut self) {
        dom::cancel_pending(&self.pending_timer);
    }
}

/// Stand-in for a real endpoint: waits `delay_ms` and reports success.
async fn deliver(
    message: ContactMessage,
    delay_ms: i32,
    pending: Rc<Cell<Option<i32>>>,
) -> Result<(), SubmitError> {
    log::info!(
        "[contact] sending {} chars from {} <{}>",
        message.message.len(),
        message.name,
        message.email
    );
    dom::sleep_ms(delay_ms, pending)
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))
}

fn read_control(el: &web::Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlTextAreaElement>().map(|t| t.value())
}

fn write_control(document: &web::Document, field: Field, value: &str) {
    let Some(el) = document.get_element_by_id(field.element_id()) else {
        return;
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Push the form state back into the DOM: field values, button and notice.
fn render(document: &web::Document, form: &ContactForm) {
    for field in Field::ALL {
        write_control(document, field, form.field(field));
    }
    if let Some(btn) = dom::element_by_id::<web::HtmlButtonElement>(document, CONTACT_SUBMIT_ID) {
        btn.set_disabled(form.is_pending());
        btn.set_text_content(Some(form.button_label()));
    }
    if let Some(notice) = document.get_element_by_id(CONTACT_NOTICE_ID) {
        notice.set_text_content(form.notice().as_deref());
    }
}

pub fn wire_contact_form(
    document: &web::Document,
    state: Rc<RefCell<ContactForm>>,
    delay_ms: i32,
) -> ContactWiring {
    let pending_timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let mut listeners = Vec::new();

    {
        let doc = document.clone();
        let state = state.clone();
        listeners.extend(Listener::on_element(document, CONTACT_FORM_ID, "input", move |ev| {
            let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
                return;
            };
            let (Some(field), Some(value)) = (Field::from_element_id(&el.id()), read_control(&el))
            else {
                return;
            };
            let mut form = state.borrow_mut();
            let had_notice = form.notice().is_some();
            form.set_field(field, &value);
            if had_notice {
                if let Some(notice) = doc.get_element_by_id(CONTACT_NOTICE_ID) {
                    notice.set_text_content(None);
                }
            }
        }));
    }

    {
        let doc = document.clone();
        let state = state.clone();
        let pending = pending_timer.clone();
        listeners.extend(Listener::on_element(document, CONTACT_FORM_ID, "submit", move |ev| {
            ev.prevent_default();
            let message = match state.borrow_mut().begin_submit() {
                Ok(m) => m,
                Err(e) => {
                    log::warn!("[contact] submit ignored: {}", e);
                    return;
                }
            };
            render(&doc, &state.borrow());
            log::info!("[contact] pending");

            let doc = doc.clone();
            let state = state.clone();
            let pending = pending.clone();
            spawn_local(async move {
                let outcome = deliver(message, delay_ms, pending).await;
                let mut form = state.borrow_mut();
                if let Err(e) = form.finish_submit(outcome) {
                    log::error!("[contact] {}", e);
                    return;
                }
                match form.status() {
                    SubmitStatus::Error(reason) => {
                        log::warn!("[contact] failed: {}", reason)
                    }
                    status => log::info!("[contact] {:?}", status),
                }
                render(&doc, &form);
            });
        }));
    }

    render(document, &state.borrow());

    ContactWiring {
        pending_timer,
        _listeners: listeners,
    }
}
