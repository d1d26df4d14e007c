use crate::core::content::{hero_bubbles, SKILLS, STATS};
use crate::core::{ContactForm, GalleryState, PageConfig, PageState, NAV_ITEMS};
use crate::markup;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod contact;
mod dom;
mod frame;
mod gallery;
mod nav;
mod pointer;
mod progress;
mod theme;

use canvas::ParticleLayer;
use dom::Listener;

const APP_ROOT_ID: &str = "app";

/// Everything the mounted page holds on to. Dropping it cancels the frame
/// loops and the submit timer and removes every listener and observer.
struct Page {
    _background: Option<ParticleLayer>,
    _contact_particles: Option<ParticleLayer>,
    _progress: Option<Listener>,
    _theme: Option<Listener>,
    _nav: nav::NavWiring,
    _gallery: gallery::GalleryWiring,
    _contact: contact::ContactWiring,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

fn page_markup(config: &PageConfig, state: &PageState, gallery: &GalleryState, form: &ContactForm) -> String {
    let mut html = String::new();
    html.push_str(&markup::progress_bar());
    html.push_str(&markup::theme_toggle(state.theme));
    html.push_str(&markup::canvas(markup::BACKGROUND_CANVAS_ID));
    html.push_str(&markup::header(&NAV_ITEMS, &state.nav));
    html.push_str("<main>");
    html.push_str(&markup::hero(&config.profile, &hero_bubbles(config.seed)));
    html.push_str(&markup::about(&STATS));
    html.push_str(&markup::skills(&SKILLS));
    html.push_str(&markup::projects_section(gallery.tags(), &gallery.visible()));
    html.push_str(&markup::contact_section(form));
    html.push_str("</main>");
    html
}

fn mount_particles(document: &web::Document, id: &str, config: &PageConfig, seed: u64) -> Option<ParticleLayer> {
    match dom::element_by_id::<web::HtmlCanvasElement>(document, id) {
        Some(canvas) => Some(ParticleLayer::mount(canvas, config.particles, seed)),
        None => {
            log::warn!("[page] missing canvas #{}", id);
            None
        }
    }
}

fn mount(config: PageConfig) -> anyhow::Result<Page> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let root = document
        .get_element_by_id(APP_ROOT_ID)
        .ok_or_else(|| anyhow!("missing #{}", APP_ROOT_ID))?;

    let state = Rc::new(RefCell::new(PageState::from_config(&config)));
    let gallery_state = Rc::new(RefCell::new(GalleryState::new(config.catalog.clone())));
    let form_state = Rc::new(RefCell::new(ContactForm::default()));

    root.set_inner_html(&page_markup(
        &config,
        &state.borrow(),
        &gallery_state.borrow(),
        &form_state.borrow(),
    ));
    theme::apply(&document, state.borrow().theme);

    let background = mount_particles(&document, markup::BACKGROUND_CANVAS_ID, &config, config.seed);
    let contact_particles = mount_particles(
        &document,
        markup::CONTACT_CANVAS_ID,
        &config,
        config.seed.wrapping_add(1),
    );

    Ok(Page {
        _background: background,
        _contact_particles: contact_particles,
        _progress: progress::wire_scroll_progress(&document),
        _theme: theme::wire_theme_toggle(&document, state.clone()),
        _nav: nav::wire_navigation(
            &document,
            state,
            config.header_offset_px,
            config.section_root_margin,
        ),
        _gallery: gallery::wire_gallery(&document, gallery_state),
        _contact: contact::wire_contact_form(&document, form_state, config.submit_delay_ms),
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    let config = PageConfig::default().with_seed(rand::random());
    match mount(config) {
        Ok(page) => {
            PAGE.with(|slot| *slot.borrow_mut() = Some(page));
            log::info!("[page] mounted");
        }
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Unmount the page: stop animation, cancel timers, drop every subscription.
#[wasm_bindgen]
pub fn teardown() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if page.is_some() {
        drop(page);
        log::info!("[page] torn down");
    }
}
