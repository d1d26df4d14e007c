// Host-side tests for scroll math, theme and navigation state.

use portfolio_web::core::{
    progress_width, scroll_progress, section_scroll_target, NavState, PageConfig, PageState,
    Theme, NAV_ITEMS,
};

#[test]
fn scroll_progress_spans_zero_to_hundred() {
    for (doc, view) in [(2000.0, 800.0), (801.0, 800.0), (10_000.0, 1.0)] {
        assert_eq!(scroll_progress(0.0, doc, view), 0.0);
        assert!((scroll_progress(doc - view, doc, view) - 100.0).abs() < 1e-9);
    }
    assert!((scroll_progress(600.0, 2000.0, 800.0) - 50.0).abs() < 1e-9);
}

#[test]
fn scroll_progress_handles_short_pages_and_overscroll() {
    assert_eq!(scroll_progress(0.0, 500.0, 800.0), 0.0);
    assert_eq!(scroll_progress(10.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress(-40.0, 2000.0, 800.0), 0.0);
    assert_eq!(scroll_progress(5000.0, 2000.0, 800.0), 100.0);
    assert_eq!(scroll_progress(f64::NAN, 2000.0, 800.0), 0.0);
}

#[test]
fn progress_width_is_a_css_percentage() {
    assert_eq!(progress_width(0.0), "0.00%");
    assert_eq!(progress_width(100.0), "100.00%");
}

#[test]
fn section_target_clears_header() {
    assert_eq!(section_scroll_target(300.0, 1200.0, 80.0), 1420.0);
    assert_eq!(section_scroll_target(-200.0, 1200.0, 80.0), 920.0);
}

#[test]
fn theme_toggles_between_light_and_dark() {
    let mut state = PageState::from_config(&PageConfig::default());
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.toggle_theme(), Theme::Dark);
    assert!(state.theme.is_dark());
    assert_eq!(state.toggle_theme(), Theme::Light);
    assert_ne!(Theme::Light.toggle_icon(), Theme::Dark.toggle_icon());
}

#[test]
fn visible_section_moves_highlight() {
    let mut nav = NavState::default();
    assert_eq!(nav.active(), "home");
    assert!(nav.on_section_visible("projects", true));
    assert_eq!(nav.active(), "projects");
    assert!(!nav.on_section_visible("projects", true));
}

#[test]
fn selecting_an_entry_collapses_mobile_menu() {
    let mut nav = NavState::default();
    assert!(nav.toggle_menu());
    assert!(nav.menu_open());
    let item = nav.select("contact").expect("contact is a nav entry");
    assert_eq!(item.label, "Contact");
    assert!(!nav.menu_open());
}

#[test]
fn nav_items_are_in_page_order() {
    let ids: Vec<&str> = NAV_ITEMS.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["home", "about", "projects", "skills", "contact"]);
}
