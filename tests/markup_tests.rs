// Host-side tests for the section HTML builders.

use portfolio_web::core::content::{hero_bubbles, Profile, Skill, SKILLS, STATS};
use portfolio_web::core::constants::HERO_BUBBLE_COUNT;
use portfolio_web::core::{default_catalog, ContactForm, Field, NavState, NAV_ITEMS};
use portfolio_web::markup::*;

#[test]
fn escape_neutralises_markup() {
    assert_eq!(
        escape("<a href=\"x\">Tom & 'Jerry'</a>"),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape("plain"), "plain");
}

#[test]
fn header_marks_active_entry_and_hides_mobile_menu() {
    let mut nav = NavState::default();
    nav.on_section_visible("skills", true);
    let html = header(&NAV_ITEMS, &nav);
    assert!(html.contains("class='nav-link active' data-nav='skills'"));
    assert!(html.contains("class='nav-link' data-nav='home'"));
    assert!(html.contains("class='mobile-menu hidden'"));
    assert_eq!(html.matches("data-nav=").count(), NAV_ITEMS.len() * 2);
}

#[test]
fn skill_card_fills_stars_up_to_level() {
    let skill = Skill {
        title: "Rust",
        level: 3,
        description: "Systems & web",
    };
    let html = skill_card(&skill);
    assert_eq!(html.matches("star filled").count(), 3);
    assert_eq!(html.matches("class='star'").count(), 2);
    assert!(html.contains("Systems &amp; web"));
}

#[test]
fn project_grid_highlights_active_card() {
    let catalog = default_catalog();
    let refs: Vec<_> = catalog.iter().collect();
    let html = project_grid(&refs, 1);
    assert_eq!(html.matches("data-card=").count(), 3);
    assert!(html.contains("project-card active tilt-right' data-card='1'"));
    assert!(html.contains("project-card inactive tilt-left' data-card='0'"));
}

#[test]
fn empty_project_grid_says_so() {
    assert!(project_grid(&[], 0).contains("No projects match"));
}

#[test]
fn filter_buttons_reflect_active_tags() {
    let html = filter_buttons(&["React", "Go"], |t| t == "Go");
    assert!(html.contains("class='tag-filter' data-tag='React'"));
    assert!(html.contains("class='tag-filter active' data-tag='Go'"));
}

#[test]
fn contact_section_reflects_form_state() {
    let mut form = ContactForm::default();
    form.set_field(Field::Name, "<Ada>");
    let idle = contact_section(&form);
    assert!(idle.contains("value='&lt;Ada&gt;'"));
    assert!(idle.contains("Send Message"));
    assert!(!idle.contains(" disabled"));

    form.begin_submit().expect("submit");
    let pending = contact_section(&form);
    assert!(pending.contains("type='submit' disabled"));
    assert!(pending.contains("Sending..."));
    assert!(pending.contains(CONTACT_CANVAS_ID));
}

#[test]
fn static_sections_render_content() {
    let profile = Profile::default();
    let bubbles = hero_bubbles(1);
    assert_eq!(bubbles.len(), HERO_BUBBLE_COUNT);
    let html = hero(&profile, &bubbles);
    assert!(html.starts_with("<section id='home'"));
    assert_eq!(html.matches("class='bubble'").count(), HERO_BUBBLE_COUNT);
    assert!(html.contains("mailto:your-email@example.com"));

    let html = about(&STATS);
    assert!(html.contains("Cups of Coffee"));
    assert!(html.contains("1000+"));

    let html = skills(&SKILLS);
    assert_eq!(html.matches("skill-card").count(), SKILLS.len());
}

#[test]
fn hero_bubbles_are_deterministic_and_in_range() {
    let a = hero_bubbles(5);
    assert_eq!(a, hero_bubbles(5));
    for b in &a {
        assert!((0.0..=100.0).contains(&b.top_pct));
        assert!((0.0..=100.0).contains(&b.left_pct));
        assert!(b.size_px >= 5.0 && b.size_px <= 15.0);
        assert!(b.float_secs >= 5.0 && b.float_secs <= 15.0);
    }
}
