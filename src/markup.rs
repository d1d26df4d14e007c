//! HTML builders for each page section.
//!
//! Everything here is plain string assembly so it can be exercised on the host;
//! the wasm side only injects the results and wires events by element id.

use crate::core::content::{Bubble, Profile, Skill, Stat, ABOUT_HEADLINE, ABOUT_TEXT};
use crate::core::{ContactForm, Field, NavItem, NavState, Project, Theme};
use std::fmt::Write;

// Element ids shared with the DOM wiring
pub const PROGRESS_BAR_ID: &str = "scroll-progress";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const BACKGROUND_CANVAS_ID: &str = "particle-canvas";
pub const CONTACT_CANVAS_ID: &str = "contact-canvas";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const PROJECT_SEARCH_ID: &str = "project-search";
pub const PROJECT_FILTERS_ID: &str = "project-filters";
pub const PROJECT_GRID_ID: &str = "project-grid";
pub const PROJECT_CURSOR_ID: &str = "project-cursor";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_NOTICE_ID: &str = "contact-notice";

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn progress_bar() -> String {
    format!("<div id='{PROGRESS_BAR_ID}' class='scroll-progress' style='width: 0%'></div>")
}

pub fn theme_toggle(theme: Theme) -> String {
    format!(
        "<button id='{THEME_TOGGLE_ID}' class='theme-toggle' aria-label='Toggle Theme'>{}</button>",
        theme.toggle_icon()
    )
}

pub fn canvas(id: &str) -> String {
    format!("<canvas id='{}' class='particle-canvas'></canvas>", escape(id))
}

fn nav_button(item: &NavItem, active: bool, class: &str) -> String {
    let state = if active { " active" } else { "" };
    format!(
        "<button class='{class}{state}' data-nav='{}'>{}</button>",
        item.id,
        escape(item.label)
    )
}

/// Fixed header with desktop links, the mobile toggle and the mobile menu.
pub fn header(items: &[NavItem], nav: &NavState) -> String {
    let mut html = String::from(
        "<header class='site-header'><nav class='nav'><div class='brand'>Portfolio</div><div class='nav-links'>",
    );
    for item in items {
        html.push_str(&nav_button(item, item.id == nav.active(), "nav-link"));
    }
    html.push_str("</div>");
    _ = write!(
        html,
        "<button id='{MENU_TOGGLE_ID}' class='menu-toggle'>{}</button></nav>",
        menu_icon(nav.menu_open())
    );
    let hidden = if nav.menu_open() { "" } else { " hidden" };
    _ = write!(html, "<div id='{MOBILE_MENU_ID}' class='mobile-menu{hidden}'>");
    for item in items {
        html.push_str(&nav_button(item, item.id == nav.active(), "mobile-link"));
    }
    html.push_str("</div></header>");
    html
}

pub fn menu_icon(open: bool) -> &'static str {
    if open {
        "✕"
    } else {
        "☰"
    }
}

const ABSTRACT_PROFILE_SVG: &str = "<svg viewBox='0 0 200 200' class='abstract-profile'>\
<defs><linearGradient id='gradient1' x1='0%' y1='0%' x2='100%' y2='100%'>\
<stop offset='0%' stop-color='#60A5FA'/><stop offset='100%' stop-color='#34D399'/></linearGradient>\
<linearGradient id='gradient2' x1='100%' y1='0%' x2='0%' y2='100%'>\
<stop offset='0%' stop-color='#818CF8'/><stop offset='100%' stop-color='#EC4899'/></linearGradient></defs>\
<circle cx='100' cy='100' r='80' fill='url(#gradient1)' opacity='0.3'>\
<animate attributeName='r' values='80;85;80' dur='3s' repeatCount='indefinite'/></circle>\
<path d='M100,30 C150,30 150,170 100,170 C50,170 50,30 100,30' fill='url(#gradient2)' opacity='0.5'>\
<animate attributeName='d' values='M100,30 C150,30 150,170 100,170 C50,170 50,30 100,30;\
M100,40 C140,40 140,160 100,160 C60,160 60,40 100,40;\
M100,30 C150,30 150,170 100,170 C50,170 50,30 100,30' dur='5s' repeatCount='indefinite'/></path>\
<circle cx='100' cy='100' r='60' fill='none' stroke='white' stroke-width='2' opacity='0.8'>\
<animate attributeName='r' values='60;65;60' dur='4s' repeatCount='indefinite'/></circle></svg>";

fn bubble(b: &Bubble) -> String {
    format!(
        "<div class='bubble' style='top: {:.1}%; left: {:.1}%; width: {:.1}px; height: {:.1}px; \
background: rgba({}, {}, 255, 0.2); animation: float {:.1}s linear infinite'></div>",
        b.top_pct, b.left_pct, b.size_px, b.size_px, b.red, b.green, b.float_secs
    )
}

pub fn hero(profile: &Profile, bubbles: &[Bubble]) -> String {
    let mut html = String::from("<section id='home' class='hero'><div class='hero-backdrop'>");
    for b in bubbles {
        html.push_str(&bubble(b));
    }
    html.push_str("</div><div class='hero-content'><div class='profile'>");
    html.push_str(ABSTRACT_PROFILE_SVG);
    _ = write!(
        html,
        "<div class='profile-ring'></div><div class='profile-photo'><img src='{}' alt='{}'/></div></div>",
        escape(profile.image),
        escape(profile.name)
    );
    _ = write!(
        html,
        "<h1>{}</h1><p class='tagline'>{}</p>",
        escape(profile.name),
        escape(profile.tagline)
    );
    _ = write!(
        html,
        "<div class='socials'><a href='{}' target='_blank'>GitHub</a><a href='{}' target='_blank'>LinkedIn</a>\
<a href='mailto:{}'>Email</a></div>",
        escape(profile.github),
        escape(profile.linkedin),
        escape(profile.email)
    );
    html.push_str("<a class='scroll-down' href='#about'>⌄</a></div></section>");
    html
}

fn section_heading(title: &str) -> String {
    format!(
        "<div class='section-heading'><h2><span class='gradient-text'>{}</span></h2><div class='rule'></div></div>",
        escape(title)
    )
}

pub fn about(stats: &[Stat]) -> String {
    let mut html = String::from("<section id='about' class='section'>");
    html.push_str(&section_heading("About Me"));
    _ = write!(
        html,
        "<div class='about-grid'><div class='about-text'><h3>{}</h3><p>{}</p>\
<button class='primary'>Download Resume</button></div><div class='stats'>",
        escape(ABOUT_HEADLINE),
        escape(ABOUT_TEXT)
    );
    for stat in stats {
        _ = write!(
            html,
            "<div class='stat'><div class='stat-value'>{}</div><div class='stat-label'>{}</div></div>",
            escape(stat.value),
            escape(stat.label)
        );
    }
    html.push_str("</div></div></section>");
    html
}

pub fn skill_card(skill: &Skill) -> String {
    let stars: String = skill
        .stars()
        .iter()
        .map(|filled| {
            if *filled {
                "<span class='star filled'>★</span>"
            } else {
                "<span class='star'>☆</span>"
            }
        })
        .collect();
    format!(
        "<div class='skill-card'><h3>{}</h3><div class='stars'>{}</div><p>{}</p></div>",
        escape(skill.title),
        stars,
        escape(skill.description)
    )
}

pub fn skills(skills: &[Skill]) -> String {
    let mut html = String::from("<section id='skills' class='section'>");
    html.push_str(&section_heading("Skills & Expertise"));
    html.push_str("<div class='skills-grid'>");
    for s in skills {
        html.push_str(&skill_card(s));
    }
    html.push_str("</div></section>");
    html
}

/// Tag filter buttons; active tags are highlighted.
pub fn filter_buttons(tags: &[&str], is_active: impl Fn(&str) -> bool) -> String {
    let mut html = String::new();
    for tag in tags {
        let state = if is_active(tag) { " active" } else { "" };
        _ = write!(
            html,
            "<button class='tag-filter{state}' data-tag='{}'>{}</button>",
            escape(tag),
            escape(tag)
        );
    }
    html
}

pub fn project_card(project: &Project, index: usize, active: bool) -> String {
    let state = if active { "active" } else { "inactive" };
    let side = if index % 2 == 0 { "left" } else { "right" };
    let mut html = format!(
        "<div class='project-card {state} tilt-{side}' data-card='{index}'><div class='card-media'><img src='{}' alt='{}'/>\
<div class='card-overlay'><div class='card-tags'>",
        escape(project.image),
        escape(project.title)
    );
    for tag in &project.tags {
        _ = write!(html, "<span class='tag'>{}</span>", escape(tag));
    }
    _ = write!(
        html,
        "</div><h3>{}</h3><p>{}</p><div class='card-links'><a href='{}'>Code</a><a href='{}'>Live</a></div>\
</div></div></div>",
        escape(project.title),
        escape(project.description),
        escape(project.repo_link),
        escape(project.live_link)
    );
    html
}

/// Cards for the filtered projects; `active` indexes into `projects`.
pub fn project_grid(projects: &[&Project], active: usize) -> String {
    if projects.is_empty() {
        return "<p class='empty'>No projects match the current filters.</p>".to_string();
    }
    projects
        .iter()
        .enumerate()
        .map(|(i, p)| project_card(p, i, i == active))
        .collect()
}

pub fn projects_section(tags: &[&str], projects: &[&Project]) -> String {
    let mut html = String::from("<section id='projects' class='section projects'>");
    _ = write!(
        html,
        "<div id='{PROJECT_CURSOR_ID}' class='custom-cursor'><div class='cursor-dot'><span></span></div></div>"
    );
    html.push_str(&section_heading("Featured Projects"));
    _ = write!(
        html,
        "<div class='project-controls'><input id='{PROJECT_SEARCH_ID}' type='text' placeholder='Search Projects...'/>\
<div id='{PROJECT_FILTERS_ID}' class='filters'>{}</div></div>",
        filter_buttons(tags, |_| false)
    );
    _ = write!(
        html,
        "<div id='{PROJECT_GRID_ID}' class='project-grid'>{}</div></section>",
        project_grid(projects, 0)
    );
    html
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Your Name",
        Field::Email => "Email Address",
        Field::Message => "Your Message",
    }
}

pub fn contact_section(form: &ContactForm) -> String {
    let mut html = String::from("<section id='contact' class='section contact'>");
    html.push_str(&canvas(CONTACT_CANVAS_ID));
    html.push_str(&section_heading("Get In Touch"));
    _ = write!(html, "<div class='contact-grid'><form id='{CONTACT_FORM_ID}'>");
    for field in Field::ALL {
        let value = escape(form.field(field));
        let label = field_label(field);
        let id = field.element_id();
        let control = match field {
            Field::Message => format!("<textarea id='{id}' placeholder='{label}'>{value}</textarea>"),
            Field::Email => {
                format!("<input id='{id}' type='email' placeholder='{label}' value='{value}'/>")
            }
            Field::Name => {
                format!("<input id='{id}' type='text' placeholder='{label}' value='{value}'/>")
            }
        };
        html.push_str(&control);
    }
    let disabled = if form.is_pending() { " disabled" } else { "" };
    _ = write!(
        html,
        "<button id='{CONTACT_SUBMIT_ID}' type='submit'{disabled}>{}</button>\
<p id='{CONTACT_NOTICE_ID}' class='notice'>{}</p></form>",
        form.button_label(),
        form.notice().map(|n| escape(&n)).unwrap_or_default()
    );
    html.push_str(
        "<div class='map'><img src='/api/placeholder/800/400' alt='Map'/><div class='map-marker'></div></div></div></section>",
    );
    html
}
