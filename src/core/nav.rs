#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// Sections in page order; ids double as the section element ids.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "contact", label: "Contact" },
];

pub fn find_item(id: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.id == id)
}

/// Highlighted navigation entry and mobile menu state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    active: &'static str,
    menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: NAV_ITEMS[0].id,
            menu_open: false,
        }
    }
}

impl NavState {
    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Apply a visibility notification. Returns true when the highlight moved.
    pub fn on_section_visible(&mut self, id: &str, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match find_item(id) {
            Some(item) if item.id != self.active => {
                self.active = item.id;
                true
            }
            _ => false,
        }
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// A navigation entry was chosen; the mobile menu collapses.
    pub fn select(&mut self, id: &str) -> Option<&'static NavItem> {
        self.menu_open = false;
        find_item(id)
    }
}
