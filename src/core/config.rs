use crate::core::catalog::{default_catalog, Project};
use crate::core::constants::*;
use crate::core::content::Profile;
use crate::core::nav::NavState;
use crate::core::particles::ParticleConfig;
use crate::core::theme::Theme;

/// Everything the page is built from, created once at start-up and handed
/// down to each section by reference.
#[derive(Clone, Debug)]
pub struct PageConfig {
    pub initial_theme: Theme,
    pub particles: ParticleConfig,
    pub header_offset_px: f64,
    pub section_root_margin: &'static str,
    pub submit_delay_ms: i32,
    pub profile: Profile,
    pub catalog: Vec<Project>,
    pub seed: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            initial_theme: Theme::Light,
            particles: ParticleConfig::default(),
            header_offset_px: HEADER_OFFSET_PX,
            section_root_margin: SECTION_ROOT_MARGIN,
            submit_delay_ms: SUBMIT_DELAY_MS,
            profile: Profile::default(),
            catalog: default_catalog(),
            seed: 42,
        }
    }
}

impl PageConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Page-wide UI state owned by the page shell: the one place the theme lives.
#[derive(Clone, Debug, Default)]
pub struct PageState {
    pub theme: Theme,
    pub nav: NavState,
}

impl PageState {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            theme: config.initial_theme,
            nav: NavState::default(),
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
