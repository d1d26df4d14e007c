// Shared tuning constants for the page and its background effect.

// Particle field
pub const PARTICLE_COUNT: usize = 50;
pub const PROXIMITY_THRESHOLD: f32 = 100.0; // canvas px within which the pointer attracts
pub const ATTRACTION_STRENGTH: f32 = 0.001; // velocity nudge per px of offset
pub const LIFE_DECAY_PER_FRAME: f32 = 0.01;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 3.0;
pub const PARTICLE_SPEED_MAX: f32 = 1.0; // each velocity component in [-max, max)

// Particle colour (rgb); alpha follows particle life
pub const PARTICLE_RGB: [u8; 3] = [59, 130, 246];

// Page shell
pub const HEADER_OFFSET_PX: f64 = 80.0; // fixed header height cleared when scrolling to a section
pub const SECTION_ROOT_MARGIN: &str = "-50% 0px";

// Contact form: stand-in for a network round trip
pub const SUBMIT_DELAY_MS: i32 = 2000;

// Hero decoration
pub const HERO_BUBBLE_COUNT: usize = 20;
