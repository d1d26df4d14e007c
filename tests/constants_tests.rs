// Host-side tests for tuning constants and their relationships.

use portfolio_web::core::constants::*;
use portfolio_web::core::ParticleConfig;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PROXIMITY_THRESHOLD > 0.0);
    assert!(ATTRACTION_STRENGTH > 0.0 && ATTRACTION_STRENGTH < 1.0);

    // Life must reach zero in a finite, non-trivial number of frames
    assert!(LIFE_DECAY_PER_FRAME > 0.0 && LIFE_DECAY_PER_FRAME < 1.0);

    assert!(PARTICLE_SIZE_MIN > 0.0);
    assert!(PARTICLE_SIZE_SPAN >= 0.0);
    assert!(PARTICLE_SPEED_MAX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_constants_are_positive() {
    assert!(HEADER_OFFSET_PX > 0.0);
    assert!(SUBMIT_DELAY_MS > 0);
    assert!(HERO_BUBBLE_COUNT > 0);
    assert!(SECTION_ROOT_MARGIN.starts_with("-50%"));
}

#[test]
fn default_particle_config_mirrors_constants() {
    let cfg = ParticleConfig::default();
    assert_eq!(cfg.count, PARTICLE_COUNT);
    assert_eq!(cfg.proximity, PROXIMITY_THRESHOLD);
    assert_eq!(cfg.attraction, ATTRACTION_STRENGTH);
    assert_eq!(cfg.life_decay, LIFE_DECAY_PER_FRAME);
    assert_eq!(cfg.rgb, PARTICLE_RGB);
}
