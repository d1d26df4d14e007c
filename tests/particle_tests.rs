// Host-side tests for the particle field simulation.

use glam::Vec2;
use portfolio_web::core::{DrawSurface, NullSurface, ParticleConfig, ParticleField, Rgba};

fn field_with(count: usize, seed: u64) -> ParticleField {
    let cfg = ParticleConfig {
        count,
        ..ParticleConfig::default()
    };
    ParticleField::new(cfg, Vec2::new(800.0, 600.0), seed)
}

#[derive(Default)]
struct CountingSurface {
    clears: usize,
    circles: usize,
    min_alpha: f32,
}

impl DrawSurface for CountingSurface {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
    }
    fn fill_circle(&mut self, _x: f32, _y: f32, radius: f32, color: Rgba) {
        assert!(radius > 0.0);
        assert!((0.0..=1.0).contains(&color.a));
        if self.circles == 0 || color.a < self.min_alpha {
            self.min_alpha = color.a;
        }
        self.circles += 1;
    }
}

#[test]
fn pool_size_is_constant_across_ticks() {
    for n in [0usize, 1, 7, 50, 200] {
        let mut field = field_with(n, 3);
        let mut surface = NullSurface;
        for _ in 0..350 {
            field.tick(&mut surface);
            assert_eq!(field.len(), n);
        }
        for _ in 0..150 {
            field.step();
            assert_eq!(field.len(), n);
        }
    }
}

#[test]
fn life_decreases_by_fixed_step_then_resets() {
    let mut field = field_with(5, 11);
    let decay = field.config().life_decay;
    let mut respawns = 0;
    for _ in 0..250 {
        let before: Vec<f32> = field.particles().iter().map(|p| p.life).collect();
        field.step();
        for (prev, p) in before.iter().zip(field.particles()) {
            if prev - decay <= 0.0 {
                assert_eq!(p.life, 1.0, "expired particle should respawn with full life");
                respawns += 1;
            } else {
                assert!((p.life - (prev - decay)).abs() < 1e-5);
                assert!(p.life < *prev);
            }
        }
    }
    assert!(respawns >= 5, "every particle should have expired at least once");
}

#[test]
fn respawned_particles_land_inside_bounds() {
    let mut field = field_with(20, 5);
    field.set_bounds(Vec2::new(50.0, 40.0));
    for _ in 0..120 {
        field.step();
    }
    // After 120 frames every particle has been respawned into the new bounds
    // and drifted at most a few pixels per frame since.
    for p in field.particles() {
        let age = ((1.0 - p.life) / field.config().life_decay).round();
        let reach = age * (field.config().speed_max * 2.0) + 1.0;
        assert!(p.position.x >= -reach && p.position.x <= 50.0 + reach);
        assert!(p.position.y >= -reach && p.position.y <= 40.0 + reach);
    }
}

#[test]
fn pointer_within_threshold_pulls_velocity() {
    let cfg = ParticleConfig {
        count: 1,
        ..ParticleConfig::default()
    };
    let mut field = ParticleField::new(cfg, Vec2::new(400.0, 400.0), 9);
    let start = field.particles()[0];
    field.set_pointer(start.position + Vec2::new(50.0, 0.0));
    field.step();
    let after = field.particles()[0];
    let expected_vx = start.velocity.x + 50.0 * cfg.attraction;
    assert!((after.velocity.x - expected_vx).abs() < 1e-5);
    assert!((after.velocity.y - start.velocity.y).abs() < 1e-5);
    assert!((after.position - (start.position + after.velocity)).length() < 1e-4);
}

#[test]
fn pointer_beyond_threshold_is_ignored() {
    let cfg = ParticleConfig {
        count: 1,
        ..ParticleConfig::default()
    };
    let mut field = ParticleField::new(cfg, Vec2::new(400.0, 400.0), 9);
    let start = field.particles()[0];
    field.set_pointer(start.position + Vec2::new(0.0, 150.0));
    field.step();
    assert_eq!(field.particles()[0].velocity, start.velocity);
}

#[test]
fn without_pointer_velocity_is_unchanged() {
    let mut field = field_with(10, 21);
    field.set_pointer(Vec2::new(f32::NAN, 1.0));
    assert!(field.pointer().is_none());
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.velocity).collect();
    field.step();
    let after: Vec<Vec2> = field.particles().iter().map(|p| p.velocity).collect();
    assert_eq!(before, after);
}

#[test]
fn tick_draws_each_particle_with_life_as_alpha() {
    let mut field = field_with(30, 2);
    let mut surface = CountingSurface::default();
    for frame in 1..=3 {
        field.tick(&mut surface);
        assert_eq!(surface.clears, frame);
        assert_eq!(surface.circles, 30 * frame);
    }
    assert!(surface.min_alpha > 0.9);
}

#[test]
fn same_seed_same_field() {
    let a = field_with(12, 99);
    let b = field_with(12, 99);
    assert_eq!(a.particles(), b.particles());
}
