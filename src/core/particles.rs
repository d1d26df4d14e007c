use crate::core::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// Colour with straight (non-premultiplied) alpha in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// CSS `rgba(...)` form accepted by canvas fill styles.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Minimal 2-D drawing capability the simulator renders into.
pub trait DrawSurface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
}

/// Surface used when no drawing context could be acquired.
#[derive(Default, Clone, Copy, Debug)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn clear(&mut self, _width: f32, _height: f32) {}
    fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, _color: Rgba) {}
}

/// Tuning for a particle pool.
#[derive(Clone, Copy, Debug)]
pub struct ParticleConfig {
    pub count: usize,
    pub proximity: f32,
    pub attraction: f32,
    pub life_decay: f32,
    pub size_min: f32,
    pub size_span: f32,
    pub speed_max: f32,
    pub rgb: [u8; 3],
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            proximity: PROXIMITY_THRESHOLD,
            attraction: ATTRACTION_STRENGTH,
            life_decay: LIFE_DECAY_PER_FRAME,
            size_min: PARTICLE_SIZE_MIN,
            size_span: PARTICLE_SIZE_SPAN,
            speed_max: PARTICLE_SPEED_MAX,
            rgb: PARTICLE_RGB,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub life: f32,
}

impl Particle {
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }
}

/// Fixed-size pool of short-lived particles drifting over a canvas.
///
/// Each `tick` clears the surface, pulls particles near the pointer towards it,
/// integrates positions, decays life, draws every particle with alpha equal to
/// its remaining life and finally replaces expired particles in place. The pool
/// never grows or shrinks.
pub struct ParticleField {
    config: ParticleConfig,
    particles: Vec<Particle>,
    bounds: Vec2,
    pointer: Option<Vec2>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, bounds: Vec2, seed: u64) -> Self {
        let mut field = Self {
            config,
            particles: Vec::with_capacity(config.count),
            bounds: bounds.max(Vec2::ZERO),
            pointer: None,
            rng: StdRng::seed_from_u64(seed),
        };
        for _ in 0..config.count {
            let p = field.spawn();
            field.particles.push(p);
        }
        field
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Resize the spawn area; existing particles keep their positions.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds.max(Vec2::ZERO);
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Record the latest pointer position; non-finite input is ignored.
    pub fn set_pointer(&mut self, pointer: Vec2) {
        if pointer.is_finite() {
            self.pointer = Some(pointer);
        }
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Advance physics and life by one frame and respawn expired particles.
    pub fn step(&mut self) {
        self.advance();
        self.respawn_expired();
    }

    /// Draw the pool as it currently stands.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let [r, g, b] = self.config.rgb;
        for p in &self.particles {
            let color = Rgba {
                r,
                g,
                b,
                a: p.life.clamp(0.0, 1.0),
            };
            surface.fill_circle(p.position.x, p.position.y, p.size, color);
        }
    }

    /// One animation frame: clear, advance, draw, then replace expired particles.
    pub fn tick(&mut self, surface: &mut dyn DrawSurface) {
        surface.clear(self.bounds.x, self.bounds.y);
        self.advance();
        self.render(surface);
        self.respawn_expired();
    }

    fn advance(&mut self) {
        let cfg = self.config;
        let pointer = self.pointer;
        for p in &mut self.particles {
            if let Some(target) = pointer {
                let delta = target - p.position;
                if delta.length() < cfg.proximity {
                    p.velocity += delta * cfg.attraction;
                }
            }
            p.position += p.velocity;
            p.life -= cfg.life_decay;
        }
    }

    fn respawn_expired(&mut self) {
        for i in 0..self.particles.len() {
            if self.particles[i].is_expired() {
                self.particles[i] = self.spawn();
            }
        }
    }

    fn spawn(&mut self) -> Particle {
        let cfg = self.config;
        let x = self.rng.gen::<f32>() * self.bounds.x;
        let y = self.rng.gen::<f32>() * self.bounds.y;
        let size = self.rng.gen::<f32>() * cfg.size_span + cfg.size_min;
        let vx = self.rng.gen::<f32>() * 2.0 * cfg.speed_max - cfg.speed_max;
        let vy = self.rng.gen::<f32>() * 2.0 * cfg.speed_max - cfg.speed_max;
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            size,
            life: 1.0,
        }
    }
}
