//! Drifting particle field
//!
//! Lifecycle of a batch:
//! 1. Seed: `floor(w * h / area_per_particle)` particles, uniform position,
//!    velocity components in `[-max_speed, max_speed]`, radius in
//!    `[0, max_radius)`
//! 2. Step: `position += velocity`; a coordinate outside `[0, size]` flips
//!    that axis's velocity (no clamping, so at most one frame of overshoot)
//! 3. Render: clear, then one filled circle per particle
//! 4. Resize: the whole batch is thrown away and reseeded
//!
//! Randomness comes from a seeded `ChaCha8Rng`; the same seed and sizes
//! produce the same field.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::ParticleConfig;
use crate::frame::{FrameControl, FrameTask};
use crate::surface::DrawSurface;

/// One animated point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    /// X position (px).
    pub x: f32,
    /// Y position (px).
    pub y: f32,
    /// X velocity (px / frame).
    pub vx: f32,
    /// Y velocity (px / frame).
    pub vy: f32,
    /// Draw radius (px).
    pub radius: f32,
}

impl Particle {
    /// Advances one frame inside a `width` × `height` box.
    #[inline]
    pub fn step(&mut self, width: f32, height: f32) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// Number of particles for a `width` × `height` surface.
///
/// Non-positive or non-finite `area_per_particle` yields zero.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn particle_count(width: u32, height: u32, area_per_particle: f32) -> usize {
    let area = f64::from(area_per_particle);
    if !(area.is_finite() && area > 0.0) {
        return 0;
    }
    let pixels = u64::from(width) * u64::from(height);
    (pixels as f64 / area).floor() as usize
}

/// The particle batch plus the surface size it was seeded for.
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
    config: ParticleConfig,
    rng: ChaCha8Rng,
    generation: u64,
}

impl ParticleField {
    /// Seeds a field for a `width` × `height` surface.
    #[must_use]
    pub fn new(width: u32, height: u32, config: ParticleConfig, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            generation: 0,
        };
        field.reseed();
        field
    }

    /// Adopts new dimensions and regenerates the whole batch.
    ///
    /// Existing particles are discarded, not rescaled.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.reseed();
        tracing::debug!(
            width,
            height,
            particles = self.particles.len(),
            generation = self.generation,
            "particle field regenerated"
        );
    }

    /// Advances every particle by one frame.
    #[allow(clippy::cast_precision_loss)]
    pub fn step(&mut self) {
        let (w, h) = (self.width as f32, self.height as f32);
        for particle in &mut self.particles {
            particle.step(w, h);
        }
    }

    /// Clears `surface` and draws every particle.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        let color = self.config.color;
        for p in &self.particles {
            surface.fill_circle(p.x, p.y, p.radius, color);
        }
    }

    /// The current batch.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Surface size the batch was seeded for.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// How many batches have been generated (1 after construction).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Tuning in use.
    #[must_use]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    #[allow(clippy::cast_precision_loss)]
    fn reseed(&mut self) {
        let count = particle_count(self.width, self.height, self.config.area_per_particle);
        let (w, h) = (self.width as f32, self.height as f32);
        let speed = self.config.max_speed;
        let max_radius = self.config.max_radius;

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let rng = &mut self.rng;
            self.particles.push(Particle {
                x: rng.gen::<f32>() * w,
                y: rng.gen::<f32>() * h,
                vx: (rng.gen::<f32>() * 2.0 - 1.0) * speed,
                vy: (rng.gen::<f32>() * 2.0 - 1.0) * speed,
                radius: rng.gen::<f32>() * max_radius,
            });
        }
        self.generation += 1;
    }
}

/// A [`ParticleField`] bound to the surface it paints on.
///
/// One [`FrameTask::frame`] call is one display frame: step, then render.
pub struct ParticleAnimation<S: DrawSurface> {
    field: ParticleField,
    surface: S,
}

impl<S: DrawSurface> ParticleAnimation<S> {
    /// Seeds a field sized to `surface`.
    #[must_use]
    pub fn new(surface: S, config: ParticleConfig, seed: u64) -> Self {
        let (width, height) = surface.size();
        Self {
            field: ParticleField::new(width, height, config, seed),
            surface,
        }
    }

    /// Regenerates the field if the surface size changed since the last
    /// sync. Returns whether it did.
    pub fn sync_size(&mut self) -> bool {
        let size = self.surface.size();
        if size == self.field.dimensions() {
            return false;
        }
        self.field.resize(size.0, size.1);
        true
    }

    /// Regenerates the field for the surface's current size unconditionally.
    pub fn regenerate(&mut self) {
        let (width, height) = self.surface.size();
        self.field.resize(width, height);
    }

    /// The field.
    #[must_use]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// The surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access (resizing the backing canvas, etc.).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<S: DrawSurface> FrameTask for ParticleAnimation<S> {
    fn frame(&mut self, _dt: f32) -> FrameControl {
        self.field.step();
        self.field.render(&mut self.surface);
        FrameControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use crate::surface::{CommandBuffer, DrawCommand};

    #[test]
    fn test_count_follows_area() {
        assert_eq!(particle_count(1920, 1080, 9000.0), 230);
        assert_eq!(particle_count(300, 300, 9000.0), 10);
        assert_eq!(particle_count(94, 95, 9000.0), 0);
        assert_eq!(particle_count(0, 1080, 9000.0), 0);
        assert_eq!(particle_count(100, 100, 0.0), 0);
    }

    #[test]
    fn test_seeded_field_is_deterministic() {
        let a = ParticleField::new(800, 600, ParticleConfig::default(), 42);
        let b = ParticleField::new(800, 600, ParticleConfig::default(), 42);
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.generation(), 1);
    }

    #[test]
    fn test_initial_ranges() {
        let config = ParticleConfig::default();
        let field = ParticleField::new(1280, 720, config.clone(), 7);

        assert_eq!(field.particles().len(), 102);
        for p in field.particles() {
            assert!((0.0..=1280.0).contains(&p.x));
            assert!((0.0..=720.0).contains(&p.y));
            assert!(p.vx.abs() <= config.max_speed);
            assert!(p.vy.abs() <= config.max_speed);
            assert!(p.radius >= 0.0 && p.radius < config.max_radius);
        }
    }

    #[test]
    fn test_particle_reflects_off_left_edge() {
        let mut p = Particle {
            x: 0.1,
            y: 50.0,
            vx: -0.25,
            vy: 0.0,
            radius: 1.0,
        };
        p.step(100.0, 100.0);
        assert!(p.x < 0.0);
        assert!(p.vx > 0.0);

        p.step(100.0, 100.0);
        assert!(p.x > 0.0);
    }

    #[test]
    fn test_particle_reflects_off_bottom_edge() {
        let mut p = Particle {
            x: 50.0,
            y: 99.9,
            vx: 0.0,
            vy: 0.25,
            radius: 1.0,
        };
        p.step(100.0, 100.0);
        assert!(p.vy < 0.0);
        assert!(p.y.is_finite());
    }

    #[test]
    fn test_resize_discards_batch() {
        let mut field = ParticleField::new(300, 300, ParticleConfig::default(), 1);
        let before = field.particles().to_vec();

        field.resize(600, 300);
        assert_eq!(field.particles().len(), 20);
        assert_eq!(field.dimensions(), (600, 300));
        assert_eq!(field.generation(), 2);
        assert_ne!(&before[..], &field.particles()[..before.len()]);
    }

    #[test]
    fn test_render_clears_then_draws() {
        let config = ParticleConfig {
            color: Color::WHITE,
            ..ParticleConfig::default()
        };
        let field = ParticleField::new(300, 300, config, 3);
        let mut surface = CommandBuffer::new(300, 300);

        field.render(&mut surface);
        assert_eq!(surface.commands()[0], DrawCommand::Clear);
        assert_eq!(surface.circle_count(), 10);
        assert!(surface.commands()[1..]
            .iter()
            .all(|c| matches!(c, DrawCommand::Circle { color, .. } if *color == Color::WHITE)));
    }

    #[test]
    fn test_animation_follows_surface_size() {
        let mut animation =
            ParticleAnimation::new(CommandBuffer::new(300, 300), ParticleConfig::default(), 9);
        assert!(!animation.sync_size());

        animation.surface_mut().set_size(900, 300);
        assert!(animation.sync_size());
        assert_eq!(animation.field().particles().len(), 30);

        assert_eq!(animation.frame(0.016), FrameControl::Continue);
        assert_eq!(animation.surface().circle_count(), 30);
    }

    #[test]
    fn test_zero_speed_config_is_static() {
        let config = ParticleConfig {
            max_speed: 0.0,
            ..ParticleConfig::default()
        };
        let mut field = ParticleField::new(300, 300, config, 5);
        let before = field.particles().to_vec();
        field.step();
        assert_eq!(before, field.particles());
    }
}
