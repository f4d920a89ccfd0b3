//! # Reveal + Particle Field Properties
//!
//! Randomised checks of the behaviour the pages rely on:
//!
//! 1. An element that never reaches its threshold stays hidden
//! 2. A revealed element stays revealed after leaving the viewport
//! 3. Batch size is `floor(W*H/9000)` and every particle starts on-surface
//! 4. Crossing an edge flips that axis's velocity; positions stay finite
//! 5. A resize produces a fresh batch sized for the new surface
//!
//! Run with: cargo test -p folio_fx --test properties

use folio_fx::{
    particle_count, ManualObserver, Particle, ParticleConfig, ParticleField, ScrollReveal,
    Threshold,
};
use proptest::prelude::*;

const AREA: f32 = ParticleConfig::DEFAULT_AREA_PER_PARTICLE;

fn any_threshold() -> impl Strategy<Value = f32> {
    // (0, 1]
    (1u32..=1000).prop_map(|n| n as f32 / 1000.0)
}

fn any_surface() -> impl Strategy<Value = (u32, u32)> {
    (0u32..2560, 0u32..1600)
}

proptest! {
    #[test]
    fn below_threshold_never_reveals(
        t in any_threshold(),
        samples in prop::collection::vec(0.0f32..1.0, 1..40),
    ) {
        let threshold = Threshold::new(t).unwrap();
        let observer = ManualObserver::new();
        let mut reveal = ScrollReveal::with_threshold(observer.clone(), threshold);
        reveal.register(Some(&"section"));

        for sample in samples {
            // Scale every sample strictly below the threshold.
            observer.set_visible_fraction(&"section", sample * t * 0.999);
        }
        prop_assert!(!reveal.is_revealed());
        prop_assert!(reveal.is_observing());
    }

    #[test]
    fn reveal_is_monotonic(
        t in any_threshold(),
        after in prop::collection::vec(0.0f32..=1.0, 0..40),
    ) {
        let threshold = Threshold::new(t).unwrap();
        let observer = ManualObserver::new();
        let mut reveal = ScrollReveal::with_threshold(observer.clone(), threshold);
        reveal.register(Some(&1u8));

        observer.set_visible_fraction(&1, t);
        prop_assert!(reveal.is_revealed());

        for sample in after {
            observer.set_visible_fraction(&1, sample);
            prop_assert!(reveal.is_revealed());
        }

        // Re-registering after the reveal neither hides nor re-observes.
        reveal.register(None);
        reveal.register(Some(&1));
        prop_assert!(reveal.is_revealed());
        prop_assert_eq!(observer.active_count(), 0);
    }

    #[test]
    fn batch_matches_surface(
        (w, h) in any_surface(),
        seed in any::<u64>(),
    ) {
        let field = ParticleField::new(w, h, ParticleConfig::default(), seed);
        let expected = (u64::from(w) * u64::from(h) / 9000) as usize;

        prop_assert_eq!(field.particles().len(), expected);
        prop_assert_eq!(particle_count(w, h, AREA), expected);
        for p in field.particles() {
            prop_assert!(p.x >= 0.0 && p.x <= w as f32);
            prop_assert!(p.y >= 0.0 && p.y <= h as f32);
        }
    }

    #[test]
    fn edge_crossing_flips_velocity(
        x in 0.0f32..=100.0,
        vx in -0.25f32..=0.25,
    ) {
        let width = 100.0;
        let mut p = Particle { x, y: 50.0, vx, vy: 0.0, radius: 1.0 };
        let crossed = x + vx < 0.0 || x + vx > width;

        p.step(width, 100.0);

        prop_assert!(p.x.is_finite());
        prop_assert!(!p.vx.is_nan());
        if crossed {
            prop_assert!(p.vx == -vx);
        } else {
            prop_assert!(p.vx == vx);
        }
    }

    #[test]
    fn particles_stay_near_surface(seed in any::<u64>(), frames in 1usize..2000) {
        let config = ParticleConfig::default();
        let mut field = ParticleField::new(400, 300, config.clone(), seed);
        for _ in 0..frames {
            field.step();
        }
        // At most one frame of overshoot past any edge.
        let slack = config.max_speed;
        for p in field.particles() {
            prop_assert!(p.x >= -slack && p.x <= 400.0 + slack);
            prop_assert!(p.y >= -slack && p.y <= 300.0 + slack);
        }
    }

    #[test]
    fn resize_regenerates(
        (w1, h1) in any_surface(),
        (w2, h2) in any_surface(),
        seed in any::<u64>(),
    ) {
        let mut field = ParticleField::new(w1, h1, ParticleConfig::default(), seed);
        let generation = field.generation();

        field.resize(w2, h2);

        prop_assert_eq!(field.particles().len(), particle_count(w2, h2, AREA));
        prop_assert_eq!(field.dimensions(), (w2, h2));
        prop_assert_eq!(field.generation(), generation + 1);
        for p in field.particles() {
            prop_assert!(p.x >= 0.0 && p.x <= w2 as f32);
            prop_assert!(p.y >= 0.0 && p.y <= h2 as f32);
        }
    }
}
