// Host-side tests for the particle hero simulation.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use crate::core::particles::*;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const VP: Viewport = Viewport {
    width: 100.0,
    height: 100.0,
};

#[test]
fn crossing_the_edge_flips_once() {
    let mut p = Particle {
        radius: 120.0,
        pos: DVec2::new(150.0, 50.0),
        dir: DVec2::new(1.0, 0.0),
    };
    let pointer = p.pos;
    p.step(pointer, VP);
    assert_eq!(p.dir.x, -1.0);
    // Still outside but heading back in: no second flip.
    for _ in 0..10 {
        p.step(pointer, VP);
        assert_eq!(p.dir.x, -1.0);
    }
    assert!(p.pos.x < 151.0);
}

#[test]
fn crossing_top_and_left_edges() {
    let mut p = Particle {
        radius: 100.0,
        pos: DVec2::new(0.5, 0.5),
        dir: DVec2::new(-1.0, -1.0),
    };
    p.step(p.pos, VP);
    assert_eq!(p.dir, DVec2::new(1.0, 1.0));
    p.step(p.pos, VP);
    assert_eq!(p.dir, DVec2::new(1.0, 1.0));
}

#[test]
fn pointer_pulls_gently() {
    let mut p = Particle {
        radius: 100.0,
        pos: DVec2::new(0.0, 50.0),
        dir: DVec2::ZERO,
    };
    p.step(DVec2::new(1000.0, 50.0), Viewport {
        width: 2000.0,
        height: 100.0,
    });
    assert!((p.pos.x - 0.5).abs() < 1e-12);
    assert_eq!(p.pos.y, 50.0);
}

#[test]
fn hue_spans_left_to_right_and_clamps() {
    assert_eq!(hue_for_x(0.0, 800.0), 10.0);
    assert_eq!(hue_for_x(800.0, 800.0), 140.0);
    assert_eq!(hue_for_x(400.0, 800.0), 75.0);
    assert_eq!(hue_for_x(-50.0, 800.0), 10.0);
    assert_eq!(hue_for_x(5000.0, 800.0), 140.0);
    assert_eq!(hue_for_x(0.0, 0.0), 10.0);
}

#[test]
fn gradient_matches_canvas_layout() {
    let p = Particle {
        radius: 90.0,
        pos: DVec2::new(300.0, 200.0),
        dir: DVec2::ZERO,
    };
    let g = p.gradient(Viewport {
        width: 600.0,
        height: 400.0,
    });
    assert_eq!(g.inner, [270.0, 200.0 - 90.0 / 7.0, 0.0]);
    assert_eq!(g.outer, [300.0, 200.0, 90.0]);
    assert_eq!(g.stops[0].1, "hsla(75, 100%, 60%, 1)");
    assert_eq!(g.stops[1].1, "hsla(75, 100%, 45%, 0.85)");
    assert_eq!(g.stops[2].1, "rgba(0,0,0,0.95)");
    assert!(g.stops.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn random_particles_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(11);
    let vp = Viewport {
        width: 1280.0,
        height: 720.0,
    };
    for _ in 0..200 {
        let p = Particle::random(vp, &mut rng);
        assert!((100.0..=200.0).contains(&p.radius));
        assert!((0.0..=vp.width).contains(&p.pos.x));
        assert!((0.0..=vp.height).contains(&p.pos.y));
        assert!((-1.0..=1.0).contains(&p.dir.x));
        assert!((-1.0..=1.0).contains(&p.dir.y));
    }
}

#[test]
fn field_starts_at_center_and_repopulates() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = ParticleField::new(10, VP, &mut rng);
    assert_eq!(field.particles.len(), 10);
    assert_eq!(field.pointer, DVec2::new(50.0, 50.0));

    let wide = Viewport {
        width: 1920.0,
        height: 1080.0,
    };
    field.repopulate(wide, &mut rng);
    assert_eq!(field.particles.len(), 10);
    assert_eq!(field.viewport, wide);

    field.set_pointer(f64::NAN, 30.0);
    assert_eq!(field.pointer, DVec2::new(0.0, 30.0));
    field.step();
}
