// Particle field simulation for the canvas hero.
//
// Soft circles drift across the viewport, are pulled slightly toward the
// pointer and bounce off the viewport edges. Drawing lives in the web layer;
// this module only owns the numbers, including the gradient description.

use crate::constants::{
    PARTICLE_HUE_SPAN, PARTICLE_HUE_START, PARTICLE_POINTER_PULL, PARTICLE_RADIUS_MIN,
    PARTICLE_RADIUS_SPAN,
};
use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub radius: f64,
    pub pos: DVec2,
    pub dir: DVec2,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f64>() * PARTICLE_RADIUS_SPAN,
            pos: DVec2::new(
                rng.gen::<f64>() * viewport.width,
                rng.gen::<f64>() * viewport.height,
            ),
            dir: DVec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)),
        }
    }

    /// Drift plus pointer pull, then bounce. An axis only flips while the
    /// particle is outside and still heading away, so a crossing flips once.
    pub fn step(&mut self, pointer: DVec2, viewport: Viewport) {
        self.pos += self.dir + (pointer - self.pos) * PARTICLE_POINTER_PULL;
        if (self.pos.x < 0.0 && self.dir.x < 0.0) || (self.pos.x > viewport.width && self.dir.x > 0.0) {
            self.dir.x = -self.dir.x;
        }
        if (self.pos.y < 0.0 && self.dir.y < 0.0) || (self.pos.y > viewport.height && self.dir.y > 0.0) {
            self.dir.y = -self.dir.y;
        }
    }

    pub fn gradient(&self, viewport: Viewport) -> GradientSpec {
        let hue = hue_for_x(self.pos.x, viewport.width);
        let r = self.radius;
        GradientSpec {
            inner: [self.pos.x - r / 3.0, self.pos.y - r / 7.0, 0.0],
            outer: [self.pos.x, self.pos.y, r],
            stops: [
                (0.0, hsla(hue, 100.0, 60.0, 1.0)),
                (0.55, hsla(hue, 100.0, 45.0, 0.85)),
                (0.95, "rgba(0,0,0,0.95)".to_string()),
            ],
        }
    }
}

/// Radial gradient as the 2D canvas API wants it: two circles and stops.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec {
    /// x, y, r of the start circle.
    pub inner: [f64; 3],
    /// x, y, r of the end circle.
    pub outer: [f64; 3],
    pub stops: [(f32, String); 3],
}

/// Hue in degrees, 10 at the left edge to 140 at the right edge.
#[inline]
pub fn hue_for_x(x: f64, width: f64) -> f64 {
    let t = (x / width.max(1.0)).clamp(0.0, 1.0);
    PARTICLE_HUE_START + t * PARTICLE_HUE_SPAN
}

#[inline]
pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> String {
    format!("hsla({}, {}%, {}%, {})", h, s, l, a)
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub viewport: Viewport,
    pub pointer: DVec2,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, viewport: Viewport, rng: &mut R) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::random(viewport, rng)).collect(),
            viewport,
            pointer: viewport.center(),
        }
    }

    /// New viewport: throw the population away and scatter a fresh one.
    pub fn repopulate<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        let count = self.particles.len();
        self.viewport = viewport;
        self.particles = (0..count).map(|_| Particle::random(viewport, rng)).collect();
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        let x = if x.is_finite() { x } else { 0.0 };
        let y = if y.is_finite() { y } else { 0.0 };
        self.pointer = DVec2::new(x, y);
    }

    pub fn step(&mut self) {
        let pointer = self.pointer;
        let viewport = self.viewport;
        for p in &mut self.particles {
            p.step(pointer, viewport);
        }
    }
}
