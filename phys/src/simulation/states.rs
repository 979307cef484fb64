//! Core state types for the particle simulation.
//!
//! - `Particle`      one rigid circular body (position, velocity, mass, display data)
//! - `ParticleStore` the fixed-length, ordered collection stepped every tick
//!
//! Positions use screen-style coordinates: origin at the top-left corner of
//! the window, `y` growing downwards.

use nalgebra::Vector2;
use rand::Rng;

use crate::simulation::palette::{self, NamedColor};

pub type NVec2 = Vector2<f64>;

/// Largest initial speed bound whose sampling range `[-s, s]` stays finite
pub const MAX_INITIAL_SPEED: f64 = f64::MAX / 2.0;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub label: String, // display label, 1-based index
    pub radius: f64, // collision and drawing radius
    pub color: NamedColor, // display color
}

impl Particle {
    pub fn speed(&self) -> f64 {
        self.v.norm()
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}

/// Ordered collection of particles whose length never changes after construction
///
/// Index order only fixes the pairwise iteration order, it carries no meaning.
/// Callers get slices, never the `Vec`, so there is no push/remove.
#[derive(Debug, Clone)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    /// Wrap an explicit list of particles
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Place `count` particles in a vertical column at the horizontal center
    ///
    /// Particle `i` sits at `y = min_distance + i * (min_distance + size)`,
    /// gets both velocity components uniformly from `[-initial_speed, initial_speed]`
    /// (capped at [`MAX_INITIAL_SPEED`]),
    /// unit mass, label `i + 1` and the `i`-th palette color (wrapping)
    pub fn initialize<R: Rng + ?Sized>(
        count: usize,
        window: (u32, u32),
        min_distance: f64,
        size: f64,
        initial_speed: f64,
        palette: &[NamedColor],
        rng: &mut R,
    ) -> Self {
        // integer center, the column sits on a whole pixel
        let center_x = (window.0 / 2) as f64;
        let spacing_y = min_distance + size;
        // non-finite bounds start at rest, oversized ones are capped
        let speed = if initial_speed.is_finite() {
            initial_speed.abs().min(MAX_INITIAL_SPEED)
        } else {
            0.0
        };

        let particles = (0..count)
            .map(|i| {
                let (vx, vy) = if speed > 0.0 {
                    (rng.gen_range(-speed..=speed), rng.gen_range(-speed..=speed))
                } else {
                    (0.0, 0.0)
                };
                Particle {
                    x: NVec2::new(center_x, min_distance + i as f64 * spacing_y),
                    v: NVec2::new(vx, vy),
                    m: 1.0,
                    label: (i + 1).to_string(),
                    radius: size,
                    color: palette::cycle(palette, i),
                }
            })
            .collect();

        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Particle> {
        self.particles.get(i)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the particles; a slice cannot grow or shrink the store
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Total linear momentum of the store
    pub fn total_momentum(&self) -> NVec2 {
        self.particles.iter().fold(NVec2::zeros(), |acc, p| acc + p.momentum())
    }
}
