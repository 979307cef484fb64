//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `SimConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - particle state (`ParticleStore`)
//! - active force set (`ForceSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and stepped by the
//! fixed-update physics system

use std::time::Duration;

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::configuration::config::{SimConfig, BodyConfig};
use crate::simulation::engine::Engine;
use crate::simulation::integrator::euler_step;
use crate::simulation::palette;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Particle, ParticleStore, NVec2};
use crate::simulation::forces::{ForceSet, NewtonianAttraction, SeekingBias};

/// Bevy resource representing a fully-initialized simulation
///
/// Built from a [`SimConfig`]: engine settings, parameters, the particle
/// store and the set of active forces. `tick` counts completed steps
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub store: ParticleStore,
    pub forces: ForceSet,
    pub tick: u64,
}

impl Scenario {
    /// Assumes `cfg` passed [`SimConfig::validate`]
    pub fn build_scenario(cfg: &SimConfig) -> Self {
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let store = match &cfg.bodies {
            Some(bodies) => store_from_bodies(bodies, cfg),
            None => ParticleStore::initialize(
                cfg.num_particles,
                cfg.window,
                cfg.min_distance,
                cfg.particle_size,
                cfg.initial_speed,
                &cfg.colors,
                &mut rng,
            ),
        };

        let parameters = Parameters {
            G: cfg.G,
            seek_strength: cfg.seek_strength,
            min_distance: cfg.min_distance,
            max_speed: cfg.max_speed,
            dt: cfg.dt,
            width: cfg.window.0 as f64,
            height: cfg.window.1 as f64,
            eps: cfg.eps,
            collisions: cfg.collisions,
        };

        let engine = Engine {
            window: cfg.window,
            tick: Duration::from_millis(cfg.update_interval_ms),
            splash: Duration::try_from_secs_f64(cfg.splash_seconds).unwrap_or(Duration::ZERO),
            arrow_length: cfg.arrow_length,
        };

        let forces = default_forces(&parameters);

        info!(
            particles = store.len(),
            seeded = cfg.seed.is_some(),
            "built scenario"
        );

        Self {
            engine,
            parameters,
            store,
            forces,
            tick: 0,
        }
    }

    /// Advance one tick, returning the number of collisions resolved
    pub fn step(&mut self) -> usize {
        let contacts = euler_step(&mut self.store, &self.forces, &self.parameters);
        self.tick += 1;
        contacts
    }
}

/// Attraction plus seeking, the force pair the simulation runs with
pub fn default_forces(parameters: &Parameters) -> ForceSet {
    ForceSet::new()
        .with(NewtonianAttraction {
            G: parameters.G,
            eps: parameters.eps,
        })
        .with(SeekingBias {
            strength: parameters.seek_strength,
            min_distance: parameters.min_distance,
            eps: parameters.eps,
        })
}

// Bodies: map `BodyConfig` -> runtime `Particle`, filling gaps from the scenario defaults
fn store_from_bodies(bodies: &[BodyConfig], cfg: &SimConfig) -> ParticleStore {
    let particles = bodies.iter().enumerate().map(|(i, bc)| Particle {
        x: NVec2::new(bc.x[0], bc.x[1]),
        v: NVec2::new(bc.v[0], bc.v[1]),
        m: bc.m,
        label: bc.label.clone().unwrap_or_else(|| (i + 1).to_string()),
        radius: bc.radius.unwrap_or(cfg.particle_size),
        color: bc.color.unwrap_or_else(|| palette::cycle(&cfg.colors, i)),
    }).collect();

    ParticleStore::from_particles(particles)
}
