//! Configuration types for loading simulation scenarios from YAML.
//!
//! [`SimConfig`] is a flat, `serde`-deserializable description of a run:
//! window, particle count and size, force constants, timing and palette.
//! Every field has a default, so `{}` is a valid scenario and
//! a scenario file only needs to name what it changes.
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! window: [800, 650]
//! num_particles: 32
//! min_distance: 15.0     # seeking only acts beyond this separation
//! particle_size: 30.0    # radius
//! G: 1.0                 # attraction constant
//! update_interval_ms: 16
//! max_speed: 20.0
//! seek_strength: 0.1
//! seed: 42               # omit for a random start
//! colors: [red, blue, yellow, green]
//!
//! # optional: explicit bodies replace the generated column
//! bodies:
//!   - x: [100.0, 100.0]
//!     v: [1.0, 0.0]
//!     radius: 6.0
//!   - x: [110.0, 100.0]
//!     v: [-1.0, 0.0]
//!     radius: 6.0
//! ```
//!
//! The scenario builder maps this configuration into the runtime
//! `Parameters`, `Engine` and `ParticleStore`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::simulation::palette::{NamedColor, DEFAULT_PALETTE};
use crate::simulation::states::MAX_INITIAL_SPEED;

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position, screen coordinates
    pub v: [f64; 2], // initial velocity per tick
    #[serde(default = "default_mass")]
    pub m: f64, // mass
    pub radius: Option<f64>, // falls back to `particle_size`
    pub label: Option<String>, // falls back to the 1-based index
    pub color: Option<NamedColor>, // falls back to the palette entry
}

fn default_mass() -> f64 {
    1.0
}

/// Top-level scenario configuration loaded from YAML.
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimConfig {
    pub window: (u32, u32), // width, height in pixels
    pub num_particles: usize, // size of the generated column
    pub min_distance: f64, // column gap and seeking cut-off
    pub particle_size: f64, // radius of generated particles
    pub G: f64, // attraction constant
    pub update_interval_ms: u64, // fixed tick interval
    pub max_speed: f64, // speed cap
    pub seek_strength: f64, // seeking force magnitude
    pub initial_speed: f64, // bound for random initial velocity components
    pub dt: f64, // drift step per tick
    pub eps: f64, // distance guard for every division
    pub collisions: bool, // run the collision phase
    pub splash_seconds: f64, // delay before the first tick
    pub arrow_length: f64, // direction arrow base length
    pub seed: Option<u64>, // deterministic start when set
    pub colors: Vec<NamedColor>, // palette cycled by index
    pub bodies: Option<Vec<BodyConfig>>, // explicit bodies instead of the column
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window: (800, 650),
            num_particles: 32,
            min_distance: 15.0,
            particle_size: 30.0,
            G: 1.0,
            update_interval_ms: 16,
            max_speed: 20.0,
            seek_strength: 0.1,
            initial_speed: 2.0,
            dt: 1.0,
            eps: 1e-9,
            collisions: true,
            splash_seconds: 3.0,
            arrow_length: 25.0,
            seed: None,
            colors: DEFAULT_PALETTE.to_vec(),
            bodies: None,
        }
    }
}

impl SimConfig {
    /// Parse a scenario from a YAML string
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: SimConfig = serde_yaml::from_str(s).context("invalid scenario YAML")?;
        Ok(cfg)
    }

    /// Read a scenario from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg: SimConfig = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        Ok(cfg)
    }

    /// Number of particles the scenario will hold
    pub fn particle_count(&self) -> usize {
        match &self.bodies {
            Some(bodies) => bodies.len(),
            None => self.num_particles,
        }
    }

    /// Reject values the stepper or the viewer cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.window.0 > 0 && self.window.1 > 0, "window must have a positive size, got {:?}", self.window);
        ensure!(self.particle_count() > 0, "scenario has no particles");
        ensure!(self.particle_size.is_finite() && self.particle_size > 0.0, "particle_size must be finite and > 0, got {}", self.particle_size);
        ensure!(self.min_distance.is_finite() && self.min_distance >= 0.0, "min_distance must be finite and >= 0, got {}", self.min_distance);
        ensure!(self.max_speed.is_finite() && self.max_speed > 0.0, "max_speed must be finite and > 0, got {}", self.max_speed);
        ensure!(self.eps.is_finite() && self.eps >= 0.0, "eps must be finite and >= 0, got {}", self.eps);
        ensure!(
            self.initial_speed.is_finite() && self.initial_speed >= 0.0 && self.initial_speed <= MAX_INITIAL_SPEED,
            "initial_speed must be in [0, {:e}], got {}", MAX_INITIAL_SPEED, self.initial_speed
        );
        ensure!(self.dt.is_finite(), "dt must be finite, got {}", self.dt);
        ensure!(self.G.is_finite(), "G must be finite, got {}", self.G);
        ensure!(self.seek_strength.is_finite(), "seek_strength must be finite, got {}", self.seek_strength);
        ensure!(self.arrow_length.is_finite(), "arrow_length must be finite, got {}", self.arrow_length);
        ensure!(self.update_interval_ms > 0, "update_interval_ms must be > 0");
        ensure!(self.splash_seconds.is_finite() && self.splash_seconds >= 0.0, "splash_seconds must be finite and >= 0, got {}", self.splash_seconds);
        ensure!(!self.colors.is_empty(), "colors must name at least one color");

        if let Some(bodies) = &self.bodies {
            for (i, b) in bodies.iter().enumerate() {
                ensure!(b.m.is_finite() && b.m > 0.0, "body {} has non-positive mass {}", i + 1, b.m);
                if let Some(r) = b.radius {
                    ensure!(r.is_finite() && r > 0.0, "body {} has non-positive radius {}", i + 1, r);
                }
                ensure!(
                    b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()),
                    "body {} has a non-finite position or velocity", i + 1
                );
            }
        }

        Ok(())
    }
}
