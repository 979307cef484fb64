pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Particle, ParticleStore, NVec2};
pub use simulation::palette::{NamedColor, DEFAULT_PALETTE};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{Force, ForceSet, NewtonianAttraction, SeekingBias};
pub use simulation::collision::resolve_collisions;
pub use simulation::boundary::reflect_at_bounds;
pub use simulation::integrator::{euler_step, apply_forces, clamp_speed, drift};
pub use simulation::scenario::{Scenario, default_forces};

pub use configuration::config::{SimConfig, BodyConfig};

pub use visualization::vis2d::{run_2d, SimState};

pub use benchmark::benchmark::{bench_step, bench_step_curve};
