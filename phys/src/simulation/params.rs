//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the per-tick constants read by the stepper:
//! - force strengths (`G`, `seek_strength`) and the seeking cut-off `min_distance`,
//! - the speed cap and time step,
//! - the box the particles bounce in,
//! - the distance guard `eps` shared by every division

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub seek_strength: f64, // constant pull toward far particles
    pub min_distance: f64, // seeking only acts beyond this separation
    pub max_speed: f64, // speed cap applied after the force kick
    pub dt: f64, // drift step, 1.0 = one time unit per tick
    pub width: f64, // box width
    pub height: f64, // box height
    pub eps: f64, // distance guard
    pub collisions: bool, // run the collision phase
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 1.0,
            seek_strength: 0.1,
            min_distance: 15.0,
            max_speed: 20.0,
            dt: 1.0,
            width: 800.0,
            height: 650.0,
            eps: 1e-9,
            collisions: true,
        }
    }
}
