//! Fixed-step explicit Euler stepper
//!
//! One tick runs four phases in order:
//! 1. force kick + speed cap (`apply_forces`)
//! 2. collision impulses on the pre-drift positions (`resolve_collisions`)
//! 3. drift (`drift`)
//! 4. wall reflection (`reflect_at_bounds`)

use tracing::debug;

use super::states::{ParticleStore, NVec2};
use super::forces::ForceSet;
use super::params::Parameters;
use super::collision::resolve_collisions;
use super::boundary::reflect_at_bounds;

/// Advance the store by one tick, returning the number of collisions resolved
pub fn euler_step(store: &mut ParticleStore, forces: &ForceSet, params: &Parameters) -> usize {
    if store.is_empty() { // no particles, return
        return 0;
    }

    apply_forces(store, forces, params);

    let contacts = if params.collisions {
        resolve_collisions(store, params.eps)
    } else {
        0
    };
    if contacts > 0 {
        debug!(contacts, "resolved collisions");
    }

    drift(store, params.dt);
    reflect_at_bounds(store, params.width, params.height);

    contacts
}

/// Kick every velocity by F / m for the forces at the current positions,
/// then cap the speed at `params.max_speed`
pub fn apply_forces(store: &mut ParticleStore, forces: &ForceSet, params: &Parameters) {
    let n = store.len();

    // f[i] holds the total force on particle i
    let mut f = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&*store, &mut f);

    for (p, fi) in store.particles_mut().iter_mut().zip(f.iter()) {
        p.v += *fi / p.m;
        p.v = clamp_speed(p.v, params.max_speed);
    }
}

/// Rescale `v` to exactly `max_speed` if it is faster, keeping its direction
pub fn clamp_speed(v: NVec2, max_speed: f64) -> NVec2 {
    let speed = v.norm();
    if speed > max_speed {
        v * (max_speed / speed)
    } else {
        v
    }
}

/// x += dt * v for every particle
pub fn drift(store: &mut ParticleStore, dt: f64) {
    for p in store.particles_mut() {
        p.x += dt * p.v;
    }
}
