//! Reflection off the window edges

use crate::simulation::states::ParticleStore;

/// Flip the velocity component of any particle touching or crossing a wall
///
/// `x` and `y` are checked independently. Positions are left where they are,
/// so a fast particle can end up past a wall; it keeps the flipped velocity
/// and is flipped again on every tick it still touches.
pub fn reflect_at_bounds(store: &mut ParticleStore, width: f64, height: f64) {
    for p in store.particles_mut() {
        if p.x.x - p.radius <= 0.0 || p.x.x + p.radius >= width {
            p.v.x = -p.v.x;
        }
        if p.x.y - p.radius <= 0.0 || p.x.y + p.radius >= height {
            p.v.y = -p.v.y;
        }
    }
}
