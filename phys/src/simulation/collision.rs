//! Pairwise overlap detection and elastic impulse resolution

use crate::simulation::states::ParticleStore;

/// Resolve every overlapping pair (i < j) with a perfectly elastic impulse
/// along the line of centers, returning the number of contacts resolved
///
/// Uses the current positions, so call it before the drift. Pairs are not
/// tested for approach: an overlapping pair that is already separating still
/// exchanges its normal velocity component. Pairs with coincident centers
/// (`distance <= eps`) have no normal and are skipped.
pub fn resolve_collisions(store: &mut ParticleStore, eps: f64) -> usize {
    let ps = store.particles_mut();
    let n = ps.len();
    let mut contacts = 0;

    for i in 0..n {
        // split so body i and body j can be borrowed mutably together
        let (head, tail) = ps.split_at_mut(i + 1);
        let a = &mut head[i];

        for b in tail.iter_mut() {
            let d = b.x - a.x;
            let dist = d.norm();
            if dist >= a.radius + b.radius || dist <= eps {
                continue;
            }

            let normal = d / dist;
            // p = 2 (v_a.n - v_b.n) / (m_a + m_b)
            let p = 2.0 * (a.v.dot(&normal) - b.v.dot(&normal)) / (a.m + b.m);
            a.v -= p * b.m * normal;
            b.v += p * a.m * normal;
            contacts += 1;
        }
    }

    contacts
}
