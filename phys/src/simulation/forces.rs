//! Force contributors for the particle stepper
//!
//! Defines the `Force` trait, the `ForceSet` that sums several of them, and
//! the two pairwise terms the simulation runs with: inverse-square attraction
//! and a constant-magnitude seeking bias

use crate::simulation::states::{ParticleStore, NVec2};

/// Collection of force terms (attraction, seeking, ...)
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per particle
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total forces for all particles in `store`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, store: &ParticleStore, out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(store, out);
        }
    }
}

/// Trait for force sources operating on a [`ParticleStore`]
/// Implementations add their contribution into `out[i]` for each particle
pub trait Force {
    fn force(&self, store: &ParticleStore, out: &mut [NVec2]);
}

/// Unit vector and distance from `xi` to `xj`, `None` when the centers are
/// closer than `eps` and no direction exists
fn direction(xi: NVec2, xj: NVec2, eps: f64) -> Option<(NVec2, f64)> {
    let d = xj - xi;
    let r2 = d.dot(&d);
    if r2 <= eps * eps {
        return None;
    }
    let r = r2.sqrt();
    Some((d / r, r))
}

/// Inverse-square attraction, F = G * m_i * m_j / r^2 along the line of centers
///
/// No softening: close pairs get very large kicks, which the speed cap absorbs.
/// Pairs closer than `eps` are skipped
#[allow(non_snake_case)]
pub struct NewtonianAttraction {
    pub G: f64, // gravitational constant
    pub eps: f64, // distance guard
}

impl Force for NewtonianAttraction {
    fn force(&self, store: &ParticleStore, out: &mut [NVec2]) {
        if self.G == 0.0 {
            return;
        }
        let ps = store.particles();
        let n = ps.len();

        // each unordered pair once, equal and opposite
        for i in 0..n {
            for j in (i + 1)..n {
                let Some((dir, r)) = direction(ps[i].x, ps[j].x, self.eps) else {
                    continue;
                };
                let f = self.G * ps[i].m * ps[j].m / (r * r);
                out[i] += f * dir;
                out[j] -= f * dir;
            }
        }
    }
}

/// Constant pull of magnitude `strength` toward every particle farther than `min_distance`
///
/// Independent of mass and distance; stacks on top of the attraction term
pub struct SeekingBias {
    pub strength: f64, // force magnitude per neighbour
    pub min_distance: f64, // no pull at or inside this separation
    pub eps: f64, // distance guard
}

impl Force for SeekingBias {
    fn force(&self, store: &ParticleStore, out: &mut [NVec2]) {
        if self.strength == 0.0 {
            return;
        }
        let ps = store.particles();
        let n = ps.len();

        for i in 0..n {
            for j in (i + 1)..n {
                let Some((dir, r)) = direction(ps[i].x, ps[j].x, self.eps) else {
                    continue;
                };
                if r > self.min_distance {
                    out[i] += self.strength * dir;
                    out[j] -= self.strength * dir;
                }
            }
        }
    }
}
