//! Wall-clock timing of the stepper for growing particle counts
//!
//! Output goes to stdout so it can be pasted into a spreadsheet.

use std::time::Instant;

use crate::simulation::palette::DEFAULT_PALETTE;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::default_forces;
use crate::simulation::states::{Particle, ParticleStore, NVec2};
use crate::simulation::integrator::euler_step;

/// Helper to build a store of size `n` scattered over the default box
fn make_store(n: usize, params: &Parameters) -> ParticleStore {
    let particles = (0..n).map(|i| {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            (0.5 + 0.45 * (i_f * 0.37).sin()) * params.width,
            (0.5 + 0.45 * (i_f * 0.13).cos()) * params.height,
        );
        Particle {
            x,
            v: NVec2::new((i_f * 0.07).sin(), (i_f * 0.11).cos()),
            m: 1.0,
            label: (i + 1).to_string(),
            radius: 5.0,
            color: DEFAULT_PALETTE[i % DEFAULT_PALETTE.len()],
        }
    }).collect();

    ParticleStore::from_particles(particles)
}

/// Force accumulation alone vs. a full tick, per particle count
pub fn bench_step() {
    let ns = [8, 16, 32, 64, 128, 256, 512, 1024];
    let steps = 20; // ticks per measurement

    for n in ns {
        let params = Parameters::default();
        let forces = default_forces(&params);
        let template = make_store(n, &params);

        // Forces only
        let store = template.clone();
        let mut out = vec![NVec2::zeros(); n];
        forces.accumulate_forces(&store, &mut out); // warm up

        let t0 = Instant::now();
        for _ in 0..steps {
            forces.accumulate_forces(&store, &mut out);
        }
        let forces_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        // Full tick including collisions
        let mut store = template.clone();
        euler_step(&mut store, &forces, &params); // warm up

        let t1 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut store, &forces, &params);
        }
        let step_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!("N = {:5}, forces = {:10.3} us, step = {:10.3} us", n, forces_per_step * 1e6, step_per_step * 1e6);
    }
}

/// Full-tick cost in CSV form, how many particles fit in one 16 ms frame
pub fn bench_step_curve() {
    println!("N,step_ms");

    for n in (16..=1024).step_by(16) {
        // Small n: average over more ticks to smooth noise
        let steps = if n <= 256 { 50 } else { 5 };

        let params = Parameters::default();
        let forces = default_forces(&params);
        let mut store = make_store(n, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut store, &forces, &params);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
