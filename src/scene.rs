//! The stock rope scene: a short rope hanging from two anchors, ending in a
//! braced square.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::float::Float;
use crate::simulation::Simulation;
use crate::vec::Vec2;

/// `(x, y, prev_x, prev_y, movable)` for each particle.
const PARTICLES: [(f32, f32, f32, f32, bool); 8] = [
    (540.0, 50.0, 540.0, 50.0, false),
    (540.0, 50.0, 540.0, 50.0, false),
    (500.0, 100.0, 500.0, 100.0, true),
    (200.0, 125.0, 200.0, 125.0, true),
    (350.0, 175.0, 250.0, 175.0, true),
    (450.0, 175.0, 450.0, 175.0, true),
    (450.0, 275.0, 450.0, 275.0, true),
    (350.0, 275.0, 300.0, 240.0, true),
];

/// Particle index pairs, in solve order. The last four form a square with
/// one diagonal, so particle 7 has three links and 4 and 5 sit on a cycle.
const LINKS: [(usize, usize); 9] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (7, 5),
];

/// Build the stock scene with the given configuration. Rest lengths are the
/// distances at setup.
pub fn reference_rope<F: Float>(config: SimConfig<F>) -> Result<Simulation<F>, SimError> {
    let mut builder = Simulation::builder(config);
    let ids: alloc::vec::Vec<_> = PARTICLES
        .iter()
        .map(|&(x, y, px, py, movable)| {
            let pos = Vec2::new(F::from_f32(x), F::from_f32(y));
            let prev = Vec2::new(F::from_f32(px), F::from_f32(py));
            if movable {
                builder.particle_with_previous(pos, prev)
            } else {
                builder.anchor(pos)
            }
        })
        .collect();

    for &(a, b) in LINKS.iter() {
        builder.link(ids[a], ids[b])?;
    }
    builder.build()
}

/// [`reference_rope`] with the default constants.
pub fn default_rope() -> Result<Simulation<f32>, SimError> {
    reference_rope(SimConfig::new())
}
