//! Verlet integration pass.

use crate::float::Float;
use crate::particle::Particle;

/// Advance every movable particle by one tick.
///
/// The damped implicit velocity is carried forward, the old position becomes
/// the previous one, and `gravity` is added to y. Anchors are skipped.
pub fn integrate<F: Float>(particles: &mut [Particle<F>], damping: F, gravity: F) {
    for p in particles.iter_mut() {
        if !p.movable {
            continue;
        }
        let delta = p.damped_velocity(damping);
        p.prev_pos = p.pos;
        p.pos += delta;
        p.pos.y = p.pos.y + gravity;
    }
}
