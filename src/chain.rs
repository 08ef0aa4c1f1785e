//! Rope helper: a straight run of particles joined end to end.

use crate::constraint::{LinkId, DEGENERATE_LENGTH_EPSILON};
use crate::error::SimError;
use crate::float::Float;
use crate::particle::ParticleId;
use crate::simulation::{rejected, SimulationBuilder};
use crate::vec::Vec2;
use alloc::vec::Vec;

/// Ids handed back by [`SimulationBuilder::chain`].
#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
    /// `segments + 1` particles from `start` to `end`.
    pub particles: Vec<ParticleId>,
    /// `segments` links, `links[i]` joins `particles[i]` and `particles[i + 1]`.
    pub links: Vec<LinkId>,
}

impl Chain {
    pub fn first(&self) -> Option<ParticleId> {
        self.particles.first().copied()
    }

    pub fn last(&self) -> Option<ParticleId> {
        self.particles.last().copied()
    }
}

impl<F: Float> SimulationBuilder<F> {
    /// Lay out `segments + 1` movable particles evenly between `start` and
    /// `end` and link neighbours at the segment length. Pin ends afterwards
    /// with [`pin`](Self::pin).
    ///
    /// Nothing is added to the builder when the chain is rejected.
    pub fn chain(&mut self, start: Vec2<F>, end: Vec2<F>, segments: usize) -> Result<Chain, SimError> {
        if segments == 0 {
            return Err(rejected(SimError::InsufficientSegments));
        }

        let first = self.particle_count();
        let last = first + segments;
        if !start.is_finite() {
            return Err(rejected(SimError::NonFinitePosition { index: first }));
        }
        if !end.is_finite() {
            return Err(rejected(SimError::NonFinitePosition { index: last }));
        }

        let n = F::from_f32(segments as f32);
        let segment_length = start.distance(end) / n;
        if !segment_length.is_finite() {
            return Err(rejected(SimError::InvalidRestLength));
        }
        if segment_length.is_near_zero(F::from_f32(DEGENERATE_LENGTH_EPSILON)) {
            return Err(rejected(SimError::ZeroLengthLink { a: first, b: first + 1 }));
        }
        let mut particles = Vec::with_capacity(segments + 1);
        let mut links = Vec::with_capacity(segments);

        for i in 0..=segments {
            let t = F::from_f32(i as f32) / n;
            particles.push(self.particle(start.lerp(end, t)));
        }

        for pair in particles.windows(2) {
            links.push(self.link_with_rest_length(pair[0], pair[1], segment_length)?);
        }

        Ok(Chain { particles, links })
    }
}
