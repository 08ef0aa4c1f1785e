//! Boundary enforcement: clamp particles to the domain and bounce them.

use crate::error::SimError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// The rectangle `[0, width] x [0, height]` particles live in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub width: F,
    pub height: F,
}

/// Which wall a particle was pushed back from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Right,
    Left,
    Bottom,
    Top,
}

impl<F: Float> Bounds<F> {
    pub fn new(width: F, height: F) -> Self {
        Bounds { width, height }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let valid = |v: F| v.is_finite() && v > F::zero();
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(SimError::InvalidBounds)
        }
    }

    /// Whether `p` lies inside the closed rectangle.
    pub fn contains(&self, p: Vec2<F>) -> bool {
        p.x >= F::zero() && p.x <= self.width && p.y >= F::zero() && p.y <= self.height
    }

    /// Push one particle back inside, correcting at most one edge.
    ///
    /// Edges are tested right, left, bottom, top; the first violated one wins
    /// and the others are left for a later call. The clamped axis gets a
    /// previous position that makes the next implicit velocity
    /// `-(damped velocity) * restitution`.
    pub fn enforce_one(&self, p: &mut Particle<F>, damping: F, restitution: F) -> Option<Edge> {
        if !p.movable {
            return None;
        }
        let delta = p.damped_velocity(damping);

        if p.pos.x > self.width {
            p.pos.x = self.width;
            p.prev_pos.x = p.pos.x + delta.x * restitution;
            Some(Edge::Right)
        } else if p.pos.x < F::zero() {
            p.pos.x = F::zero();
            p.prev_pos.x = p.pos.x + delta.x * restitution;
            Some(Edge::Left)
        } else if p.pos.y > self.height {
            p.pos.y = self.height;
            p.prev_pos.y = p.pos.y + delta.y * restitution;
            Some(Edge::Bottom)
        } else if p.pos.y < F::zero() {
            p.pos.y = F::zero();
            p.prev_pos.y = p.pos.y + delta.y * restitution;
            Some(Edge::Top)
        } else {
            None
        }
    }
}

/// One boundary pass over every particle. Returns how many were corrected.
pub fn enforce<F: Float>(
    particles: &mut [Particle<F>],
    bounds: &Bounds<F>,
    damping: F,
    restitution: F,
) -> usize {
    let mut contacts = 0;
    for p in particles.iter_mut() {
        if bounds.enforce_one(p, damping, restitution).is_some() {
            contacts += 1;
        }
    }
    contacts
}
