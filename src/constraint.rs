//! Rigid-length links between particles and the relaxation pass over them.

use crate::float::Float;
use crate::particle::{Particle, ParticleId};
use alloc::vec::Vec;
use core::ops::Index;

/// Links shorter than this are skipped by [`relax`] instead of dividing by
/// a vanishing length.
pub const DEGENERATE_LENGTH_EPSILON: f32 = 1e-6;

/// A distance constraint between two particles.
///
/// Endpoints are ids into the particle store, so a correction made through
/// one link is seen by every other link sharing that particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link<F: Float> {
    a: ParticleId,
    b: ParticleId,
    rest_length: F,
}

impl<F: Float> Link<F> {
    /// Endpoints are not checked here; [`SimulationBuilder`](crate::SimulationBuilder)
    /// is the only way links reach a store, and it validates them first.
    pub(crate) fn new(a: ParticleId, b: ParticleId, rest_length: F) -> Self {
        Link { a, b, rest_length }
    }

    pub fn a(&self) -> ParticleId { self.a }
    pub fn b(&self) -> ParticleId { self.b }
    pub fn endpoints(&self) -> (ParticleId, ParticleId) { (self.a, self.b) }
    pub fn rest_length(&self) -> F { self.rest_length }

    /// Current distance between the endpoints.
    ///
    /// # Panics
    ///
    /// If `particles` is not the slice this link was built against and an
    /// endpoint index is out of range.
    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a.0].pos.distance(particles[self.b.0].pos)
    }

    /// Relax this link once. Returns `false` when a movable endpoint sits
    /// (nearly) on the other one and no correction was applied.
    ///
    /// The correction is linearized: half of `(rest - len) / len` of the
    /// separation vector goes to each movable endpoint. An anchored endpoint
    /// does not take up the other half.
    ///
    /// # Panics
    ///
    /// If an endpoint index is out of range for `particles`.
    pub fn solve(&self, particles: &mut [Particle<F>]) -> bool {
        if !particles[self.a.0].movable && !particles[self.b.0].movable {
            return true; // both pinned
        }
        let delta = particles[self.b.0].pos - particles[self.a.0].pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(DEGENERATE_LENGTH_EPSILON)) {
            return false;
        }

        let difference = self.rest_length - dist;
        let percent = difference / dist / F::two();
        let offset = delta.scale(percent);

        if particles[self.a.0].movable {
            particles[self.a.0].pos -= offset;
        }
        if particles[self.b.0].movable {
            particles[self.b.0].pos += offset;
        }
        true
    }
}

/// Stable handle to a link, also the key for its [`LinkStyle`](crate::LinkStyle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub(crate) usize);

impl LinkId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered list of links. Order is the solve order and never changes.
#[derive(Clone, Debug, Default)]
pub struct LinkStore<F: Float> {
    links: Vec<Link<F>>,
}

impl<F: Float> LinkStore<F> {
    pub fn new() -> Self {
        LinkStore { links: Vec::new() }
    }

    pub fn push(&mut self, link: Link<F>) -> LinkId {
        let id = LinkId(self.links.len());
        self.links.push(link);
        id
    }

    pub fn get(&self, id: LinkId) -> Option<&Link<F>> {
        self.links.get(id.0)
    }

    pub fn len(&self) -> usize { self.links.len() }
    pub fn is_empty(&self) -> bool { self.links.is_empty() }
    pub fn as_slice(&self) -> &[Link<F>] { &self.links }

    pub fn iter(&self) -> core::slice::Iter<'_, Link<F>> {
        self.links.iter()
    }

    /// Links touching `particle`, in solve order.
    pub fn incident(&self, particle: ParticleId) -> impl Iterator<Item = LinkId> + '_ {
        self.links
            .iter()
            .enumerate()
            .filter(move |(_, l)| l.a == particle || l.b == particle)
            .map(|(i, _)| LinkId(i))
    }
}

impl<F: Float> Index<LinkId> for LinkStore<F> {
    type Output = Link<F>;
    fn index(&self, id: LinkId) -> &Link<F> {
        &self.links[id.0]
    }
}

/// One relaxation pass over `links` in list order. Returns the number of
/// degenerate links that were skipped.
///
/// # Panics
///
/// If `links` and `particles` come from different simulations and an
/// endpoint index is out of range.
pub fn relax<F: Float>(links: &[Link<F>], particles: &mut [Particle<F>]) -> usize {
    let mut skipped = 0;
    for (i, link) in links.iter().enumerate() {
        if !link.solve(particles) {
            log::trace!("link {} skipped: endpoints {} and {} coincide", i, link.a.0, link.b.0);
            skipped += 1;
        }
    }
    skipped
}
