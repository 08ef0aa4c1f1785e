//! Verlet particles and the store that owns them.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec;
use core::ops::Index;

/// A Verlet particle: position plus the previous position it came from.
///
/// Velocity is never stored; it is `pos - prev_pos`. A particle that is not
/// `movable` is an anchor and nothing in the step touches it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub movable: bool,
}

impl<F: Float> Particle<F> {
    /// A movable particle at rest.
    pub fn new(pos: Vec2<F>) -> Self {
        Particle { pos, prev_pos: pos, movable: true }
    }

    /// A movable particle whose initial velocity is `pos - prev_pos`.
    pub fn with_previous(pos: Vec2<F>, prev_pos: Vec2<F>) -> Self {
        Particle { pos, prev_pos, movable: true }
    }

    /// A pinned particle.
    pub fn anchored(pos: Vec2<F>) -> Self {
        Particle { pos, prev_pos: pos, movable: false }
    }

    /// Turn into an anchor, dropping any velocity.
    pub fn pin(&mut self) {
        self.movable = false;
        self.prev_pos = self.pos;
    }

    /// Implicit per-tick velocity.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Implicit velocity shrunk by `damping`, as used by the integrator and
    /// the boundary enforcer.
    pub fn damped_velocity(&self, damping: F) -> Vec2<F> {
        self.velocity().scale(damping)
    }
}

/// Stable handle to a particle. The index into its [`ParticleStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub(crate) usize);

impl ParticleId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Contiguous arena of particles. Ids are handed out in insertion order and
/// stay valid for the life of the store; particles are never removed.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore<F: Float> {
    particles: Vec<Particle<F>>,
}

impl<F: Float> ParticleStore<F> {
    pub fn new() -> Self {
        ParticleStore { particles: Vec::new() }
    }

    pub fn push(&mut self, particle: Particle<F>) -> ParticleId {
        let id = ParticleId(self.particles.len());
        self.particles.push(particle);
        id
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle<F>> {
        self.particles.get(id.0)
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle<F>> {
        self.particles.get_mut(id.0)
    }

    /// Whether `id` refers to a particle in this store.
    pub fn contains(&self, id: ParticleId) -> bool {
        id.0 < self.particles.len()
    }

    pub fn len(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }

    pub fn as_slice(&self) -> &[Particle<F>] { &self.particles }
    pub fn as_mut_slice(&mut self) -> &mut [Particle<F>] { &mut self.particles }

    pub fn iter(&self) -> core::slice::Iter<'_, Particle<F>> {
        self.particles.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticleId> {
        (0..self.particles.len()).map(ParticleId)
    }
}

impl<F: Float> Index<ParticleId> for ParticleStore<F> {
    type Output = Particle<F>;
    fn index(&self, id: ParticleId) -> &Particle<F> {
        &self.particles[id.0]
    }
}
