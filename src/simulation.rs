//! The step driver: owns the particle and link stores and advances them one
//! tick at a time.

use crate::bounds::enforce;
use crate::config::SimConfig;
use crate::constraint::{relax, Link, LinkId, LinkStore, DEGENERATE_LENGTH_EPSILON};
use crate::error::SimError;
use crate::float::Float;
use crate::integrator::integrate;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::{Particle, ParticleId, ParticleStore};
use crate::style::{Color, LinkStyle};
use crate::vec::Vec2;
use alloc::vec::Vec;

/// A built simulation with fixed topology.
///
/// The host calls [`step`](Self::step) once per tick and reads positions back
/// through the accessors in between. Stepping needs `&mut self`, so reads can
/// never overlap a step.
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    particles: ParticleStore<F>,
    links: LinkStore<F>,
    styles: Vec<LinkStyle>,
    config: SimConfig<F>,
    tick: u64,
}

/// A link ready to draw: endpoint positions and the colour to use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderLink<F: Float> {
    pub id: LinkId,
    pub from: Vec2<F>,
    pub to: Vec2<F>,
    pub color: Color,
}

impl<F: Float> Simulation<F> {
    /// Start describing a simulation with the given configuration.
    pub fn builder(config: SimConfig<F>) -> SimulationBuilder<F> {
        SimulationBuilder::new(config)
    }

    /// Advance by exactly one tick: integrate, then `iterations` rounds of
    /// link relaxation followed by boundary enforcement.
    pub fn step(&mut self) {
        self.step_observed(&mut NoOpStepObserver);
    }

    /// [`step`](Self::step), reporting progress to `observer`.
    pub fn step_observed<O: StepObserver>(&mut self, observer: &mut O) {
        let config = &self.config;
        let particles = self.particles.as_mut_slice();

        integrate(particles, config.damping, config.gravity);
        observer.on_integrate();

        let mut skipped_total = 0;
        let mut contacts_total = 0;
        for round in 0..config.iterations {
            let skipped = relax(self.links.as_slice(), particles);
            let contacts = enforce(particles, &config.bounds, config.damping, config.restitution);
            observer.on_relaxation_round(round, skipped, contacts);
            skipped_total += skipped;
            contacts_total += contacts;
        }

        self.tick += 1;
        if skipped_total > 0 || contacts_total > 0 {
            log::trace!(
                "tick {}: {} degenerate link solves skipped, {} boundary contacts",
                self.tick,
                skipped_total,
                contacts_total,
            );
        }
        observer.on_step_complete(self.tick);
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 { self.tick }
    pub fn config(&self) -> &SimConfig<F> { &self.config }

    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn link_count(&self) -> usize { self.links.len() }

    pub fn particles(&self) -> &[Particle<F>] { self.particles.as_slice() }
    pub fn particle(&self, id: ParticleId) -> Option<&Particle<F>> { self.particles.get(id) }

    pub fn positions(&self) -> impl Iterator<Item = Vec2<F>> + '_ {
        self.particles.iter().map(|p| p.pos)
    }

    pub fn links(&self) -> &[Link<F>] { self.links.as_slice() }
    pub fn link(&self, id: LinkId) -> Option<&Link<F>> { self.links.get(id) }
    pub fn style(&self, id: LinkId) -> Option<&LinkStyle> { self.styles.get(id.0) }

    /// Links touching `particle`, in solve order.
    pub fn incident_links(&self, particle: ParticleId) -> impl Iterator<Item = LinkId> + '_ {
        self.links.incident(particle)
    }

    /// Current endpoint positions of every link, in solve order.
    pub fn link_segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.links
            .iter()
            .map(move |l| (self.particles[l.a()].pos, self.particles[l.b()].pos))
    }

    /// Links whose style is renderable, with the colour to draw them in.
    pub fn renderable_links(&self) -> impl Iterator<Item = RenderLink<F>> + '_ {
        self.links
            .iter()
            .zip(self.styles.iter())
            .enumerate()
            .filter(|(_, (_, style))| style.renderable)
            .map(move |(i, (l, style))| RenderLink {
                id: LinkId(i),
                from: self.particles[l.a()].pos,
                to: self.particles[l.b()].pos,
                color: style.display_color(),
            })
    }
}

/// Collects particles and links, validating them, and produces a
/// [`Simulation`].
///
/// ```
/// use strand::{SimConfig, Simulation, Vec2};
///
/// let mut builder = Simulation::builder(SimConfig::<f32>::new());
/// let top = builder.anchor(Vec2::new(540.0, 50.0));
/// let bob = builder.particle(Vec2::new(600.0, 120.0));
/// builder.link(top, bob).unwrap();
/// let mut sim = builder.build().unwrap();
/// sim.step();
/// assert_eq!(sim.tick(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationBuilder<F: Float> {
    config: SimConfig<F>,
    particles: ParticleStore<F>,
    links: LinkStore<F>,
    styles: Vec<LinkStyle>,
}

impl<F: Float> SimulationBuilder<F> {
    pub fn new(config: SimConfig<F>) -> Self {
        SimulationBuilder {
            config,
            particles: ParticleStore::new(),
            links: LinkStore::new(),
            styles: Vec::new(),
        }
    }

    /// Add a movable particle at rest.
    pub fn particle(&mut self, pos: Vec2<F>) -> ParticleId {
        self.particles.push(Particle::new(pos))
    }

    /// Add a movable particle whose first-tick velocity is `pos - prev_pos`.
    pub fn particle_with_previous(&mut self, pos: Vec2<F>, prev_pos: Vec2<F>) -> ParticleId {
        self.particles.push(Particle::with_previous(pos, prev_pos))
    }

    /// Add a pinned particle.
    pub fn anchor(&mut self, pos: Vec2<F>) -> ParticleId {
        self.particles.push(Particle::anchored(pos))
    }

    /// Pin an already added particle, dropping its velocity.
    pub fn pin(&mut self, id: ParticleId) -> Result<(), SimError> {
        let count = self.particles.len();
        match self.particles.get_mut(id) {
            Some(p) => {
                p.pin();
                Ok(())
            }
            None => Err(rejected(SimError::ParticleOutOfBounds { index: id.0, count })),
        }
    }

    /// Link two particles at their current distance.
    pub fn link(&mut self, a: ParticleId, b: ParticleId) -> Result<LinkId, SimError> {
        self.link_styled(a, b, LinkStyle::default())
    }

    /// Link two particles at their current distance with a drawing style.
    pub fn link_styled(
        &mut self,
        a: ParticleId,
        b: ParticleId,
        style: LinkStyle,
    ) -> Result<LinkId, SimError> {
        let (pa, pb) = self.endpoints(a, b)?;
        let rest_length = pa.pos.distance(pb.pos);
        self.push_link(a, b, rest_length, style)
    }

    /// Link two particles with an explicit rest length.
    pub fn link_with_rest_length(
        &mut self,
        a: ParticleId,
        b: ParticleId,
        rest_length: F,
    ) -> Result<LinkId, SimError> {
        self.push_link(a, b, rest_length, LinkStyle::default())
    }

    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn link_count(&self) -> usize { self.links.len() }
    pub fn config(&self) -> &SimConfig<F> { &self.config }

    /// Validate the configuration and particle positions, then freeze the
    /// topology.
    pub fn build(self) -> Result<Simulation<F>, SimError> {
        self.config.validate().map_err(rejected)?;
        if let Some(index) = self.particles.iter().position(|p| !(p.pos.is_finite() && p.prev_pos.is_finite())) {
            return Err(rejected(SimError::NonFinitePosition { index }));
        }

        log::debug!(
            "simulation built: {} particles, {} links, {} iterations, bounds {}x{}",
            self.particles.len(),
            self.links.len(),
            self.config.iterations,
            self.config.bounds.width,
            self.config.bounds.height,
        );

        Ok(Simulation {
            particles: self.particles,
            links: self.links,
            styles: self.styles,
            config: self.config,
            tick: 0,
        })
    }

    fn endpoints(&self, a: ParticleId, b: ParticleId) -> Result<(Particle<F>, Particle<F>), SimError> {
        let count = self.particles.len();
        let lookup = |id: ParticleId| {
            self.particles
                .get(id)
                .copied()
                .ok_or(SimError::ParticleOutOfBounds { index: id.0, count })
        };
        let pa = lookup(a).map_err(rejected)?;
        let pb = lookup(b).map_err(rejected)?;
        if a == b {
            return Err(rejected(SimError::SelfLink { index: a.0 }));
        }
        for (id, p) in [(a, &pa), (b, &pb)] {
            if !(p.pos.is_finite() && p.prev_pos.is_finite()) {
                return Err(rejected(SimError::NonFinitePosition { index: id.0 }));
            }
        }
        Ok((pa, pb))
    }

    fn push_link(
        &mut self,
        a: ParticleId,
        b: ParticleId,
        rest_length: F,
        style: LinkStyle,
    ) -> Result<LinkId, SimError> {
        let (pa, pb) = self.endpoints(a, b)?;
        if !rest_length.is_finite() || rest_length < F::zero() {
            return Err(rejected(SimError::InvalidRestLength));
        }

        // Two coincident anchors give an inert link; anything movable would
        // sit on the degenerate guard forever.
        let eps = F::from_f32(DEGENERATE_LENGTH_EPSILON);
        let degenerate = rest_length.is_near_zero(eps) || pa.pos.distance(pb.pos).is_near_zero(eps);
        if degenerate && (pa.movable || pb.movable) {
            return Err(rejected(SimError::ZeroLengthLink { a: a.0, b: b.0 }));
        }

        let id = self.links.push(Link::new(a, b, rest_length));
        self.styles.push(style);
        Ok(id)
    }
}

impl<F: Float> Default for SimulationBuilder<F> {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

pub(crate) fn rejected(err: SimError) -> SimError {
    log::warn!("simulation setup rejected: {}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        integrated: usize,
        rounds: usize,
        completed: u64,
    }

    impl StepObserver for Counter {
        fn on_integrate(&mut self) { self.integrated += 1; }
        fn on_relaxation_round(&mut self, _round: usize, _skipped: usize, _contacts: usize) {
            self.rounds += 1;
        }
        fn on_step_complete(&mut self, tick: u64) { self.completed = tick; }
    }

    #[test]
    fn runs_exactly_configured_rounds() {
        let mut builder = Simulation::builder(SimConfig::<f32>::new().with_iterations(7));
        builder.particle(Vec2::new(10.0, 10.0));
        let mut sim = builder.build().unwrap();

        let mut counter = Counter { integrated: 0, rounds: 0, completed: 0 };
        sim.step_observed(&mut counter);
        sim.step_observed(&mut counter);
        assert_eq!(counter.integrated, 2);
        assert_eq!(counter.rounds, 14);
        assert_eq!(counter.completed, 2);
        assert_eq!(sim.tick(), 2);
    }

    #[test]
    fn styles_follow_links() {
        let mut builder: SimulationBuilder<f32> = SimulationBuilder::default();
        let a = builder.anchor(Vec2::new(0.0, 0.0));
        let b = builder.particle(Vec2::new(10.0, 0.0));
        let c = builder.particle(Vec2::new(20.0, 0.0));
        let shown = builder.link_styled(a, b, LinkStyle::colored(Color::BLUE)).unwrap();
        let hidden = builder.link_styled(b, c, LinkStyle::hidden()).unwrap();
        let sim = builder.build().unwrap();

        assert_eq!(sim.style(shown).map(|s| s.display_color()), Some(Color::BLUE));
        assert_eq!(sim.style(hidden).map(|s| s.renderable), Some(false));
        let drawn: Vec<RenderLink<f32>> = sim.renderable_links().collect();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].id, shown);
        assert_eq!(drawn[0].to, Vec2::new(10.0, 0.0));
        assert_eq!(sim.link_segments().count(), 2);
    }

    #[test]
    fn non_finite_endpoint_reported_by_index() {
        let mut builder: SimulationBuilder<f32> = SimulationBuilder::default();
        let a = builder.anchor(Vec2::new(0.0, 0.0));
        let b = builder.particle(Vec2::new(f32::NAN, 5.0));
        assert_eq!(builder.link(a, b), Err(SimError::NonFinitePosition { index: 1 }));
        assert_eq!(
            builder.link_with_rest_length(b, a, 5.0),
            Err(SimError::NonFinitePosition { index: 1 }),
        );
        assert_eq!(builder.link_count(), 0);
    }

    #[test]
    fn pin_drops_velocity() {
        let mut builder: SimulationBuilder<f32> = SimulationBuilder::default();
        let p = builder.particle_with_previous(Vec2::new(5.0, 5.0), Vec2::new(0.0, 0.0));
        builder.pin(p).unwrap();
        assert_eq!(
            builder.pin(ParticleId(9)),
            Err(SimError::ParticleOutOfBounds { index: 9, count: 1 }),
        );
        let sim = builder.build().unwrap();
        let particle = sim.particle(p).unwrap();
        assert!(!particle.movable);
        assert_eq!(particle.prev_pos, particle.pos);
    }
}
