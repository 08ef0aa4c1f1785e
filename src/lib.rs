//! Verlet rope and cloth relaxation in two dimensions.
//!
//! `strand` advances a fixed set of particles joined by rigid-length links.
//! Each [`Simulation::step`] integrates every movable particle once, then
//! alternates a link relaxation pass and a boundary pass a fixed number of
//! times. The host owns the loop, the clock and the drawing; it calls `step`
//! once per tick and reads positions back afterwards.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity, per-tick damping and gravity
//! - **Link relaxation**: linearized distance corrections in list order
//! - **Bounded domain**: single-edge clamp with restitution
//! - **Arena topology**: particles and links addressed by stable ids
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! ```
//! use strand::scene::default_rope;
//!
//! let mut sim = default_rope().unwrap();
//! for _ in 0..60 {
//!     sim.step();
//! }
//! for link in sim.renderable_links() {
//!     let _ = (link.from, link.to, link.color);
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod style;
pub mod integrator;
pub mod bounds;
pub mod simulation;
pub mod chain;
pub mod scene;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::{Particle, ParticleId, ParticleStore};
pub use constraint::{relax, Link, LinkId, LinkStore};
pub use style::{Color, LinkStyle};
pub use integrator::integrate;
pub use bounds::{enforce, Bounds, Edge};
pub use simulation::{RenderLink, Simulation, SimulationBuilder};
pub use chain::Chain;
pub use config::SimConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::SimError;
