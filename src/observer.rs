//! Step observer trait for monitoring simulation progress.

/// Hooks called by [`Simulation::step_observed`](crate::Simulation::step_observed).
///
/// All methods default to no-ops. Useful for debugging overlays and for
/// counting contacts without touching the core.
pub trait StepObserver {
    /// Called once the integrator pass has run.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation round (solve + enforce). `skipped` is the
    /// number of degenerate links left uncorrected, `contacts` the number of
    /// particles pushed back inside the bounds.
    fn on_relaxation_round(&mut self, _round: usize, _skipped: usize, _contacts: usize) {}

    /// Called when the step is complete, with the new tick count.
    fn on_step_complete(&mut self, _tick: u64) {}
}

/// Observer that ignores everything. Used by `Simulation::step`.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
