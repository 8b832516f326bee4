//! Step observer trait for monitoring simulation progress.

use crate::bounds::Contact;

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor the driver (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called when a mass point hit a wall during integration.
    fn on_collision(&mut self, _mass_point: usize, _contact: Contact) {}

    /// Called after every mass point has been integrated and collided.
    fn on_integrate(&mut self) {}

    /// Called after the spring pass.
    fn on_springs(&mut self) {}

    /// Called after a pressure model pushed its members outward.
    fn on_pressure(&mut self, _model: usize, _area: f64, _pressure: f64) {}

    /// Called when a pressure model was skipped because its area collapsed.
    fn on_pressure_skipped(&mut self, _model: usize) {}

    /// Called when an authored chain was closed into a ring.
    fn on_ring_closed(&mut self, _model: usize, _springs: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards per-model area and pressure to the `log` facade at trace level.
pub struct LogStepObserver;

impl StepObserver for LogStepObserver {
    fn on_collision(&mut self, mass_point: usize, contact: Contact) {
        log::trace!("mass point {} hit wall (x: {}, y: {})", mass_point, contact.x, contact.y);
    }

    fn on_pressure(&mut self, model: usize, area: f64, pressure: f64) {
        log::trace!("model {}: area {:.3}, pressure {:.3}", model, area, pressure);
    }

    fn on_pressure_skipped(&mut self, model: usize) {
        log::trace!("model {}: pressure skipped", model);
    }

    fn on_ring_closed(&mut self, model: usize, springs: usize) {
        log::trace!("model {} closed with {} springs", model, springs);
    }
}
