//! Configuration types for the simulation.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::pressure::AreaEstimator;
use crate::vec::Vec2;
use crate::viewport::Viewport;

/// Parameters for the springs created when a chain is closed into a ring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringConfig<F: Float> {
    /// Damping coefficient along the spring axis. Default: 20.
    pub dampening: F,
    /// Stiffness. Default: 100.
    pub spring_const: F,
    /// Rest length as a fraction of the neighbour distance at closing time.
    /// Default: 0.5, so fresh rings start out stretched.
    pub rest_length_factor: F,
}

impl<F: Float> Default for SpringConfig<F> {
    fn default() -> Self {
        SpringConfig {
            dampening: F::from_f32(20.0),
            spring_const: F::from_f32(100.0),
            rest_length_factor: F::half(),
        }
    }
}

/// Parameters for the gas inside each ring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GasConfig<F: Float> {
    /// Ideal-gas `nRT` term fixed when a ring is closed. Default: 200000.
    pub nrt: F,
    /// Extra multiplier on `nRT / area`. Default: 500.
    pub pressure_scale: F,
    /// Area estimator used by new rings. Default: approximate.
    pub area_estimator: AreaEstimator,
}

impl<F: Float> Default for GasConfig<F> {
    fn default() -> Self {
        GasConfig {
            nrt: F::from_f32(200_000.0),
            pressure_scale: F::from_f32(500.0),
            area_estimator: AreaEstimator::Approximate,
        }
    }
}

/// Initial state of every mass point spawned by authoring or `spawn_ring`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnTemplate<F: Float> {
    /// Default: 5.
    pub collide_radius: F,
    /// Default: 1.
    pub mass: F,
    /// Default: (-50, 10).
    pub velocity: Vec2<F>,
}

impl<F: Float> Default for SpawnTemplate<F> {
    fn default() -> Self {
        SpawnTemplate {
            collide_radius: F::from_f32(5.0),
            mass: F::one(),
            velocity: Vec2::new(F::from_f32(-50.0), F::from_f32(10.0)),
        }
    }
}

/// Configuration for a [`Simulation`](crate::Simulation).
///
/// # Builder Pattern
/// ```
/// use gasbag::config::SimulationConfig;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_gravity(200.0)
///     .with_frames_per_second(60)
///     .with_speed(1.0)
///     .with_window_length(800.0);
/// assert!((config.dt() - 1.0 / 60.0).abs() < 1e-6);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    /// Downward gravity, applied as a force divided by mass. Default: 200.
    pub gravity: F,
    /// Half the side of the square domain. Default: 500.
    pub half_extent: F,
    /// Target frame rate. Default: 60.
    pub frames_per_second: u32,
    /// Simulated seconds per real second. Default: 1.
    pub speed: F,
    /// Side of the square display window, in pixels. Default: 1000.
    pub window_length: F,
    pub spring: SpringConfig<F>,
    pub gas: GasConfig<F>,
    pub spawn: SpawnTemplate<F>,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            gravity: F::from_f32(200.0),
            half_extent: F::from_f32(500.0),
            frames_per_second: 60,
            speed: F::one(),
            window_length: F::from_f32(1000.0),
            spring: SpringConfig::default(),
            gas: GasConfig::default(),
            spawn: SpawnTemplate::default(),
        }
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_half_extent(mut self, half_extent: F) -> Self {
        self.half_extent = half_extent;
        self
    }

    pub fn with_frames_per_second(mut self, fps: u32) -> Self {
        self.frames_per_second = fps;
        self
    }

    pub fn with_speed(mut self, speed: F) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_window_length(mut self, window_length: F) -> Self {
        self.window_length = window_length;
        self
    }

    pub fn with_spring(mut self, spring: SpringConfig<F>) -> Self {
        self.spring = spring;
        self
    }

    pub fn with_gas(mut self, gas: GasConfig<F>) -> Self {
        self.gas = gas;
        self
    }

    pub fn with_area_estimator(mut self, estimator: AreaEstimator) -> Self {
        self.gas.area_estimator = estimator;
        self
    }

    pub fn with_spawn(mut self, spawn: SpawnTemplate<F>) -> Self {
        self.spawn = spawn;
        self
    }

    /// Fixed per-frame time step: `speed / frames_per_second`.
    ///
    /// Returns zero when the frame rate is zero; [`validate`](Self::validate)
    /// rejects such a config.
    pub fn dt(&self) -> F {
        if self.frames_per_second == 0 {
            return F::zero();
        }
        self.speed / F::from_f32(self.frames_per_second as f32)
    }

    /// Viewport that fits the domain into the configured window.
    pub fn viewport(&self) -> Result<Viewport<F>, PhysicsError> {
        Viewport::fit_window(self.half_extent, self.window_length)
    }

    /// Check everything a running simulation divides by or steps with.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.frames_per_second == 0 {
            return Err(PhysicsError::InvalidFrameRate);
        }
        let dt = self.dt();
        if !dt.is_finite() || dt <= F::zero() {
            return Err(PhysicsError::InvalidTimeStep);
        }
        if !self.spawn.mass.is_finite() || self.spawn.mass <= F::zero() {
            return Err(PhysicsError::InvalidMass);
        }
        self.viewport().map(|_| ())
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config: SimulationConfig<f32> = SimulationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.gas.nrt, 200_000.0);
        assert_eq!(config.spring.spring_const, 100.0);
    }

    #[test]
    fn dt_from_speed_and_fps() {
        let config: SimulationConfig<f64> = SimulationConfig::new()
            .with_speed(2.0)
            .with_frames_per_second(50);
        assert!((config.dt() - 0.04).abs() < 1e-12);
    }

    #[test]
    fn rejects_zero_fps() {
        let config: SimulationConfig<f32> = SimulationConfig::new().with_frames_per_second(0);
        assert_eq!(config.dt(), 0.0);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidFrameRate));
    }

    #[test]
    fn rejects_non_positive_speed() {
        let config: SimulationConfig<f32> = SimulationConfig::new().with_speed(0.0);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidTimeStep));
    }

    #[test]
    fn rejects_massless_spawn() {
        let spawn = SpawnTemplate { mass: 0.0f32, ..SpawnTemplate::default() };
        let config = SimulationConfig::new().with_spawn(spawn);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidMass));
    }

    #[test]
    fn rejects_empty_window() {
        let config: SimulationConfig<f32> = SimulationConfig::new().with_window_length(0.0);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidScale));
    }
}
