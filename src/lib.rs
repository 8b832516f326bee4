//! Pressure-filled spring-mass balloons for interactive 2D toys.
//!
//! `gasbag` simulates closed rings of point masses joined by damped springs and
//! inflated by an ideal-gas-style internal pressure. A pointer drags out a
//! chain of mass points; releasing it closes the chain into a balloon.
//!
//! # Features
//!
//! - **Semi-implicit Euler**: forces become velocity changes immediately
//! - **Damped springs**: Hooke stiffness plus damping along the spring axis
//! - **Pressure rings**: `nRT / area` pushed outward from each ring's centroid
//! - **Square domain**: clamp-and-reflect walls
//! - **Authoring**: pointer-driven chain creation and display/simulation mapping
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use gasbag::{NoOpStepObserver, Simulation, SimulationConfig, Vec2};
//!
//! let mut sim: Simulation<f32> = Simulation::new(SimulationConfig::new()).unwrap();
//! sim.spawn_ring(Vec2::new(0.0, 0.0), 100.0, 16).unwrap();
//! let dt = sim.config().dt();
//! for _ in 0..60 {
//!     sim.step(dt, &mut NoOpStepObserver);
//! }
//! assert_eq!(sim.springs().len(), 16);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod mass_point;
pub mod spring;
pub mod pressure;
pub mod bounds;
pub mod viewport;
pub mod authoring;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use mass_point::MassPoint;
pub use spring::Spring;
pub use pressure::{AreaEstimator, PressureModel};
pub use bounds::{Bounds, Contact};
pub use viewport::Viewport;
pub use authoring::{ChainAuthoring, InputSample};
pub use simulation::Simulation;
pub use config::{GasConfig, SimulationConfig, SpawnTemplate, SpringConfig};
pub use observer::{LogStepObserver, NoOpStepObserver, StepObserver};
pub use error::PhysicsError;
