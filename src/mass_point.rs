//! Point masses integrated with semi-implicit Euler.

use crate::float::Float;
use crate::vec::Vec2;

/// A point particle with explicit velocity state.
///
/// Forces never accumulate: every force contribution is turned into a velocity
/// change right away (`velocity += force * dt / mass`), and position follows
/// velocity once per step in [`integrate`](MassPoint::integrate).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MassPoint<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub collide_radius: F,
    pub mass: F,
}

impl<F: Float> MassPoint<F> {
    /// A resting mass point with the default collide radius of 5.
    pub fn new(position: Vec2<F>, mass: F) -> Self {
        MassPoint {
            position,
            velocity: Vec2::zero(),
            collide_radius: F::from_f32(5.0),
            mass,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2<F>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_collide_radius(mut self, radius: F) -> Self {
        self.collide_radius = radius;
        self
    }

    /// True when the mass can safely be used as a divisor.
    pub fn has_valid_mass(&self) -> bool {
        self.mass.is_finite() && self.mass > F::zero()
    }

    /// Add `force * dt / mass` to the velocity.
    pub fn apply_force(&mut self, force: Vec2<F>, dt: F) {
        self.velocity = self.velocity + force.scale(dt / self.mass);
    }

    /// Apply gravity as a downward force, then advance position by velocity.
    pub fn integrate(&mut self, gravity: F, dt: F) {
        self.apply_force(Vec2::new(F::zero(), -gravity), dt);
        self.position = self.position + self.velocity.scale(dt);
    }
}
