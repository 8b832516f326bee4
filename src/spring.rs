//! Damped springs between two mass points.

use crate::float::Float;
use crate::mass_point::MassPoint;
use crate::vec::Vec2;

/// A damped elastic link between mass points `a` and `b`.
///
/// Endpoints are indices into the simulation's mass-point arena. The
/// `spring_force`, `force_a` and `force_b` fields hold the values computed by
/// the most recent [`apply_forces`](Spring::apply_forces) call.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub dampening: F,
    pub spring_const: F,
    pub rest_length: F,
    pub spring_force: F,
    pub force_a: Vec2<F>,
    pub force_b: Vec2<F>,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, spring_const: F, dampening: F) -> Self {
        Spring {
            a,
            b,
            dampening,
            spring_const,
            rest_length,
            spring_force: F::zero(),
            force_a: Vec2::zero(),
            force_b: Vec2::zero(),
        }
    }

    /// Evaluate the spring and push both endpoints' velocities immediately.
    ///
    /// A positive force pulls `a` toward `b` and `b` toward `a`. Coincident
    /// endpoints have no direction and receive no force.
    pub fn apply_forces(&mut self, mass_points: &mut [MassPoint<F>], dt: F) {
        debug_assert!(
            self.a < mass_points.len() && self.b < mass_points.len(),
            "spring endpoint out of bounds"
        );
        let pa = mass_points[self.a];
        let pb = mass_points[self.b];

        let displacement = pb.position - pa.position;
        let direction = displacement.normalize();
        let extension = displacement.length() - self.rest_length;
        let damping = direction.dot(pb.velocity - pa.velocity);

        self.spring_force = extension * self.spring_const + damping * self.dampening;
        self.force_a = direction.scale(self.spring_force);
        self.force_b = -self.force_a;

        mass_points[self.a].apply_force(self.force_a, dt);
        mass_points[self.b].apply_force(self.force_b, dt);
    }
}
