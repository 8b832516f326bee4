//! Square simulation domain with clamp-and-reflect walls.

use crate::float::Float;
use crate::mass_point::MassPoint;

/// Which walls a mass point touched during one collision check.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub x: bool,
    pub y: bool,
}

impl Contact {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Axis-aligned square centered on the origin.
///
/// A point whose edge (`|coord| + collide_radius`) reaches the wall is placed
/// back at `±(half_extent - collide_radius)` and that velocity component is
/// reversed. Both axes use the same clamp formula.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub half_extent: F,
}

impl<F: Float> Bounds<F> {
    pub fn new(half_extent: F) -> Self {
        Bounds { half_extent }
    }

    fn clamp_axis(&self, coord: &mut F, velocity: &mut F, radius: F) -> bool {
        if coord.abs() + radius < self.half_extent {
            return false;
        }
        if *coord > F::zero() {
            *coord = self.half_extent - radius;
        } else if *coord < F::zero() {
            *coord = -self.half_extent + radius;
        }
        *velocity = -*velocity;
        true
    }

    /// Clamp `point` into the domain, reflecting velocity on each wall hit.
    pub fn collide(&self, point: &mut MassPoint<F>) -> Contact {
        let radius = point.collide_radius;
        let x = self.clamp_axis(&mut point.position.x, &mut point.velocity.x, radius);
        let y = self.clamp_axis(&mut point.position.y, &mut point.velocity.y, radius);
        Contact { x, y }
    }
}
