//! Mapping between simulation space and display space.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// Converts between the y-up simulation square centered on the origin and a
/// y-down display whose origin is the top-left corner.
///
/// The two conversions are exact inverses of each other (up to rounding).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport<F: Float> {
    half_extent: F,
    scale: F,
}

impl<F: Float> Viewport<F> {
    /// Viewport with an explicit pixels-per-unit scale.
    pub fn new(half_extent: F, scale: F) -> Result<Self, PhysicsError> {
        if !scale.is_finite() || scale <= F::zero() {
            return Err(PhysicsError::InvalidScale);
        }
        if !half_extent.is_finite() || half_extent <= F::zero() {
            return Err(PhysicsError::InvalidScale);
        }
        Ok(Viewport { half_extent, scale })
    }

    /// Viewport that fits the whole simulation square into a square window
    /// `window_length` pixels wide.
    pub fn fit_window(half_extent: F, window_length: F) -> Result<Self, PhysicsError> {
        Self::new(half_extent, window_length / (F::two() * half_extent))
    }

    pub fn scale(&self) -> F {
        self.scale
    }

    pub fn half_extent(&self) -> F {
        self.half_extent
    }

    /// Simulation → display.
    pub fn to_screen_space(&self, point: Vec2<F>) -> Vec2<F> {
        (point.flip_y() + Vec2::splat(self.half_extent)).scale(self.scale)
    }

    /// Display → simulation.
    pub fn to_simulation_space(&self, point: Vec2<F>) -> Vec2<F> {
        (point.scale(F::one() / self.scale) - Vec2::splat(self.half_extent)).flip_y()
    }

    /// Length in simulation units → length in pixels (e.g. a collide radius).
    pub fn to_screen_length(&self, length: F) -> F {
        length * self.scale
    }
}
