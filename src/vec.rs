//! 2D vector type for planar balloon physics.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// 2D vector. Used for positions and velocities in simulation space and for
/// pointer coordinates in display space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Vector with both components set to the same value.
    pub fn splat(value: F) -> Self { Vec2 { x: value, y: value } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (returns scalar): self.x * other.y - self.y * other.x
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. Returns the zero vector if the length is near
    /// zero, which turns a coincident-endpoint force into no force at all.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Mirror across the y axis (negate x).
    pub fn flip_x(self) -> Self { Vec2 { x: -self.x, y: self.y } }

    /// Mirror across the x axis (negate y). Converts between y-up and y-down.
    pub fn flip_y(self) -> Self { Vec2 { x: self.x, y: -self.y } }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec2::<f32>::zero();
        assert_eq!(v.normalize(), Vec2::zero());
    }

    #[test]
    fn normalize_unit_length() {
        let n = Vec2::new(-6.0f64, 8.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x + 0.6).abs() < 1e-12);
    }

    #[test]
    fn flips_negate_one_axis() {
        let v = Vec2::new(2.0f32, -3.0);
        assert_eq!(v.flip_x(), Vec2::new(-2.0, -3.0));
        assert_eq!(v.flip_y(), Vec2::new(2.0, 3.0));
        assert_eq!(v.flip_y().flip_y(), v);
    }

    #[test]
    fn cross_of_axes() {
        let i = Vec2::new(1.0f32, 0.0);
        let j = Vec2::new(0.0f32, 1.0);
        assert_eq!(i.cross(j), 1.0);
        assert_eq!(j.cross(i), -1.0);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn non_finite_detected() {
        assert!(Vec2::new(1.0f32, 2.0).is_finite());
        assert!(!Vec2::new(f32::NAN, 2.0).is_finite());
        assert!(!Vec2::new(0.0, f32::INFINITY).is_finite());
    }
}
