//! Gas-filled rings: area estimation and outward pressure forces.

use crate::float::Float;
use crate::mass_point::MassPoint;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Areas at or below this are treated as collapsed and exert no pressure.
pub const MIN_AREA: f32 = 1e-6;

/// How a [`PressureModel`] estimates its enclosed area each step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AreaEstimator {
    /// Ellipse through the nearest and farthest member from the centroid:
    /// `min_radius * max_radius * pi`.
    #[default]
    Approximate,
    /// Exact polygon area by the shoelace formula.
    Shoelace,
}

/// A closed ring of mass points that behaves like an ideal-gas balloon.
///
/// `pressure = nrt * pressure_scale / area`, pushed radially away from the
/// ring's centroid onto every member. `center`, `area` and `pressure` are
/// scratch values refreshed on every [`apply_forces`](PressureModel::apply_forces).
#[derive(Clone, Debug, PartialEq)]
pub struct PressureModel<F: Float> {
    pub mass_points: AllocVec<usize>,
    pub springs: AllocVec<usize>,
    pub center: Vec2<F>,
    pub pressure: F,
    pub nrt: F,
    pub pressure_scale: F,
    pub area: F,
    pub estimator: AreaEstimator,
}

impl<F: Float> PressureModel<F> {
    pub fn new(mass_points: AllocVec<usize>, nrt: F, pressure_scale: F) -> Self {
        PressureModel {
            mass_points,
            springs: AllocVec::new(),
            center: Vec2::zero(),
            pressure: F::zero(),
            nrt,
            pressure_scale,
            area: F::zero(),
            estimator: AreaEstimator::default(),
        }
    }

    pub fn with_estimator(mut self, estimator: AreaEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn len(&self) -> usize {
        self.mass_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass_points.is_empty()
    }

    fn update_center(&mut self, mass_points: &[MassPoint<F>]) {
        if self.mass_points.is_empty() {
            self.center = Vec2::zero();
            return;
        }
        let mut sum = Vec2::zero();
        for &i in &self.mass_points {
            sum = sum + mass_points[i].position;
        }
        self.center = sum.scale(F::one() / F::from_usize(self.mass_points.len()));
    }

    /// Refresh `center` and estimate `area` as an ellipse whose semi-axes are
    /// the smallest and largest member distances from the centroid.
    pub fn approximate_area(&mut self, mass_points: &[MassPoint<F>]) -> F {
        self.update_center(mass_points);

        let mut radii = self
            .mass_points
            .iter()
            .map(|&i| mass_points[i].position.distance(self.center));
        self.area = match radii.next() {
            Some(first) => {
                let (min_radius, max_radius) =
                    radii.fold((first, first), |(lo, hi), r| (lo.min(r), hi.max(r)));
                min_radius * max_radius * F::pi()
            }
            None => F::zero(),
        };
        self.area
    }

    /// Refresh `center` and compute the exact polygon area of the ring,
    /// walking members in ring order. Winding direction does not matter.
    pub fn shoelace_area(&mut self, mass_points: &[MassPoint<F>]) -> F {
        self.update_center(mass_points);

        let n = self.mass_points.len();
        if n < 3 {
            self.area = F::zero();
            return self.area;
        }
        let mut sum = F::zero();
        for i in 0..n {
            let a = mass_points[self.mass_points[i]].position;
            let b = mass_points[self.mass_points[(i + 1) % n]].position;
            sum = sum + a.cross(b);
        }
        self.area = (sum * F::half()).abs();
        self.area
    }

    /// Run the configured estimator.
    pub fn estimate_area(&mut self, mass_points: &[MassPoint<F>]) -> F {
        match self.estimator {
            AreaEstimator::Approximate => self.approximate_area(mass_points),
            AreaEstimator::Shoelace => self.shoelace_area(mass_points),
        }
    }

    /// Recompute the area and push every member outward from the centroid.
    ///
    /// Returns `false` without touching any velocity when the area is
    /// collapsed or not finite; `pressure` is zeroed in that case.
    pub fn apply_forces(&mut self, mass_points: &mut [MassPoint<F>], dt: F) -> bool {
        debug_assert!(
            self.mass_points.iter().all(|&i| i < mass_points.len()),
            "pressure model member out of bounds"
        );
        let area = self.estimate_area(mass_points);
        if !area.is_finite() || area <= F::from_f32(MIN_AREA) {
            self.pressure = F::zero();
            return false;
        }

        self.pressure = self.nrt * self.pressure_scale / area;
        for &i in &self.mass_points {
            let outward = (mass_points[i].position - self.center).normalize();
            mass_points[i].apply_force(outward.scale(self.pressure), dt);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn square(side: f32) -> AllocVec<MassPoint<f32>> {
        vec![
            MassPoint::new(Vec2::new(0.0, 0.0), 1.0),
            MassPoint::new(Vec2::new(side, 0.0), 1.0),
            MassPoint::new(Vec2::new(side, side), 1.0),
            MassPoint::new(Vec2::new(0.0, side), 1.0),
        ]
    }

    #[test]
    fn shoelace_unit_square() {
        let points = square(1.0);
        let mut model = PressureModel::new(vec![0, 1, 2, 3], 1.0, 1.0);
        assert!((model.shoelace_area(&points) - 1.0).abs() < 1e-6);
        assert!((model.center.x - 0.5).abs() < 1e-6);
        assert!((model.center.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn shoelace_uses_member_indices() {
        // Members are the last four points; the first two are unrelated.
        let mut points = vec![
            MassPoint::new(Vec2::new(100.0f32, 100.0), 1.0),
            MassPoint::new(Vec2::new(-40.0, 7.0), 1.0),
        ];
        points.extend(square(2.0));
        let mut model = PressureModel::new(vec![2, 3, 4, 5], 1.0, 1.0);
        assert!((model.shoelace_area(&points) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn approximate_square_is_between_circles() {
        let points = square(2.0);
        let mut model = PressureModel::new(vec![0, 1, 2, 3], 1.0, 1.0);
        let area = model.approximate_area(&points);
        // All corners sit sqrt(2) from the centroid.
        assert!((area - 2.0 * core::f32::consts::PI).abs() < 1e-4);
    }

    #[test]
    fn center_is_recomputed_not_accumulated() {
        let points = square(2.0);
        let mut model = PressureModel::new(vec![0, 1, 2, 3], 1.0, 1.0);
        model.approximate_area(&points);
        model.approximate_area(&points);
        assert!((model.center.x - 1.0).abs() < 1e-6);
        assert!((model.center.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn empty_ring_has_no_area() {
        let points: AllocVec<MassPoint<f32>> = AllocVec::new();
        let mut model = PressureModel::new(AllocVec::new(), 1.0, 1.0);
        assert_eq!(model.approximate_area(&points), 0.0);
        assert_eq!(model.center, Vec2::zero());
    }
}
