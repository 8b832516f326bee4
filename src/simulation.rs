//! The simulation driver: arenas of mass points, springs and pressure models,
//! the per-frame step, and chain authoring.

use crate::authoring::{ChainAuthoring, InputSample};
use crate::bounds::Bounds;
use crate::config::SimulationConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::mass_point::MassPoint;
use crate::observer::StepObserver;
use crate::pressure::PressureModel;
use crate::spring::Spring;
use crate::vec::Vec2;
use crate::viewport::Viewport;
use alloc::vec::Vec as AllocVec;

/// Owns every mass point, spring and pressure model.
///
/// All three collections are append-only for the life of the simulation, so
/// the indices springs and models hold stay valid.
pub struct Simulation<F: Float> {
    config: SimulationConfig<F>,
    bounds: Bounds<F>,
    mass_points: AllocVec<MassPoint<F>>,
    springs: AllocVec<Spring<F>>,
    models: AllocVec<PressureModel<F>>,
    authoring: ChainAuthoring,
}

impl<F: Float> Simulation<F> {
    pub fn new(config: SimulationConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Simulation {
            bounds: Bounds::new(config.half_extent),
            config,
            mass_points: AllocVec::new(),
            springs: AllocVec::new(),
            models: AllocVec::new(),
            authoring: ChainAuthoring::Idle,
        })
    }

    pub fn config(&self) -> &SimulationConfig<F> { &self.config }
    pub fn bounds(&self) -> &Bounds<F> { &self.bounds }
    pub fn authoring(&self) -> &ChainAuthoring { &self.authoring }

    pub fn mass_points(&self) -> &[MassPoint<F>] { &self.mass_points }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn models(&self) -> &[PressureModel<F>] { &self.models }

    pub fn mass_point(&self, index: usize) -> &MassPoint<F> { &self.mass_points[index] }
    pub fn mass_point_mut(&mut self, index: usize) -> &mut MassPoint<F> { &mut self.mass_points[index] }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.mass_points.iter().map(|p| p.position).collect()
    }

    /// Endpoint positions of every spring, in creation order.
    pub fn spring_segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.springs
            .iter()
            .map(move |s| (self.mass_points[s.a].position, self.mass_points[s.b].position))
    }

    fn check_index(&self, index: usize) -> Result<(), PhysicsError> {
        if index < self.mass_points.len() {
            Ok(())
        } else {
            Err(PhysicsError::MassPointOutOfBounds { index, count: self.mass_points.len() })
        }
    }

    pub fn add_mass_point(&mut self, mass_point: MassPoint<F>) -> Result<usize, PhysicsError> {
        if !mass_point.has_valid_mass() {
            return Err(PhysicsError::InvalidMass);
        }
        let idx = self.mass_points.len();
        self.mass_points.push(mass_point);
        Ok(idx)
    }

    pub fn add_spring(&mut self, spring: Spring<F>) -> Result<usize, PhysicsError> {
        self.check_index(spring.a)?;
        self.check_index(spring.b)?;
        let idx = self.springs.len();
        self.springs.push(spring);
        Ok(idx)
    }

    /// Spawn a mass point from the configured template at `position`
    /// (simulation space).
    pub fn spawn_mass_point(&mut self, position: Vec2<F>) -> Result<usize, PhysicsError> {
        let spawn = self.config.spawn;
        self.add_mass_point(
            MassPoint::new(position, spawn.mass)
                .with_velocity(spawn.velocity)
                .with_collide_radius(spawn.collide_radius),
        )
    }

    /// Close `members` into a ring: one spring per ring-adjacent pair, then a
    /// pressure model over the whole ring. Returns the new model's index.
    ///
    /// Rest lengths are the configured fraction of each pair's current
    /// distance. A single-member ring gets a model but no springs, since a
    /// spring needs two distinct endpoints.
    pub fn close_ring(&mut self, members: AllocVec<usize>) -> Result<usize, PhysicsError> {
        if members.is_empty() {
            return Err(PhysicsError::EmptyChain);
        }
        for &i in &members {
            self.check_index(i)?;
        }

        let spring_config = self.config.spring;
        let gas = self.config.gas;
        let n = members.len();
        let mut spring_indices = AllocVec::with_capacity(n);
        for i in 0..n {
            let a = members[i];
            let b = members[(i + 1) % n];
            if a == b {
                continue;
            }
            let distance = self.mass_points[a].position.distance(self.mass_points[b].position);
            let spring = Spring::new(
                a,
                b,
                spring_config.rest_length_factor * distance,
                spring_config.spring_const,
                spring_config.dampening,
            );
            spring_indices.push(self.add_spring(spring)?);
        }

        let mut model = PressureModel::new(members, gas.nrt, gas.pressure_scale)
            .with_estimator(gas.area_estimator);
        model.springs = spring_indices;

        let idx = self.models.len();
        log::debug!(
            "closed ring {} with {} mass points and {} springs",
            idx,
            model.mass_points.len(),
            model.springs.len()
        );
        self.models.push(model);
        Ok(idx)
    }

    /// Spawn a closed balloon of `segments` points evenly spaced on a circle.
    pub fn spawn_ring(
        &mut self,
        center: Vec2<F>,
        radius: F,
        segments: usize,
    ) -> Result<usize, PhysicsError> {
        if segments < 3 {
            return Err(PhysicsError::InsufficientSegments);
        }
        let two_pi = F::two() * F::pi();
        let mut members = AllocVec::with_capacity(segments);
        for i in 0..segments {
            let angle = two_pi * F::from_usize(i) / F::from_usize(segments);
            let offset = Vec2::new(angle.cos(), angle.sin()).scale(radius);
            members.push(self.spawn_mass_point(center + offset)?);
        }
        self.close_ring(members)
    }

    /// Advance authoring by one frame with the pointer already in simulation
    /// space.
    ///
    /// While `authoring` is held a mass point is spawned under the pointer and
    /// appended to the chain in progress. On the first frame after release
    /// the chain is closed; the new model's index is returned.
    pub fn update_authoring<O: StepObserver>(
        &mut self,
        authoring: bool,
        pointer: Vec2<F>,
        observer: &mut O,
    ) -> Result<Option<usize>, PhysicsError> {
        if authoring {
            let idx = self.spawn_mass_point(pointer)?;
            self.authoring.push(idx);
            return Ok(None);
        }
        match self.authoring.release() {
            Some(members) => {
                let model = self.close_ring(members)?;
                observer.on_ring_closed(model, self.models[model].springs.len());
                Ok(Some(model))
            }
            None => Ok(None),
        }
    }

    /// Advance authoring from a display-space input sample.
    pub fn handle_input<O: StepObserver>(
        &mut self,
        input: InputSample<F>,
        viewport: &Viewport<F>,
        observer: &mut O,
    ) -> Result<Option<usize>, PhysicsError> {
        let pointer = viewport.to_simulation_space(input.pointer);
        self.update_authoring(input.authoring, pointer, observer)
    }

    /// Advance the physics by `dt`.
    ///
    /// 1. gravity, integration and wall collision for every mass point
    /// 2. every spring, in creation order, each applied immediately
    /// 3. every pressure model, in creation order
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        debug_assert!(dt.is_finite() && dt > F::zero(), "time step must be positive");

        let gravity = self.config.gravity;
        let mut diverged = 0;
        for (i, p) in self.mass_points.iter_mut().enumerate() {
            p.integrate(gravity, dt);
            let contact = self.bounds.collide(p);
            if contact.any() {
                observer.on_collision(i, contact);
            }
            if !p.position.is_finite() {
                diverged += 1;
            }
        }
        if diverged > 0 {
            log::warn!("{} mass points have non-finite positions", diverged);
        }
        observer.on_integrate();

        for spring in self.springs.iter_mut() {
            spring.apply_forces(&mut self.mass_points, dt);
        }
        observer.on_springs();

        for (i, model) in self.models.iter_mut().enumerate() {
            if model.apply_forces(&mut self.mass_points, dt) {
                observer.on_pressure(i, model.area.to_f64(), model.pressure.to_f64());
            } else {
                log::debug!("ring {} has collapsed area, pressure skipped", i);
                observer.on_pressure_skipped(i);
            }
        }

        observer.on_step_complete();
    }

    /// One full frame: authoring from `input`, then a step of `config.dt()`.
    pub fn frame<O: StepObserver>(
        &mut self,
        input: InputSample<F>,
        viewport: &Viewport<F>,
        observer: &mut O,
    ) -> Result<Option<usize>, PhysicsError> {
        let closed = self.handle_input(input, viewport, observer)?;
        let dt = self.config.dt();
        self.step(dt, observer);
        Ok(closed)
    }
}
