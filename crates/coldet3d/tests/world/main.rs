mod bridge;
mod collision_tests;
mod pipeline_order;
mod registry;
mod solver_sync;
mod touch_sensors;

use coldet3d::math::{Isometry, Point, Real, Vector};
use coldet3d::shape::Sphere;
use coldet3d::world::{Collider, ColliderShape, RigidBodyHandle, RigidBodySolver, WorldError};

/// A ball of radius `0.5` centered at `(x, y, 0)`.
pub fn ball(x: Real, y: Real) -> Collider {
    Collider::new([ColliderShape::new(Sphere::new(Point::origin(), 0.5))])
        .with_position(Point::new(x, y, 0.0))
}

/// A solver moving its bodies at constant velocity.
#[derive(Default)]
pub struct LinearSolver {
    pub bodies: Vec<(Isometry<Real>, Vector<Real>)>,
    pub fail_next_step: bool,
}

impl LinearSolver {
    pub fn with_bodies(count: usize) -> Self {
        Self {
            bodies: vec![(Isometry::identity(), Vector::zeros()); count],
            fail_next_step: false,
        }
    }
}

impl RigidBodySolver for LinearSolver {
    fn step_simulation(
        &mut self,
        elapsed: Real,
        max_sub_steps: usize,
        time_step: Real,
    ) -> Result<usize, WorldError> {
        if std::mem::take(&mut self.fail_next_step) {
            return Err(WorldError::Solver("diverged".to_string()));
        }

        for (pos, vel) in &mut self.bodies {
            pos.translation.vector += *vel * elapsed;
        }

        Ok(((elapsed / time_step).ceil() as usize).min(max_sub_steps))
    }

    fn set_body_transform(&mut self, body: RigidBodyHandle, pos: &Isometry<Real>) {
        if let Some(entry) = self.bodies.get_mut(body.0) {
            entry.0 = *pos;
        }
    }

    fn body_transform(&self, body: RigidBodyHandle) -> Option<Isometry<Real>> {
        self.bodies.get(body.0).map(|entry| entry.0)
    }

    fn set_body_velocity(&mut self, body: RigidBodyHandle, velocity: &Vector<Real>) {
        if let Some(entry) = self.bodies.get_mut(body.0) {
            entry.1 = *velocity;
        }
    }
}
