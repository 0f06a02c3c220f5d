use crate::math::{Isometry, Real, Vector};
use crate::world::WorldError;

/// The index of a rigid body inside a [`RigidBodySolver`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RigidBodyHandle(pub usize);

/// The rigid-body solver driven by the frame pipeline.
///
/// The solver is a black box: the pipeline feeds it collider transforms and velocities before
/// stepping and reads the body transforms back afterwards.
pub trait RigidBodySolver {
    /// Advances the simulation by `elapsed` seconds, in at most `max_sub_steps` fixed steps of
    /// `time_step` seconds. Returns the number of sub-steps taken.
    fn step_simulation(
        &mut self,
        elapsed: Real,
        max_sub_steps: usize,
        time_step: Real,
    ) -> Result<usize, WorldError>;

    /// Teleports `body` to `pos`.
    fn set_body_transform(&mut self, body: RigidBodyHandle, pos: &Isometry<Real>);

    /// The current transform of `body`, if it exists.
    fn body_transform(&self, body: RigidBodyHandle) -> Option<Isometry<Real>>;

    /// Sets the linear velocity of `body`.
    fn set_body_velocity(&mut self, _body: RigidBodyHandle, _velocity: &Vector<Real>) {}
}

/// A solver without any rigid body. Stepping does nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSolver;

impl RigidBodySolver for NullSolver {
    fn step_simulation(&mut self, _: Real, _: usize, _: Real) -> Result<usize, WorldError> {
        Ok(0)
    }

    fn set_body_transform(&mut self, _: RigidBodyHandle, _: &Isometry<Real>) {}

    fn body_transform(&self, _: RigidBodyHandle) -> Option<Isometry<Real>> {
        None
    }
}
