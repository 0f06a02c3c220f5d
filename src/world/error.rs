use crate::shape::VolumeError;
use crate::world::{ColliderHandle, RegistryList, TouchSensorHandle};
use alloc::string::String;

/// Errors raised by the [`World`](crate::world::World) and its collider registry.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum WorldError {
    /// The collider handle does not refer to a collider of this world.
    #[error("invalid collider handle {0:?}")]
    InvalidCollider(ColliderHandle),
    /// The touch sensor handle does not refer to a touch sensor of this world.
    #[error("invalid touch sensor handle {0:?}")]
    InvalidTouchSensor(TouchSensorHandle),
    /// A collider was added to a registry list it already belongs to.
    #[error("collider {collider:?} is already registered in the {list:?} list")]
    AlreadyRegistered {
        /// The registry list.
        list: RegistryList,
        /// The offending collider.
        collider: ColliderHandle,
    },
    /// A collider was removed from a registry list it does not belong to.
    #[error("collider {collider:?} is not registered in the {list:?} list")]
    NotRegistered {
        /// The registry list.
        list: RegistryList,
        /// The offending collider.
        collider: ColliderHandle,
    },
    /// `process_physics` was called while a frame was already being processed.
    #[error("physics processing is already running")]
    AlreadyProcessing,
    /// A world parameter is out of its valid range.
    #[error("invalid world parameter `{name}`: {value}")]
    InvalidParameter {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A volume could not be placed in world space.
    #[error(transparent)]
    Volume(#[from] VolumeError),
    /// The rigid-body solver failed.
    #[error("rigid-body solver error: {0}")]
    Solver(String),
}
