//! The collision world: colliders, their registry, and the per-frame detection pipeline.
//!
//! A [`World`] owns the colliders and touch sensors. Colliders needing work in a frame are
//! registered in the self-indexing lists of the [`ColliderRegistry`], and
//! [`World::process_physics`] visits them phase by phase, notifying a [`WorldListener`].

pub use self::collider::{Collider, ColliderHandle, ColliderShape, ResponseType};
pub use self::collision_groups::{CollisionGroups, Group};
pub use self::collision_response::{CollisionInfo, CollisionResponse};
pub use self::collision_test::{CollisionTest, CollisionTestKind};
pub use self::config::WorldConfig;
pub use self::debug::{DebugContext, Phase, PhaseStats};
pub use self::error::WorldError;
pub use self::listener::WorldListener;
pub use self::registry::{ColliderRegistry, RegistryIndices, RegistryList, SelfIndexingList};
pub use self::solver::{NullSolver, RigidBodyHandle, RigidBodySolver};
pub use self::touch_sensor::{TouchSensor, TouchSensorHandle};
pub use self::world::World;

mod collider;
mod collision_groups;
mod collision_response;
mod config;
mod debug;
mod error;
mod listener;
mod pipeline;
mod registry;
mod solver;
mod touch_sensor;
mod world;
