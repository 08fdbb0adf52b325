//! The per-frame system contract.

use crate::manager::EntityManager;

/// A stateful per-frame processor.
///
/// Systems are constructed by the caller, registered once with the
/// [`SystemRegistry`](crate::registry::SystemRegistry), initialized once
/// before the first frame, updated once per frame while enabled, and shut
/// down once at teardown.
///
/// Each system is responsible for querying the entity manager for the
/// entities it cares about inside [`update`](Self::update); the registry does
/// not pre-filter anything on its behalf.
pub trait System {
    /// Display name, used for enable/disable lookup and logging.
    fn name(&self) -> &'static str;

    /// Advance the system by `dt` seconds.
    fn update(&mut self, entities: &mut EntityManager, dt: f32);

    /// One-time setup before the first frame.
    fn initialize(&mut self, _entities: &mut EntityManager) {}

    /// One-time teardown after the last frame.
    fn shutdown(&mut self, _entities: &mut EntityManager) {}
}
