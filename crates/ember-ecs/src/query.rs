//! Signature queries over the active-entity list.
//!
//! A query names the component types an entity must own, as a tuple:
//! `entities_with::<(Position, Velocity)>()`. The required mask is built by
//! OR-ing each type's signature bit, then matched against live entities with
//! a single superset test per entity.
//!
//! Query results are a snapshot. Destroying entities invalidates snapshots
//! taken earlier in the same frame — re-query after destructive mutations
//! instead of caching results across them.

use crate::component::Component;
use crate::entity::Entity;
use crate::manager::EntityManager;
use crate::signature::Signature;

// ---------------------------------------------------------------------------
// ComponentSet
// ---------------------------------------------------------------------------

/// A set of component types usable as a query, implemented for tuples of one
/// to four components.
///
/// Building the mask lazily registers each named type, so a query can be the
/// first time the store hears about a component.
pub trait ComponentSet {
    /// OR together the signature bit of every type in the set.
    fn signature(manager: &mut EntityManager) -> Signature;
}

impl<A: Component> ComponentSet for (A,) {
    fn signature(manager: &mut EntityManager) -> Signature {
        let mut signature = Signature::EMPTY;
        signature.insert(manager.register_component::<A>());
        signature
    }
}

impl<A: Component, B: Component> ComponentSet for (A, B) {
    fn signature(manager: &mut EntityManager) -> Signature {
        let mut signature = Signature::EMPTY;
        signature.insert(manager.register_component::<A>());
        signature.insert(manager.register_component::<B>());
        signature
    }
}

impl<A: Component, B: Component, C: Component> ComponentSet for (A, B, C) {
    fn signature(manager: &mut EntityManager) -> Signature {
        let mut signature = Signature::EMPTY;
        signature.insert(manager.register_component::<A>());
        signature.insert(manager.register_component::<B>());
        signature.insert(manager.register_component::<C>());
        signature
    }
}

impl<A: Component, B: Component, C: Component, D: Component> ComponentSet for (A, B, C, D) {
    fn signature(manager: &mut EntityManager) -> Signature {
        let mut signature = Signature::EMPTY;
        signature.insert(manager.register_component::<A>());
        signature.insert(manager.register_component::<B>());
        signature.insert(manager.register_component::<C>());
        signature.insert(manager.register_component::<D>());
        signature
    }
}

// ---------------------------------------------------------------------------
// EntityManager query methods
// ---------------------------------------------------------------------------

impl EntityManager {
    /// Every live entity whose signature is a superset of the set's mask.
    ///
    /// Scans the active-entity list, never the full identity range. Result
    /// order follows the active list (creation order modulo free-list reuse
    /// and unordered removal) — callers must not assume sorted output.
    pub fn entities_with<Q: ComponentSet>(&mut self) -> Vec<Entity> {
        let required = Q::signature(self);
        self.entities()
            .iter()
            .copied()
            .filter(|&entity| self.signature(entity).contains_all(required))
            .collect()
    }

    /// The required mask for a component set, without filtering anything.
    /// Useful for recording a system's declared signature.
    pub fn signature_for<Q: ComponentSet>(&mut self) -> Signature {
        Q::signature(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
