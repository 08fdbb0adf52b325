//! Ember ECS -- sparse-set Entity Component System core.
//!
//! Entities are plain integer identifiers recycled through a FIFO free-list.
//! Each component type lives in its own densely packed array indexed by a
//! sparse set, so per-frame systems iterate contiguous memory instead of
//! chasing object graphs. A per-entity signature bitmask answers
//! "which entities have components {A, B, C}" with one superset test per live
//! entity, and a system registry drives per-frame execution in registration
//! order.
//!
//! # Quick Start
//!
//! ```
//! use ember_ecs::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Position { x: f32, y: f32 }
//! impl Component for Position {
//!     const NAME: &'static str = "Position";
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Velocity { x: f32, y: f32 }
//! impl Component for Velocity {
//!     const NAME: &'static str = "Velocity";
//! }
//!
//! let mut entities = EntityManager::new();
//! let player = entities.create_entity()?;
//! entities.add_component(player, Position { x: 0.0, y: 0.0 });
//! entities.add_component(player, Velocity { x: 1.0, y: 0.0 });
//!
//! for entity in entities.entities_with::<(Position, Velocity)>() {
//!     let vel = *entities.get_component::<Velocity>(entity).unwrap();
//!     let pos = entities.get_component_mut::<Position>(entity).unwrap();
//!     pos.x += vel.x;
//!     pos.y += vel.y;
//! }
//!
//! assert_eq!(
//!     entities.get_component::<Position>(player),
//!     Some(&Position { x: 1.0, y: 0.0 })
//! );
//! # Ok::<(), ember_ecs::EcsError>(())
//! ```

pub mod component;
pub mod entity;
pub mod manager;
pub mod query;
pub mod registry;
pub mod signature;
pub mod storage;
pub mod system;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by ECS operations.
///
/// Only capacity conditions surface as errors; missing components, unknown
/// systems, and destroyed entities are ordinary outcomes reported as absent
/// values or no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EcsError {
    /// The identifier pool is empty; `MAX_ENTITIES - 1` entities are live.
    #[error("entity pool exhausted: no identifiers left to allocate")]
    EntityPoolExhausted,

    /// An identifier outside `(0, MAX_ENTITIES)` reached component storage.
    #[error("entity {0:?} is outside the valid identity range")]
    EntityOutOfRange(entity::Entity),
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::component::{Component, ComponentRegistry, ComponentTypeId};
    pub use crate::entity::{Entity, EntityPool, MAX_COMPONENT_TYPES, MAX_ENTITIES};
    pub use crate::manager::EntityManager;
    pub use crate::query::ComponentSet;
    pub use crate::registry::SystemRegistry;
    pub use crate::signature::Signature;
    pub use crate::storage::{ComponentArray, ComponentStore};
    pub use crate::system::System;
    pub use crate::EcsError;
}

// ---------------------------------------------------------------------------
// Integration Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    // -- test component types -----------------------------------------------

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Position {
        x: f32,
        y: f32,
    }
    impl Component for Position {
        const NAME: &'static str = "Position";
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Velocity {
        x: f32,
        y: f32,
    }
    impl Component for Velocity {
        const NAME: &'static str = "Velocity";
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Health(u32);
    impl Component for Health {
        const NAME: &'static str = "Health";
    }

    // -- lifecycle scenarios ------------------------------------------------

    #[test]
    fn creation_increments_count_and_validates() {
        let mut entities = EntityManager::new();
        for expected in 1..=50 {
            let e = entities.create_entity().unwrap();
            assert!(entities.is_valid(e));
            assert_eq!(entities.entity_count(), expected);
        }
    }

    #[test]
    fn pool_exhaustion_is_a_typed_error() {
        let mut entities = EntityManager::new();
        for _ in 0..MAX_ENTITIES - 1 {
            entities.create_entity().unwrap();
        }
        assert_eq!(entities.create_entity(), Err(EcsError::EntityPoolExhausted));
        assert_eq!(entities.entity_count(), MAX_ENTITIES - 1);

        // Destroying one entity makes room again.
        let any = entities.entities()[0];
        entities.destroy_entity(any);
        assert!(entities.create_entity().is_ok());
    }

    #[test]
    fn component_removal_leaves_other_components_alone() {
        let mut entities = EntityManager::new();
        let e1 = entities.create_entity().unwrap();
        entities.add_component(e1, Position { x: 10.0, y: 20.0 });
        entities.add_component(e1, Velocity { x: 5.0, y: -3.0 });

        assert_eq!(entities.entities_with::<(Position, Velocity)>(), vec![e1]);

        entities.remove_component::<Position>(e1);
        assert!(entities.entities_with::<(Position,)>().is_empty());
        assert!(entities.has_component::<Velocity>(e1));
        assert_eq!(
            entities.get_component::<Velocity>(e1),
            Some(&Velocity { x: 5.0, y: -3.0 })
        );
    }

    #[test]
    fn destroying_one_of_three_leaves_the_others_queryable() {
        let mut entities = EntityManager::new();
        let spawned: Vec<Entity> = (0..3)
            .map(|i| {
                let e = entities.create_entity().unwrap();
                entities.add_component(e, Position { x: i as f32, y: 0.0 });
                e
            })
            .collect();

        entities.destroy_entity(spawned[1]);
        assert_eq!(entities.entity_count(), 2);

        let remaining = entities.entities_with::<(Position,)>();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.contains(&spawned[0]));
        assert!(remaining.contains(&spawned[2]));
    }

    #[test]
    fn swap_removal_keeps_every_other_entity_intact() {
        let mut entities = EntityManager::new();
        let spawned: Vec<Entity> = (1..=20)
            .map(|i| {
                let e = entities.create_entity().unwrap();
                entities.add_component(e, Health(i));
                e
            })
            .collect();

        // Remove a middle entity's component; all others keep their values.
        entities.remove_component::<Health>(spawned[7]);
        for (i, &e) in spawned.iter().enumerate() {
            if i == 7 {
                assert!(!entities.has_component::<Health>(e));
            } else {
                assert_eq!(entities.get_component::<Health>(e), Some(&Health(i as u32 + 1)));
            }
        }
    }

    #[test]
    fn fifo_recycling_restores_prior_population() {
        let mut entities = EntityManager::new();
        let spawned: Vec<Entity> = (0..10).map(|_| entities.create_entity().unwrap()).collect();

        entities.destroy_entity(spawned[2]);
        entities.destroy_entity(spawned[6]);
        entities.destroy_entity(spawned[4]);
        assert_eq!(entities.entity_count(), 7);

        // The freed ids return, but only after the untouched tail of the
        // free-list; drain it to watch the recycle order.
        let mut created = Vec::new();
        while let Ok(e) = entities.create_entity() {
            created.push(e);
        }
        let tail = &created[created.len() - 3..];
        assert_eq!(tail, &[spawned[2], spawned[6], spawned[4]]);
    }

    #[test]
    fn queries_intersect_signatures_exactly() {
        let mut entities = EntityManager::new();
        let mut expected = Vec::new();
        for i in 0..30u32 {
            let e = entities.create_entity().unwrap();
            if i % 2 == 0 {
                entities.add_component(e, Position { x: 0.0, y: 0.0 });
            }
            if i % 3 == 0 {
                entities.add_component(e, Velocity { x: 0.0, y: 0.0 });
            }
            if i % 6 == 0 {
                expected.push(e);
            }
        }

        let mut matched = entities.entities_with::<(Position, Velocity)>();
        matched.sort();
        expected.sort();
        assert_eq!(matched, expected);

        // Exactness both ways: every match has both, every both-holder matches.
        for &e in entities.entities() {
            let in_result = matched.contains(&e);
            let holds_both =
                entities.has_component::<Position>(e) && entities.has_component::<Velocity>(e);
            assert_eq!(in_result, holds_both);
        }
    }

    #[test]
    fn stale_query_snapshots_go_absent_not_wrong() {
        let mut entities = EntityManager::new();
        let e1 = entities.create_entity().unwrap();
        let e2 = entities.create_entity().unwrap();
        entities.add_component(e1, Position { x: 1.0, y: 0.0 });
        entities.add_component(e2, Position { x: 2.0, y: 0.0 });

        let snapshot = entities.entities_with::<(Position,)>();
        entities.destroy_entity(e1);

        // A holder of the stale snapshot observes absences, never a crash.
        for e in snapshot {
            let _ = entities.get_component::<Position>(e);
        }
        assert_eq!(entities.entities_with::<(Position,)>(), vec![e2]);
    }

    #[test]
    #[should_panic(expected = "component type ceiling reached")]
    fn type_ceiling_fails_loudly() {
        // 64 distinct types fit; the 65th must panic, not corrupt.
        macro_rules! marker {
            ($($name:ident),+) => {$(
                #[derive(Debug, Clone)]
                struct $name;
                impl Component for $name {
                    const NAME: &'static str = stringify!($name);
                }
            )+};
        }
        marker!(
            T00, T01, T02, T03, T04, T05, T06, T07, T08, T09, T10, T11, T12, T13, T14, T15, T16,
            T17, T18, T19, T20, T21, T22, T23, T24, T25, T26, T27, T28, T29, T30, T31, T32, T33,
            T34, T35, T36, T37, T38, T39, T40, T41, T42, T43, T44, T45, T46, T47, T48, T49, T50,
            T51, T52, T53, T54, T55, T56, T57, T58, T59, T60, T61, T62, T63, T64
        );

        let mut entities = EntityManager::new();
        macro_rules! register {
            ($($name:ident),+) => {$(
                entities.register_component::<$name>();
            )+};
        }
        register!(
            T00, T01, T02, T03, T04, T05, T06, T07, T08, T09, T10, T11, T12, T13, T14, T15, T16,
            T17, T18, T19, T20, T21, T22, T23, T24, T25, T26, T27, T28, T29, T30, T31, T32, T33,
            T34, T35, T36, T37, T38, T39, T40, T41, T42, T43, T44, T45, T46, T47, T48, T49, T50,
            T51, T52, T53, T54, T55, T56, T57, T58, T59, T60, T61, T62, T63
        );
        assert_eq!(entities.component_type_count(), MAX_COMPONENT_TYPES);

        entities.register_component::<T64>(); // 65th type
    }
}
