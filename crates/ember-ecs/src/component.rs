//! Component trait and runtime type registration.
//!
//! Every component type is assigned a small integer id the first time it is
//! touched (explicitly registered, or lazily on first add/query). The id
//! doubles as the component's bit position in a [`Signature`](crate::signature::Signature)
//! and as the index of its storage instance inside the entity manager, so the
//! mapping must stay stable for the lifetime of the store.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

use crate::entity::MAX_COMPONENT_TYPES;

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// Marker contract for component payloads.
///
/// Components are plain value types: clonable, `'static`, and tagged with a
/// stable human-readable type name. They carry no behavior beyond optional
/// convenience mutators; their lifetime is owned entirely by the storage slot
/// that holds them.
pub trait Component: Clone + 'static {
    /// Stable, human-readable type name (e.g. `"Position"`).
    const NAME: &'static str;
}

// ---------------------------------------------------------------------------
// ComponentTypeId
// ---------------------------------------------------------------------------

/// Opaque runtime identifier for a registered component type.
///
/// Ids are assigned monotonically in `0..MAX_COMPONENT_TYPES` and never
/// reused except by a full store reset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentTypeId(pub(crate) u8);

impl ComponentTypeId {
    /// The id as a table/bit index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ComponentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentTypeId({})", self.0)
    }
}

// ---------------------------------------------------------------------------
// ComponentRegistry
// ---------------------------------------------------------------------------

/// Registry mapping Rust types to [`ComponentTypeId`]s.
///
/// A type registers at most once; re-registering returns the existing id.
/// The mapping is a bijection onto the set of currently registered types.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    /// TypeId -> ComponentTypeId for dedup.
    by_type: HashMap<TypeId, ComponentTypeId>,
    /// Indexed by `ComponentTypeId.0`.
    names: Vec<&'static str>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            by_type: HashMap::new(),
            names: Vec::new(),
        }
    }

    /// Register a component type, assigning the next unused id.
    ///
    /// Idempotent: a type that is already registered keeps its id.
    ///
    /// # Panics
    ///
    /// Panics when registration would exceed [`MAX_COMPONENT_TYPES`]. That is
    /// a fixed configuration mistake, not a runtime data condition, and it
    /// must fail loudly instead of corrupting adjacent storage.
    pub fn register<T: Component>(&mut self) -> ComponentTypeId {
        if let Some(&existing) = self.by_type.get(&TypeId::of::<T>()) {
            return existing;
        }
        let next = self.names.len();
        if next >= MAX_COMPONENT_TYPES {
            panic!(
                "component type ceiling reached: cannot register '{}', all {} ids are taken",
                T::NAME,
                MAX_COMPONENT_TYPES
            );
        }
        let id = ComponentTypeId(next as u8);
        self.by_type.insert(TypeId::of::<T>(), id);
        self.names.push(T::NAME);
        id
    }

    /// Look up a component type's id without registering it.
    pub fn lookup<T: Component>(&self) -> Option<ComponentTypeId> {
        self.by_type.get(&TypeId::of::<T>()).copied()
    }

    /// The declared name for a registered id.
    pub fn name_of(&self, id: ComponentTypeId) -> Option<&'static str> {
        self.names.get(id.index()).copied()
    }

    /// Number of registered component types.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether any component types have been registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Drop every registration and restart id assignment from zero.
    pub fn reset(&mut self) {
        self.by_type.clear();
        self.names.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
