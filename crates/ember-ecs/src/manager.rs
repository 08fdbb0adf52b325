//! The [`EntityManager`] owns the identifier pool, the per-entity signature
//! table, and one type-erased storage instance per registered component type.
//!
//! All mutation is single-threaded and synchronous; every operation is a
//! bounded-time array access or a linear scan over the active-entity list.
//! Operations on destroyed or out-of-range ids are no-ops or absent results,
//! never crashes — game logic routinely touches ids that another system
//! destroyed earlier in the same frame.

use std::fmt;

use crate::component::{Component, ComponentRegistry, ComponentTypeId};
use crate::entity::{Entity, EntityPool, MAX_ENTITIES};
use crate::signature::Signature;
use crate::storage::{ComponentArray, ComponentStore};
use crate::EcsError;

/// The top-level entity/component store.
pub struct EntityManager {
    /// Identifier free-list, alive bitmap, and active list.
    pool: EntityPool,
    /// Type -> runtime id mapping.
    registry: ComponentRegistry,
    /// Storage per component type, indexed by `ComponentTypeId`.
    stores: Vec<Box<dyn ComponentStore>>,
    /// Signature per entity slot, indexed by entity id.
    signatures: Vec<Signature>,
}

impl EntityManager {
    /// Create an empty manager with the full identity range available.
    pub fn new() -> Self {
        Self {
            pool: EntityPool::new(),
            registry: ComponentRegistry::new(),
            stores: Vec::new(),
            signatures: vec![Signature::EMPTY; MAX_ENTITIES],
        }
    }

    // -- entity lifecycle ---------------------------------------------------

    /// Allocate a fresh entity from the front of the free-list.
    ///
    /// Freed ids are reused in FIFO order. The new entity starts with an
    /// empty signature.
    ///
    /// # Errors
    ///
    /// [`EcsError::EntityPoolExhausted`] once `MAX_ENTITIES - 1` entities are
    /// live; the pool never grows.
    pub fn create_entity(&mut self) -> Result<Entity, EcsError> {
        match self.pool.allocate() {
            Some(entity) => Ok(entity),
            None => {
                tracing::warn!(live = self.pool.len(), "entity pool exhausted");
                Err(EcsError::EntityPoolExhausted)
            }
        }
    }

    /// Destroy an entity, releasing every component it owns.
    ///
    /// Returns `false` (no-op) on an invalid or already-destroyed id.
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.pool.release(entity) {
            return false;
        }
        self.signatures[entity.index()] = Signature::EMPTY;
        for store in &mut self.stores {
            store.entity_destroyed(entity);
        }
        true
    }

    /// Whether `entity` is in range, not the sentinel, and currently live.
    pub fn is_valid(&self, entity: Entity) -> bool {
        self.pool.is_alive(entity)
    }

    /// Number of live entities.
    pub fn entity_count(&self) -> usize {
        self.pool.len()
    }

    /// The active-entity list: every live id, in creation order modulo
    /// unordered removal on destroy.
    pub fn entities(&self) -> &[Entity] {
        self.pool.active()
    }

    // -- component type registration ----------------------------------------

    /// Register a component type, creating its storage instance.
    ///
    /// Idempotent; also happens lazily on first [`add_component`](Self::add_component)
    /// or first query.
    ///
    /// # Panics
    ///
    /// Panics when the [`MAX_COMPONENT_TYPES`](crate::entity::MAX_COMPONENT_TYPES)
    /// ceiling would be exceeded.
    pub fn register_component<T: Component>(&mut self) -> ComponentTypeId {
        let id = self.registry.register::<T>();
        if id.index() == self.stores.len() {
            self.stores.push(Box::new(ComponentArray::<T>::new()));
        }
        id
    }

    /// Number of registered component types.
    pub fn component_type_count(&self) -> usize {
        self.registry.len()
    }

    // -- component access ---------------------------------------------------

    /// Attach (or overwrite) a component on a live entity and set its
    /// signature bit.
    ///
    /// Returns `false` (no-op) when the entity is invalid or destroyed; the
    /// manager is the checked boundary in front of storage, so out-of-range
    /// ids never reach the arrays.
    pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) -> bool {
        if !self.pool.is_alive(entity) {
            return false;
        }
        let id = self.register_component::<T>();
        if self.typed_store_mut::<T>(id).insert(entity, value).is_err() {
            return false;
        }
        self.signatures[entity.index()].insert(id);
        true
    }

    /// Detach a component from an entity, clearing its signature bit and
    /// returning the removed value.
    ///
    /// `None` when the type was never registered, the entity is not live, or
    /// it owns no such component.
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        if !self.pool.is_alive(entity) {
            return None;
        }
        let id = self.registry.lookup::<T>()?;
        let removed = self.typed_store_mut::<T>(id).remove(entity)?;
        self.signatures[entity.index()].remove(id);
        Some(removed)
    }

    /// Shared reference to an entity's component; absence is a normal
    /// outcome, never an error.
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        let id = self.registry.lookup::<T>()?;
        self.typed_store::<T>(id).get(entity)
    }

    /// Mutable reference to an entity's component.
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        let id = self.registry.lookup::<T>()?;
        self.typed_store_mut::<T>(id).get_mut(entity)
    }

    /// Whether the entity currently owns a component of type `T`.
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        match self.registry.lookup::<T>() {
            Some(id) => self.stores[id.index()].contains(entity),
            None => false,
        }
    }

    /// The packed values of every `T` instance: the cache-friendly fast path
    /// for systems iterating a whole type. Empty when unregistered.
    pub fn components<T: Component>(&self) -> &[T] {
        match self.registry.lookup::<T>() {
            Some(id) => self.typed_store::<T>(id).components(),
            None => &[],
        }
    }

    /// Mutable view of the packed values of every `T` instance.
    pub fn components_mut<T: Component>(&mut self) -> &mut [T] {
        match self.registry.lookup::<T>() {
            Some(id) => self.typed_store_mut::<T>(id).components_mut(),
            None => &mut [],
        }
    }

    /// Typed storage access for advanced iteration.
    pub fn array<T: Component>(&self) -> Option<&ComponentArray<T>> {
        let id = self.registry.lookup::<T>()?;
        Some(self.typed_store::<T>(id))
    }

    /// Mutable typed storage access.
    ///
    /// Mutating values through the array is fine. Inserting or removing slots
    /// directly bypasses the signature table; use
    /// [`add_component`](Self::add_component) /
    /// [`remove_component`](Self::remove_component) for structural changes.
    pub fn array_mut<T: Component>(&mut self) -> Option<&mut ComponentArray<T>> {
        let id = self.registry.lookup::<T>()?;
        Some(self.typed_store_mut::<T>(id))
    }

    // -- signatures ---------------------------------------------------------

    /// The entity's current capability mask; empty for invalid or dead ids.
    pub fn signature(&self, entity: Entity) -> Signature {
        if self.pool.is_alive(entity) {
            self.signatures[entity.index()]
        } else {
            Signature::EMPTY
        }
    }

    // -- reset --------------------------------------------------------------

    /// Return the manager to its just-constructed state: every signature
    /// reset, every storage instance dropped, the active list emptied, the
    /// free-list refilled with the full identity range, and the type-id
    /// counter restarted.
    pub fn clear(&mut self) {
        self.pool.reset();
        for signature in &mut self.signatures {
            signature.clear();
        }
        self.stores.clear();
        self.registry.reset();
        tracing::debug!("entity manager cleared");
    }

    // -- internal -----------------------------------------------------------

    fn typed_store<T: Component>(&self, id: ComponentTypeId) -> &ComponentArray<T> {
        self.stores[id.index()]
            .as_any()
            .downcast_ref::<ComponentArray<T>>()
            .expect("component store type does not match its registered id")
    }

    fn typed_store_mut<T: Component>(&mut self, id: ComponentTypeId) -> &mut ComponentArray<T> {
        self.stores[id.index()]
            .as_any_mut()
            .downcast_mut::<ComponentArray<T>>()
            .expect("component store type does not match its registered id")
    }
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EntityManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityManager")
            .field("entity_count", &self.pool.len())
            .field("component_type_count", &self.registry.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
