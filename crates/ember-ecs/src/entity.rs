//! Entity identifiers and the identifier pool.
//!
//! An [`Entity`] is a plain `u32` handle into the per-type component stores
//! and the signature table. Value `0` is the reserved invalid sentinel and is
//! never handed out; live identifiers occupy the half-open range
//! `(0, MAX_ENTITIES)`.
//!
//! The [`EntityPool`] owns the free-list and the active-entity list. Freed
//! identifiers are recycled in FIFO order, so ids come back in the order they
//! were released rather than hammering the most recently freed slot.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Hard ceiling on simultaneously live entities (id `0` is reserved, so the
/// usable pool is `MAX_ENTITIES - 1`).
pub const MAX_ENTITIES: usize = 10_000;

/// Hard ceiling on distinct component types; also the signature bit width.
pub const MAX_COMPONENT_TYPES: usize = 64;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// An opaque entity identifier.
///
/// Entities carry no data of their own; they are keys into component storage
/// and the signature table owned by the
/// [`EntityManager`](crate::manager::EntityManager).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(u32);

impl Entity {
    /// The reserved "no entity" sentinel. Never assigned to a live entity.
    pub const INVALID: Entity = Entity(0);

    /// Reconstruct from a raw `u32`.
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw `u32` representation.
    #[inline]
    pub fn to_raw(self) -> u32 {
        self.0
    }

    /// The identifier as a table index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Pure bounds check: not the sentinel and below [`MAX_ENTITIES`].
    ///
    /// Says nothing about liveness; see
    /// [`EntityManager::is_valid`](crate::manager::EntityManager::is_valid)
    /// for that.
    #[inline]
    pub fn in_valid_range(self) -> bool {
        self != Self::INVALID && (self.0 as usize) < MAX_ENTITIES
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// EntityPool
// ---------------------------------------------------------------------------

/// Allocates and recycles [`Entity`] identifiers.
///
/// Three parallel structures:
///
/// - a FIFO free-list seeded with every id in `(0, MAX_ENTITIES)`,
/// - an alive bitmap indexed by id for O(1) liveness checks,
/// - the active-entity list, which bounds query cost by the live population
///   instead of the full identity range.
///
/// Removal from the active list is an unordered `swap_remove`; callers must
/// not assume the list stays in creation order after a release.
#[derive(Debug)]
pub struct EntityPool {
    /// Recyclable ids, reused front-first in the order they were freed.
    free: VecDeque<Entity>,
    /// Liveness per id slot.
    alive: Vec<bool>,
    /// Currently live ids.
    active: Vec<Entity>,
}

impl EntityPool {
    /// Create a pool with the full identity range available.
    pub fn new() -> Self {
        let mut pool = Self {
            free: VecDeque::with_capacity(MAX_ENTITIES - 1),
            alive: vec![false; MAX_ENTITIES],
            active: Vec::new(),
        };
        pool.refill_free_list();
        pool
    }

    fn refill_free_list(&mut self) {
        for raw in 1..MAX_ENTITIES as u32 {
            self.free.push_back(Entity::from_raw(raw));
        }
    }

    /// Take the next identifier from the front of the free-list.
    ///
    /// Returns `None` once `MAX_ENTITIES - 1` entities are live; the pool
    /// never grows.
    pub fn allocate(&mut self) -> Option<Entity> {
        let entity = self.free.pop_front()?;
        self.alive[entity.index()] = true;
        self.active.push(entity);
        Some(entity)
    }

    /// Return an identifier to the tail of the free-list.
    ///
    /// Returns `true` if the entity was live and is now released, `false` on
    /// a dead, out-of-range, or sentinel id (idempotent).
    pub fn release(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        self.alive[entity.index()] = false;
        if let Some(position) = self.active.iter().position(|&e| e == entity) {
            self.active.swap_remove(position);
        }
        self.free.push_back(entity);
        true
    }

    /// O(1) liveness check; equivalent to "not currently in the free-list".
    #[inline]
    pub fn is_alive(&self, entity: Entity) -> bool {
        entity.in_valid_range() && self.alive[entity.index()]
    }

    /// The currently live ids, in allocation order modulo unordered releases.
    pub fn active(&self) -> &[Entity] {
        &self.active
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no entities are live.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Return the pool to its just-constructed state: nothing live, the full
    /// identity range free, in ascending order.
    pub fn reset(&mut self) {
        self.free.clear();
        self.alive.fill(false);
        self.active.clear();
        self.refill_free_list();
    }
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
