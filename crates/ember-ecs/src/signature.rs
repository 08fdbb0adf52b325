//! Capability bitmasks over component types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::component::ComponentTypeId;

/// A fixed-width bitmask where bit *i* is set iff the entity owns a component
/// of the type assigned runtime id *i*.
///
/// Width equals [`MAX_COMPONENT_TYPES`](crate::entity::MAX_COMPONENT_TYPES)
/// (64), so the whole mask is a single `u64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Signature(u64);

impl Signature {
    /// The mask with no bits set.
    pub const EMPTY: Signature = Signature(0);

    /// Set the bit for `id`.
    #[inline]
    pub fn insert(&mut self, id: ComponentTypeId) {
        self.0 |= 1u64 << id.index();
    }

    /// Clear the bit for `id`.
    #[inline]
    pub fn remove(&mut self, id: ComponentTypeId) {
        self.0 &= !(1u64 << id.index());
    }

    /// Whether the bit for `id` is set.
    #[inline]
    pub fn contains(self, id: ComponentTypeId) -> bool {
        self.0 & (1u64 << id.index()) != 0
    }

    /// Superset test: `(self & required) == required`.
    #[inline]
    pub fn contains_all(self, required: Signature) -> bool {
        self.0 & required.0 == required.0
    }

    /// Whether no bits are set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Clear every bit.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Raw bit pattern.
    #[inline]
    pub fn bits(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:#b})", self.0)
    }
}
