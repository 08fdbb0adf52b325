//! System registration, execution order, and lifecycle.
//!
//! The registry owns one instance per concrete system type. Registration
//! order is execution order and is never rearranged. Disabled systems are
//! skipped by [`update_all`](SystemRegistry::update_all) but remain
//! registered and keep their state.
//!
//! Declared system signatures are bookkeeping only: they are recorded for
//! inspection and never used to filter what a system sees. Every system
//! re-queries the entity manager itself inside its `update`.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use crate::manager::EntityManager;
use crate::signature::Signature;
use crate::system::System;

// ---------------------------------------------------------------------------
// Type-erased system entries
// ---------------------------------------------------------------------------

/// Object-safe bridge adding `Any` downcasts to boxed systems.
trait AnySystem: System {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<S: System + 'static> AnySystem for S {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Lifecycle state of one registered system.
///
/// Each hook fires exactly once per system across the registry's lifetime:
/// `Registered -> Initialized` on the first `initialize_all` that sees the
/// entry, `Initialized -> ShutDown` on the first `shutdown_all` after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LifecyclePhase {
    Registered,
    Initialized,
    ShutDown,
}

struct SystemEntry {
    system: Box<dyn AnySystem>,
    enabled: bool,
    phase: LifecyclePhase,
}

// ---------------------------------------------------------------------------
// SystemRegistry
// ---------------------------------------------------------------------------

/// Owns system instances and drives their per-frame execution.
#[derive(Default)]
pub struct SystemRegistry {
    /// Systems in registration (= execution) order.
    entries: Vec<SystemEntry>,
    /// Concrete type -> index into `entries`.
    by_type: HashMap<TypeId, usize>,
    /// Declared required signatures, keyed by concrete type. Metadata only.
    signatures: HashMap<TypeId, Signature>,
}

impl SystemRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_type: HashMap::new(),
            signatures: HashMap::new(),
        }
    }

    /// Register a system instance, keyed by its concrete type.
    ///
    /// Idempotent: if a system of type `S` is already registered, the passed
    /// instance is dropped and the existing one is returned. Otherwise the
    /// instance is appended to the execution order, enabled.
    pub fn register<S: System + 'static>(&mut self, system: S) -> &mut S {
        let type_id = TypeId::of::<S>();
        if let Some(&index) = self.by_type.get(&type_id) {
            tracing::debug!(
                system = self.entries[index].system.name(),
                "system already registered, returning existing instance"
            );
            return self.entries[index]
                .system
                .as_any_mut()
                .downcast_mut::<S>()
                .expect("system entry type does not match its key");
        }

        tracing::debug!(system = system.name(), "system registered");
        let index = self.entries.len();
        self.entries.push(SystemEntry {
            system: Box::new(system),
            enabled: true,
            phase: LifecyclePhase::Registered,
        });
        self.by_type.insert(type_id, index);
        self.entries[index]
            .system
            .as_any_mut()
            .downcast_mut::<S>()
            .expect("system entry type does not match its key")
    }

    /// Record a declared required-component signature for `S`.
    ///
    /// Stored for later inspection only; it does not change which entities
    /// `S` sees during updates.
    pub fn set_signature<S: System + 'static>(&mut self, signature: Signature) {
        self.signatures.insert(TypeId::of::<S>(), signature);
    }

    /// The signature previously declared for `S`, if any.
    pub fn signature_of<S: System + 'static>(&self) -> Option<Signature> {
        self.signatures.get(&TypeId::of::<S>()).copied()
    }

    /// Shared access to the registered instance of `S`; `None` when never
    /// registered.
    pub fn get_system<S: System + 'static>(&self) -> Option<&S> {
        let index = *self.by_type.get(&TypeId::of::<S>())?;
        self.entries[index].system.as_any().downcast_ref::<S>()
    }

    /// Mutable access to the registered instance of `S`.
    pub fn get_system_mut<S: System + 'static>(&mut self) -> Option<&mut S> {
        let index = *self.by_type.get(&TypeId::of::<S>())?;
        self.entries[index].system.as_any_mut().downcast_mut::<S>()
    }

    /// Call `update` on every enabled system, in registration order,
    /// synchronously, once.
    pub fn update_all(&mut self, entities: &mut EntityManager, dt: f32) {
        for entry in &mut self.entries {
            if entry.enabled {
                entry.system.update(entities, dt);
            }
        }
    }

    /// Run the `initialize` hook on every system that has not been
    /// initialized yet, in registration order.
    ///
    /// Safe to call again after registering more systems; already-initialized
    /// entries are untouched.
    pub fn initialize_all(&mut self, entities: &mut EntityManager) {
        for entry in &mut self.entries {
            if entry.phase == LifecyclePhase::Registered {
                entry.system.initialize(entities);
                entry.phase = LifecyclePhase::Initialized;
                tracing::info!(system = entry.system.name(), "system initialized");
            }
        }
    }

    /// Run the `shutdown` hook on every initialized system, in registration
    /// order. A system shuts down at most once.
    pub fn shutdown_all(&mut self, entities: &mut EntityManager) {
        for entry in &mut self.entries {
            if entry.phase == LifecyclePhase::Initialized {
                entry.system.shutdown(entities);
                entry.phase = LifecyclePhase::ShutDown;
                tracing::info!(system = entry.system.name(), "system shut down");
            }
        }
    }

    /// Toggle a system by its display name. Returns `false` when no system
    /// carries that name.
    pub fn enable_system(&mut self, name: &str, enabled: bool) -> bool {
        for entry in &mut self.entries {
            if entry.system.name() == name {
                entry.enabled = enabled;
                tracing::debug!(system = name, enabled, "system toggled");
                return true;
            }
        }
        false
    }

    /// Whether the named system is enabled; `None` when not registered.
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|entry| entry.system.name() == name)
            .map(|entry| entry.enabled)
    }

    /// Number of registered systems.
    pub fn system_count(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for SystemRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let systems: Vec<(&str, bool)> = self
            .entries
            .iter()
            .map(|entry| (entry.system.name(), entry.enabled))
            .collect();
        f.debug_struct("SystemRegistry")
            .field("systems", &systems)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
