//! Fixed-timestep frame driver.
//!
//! The [`FrameLoop`] is the top-level owner of the entity manager and the
//! system registry, one of each. Each call to
//! [`advance`](FrameLoop::advance) forwards the fixed time delta to every
//! enabled system in registration order; systems query and mutate the entity
//! store themselves.

use ember_ecs::prelude::{EntityManager, SystemRegistry};

// ---------------------------------------------------------------------------
// FrameConfig
// ---------------------------------------------------------------------------

/// Configuration for the frame loop.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Fixed time step in seconds per frame. Must be positive and finite.
    pub fixed_dt: f32,
}

impl Default for FrameConfig {
    /// Defaults to 60 Hz (1/60 second per frame).
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
        }
    }
}

// ---------------------------------------------------------------------------
// FrameLoop
// ---------------------------------------------------------------------------

/// Drives per-frame execution over one entity manager and one registry.
///
/// Lifecycle: [`start`](Self::start) once before the first frame,
/// [`advance`](Self::advance) once per frame, [`finish`](Self::finish) once at
/// exit. Elapsed simulation time is computed by multiplying the frame counter
/// by the fixed step, so it never drifts through float accumulation.
#[derive(Debug)]
pub struct FrameLoop {
    entities: EntityManager,
    systems: SystemRegistry,
    frame_counter: u64,
    fixed_dt: f32,
}

impl FrameLoop {
    /// Create a frame loop with an empty entity manager and registry.
    ///
    /// # Panics
    ///
    /// Panics if `config.fixed_dt` is not positive and finite.
    pub fn new(config: FrameConfig) -> Self {
        assert!(
            config.fixed_dt > 0.0 && config.fixed_dt.is_finite(),
            "fixed_dt must be positive and finite, got {}",
            config.fixed_dt
        );
        Self {
            entities: EntityManager::new(),
            systems: SystemRegistry::new(),
            frame_counter: 0,
            fixed_dt: config.fixed_dt,
        }
    }

    /// The entity store.
    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }

    /// Mutable access to the entity store, for scene setup and inspection.
    pub fn entities_mut(&mut self) -> &mut EntityManager {
        &mut self.entities
    }

    /// The system registry.
    pub fn systems(&self) -> &SystemRegistry {
        &self.systems
    }

    /// Mutable access to the registry, for registration and toggling.
    pub fn systems_mut(&mut self) -> &mut SystemRegistry {
        &mut self.systems
    }

    /// Initialize all registered systems. Call once before the first frame.
    pub fn start(&mut self) {
        tracing::info!(systems = self.systems.system_count(), "frame loop starting");
        self.systems.initialize_all(&mut self.entities);
    }

    /// Run one frame: every enabled system updates with the fixed delta.
    pub fn advance(&mut self) {
        self.systems.update_all(&mut self.entities, self.fixed_dt);
        self.frame_counter += 1;
    }

    /// Shut all systems down. Call once at exit.
    pub fn finish(&mut self) {
        self.systems.shutdown_all(&mut self.entities);
        tracing::info!(frames = self.frame_counter, "frame loop finished");
    }

    /// Number of frames advanced so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }

    /// The configured time step in seconds.
    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    /// Simulation time in seconds: `frame_count * fixed_dt`.
    pub fn elapsed(&self) -> f64 {
        self.frame_counter as f64 * self.fixed_dt as f64
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(FrameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_and_elapsed_advance_together() {
        let mut frame_loop = FrameLoop::new(FrameConfig { fixed_dt: 0.25 });
        for _ in 0..8 {
            frame_loop.advance();
        }
        assert_eq!(frame_loop.frame_count(), 8);
        assert!((frame_loop.elapsed() - 2.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "fixed_dt must be positive and finite")]
    fn rejects_non_positive_dt() {
        let _ = FrameLoop::new(FrameConfig { fixed_dt: 0.0 });
    }

    #[test]
    fn default_runs_at_sixty_hertz() {
        let frame_loop = FrameLoop::default();
        assert!((frame_loop.fixed_dt() - 1.0 / 60.0).abs() < 1e-9);
    }
}
