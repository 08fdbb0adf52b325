//! Position integration from velocity.

use ember_ecs::prelude::{EntityManager, System};

use crate::components::{Position, Velocity};

/// Moves every entity owning both [`Position`] and [`Velocity`] by
/// `velocity * dt` each frame.
///
/// Optionally limits speed to a configured maximum and clamps positions to a
/// rectangular boundary.
#[derive(Debug, Clone)]
pub struct MovementSystem {
    max_speed: f32,
    clamp_to_bounds: bool,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl MovementSystem {
    pub fn new() -> Self {
        Self {
            max_speed: 1000.0,
            clamp_to_bounds: false,
            min_x: 0.0,
            min_y: 0.0,
            max_x: 1920.0,
            max_y: 1080.0,
        }
    }

    /// Cap on speed in units per second; applied after integration.
    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed;
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// The rectangle positions are clamped into when clamping is enabled.
    pub fn set_boundaries(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) {
        self.min_x = min_x;
        self.min_y = min_y;
        self.max_x = max_x;
        self.max_y = max_y;
    }

    pub fn enable_boundary_clamping(&mut self, enable: bool) {
        self.clamp_to_bounds = enable;
    }

    fn clamp_position(&self, position: &mut Position) {
        position.x = position.x.max(self.min_x).min(self.max_x);
        position.y = position.y.max(self.min_y).min(self.max_y);
    }
}

impl Default for MovementSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "MovementSystem"
    }

    fn update(&mut self, entities: &mut EntityManager, dt: f32) {
        for entity in entities.entities_with::<(Position, Velocity)>() {
            let Some(velocity) = entities.get_component::<Velocity>(entity).copied() else {
                continue;
            };

            if let Some(position) = entities.get_component_mut::<Position>(entity) {
                position.x += velocity.x * dt;
                position.y += velocity.y * dt;
            }

            // Rein in runaway velocities after integrating.
            let speed = velocity.speed();
            if speed > self.max_speed && speed > 0.0 {
                let factor = self.max_speed / speed;
                if let Some(velocity) = entities.get_component_mut::<Velocity>(entity) {
                    velocity.scale(factor);
                }
            }

            if self.clamp_to_bounds {
                if let Some(position) = entities.get_component_mut::<Position>(entity) {
                    self.clamp_position(position);
                }
            }
        }
    }

    fn initialize(&mut self, _entities: &mut EntityManager) {
        tracing::info!(max_speed = self.max_speed, "movement system initialized");
    }

    fn shutdown(&mut self, _entities: &mut EntityManager) {
        tracing::info!("movement system shut down");
    }
}
