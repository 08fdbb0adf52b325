//! Stock component types.
//!
//! Plain data aggregates with no behavior beyond convenience mutators. Each
//! is default-constructed into storage and overwritten in place on update;
//! there is no per-instance allocation beyond the backing array.

use ember_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// 2D position in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset the position in place.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

impl Component for Position {
    const NAME: &'static str = "Position";
}

/// 2D velocity in world units per second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Current speed (vector magnitude).
    pub fn speed(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Scale both axes in place.
    pub fn scale(&mut self, factor: f32) {
        self.x *= factor;
        self.y *= factor;
    }
}

impl Component for Velocity {
    const NAME: &'static str = "Velocity";
}

/// Marks an entity as drawable; consumed by rendering collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Renderable {
    pub visible: bool,
    /// Draw layer; higher layers render on top.
    pub layer: i32,
}

impl Renderable {
    pub fn new(visible: bool, layer: i32) -> Self {
        Self { visible, layer }
    }
}

impl Default for Renderable {
    fn default() -> Self {
        Self {
            visible: true,
            layer: 0,
        }
    }
}

impl Component for Renderable {
    const NAME: &'static str = "Renderable";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_translate() {
        let mut pos = Position::new(1.0, 2.0);
        pos.translate(0.5, -0.5);
        assert_eq!(pos, Position::new(1.5, 1.5));
    }

    #[test]
    fn velocity_speed_and_scale() {
        let mut vel = Velocity::new(3.0, 4.0);
        assert_eq!(vel.speed(), 5.0);
        vel.scale(2.0);
        assert_eq!(vel, Velocity::new(6.0, 8.0));
    }

    #[test]
    fn renderable_defaults_visible_on_base_layer() {
        let renderable = Renderable::default();
        assert!(renderable.visible);
        assert_eq!(renderable.layer, 0);
    }
}
