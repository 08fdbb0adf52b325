//! Ember Engine -- frame driver and stock collaborators for the Ember ECS.
//!
//! This crate wraps [`ember_ecs`] with the pieces a game builds on top of the
//! core: a fixed-timestep [`FrameLoop`](frame::FrameLoop), the stock
//! [`Position`](components::Position) / [`Velocity`](components::Velocity) /
//! [`Renderable`](components::Renderable) components, and the
//! [`MovementSystem`](systems::MovementSystem) that integrates positions each
//! frame. Rendering, input, and audio collaborators consume component values
//! through the same accessors and live outside this workspace.

pub mod components;
pub mod frame;
pub mod systems;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::components::{Position, Renderable, Velocity};
    pub use crate::frame::{FrameConfig, FrameLoop};
    pub use crate::systems::MovementSystem;
    pub use ember_ecs::prelude::*;
}
