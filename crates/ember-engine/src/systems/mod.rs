//! Game-logic systems driving the entity store each frame.

pub mod movement;

pub use movement::MovementSystem;
