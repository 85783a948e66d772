//! Trait for entities that have a position and can be updated.
//!
//! This trait provides a common interface for all entities in the simulation
//! that have a position and need to be advanced each frame.

use macroquad::math::Vec2;

/// Trait for entities with a position that can be updated once per frame.
///
/// Any type that implements this trait:
/// - Has a position in 2D space
/// - Can be advanced by one animation frame
pub trait Locatable {
    /// Returns the entity's position.
    fn pos(&self) -> Vec2;

    /// Returns a mutable reference to the entity's position.
    fn pos_mut(&mut self) -> &mut Vec2;

    /// Advances the entity's own state by one frame.
    ///
    /// Creatures integrate their velocity, food sources decay.
    fn update(&mut self);
}
