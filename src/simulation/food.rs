//! Food sources placed by the player.
//!
//! Food decays continuously and is drained by feeding creatures; it is removed
//! once its energy reaches zero.

use macroquad::math::Vec2;

use super::locatable::Locatable;
use super::params::Params;

/// A stationary food source.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodSource {
    /// Position in world units.
    pub pos: Vec2,
    /// Energy remaining, starting at [`Params::food_energy`].
    pub energy: f32,
    /// Drawing radius.
    pub radius: f32,
    /// Energy lost per frame.
    pub decay_rate: f32,
}

impl FoodSource {
    /// Creates a full food source at `pos`.
    pub fn new(pos: Vec2, params: &Params) -> Self {
        Self {
            pos,
            energy: params.food_energy,
            radius: params.food_radius,
            decay_rate: params.food_decay_rate,
        }
    }

    /// Removes `amount` energy from the food source.
    ///
    /// Energy may go below zero; the food is removed at the end of the frame.
    pub fn drain(&mut self, amount: f32) {
        self.energy -= amount;
    }

    /// Checks if this food source has been used up.
    ///
    /// # Returns
    ///
    /// `true` if energy is <= 0, `false` otherwise.
    pub fn is_depleted(&self) -> bool {
        self.energy <= 0.0
    }
}

impl Locatable for FoodSource {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }

    fn update(&mut self) {
        self.energy -= self.decay_rate;
    }
}
