//! Creature state and per-frame behaviour.
//!
//! Creatures burn energy every frame, accumulate hunger, steer toward nearby
//! food and reproduce asexually when well fed under good conditions.

use macroquad::math::{Vec2, vec2};
use rand::Rng;

use super::geometric_utils::{clamp_length, wrap_around_mut};
use super::locatable::Locatable;
use super::params::Params;
use super::species::Species;

/// A mobile agent foraging on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    /// Unique identifier.
    pub id: usize,
    /// Position in world units.
    pub pos: Vec2,
    /// Species, which fixes the color class.
    pub species: Species,
    /// Diameter in world units.
    pub size: f32,
    /// Current energy in [0, `max_energy`]; the creature dies at 0.
    pub energy: f32,
    /// Accumulated hunger, grows with every unit of energy burnt.
    pub hunger: f32,
    /// Velocity in world units per frame.
    pub vel: Vec2,
    /// Facing direction in radians.
    pub heading: f32,
    /// Largest heading change per frame while wandering.
    pub rotation_rate: f32,
    /// Top speed under perfect conditions.
    pub base_speed: f32,
}

impl Creature {
    /// Creates a creature of a random species at a random position.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `params` - Simulation parameters (canvas size, size and speed ranges)
    /// * `rng` - Random source
    pub fn new_random<R: Rng + ?Sized>(id: usize, params: &Params, rng: &mut R) -> Self {
        let pos = vec2(
            rng.random_range(0.0..params.box_width),
            rng.random_range(0.0..params.box_height),
        );
        Self::spawn(id, Species::random(rng), pos, params, rng)
    }

    /// Creates an offspring of `parent` of the same species close to it.
    pub fn offspring<R: Rng + ?Sized>(
        id: usize,
        parent: &Creature,
        params: &Params,
        rng: &mut R,
    ) -> Self {
        let spread = params.offspring_spread;
        let mut pos = parent.pos
            + vec2(
                rng.random_range(-spread..=spread),
                rng.random_range(-spread..=spread),
            );
        wrap_around_mut(&mut pos, params.box_width, params.box_height);
        Self::spawn(id, parent.species, pos, params, rng)
    }

    fn spawn<R: Rng + ?Sized>(
        id: usize,
        species: Species,
        pos: Vec2,
        params: &Params,
        rng: &mut R,
    ) -> Self {
        let heading = rng.random_range(0.0..std::f32::consts::TAU);
        Self {
            id,
            pos,
            species,
            size: rng.random_range(params.min_size..=params.max_size),
            energy: params.initial_energy.min(params.max_energy),
            hunger: 0.0,
            vel: Vec2::ZERO,
            heading,
            rotation_rate: rng.random_range(0.0..=params.max_rotation_rate),
            base_speed: rng.random_range(params.min_base_speed..=params.max_base_speed),
        }
    }

    /// Checks if the creature is alive.
    ///
    /// # Returns
    ///
    /// `true` if energy > 0, `false` otherwise.
    pub fn is_alive(&self) -> bool {
        self.energy > 0.0
    }

    /// Burns one frame's worth of energy and converts it into hunger.
    ///
    /// The loss is `energy_decay_base + energy_decay_pressure * (1 - conditions)`.
    /// Energy never drops below zero.
    ///
    /// # Returns
    ///
    /// The amount of energy burnt.
    pub fn metabolize(&mut self, conditions: f32, params: &Params) -> f32 {
        let loss = params.energy_decay_base + params.energy_decay_pressure * (1.0 - conditions);
        self.consume_energy(loss);
        self.hunger += loss;
        loss
    }

    /// Reduces the creature's energy, flooring at zero.
    pub fn consume_energy(&mut self, amount: f32) {
        self.energy = (self.energy - amount).max(0.0);
    }

    /// Increases the creature's energy up to a maximum.
    ///
    /// # Arguments
    ///
    /// * `amount` - Energy to add
    /// * `max_energy` - Maximum energy cap
    pub fn gain_energy(&mut self, amount: f32, max_energy: f32) {
        self.energy = (self.energy + amount).min(max_energy);
    }

    /// Applies one feeding contact: gains energy and sheds hunger.
    pub fn feed(&mut self, params: &Params) {
        self.gain_energy(params.feed_gain, params.max_energy);
        self.hunger = (self.hunger - params.hunger_relief).max(0.0);
    }

    /// Distance at which the creature touches a food source.
    pub fn contact_distance(&self, params: &Params) -> f32 {
        self.size / 2.0 + params.contact_padding
    }

    /// Hunger mapped to [0, 1].
    pub fn hunger_level(&self, params: &Params) -> f32 {
        if params.hunger_saturation <= 0.0 {
            return 1.0;
        }
        (self.hunger / params.hunger_saturation).clamp(0.0, 1.0)
    }

    /// Accelerates toward `target`, which lies `distance` units away.
    ///
    /// The pull blends hunger and proximity equally.
    pub fn steer_toward(&mut self, target: Vec2, distance: f32, params: &Params) {
        let proximity = if params.seek_radius > 0.0 {
            (1.0 - distance / params.seek_radius).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let strength = params.seek_strength * (0.5 * self.hunger_level(params) + 0.5 * proximity);
        let direction = (target - self.pos).normalize_or_zero();
        self.vel += direction * strength;
    }

    /// Turns by a random amount and drifts forward, scaled by conditions.
    pub fn wander<R: Rng + ?Sized>(&mut self, conditions: f32, params: &Params, rng: &mut R) {
        if self.rotation_rate > 0.0 {
            self.heading += rng.random_range(-self.rotation_rate..=self.rotation_rate);
        }
        self.vel += Vec2::from_angle(self.heading) * params.jitter_strength * conditions;
    }

    /// Clamps speed to `base_speed * conditions` and applies damping.
    pub fn limit_speed(&mut self, conditions: f32, params: &Params) {
        self.vel = clamp_length(self.vel, self.base_speed * conditions);
        self.vel *= 1.0 - params.damping;
    }

    /// Checks the energy and environment requirements for reproduction.
    pub fn can_reproduce(&self, conditions: f32, params: &Params) -> bool {
        self.energy > params.reproduction_energy_threshold
            && conditions > params.reproduction_conditions_threshold
    }
}

impl Locatable for Creature {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }

    fn update(&mut self) {
        self.pos += self.vel;
        if self.vel.length_squared() > f32::EPSILON {
            self.heading = self.vel.y.atan2(self.vel.x);
        }
    }
}
