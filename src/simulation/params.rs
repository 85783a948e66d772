use serde::{Deserialize, Serialize};

use super::environment::{Environment, OptimalRange};

/// Simulation parameters that control ecosystem behavior.
///
/// All values are per animation frame unless stated otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Canvas width in world units.
    pub box_width: f32,
    /// Canvas height in world units.
    pub box_height: f32,
    /// Creatures spawned at start and on every reset.
    pub n_creature: usize,
    /// Maximum energy a creature can hold.
    pub max_energy: f32,
    /// Energy of freshly spawned creatures (initial population and offspring).
    pub initial_energy: f32,
    /// Smallest creature diameter.
    pub min_size: f32,
    /// Largest creature diameter.
    pub max_size: f32,
    /// Lower bound of the per-creature base speed.
    pub min_base_speed: f32,
    /// Upper bound of the per-creature base speed.
    pub max_base_speed: f32,
    /// Largest per-frame heading change while wandering (radians).
    pub max_rotation_rate: f32,
    /// Energy lost every frame under perfect conditions.
    pub energy_decay_base: f32,
    /// Additional energy lost every frame, scaled by `1 - conditions`.
    pub energy_decay_pressure: f32,
    /// Hunger at which the hunger term of the seek strength saturates.
    pub hunger_saturation: f32,
    /// Distance within which creatures notice food.
    pub seek_radius: f32,
    /// Steering acceleration toward food at full hunger and zero distance.
    pub seek_strength: f32,
    /// Extra reach added to half the creature size when checking food contact.
    pub contact_padding: f32,
    /// Energy a creature gains per feeding contact.
    pub feed_gain: f32,
    /// Hunger removed per feeding contact.
    pub hunger_relief: f32,
    /// Energy drained from a food source per feeding contact.
    pub food_drain: f32,
    /// Energy of a newly placed food source.
    pub food_energy: f32,
    /// Drawing and contact radius of food sources.
    pub food_radius: f32,
    /// Energy a food source loses every frame.
    pub food_decay_rate: f32,
    /// Random wander acceleration under perfect conditions.
    pub jitter_strength: f32,
    /// Fraction of velocity removed every frame.
    pub damping: f32,
    /// Per-frame reproduction probability under perfect conditions.
    pub reproduction_probability: f32,
    /// Energy a creature needs before it can reproduce.
    pub reproduction_energy_threshold: f32,
    /// Conditions score the environment must exceed for reproduction.
    pub reproduction_conditions_threshold: f32,
    /// Energy paid by the parent for each offspring.
    pub reproduction_cost: f32,
    /// Maximum distance between a parent and its offspring at birth.
    pub offspring_spread: f32,
    /// Length of a round in milliseconds.
    pub game_duration_ms: f64,
    /// Optimal temperature range (degrees Celsius).
    pub temperature_range: OptimalRange,
    /// Optimal relative humidity range (percent).
    pub humidity_range: OptimalRange,
    /// Optimal pH range.
    pub ph_range: OptimalRange,
    /// Environment restored on reset.
    pub default_environment: Environment,
    /// Number of events kept in the ecosystem event log.
    pub event_log_size: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            box_width: 900.0,
            box_height: 600.0,
            n_creature: 60,
            max_energy: 200.0,
            initial_energy: 100.0,
            min_size: 14.0,
            max_size: 24.0,
            min_base_speed: 1.5,
            max_base_speed: 3.0,
            max_rotation_rate: 0.1,
            energy_decay_base: 0.05,
            energy_decay_pressure: 0.1,
            hunger_saturation: 100.0,
            seek_radius: 250.0,
            seek_strength: 0.25,
            contact_padding: 10.0,
            feed_gain: 30.0,
            hunger_relief: 30.0,
            food_drain: 40.0,
            food_energy: 100.0,
            food_radius: 8.0,
            food_decay_rate: 0.15,
            jitter_strength: 0.3,
            damping: 0.05,
            reproduction_probability: 0.002,
            reproduction_energy_threshold: 170.0,
            reproduction_conditions_threshold: 0.6,
            reproduction_cost: 50.0,
            offspring_spread: 20.0,
            game_duration_ms: 60_000.0,
            temperature_range: OptimalRange::new(18.0, 26.0, 20.0),
            humidity_range: OptimalRange::new(50.0, 70.0, 50.0),
            ph_range: OptimalRange::new(6.5, 7.5, 3.0),
            default_environment: Environment::default(),
            event_log_size: 20,
        }
    }
}

impl Params {
    /// Checks the values the spawner samples from.
    ///
    /// # Returns
    ///
    /// A description of the first offending field, if any.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.box_width.is_finite() && self.box_width > 0.0)
            || !(self.box_height.is_finite() && self.box_height > 0.0)
        {
            return Err("box_width and box_height must be positive".to_string());
        }
        if !ordered(self.min_size, self.max_size) || self.min_size < 0.0 {
            return Err("min_size must be non-negative and <= max_size".to_string());
        }
        if !ordered(self.min_base_speed, self.max_base_speed) || self.min_base_speed < 0.0 {
            return Err("min_base_speed must be non-negative and <= max_base_speed".to_string());
        }
        if !ordered(0.0, self.max_rotation_rate) {
            return Err("max_rotation_rate must be non-negative".to_string());
        }
        if !ordered(0.0, self.offspring_spread) {
            return Err("offspring_spread must be non-negative".to_string());
        }
        if !(self.max_energy.is_finite() && self.max_energy > 0.0) {
            return Err("max_energy must be positive".to_string());
        }
        Ok(())
    }
}

fn ordered(min: f32, max: f32) -> bool {
    min.is_finite() && max.is_finite() && min <= max
}
