//! Main ecosystem simulation.
//!
//! The ecosystem owns every creature and food source together with the
//! environment and the random source, so a single frame can be stepped and
//! inspected in isolation. It handles:
//! - Metabolism and hunger under environmental pressure
//! - Foraging by linear nearest-food scan
//! - Asexual reproduction
//! - Food decay and removal of dead creatures

use std::collections::HashMap;

use macroquad::math::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::creature::Creature;
use super::environment::Environment;
use super::event_log::{EventColor, EventLog};
use super::food::FoodSource;
use super::geometric_utils::wrap_around_mut;
use super::locatable::Locatable;
use super::params::Params;
use super::species::ColorClass;

/// The simulation context containing all per-round state.
#[derive(Debug, Clone)]
pub struct Ecosystem {
    /// All living creatures.
    pub creatures: Vec<Creature>,
    /// Food sources placed by the player.
    pub food: Vec<FoodSource>,
    /// Current environmental inputs.
    pub environment: Environment,
    /// Frames stepped since the last reset.
    pub frame: u64,
    /// Offspring born since the last reset.
    pub births: u32,
    /// Creatures starved since the last reset.
    pub deaths: u32,
    /// Recent events for display.
    pub event_log: EventLog,
    next_id: usize,
    rng: StdRng,
}

impl Ecosystem {
    /// Creates a new ecosystem with the initial population, seeded from the OS.
    pub fn new(params: &Params) -> Self {
        Self::from_rng(params, StdRng::from_os_rng())
    }

    /// Creates a new ecosystem with a fixed seed, for reproducible runs.
    pub fn with_seed(params: &Params, seed: u64) -> Self {
        Self::from_rng(params, StdRng::seed_from_u64(seed))
    }

    fn from_rng(params: &Params, rng: StdRng) -> Self {
        let mut ecosystem = Self {
            creatures: Vec::with_capacity(params.n_creature),
            food: Vec::new(),
            environment: params.default_environment,
            frame: 0,
            births: 0,
            deaths: 0,
            event_log: EventLog::new(params.event_log_size),
            next_id: 0,
            rng,
        };
        ecosystem.repopulate(params);
        ecosystem
    }

    /// Clears all state and spawns a fresh random population.
    ///
    /// The environment returns to its defaults and all food is removed.
    pub fn repopulate(&mut self, params: &Params) {
        self.creatures.clear();
        self.food.clear();
        self.event_log.clear();
        self.environment = params.default_environment;
        self.frame = 0;
        self.births = 0;
        self.deaths = 0;

        for _ in 0..params.n_creature {
            let id = self.take_id();
            let creature = Creature::new_random(id, params, &mut self.rng);
            self.creatures.push(creature);
        }

        info!(creatures = self.creatures.len(), "ecosystem populated");
    }

    /// Current conditions score in [0, 1].
    pub fn conditions(&self, params: &Params) -> f32 {
        self.environment.conditions(params)
    }

    /// Places a full food source at `pos`, wrapped into the canvas.
    pub fn place_food(&mut self, pos: Vec2, params: &Params) {
        let mut pos = pos;
        wrap_around_mut(&mut pos, params.box_width, params.box_height);
        self.food.push(FoodSource::new(pos, params));
        self.event_log.log(
            self.frame,
            format!("Food placed at ({:.0}, {:.0})", pos.x, pos.y),
            EventColor::FoodPlaced,
        );
        debug!(x = pos.x, y = pos.y, "food placed");
    }

    /// Advances the simulation by one animation frame.
    pub fn step(&mut self, params: &Params) {
        let conditions = self.conditions(params);
        self.frame += 1;

        let Self {
            creatures,
            food,
            event_log,
            next_id,
            rng,
            births,
            deaths,
            frame,
            ..
        } = self;
        let frame = *frame;

        let mut offspring = Vec::new();

        for creature in creatures.iter_mut() {
            creature.metabolize(conditions, params);
            if !creature.is_alive() {
                *deaths += 1;
                event_log.log(
                    frame,
                    format!("{} #{} starved", creature.species.name(), creature.id),
                    EventColor::Death,
                );
                continue;
            }

            match nearest_food(food, creature.pos) {
                Some((food_idx, distance)) if distance < params.seek_radius => {
                    let target = food[food_idx].pos;
                    creature.steer_toward(target, distance, params);

                    if distance < creature.contact_distance(params) {
                        creature.feed(params);
                        food[food_idx].drain(params.food_drain);
                        event_log.log(
                            frame,
                            format!("{} #{} fed", creature.species.name(), creature.id),
                            EventColor::Feeding,
                        );
                    }
                }
                _ => creature.wander(conditions, params, rng),
            }

            creature.limit_speed(conditions, params);
            creature.update();
            wrap_around_mut(creature.pos_mut(), params.box_width, params.box_height);

            if creature.can_reproduce(conditions, params)
                && rng.random::<f32>() < params.reproduction_probability * conditions
            {
                creature.consume_energy(params.reproduction_cost);
                let id = *next_id;
                *next_id += 1;
                let child = Creature::offspring(id, creature, params, rng);
                *births += 1;
                event_log.log(
                    frame,
                    format!("{} #{} was born", child.species.name(), child.id),
                    EventColor::Birth,
                );
                offspring.push(child);
            }
        }

        creatures.extend(offspring);

        for food_item in food.iter_mut() {
            food_item.update();
        }
        food.retain(|food_item| !food_item.is_depleted());
        creatures.retain(Creature::is_alive);
    }

    /// Number of living creatures.
    pub fn population(&self) -> usize {
        self.creatures.len()
    }

    /// Living creatures grouped by color class.
    pub fn population_by_class(&self) -> HashMap<ColorClass, usize> {
        let mut counts: HashMap<ColorClass, usize> =
            ColorClass::ALL.iter().map(|class| (*class, 0)).collect();
        for creature in &self.creatures {
            *counts.entry(creature.species.color_class()).or_insert(0) += 1;
        }
        counts
    }

    /// Mean creature energy, or 0 when the population is empty.
    pub fn average_energy(&self) -> f32 {
        if self.creatures.is_empty() {
            return 0.0;
        }
        self.creatures.iter().map(|c| c.energy).sum::<f32>() / self.creatures.len() as f32
    }

    /// Inserts a prepared creature, keeping future ids unique.
    pub fn spawn_creature(&mut self, creature: Creature) {
        self.next_id = self.next_id.max(creature.id + 1);
        self.creatures.push(creature);
    }

    /// Draws a fresh creature id.
    fn take_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Finds the nearest food source with positive energy.
///
/// # Returns
///
/// The index of the food source and its distance from `pos`.
fn nearest_food(food: &[FoodSource], pos: Vec2) -> Option<(usize, f32)> {
    food.iter()
        .enumerate()
        .filter(|(_, food_item)| food_item.energy > 0.0)
        .map(|(i, food_item)| (i, food_item.pos.distance(pos)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
