#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use macroquad::math::{Vec2, vec2};
use species_game::simulation::creature::Creature;
use species_game::simulation::food::FoodSource;
use species_game::simulation::geometric_utils::{clamp_length, wrap_around_mut};
use species_game::simulation::locatable::Locatable;
use species_game::simulation::params::Params;
use species_game::simulation::species::Species;

#[test]
fn test_food_decays_each_update() {
    let params = Params::default();
    let mut food = FoodSource::new(vec2(10.0, 10.0), &params);
    food.decay_rate = 0.5;

    food.update();
    food.update();

    assert_eq!(food.energy, params.food_energy - 1.0);
    assert_eq!(food.pos(), vec2(10.0, 10.0));
    assert!(!food.is_depleted());
}

#[test]
fn test_food_drain_can_deplete() {
    let params = Params::default();
    let mut food = FoodSource::new(Vec2::ZERO, &params);

    food.drain(params.food_energy);

    assert!(food.is_depleted());
}

#[test]
fn test_creature_update_moves_and_faces_velocity() {
    let mut creature = Creature {
        id: 3,
        pos: vec2(5.0, 5.0),
        species: Species::Potworm,
        size: 15.0,
        energy: 100.0,
        hunger: 0.0,
        vel: vec2(0.0, 2.0),
        heading: 0.0,
        rotation_rate: 0.0,
        base_speed: 2.0,
    };

    creature.update();

    assert_eq!(creature.pos(), vec2(5.0, 7.0));
    assert!((creature.heading - std::f32::consts::FRAC_PI_2).abs() < 1e-6);

    creature.vel = Vec2::ZERO;
    creature.update();
    assert_eq!(creature.pos(), vec2(5.0, 7.0));
    assert!((creature.heading - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn test_pos_mut_moves_entity() {
    let params = Params::default();
    let mut food = FoodSource::new(Vec2::ZERO, &params);

    *food.pos_mut() = vec2(3.0, 4.0);

    assert_eq!(food.pos, vec2(3.0, 4.0));
}

#[test]
fn test_wrap_around() {
    let mut inside = vec2(10.0, 20.0);
    wrap_around_mut(&mut inside, 100.0, 50.0);
    assert_eq!(inside, vec2(10.0, 20.0));

    let mut outside = vec2(-5.0, 55.0);
    wrap_around_mut(&mut outside, 100.0, 50.0);
    assert_eq!(outside, vec2(95.0, 5.0));

    let mut tiny = vec2(-1e-9, -1e-9);
    wrap_around_mut(&mut tiny, 100.0, 50.0);
    assert!(tiny.x < 100.0 && tiny.y < 50.0);
}

#[test]
fn test_clamp_length() {
    assert_eq!(clamp_length(vec2(3.0, 4.0), 10.0), vec2(3.0, 4.0));
    assert!((clamp_length(vec2(3.0, 4.0), 2.5).length() - 2.5).abs() < 1e-6);
    assert_eq!(clamp_length(vec2(3.0, 4.0), 0.0), Vec2::ZERO);
}
