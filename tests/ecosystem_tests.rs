#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use macroquad::math::{Vec2, vec2};
use species_game::simulation::creature::Creature;
use species_game::simulation::ecosystem::Ecosystem;
use species_game::simulation::environment::Environment;
use species_game::simulation::event_log::EventColor;
use species_game::simulation::params::Params;
use species_game::simulation::species::Species;

fn create_test_params() -> Params {
    Params {
        n_creature: 0,
        ..Params::default()
    }
}

fn test_creature(id: usize, pos: Vec2, energy: f32) -> Creature {
    Creature {
        id,
        pos,
        species: Species::Earthworm,
        size: 20.0,
        energy,
        hunger: 0.0,
        vel: Vec2::ZERO,
        heading: 0.0,
        rotation_rate: 0.05,
        base_speed: 2.0,
    }
}

fn empty_ecosystem(params: &Params) -> Ecosystem {
    Ecosystem::with_seed(params, 7)
}

#[test]
fn test_ecosystem_creation() {
    let params = Params::default();
    let ecosystem = Ecosystem::with_seed(&params, 1);

    assert_eq!(ecosystem.creatures.len(), 60);
    assert!(ecosystem.food.is_empty());
    assert_eq!(ecosystem.frame, 0);
    assert_eq!(ecosystem.environment, Environment::default());

    let mut ids: Vec<usize> = ecosystem.creatures.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 60);

    for creature in &ecosystem.creatures {
        assert_eq!(creature.energy, params.initial_energy);
        assert_eq!(creature.hunger, 0.0);
        assert!(creature.pos.x >= 0.0 && creature.pos.x < params.box_width);
        assert!(creature.pos.y >= 0.0 && creature.pos.y < params.box_height);
        assert!(creature.size >= params.min_size && creature.size <= params.max_size);
    }
}

#[test]
fn test_metabolism_under_perfect_conditions() {
    let params = create_test_params();
    let mut ecosystem = empty_ecosystem(&params);
    ecosystem.spawn_creature(test_creature(0, vec2(100.0, 100.0), 100.0));

    ecosystem.step(&params);

    let creature = &ecosystem.creatures[0];
    assert!((creature.energy - 99.95).abs() < 1e-4);
    assert!((creature.hunger - 0.05).abs() < 1e-6);
    assert_eq!(ecosystem.frame, 1);
}

#[test]
fn test_metabolism_under_poor_conditions() {
    let params = create_test_params();
    let mut ecosystem = empty_ecosystem(&params);
    ecosystem.environment = Environment {
        temperature: 80.0,
        humidity: 0.0,
        ph: 14.0,
    };
    assert_eq!(ecosystem.conditions(&params), 0.0);
    ecosystem.spawn_creature(test_creature(0, vec2(100.0, 100.0), 100.0));

    ecosystem.step(&params);

    let creature = &ecosystem.creatures[0];
    assert!((creature.energy - 99.85).abs() < 1e-4);
    assert!((creature.hunger - 0.15).abs() < 1e-6);
    // zero conditions means zero top speed
    assert_eq!(creature.vel, Vec2::ZERO);
}

#[test]
fn test_feeding_on_contact() {
    let params = create_test_params();
    let mut ecosystem = empty_ecosystem(&params);
    let pos = vec2(300.0, 300.0);
    ecosystem.spawn_creature(test_creature(0, pos, 100.0));
    ecosystem.place_food(pos, &params);

    ecosystem.step(&params);

    let creature = &ecosystem.creatures[0];
    assert!((creature.energy - 129.95).abs() < 1e-3);
    assert_eq!(creature.hunger, 0.0);
    assert_eq!(ecosystem.food.len(), 1);
    assert!((ecosystem.food[0].energy - 59.85).abs() < 1e-3);

    let events = ecosystem.event_log.events();
    assert_eq!(events[0].color, EventColor::Feeding);
    assert_eq!(events[1].color, EventColor::FoodPlaced);
}

#[test]
fn test_energy_capped_at_maximum() {
    let mut params = create_test_params();
    params.reproduction_probability = 0.0;
    let mut ecosystem = empty_ecosystem(&params);
    let pos = vec2(300.0, 300.0);
    ecosystem.spawn_creature(test_creature(0, pos, 190.0));
    ecosystem.place_food(pos, &params);

    ecosystem.step(&params);

    assert_eq!(ecosystem.creatures[0].energy, params.max_energy);
}

#[test]
fn test_energy_stays_in_bounds() {
    let mut params = Params::default();
    params.n_creature = 30;
    let mut ecosystem = Ecosystem::with_seed(&params, 42);

    for frame in 0..3000 {
        if frame % 50 == 0 {
            let x = (frame as f32 * 37.0) % params.box_width;
            let y = (frame as f32 * 53.0) % params.box_height;
            ecosystem.place_food(vec2(x, y), &params);
        }
        ecosystem.step(&params);

        for creature in &ecosystem.creatures {
            assert!(creature.energy > 0.0, "dead creature kept after step");
            assert!(creature.energy <= params.max_energy);
        }
    }
}

#[test]
fn test_food_removed_when_depleted() {
    let mut params = create_test_params();
    params.food_energy = 0.75;
    params.food_decay_rate = 0.25;
    let mut ecosystem = empty_ecosystem(&params);
    ecosystem.place_food(vec2(50.0, 50.0), &params);

    ecosystem.step(&params);
    assert_eq!(ecosystem.food[0].energy, 0.5);
    ecosystem.step(&params);
    assert_eq!(ecosystem.food[0].energy, 0.25);
    ecosystem.step(&params);
    assert!(ecosystem.food.is_empty());
}

#[test]
fn test_food_drained_by_feeding_is_removed() {
    let mut params = create_test_params();
    params.food_energy = 30.0;
    let mut ecosystem = empty_ecosystem(&params);
    let pos = vec2(300.0, 300.0);
    ecosystem.spawn_creature(test_creature(0, pos, 100.0));
    ecosystem.place_food(pos, &params);

    ecosystem.step(&params);

    assert!(ecosystem.food.is_empty());
}

#[test]
fn test_starved_creature_removed() {
    let params = create_test_params();
    let mut ecosystem = empty_ecosystem(&params);
    ecosystem.spawn_creature(test_creature(0, vec2(10.0, 10.0), params.energy_decay_base));
    ecosystem.spawn_creature(test_creature(1, vec2(20.0, 20.0), 100.0));

    ecosystem.step(&params);

    assert_eq!(ecosystem.population(), 1);
    assert_eq!(ecosystem.creatures[0].id, 1);
    assert_eq!(ecosystem.deaths, 1);
    assert!(
        ecosystem
            .event_log
            .events()
            .iter()
            .any(|event| event.color == EventColor::Death)
    );
}

#[test]
fn test_reproduction_under_good_conditions() {
    let mut params = create_test_params();
    params.reproduction_probability = 1.0;
    let mut ecosystem = empty_ecosystem(&params);
    ecosystem.spawn_creature(test_creature(0, vec2(400.0, 300.0), 200.0));

    ecosystem.step(&params);

    assert_eq!(ecosystem.population(), 2);
    assert_eq!(ecosystem.births, 1);
    let parent = &ecosystem.creatures[0];
    let child = &ecosystem.creatures[1];
    assert!((parent.energy - 149.95).abs() < 1e-3);
    assert_eq!(child.species, parent.species);
    assert_eq!(child.energy, params.initial_energy);
    assert_ne!(child.id, parent.id);
    assert!(child.pos.distance(vec2(400.0, 300.0)) < params.offspring_spread * 2.0);
}

#[test]
fn test_no_reproduction_under_poor_conditions() {
    let mut params = create_test_params();
    params.reproduction_probability = 1.0;
    let mut ecosystem = empty_ecosystem(&params);
    // temperature and humidity far off, pH perfect: conditions = 1/3
    ecosystem.environment = Environment {
        temperature: 80.0,
        humidity: 0.0,
        ph: 7.0,
    };
    for id in 0..10 {
        ecosystem.spawn_creature(test_creature(id, vec2(40.0 * id as f32, 100.0), 200.0));
    }

    for _ in 0..200 {
        ecosystem.step(&params);
    }

    assert_eq!(ecosystem.births, 0);
    assert_eq!(ecosystem.population(), 10);
}

#[test]
fn test_no_reproduction_below_energy_threshold() {
    let mut params = create_test_params();
    params.reproduction_probability = 1.0;
    let mut ecosystem = empty_ecosystem(&params);
    ecosystem.spawn_creature(test_creature(0, vec2(100.0, 100.0), 170.0));

    ecosystem.step(&params);

    assert_eq!(ecosystem.births, 0);
}

#[test]
fn test_steers_toward_nearest_food() {
    let params = create_test_params();
    let mut ecosystem = empty_ecosystem(&params);
    ecosystem.spawn_creature(test_creature(0, vec2(100.0, 100.0), 100.0));
    ecosystem.place_food(vec2(200.0, 100.0), &params);
    ecosystem.place_food(vec2(100.0, 20.0), &params);

    ecosystem.step(&params);

    let creature = &ecosystem.creatures[0];
    assert!(creature.vel.y < 0.0);
    assert!(creature.vel.x.abs() < 1e-5);
    assert!(creature.pos.y < 100.0);
}

#[test]
fn test_ignores_food_out_of_range() {
    let params = create_test_params();
    let mut ecosystem = empty_ecosystem(&params);
    ecosystem.spawn_creature(test_creature(0, vec2(100.0, 100.0), 100.0));
    ecosystem.place_food(vec2(100.0 + params.seek_radius + 50.0, 100.0), &params);

    ecosystem.step(&params);

    let creature = &ecosystem.creatures[0];
    assert!(creature.hunger > 0.0);
    assert_eq!(ecosystem.food.len(), 1);
    assert!((ecosystem.food[0].energy - (params.food_energy - params.food_decay_rate)).abs() < 1e-4);
}

#[test]
fn test_speed_limited_by_conditions() {
    let mut params = Params::default();
    params.n_creature = 40;
    let mut ecosystem = Ecosystem::with_seed(&params, 3);
    ecosystem.environment.temperature = 30.0;
    let conditions = ecosystem.conditions(&params);
    assert!(conditions < 1.0 && conditions > 0.0);

    for _ in 0..100 {
        ecosystem.step(&params);
        for creature in &ecosystem.creatures {
            assert!(creature.vel.length() <= creature.base_speed * conditions + 1e-4);
            assert!(creature.pos.x >= 0.0 && creature.pos.x < params.box_width);
            assert!(creature.pos.y >= 0.0 && creature.pos.y < params.box_height);
        }
    }
}

#[test]
fn test_place_food_wraps_into_canvas() {
    let params = create_test_params();
    let mut ecosystem = empty_ecosystem(&params);

    ecosystem.place_food(vec2(params.box_width + 10.0, -10.0), &params);

    let food = &ecosystem.food[0];
    assert!((food.pos.x - 10.0).abs() < 1e-3);
    assert!((food.pos.y - (params.box_height - 10.0)).abs() < 1e-3);
    assert_eq!(food.energy, params.food_energy);
    assert_eq!(food.radius, params.food_radius);
}

#[test]
fn test_repopulate_resets_state() {
    let params = Params::default();
    let mut ecosystem = Ecosystem::with_seed(&params, 9);
    ecosystem.place_food(vec2(10.0, 10.0), &params);
    ecosystem.environment.ph = 3.0;
    for _ in 0..10 {
        ecosystem.step(&params);
    }

    ecosystem.repopulate(&params);

    assert_eq!(ecosystem.population(), params.n_creature);
    assert!(ecosystem.food.is_empty());
    assert_eq!(ecosystem.environment, params.default_environment);
    assert_eq!(ecosystem.frame, 0);
    assert!(ecosystem.event_log.events().is_empty());
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let params = Params::default();
    let mut a = Ecosystem::with_seed(&params, 11);
    let mut b = Ecosystem::with_seed(&params, 11);

    for _ in 0..50 {
        a.step(&params);
        b.step(&params);
    }

    assert_eq!(a.creatures, b.creatures);
}

#[test]
fn test_population_by_class_sums_to_population() {
    let params = Params::default();
    let ecosystem = Ecosystem::with_seed(&params, 5);

    let counts = ecosystem.population_by_class();

    assert_eq!(counts.len(), 4);
    assert_eq!(counts.values().sum::<usize>(), ecosystem.population());
}
