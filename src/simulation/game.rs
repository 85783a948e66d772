//! Screen state machine wrapped around the ecosystem.
//!
//! `Cover -> Menu -> Playing -> (GameOverAllDead | GameOverTimeUp) -> Cover`,
//! driven by pointer clicks and by the population and round timer.

use macroquad::math::Vec2;
use tracing::info;

use super::ecosystem::Ecosystem;
use super::params::Params;

/// The screen the game is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Title screen.
    Cover,
    /// Instructions screen.
    Menu,
    /// A round is running.
    Playing,
    /// Every creature died before the timer ran out.
    GameOverAllDead,
    /// The round timer ran out.
    GameOverTimeUp {
        /// Creatures alive when time ran out.
        survivors: usize,
    },
}

impl GameState {
    /// Checks if the state ends a round.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameState::GameOverAllDead | GameState::GameOverTimeUp { .. }
        )
    }
}

/// Game context: the screen state, the ecosystem and the round clock.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current screen.
    pub state: GameState,
    /// Simulation state.
    pub ecosystem: Ecosystem,
    /// Simulation parameters.
    pub params: Params,
    started_at_ms: Option<f64>,
}

impl Game {
    /// Creates a game on the cover screen with an OS-seeded ecosystem.
    pub fn new(params: Params) -> Self {
        let ecosystem = Ecosystem::new(&params);
        Self::with_ecosystem(params, ecosystem)
    }

    /// Creates a game on the cover screen around an existing ecosystem.
    pub fn with_ecosystem(params: Params, ecosystem: Ecosystem) -> Self {
        Self {
            state: GameState::Cover,
            ecosystem,
            params,
            started_at_ms: None,
        }
    }

    /// Handles a pointer click at `pos` (world units) at time `now_ms`.
    pub fn click(&mut self, pos: Vec2, now_ms: f64) {
        match self.state {
            GameState::Cover => self.state = GameState::Menu,
            GameState::Menu => {
                self.state = GameState::Playing;
                self.started_at_ms = Some(now_ms);
                info!(creatures = self.ecosystem.population(), "round started");
            }
            GameState::Playing => self.ecosystem.place_food(pos, &self.params),
            GameState::GameOverAllDead | GameState::GameOverTimeUp { .. } => self.reset(),
        }
    }

    /// Returns to the cover screen with a fresh population, no food and the
    /// default environment.
    pub fn reset(&mut self) {
        self.ecosystem.repopulate(&self.params);
        self.started_at_ms = None;
        self.state = GameState::Cover;
    }

    /// Steps the ecosystem once while playing and applies end-of-round checks.
    ///
    /// Extinction is checked before the timer, so a population that dies on
    /// the last frame ends as `GameOverAllDead`.
    pub fn update(&mut self, now_ms: f64) {
        if self.state != GameState::Playing {
            return;
        }

        self.ecosystem.step(&self.params);

        if self.ecosystem.creatures.is_empty() {
            self.state = GameState::GameOverAllDead;
            info!(frame = self.ecosystem.frame, "round over: all creatures died");
        } else if self.elapsed_ms(now_ms) >= self.params.game_duration_ms {
            let survivors = self.ecosystem.population();
            self.state = GameState::GameOverTimeUp { survivors };
            info!(survivors, "round over: time up");
        }
    }

    /// Milliseconds since the round started, 0 outside a round.
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        self.started_at_ms
            .map(|start| (now_ms - start).max(0.0))
            .unwrap_or(0.0)
    }

    /// Milliseconds left in the round.
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        (self.params.game_duration_ms - self.elapsed_ms(now_ms)).max(0.0)
    }

    /// Sets the temperature slider value.
    pub fn set_temperature(&mut self, value: f32) {
        self.ecosystem.environment.set_temperature(value);
    }

    /// Sets the humidity slider value.
    pub fn set_humidity(&mut self, value: f32) {
        self.ecosystem.environment.set_humidity(value);
    }

    /// Sets the pH slider value.
    pub fn set_ph(&mut self, value: f32) {
        self.ecosystem.environment.set_ph(value);
    }

    /// Current conditions score.
    pub fn conditions(&self) -> f32 {
        self.ecosystem.conditions(&self.params)
    }
}
