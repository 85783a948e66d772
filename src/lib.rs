//! # Species Game - Soil Ecosystem Demo
//!
//! An educational ecosystem demo: creatures forage for food placed by the
//! player while temperature, humidity and pH push their survival odds up or
//! down, next to live readings from an IoT sensor service.
//!
//! ## Features
//!
//! - Per-frame creature simulation with hunger, foraging and reproduction
//! - Environmental conditions score from three optimal ranges
//! - Cover, menu, round and game-over screens
//! - Fixed-interval telemetry polling with rolling history
//! - Species and organism information cards
//!
//! ## Core Modules
//!
//! - [`simulation::ecosystem`] - One-frame simulation step
//! - [`simulation::game`] - Screen state machine and round timer
//! - [`telemetry::poller`] - Feed polling and reading state
//! - [`shell`] - Tab/modal state and chart helpers
//! - [`config`] - JSON and environment configuration

/// Configuration loading.
pub mod config;

/// Core simulation logic and data structures.
pub mod simulation {
    /// Creature state and per-frame behaviour.
    pub mod creature;
    /// Main ecosystem simulation.
    pub mod ecosystem;
    /// Environmental inputs and the conditions score.
    pub mod environment;
    /// Recent events for display.
    pub mod event_log;
    /// Food sources placed by the player.
    pub mod food;
    /// Screen state machine.
    pub mod game;
    /// Geometric utility functions for wrapping and speed limits.
    pub mod geometric_utils;
    /// Trait for locatable entities that can be updated.
    ///
    /// The [`locatable::Locatable`] trait is implemented by all entities that have
    /// a position in 2D space and advance once per frame (`FoodSource`, `Creature`).
    pub mod locatable;
    /// Simulation parameters.
    pub mod params;
    /// Species and color classes.
    pub mod species;
}

/// IoT telemetry feeds.
pub mod telemetry {
    /// HTTP client and error type.
    pub mod client;
    /// Feed kinds, samples and reading state.
    pub mod feed;
    /// Fixed-interval poller.
    pub mod poller;
}

/// UI shell state that does not depend on a window.
pub mod shell {
    /// Species and organism cards.
    pub mod cards;
    /// Line-chart normalisation.
    pub mod sparkline;
    /// Tab and modal state.
    pub mod state;
}
