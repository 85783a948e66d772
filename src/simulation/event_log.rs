//! Event logging system for displaying recent simulation events.

use std::collections::VecDeque;

/// A logged event for display in the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEvent {
    /// Frame on which the event occurred
    pub frame: u64,
    /// Human-readable description of the event
    pub description: String,
    /// Color hint for the event (for UI display)
    pub color: EventColor,
}

/// Color categories for events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColor {
    /// Offspring born (green)
    Birth,
    /// Creature starved (gray)
    Death,
    /// Creature fed on a food source (yellow)
    Feeding,
    /// Player placed food (blue)
    FoodPlaced,
}

/// Event log that tracks recent simulation events
#[derive(Debug, Clone)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Adds a new event to the log
    pub fn log(&mut self, frame: u64, description: String, color: EventColor) {
        self.events.push_front(LoggedEvent {
            frame,
            description,
            color,
        });

        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Clears all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
