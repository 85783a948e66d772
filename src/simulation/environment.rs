//! Ambient conditions and the suitability score derived from them.
//!
//! Each factor is scored by its distance from the midpoint of an optimal range;
//! the conditions score is the mean of the three factor scores.

use serde::{Deserialize, Serialize};

use super::params::Params;

/// An optimal range for one environmental factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalRange {
    /// Lower end of the optimal range.
    pub min: f32,
    /// Upper end of the optimal range.
    pub max: f32,
    /// Distance from the midpoint at which the factor score reaches zero.
    pub scale: f32,
}

impl OptimalRange {
    /// Creates a new range.
    pub const fn new(min: f32, max: f32, scale: f32) -> Self {
        Self { min, max, scale }
    }

    /// Midpoint of the range.
    pub fn midpoint(&self) -> f32 {
        f32::midpoint(self.min, self.max)
    }

    /// Scores `actual` in [0, 1]: 1 at the midpoint, falling linearly to 0
    /// at `scale` units away.
    ///
    /// # Arguments
    ///
    /// * `actual` - The measured value of the factor.
    pub fn score(&self, actual: f32) -> f32 {
        if self.scale <= 0.0 {
            return if actual == self.midpoint() { 1.0 } else { 0.0 };
        }
        (1.0 - (actual - self.midpoint()).abs() / self.scale).clamp(0.0, 1.0)
    }
}

/// The three environmental inputs exposed to the player as sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
    /// Soil pH.
    pub ph: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            temperature: 22.0,
            humidity: 60.0,
            ph: 7.0,
        }
    }
}

impl Environment {
    /// Computes the conditions score: the mean of the three factor scores.
    ///
    /// # Returns
    ///
    /// A value in [0, 1]; 1 when every factor sits at its range midpoint.
    pub fn conditions(&self, params: &Params) -> f32 {
        let temperature = params.temperature_range.score(self.temperature);
        let humidity = params.humidity_range.score(self.humidity);
        let ph = params.ph_range.score(self.ph);
        (temperature + humidity + ph) / 3.0
    }

    /// Sets the temperature.
    pub fn set_temperature(&mut self, value: f32) {
        self.temperature = value;
    }

    /// Sets the relative humidity.
    pub fn set_humidity(&mut self, value: f32) {
        self.humidity = value;
    }

    /// Sets the pH.
    pub fn set_ph(&mut self, value: f32) {
        self.ph = value;
    }
}
