//! Tracker configuration and the fixed display constants.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of cards in the universe.
pub const TOTAL_CARDS: usize = 52;

/// Seconds a card keeps fading after it was last detected.
pub const FADE_DURATION: f64 = 0.8;

/// Seconds after first detection during which a card counts as arriving.
pub const ARRIVAL_DURATION: f64 = 0.35;

/// Intensities at or below this value are visually inactive.
pub const DISPLAY_THRESHOLD: f64 = 0.01;

/// Mean active intensity below which detection is reported as low confidence.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Configuration for the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Seconds for a card to fade from its last confidence to zero.
    pub fade_duration: f64,

    /// Length of the arrival window in seconds.
    pub arrival_duration: f64,

    /// Intensity at or below which a card is treated as inactive.
    pub display_threshold: f64,

    /// Mean intensity below which the status is "Low confidence".
    pub low_confidence_threshold: f64,
}

impl TrackerConfig {
    /// Check that every duration is finite and every threshold lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !self.fade_duration.is_finite() || self.fade_duration <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "fade_duration must be positive, got {}",
                self.fade_duration
            )));
        }

        if !self.arrival_duration.is_finite() || self.arrival_duration < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "arrival_duration must be non-negative, got {}",
                self.arrival_duration
            )));
        }

        for (name, value) in [
            ("display_threshold", self.display_threshold),
            ("low_confidence_threshold", self.low_confidence_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            fade_duration: FADE_DURATION,
            arrival_duration: ARRIVAL_DURATION,
            display_threshold: DISPLAY_THRESHOLD,
            low_confidence_threshold: LOW_CONFIDENCE_THRESHOLD,
        }
    }
}
