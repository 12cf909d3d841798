//! Session progress and detection status.

use std::fmt;

use serde::Serialize;

use crate::utils::{floor_percent, mean};
use crate::{CardStates, TrackerConfig, TOTAL_CARDS};

/// Short classification of the current detection quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    /// Detection is not running.
    Waiting,
    /// Running, but no card is visible.
    Detecting,
    /// Visible cards have a low mean intensity.
    LowConfidence,
    /// Visible cards have a mean intensity at or above the threshold.
    Stable,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Waiting => "Waiting",
            Status::Detecting => "Detecting",
            Status::LowConfidence => "Low confidence",
            Status::Stable => "Stable",
        }
    }

    /// Longer text suitable for a progress bar caption.
    pub fn hint(self) -> &'static str {
        match self {
            Status::Waiting => "Waiting for cards\u{2026}",
            Status::Detecting => "Detecting\u{2026}",
            Status::LowConfidence => "Low confidence \u{2013} adjust lighting",
            Status::Stable => "Stable detection",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Completion and status derived from one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    /// Distinct cards seen this session.
    pub seen: usize,
    /// `floor(seen / 52 * 100)`.
    pub percent: u8,
    pub status: Status,
}

impl ProgressReport {
    /// Caption such as `"5 / 52 detected • Stable detection"`.
    pub fn summary(&self) -> String {
        format!(
            "{} / {} detected \u{2022} {}",
            self.seen,
            TOTAL_CARDS,
            self.status.hint()
        )
    }
}

/// Derive progress from the session's ever-seen count and the tick's
/// active intensities.
///
/// Intensities at or below `config.display_threshold` are ignored when
/// classifying the status.
pub fn report(
    ever_seen_count: usize,
    active_intensities: &[f64],
    is_running: bool,
    config: &TrackerConfig,
) -> ProgressReport {
    let seen = ever_seen_count.min(TOTAL_CARDS);
    let percent = floor_percent(seen as f64 / TOTAL_CARDS as f64);

    let status = if !is_running {
        Status::Waiting
    } else {
        let visible: Vec<f64> = active_intensities
            .iter()
            .copied()
            .filter(|&i| i > config.display_threshold)
            .collect();

        match mean(&visible) {
            None => Status::Detecting,
            Some(avg) if avg < config.low_confidence_threshold => Status::LowConfidence,
            Some(_) => Status::Stable,
        }
    };

    ProgressReport { seen, percent, status }
}

/// Intensities of a tick's card states, for [`report`].
pub fn intensities(states: &CardStates) -> Vec<f64> {
    states.values().map(|s| s.intensity).collect()
}
