//! Stateless mapping from tracker intensities to display parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::{floor_percent, round_to};
use crate::{CardId, CardStates, EverSeen, TrackerConfig};

/// Glow radius at zero intensity.
pub const GLOW_INNER_MIN: f64 = 6.0;
/// Glow radius added at full intensity.
pub const GLOW_INNER_SPAN: f64 = 10.0;
pub const GLOW_OUTER_MIN: f64 = 12.0;
pub const GLOW_OUTER_SPAN: f64 = 20.0;

/// Seconds for one full glow pulse.
pub const PULSE_PERIOD: f64 = 1.8;
/// Fraction of the glow radii at the dim end of a pulse.
pub const PULSE_LOW_SCALE: f64 = 0.6;

/// Peak scale of the arrival pop.
pub const POP_PEAK_SCALE: f64 = 1.08;
/// Point in the pop (as a fraction of its duration) where the peak is reached.
pub const POP_PEAK_AT: f64 = 0.4;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbbaa` with the alpha channel taken from `alpha` in `[0, 1]`.
    pub fn hex_with_alpha(&self, alpha: f64) -> String {
        format!("{}{:02x}", self, alpha_to_byte(alpha))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Convert an alpha in `[0, 1]` to a byte, truncating.
pub fn alpha_to_byte(alpha: f64) -> u8 {
    (alpha * 255.0).clamp(0.0, 255.0) as u8
}

/// Display parameters for one active card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualParams {
    pub glow_color: Rgb,
    pub glow_radius_inner: f64,
    pub glow_radius_outer: f64,
    /// Intensity rounded to two decimals.
    pub alpha: f64,
    /// Confidence bar width, `floor(intensity * 100)`.
    pub bar_width_percent: u8,
    pub trigger_arrival_animation: bool,
}

impl VisualParams {
    /// Keyframes of the idle glow pulse.
    pub fn pulse(&self) -> GlowPulse {
        GlowPulse {
            period: PULSE_PERIOD,
            low: GlowFrame {
                inner_radius: self.glow_radius_inner * PULSE_LOW_SCALE,
                outer_radius: self.glow_radius_outer * PULSE_LOW_SCALE,
                inner_alpha: self.alpha,
                outer_alpha: self.alpha * 0.5,
            },
            high: GlowFrame {
                inner_radius: self.glow_radius_inner,
                outer_radius: self.glow_radius_outer,
                inner_alpha: self.alpha,
                outer_alpha: self.alpha * 0.7,
            },
        }
    }
}

/// Map an intensity to display parameters.
///
/// Radii grow linearly with intensity. `base_color` is passed through as
/// the glow color.
pub fn map_visual(intensity: f64, is_arriving: bool, base_color: Rgb) -> VisualParams {
    let intensity = intensity.clamp(0.0, 1.0);

    VisualParams {
        glow_color: base_color,
        glow_radius_inner: GLOW_INNER_MIN + GLOW_INNER_SPAN * intensity,
        glow_radius_outer: GLOW_OUTER_MIN + GLOW_OUTER_SPAN * intensity,
        alpha: round_to(intensity, 2),
        bar_width_percent: floor_percent(intensity),
        trigger_arrival_animation: is_arriving,
    }
}

/// One end of the glow pulse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlowFrame {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub inner_alpha: f64,
    pub outer_alpha: f64,
}

/// Glow animation that oscillates `low -> high -> low` once per `period`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlowPulse {
    pub period: f64,
    pub low: GlowFrame,
    pub high: GlowFrame,
}

/// Scale of a card during its arrival pop, for `progress` in `[0, 1]`.
///
/// Rises linearly to [`POP_PEAK_SCALE`] at [`POP_PEAK_AT`] and falls back
/// to 1 at the end.
pub fn pop_scale(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    let rise = if t <= POP_PEAK_AT {
        t / POP_PEAK_AT
    } else {
        (1.0 - t) / (1.0 - POP_PEAK_AT)
    };
    1.0 + (POP_PEAK_SCALE - 1.0) * rise
}

/// How a card is drawn this tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Appearance {
    /// Visible intensity, drawn with glow.
    Active(VisualParams),
    /// Detected earlier in the session but not visible now.
    Seen,
    /// Never detected.
    Unknown,
}

impl Appearance {
    /// Decide the appearance of `card` from the tick's states and the session set.
    pub fn resolve(
        card: CardId,
        states: &CardStates,
        ever_seen: &EverSeen,
        config: &TrackerConfig,
    ) -> Self {
        match states.get(&card) {
            Some(state) if state.is_visible(config.display_threshold) => Appearance::Active(
                map_visual(state.intensity, state.is_arriving, card.suit.glow_color()),
            ),
            _ if ever_seen.contains(card) => Appearance::Seen,
            _ => Appearance::Unknown,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Appearance::Active(_))
    }

    pub fn is_seen(&self) -> bool {
        matches!(self, Appearance::Seen)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Appearance::Unknown)
    }

    pub fn visual(&self) -> Option<&VisualParams> {
        match self {
            Appearance::Active(params) => Some(params),
            _ => None,
        }
    }
}
