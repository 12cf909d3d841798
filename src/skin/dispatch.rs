//! Enum-based skin dispatch.
//!
//! `SkinKind` wraps both skins so a presentation layer can hold the current
//! selection as a plain value and switch it without touching tracker state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::glyph::GlyphSkin;
use super::panel::{SuitPanel, TileFace};
use super::pictorial::PictorialSkin;
use super::traits::Skin;
use crate::visual::Appearance;
use crate::{CardId, CardStates, Error, EverSeen, Result, Suit, TrackerConfig};

/// Skin selected for a render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinKind {
    #[default]
    Glyph,
    Pictorial,
}

impl SkinKind {
    #[inline]
    fn skin(self) -> &'static dyn Skin {
        match self {
            SkinKind::Glyph => &GlyphSkin,
            SkinKind::Pictorial => &PictorialSkin,
        }
    }

    #[inline]
    pub fn face(self, card: CardId, appearance: &Appearance) -> TileFace {
        self.skin().face(card, appearance)
    }

    pub fn render_suit(
        self,
        suit: Suit,
        states: &CardStates,
        ever_seen: &EverSeen,
        config: &TrackerConfig,
    ) -> SuitPanel {
        self.skin().render_suit(suit, states, ever_seen, config)
    }

    pub fn render_deck(
        self,
        states: &CardStates,
        ever_seen: &EverSeen,
        config: &TrackerConfig,
    ) -> Vec<SuitPanel> {
        self.skin().render_deck(states, ever_seen, config)
    }

    pub fn name(self) -> &'static str {
        self.skin().name()
    }
}

impl fmt::Display for SkinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SkinKind {
    type Err = Error;

    /// Accepts the skin names plus the "icons"/"images" aliases.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glyph" | "icons" => Ok(SkinKind::Glyph),
            "pictorial" | "images" => Ok(SkinKind::Pictorial),
            other => Err(Error::InvalidConfig(format!("unknown skin: {}", other))),
        }
    }
}
