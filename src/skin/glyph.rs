//! Symbolic skin: rank text and suit symbol.

use super::panel::{GlyphFace, TileFace};
use super::traits::Skin;
use crate::visual::Appearance;
use crate::CardId;

/// Symbol opacity of a seen card.
const SEEN_SYMBOL_OPACITY: f64 = 0.5;

/// Confidence bar inset on glyph tiles.
const BAR_INSET: f64 = 6.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphSkin;

impl Skin for GlyphSkin {
    fn name(&self) -> &'static str {
        "glyph"
    }

    fn face(&self, card: CardId, appearance: &Appearance) -> TileFace {
        let suit = card.suit;
        let mut face = GlyphFace {
            rank_label: card.rank.code(),
            symbol: suit.symbol(),
            border_color: None,
            rank_alpha: None,
            symbol_color: None,
            symbol_opacity: None,
            bar_inset: None,
        };

        match appearance {
            Appearance::Active(params) => {
                face.border_color = Some(params.glow_color);
                face.rank_alpha = Some(params.alpha);
                face.symbol_color = Some(suit.color());
                face.symbol_opacity = Some(params.alpha);
                face.bar_inset = Some(BAR_INSET);
            }
            Appearance::Seen => {
                face.border_color = Some(suit.color());
                face.symbol_color = Some(suit.color());
                face.symbol_opacity = Some(SEEN_SYMBOL_OPACITY);
            }
            Appearance::Unknown => {}
        }

        TileFace::Glyph(face)
    }
}
