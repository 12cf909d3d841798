//! Pictorial skin: card pictures dimmed by filters when inactive.

use super::panel::{ImageFilter, PictureFace, TileFace};
use super::traits::Skin;
use crate::visual::Appearance;
use crate::CardId;

/// Confidence bar inset on picture tiles.
const BAR_INSET: f64 = 4.0;

const UNKNOWN_BLACK: ImageFilter = ImageFilter {
    brightness: 0.15,
    saturation: 0.0,
    sepia: 0.0,
    hue_rotate_deg: 0.0,
};

const UNKNOWN_RED: ImageFilter = ImageFilter {
    brightness: 0.18,
    saturation: 0.4,
    sepia: 0.3,
    hue_rotate_deg: -10.0,
};

const SEEN_BLACK: ImageFilter = ImageFilter {
    brightness: 0.5,
    saturation: 0.3,
    sepia: 0.0,
    hue_rotate_deg: 0.0,
};

const SEEN_RED: ImageFilter = ImageFilter {
    brightness: 0.45,
    saturation: 0.5,
    sepia: 0.2,
    hue_rotate_deg: -10.0,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PictorialSkin;

impl Skin for PictorialSkin {
    fn name(&self) -> &'static str {
        "pictorial"
    }

    fn face(&self, card: CardId, appearance: &Appearance) -> TileFace {
        let red = card.suit.is_red();
        let (border_color, filter, bar_inset) = match appearance {
            Appearance::Active(params) => (Some(params.glow_color), None, Some(BAR_INSET)),
            Appearance::Seen => (
                Some(card.suit.color()),
                Some(if red { SEEN_RED } else { SEEN_BLACK }),
                None,
            ),
            Appearance::Unknown => (None, Some(if red { UNKNOWN_RED } else { UNKNOWN_BLACK }), None),
        };

        TileFace::Picture(PictureFace {
            asset: card.asset_stem(),
            border_color,
            filter,
            bar_inset,
        })
    }
}
