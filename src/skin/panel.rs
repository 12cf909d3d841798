//! Skin-independent panel descriptors.

use serde::Serialize;

use crate::visual::{Appearance, Rgb};
use crate::{CardId, EverSeen, Rank, Suit};

/// Heading of a suit panel, e.g. "♠ Spades (3/13)".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuitHeader {
    pub suit: Suit,
    pub symbol: char,
    pub name: &'static str,
    pub color: Rgb,
    /// Ranks of this suit seen this session.
    pub seen: usize,
    pub total: usize,
}

impl SuitHeader {
    pub fn new(suit: Suit, ever_seen: &EverSeen) -> Self {
        Self {
            suit,
            symbol: suit.symbol(),
            name: suit.name(),
            color: suit.color(),
            seen: ever_seen.count_in_suit(suit),
            total: Rank::ALL.len(),
        }
    }

    pub fn title(&self) -> String {
        format!("{} {} ({}/{})", self.symbol, self.name, self.seen, self.total)
    }
}

/// Filter applied to a card picture that is not currently active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImageFilter {
    pub brightness: f64,
    pub saturation: f64,
    pub sepia: f64,
    pub hue_rotate_deg: f64,
}

/// Glyph-skin tile face: rank text plus suit symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphFace {
    pub rank_label: &'static str,
    pub symbol: char,
    pub border_color: Option<Rgb>,
    /// Opacity of the rank text, set only while active.
    pub rank_alpha: Option<f64>,
    pub symbol_color: Option<Rgb>,
    pub symbol_opacity: Option<f64>,
    /// Horizontal inset of the confidence bar, set only while active.
    pub bar_inset: Option<f64>,
}

/// Pictorial-skin tile face: card picture plus filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PictureFace {
    /// Asset stem, e.g. `queen_of_hearts`.
    pub asset: String,
    pub border_color: Option<Rgb>,
    pub filter: Option<ImageFilter>,
    pub bar_inset: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "skin", rename_all = "snake_case")]
pub enum TileFace {
    Glyph(GlyphFace),
    Picture(PictureFace),
}

/// One card slot on the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
    pub card: CardId,
    pub appearance: Appearance,
    pub face: TileFace,
}

/// The 13 tiles of one suit with their header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuitPanel {
    pub header: SuitHeader,
    pub tiles: Vec<Tile>,
}

impl SuitPanel {
    /// Number of tiles currently drawn as active.
    pub fn active_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.appearance.is_active()).count()
    }
}
