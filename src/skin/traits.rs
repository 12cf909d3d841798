//! Skin trait for turning tracker output into per-suit panels.

use super::panel::{SuitHeader, SuitPanel, Tile, TileFace};
use crate::visual::Appearance;
use crate::{CardId, CardStates, EverSeen, Rank, Suit, TrackerConfig};

/// A way of drawing the 52-card board.
///
/// Skins only read [`CardStates`] and [`EverSeen`]; choosing a skin never
/// affects tracking.
pub trait Skin {
    /// Short identifier ("glyph", "pictorial").
    fn name(&self) -> &'static str;

    /// Build the skin-specific face of one tile.
    fn face(&self, card: CardId, appearance: &Appearance) -> TileFace;

    /// Render the 13 tiles of one suit.
    fn render_suit(
        &self,
        suit: Suit,
        states: &CardStates,
        ever_seen: &EverSeen,
        config: &TrackerConfig,
    ) -> SuitPanel {
        let tiles = Rank::ALL
            .iter()
            .map(|&rank| {
                let card = CardId::new(rank, suit);
                let appearance = Appearance::resolve(card, states, ever_seen, config);
                Tile {
                    card,
                    face: self.face(card, &appearance),
                    appearance,
                }
            })
            .collect();

        SuitPanel {
            header: SuitHeader::new(suit, ever_seen),
            tiles,
        }
    }

    /// Render all four suits in board order.
    fn render_deck(
        &self,
        states: &CardStates,
        ever_seen: &EverSeen,
        config: &TrackerConfig,
    ) -> Vec<SuitPanel> {
        Suit::ALL
            .iter()
            .map(|&suit| self.render_suit(suit, states, ever_seen, config))
            .collect()
    }
}
