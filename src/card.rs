//! The fixed 52-card universe: ranks, suits, and card identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::visual::Rgb;
use crate::{Error, Result};

/// Card rank, ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in display order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Short code used in classifier labels ("A", "2", ..., "10", "J", "Q", "K").
    pub fn code(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Face value (ace = 1, king = 13).
    pub fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Word used in card asset file names.
    pub fn asset_name(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            other => other.code(),
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        Rank::ALL.iter().copied().find(|r| r.code() == code)
    }
}

/// Card suit.
///
/// Suits are ordered the way the board presents them: clubs and spades
/// first, hearts and diamonds second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl Suit {
    /// All suits in display order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    /// Single-letter code used in classifier labels.
    pub fn code(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '\u{2663}',
            Suit::Spades => '\u{2660}',
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
        }
    }

    /// Hearts and diamonds.
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Base color for borders and symbols.
    pub fn color(self) -> Rgb {
        match self {
            Suit::Clubs => Rgb::new(0x2e, 0x7d, 0x32),
            Suit::Spades => Rgb::new(0x15, 0x65, 0xc0),
            Suit::Hearts => Rgb::new(0xc6, 0x28, 0x28),
            Suit::Diamonds => Rgb::new(0xe6, 0x51, 0x00),
        }
    }

    /// Brighter color used for glow and confidence bars.
    pub fn glow_color(self) -> Rgb {
        match self {
            Suit::Clubs => Rgb::new(0x4c, 0xaf, 0x50),
            Suit::Spades => Rgb::new(0x42, 0xa5, 0xf5),
            Suit::Hearts => Rgb::new(0xef, 0x53, 0x50),
            Suit::Diamonds => Rgb::new(0xff, 0x98, 0x00),
        }
    }

    /// Color for bounding boxes drawn on camera frames.
    pub fn box_color(self) -> Rgb {
        match self {
            Suit::Clubs => Rgb::new(46, 125, 80),
            Suit::Spades => Rgb::new(21, 101, 192),
            Suit::Hearts => Rgb::new(198, 80, 80),
            Suit::Diamonds => Rgb::new(230, 101, 0),
        }
    }

    /// Plural word used in card asset file names.
    pub fn asset_name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
        }
    }

    fn from_code(code: char) -> Option<Self> {
        Suit::ALL.iter().copied().find(|s| s.code() == code)
    }
}

/// One of the 52 trackable cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId {
    // Field order gives suit-major ordering, matching the board layout.
    pub suit: Suit,
    pub rank: Rank,
}

impl CardId {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Dense index in `0..52`, suit-major.
    pub fn index(self) -> usize {
        self.suit as usize * Rank::ALL.len() + self.rank as usize
    }

    /// Inverse of [`CardId::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        let suit = *Suit::ALL.get(index / Rank::ALL.len())?;
        let rank = Rank::ALL[index % Rank::ALL.len()];
        Some(Self::new(rank, suit))
    }

    /// Iterate over the full deck in suit-major order.
    pub fn all() -> impl Iterator<Item = CardId> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| CardId::new(rank, suit)))
    }

    /// Stem of the card's image asset, e.g. `ace_of_spades`.
    pub fn asset_stem(self) -> String {
        format!("{}_of_{}", self.rank.asset_name(), self.suit.asset_name())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

impl FromStr for CardId {
    type Err = Error;

    /// Parse a classifier label such as `"AS"`, `"10H"` or `"qd"`.
    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim().to_ascii_uppercase();
        let mut chars = label.chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_code)
            .ok_or_else(|| Error::UnrecognizedCard(s.to_string()))?;
        let rank = Rank::from_code(chars.as_str())
            .ok_or_else(|| Error::UnrecognizedCard(s.to_string()))?;
        Ok(CardId::new(rank, suit))
    }
}

impl TryFrom<String> for CardId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CardId> for String {
    fn from(card: CardId) -> Self {
        card.to_string()
    }
}
