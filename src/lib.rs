//! # Cardwatch - Live Card Detection State
//!
//! Turns noisy per-frame classifier output for the 52 cards of a standard deck
//! into continuous display state.
//!
//! ## Features
//!
//! - Arrival window for freshly detected cards
//! - Linear fade-out of cards that leave the frame, with eager expiry
//! - Grow-only "ever seen" set for session progress
//! - Stateless intensity-to-visual mapping with two skins (glyph, pictorial)
//! - Progress percentage and detection status reporting
//!
//! ## Example
//!
//! ```rust
//! use cardwatch::{CardId, Detection, EverSeen, Tracker, TrackerConfig};
//!
//! let mut tracker = Tracker::new(TrackerConfig::default()).unwrap();
//! let mut ever_seen = EverSeen::new();
//!
//! let ace: CardId = "AS".parse().unwrap();
//! let detections = vec![Detection::new(ace, 0.95).unwrap()];
//! let states = tracker.ingest(&mut ever_seen, &detections, 0.0).unwrap();
//!
//! assert!(states[&ace].is_arriving);
//! assert_eq!(ever_seen.len(), 1);
//! ```

pub mod card;
pub mod config;
pub mod detection;
pub mod ever_seen;
pub mod history;
pub mod progress;
pub mod session;
pub mod skin;
pub mod tracker;
pub mod utils;
pub mod visual;

// Re-exports for convenience
pub use card::{CardId, Rank, Suit};
pub use config::{
    TrackerConfig, ARRIVAL_DURATION, DISPLAY_THRESHOLD, FADE_DURATION, LOW_CONFIDENCE_THRESHOLD,
    TOTAL_CARDS,
};
pub use detection::{collapse_max_confidence, Detection, RawDetection};
pub use ever_seen::EverSeen;
pub use history::{HistoryRecord, HistoryStore};
pub use progress::{report, ProgressReport, Status};
pub use session::{Session, TickReport};
pub use skin::{GlyphSkin, PictorialSkin, Skin, SkinKind, SuitPanel};
pub use tracker::{CardStates, IntensityState, Tracker};
pub use visual::{map_visual, Appearance, GlowPulse, Rgb, VisualParams};

// Error types
pub use crate::error::{Error, Result};

mod error {
    use thiserror::Error;

    /// Errors that can occur in the cardwatch library
    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum Error {
        #[error("Invalid configuration: {0}")]
        InvalidConfig(String),

        #[error("Unrecognized card: {0:?}")]
        UnrecognizedCard(String),

        #[error("Invalid confidence {confidence} for card {card}: expected a value in [0, 1]")]
        InvalidConfidence { card: String, confidence: f64 },

        #[error("Non-monotonic timestamp: {now} is earlier than previous {previous}")]
        NonMonotonicTimestamp { previous: f64, now: f64 },

        #[error("Invalid timestamp: {0}")]
        InvalidTimestamp(f64),
    }

    /// Result type for cardwatch operations
    pub type Result<T> = std::result::Result<T, Error>;
}
