//! Detection structs for input to the tracker.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{CardId, Error, Result};

/// A validated detection of one card in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Detected card.
    pub card: CardId,

    /// Classifier confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Detection {
    /// Create a new detection.
    ///
    /// # Arguments
    /// * `card` - Detected card
    /// * `confidence` - Classifier confidence, must be in `[0, 1]`
    pub fn new(card: CardId, confidence: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(Error::InvalidConfidence {
                card: card.to_string(),
                confidence,
            });
        }

        Ok(Self { card, confidence })
    }

    /// Create a detection from a classifier label such as `"AS"`.
    pub fn from_label(label: &str, confidence: f64) -> Result<Self> {
        Self::new(label.parse()?, confidence)
    }
}

/// Unvalidated detection as reported by a classifier adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    /// Class name reported by the model.
    pub label: String,

    /// Model confidence.
    pub confidence: f64,
}

impl RawDetection {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    /// Validate against the card universe.
    pub fn resolve(&self) -> Result<Detection> {
        Detection::from_label(&self.label, self.confidence)
    }
}

/// Collapse per-frame classifier output to at most one detection per card,
/// keeping the highest confidence.
///
/// Labels are grouped by the card they resolve to, so `"AS"` and `"as"`
/// collapse together and the kept entry carries the canonical label.
/// Entries that do not resolve to a valid [`Detection`] (unknown label or
/// confidence outside `[0, 1]`) never win a comparison; they are passed
/// through unchanged so [`Tracker::ingest_raw`](crate::Tracker::ingest_raw)
/// can log and drop them. First-occurrence order is preserved.
pub fn collapse_max_confidence<I>(detections: I) -> Vec<RawDetection>
where
    I: IntoIterator<Item = RawDetection>,
{
    let mut collapsed: Vec<RawDetection> = Vec::new();
    let mut positions: HashMap<CardId, usize> = HashMap::new();

    for raw in detections {
        let Ok(det) = raw.resolve() else {
            collapsed.push(raw);
            continue;
        };

        match positions.get(&det.card) {
            Some(&i) => {
                if det.confidence > collapsed[i].confidence {
                    collapsed[i].confidence = det.confidence;
                }
            }
            None => {
                positions.insert(det.card, collapsed.len());
                collapsed.push(RawDetection::new(det.card.to_string(), det.confidence));
            }
        }
    }

    collapsed
}
