//! Per-card detection history with time-to-live expiry.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::CardId;

/// Last known detection state of a card that is active or still fading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryRecord {
    /// Confidence of the most recent detection.
    pub confidence: f64,

    /// Time of the detection that created this record.
    pub first_seen_at: f64,

    /// Time of the most recent detection.
    pub last_seen_at: f64,
}

impl HistoryRecord {
    fn new(confidence: f64, now: f64) -> Self {
        Self {
            confidence,
            first_seen_at: now,
            last_seen_at: now,
        }
    }

    /// Seconds since the card was last detected.
    #[inline]
    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.last_seen_at
    }

    /// Whether `now` still falls inside the arrival window.
    #[inline]
    pub fn is_arriving(&self, now: f64, arrival_duration: f64) -> bool {
        now - self.first_seen_at < arrival_duration
    }

    /// Linearly decayed confidence, or `None` once fully faded.
    pub fn faded_intensity(&self, now: f64, fade_duration: f64) -> Option<f64> {
        let elapsed = self.elapsed(now);
        if elapsed >= fade_duration {
            return None;
        }
        Some(self.confidence * (1.0 - elapsed / fade_duration))
    }
}

/// Keyed store of [`HistoryRecord`]s.
///
/// Expiry is explicit: nothing is removed until [`HistoryStore::expire`] runs.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: BTreeMap<CardId, HistoryRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a detection of `card` at `now`.
    ///
    /// Returns `true` when this created a new record (a fresh arrival).
    /// An existing record keeps its `first_seen_at`.
    pub fn record(&mut self, card: CardId, confidence: f64, now: f64) -> bool {
        match self.records.get_mut(&card) {
            Some(record) => {
                record.confidence = confidence;
                record.last_seen_at = now;
                false
            }
            None => {
                self.records.insert(card, HistoryRecord::new(confidence, now));
                true
            }
        }
    }

    /// Remove every record last seen `fade_duration` or more seconds before `now`.
    ///
    /// Returns the expired cards.
    pub fn expire(&mut self, now: f64, fade_duration: f64) -> Vec<CardId> {
        let mut expired = Vec::new();
        self.records.retain(|card, record| {
            let alive = record.elapsed(now) < fade_duration;
            if !alive {
                expired.push(*card);
            }
            alive
        });
        expired
    }

    pub fn get(&self, card: CardId) -> Option<&HistoryRecord> {
        self.records.get(&card)
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.records.contains_key(&card)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, &HistoryRecord)> {
        self.records.iter().map(|(card, record)| (*card, record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};
    use approx::assert_relative_eq;

    fn ace() -> CardId {
        CardId::new(Rank::Ace, Suit::Spades)
    }

    #[test]
    fn test_record_creates_then_refreshes() {
        let mut store = HistoryStore::new();

        assert!(store.record(ace(), 0.9, 1.0));
        assert!(!store.record(ace(), 0.6, 1.5));

        let record = store.get(ace()).unwrap();
        assert_eq!(record.first_seen_at, 1.0);
        assert_eq!(record.last_seen_at, 1.5);
        assert_relative_eq!(record.confidence, 0.6, epsilon = 1e-10);
    }

    #[test]
    fn test_faded_intensity() {
        let record = HistoryRecord::new(0.8, 2.0);

        assert_relative_eq!(record.faded_intensity(2.0, 0.8).unwrap(), 0.8, epsilon = 1e-10);
        assert_relative_eq!(record.faded_intensity(2.2, 0.8).unwrap(), 0.6, epsilon = 1e-10);
        assert_eq!(record.faded_intensity(2.8, 0.8), None);
        assert_eq!(record.faded_intensity(5.0, 0.8), None);
    }

    #[test]
    fn test_arrival_window_is_half_open() {
        let record = HistoryRecord::new(1.0, 0.0);

        assert!(record.is_arriving(0.0, 0.35));
        assert!(record.is_arriving(0.34, 0.35));
        assert!(!record.is_arriving(0.35, 0.35));
    }

    #[test]
    fn test_expire_removes_only_stale_records() {
        let mut store = HistoryStore::new();
        let king = CardId::new(Rank::King, Suit::Hearts);

        store.record(ace(), 0.9, 0.0);
        store.record(king, 0.9, 0.5);

        let expired = store.expire(0.8, 0.8);

        assert_eq!(expired, vec![ace()]);
        assert!(!store.contains(ace()));
        assert!(store.contains(king));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut store = HistoryStore::new();
        store.record(ace(), 0.9, 0.0);
        store.clear();
        assert!(store.is_empty());
    }
}
