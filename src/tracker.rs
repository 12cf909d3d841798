//! Main tracker implementation.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::history::HistoryStore;
use crate::{CardId, Detection, Error, EverSeen, RawDetection, Result, TrackerConfig};

/// Per-card display state produced by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntensityState {
    /// Current prominence in `[0, 1]`.
    pub intensity: f64,

    /// Whether the card is inside its arrival window.
    pub is_arriving: bool,
}

impl IntensityState {
    /// Whether the card should be drawn as active at the given threshold.
    #[inline]
    pub fn is_visible(&self, display_threshold: f64) -> bool {
        self.intensity > display_threshold
    }
}

/// Output of one tick: every card still alive in the history store.
pub type CardStates = BTreeMap<CardId, IntensityState>;

/// Detection state tracker.
///
/// Keeps the history of recently detected cards, turns each frame's
/// detections into per-card intensities, and expires cards that have fully
/// faded. Calls must be serialized and `now` must never decrease.
#[derive(Debug, Clone)]
pub struct Tracker {
    /// Tracker configuration.
    pub config: TrackerConfig,

    history: HistoryStore,

    /// Timestamp of the last accepted tick.
    last_now: Option<f64>,

    /// Unrecognized labels already reported at warn level.
    warned_labels: HashSet<String>,
}

impl Tracker {
    /// Create a new tracker with the given configuration.
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            history: HistoryStore::new(),
            last_now: None,
            warned_labels: HashSet::new(),
        })
    }

    /// Update the tracker with the detections of one frame.
    ///
    /// # Arguments
    /// * `ever_seen` - Session set every detected card is added to
    /// * `detections` - Detections for this frame, at most one per card
    /// * `now` - Monotonic timestamp of the frame, in seconds
    ///
    /// # Returns
    /// Intensity state of every card that is active or still fading.
    ///
    /// # Errors
    /// [`Error::NonMonotonicTimestamp`] if `now` is earlier than the previous
    /// tick, [`Error::InvalidTimestamp`] if it is not finite. Neither the
    /// tracker nor `ever_seen` is modified in that case.
    pub fn ingest(
        &mut self,
        ever_seen: &mut EverSeen,
        detections: &[Detection],
        now: f64,
    ) -> Result<CardStates> {
        self.check_timestamp(now)?;
        self.last_now = Some(now);

        let mut detected = HashSet::with_capacity(detections.len());
        for det in detections {
            if self.history.record(det.card, det.confidence, now) {
                debug!(card = %det.card, confidence = det.confidence, "card arrived");
            }
            ever_seen.insert(det.card);
            detected.insert(det.card);
        }

        for card in self.history.expire(now, self.config.fade_duration) {
            debug!(card = %card, "card expired");
        }

        let states = self
            .history
            .iter()
            .filter_map(|(card, record)| {
                let state = if detected.contains(&card) {
                    IntensityState {
                        intensity: record.confidence,
                        is_arriving: record.is_arriving(now, self.config.arrival_duration),
                    }
                } else {
                    IntensityState {
                        intensity: record.faded_intensity(now, self.config.fade_duration)?,
                        is_arriving: false,
                    }
                };
                Some((card, state))
            })
            .collect();

        Ok(states)
    }

    /// Update the tracker with unvalidated classifier output.
    ///
    /// Detections whose label is not one of the 52 cards, or whose confidence
    /// lies outside `[0, 1]`, are dropped and logged. The rest go through
    /// [`Tracker::ingest`].
    pub fn ingest_raw(
        &mut self,
        ever_seen: &mut EverSeen,
        detections: &[RawDetection],
        now: f64,
    ) -> Result<CardStates> {
        self.check_timestamp(now)?;

        let mut accepted = Vec::with_capacity(detections.len());
        for raw in detections {
            match raw.resolve() {
                Ok(det) => accepted.push(det),
                Err(Error::UnrecognizedCard(label)) => self.report_unrecognized(label),
                Err(err) => warn!(error = %err, "dropping detection"),
            }
        }

        self.ingest(ever_seen, &accepted, now)
    }

    /// Forget all history, the last timestamp, and the set of reported labels.
    ///
    /// The session's [`EverSeen`] set is owned by the caller and reset separately.
    pub fn reset(&mut self) {
        self.history.clear();
        self.last_now = None;
        self.warned_labels.clear();
    }

    /// Read-only view of the history store.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Timestamp of the last accepted tick.
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_now
    }

    /// Number of cards currently active or fading.
    pub fn current_card_count(&self) -> usize {
        self.history.len()
    }

    fn check_timestamp(&self, now: f64) -> Result<()> {
        if !now.is_finite() {
            return Err(Error::InvalidTimestamp(now));
        }

        match self.last_now {
            Some(previous) if now < previous => {
                warn!(previous, now, "rejecting tick with non-monotonic timestamp");
                Err(Error::NonMonotonicTimestamp { previous, now })
            }
            _ => Ok(()),
        }
    }

    fn report_unrecognized(&mut self, label: String) {
        if self.warned_labels.contains(&label) {
            debug!(label = %label, "unrecognized card, dropping detection");
        } else {
            warn!(label = %label, "unrecognized card, dropping detection");
            self.warned_labels.insert(label);
        }
    }
}
