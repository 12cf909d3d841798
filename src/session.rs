//! Caller-owned session context tying the tracker to its ever-seen set.

use serde::Serialize;

use crate::progress::{intensities, report};
use crate::skin::{SkinKind, SuitPanel};
use crate::{CardStates, Detection, EverSeen, ProgressReport, RawDetection, Result, Tracker, TrackerConfig};

/// Result of one [`Session::tick`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    pub states: CardStates,
    pub progress: ProgressReport,
}

/// One detection session.
///
/// Owns a [`Tracker`] and the session's [`EverSeen`] set, and keeps the last
/// tick's states so a stopped session can still be redrawn. Nothing here is
/// reset implicitly; call [`Session::reset`] to start over.
#[derive(Debug, Clone)]
pub struct Session {
    tracker: Tracker,
    ever_seen: EverSeen,
    last_states: CardStates,
}

impl Session {
    pub fn new(config: TrackerConfig) -> Result<Self> {
        Ok(Self {
            tracker: Tracker::new(config)?,
            ever_seen: EverSeen::new(),
            last_states: CardStates::new(),
        })
    }

    /// Ingest one frame of detections and report progress.
    ///
    /// `is_running` is the caller's running flag; it only affects the status.
    /// On error nothing changes, including the cached states.
    pub fn tick(&mut self, detections: &[Detection], now: f64, is_running: bool) -> Result<TickReport> {
        let states = self.tracker.ingest(&mut self.ever_seen, detections, now)?;
        Ok(self.finish_tick(states, is_running))
    }

    /// Like [`Session::tick`], for unvalidated classifier output.
    pub fn tick_raw(
        &mut self,
        detections: &[RawDetection],
        now: f64,
        is_running: bool,
    ) -> Result<TickReport> {
        let states = self.tracker.ingest_raw(&mut self.ever_seen, detections, now)?;
        Ok(self.finish_tick(states, is_running))
    }

    fn finish_tick(&mut self, states: CardStates, is_running: bool) -> TickReport {
        self.last_states = states.clone();
        TickReport {
            progress: self.progress(is_running),
            states,
        }
    }

    /// Progress computed from the last tick's states.
    pub fn progress(&self, is_running: bool) -> ProgressReport {
        report(
            self.ever_seen.len(),
            &intensities(&self.last_states),
            is_running,
            &self.tracker.config,
        )
    }

    /// Render the board from the last tick's states with `skin`.
    pub fn render(&self, skin: SkinKind) -> Vec<SuitPanel> {
        skin.render_deck(&self.last_states, &self.ever_seen, &self.tracker.config)
    }

    pub fn last_states(&self) -> &CardStates {
        &self.last_states
    }

    pub fn ever_seen(&self) -> &EverSeen {
        &self.ever_seen
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.tracker.config
    }

    /// Forget history, the ever-seen set, and the cached states.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.ever_seen.reset();
        self.last_states.clear();
    }
}
