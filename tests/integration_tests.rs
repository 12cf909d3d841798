//! Integration tests for cardwatch.
//!
//! These tests drive complete tick sequences through the public API.

use approx::assert_relative_eq;

use cardwatch::{
    progress::{intensities, report},
    CardId, Detection, Error, EverSeen, RawDetection, Session, SkinKind, Status, Tracker,
    TrackerConfig,
};

fn card(label: &str) -> CardId {
    label.parse().unwrap()
}

fn det(label: &str, confidence: f64) -> Detection {
    Detection::from_label(label, confidence).unwrap()
}

// =============================================================================
// Test 1: Arrival, hold, fade, expiry
// =============================================================================

#[test]
fn test_integration_ace_of_spades_lifecycle() {
    let mut tracker = Tracker::new(TrackerConfig::default()).expect("Failed to create tracker");
    let mut ever_seen = EverSeen::new();
    let ace = card("AS");

    let states = tracker.ingest(&mut ever_seen, &[det("AS", 0.95)], 0.0).unwrap();
    assert_relative_eq!(states[&ace].intensity, 0.95, epsilon = 1e-10);
    assert!(states[&ace].is_arriving);

    let states = tracker.ingest(&mut ever_seen, &[det("AS", 0.90)], 0.5).unwrap();
    assert_relative_eq!(states[&ace].intensity, 0.90, epsilon = 1e-10);
    assert!(!states[&ace].is_arriving);

    let states = tracker.ingest(&mut ever_seen, &[], 0.9).unwrap();
    assert_relative_eq!(states[&ace].intensity, 0.45, epsilon = 1e-9);
    assert!(!states[&ace].is_arriving);

    let states = tracker.ingest(&mut ever_seen, &[], 1.3).unwrap();
    assert!(!states.contains_key(&ace), "AS should have expired at t=1.3");
    assert!(ever_seen.contains(ace));
}

// =============================================================================
// Test 2: Arrival window boundaries
// =============================================================================

#[test]
fn test_integration_arrival_window() {
    let mut tracker = Tracker::new(TrackerConfig::default()).unwrap();
    let mut ever_seen = EverSeen::new();
    for (now, expected) in [(0.0, true), (0.1, true), (0.3, true), (0.35, false), (0.6, false)] {
        let states = tracker.ingest(&mut ever_seen, &[det("JD", 0.8)], now).unwrap();
        assert_eq!(
            states[&card("JD")].is_arriving,
            expected,
            "t={}: expected is_arriving={}",
            now,
            expected
        );
    }
}

// =============================================================================
// Test 3: Re-arrival after expiry
// =============================================================================

#[test]
fn test_integration_rearrival_resets_animation() {
    let mut tracker = Tracker::new(TrackerConfig::default()).unwrap();
    let mut ever_seen = EverSeen::new();

    tracker.ingest(&mut ever_seen, &[det("5C", 0.9)], 0.0).unwrap();
    tracker.ingest(&mut ever_seen, &[det("5C", 0.9)], 0.5).unwrap();
    let states = tracker.ingest(&mut ever_seen, &[], 1.4).unwrap();
    assert!(states.is_empty());

    let t2 = 2.0;
    let states = tracker.ingest(&mut ever_seen, &[det("5C", 0.7)], t2).unwrap();
    assert!(states[&card("5C")].is_arriving);
    let states = tracker.ingest(&mut ever_seen, &[det("5C", 0.7)], t2 + 0.2).unwrap();
    assert!(states[&card("5C")].is_arriving);
    let states = tracker.ingest(&mut ever_seen, &[det("5C", 0.7)], t2 + 0.4).unwrap();
    assert!(!states[&card("5C")].is_arriving);

    assert_eq!(ever_seen.len(), 1);
}

// =============================================================================
// Test 4: Multiple cards, independent timelines
// =============================================================================

#[test]
fn test_integration_independent_cards() {
    let mut tracker = Tracker::new(TrackerConfig::default()).unwrap();
    let mut ever_seen = EverSeen::new();

    tracker
        .ingest(&mut ever_seen, &[det("AH", 1.0), det("2H", 0.6)], 0.0)
        .unwrap();
    // 2H leaves, AH stays
    let states = tracker.ingest(&mut ever_seen, &[det("AH", 1.0)], 0.2).unwrap();

    assert_relative_eq!(states[&card("AH")].intensity, 1.0, epsilon = 1e-10);
    assert_relative_eq!(states[&card("2H")].intensity, 0.6 * 0.75, epsilon = 1e-9);

    // A third card arrives while 2H is fading
    let states = tracker
        .ingest(&mut ever_seen, &[det("AH", 1.0), det("3H", 0.5)], 0.6)
        .unwrap();
    assert_eq!(states.len(), 3);
    assert!(states[&card("3H")].is_arriving);
    assert_relative_eq!(states[&card("2H")].intensity, 0.6 * 0.25, epsilon = 1e-9);

    let states = tracker.ingest(&mut ever_seen, &[det("AH", 1.0)], 0.8).unwrap();
    assert!(!states.contains_key(&card("2H")));
    assert!(states.contains_key(&card("3H")));
    assert_eq!(ever_seen.len(), 3);
}

// =============================================================================
// Test 5: Progress and status
// =============================================================================

#[test]
fn test_integration_progress_after_five_cards() {
    let config = TrackerConfig::default();
    let mut tracker = Tracker::new(config).unwrap();
    let mut ever_seen = EverSeen::new();

    for (i, label) in ["AS", "KS", "QH", "10D", "2C"].iter().enumerate() {
        tracker
            .ingest(&mut ever_seen, &[det(label, 0.9)], i as f64 * 0.1)
            .unwrap();
    }
    let states = tracker.ingest(&mut ever_seen, &[det("2C", 0.9)], 0.5).unwrap();

    let progress = report(ever_seen.len(), &intensities(&states), true, &config);
    assert_eq!(progress.seen, 5);
    assert_eq!(progress.percent, 9);
}

#[test]
fn test_integration_low_confidence_status() {
    let progress = report(2, &[0.5, 0.4], true, &TrackerConfig::default());
    assert_eq!(progress.status, Status::LowConfidence);
    assert_eq!(progress.status.label(), "Low confidence");
}

#[test]
fn test_integration_status_follows_fade() {
    let mut session = Session::new(TrackerConfig::default()).unwrap();

    let tick = session.tick(&[det("9S", 0.95)], 0.0, true).unwrap();
    assert_eq!(tick.progress.status, Status::Stable);

    // Mid fade the mean drops below 0.7
    let tick = session.tick(&[], 0.4, true).unwrap();
    assert_eq!(tick.progress.status, Status::LowConfidence);

    let tick = session.tick(&[], 1.0, true).unwrap();
    assert_eq!(tick.progress.status, Status::Detecting);
    assert_eq!(tick.progress.seen, 1);
}

// =============================================================================
// Test 6: Error handling
// =============================================================================

#[test]
fn test_integration_ordering_violation_leaves_state_intact() {
    let mut session = Session::new(TrackerConfig::default()).unwrap();
    session.tick(&[det("AS", 0.9)], 5.0, true).unwrap();

    let err = session.tick(&[det("KD", 0.9)], 4.0, true).unwrap_err();
    assert_eq!(err, Error::NonMonotonicTimestamp { previous: 5.0, now: 4.0 });
    assert!(!session.ever_seen().contains(card("KD")));

    // Upstream outage: no ticks for a while, then stale cards keep fading
    let tick = session.tick(&[], 5.4, true).unwrap();
    assert_relative_eq!(tick.states[&card("AS")].intensity, 0.45, epsilon = 1e-9);
}

#[test]
fn test_integration_unrecognized_labels_are_dropped() {
    let mut session = Session::new(TrackerConfig::default()).unwrap();

    let raw = cardwatch::collapse_max_confidence(vec![
        RawDetection::new("QS", 0.6),
        RawDetection::new("back", 0.99),
        RawDetection::new("QS", 0.92),
    ]);
    let tick = session.tick_raw(&raw, 0.0, true).unwrap();

    assert_eq!(tick.states.len(), 1);
    assert_relative_eq!(tick.states[&card("QS")].intensity, 0.92, epsilon = 1e-10);
    assert_eq!(session.ever_seen().len(), 1);
}

#[test]
fn test_integration_collapse_keeps_max_across_label_case() {
    let mut session = Session::new(TrackerConfig::default()).unwrap();

    let raw = cardwatch::collapse_max_confidence(vec![
        RawDetection::new("AS", 0.95),
        RawDetection::new("as", 0.40),
    ]);
    let tick = session.tick_raw(&raw, 0.0, true).unwrap();

    assert_relative_eq!(tick.states[&card("AS")].intensity, 0.95, epsilon = 1e-10);
}

#[test]
fn test_integration_collapse_recovers_from_nan_confidence() {
    let mut session = Session::new(TrackerConfig::default()).unwrap();

    let raw = cardwatch::collapse_max_confidence(vec![
        RawDetection::new("KH", f64::NAN),
        RawDetection::new("KH", 0.9),
    ]);
    let tick = session.tick_raw(&raw, 0.0, true).unwrap();

    assert_eq!(tick.states.len(), 1);
    assert_relative_eq!(tick.states[&card("KH")].intensity, 0.9, epsilon = 1e-10);
}

// =============================================================================
// Test 7: Skins over a live session
// =============================================================================

#[test]
fn test_integration_skin_switch_does_not_touch_state() {
    let mut session = Session::new(TrackerConfig::default()).unwrap();
    session.tick(&[det("AH", 0.9), det("KC", 0.3)], 0.0, true).unwrap();
    session.tick(&[det("AH", 0.9)], 0.9, true).unwrap();

    let before = session.last_states().clone();
    let glyph = session.render(SkinKind::Glyph);
    let pictorial = session.render(SkinKind::Pictorial);
    assert_eq!(session.last_states(), &before);

    let total: usize = glyph.iter().map(|p| p.tiles.len()).sum();
    assert_eq!(total, 52);

    // Clubs: KC expired so it is seen, not active
    let king_clubs = &glyph[0].tiles[12];
    assert_eq!(king_clubs.card, card("KC"));
    assert!(king_clubs.appearance.is_seen());

    // Hearts: AH active in both skins
    assert!(glyph[2].tiles[0].appearance.is_active());
    assert!(pictorial[2].tiles[0].appearance.is_active());
    assert_eq!(glyph[2].header.seen, 1);
    assert_eq!(pictorial[3].tiles[0].appearance, cardwatch::Appearance::Unknown);
}
