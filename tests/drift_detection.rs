//! End-to-end drift detector scenarios on longer streams.

use deriva::drift::{AdaptiveWidthDetector, DriftConfig};

/// Stationary high-variance baseline: +15/-15 alternating.
fn feed_alternating(detector: &mut AdaptiveWidthDetector, steps: usize) {
    for i in 0..steps {
        detector.add_element(if i % 2 == 0 { 15.0 } else { -15.0 });
    }
}

/// Stationary low-variance baseline: -1, 0, 1 repeating.
fn feed_cycle(detector: &mut AdaptiveWidthDetector, steps: usize) {
    const CYCLE: [f64; 3] = [-1.0, 0.0, 1.0];
    for i in 0..steps {
        detector.add_element(CYCLE[i % 3]);
    }
}

#[test]
fn spike_after_high_variance_baseline_sets_both_flags() {
    let mut detector = AdaptiveWidthDetector::new();
    feed_alternating(&mut detector, 200);

    // The alternating signal keeps the target width pinned at max_width, so
    // the buffer saturates at 100 elements and the threshold gate is open.
    assert!(!detector.detected_warning_zone());
    assert!(!detector.detected_change());
    assert_eq!(detector.buffer_len(), 100);

    detector.add_element(1000.0);
    assert!(detector.detected_warning_zone());
    assert!(detector.detected_change());
    assert_eq!(detector.last_change(), 100);
}

#[test]
fn warning_and_drift_latch_independently() {
    let mut detector = AdaptiveWidthDetector::new();
    feed_cycle(&mut detector, 60);

    // Moderate outlier: crosses 2 sigma but not 3 sigma.
    detector.add_element(2.4);
    assert!(detector.detected_warning_zone());
    assert!(!detector.detected_change());

    // Let the outlier age out of the buffer, then hit the drift threshold.
    // The drift check is not gated on the warning flag's history.
    feed_cycle(&mut detector, 60);
    assert!(!detector.detected_change());
    detector.add_element(6.0);
    assert!(detector.detected_change());
    assert!(detector.detected_warning_zone());
}

#[test]
fn reset_rearms_the_one_shot_flags() {
    let mut detector = AdaptiveWidthDetector::new();
    feed_cycle(&mut detector, 60);
    detector.add_element(6.0);
    assert!(detector.detected_change());

    detector.reset();
    assert!(!detector.detected_change());
    assert_eq!(detector.buffer_len(), 0);

    // The same stream trips the detector again after a reset.
    feed_cycle(&mut detector, 60);
    detector.add_element(6.0);
    assert!(detector.detected_change());
}

#[test]
fn custom_bounds_hold_on_constant_stream() {
    let config = DriftConfig {
        min_width: 5,
        max_width: 20,
        ..DriftConfig::default()
    };
    let mut detector = AdaptiveWidthDetector::with_config(config).expect("valid config");
    for _ in 0..100 {
        detector.add_element(1.0);
        assert!(detector.width() >= 5 && detector.width() <= 20);
    }
    assert_eq!(detector.width(), 5);
    assert_eq!(detector.buffer_len(), 5);
    assert!(!detector.detected_warning_zone());
    assert!(!detector.detected_change());
}
