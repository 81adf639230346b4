//! Property-based tests for classification and dispatch.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use thermowatch::core::{classify, Classification, MonitorState, Thresholds};
use thermowatch::events::EventKind;
use thermowatch::monitor::SensorMonitor;
use thermowatch::sinks::{CoolingMechanism, CoolingSwitch};
use thermowatch::source::Readings;

const WARNING: f64 = 20.0;
const EMERGENCY: f64 = 75.0;

fn thresholds() -> Thresholds {
    Thresholds::new(WARNING, EMERGENCY).unwrap()
}

prop_compose! {
    fn below_warning()(value in -50.0..WARNING) -> f64 {
        value
    }
}

prop_compose! {
    fn warning_band()(value in WARNING..EMERGENCY) -> f64 {
        value
    }
}

prop_compose! {
    fn emergency_band()(value in EMERGENCY..200.0) -> f64 {
        value
    }
}

prop_compose! {
    fn arbitrary_reading()(value in -50.0..200.0f64) -> f64 {
        value
    }
}

fn run_and_collect(values: Vec<f64>) -> Vec<EventKind> {
    let mut monitor = SensorMonitor::new(thresholds());
    let seen = Arc::new(Mutex::new(Vec::new()));
    for kind in EventKind::ALL {
        let seen = Arc::clone(&seen);
        monitor.subscribe(kind, move |event| {
            seen.lock().unwrap().push(event.kind());
            Ok(())
        });
    }
    monitor.run(&mut Readings::new(values)).unwrap();
    let kinds = seen.lock().unwrap().clone();
    kinds
}

proptest! {
    #[test]
    fn low_samples_without_excursion_are_silent(
        values in prop::collection::vec(below_warning(), 0..20)
    ) {
        let mut flag = false;
        for value in &values {
            let (verdict, next) = classify(*value, &thresholds(), flag);
            prop_assert_eq!(verdict, Classification::NoChange);
            flag = next;
        }
        prop_assert!(!flag);
        prop_assert!(run_and_collect(values).is_empty());
    }

    #[test]
    fn emergency_samples_always_emit_and_set_flag(
        value in emergency_band(),
        prior in any::<bool>()
    ) {
        let (verdict, flag) = classify(value, &thresholds(), prior);
        prop_assert_eq!(verdict, Classification::Emergency);
        prop_assert!(flag);
    }

    #[test]
    fn warning_band_is_level_triggered(
        values in prop::collection::vec(warning_band(), 1..20)
    ) {
        let count = values.len();
        let kinds = run_and_collect(values);

        prop_assert_eq!(kinds.len(), count);
        prop_assert!(kinds.iter().all(|k| *k == EventKind::ReachedWarning));
    }

    #[test]
    fn fell_below_is_edge_triggered(
        high in warning_band(),
        lows in prop::collection::vec(below_warning(), 1..20)
    ) {
        let mut values = vec![high];
        values.extend(lows);

        let kinds = run_and_collect(values);

        prop_assert_eq!(kinds, vec![EventKind::ReachedWarning, EventKind::FellBelowWarning]);
    }

    #[test]
    fn at_most_one_event_per_sample(
        values in prop::collection::vec(arbitrary_reading(), 0..50)
    ) {
        let count = values.len();
        let kinds = run_and_collect(values);

        prop_assert!(kinds.len() <= count);
    }

    #[test]
    fn fell_below_never_fires_twice_in_a_row(
        values in prop::collection::vec(arbitrary_reading(), 0..50)
    ) {
        let kinds = run_and_collect(values);

        for pair in kinds.windows(2) {
            prop_assert!(
                !(pair[0] == EventKind::FellBelowWarning && pair[1] == EventKind::FellBelowWarning)
            );
        }
    }

    #[test]
    fn observe_is_pure(value in arbitrary_reading(), prior in any::<bool>()) {
        let state = if prior {
            MonitorState::new().observe(WARNING, &thresholds()).1
        } else {
            MonitorState::new()
        };

        let first = state.observe(value, &thresholds());
        let second = state.observe(value, &thresholds());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn flag_tracks_last_sample_band(
        values in prop::collection::vec(arbitrary_reading(), 1..50)
    ) {
        let mut state = MonitorState::new();
        for value in &values {
            state = state.observe(*value, &thresholds()).1;
        }

        let last = *values.last().unwrap();
        prop_assert_eq!(state.has_reached_warning(), last >= WARNING);
    }

    #[test]
    fn repeated_activation_matches_single(times in 1..10usize) {
        let once = CoolingSwitch::new();
        once.activate();

        let many = CoolingSwitch::new();
        for _ in 0..times {
            many.activate();
        }

        prop_assert_eq!(once.is_active(), many.is_active());
        prop_assert_eq!(once.switch_count(), many.switch_count());
    }
}
