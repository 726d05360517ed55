//! Integration tests for the timing wrapper and result types together.

use std::time::Duration;

use bench_core::{
    BenchError, DurationSeconds, ExtraLatency, ResultSet, Strength, TimedOperation,
};

#[test]
fn three_timed_operations_assemble_into_a_result_set() {
    let timed = TimedOperation::new();
    let mut collected = Vec::new();
    for label in ["case small", "case medium", "case large"] {
        let measured = timed.run(label, || Ok(())).expect("noop case cannot fail");
        collected.push(measured);
    }

    let set = ResultSet::from_collected(&collected);
    assert!(!set.is_sentinel());
    for strength in Strength::ALL {
        assert!(set.get(strength).seconds() >= 0.0);
    }
}

#[test]
fn failed_case_leaves_no_measurement_behind() {
    let timed = TimedOperation::new();
    let mut collected = vec![DurationSeconds::from_micros(10.0)];

    let second = timed.run("broken case", || {
        Err(BenchError::CorrectnessViolation {
            operation: "broken case".to_string(),
            detail: "postcondition failed".to_string(),
        })
    });
    assert!(second.is_err());

    // Only the first case contributed; the set collapses to the sentinel.
    assert_eq!(ResultSet::from_collected(&collected), ResultSet::SENTINEL);
    collected.clear();
    assert_eq!(ResultSet::from_collected(&collected), ResultSet::SENTINEL);
}

#[test]
fn synthetic_pad_is_visible_in_the_measurement() {
    let padded = TimedOperation::with_latency(ExtraLatency::Fixed(Duration::from_millis(30)));
    let bare = TimedOperation::new();

    let padded_seconds = padded.run("padded", || Ok(())).expect("noop").seconds();
    let bare_seconds = bare.run("bare", || Ok(())).expect("noop").seconds();

    assert!(padded_seconds >= 0.030);
    assert!(bare_seconds < padded_seconds);
}
