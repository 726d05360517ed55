//! Integration tests running each in-process family under the timing wrapper,
//! the way the suite drives them.

use bench_core::{ExtraLatency, ResultSet, TimedOperation};
use bench_primitives::{dh_exchange, ecdh_exchange, rsa_roundtrip, EcCurve};

#[test]
fn ecdh_family_produces_a_full_result_set() {
    let timed = TimedOperation::new();
    let mut collected = Vec::new();
    for curve in EcCurve::ALL {
        let label = format!("ECDH {}", curve.name());
        let measured = timed.run(&label, || ecdh_exchange(curve)).expect("exchange");
        collected.push(measured);
    }

    let set = ResultSet::from_collected(&collected);
    assert!(!set.is_sentinel());
}

#[test]
fn dh_family_zero_fills_its_missing_strengths() {
    let timed = TimedOperation::new();
    let measured = timed.run("DH 1024", dh_exchange).expect("exchange");

    let set = ResultSet::from_single(measured);
    let values = set.values();
    assert!(values[0].seconds() > 0.0);
    assert!(values[1].is_zero());
    assert!(values[2].is_zero());
}

#[test]
fn rsa_roundtrip_times_cleanly_at_the_smallest_size() {
    let timed = TimedOperation::with_latency(ExtraLatency::Disabled);
    let measured = timed.run("RSA-1024", || rsa_roundtrip(1024)).expect("roundtrip");
    assert!(measured.seconds() > 0.0);
}

#[test]
#[ignore = "2048- and 4096-bit key generation takes minutes in debug builds"]
fn rsa_family_produces_a_full_result_set() {
    let timed = TimedOperation::new();
    let mut collected = Vec::new();
    for bits in bench_primitives::RSA_KEY_SIZES {
        let label = format!("RSA-{bits}");
        let measured = timed.run(&label, || rsa_roundtrip(bits)).expect("roundtrip");
        collected.push(measured);
    }

    assert!(!ResultSet::from_collected(&collected).is_sentinel());
}
