#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Self-contained ML-KEM timing probe.
//!
//! Runs one complete keygen, encapsulate, decapsulate cycle at each FIPS 203
//! strength and prints the bracketed transcript the harness parses:
//!
//! ```text
//! Benchmarking Kyber-512
//! Total time: 241.37µs
//! ```
//!
//! A strength whose shared secrets disagree prints nothing for that block
//! and the probe exits non-zero; the harness still parses whatever was
//! printed.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::anyhow;
use fips203::ml_kem_512;
use fips203::ml_kem_768;
use fips203::ml_kem_1024;
use fips203::traits::{Decaps, Encaps, KeyGen, SerDes};
use subtle::ConstantTimeEq;

fn main() -> ExitCode {
    let probes: [fn() -> anyhow::Result<()>; 3] = [probe_512, probe_768, probe_1024];
    let mut failed = false;
    for probe in probes {
        if let Err(err) = probe() {
            eprintln!("kemprobe: {err}");
            failed = true;
        }
    }
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn print_block(name: &str, micros: f64) {
    println!("Benchmarking Kyber-{name}");
    println!("Total time: {micros:.2}µs");
}

fn probe_512() -> anyhow::Result<()> {
    let started = Instant::now();
    let (ek, dk) = <ml_kem_512::KG as KeyGen>::try_keygen()
        .map_err(|e| anyhow!("ML-KEM-512 keygen failed: {e}"))?;
    let (ss_sender, ct) =
        ek.try_encaps().map_err(|e| anyhow!("ML-KEM-512 encaps failed: {e}"))?;
    let ss_receiver =
        dk.try_decaps(&ct).map_err(|e| anyhow!("ML-KEM-512 decaps failed: {e}"))?;
    let elapsed = started.elapsed();

    if !bool::from(ss_sender.into_bytes().ct_eq(&ss_receiver.into_bytes())) {
        return Err(anyhow!("ML-KEM-512 shared secrets do not match"));
    }
    print_block("512", elapsed.as_secs_f64() * 1e6);
    Ok(())
}

fn probe_768() -> anyhow::Result<()> {
    let started = Instant::now();
    let (ek, dk) = <ml_kem_768::KG as KeyGen>::try_keygen()
        .map_err(|e| anyhow!("ML-KEM-768 keygen failed: {e}"))?;
    let (ss_sender, ct) =
        ek.try_encaps().map_err(|e| anyhow!("ML-KEM-768 encaps failed: {e}"))?;
    let ss_receiver =
        dk.try_decaps(&ct).map_err(|e| anyhow!("ML-KEM-768 decaps failed: {e}"))?;
    let elapsed = started.elapsed();

    if !bool::from(ss_sender.into_bytes().ct_eq(&ss_receiver.into_bytes())) {
        return Err(anyhow!("ML-KEM-768 shared secrets do not match"));
    }
    print_block("768", elapsed.as_secs_f64() * 1e6);
    Ok(())
}

fn probe_1024() -> anyhow::Result<()> {
    let started = Instant::now();
    let (ek, dk) = <ml_kem_1024::KG as KeyGen>::try_keygen()
        .map_err(|e| anyhow!("ML-KEM-1024 keygen failed: {e}"))?;
    let (ss_sender, ct) =
        ek.try_encaps().map_err(|e| anyhow!("ML-KEM-1024 encaps failed: {e}"))?;
    let ss_receiver =
        dk.try_decaps(&ct).map_err(|e| anyhow!("ML-KEM-1024 decaps failed: {e}"))?;
    let elapsed = started.elapsed();

    if !bool::from(ss_sender.into_bytes().ct_eq(&ss_receiver.into_bytes())) {
        return Err(anyhow!("ML-KEM-1024 shared secrets do not match"));
    }
    print_block("1024", elapsed.as_secs_f64() * 1e6);
    Ok(())
}
