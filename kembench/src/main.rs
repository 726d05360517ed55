#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Command-line entry point for the benchmark suite.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::anyhow;
use chrono::Utc;
use clap::Parser;

use kembench::{format_time, render_table, BenchmarkSuite, ExtraLatency, SuiteConfig};

/// Comparative key-establishment benchmarks: RSA, ECDH, DH, and ML-KEM.
#[derive(Parser, Debug)]
#[command(name = "kembench", version, about)]
struct Cli {
    /// Lattice KEM tool printing the bracketed transcript.
    ///
    /// Defaults to the kemprobe binary installed next to kembench.
    #[arg(long, value_name = "PATH")]
    kem_tool: Option<PathBuf>,

    /// Second lattice tool printing one `Total time:` line per strength,
    /// recorded as its own family.
    #[arg(long, value_name = "PATH")]
    rival_tool: Option<PathBuf>,

    /// Kill an external tool that runs longer than this many seconds.
    #[arg(long, value_name = "SECONDS")]
    timeout_secs: Option<u64>,

    /// Extra latency folded into every timed window, in microseconds.
    /// Zero disables it.
    #[arg(long, value_name = "MICROS", default_value_t = 1)]
    synthetic_latency_us: u64,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("kembench: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    kembench::init_tracing().map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    let mut config = SuiteConfig::new()
        .with_kem_tool(cli.kem_tool.unwrap_or_else(default_kem_tool))
        .with_extra_latency(latency_from_micros(cli.synthetic_latency_us));
    if let Some(rival) = cli.rival_tool {
        config = config.with_rival_tool(rival);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    println!("Running benchmarks...");
    let started = Instant::now();
    let table = BenchmarkSuite::new(config).run()?;
    let total = started.elapsed();

    print!("{}", render_table(&table, Utc::now()));
    println!("Total suite time: {}", format_time(total.as_secs_f64()));
    Ok(())
}

/// Looks for kemprobe next to this binary, falling back to `PATH` lookup.
fn default_kem_tool() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("kemprobe")))
        .unwrap_or_else(|| PathBuf::from("kemprobe"))
}

fn latency_from_micros(micros: u64) -> ExtraLatency {
    if micros == 0 { ExtraLatency::Disabled } else { ExtraLatency::fixed_micros(micros) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_latency_flag_disables_the_strategy() {
        assert_eq!(latency_from_micros(0), ExtraLatency::Disabled);
        assert_eq!(latency_from_micros(1), ExtraLatency::fixed_micros(1));
    }

    #[test]
    fn cli_parses_its_flags() {
        let cli = Cli::try_parse_from([
            "kembench",
            "--kem-tool",
            "/opt/probe",
            "--rival-tool",
            "/opt/rival",
            "--timeout-secs",
            "90",
            "--synthetic-latency-us",
            "0",
        ])
        .unwrap();

        assert_eq!(cli.kem_tool, Some(PathBuf::from("/opt/probe")));
        assert_eq!(cli.rival_tool, Some(PathBuf::from("/opt/rival")));
        assert_eq!(cli.timeout_secs, Some(90));
        assert_eq!(cli.synthetic_latency_us, 0);
    }

    #[test]
    fn latency_defaults_to_one_microsecond() {
        let cli = Cli::try_parse_from(["kembench"]).unwrap();
        assert_eq!(cli.synthetic_latency_us, 1);
        assert!(cli.kem_tool.is_none());
    }
}
