#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Logging setup for the benchmark binaries.
//!
//! Library crates emit structured `tracing` events; binaries install the
//! subscriber once at startup. Verbosity is controlled through the standard
//! `RUST_LOG` environment filter, defaulting to info-level events from the
//! workspace crates only.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "kembench=info,bench_core=info,bench_harness=info,bench_primitives=info";

/// Initializes the global tracing subscriber.
///
/// Call once per process, from a binary. Uses the `RUST_LOG` environment
/// filter when present, otherwise the workspace default, with a compact
/// single-line format.
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()?;

    info!("kembench logging initialized");
    Ok(())
}
