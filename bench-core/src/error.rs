#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Error types for the benchmark harness.
//!
//! Every fallible operation in the workspace returns [`BenchError`] through
//! the crate-wide [`Result`] alias. An extraction shortfall is deliberately
//! *not* represented here: finding the wrong number of timings in external
//! output is recovered locally with the `[0, 0, 0]` sentinel result, while
//! the variants below all abort the run when they reach the suite.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors produced by the benchmark harness.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A primitive's own consistency check failed (mismatched decrypt,
    /// mismatched shared secret). Fatal for the whole run: a timing taken
    /// from a broken primitive must never reach the result table.
    #[error("correctness violation in {operation}: {detail}")]
    CorrectnessViolation {
        /// Label of the measured operation.
        operation: String,
        /// What failed to match.
        detail: String,
    },

    /// The external benchmark executable could not be started.
    #[error("failed to launch benchmark tool {program:?}: {source}")]
    ProcessLaunch {
        /// Path of the executable that failed to start.
        program: PathBuf,
        /// Underlying launch error.
        #[source]
        source: std::io::Error,
    },

    /// The external benchmark tool exceeded the configured bounded wait and
    /// was killed. Only reachable when a timeout is configured; the default
    /// is to wait indefinitely.
    #[error("benchmark tool {program:?} did not finish within {limit:?}")]
    TimeoutExceeded {
        /// Path of the executable that was killed.
        program: PathBuf,
        /// The configured wait limit.
        limit: Duration,
    },

    /// An invoked crypto backend reported an internal failure that is not a
    /// correctness mismatch (key generation, encryption, decryption, or
    /// agreement refused by the backend).
    #[error("{operation} failed: {detail}")]
    OperationFailed {
        /// Label of the failing operation.
        operation: String,
        /// Backend-reported detail.
        detail: String,
    },

    /// I/O failure while collecting external tool output after launch.
    #[error("I/O error while capturing benchmark output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;
