#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Wall-clock timing of single cryptographic operations.
//!
//! [`TimedOperation`] is the correctness-preserving measurement wrapper: it
//! records the instant immediately before and after one zero-argument
//! operation and reports the elapsed time in seconds rounded to 6 decimal
//! places. The operation body carries its own correctness postcondition and
//! reports a violation as an error, in which case no duration is produced.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::Result;
use crate::latency::ExtraLatency;
use crate::types::DurationSeconds;

/// A simple high-resolution timer for measuring one operation.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    started: Instant,
}

impl Timer {
    /// Starts a new timer immediately.
    #[must_use]
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }

    /// Elapsed wall-clock time since the timer started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Correctness-preserving timing wrapper around one in-process operation.
///
/// Measurements are single-shot: no warm-up, no repetition, no retry. A
/// failed postcondition aborts the measurement entirely and no duration is
/// reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedOperation {
    latency: ExtraLatency,
}

impl TimedOperation {
    /// Wrapper with no synthetic pad.
    #[must_use]
    pub fn new() -> Self {
        Self { latency: ExtraLatency::Disabled }
    }

    /// Wrapper that applies `latency` inside every timed window.
    #[must_use]
    pub const fn with_latency(latency: ExtraLatency) -> Self {
        Self { latency }
    }

    /// Runs `operation` and returns its wall-clock cost in seconds, rounded
    /// to 6 decimal places.
    ///
    /// The synthetic pad (if configured) executes after the operation body
    /// but inside the timed window. The measured value is never negative.
    ///
    /// # Errors
    ///
    /// Propagates the operation's own failure unchanged, including
    /// [`BenchError::CorrectnessViolation`](crate::error::BenchError::CorrectnessViolation);
    /// no duration is reported for a failed operation.
    pub fn run<F>(&self, label: &str, operation: F) -> Result<DurationSeconds>
    where
        F: FnOnce() -> Result<()>,
    {
        let timer = Timer::start();
        operation()?;
        self.latency.apply();
        let measured = DurationSeconds::from_elapsed(timer.elapsed());
        debug!(operation = label, seconds = measured.seconds(), "timed operation complete");
        Ok(measured)
    }
}
